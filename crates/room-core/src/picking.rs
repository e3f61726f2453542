//! Pointer picking and the hover state machine.

use crate::geometry::Ray;
use crate::registry::{ItemId, Registry, SurfaceId};
use glam::Vec2;

/// Bounding rectangle of the render surface in client (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Map a client-space pointer position to normalized device coordinates.
///
/// The position is clipped to `rect` first. Y is inverted so +1 is the top
/// edge. A degenerate rect maps everything to the centre.
#[inline]
pub fn client_to_ndc(client: Vec2, rect: ClientRect) -> Vec2 {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Vec2::ZERO;
    }
    let u = ((client.x - rect.left) / rect.width).clamp(0.0, 1.0);
    let v = ((client.y - rect.top) / rect.height).clamp(0.0, 1.0);
    Vec2::new(u * 2.0 - 1.0, 1.0 - v * 2.0)
}

/// Latest pointer position in NDC. Written by the input handler, read once
/// per frame by the picking step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub ndc: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub item: ItemId,
    pub surface: SurfaceId,
    pub distance: f32,
}

/// Nearest registered surface along `ray`, resolved to its owning item.
/// Equal distances keep the surface registered first.
pub fn pick(registry: &Registry, ray: &Ray) -> Option<Hit> {
    let mut best: Option<(SurfaceId, f32)> = None;
    for (sid, surface) in registry.surfaces() {
        if let Some(t) = surface.intersect_ray(ray) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((sid, t)),
            }
        }
    }
    let (surface, distance) = best?;
    let item = registry.owner_of(surface)?;
    Some(Hit {
        item,
        surface,
        distance,
    })
}

/// Pointer affordance over the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Pointer,
    Grab,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::Grab => "grab",
        }
    }
}

/// Result of a hover transition; produced only when the target changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverChange {
    pub previous: Option<ItemId>,
    pub current: Option<ItemId>,
    pub cursor: Cursor,
}

/// At most one hovered item at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Option<ItemId>,
}

impl HoverState {
    pub fn hovered(&self) -> Option<ItemId> {
        self.hovered
    }

    /// Move hover to `target`. Clears the previous highlight before setting
    /// the new one, so a single call never leaves two items highlighted.
    /// Returns `None` when the target is unchanged.
    pub fn update(&mut self, target: Option<ItemId>, registry: &mut Registry) -> Option<HoverChange> {
        if self.hovered == target {
            return None;
        }
        let previous = self.hovered;
        if let Some(item) = previous.and_then(|id| registry.get_mut(id)) {
            item.set_highlight(false);
        }
        // a stale handle is treated as "nothing hovered"
        let current = target.filter(|id| registry.get(*id).is_some());
        if let Some(item) = current.and_then(|id| registry.get_mut(id)) {
            item.set_highlight(true);
        }
        self.hovered = current;
        log::debug!("[hover] {:?} -> {:?}", previous, current);
        Some(HoverChange {
            previous,
            current,
            cursor: if current.is_some() {
                Cursor::Pointer
            } else {
                Cursor::Grab
            },
        })
    }
}
