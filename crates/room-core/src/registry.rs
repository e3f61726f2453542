//! Interactive item registry.
//!
//! Registering an item places its model in the world, gives it one ring
//! marker and one floating label that share the item's transform, and adds
//! every surface to the flat pickable list. A reverse index maps each
//! pickable surface back to its owning item, so a hit on any sub-part
//! resolves to the item directly.

use crate::constants::{
    DEFAULT_LABEL_HEIGHT, RING_HEX, RING_INNER_RADIUS, RING_LIFT, RING_OPACITY_HOVER,
    RING_OPACITY_IDLE, RING_OUTER_RADIUS, RING_SEGMENTS,
};
use crate::geometry::{Material, Model, Part, Shape, Surface};
use fnv::FnvHashMap;
use glam::Vec3;

/// Dense handle of a registered item. Stable for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(usize);

/// Everything needed to register one piece of furniture.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSpec {
    pub key: String,
    pub label: String,
    pub summary: String,
    pub link: Option<String>,
    pub model: Model,
    pub position: Vec3,
    pub label_height: f32,
}

impl ItemSpec {
    pub fn new(
        key: impl Into<String>,
        label: impl Into<String>,
        summary: impl Into<String>,
        model: Model,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            summary: summary.into(),
            link: None,
            model,
            position: Vec3::ZERO,
            label_height: DEFAULT_LABEL_HEIGHT,
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_label_height(mut self, height: f32) -> Self {
        self.label_height = height;
        self
    }
}

/// Flat ring under the item; hover state is shown through its opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingMarker {
    pub shape: Shape,
    pub opacity: f32,
}

/// Floating text tag anchored above the item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelMarker {
    pub offset: Vec3,
    pub highlighted: bool,
}

/// Text shown by the info panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelContent {
    pub title: String,
    pub text: String,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractiveItem {
    pub key: String,
    pub label: String,
    pub summary: String,
    pub link: Option<String>,
    /// Local-space model; the item's `position` is its transform.
    pub model: Model,
    pub position: Vec3,
    pub ring: RingMarker,
    pub label_marker: LabelMarker,
}

impl InteractiveItem {
    /// Model parts in world space.
    pub fn world_parts(&self) -> impl Iterator<Item = Part> + '_ {
        self.model.parts.iter().map(|p| p.translated(self.position))
    }

    /// Ring marker in world space, carrying its current opacity.
    pub fn ring_part(&self) -> Part {
        Part {
            shape: self.ring.shape.translated(self.position),
            material: Material::basic(RING_HEX).with_opacity(self.ring.opacity),
        }
    }

    pub fn label_anchor(&self) -> Vec3 {
        self.position + self.label_marker.offset
    }

    pub fn is_highlighted(&self) -> bool {
        self.label_marker.highlighted
    }

    pub fn panel_content(&self) -> PanelContent {
        PanelContent {
            title: self.label.clone(),
            text: self.summary.clone(),
            link: self.link.clone(),
        }
    }

    pub(crate) fn set_highlight(&mut self, on: bool) {
        self.ring.opacity = if on {
            RING_OPACITY_HOVER
        } else {
            RING_OPACITY_IDLE
        };
        self.label_marker.highlighted = on;
    }
}

#[derive(Debug, Default)]
pub struct Registry {
    items: Vec<InteractiveItem>,
    surfaces: Vec<Surface>,
    owners: Vec<ItemId>,
    by_key: FnvHashMap<String, ItemId>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(specs: impl IntoIterator<Item = ItemSpec>) -> Self {
        let mut registry = Self::new();
        for spec in specs {
            registry.register(spec);
        }
        registry
    }

    pub fn register(&mut self, spec: ItemSpec) -> ItemId {
        debug_assert!(!spec.key.is_empty(), "item registered without an id");
        debug_assert!(
            !self.by_key.contains_key(&spec.key),
            "duplicate item id {:?}",
            spec.key
        );
        let id = ItemId(self.items.len());
        let item = InteractiveItem {
            key: spec.key,
            label: spec.label,
            summary: spec.summary,
            link: spec.link,
            model: spec.model,
            position: spec.position,
            ring: RingMarker {
                shape: Shape::Ring {
                    center: Vec3::new(0.0, RING_LIFT, 0.0),
                    inner: RING_INNER_RADIUS,
                    outer: RING_OUTER_RADIUS,
                    segments: RING_SEGMENTS,
                },
                opacity: RING_OPACITY_IDLE,
            },
            label_marker: LabelMarker {
                offset: Vec3::new(0.0, spec.label_height, 0.0),
                highlighted: false,
            },
        };

        for part in item.world_parts() {
            self.surfaces.push(part.shape.surface());
            self.owners.push(id);
        }
        self.surfaces.push(item.ring_part().shape.surface());
        self.owners.push(id);

        log::info!(
            "[registry] {} '{}' at ({:.2},{:.2},{:.2}) parts={}",
            item.key,
            item.label,
            item.position.x,
            item.position.y,
            item.position.z,
            item.model.parts.len()
        );
        self.by_key.insert(item.key.clone(), id);
        self.items.push(item);
        id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&InteractiveItem> {
        self.items.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: ItemId) -> Option<&mut InteractiveItem> {
        self.items.get_mut(id.0)
    }

    pub fn find(&self, key: &str) -> Option<ItemId> {
        self.by_key.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &InteractiveItem)> {
        self.items.iter().enumerate().map(|(i, it)| (ItemId(i), it))
    }

    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces.iter().enumerate().map(|(i, s)| (SurfaceId(i), s))
    }

    pub fn owner_of(&self, surface: SurfaceId) -> Option<ItemId> {
        self.owners.get(surface.0).copied()
    }

    pub fn highlighted(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.iter()
            .filter(|(_, it)| it.is_highlighted())
            .map(|(id, _)| id)
    }
}
