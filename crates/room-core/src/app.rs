//! Application context: one explicitly constructed value owning the scene,
//! camera, pointer, hover and panel state. The web frontend holds it behind
//! `Rc<RefCell<_>>` and hands it to the input handlers and the frame loop.

use crate::camera::{ndc_to_pixels, Camera, CameraPose, Framing, FramingRule, Viewport};
use crate::constants::MAX_PIXEL_RATIO;
use crate::geometry::Part;
use crate::mesh::sort_back_to_front;
use crate::orbit::OrbitControls;
use crate::panel::InfoPanel;
use crate::picking::{client_to_ndc, pick, ClientRect, HoverChange, HoverState, PointerState};
use crate::registry::{ItemId, ItemSpec, PanelContent, Registry};
use crate::scene::{build_room, furniture, RoomShell};
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub framing: FramingRule,
    pub max_pixel_ratio: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            framing: FramingRule::default(),
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }
}

impl AppConfig {
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        device_pixel_ratio.min(self.max_pixel_ratio)
    }
}

/// What changed during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameOutcome {
    pub hover: Option<HoverChange>,
    pub camera_moved: bool,
}

/// Projected position of an item's floating label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub item: ItemId,
    /// CSS pixels from the viewport's top-left; `None` when off-screen.
    pub screen: Option<Vec2>,
    /// Distance from the eye to the anchor.
    pub depth: f32,
}

#[derive(Debug)]
pub struct RoomApp {
    config: AppConfig,
    shell: RoomShell,
    registry: Registry,
    camera: Camera,
    controls: OrbitControls,
    viewport: Viewport,
    pointer: PointerState,
    hover: HoverState,
    panel: InfoPanel,
}

impl RoomApp {
    /// The furnished room.
    pub fn new(config: AppConfig, viewport: Viewport) -> Self {
        Self::with_items(config, viewport, furniture())
    }

    pub fn with_items(
        config: AppConfig,
        viewport: Viewport,
        items: impl IntoIterator<Item = ItemSpec>,
    ) -> Self {
        let mut app = Self {
            config,
            shell: build_room(),
            registry: Registry::with_items(items),
            camera: Camera::default(),
            controls: OrbitControls::new(config.framing.look_at),
            viewport,
            pointer: PointerState::default(),
            hover: HoverState::default(),
            panel: InfoPanel::new(),
        };
        app.resize(viewport);
        app
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn shell(&self) -> &RoomShell {
        &self.shell
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn hovered(&self) -> Option<ItemId> {
        self.hover.hovered()
    }

    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    /// Recompute everything that depends on the viewport size and re-frame
    /// the camera. Calling it again with the same size yields the same pose.
    pub fn resize(&mut self, viewport: Viewport) -> Framing {
        self.viewport = viewport;
        self.camera.aspect = viewport.aspect();
        let framing = self.config.framing.framing_for(viewport);
        self.reset_camera();
        log::info!(
            "[camera] viewport {}x{} framing={:?}",
            viewport.width,
            viewport.height,
            framing
        );
        framing
    }

    pub fn reset_camera(&mut self) -> CameraPose {
        let pose = self.config.framing.pose_for(self.viewport);
        self.controls.reset(pose, &mut self.camera);
        self.camera.pose()
    }

    pub fn set_pointer_ndc(&mut self, ndc: Vec2) {
        self.pointer.ndc = ndc.clamp(Vec2::NEG_ONE, Vec2::ONE);
    }

    pub fn pointer_moved(&mut self, client: Vec2, rect: ClientRect) {
        self.pointer.ndc = client_to_ndc(client, rect);
    }

    /// One picking pass: advance the orbit controls, cast a ray through the
    /// pointer and move the hover highlight if the nearest item changed.
    pub fn frame(&mut self) -> FrameOutcome {
        let camera_moved = self.controls.update(&mut self.camera);
        let ray = self.camera.ray_through_ndc(self.pointer.ndc);
        let target = pick(&self.registry, &ray).map(|hit| hit.item);
        FrameOutcome {
            hover: self.hover.update(target, &mut self.registry),
            camera_moved,
        }
    }

    /// A click on the scene. Returns the content shown when it opened the panel.
    pub fn click(&mut self) -> Option<PanelContent> {
        self.panel.click(self.hover.hovered(), &self.registry).cloned()
    }

    pub fn close_panel(&mut self) -> bool {
        self.panel.close()
    }

    pub fn label_placements(&self) -> Vec<LabelPlacement> {
        self.registry
            .iter()
            .map(|(id, item)| {
                let anchor = item.label_anchor();
                let screen = self
                    .camera
                    .project(anchor)
                    .map(|ndc| ndc_to_pixels(ndc.truncate(), self.viewport));
                LabelPlacement {
                    item: id,
                    screen,
                    depth: anchor.distance(self.camera.eye),
                }
            })
            .collect()
    }

    /// Opaque parts (static after startup).
    pub fn opaque_parts(&self) -> Vec<Part> {
        self.all_parts()
            .filter(|p| !p.material.is_translucent())
            .collect()
    }

    /// Translucent parts with current ring opacities, sorted far-to-near.
    pub fn translucent_parts(&self) -> Vec<Part> {
        let mut parts: Vec<Part> = self
            .all_parts()
            .filter(|p| p.material.is_translucent())
            .collect();
        sort_back_to_front(&mut parts, self.camera.eye);
        parts
    }

    fn all_parts(&self) -> impl Iterator<Item = Part> + '_ {
        let items = self
            .registry
            .iter()
            .flat_map(|(_, it)| it.world_parts().chain(std::iter::once(it.ring_part())));
        self.shell.parts.iter().copied().chain(items)
    }
}
