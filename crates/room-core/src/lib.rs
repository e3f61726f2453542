pub mod app;
pub mod camera;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod lifecycle;
pub mod mesh;
pub mod orbit;
pub mod panel;
pub mod picking;
pub mod registry;
pub mod scene;

pub use app::*;
pub use camera::*;
pub use error::SetupError;
pub use lifecycle::LoopHandle;
pub use panel::InfoPanel;
pub use picking::{client_to_ndc, ClientRect, Cursor, HoverChange};
pub use registry::{InteractiveItem, ItemId, ItemSpec, PanelContent, Registry};

// Scene shader bundled as a string constant
pub static ROOM_WGSL: &str = include_str!("../../../shaders/room.wgsl");
