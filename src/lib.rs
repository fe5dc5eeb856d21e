pub mod bounds;
pub mod color;
pub mod config;
pub mod events;
pub mod handles;
pub mod input;
pub mod math;
pub mod proxy_ray;
pub mod resize;
pub mod rig;
pub mod tool_button;
pub mod visuals;
pub mod workspace;

pub use bounds::Bounds;
pub use config::WidgetsConfig;
pub use events::WidgetEvent;
pub use input::{Control, WorkspaceInput};
pub use math::Pose;
pub use resize::ResizeDirection;
pub use rig::{Hand, HapticPulse, HapticSink, PointerResolver};
pub use workspace::WorkspacePanel;
