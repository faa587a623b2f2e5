//! Camera Module
//!
//! Camera state and math for the third-person view: the control rotation,
//! aim zoom, spring-arm boom, and the pinhole view the firing pipeline
//! deprojects aim points through. Window-system agnostic.

pub mod boom;
pub mod look;
pub mod view;
pub mod zoom;

pub use boom::{BoomConfig, CameraBoom};
pub use look::{LookConfig, LookController};
pub use view::{CameraView, ScreenProjector, ScreenRay};
pub use zoom::{AimZoom, ZoomConfig};
