//! Camera Module
//!
//! Camera mode selection, spring-damped chase physics and view matrix assembly.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod mode;
pub mod rig;
pub mod spring;
pub mod view;

pub use mode::{CameraMode, CameraModeSelector};
pub use rig::{CameraRig, Placement};
pub use spring::{SpringCamera, SpringConfig, SpringState, integrate};
pub use view::{CameraView, VERTICAL_VIEW_UP, WORLD_UP, build_view_matrix};
