//! Chase Camera Engine Library
//!
//! A third-person chase camera driven by a damped spring, alongside five
//! closed-form camera modes (fixed, tracking, first-person and two top-down
//! views). The library only computes camera placement; rendering, windowing
//! and audio belong to the host.
//!
//! # Modules
//!
//! - [`camera`] - Mode selection, spring physics and view matrix assembly
//! - [`config`] - Rig tuning, loadable from JSON
//! - [`input`] - Edge-triggered camera commands and normalized steering
//! - [`world`] - The tracked ship
//! - [`render`] - GPU uniform packing for the camera view
//! - [`error`] - Error type shared by all fallible operations
//!
//! # Example
//!
//! ```ignore
//! use chase_cam_engine::camera::CameraRig;
//! use chase_cam_engine::config::RigConfig;
//! use chase_cam_engine::world::{ShipTuning, TrackedObject};
//!
//! let mut rig = CameraRig::new(RigConfig::default())?;
//! let mut ship = TrackedObject::default();
//! let tuning = ShipTuning::default();
//!
//! // Each frame:
//! let frame = input.frame_input();
//! if frame.advance_mode {
//!     rig.advance_mode();
//! }
//! ship.apply_controls(frame.controls, &tuning, dt);
//! let view = rig.update(&ship, dt)?;
//! renderer.set_view(view.view);
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod world;

pub use camera::{CameraMode, CameraRig, CameraView, SpringConfig, SpringState};
pub use config::RigConfig;
pub use error::CameraError;
pub use world::{ShipControls, TrackedObject};
