//! Input Module
//!
//! Turns raw key and analog events into what the camera and ship consume each
//! frame: edge-triggered camera commands and a normalized steering pair.
//! Decoupled from any windowing system; the host forwards its events here.
//!
//! # Example
//!
//! ```rust,ignore
//! use chase_cam_engine::input::{InputState, KeyCode};
//!
//! let mut input = InputState::new();
//! input.handle_key(KeyCode::Tab, true);
//!
//! let frame = input.frame_input();
//! if frame.advance_mode {
//!     rig.advance_mode();
//! }
//! input.end_frame();
//! ```

pub mod bindings;
pub mod handler;
pub mod keyboard;

pub use bindings::{InputAction, KeyBindings};
pub use handler::{FrameInput, InputState, KeyState};
pub use keyboard::KeyCode;
