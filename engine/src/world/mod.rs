//! World Module
//!
//! State of the object the camera follows. The camera only reads it.

pub mod ship;

pub use ship::{ShipControls, ShipTuning, TrackedObject};
