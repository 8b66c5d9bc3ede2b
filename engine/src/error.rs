//! Camera Error Types
//!
//! Every fallible camera operation returns [`CameraError`]. Configuration problems
//! surface when a rig is built, geometry and time-step problems surface per frame.

use glam::Vec3;

/// Errors produced by camera construction and per-frame updates.
#[derive(Debug, thiserror::Error)]
pub enum CameraError {
    /// A configuration value is out of range (non-positive mass or stiffness,
    /// negative damping, non-finite components, non-positive step clamp).
    #[error("invalid camera config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// The look-at direction is undefined: eye equals target, or either is
    /// not finite.
    #[error("degenerate camera geometry: eye {eye} looking at {target}")]
    DegenerateGeometry { eye: Vec3, target: Vec3 },

    /// Elapsed time was negative or not finite.
    #[error("invalid time step: {0}")]
    InvalidTimeStep(f32),

    /// Config file could not be read.
    #[error("failed to read camera config: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config file is not valid JSON for [`crate::config::RigConfig`].
    #[error("failed to parse camera config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl CameraError {
    pub(crate) fn config(field: &'static str, value: f32, reason: &'static str) -> Self {
        CameraError::InvalidConfig {
            field,
            value,
            reason,
        }
    }
}
