//! View Matrix Assembly
//!
//! Right-handed look-at construction with a world-up of `(0, 1, 0)`.
//! The camera looks down its local -Z axis, matching glam's `look_at_rh`.
//! A view along the vertical axis uses [`VERTICAL_VIEW_UP`] instead, so the
//! top of the screen faces world -Z.

use glam::{Mat4, Vec3};

use super::CameraMode;
use crate::error::CameraError;

/// World-up used for every view matrix
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Up vector for views parallel to [`WORLD_UP`]
pub const VERTICAL_VIEW_UP: Vec3 = Vec3::NEG_Z;

/// Build a look-at view matrix from `eye` toward `target`.
///
/// # Errors
/// [`CameraError::DegenerateGeometry`] when `eye == target` or either is not
/// finite. The view direction is undefined there.
pub fn build_view_matrix(eye: Vec3, target: Vec3) -> Result<Mat4, CameraError> {
    let forward = (target - eye).normalize_or_zero();
    if forward == Vec3::ZERO {
        return Err(CameraError::DegenerateGeometry { eye, target });
    }
    // Far from the origin a small horizontal offset rounds away in f32
    let up = if forward.cross(WORLD_UP).length_squared() < 1e-12 {
        VERTICAL_VIEW_UP
    } else {
        WORLD_UP
    };
    Ok(Mat4::look_at_rh(eye, target, up))
}

/// Camera output for one frame, consumed by the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraView {
    /// Mode that produced this view
    pub mode: CameraMode,
    /// Eye position in world space
    pub eye: Vec3,
    /// Look-at point in world space
    pub target: Vec3,
    /// World-to-view transform
    pub view: Mat4,
}

impl CameraView {
    /// Combine with a projection supplied by the render collaborator.
    pub fn view_projection(&self, projection: Mat4) -> Mat4 {
        projection * self.view
    }
}
