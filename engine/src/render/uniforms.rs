//! Uniform Structs for GPU Shaders
//!
//! Camera data in the layout a WGSL `CameraUniforms` struct expects.

use glam::Mat4;

use crate::camera::{CameraMode, CameraView};

/// Camera uniforms sent to the GPU once per frame.
/// Must match the WGSL struct layout exactly!
///
/// WGSL layout (144 bytes total):
///   offset   0: view (mat4x4<f32>)      = 64 bytes
///   offset  64: view_proj (mat4x4<f32>) = 64 bytes
///   offset 128: eye (vec3<f32>)         = 12 bytes
///   offset 140: mode (u32)              = 4 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 3],
    /// Index of the active mode in [`CameraMode::ALL`]
    pub mode: u32,
}

static_assertions::assert_eq_size!(CameraUniforms, [u8; 144]);

impl Default for CameraUniforms {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            eye: [0.0; 3],
            mode: 0,
        }
    }
}

impl CameraUniforms {
    /// Pack a camera view with the renderer's projection matrix.
    pub fn from_view(view: &CameraView, projection: Mat4) -> Self {
        Self {
            view: view.view.to_cols_array_2d(),
            view_proj: view.view_projection(projection).to_cols_array_2d(),
            eye: view.eye.to_array(),
            mode: mode_index(view.mode),
        }
    }

    /// Raw bytes for a uniform buffer write.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

fn mode_index(mode: CameraMode) -> u32 {
    CameraMode::ALL
        .iter()
        .position(|m| *m == mode)
        .unwrap_or_default() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::build_view_matrix;
    use glam::Vec3;

    #[test]
    fn test_uniforms_pack_view() {
        let eye = Vec3::new(0.0, 1550.0, 5000.0);
        let view = CameraView {
            mode: CameraMode::ThirdPerson,
            eye,
            target: Vec3::ZERO,
            view: build_view_matrix(eye, Vec3::ZERO).unwrap(),
        };
        let projection =
            Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 1.0, 10000.0);

        let uniforms = CameraUniforms::from_view(&view, projection);
        assert_eq!(uniforms.eye, [0.0, 1550.0, 5000.0]);
        assert_eq!(uniforms.mode, 3);
        assert_eq!(uniforms.view, view.view.to_cols_array_2d());
        assert_eq!(uniforms.view_proj, (projection * view.view).to_cols_array_2d());
        assert_eq!(uniforms.as_bytes().len(), 144);
    }

    #[test]
    fn test_default_is_identity() {
        let uniforms = CameraUniforms::default();
        assert_eq!(uniforms.view, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(uniforms.mode, 0);
    }
}
