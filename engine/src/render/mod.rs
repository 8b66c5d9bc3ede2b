//! Render Module
//!
//! GPU-facing data produced from the camera. Pipeline setup belongs to the host.

pub mod uniforms;

pub use uniforms::CameraUniforms;
