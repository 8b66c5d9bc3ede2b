//! Camera Rig
//!
//! Owns the mode selector, the rig configuration and the spring state for the
//! chase camera. Each frame it works out where the eye should be for the
//! active mode, runs the spring when the mode calls for it, and assembles the
//! view matrix.
//!
//! | Mode            | Eye                                         | Look-at              |
//! |-----------------|---------------------------------------------|----------------------|
//! | Fixed           | `fixed_eye`                                 | origin               |
//! | Tracking        | `fixed_eye`                                 | `2 * object position`|
//! | FirstPerson     | object frame `first_person_offset`          | object position      |
//! | ThirdPerson     | spring toward object frame spring offset    | object position      |
//! | TopDownFixed    | `top_down_fixed_eye`                        | origin               |
//! | TopDownCentred  | object frame `top_down_centred_offset`      | object position      |
//!
//! Every rig is an independent value; several can run side by side
//! (split-screen) without sharing state.

use glam::Vec3;

use super::mode::{CameraMode, CameraModeSelector};
use super::spring::{SpringCamera, SpringState};
use super::view::{CameraView, build_view_matrix};
use crate::config::RigConfig;
use crate::error::CameraError;
use crate::world::TrackedObject;

/// Desired eye and look-at point for one mode, before any spring smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub eye: Vec3,
    pub look_at: Vec3,
}

/// Camera rig state
///
/// Input handling happens elsewhere; the rig only receives edge-triggered
/// mode/spring events and the tracked object's state each frame.
#[derive(Clone, Debug)]
pub struct CameraRig {
    config: RigConfig,
    selector: CameraModeSelector,
    chase: SpringCamera,
}

impl CameraRig {
    /// Build a rig, rejecting invalid configuration up front.
    ///
    /// The chase camera starts at rest at `fixed_eye`, the same place the
    /// initial `Fixed` mode shows.
    pub fn new(config: RigConfig) -> Result<Self, CameraError> {
        config.validate()?;
        let chase = SpringCamera::new(config.third_person, SpringState::at_rest(config.fixed_eye));
        Ok(Self {
            selector: CameraModeSelector::new(config.spring_enabled),
            config,
            chase,
        })
    }

    #[inline]
    pub fn config(&self) -> &RigConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.selector.mode()
    }

    #[inline]
    pub fn spring_enabled(&self) -> bool {
        self.selector.spring_enabled()
    }

    /// Physics state of the chase camera.
    #[inline]
    pub fn spring_state(&self) -> &SpringState {
        self.chase.state()
    }

    /// Switch to the next camera mode.
    pub fn advance_mode(&mut self) -> CameraMode {
        self.selector.advance()
    }

    /// Enable or disable the spring for spring-capable modes.
    pub fn toggle_spring(&mut self) -> bool {
        self.selector.toggle_spring()
    }

    /// Put the chase camera at rest on its desired position for `target`.
    pub fn reset(&mut self, target: &TrackedObject) {
        let desired = self.placement(CameraMode::ThirdPerson, target).eye;
        self.chase.reset(desired);
        tracing::debug!(position = ?desired, "chase camera reset");
    }

    /// Unsmoothed eye and look-at for `mode`.
    pub fn placement(&self, mode: CameraMode, target: &TrackedObject) -> Placement {
        let config = &self.config;
        match mode {
            CameraMode::Fixed => Placement {
                eye: config.fixed_eye,
                look_at: Vec3::ZERO,
            },
            // Look-at is the object position added to itself. Kept as the
            // established behaviour of this mode.
            CameraMode::Tracking => Placement {
                eye: config.fixed_eye,
                look_at: target.position + target.position,
            },
            CameraMode::FirstPerson => Placement {
                eye: target.local_to_world(config.first_person_offset),
                look_at: target.position,
            },
            CameraMode::ThirdPerson => Placement {
                eye: target.local_to_world(config.third_person.offset()),
                look_at: target.position,
            },
            CameraMode::TopDownFixed => Placement {
                eye: config.top_down_fixed_eye,
                look_at: Vec3::ZERO,
            },
            CameraMode::TopDownCentred => Placement {
                eye: target.local_to_world(config.top_down_centred_offset),
                look_at: target.position,
            },
        }
    }

    /// Advance one frame and produce the view for the active mode.
    ///
    /// The spring only runs while `ThirdPerson` is active. With the spring
    /// disabled the eye snaps to its desired position and the stored velocity
    /// is left as it was.
    ///
    /// # Errors
    /// - [`CameraError::InvalidTimeStep`] for negative or non-finite `dt`
    /// - [`CameraError::DegenerateGeometry`] if eye and look-at coincide. The
    ///   chase camera keeps its previous state when this is returned.
    pub fn update(&mut self, target: &TrackedObject, dt: f32) -> Result<CameraView, CameraError> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(CameraError::InvalidTimeStep(dt));
        }

        let mode = self.selector.mode();
        let placement = self.placement(mode, target);

        // Chase state is committed only once the view builds
        let mut chase = self.chase.clone();
        let eye = if !mode.uses_spring() {
            placement.eye
        } else if self.selector.spring_enabled() {
            let step = self.clamp_step(dt);
            chase.step(placement.eye, step)
        } else {
            chase.snap(placement.eye)
        };

        let view = build_view_matrix(eye, placement.look_at)?;
        self.chase = chase;
        Ok(CameraView {
            mode,
            eye,
            target: placement.look_at,
            view,
        })
    }

    fn clamp_step(&self, dt: f32) -> f32 {
        match self.config.max_step {
            Some(max) if dt > max => {
                tracing::warn!(dt, max, "frame time exceeds max camera step, clamping");
                max
            }
            _ => dt,
        }
    }
}
