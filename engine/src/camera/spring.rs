//! Spring Camera Physics
//!
//! Models the chase camera as a damped harmonic oscillator pulled toward a
//! desired eye position. Each frame advances the state with one semi-implicit
//! Euler step: velocity is updated first, then position uses the new velocity.
//!
//! # Physics Model
//!
//! ```text
//! stretch      = position - desired
//! force        = -stiffness * stretch - damping * velocity
//! acceleration = force / mass
//! velocity    += acceleration * dt
//! position    += velocity * dt
//! ```
//!
//! # Stability
//!
//! This is an explicit integrator. Large `dt` relative to the spring's natural
//! period makes the camera overshoot and the oscillation grow. Callers that
//! cannot bound frame time should clamp `dt` first (see
//! [`RigConfig::max_step`](crate::config::RigConfig::max_step)).

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::CameraError;

/// Default spring constant (force per unit displacement)
pub const DEFAULT_STIFFNESS: f32 = 1800.0;
/// Default damping coefficient (force per unit velocity)
pub const DEFAULT_DAMPING: f32 = 600.0;
/// Default effective camera mass
pub const DEFAULT_MASS: f32 = 50.0;
/// Default eye offset behind and above the tracked object, in its local frame
pub const DEFAULT_OFFSET: Vec3 = Vec3::new(0.0, 1550.0, 4000.0);

/// Spring configuration for one spring-capable camera mode.
///
/// Immutable once built: the constructor (and deserialisation) rejects
/// non-positive mass or stiffness, negative damping, and non-finite values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SpringConfigFields", into = "SpringConfigFields")]
pub struct SpringConfig {
    stiffness: f32,
    damping: f32,
    mass: f32,
    offset: Vec3,
}

/// Unchecked field layout used for (de)serialisation.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
struct SpringConfigFields {
    stiffness: f32,
    damping: f32,
    mass: f32,
    offset: Vec3,
}

impl Default for SpringConfigFields {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl TryFrom<SpringConfigFields> for SpringConfig {
    type Error = CameraError;

    fn try_from(fields: SpringConfigFields) -> Result<Self, Self::Error> {
        SpringConfig::new(fields.stiffness, fields.damping, fields.mass, fields.offset)
    }
}

impl From<SpringConfig> for SpringConfigFields {
    fn from(config: SpringConfig) -> Self {
        Self {
            stiffness: config.stiffness,
            damping: config.damping,
            mass: config.mass,
            offset: config.offset,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            mass: DEFAULT_MASS,
            offset: DEFAULT_OFFSET,
        }
    }
}

impl SpringConfig {
    /// Build a validated spring configuration.
    ///
    /// # Errors
    /// [`CameraError::InvalidConfig`] if `stiffness <= 0`, `damping < 0`,
    /// `mass <= 0`, or any component is NaN or infinite.
    pub fn new(stiffness: f32, damping: f32, mass: f32, offset: Vec3) -> Result<Self, CameraError> {
        if !stiffness.is_finite() || stiffness <= 0.0 {
            return Err(CameraError::config("stiffness", stiffness, "must be finite and > 0"));
        }
        if !damping.is_finite() || damping < 0.0 {
            return Err(CameraError::config("damping", damping, "must be finite and >= 0"));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(CameraError::config("mass", mass, "must be finite and > 0"));
        }
        if !offset.is_finite() {
            let bad = offset.to_array().into_iter().find(|c| !c.is_finite()).unwrap_or(f32::NAN);
            return Err(CameraError::config("offset", bad, "components must be finite"));
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
            offset,
        })
    }

    /// Same tuning with a different eye offset.
    pub fn with_offset(self, offset: Vec3) -> Result<Self, CameraError> {
        Self::new(self.stiffness, self.damping, self.mass, offset)
    }

    #[inline]
    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    #[inline]
    pub fn damping(&self) -> f32 {
        self.damping
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Eye offset in the tracked object's local frame
    #[inline]
    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    /// True when `damping² >= 4 * stiffness * mass`: the continuous system
    /// settles without oscillating.
    pub fn is_critically_or_over_damped(&self) -> bool {
        self.damping * self.damping >= 4.0 * self.stiffness * self.mass
    }
}

/// Mutable physics state carried across frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    /// Eye position in world space
    pub position: Vec3,
    /// Eye velocity in world space
    pub velocity: Vec3,
}

impl SpringState {
    /// State at rest at `position`.
    pub fn at_rest(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
        }
    }
}

/// Advance `state` one semi-implicit Euler step toward `desired`.
///
/// `dt == 0` leaves the state unchanged. `dt` is assumed non-negative and
/// finite; [`CameraRig`](super::CameraRig) checks that before calling.
pub fn integrate(state: &mut SpringState, config: &SpringConfig, desired: Vec3, dt: f32) {
    let stretch = state.position - desired;
    let force = -config.stiffness * stretch - config.damping * state.velocity;
    let acceleration = force / config.mass;

    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;
}

/// A spring configuration paired with the state it drives.
#[derive(Clone, Debug, PartialEq)]
pub struct SpringCamera {
    config: SpringConfig,
    state: SpringState,
}

impl SpringCamera {
    pub fn new(config: SpringConfig, state: SpringState) -> Self {
        Self { config, state }
    }

    #[inline]
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> &SpringState {
        &self.state
    }

    /// Spring enabled: integrate one step toward `desired`.
    pub fn step(&mut self, desired: Vec3, dt: f32) -> Vec3 {
        integrate(&mut self.state, &self.config, desired, dt);
        tracing::trace!(
            position = ?self.state.position,
            velocity = ?self.state.velocity,
            dt,
            "spring step"
        );
        self.state.position
    }

    /// Spring disabled: jump to `desired`. Velocity is kept, so re-enabling
    /// the spring resumes with whatever velocity was held at that moment.
    pub fn snap(&mut self, desired: Vec3) -> Vec3 {
        self.state.position = desired;
        self.state.position
    }

    /// Place the eye at `desired` with zero velocity.
    pub fn reset(&mut self, desired: Vec3) {
        self.state = SpringState::at_rest(desired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_reference_tuning() {
        let config = SpringConfig::default();
        assert_eq!(config.stiffness(), 1800.0);
        assert_eq!(config.damping(), 600.0);
        assert_eq!(config.mass(), 50.0);
        // 600² == 4 * 1800 * 50
        assert!(config.is_critically_or_over_damped());
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        let err = SpringConfig::new(1800.0, 600.0, 0.0, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, CameraError::InvalidConfig { field: "mass", .. }));
        assert!(SpringConfig::new(1800.0, 600.0, -1.0, Vec3::ZERO).is_err());
    }

    #[test]
    fn test_rejects_non_positive_stiffness() {
        let err = SpringConfig::new(0.0, 600.0, 50.0, Vec3::ZERO).unwrap_err();
        assert!(matches!(err, CameraError::InvalidConfig { field: "stiffness", .. }));
    }

    #[test]
    fn test_rejects_negative_damping_but_allows_zero() {
        assert!(SpringConfig::new(1800.0, -0.5, 50.0, Vec3::ZERO).is_err());
        assert!(SpringConfig::new(1800.0, 0.0, 50.0, Vec3::ZERO).is_ok());
    }

    #[test]
    fn test_rejects_non_finite_offset() {
        let err = SpringConfig::new(1.0, 1.0, 1.0, Vec3::new(0.0, f32::INFINITY, 0.0)).unwrap_err();
        assert!(matches!(err, CameraError::InvalidConfig { field: "offset", .. }));
    }

    #[test]
    fn test_with_offset_keeps_tuning() {
        let config = SpringConfig::default().with_offset(Vec3::new(0.0, 10.0, 20.0)).unwrap();
        assert_eq!(config.offset(), Vec3::new(0.0, 10.0, 20.0));
        assert_eq!(config.stiffness(), DEFAULT_STIFFNESS);

        let camera = SpringCamera::new(config, SpringState::default());
        assert_eq!(camera.config().mass(), DEFAULT_MASS);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let config = SpringConfig::default();
        let original = SpringState {
            position: Vec3::new(3.0, -2.0, 7.5),
            velocity: Vec3::new(-10.0, 4.0, 0.25),
        };
        let mut state = original;
        integrate(&mut state, &config, Vec3::new(100.0, 0.0, -50.0), 0.0);
        assert_eq!(state, original);
    }

    #[test]
    fn test_at_rest_on_target_stays_put() {
        let config = SpringConfig::default();
        let target = Vec3::new(1.0, 2.0, 3.0);
        let mut state = SpringState::at_rest(target);
        for _ in 0..10 {
            integrate(&mut state, &config, target, 1.0 / 60.0);
        }
        assert_eq!(state.position, target);
        assert_eq!(state.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_velocity_updated_before_position() {
        // With zero initial velocity an explicit Euler step would leave the
        // position unchanged; semi-implicit Euler moves it immediately.
        let config = SpringConfig::new(100.0, 0.0, 1.0, Vec3::ZERO).unwrap();
        let mut state = SpringState::at_rest(Vec3::X);
        integrate(&mut state, &config, Vec3::ZERO, 0.1);
        assert_eq!(state.velocity, Vec3::new(-10.0, 0.0, 0.0));
        assert!((state.position.x - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_snap_keeps_velocity() {
        let mut camera = SpringCamera::new(
            SpringConfig::default(),
            SpringState {
                position: Vec3::ZERO,
                velocity: Vec3::new(0.0, 0.0, -42.0),
            },
        );
        let desired = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(camera.snap(desired), desired);
        assert_eq!(camera.state().velocity, Vec3::new(0.0, 0.0, -42.0));
    }

    #[test]
    fn test_reset_clears_velocity() {
        let mut camera = SpringCamera::new(
            SpringConfig::default(),
            SpringState {
                position: Vec3::ZERO,
                velocity: Vec3::ONE,
            },
        );
        camera.reset(Vec3::Y);
        assert_eq!(*camera.state(), SpringState::at_rest(Vec3::Y));
    }

    #[test]
    fn test_deserialize_rejects_invalid_mass() {
        let result: Result<SpringConfig, _> =
            serde_json::from_str(r#"{"stiffness": 10.0, "damping": 1.0, "mass": 0.0}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_fills_missing_fields_with_defaults() {
        let config: SpringConfig = serde_json::from_str(r#"{"damping": 300.0}"#).unwrap();
        assert_eq!(config.damping(), 300.0);
        assert_eq!(config.stiffness(), DEFAULT_STIFFNESS);
        assert_eq!(config.offset(), DEFAULT_OFFSET);
    }
}
