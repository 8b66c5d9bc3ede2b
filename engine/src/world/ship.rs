//! Tracked Ship
//!
//! The object the camera follows: a ship on a flat plane that only yaws
//! about the vertical axis (no pitch or roll). Steering input arrives already
//! normalized as a `(turn_rate, throttle)` pair.
//!
//! # Physics Model
//!
//! - Turn speed: `turn_rate * TURN_SPEED` radians per second
//! - Thrust: `throttle * THRUST_FORCE` along the ship's forward axis
//! - Drag: velocity scaled by `DRAG_FACTOR` once per update
//!
//! At orientation 0 the ship faces -Z.

use glam::{Quat, Vec3};

/// Yaw rate at full stick, radians per second
pub const TURN_SPEED: f32 = 1.5;
/// Forward force at full throttle
pub const THRUST_FORCE: f32 = 24000.0;
/// Ship mass
pub const SHIP_MASS: f32 = 1.0;
/// Fraction of velocity kept after each update
pub const DRAG_FACTOR: f32 = 0.97;

/// Normalized steering input for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShipControls {
    /// -1.0 (full left) to 1.0 (full right)
    pub turn_rate: f32,
    /// 0.0 (idle) to 1.0 (full thrust)
    pub throttle: f32,
}

impl ShipControls {
    pub fn new(turn_rate: f32, throttle: f32) -> Self {
        Self {
            turn_rate,
            throttle,
        }
    }

    /// Clamp both signals into their valid ranges.
    pub fn clamped(self) -> Self {
        Self {
            turn_rate: self.turn_rate.clamp(-1.0, 1.0),
            throttle: self.throttle.clamp(0.0, 1.0),
        }
    }
}

/// Ship handling constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShipTuning {
    pub turn_speed: f32,
    pub thrust_force: f32,
    pub mass: f32,
    pub drag_factor: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            turn_speed: TURN_SPEED,
            thrust_force: THRUST_FORCE,
            mass: SHIP_MASS,
            drag_factor: DRAG_FACTOR,
        }
    }
}

/// World-space state of the tracked object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackedObject {
    /// Position in world space
    pub position: Vec3,
    /// Rotation about +Y in radians
    pub orientation: f32,
    /// Current velocity in world space
    pub velocity: Vec3,
}

impl TrackedObject {
    pub fn new(position: Vec3, orientation: f32) -> Self {
        Self {
            position,
            orientation,
            velocity: Vec3::ZERO,
        }
    }

    /// Rotation of the object's local frame.
    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_y(self.orientation)
    }

    /// Direction the object faces.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Map an offset in the object's local frame to a world-space point.
    #[inline]
    pub fn local_to_world(&self, offset: Vec3) -> Vec3 {
        self.rotation() * offset + self.position
    }

    /// Advance the ship by one frame of steering input.
    pub fn apply_controls(&mut self, controls: ShipControls, tuning: &ShipTuning, dt: f32) {
        let controls = controls.clamped();

        // Positive turn_rate steers right, i.e. clockwise seen from above
        self.orientation -= controls.turn_rate * tuning.turn_speed * dt;

        let force = self.forward() * controls.throttle * tuning.thrust_force;
        let acceleration = force / tuning.mass;
        self.velocity += acceleration * dt;
        self.velocity *= tuning.drag_factor;
        self.position += self.velocity * dt;
    }
}
