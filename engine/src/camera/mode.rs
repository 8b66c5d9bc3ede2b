//! Camera Mode Selection
//!
//! Six camera modes visited in a fixed cyclic order, plus an independent
//! switch that enables or disables spring behaviour. Both are driven by
//! edge-triggered events: one call per button press, never per held frame.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Camera mode - determines where the eye sits and what it looks at
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum CameraMode {
    /// Fixed eye in world space, looking at the world origin
    #[default]
    Fixed,
    /// Fixed eye in world space, following the tracked object
    Tracking,
    /// Eye attached to the tracked object
    FirstPerson,
    /// Spring-damped chase camera behind the tracked object
    ThirdPerson,
    /// High fixed eye looking down at the world origin
    TopDownFixed,
    /// High eye centred over the tracked object
    TopDownCentred,
}

impl CameraMode {
    /// Every mode, in cycling order.
    pub const ALL: [CameraMode; 6] = [
        CameraMode::Fixed,
        CameraMode::Tracking,
        CameraMode::FirstPerson,
        CameraMode::ThirdPerson,
        CameraMode::TopDownFixed,
        CameraMode::TopDownCentred,
    ];

    /// The mode that follows this one. `TopDownCentred` wraps to `Fixed`.
    pub fn next(self) -> Self {
        match self {
            CameraMode::Fixed => CameraMode::Tracking,
            CameraMode::Tracking => CameraMode::FirstPerson,
            CameraMode::FirstPerson => CameraMode::ThirdPerson,
            CameraMode::ThirdPerson => CameraMode::TopDownFixed,
            CameraMode::TopDownFixed => CameraMode::TopDownCentred,
            CameraMode::TopDownCentred => CameraMode::Fixed,
        }
    }

    /// Whether this mode places its eye through the spring integrator.
    #[inline]
    pub fn uses_spring(self) -> bool {
        matches!(self, CameraMode::ThirdPerson)
    }

    /// Short label for HUD text.
    pub fn label(self) -> &'static str {
        match self {
            CameraMode::Fixed => "Fixed",
            CameraMode::Tracking => "Tracking",
            CameraMode::FirstPerson => "First Person",
            CameraMode::ThirdPerson => "Third Person",
            CameraMode::TopDownFixed => "Top Down (fixed)",
            CameraMode::TopDownCentred => "Top Down (centred)",
        }
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cyclic mode state machine with a spring on/off switch.
///
/// Starts in [`CameraMode::Fixed`]. There is no terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CameraModeSelector {
    mode: CameraMode,
    spring_enabled: bool,
}

impl Default for CameraModeSelector {
    fn default() -> Self {
        Self {
            mode: CameraMode::Fixed,
            spring_enabled: true,
        }
    }
}

impl CameraModeSelector {
    pub fn new(spring_enabled: bool) -> Self {
        Self {
            mode: CameraMode::default(),
            spring_enabled,
        }
    }

    #[inline]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    #[inline]
    pub fn spring_enabled(&self) -> bool {
        self.spring_enabled
    }

    /// Move to the next mode in cyclic order and return it.
    pub fn advance(&mut self) -> CameraMode {
        self.mode = self.mode.next();
        tracing::debug!(mode = %self.mode, "camera mode advanced");
        self.mode
    }

    /// Flip spring behaviour on or off and return the new setting.
    /// Independent of the selected mode.
    pub fn toggle_spring(&mut self) -> bool {
        self.spring_enabled = !self.spring_enabled;
        tracing::debug!(enabled = self.spring_enabled, "camera spring toggled");
        self.spring_enabled
    }
}
