//! Rig Configuration
//!
//! Centralized configuration for every camera mode. `Default` returns the
//! reference tuning; a JSON file may override any subset of fields.
//!
//! ```json
//! {
//!   "third_person": { "stiffness": 1800.0, "damping": 600.0, "mass": 50.0,
//!                     "offset": [0.0, 1550.0, 4000.0] },
//!   "max_step": 0.0666667
//! }
//! ```

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::SpringConfig;
use crate::error::CameraError;

/// Configuration for a [`CameraRig`](crate::camera::CameraRig).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Eye position for `Fixed` and `Tracking` modes (world space)
    pub fixed_eye: Vec3,
    /// Eye position for `TopDownFixed` (world space). On the vertical axis the
    /// view falls back to world -Z as screen up.
    pub top_down_fixed_eye: Vec3,
    /// Eye offset for `FirstPerson`, in the tracked object's local frame
    pub first_person_offset: Vec3,
    /// Eye offset for `TopDownCentred`, in the tracked object's local frame
    pub top_down_centred_offset: Vec3,
    /// Spring tuning and eye offset for `ThirdPerson`
    pub third_person: SpringConfig,
    /// Upper bound on the integration step in seconds. `None` integrates the
    /// raw frame time.
    pub max_step: Option<f32>,
    /// Whether spring behaviour starts enabled
    pub spring_enabled: bool,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            fixed_eye: Vec3::new(0.0, 1550.0, 5000.0),
            top_down_fixed_eye: Vec3::new(0.0, 20000.0, 1.0),
            first_person_offset: Vec3::new(0.0, 120.0, 250.0),
            top_down_centred_offset: Vec3::new(0.0, 12000.0, 1.0),
            third_person: SpringConfig::default(),
            max_step: None,
            spring_enabled: true,
        }
    }
}

impl RigConfig {
    /// Parse a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, CameraError> {
        let config: RigConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load_json(path: &Path) -> Result<Self, CameraError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded camera config");
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, CameraError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every value a rig relies on.
    ///
    /// Spring constants are already checked when a [`SpringConfig`] is built;
    /// this covers the remaining fields.
    pub fn validate(&self) -> Result<(), CameraError> {
        let points = [
            ("fixed_eye", self.fixed_eye),
            ("top_down_fixed_eye", self.top_down_fixed_eye),
            ("first_person_offset", self.first_person_offset),
            ("top_down_centred_offset", self.top_down_centred_offset),
        ];
        for (field, value) in points {
            if let Some(bad) = value.to_array().into_iter().find(|c| !c.is_finite()) {
                return Err(CameraError::config(field, bad, "components must be finite"));
            }
        }

        if let Some(step) = self.max_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(CameraError::config("max_step", step, "must be finite and > 0"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(RigConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_overrides_defaults() {
        let config = RigConfig::from_json_str(
            r#"{ "fixed_eye": [1.0, 2.0, 3.0], "spring_enabled": false }"#,
        )
        .unwrap();
        assert_eq!(config.fixed_eye, Vec3::new(1.0, 2.0, 3.0));
        assert!(!config.spring_enabled);
        assert_eq!(config.third_person, SpringConfig::default());
    }

    #[test]
    fn test_invalid_spring_in_json_is_rejected() {
        let err = RigConfig::from_json_str(r#"{ "third_person": { "mass": -5.0 } }"#).unwrap_err();
        assert!(matches!(err, CameraError::ConfigParse(_)));
    }

    #[test]
    fn test_non_positive_max_step_is_rejected() {
        let err = RigConfig::from_json_str(r#"{ "max_step": 0.0 }"#).unwrap_err();
        assert!(matches!(err, CameraError::InvalidConfig { field: "max_step", .. }));
    }

    #[test]
    fn test_json_round_trip_preserves_config() {
        let mut config = RigConfig::default();
        config.max_step = Some(1.0 / 15.0);
        let json = config.to_json_string().unwrap();
        assert_eq!(RigConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_json_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "first_person_offset": [0.0, 10.0, 20.0] }}"#).unwrap();

        let config = RigConfig::load_json(file.path()).unwrap();
        assert_eq!(config.first_person_offset, Vec3::new(0.0, 10.0, 20.0));
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RigConfig::load_json(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, CameraError::ConfigIo(_)));
    }
}
