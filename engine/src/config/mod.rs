//! Config Module
//!
//! Camera rig tuning: fixed viewpoints, per-mode offsets and spring constants.

pub mod rig_config;

pub use rig_config::RigConfig;
