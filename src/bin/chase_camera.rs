//! Chase Camera Demo
//!
//! Run with: `cargo run --bin chase_camera [config.json]`
//!
//! Headless frame loop: a scripted pilot flies the ship while the camera
//! cycles through every mode, toggles the spring and resets once. Each camera
//! change and a periodic placement line are logged. `RUST_LOG=debug` shows
//! mode/spring events from the library, `RUST_LOG=trace` every spring step.
//!
//! Controls (scripted):
//! - W: Thrust
//! - A / D: Turn left / right
//! - Tab: Next camera mode
//! - C: Toggle spring
//! - R: Reset chase camera

use std::env;
use std::path::Path;

use chase_cam_engine::camera::CameraRig;
use chase_cam_engine::config::RigConfig;
use chase_cam_engine::error::CameraError;
use chase_cam_engine::input::{InputAction, InputState, KeyCode};
use chase_cam_engine::render::CameraUniforms;
use chase_cam_engine::world::{ShipTuning, TrackedObject};
use glam::Mat4;

/// Simulation rate
const FRAME_DT: f32 = 1.0 / 60.0;
/// Length of the scripted run in frames (12 seconds)
const TOTAL_FRAMES: u32 = 720;
/// Frames between placement log lines
const LOG_EVERY: u32 = 60;

/// Actions listed in the startup controls log
const CONTROLS: [InputAction; 6] = [
    InputAction::Thrust,
    InputAction::TurnLeft,
    InputAction::TurnRight,
    InputAction::NextCameraMode,
    InputAction::ToggleSpring,
    InputAction::ResetCamera,
];

/// Key events fired at a given frame: (frame, key, pressed)
const SCRIPT: &[(u32, KeyCode, bool)] = &[
    (0, KeyCode::W, true),
    (60, KeyCode::Tab, true),
    (62, KeyCode::Tab, false),
    (120, KeyCode::Tab, true),
    (150, KeyCode::Tab, false),
    (180, KeyCode::D, true),
    (180, KeyCode::Tab, true),
    (181, KeyCode::Tab, false),
    (240, KeyCode::D, false),
    (300, KeyCode::C, true),
    (301, KeyCode::C, false),
    (330, KeyCode::A, true),
    (360, KeyCode::C, true),
    (361, KeyCode::C, false),
    (390, KeyCode::A, false),
    (420, KeyCode::R, true),
    (421, KeyCode::R, false),
    (480, KeyCode::W, false),
    (480, KeyCode::Tab, true),
    (481, KeyCode::Tab, false),
    (540, KeyCode::Tab, true),
    (541, KeyCode::Tab, false),
    (600, KeyCode::Tab, true),
    (601, KeyCode::Tab, false),
];

fn load_config() -> Result<RigConfig, CameraError> {
    let args: Vec<String> = env::args().collect();
    match args.get(1) {
        Some(path) => RigConfig::load_json(Path::new(path)),
        None => Ok(RigConfig::default()),
    }
}

fn main() -> Result<(), CameraError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    let mut rig = CameraRig::new(config)?;
    let mut input = InputState::new();
    let mut ship = TrackedObject::default();
    let tuning = ShipTuning::default();
    let projection = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 16.0 / 9.0, 1.0, 100_000.0);

    tracing::info!(mode = %rig.mode(), spring = rig.spring_enabled(), "chase camera demo starting");
    for action in CONTROLS {
        if let Some(key) = input.bindings().get_key(action) {
            tracing::info!(?action, ?key, "binding");
        }
    }

    for frame in 0..TOTAL_FRAMES {
        for &(_, key, pressed) in SCRIPT.iter().filter(|(at, _, _)| *at == frame) {
            input.handle_key(key, pressed);
        }

        let commands = input.frame_input();
        if commands.exit {
            break;
        }
        if commands.advance_mode {
            let mode = rig.advance_mode();
            tracing::info!(frame, %mode, "camera mode");
        }
        if commands.toggle_spring {
            let enabled = rig.toggle_spring();
            tracing::info!(frame, enabled, "spring");
        }
        if commands.reset_camera {
            rig.reset(&ship);
            tracing::info!(frame, "chase camera reset");
        }

        ship.apply_controls(commands.controls, &tuning, FRAME_DT);

        let view = match rig.update(&ship, FRAME_DT) {
            Ok(view) => view,
            Err(err @ CameraError::DegenerateGeometry { .. }) => {
                // Skip the frame; the renderer keeps the previous view
                tracing::warn!(frame, %err, "camera view skipped");
                input.end_frame();
                continue;
            }
            Err(err) => return Err(err),
        };
        let uniforms = CameraUniforms::from_view(&view, projection);

        if frame % LOG_EVERY == 0 {
            tracing::info!(
                frame,
                mode = %view.mode,
                eye = ?view.eye,
                look_at = ?view.target,
                ship = ?ship.position,
                bytes = uniforms.as_bytes().len(),
                "camera"
            );
        }

        input.end_frame();
    }

    let state = rig.spring_state();
    tracing::info!(
        position = ?state.position,
        velocity = ?state.velocity,
        "final chase camera state"
    );
    Ok(())
}
