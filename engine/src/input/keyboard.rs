//! Keyboard Input Module
//!
//! Generic key codes, independent of the windowing system.

/// Generic key codes for camera and steering input.
///
/// These map to standard keyboard keys but are not tied to winit::keyboard::KeyCode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Steering keys
    W,
    A,
    D,

    // Camera keys
    Tab,
    C,
    R,
    F1,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}
