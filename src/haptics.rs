//! Best-effort haptic feedback.
//!
//! A completed long-press is accompanied by a device haptic pulse. Desktop
//! machines have no vibrator, so the pulse is recorded as a trace event and
//! nothing else. UX cue only; it never affects state.

use tracing::debug;

/// Emit a long-press-class haptic pulse.
pub fn long_press_pulse() {
    debug!("haptic pulse (long-press)");
}
