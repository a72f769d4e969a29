//! Detail overlay visibility and the long-press that drives it.

use std::time::Duration;

use tracing::debug;

/// How long the caption band must stay pressed before the overlay opens.
/// Matches the conventional platform long-press timeout.
pub const LONG_PRESS_TIMEOUT: Duration = Duration::from_millis(400);

/// Visibility of the detail overlay.
///
/// Two states, no terminal state: the overlay toggles for the life of the
/// screen. Navigation does not touch it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overlay {
    #[default]
    Hidden,
    Visible,
}

impl Overlay {
    /// Show the overlay. Called when a long-press completes.
    pub fn open(&mut self) {
        debug!("overlay opened");
        *self = Overlay::Visible;
    }

    /// Hide the overlay. Called when the overlay surface is tapped.
    pub fn close(&mut self) {
        debug!("overlay dismissed");
        *self = Overlay::Hidden;
    }

    pub fn is_visible(self) -> bool {
        self == Overlay::Visible
    }
}

/// Tells a long-press apart from a short tap on the caption band.
///
/// Every press bumps a sequence number that is handed to the press timer.
/// When the timer fires, it is honored only if the sequence still matches
/// and the press has not been released in the meantime. A short tap is
/// therefore recognized but changes nothing.
#[derive(Debug, Default)]
pub struct PressTracker {
    seq: u64,
    held: bool,
}

impl PressTracker {
    /// Record a new press, invalidating any timer from an earlier press.
    pub fn press(&mut self) {
        self.seq += 1;
        self.held = true;
    }

    /// Record the release. A release before the timer fires is a short tap.
    pub fn release(&mut self) {
        self.held = false;
    }

    /// Token identifying the most recent press, handed to its timer.
    pub fn token(&self) -> u64 {
        self.seq
    }

    /// Whether a fired timer with `token` belongs to a press that is still
    /// held.
    pub fn is_current(&self, token: u64) -> bool {
        self.held && token == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_starts_hidden() {
        assert_eq!(Overlay::default(), Overlay::Hidden);
    }

    #[test]
    fn test_open_then_close_round_trip() {
        let mut overlay = Overlay::default();

        overlay.open();
        assert!(overlay.is_visible());

        overlay.close();
        assert!(!overlay.is_visible());
    }

    #[test]
    fn test_held_press_is_current_when_timer_fires() {
        let mut tracker = PressTracker::default();

        tracker.press();
        assert!(tracker.is_current(tracker.token()));
    }

    #[test]
    fn test_released_press_invalidates_its_timer() {
        let mut tracker = PressTracker::default();

        tracker.press();
        let token = tracker.token();
        tracker.release();

        assert!(!tracker.is_current(token));
    }

    #[test]
    fn test_new_press_invalidates_older_timer() {
        let mut tracker = PressTracker::default();

        tracker.press();
        let first = tracker.token();
        tracker.release();
        tracker.press();

        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(tracker.token()));
    }
}
