use iced::widget::stack;
use iced::{Element, Size, Task, Theme};
use tracing_subscriber::EnvFilter;

// Declare the application modules
mod assets;
mod haptics;
mod state;
mod ui;

use state::catalog::Catalog;
use state::overlay::{Overlay, PressTracker, LONG_PRESS_TIMEOUT};

/// Main application state
struct ArtSpace {
    /// The fixed three-artwork collection
    catalog: Catalog,
    /// 1-based index of the artwork on display
    current: u32,
    /// Detail overlay visibility
    overlay: Overlay,
    /// Long-press bookkeeping for the caption band
    press: PressTracker,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the "Previous" button
    PreviousPressed,
    /// User clicked the "Next" button
    NextPressed,
    /// Mouse went down on the caption band
    CaptionPressed,
    /// Mouse came back up on the caption band
    CaptionReleased,
    /// The long-press timer for the given press token elapsed
    LongPressElapsed(u64),
    /// User tapped the overlay scrim or panel
    OverlayDismissed,
}

impl ArtSpace {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // Resolve the bundled assets. If this fails the binary is incomplete
        // and the app cannot function, so panic with a clear message.
        let catalog = assets::load_catalog().expect("Failed to load bundled artwork assets");

        println!("🖼️ Art Space initialized with {} artworks", catalog.len());

        (
            ArtSpace {
                catalog,
                current: state::nav::FIRST,
                overlay: Overlay::Hidden,
                press: PressTracker::default(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PreviousPressed => {
                self.current = state::nav::go_previous(self.current);
                Task::none()
            }
            Message::NextPressed => {
                self.current = state::nav::go_next(self.current);
                Task::none()
            }
            Message::CaptionPressed => {
                // Arm the long-press timer for this press. The token lets a
                // later release or a newer press invalidate it.
                self.press.press();
                let token = self.press.token();

                Task::perform(tokio::time::sleep(LONG_PRESS_TIMEOUT), move |_| {
                    Message::LongPressElapsed(token)
                })
            }
            Message::CaptionReleased => {
                // A release before the timer fires is a plain tap: recognized,
                // deliberately no state change.
                self.press.release();
                Task::none()
            }
            Message::LongPressElapsed(token) => {
                if self.press.is_current(token) {
                    haptics::long_press_pulse();
                    self.overlay.open();
                }
                Task::none()
            }
            Message::OverlayDismissed => {
                self.overlay.close();
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let artwork = self.catalog.lookup(self.current);
        let gallery = ui::gallery::view(artwork);

        if self.overlay.is_visible() {
            stack![gallery, ui::overlay::view(artwork)].into()
        } else {
            gallery
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    iced::application("Art Space", ArtSpace::update, ArtSpace::view)
        .theme(ArtSpace::theme)
        .window_size(Size::new(480.0, 840.0))
        .centered()
        .run_with(ArtSpace::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> ArtSpace {
        let (app, _task) = ArtSpace::new();
        app
    }

    #[test]
    fn test_fresh_screen_shows_first_artwork() {
        let app = fresh();

        assert_eq!(app.current, 1);
        assert!(!app.overlay.is_visible());
        assert_eq!(app.catalog.lookup(app.current).title, "The Starry Night");
    }

    #[test]
    fn test_next_clamps_at_last_artwork() {
        let mut app = fresh();

        let _ = app.update(Message::NextPressed);
        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current, 3);

        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current, 3);
    }

    #[test]
    fn test_previous_is_a_no_op_on_first_artwork() {
        let mut app = fresh();

        let _ = app.update(Message::PreviousPressed);
        assert_eq!(app.current, 1);
    }

    #[tokio::test]
    async fn test_long_press_opens_overlay_and_tap_dismisses_it() {
        let mut app = fresh();
        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current, 2);

        let _ = app.update(Message::CaptionPressed);
        let token = app.press.token();
        let _ = app.update(Message::LongPressElapsed(token));
        assert!(app.overlay.is_visible());

        let shown = app.catalog.lookup(app.current);
        assert_eq!(shown.location, "Metropolitan Museum of Art, New York");
        assert!(!shown.description.is_empty());

        let _ = app.update(Message::OverlayDismissed);
        assert!(!app.overlay.is_visible());
    }

    #[tokio::test]
    async fn test_short_tap_leaves_overlay_hidden() {
        let mut app = fresh();

        let _ = app.update(Message::CaptionPressed);
        let token = app.press.token();
        let _ = app.update(Message::CaptionReleased);
        let _ = app.update(Message::LongPressElapsed(token));

        assert!(!app.overlay.is_visible());
    }

    #[tokio::test]
    async fn test_overlay_stays_open_across_navigation() {
        let mut app = fresh();

        let _ = app.update(Message::CaptionPressed);
        let token = app.press.token();
        let _ = app.update(Message::LongPressElapsed(token));
        assert!(app.overlay.is_visible());

        let _ = app.update(Message::NextPressed);
        assert_eq!(app.current, 2);
        assert!(app.overlay.is_visible());
    }
}
