//! The detail overlay.
//!
//! A semi-transparent scrim covers the whole gallery; a tinted, scrollable
//! panel in the vertical middle band shows the artwork's location and
//! description. A press anywhere on the surface dismisses the overlay.

use iced::font::Weight;
use iced::widget::{column, container, mouse_area, scrollable, stack, text, Space};
use iced::{Color, Element, Font, Length, Theme};

use crate::state::catalog::Artwork;
use crate::Message;

/// Opacity of the scrim layered over the gallery.
const SCRIM_OPACITY: f32 = 0.75;

/// Build the overlay for the artwork currently on display.
pub fn view(artwork: &Artwork) -> Element<'_, Message> {
    let scrim = container(Space::new(Length::Fill, Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|theme: &Theme| {
            let base = theme.extended_palette().background.base.color;
            container::Style {
                background: Some(
                    Color {
                        a: SCRIM_OPACITY,
                        ..base
                    }
                    .into(),
                ),
                ..container::Style::default()
            }
        });

    let location = text(format!("Location: {}", artwork.location)).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });

    let panel = container(scrollable(
        column![location, text(&artwork.description)]
            .spacing(16)
            .padding(16)
            .width(Length::Fill),
    ))
    .width(Length::Fill)
    .height(Length::FillPortion(3))
    .style(|theme: &Theme| {
        let pair = theme.extended_palette().primary.weak;
        container::Style {
            background: Some(pair.color.into()),
            text_color: Some(pair.text),
            ..container::Style::default()
        }
    });

    // Flexible 1:3:1 spacers keep the panel in the vertical middle band.
    let panel_band = column![
        Space::with_height(Length::FillPortion(1)),
        panel,
        Space::with_height(Length::FillPortion(1)),
    ]
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(32);

    mouse_area(stack![scrim, panel_band])
        .on_press(Message::OverlayDismissed)
        .into()
}
