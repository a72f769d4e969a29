//! The always-visible gallery screen.
//!
//! Layout, top to bottom: the artwork image over roughly 70% of the window,
//! then the tinted caption band, then the two-button navigation row. The
//! caption band doubles as the long-press target for the detail overlay.

use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, column, container, image, mouse_area, row, text, Button};
use iced::{Alignment, Element, Font, Length, Theme};

use crate::state::catalog::Artwork;
use crate::Message;

/// Build the gallery screen for the artwork currently on display.
pub fn view(artwork: &Artwork) -> Element<'_, Message> {
    let picture = container(image(artwork.image.clone()))
        .padding(16)
        .center_x(Length::Fill)
        .center_y(Length::FillPortion(7));

    let caption = mouse_area(caption_band(artwork))
        .on_press(Message::CaptionPressed)
        .on_release(Message::CaptionReleased);

    let controls = row![
        nav_button("Previous", Message::PreviousPressed),
        nav_button("Next", Message::NextPressed),
    ]
    .width(Length::Fill)
    .spacing(16);

    let lower = container(column![caption, controls].spacing(8).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::FillPortion(3))
        .align_y(Vertical::Bottom);

    column![picture, lower]
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .padding(32)
        .into()
}

/// Title over a bold "artist (year)" byline, on a tinted band.
fn caption_band(artwork: &Artwork) -> Element<'_, Message> {
    let byline = text(format!("{} ({})", artwork.artist, artwork.year)).font(Font {
        weight: Weight::Bold,
        ..Font::DEFAULT
    });

    container(
        column![text(&artwork.title), byline]
            .spacing(4)
            .align_x(Alignment::Center)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .padding(16)
    .style(|theme: &Theme| {
        let pair = theme.extended_palette().secondary.weak;
        container::Style {
            background: Some(pair.color.into()),
            text_color: Some(pair.text),
            ..container::Style::default()
        }
    })
    .into()
}

/// Equal-width navigation button.
fn nav_button(label: &'static str, on_press: Message) -> Button<'static, Message> {
    button(container(text(label)).center_x(Length::Fill))
        .on_press(on_press)
        .padding(10)
        .width(Length::Fill)
}
