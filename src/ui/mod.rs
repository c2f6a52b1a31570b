/// User interface views
///
/// Every function here is a pure view of the current [`Studio`] state and
/// emits [`Message`]s upward:
/// - `navbar.rs` - title, search box and owner controls
/// - `browse.rs` - hero banner, category chips and the movie grid
/// - `playback.rs` - the selected movie with its play control
/// - `dialogs.rs` - upload and PIN modals
///
/// [`Studio`]: crate::state::studio::Studio
/// [`Message`]: crate::Message

pub mod navbar;
pub mod browse;
pub mod playback;
pub mod dialogs;

use iced::widget::{button, container, image, text, Container};
use iced::{alignment, Border, Color, Element, Length, Theme};
use std::collections::HashMap;

use crate::Message;

/// Cached thumbnail handles keyed by movie id
pub type Thumbnails = HashMap<String, image::Handle>;

pub const ACCENT: Color = Color::from_rgb(0.86, 0.15, 0.15);
pub const MUTED: Color = Color::from_rgb(0.63, 0.63, 0.67);
pub const SURFACE: Color = Color::from_rgb(0.11, 0.11, 0.12);

pub type ButtonStyle = fn(&Theme, button::Status) -> button::Style;

/// Filled red button for primary actions and the active chip
pub fn accent_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::danger(theme, status);
    button::Style {
        border: Border::default().rounded(18.0),
        ..base
    }
}

/// Dark rounded button for inactive chips and secondary actions
pub fn chip_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::secondary(theme, status);
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Color::from_rgb(0.25, 0.25, 0.27),
        _ => Color::from_rgb(0.16, 0.16, 0.18),
    };
    button::Style {
        background: Some(background.into()),
        text_color: MUTED,
        border: Border::default().rounded(18.0),
        ..base
    }
}

/// Rounded dark panel used for cards and dialogs
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(SURFACE.into()),
        border: Border::default().rounded(12.0),
        ..container::Style::default()
    }
}

/// Thumbnail image, or a placeholder while it loads (or if it failed)
pub fn thumbnail<'a>(thumbnails: &Thumbnails, id: &str, width: Length, height: f32) -> Element<'a, Message> {
    match thumbnails.get(id) {
        Some(handle) => image(handle.clone())
            .width(width)
            .height(Length::Fixed(height))
            .content_fit(iced::ContentFit::Cover)
            .into(),
        None => placeholder(width, height).into(),
    }
}

fn placeholder<'a>(width: Length, height: f32) -> Container<'a, Message> {
    container(text("🎬").size(36).color(MUTED))
        .width(width)
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(panel)
}

/// "★ 4.5" style rating label
pub fn rating_label(rating: f32) -> String {
    format!("★ {rating:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_label_has_one_decimal() {
        assert_eq!(rating_label(4.0), "★ 4.0");
        assert_eq!(rating_label(4.26), "★ 4.3");
    }
}
