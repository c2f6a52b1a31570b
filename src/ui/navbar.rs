use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{font, Alignment, Element, Font, Length};

use super::{accent_button, chip_button, ACCENT};
use crate::state::studio::Studio;
use crate::Message;

/// Top navigation bar
///
/// Upload and Settings are only shown in owner mode.
pub fn view(studio: &Studio) -> Element<'_, Message> {
    let logo = text("ROINMOVIES")
        .size(26)
        .color(ACCENT)
        .font(Font {
            weight: font::Weight::Black,
            ..Font::DEFAULT
        });

    let search = text_input("Search movies...", studio.search())
        .on_input(Message::SearchChanged)
        .padding(8)
        .width(Length::Fixed(280.0));

    let mut controls = row![search].spacing(10).align_y(Alignment::Center);

    if studio.is_admin() {
        controls = controls
            .push(button("Upload").on_press(Message::OpenUpload).style(accent_button))
            .push(button("Settings").on_press(Message::OpenSettings).style(chip_button));
    }

    let toggle_label = if studio.is_admin() { "Exit Studio" } else { "Owner Login" };
    controls = controls.push(button(toggle_label).on_press(Message::ToggleAdmin).style(chip_button));

    let bar = row![logo, horizontal_space(), controls]
        .spacing(16)
        .align_y(Alignment::Center);

    let mut content = column![bar].spacing(8);

    // Storage failures stay visible under the bar until the next success
    if let Some(status) = studio.status() {
        content = content.push(text(status).size(14).color(ACCENT));
    }

    container(content).padding([16, 32]).width(Length::Fill).into()
}
