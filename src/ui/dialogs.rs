use iced::widget::{
    button, center, column, container, horizontal_space, mouse_area, opaque, pick_list, row, scrollable, stack,
    text, text_input,
};
use iced::{Color, Element, Length};

use super::{accent_button, chip_button, panel, ACCENT, MUTED};
use crate::state::access::PinDialog;
use crate::state::data::Category;
use crate::state::upload::{Field, UploadForm};
use crate::Message;

const DIALOG_WIDTH: f32 = 460.0;

/// Show `content` centered over a dimmed `base`.
///
/// Clicking the backdrop sends `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| container::Style {
                background: Some(Color { a: 0.8, ..Color::BLACK }.into()),
                ..container::Style::default()
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// Login / PIN change dialog
pub fn pin(dialog: &PinDialog) -> Element<'_, Message> {
    let (title, hint, action) = match dialog {
        PinDialog::AwaitingNewPin { .. } => ("Change Security Code", "New security code", "Update"),
        _ => ("Owner Access", "Security code", "Unlock"),
    };

    let input = text_input(hint, dialog.input())
        .secure(true)
        .on_input(Message::PinInputChanged)
        .on_submit(Message::PinSubmitted)
        .padding(10);

    let mut body = column![text(title).size(24), input].spacing(14);

    if let Some(error) = dialog.error() {
        body = body.push(text(error).size(14).color(ACCENT));
    }

    body = body.push(
        row![
            horizontal_space(),
            button("Cancel").on_press(Message::PinDialogClosed).style(chip_button),
            button(action).on_press(Message::PinSubmitted).style(accent_button),
        ]
        .spacing(10),
    );

    container(body)
        .padding(24)
        .width(Length::Fixed(DIALOG_WIDTH))
        .style(panel)
        .into()
}

fn field<'a>(label: &'a str, placeholder: &'a str, value: &'a str, which: Field) -> Element<'a, Message> {
    column![
        text(label).size(13).color(MUTED),
        text_input(placeholder, value)
            .on_input(move |value| Message::UploadFieldChanged(which, value))
            .padding(8),
    ]
    .spacing(4)
    .into()
}

/// Upload dialog for a new catalog entry
pub fn upload(form: &UploadForm) -> Element<'_, Message> {
    let thumbnail_row = row![
        field("Thumbnail", "https://... or local image", &form.thumbnail_url, Field::Thumbnail),
        button("Browse").on_press(Message::BrowseThumbnail).style(chip_button),
    ]
    .spacing(8)
    .align_y(iced::Alignment::End);

    let video_row = row![
        field("Video", "https://... or local video", &form.video_url, Field::Video),
        button("Browse").on_press(Message::BrowseVideo).style(chip_button),
    ]
    .spacing(8)
    .align_y(iced::Alignment::End);

    let category = column![
        text("Category").size(13).color(MUTED),
        pick_list(Category::ALL, Some(form.category), Message::UploadCategorySelected),
    ]
    .spacing(4);

    let numbers = row![
        field("Year", "2024", &form.year, Field::Year),
        field("Duration", "2h 10m", &form.duration, Field::Duration),
        field("Rating", "4.5", &form.rating, Field::Rating),
    ]
    .spacing(8);

    let mut body = column![
        text("Upload Movie").size(24),
        field("Title", "Movie title", &form.title, Field::Title),
        field("Description", "What is it about?", &form.description, Field::Description),
        thumbnail_row,
        video_row,
        category,
        numbers,
        field("Review (optional)", "One-line take", &form.ai_review, Field::Review),
    ]
    .spacing(12);

    if let Some(error) = &form.error {
        body = body.push(text(error.to_string()).size(14).color(ACCENT));
    }

    body = body.push(
        row![
            horizontal_space(),
            button("Cancel").on_press(Message::UploadCancelled).style(chip_button),
            button("Publish").on_press(Message::UploadSubmitted).style(accent_button),
        ]
        .spacing(10),
    );

    container(scrollable(body))
        .padding(24)
        .width(Length::Fixed(DIALOG_WIDTH + 80.0))
        .max_height(680.0)
        .style(panel)
        .into()
}
