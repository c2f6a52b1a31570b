use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Element, Length};

use super::{accent_button, chip_button, panel, rating_label, thumbnail, Thumbnails, MUTED};
use crate::state::data::Movie;
use crate::Message;

const POSTER_HEIGHT: f32 = 460.0;

/// Playback view for the selected movie.
///
/// The video itself opens in the system media player.
pub fn view<'a>(movie: &'a Movie, thumbnails: &Thumbnails) -> Element<'a, Message> {
    let back = button(text("←  Back").size(15))
        .padding([8, 18])
        .on_press(Message::Back)
        .style(chip_button);

    let play = button(text("▶  Play").size(18))
        .padding([12, 32])
        .on_press(Message::PlaySelected)
        .style(accent_button);

    let meta = row![
        text(movie.year.to_string()).color(MUTED),
        text(&movie.duration).color(MUTED),
        text(movie.category.label()).color(MUTED),
        text(rating_label(movie.rating)).color(MUTED),
    ]
    .spacing(16);

    let mut details: Column<'a, Message> = column![
        text(&movie.title).size(40),
        meta,
        text(&movie.description).size(17),
        play,
    ]
    .spacing(16);

    if let Some(review) = &movie.ai_review {
        let blurb = container(column![text("Review").size(13).color(MUTED), text(review).size(15)].spacing(6))
            .padding(16)
            .width(Length::Fill)
            .style(panel);
        details = details.push(blurb);
    }

    let content = column![
        back,
        thumbnail(thumbnails, &movie.id, Length::Fill, POSTER_HEIGHT),
        details,
    ]
    .spacing(24)
    .padding(32);

    scrollable(content).height(Length::Fill).into()
}
