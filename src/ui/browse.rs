use iced::widget::{button, column, container, row, scrollable, stack, text, Column, Row};
use iced::{alignment, Color, Element, Length, Padding};
use iced_aw::Wrap;

use super::{accent_button, chip_button, panel, rating_label, thumbnail, ButtonStyle, Thumbnails, MUTED};
use crate::state::data::{CategoryFilter, Movie};
use crate::state::studio::Studio;
use crate::Message;

const CARD_WIDTH: f32 = 260.0;
const CARD_THUMB_HEIGHT: f32 = 146.0;
const HERO_HEIGHT: f32 = 380.0;

/// Catalog view: hero, category chips and the filtered grid
pub fn view<'a>(studio: &'a Studio, thumbnails: &Thumbnails) -> Element<'a, Message> {
    let mut page = Column::new().spacing(28);

    if let Some(featured) = studio.catalog().featured() {
        page = page.push(hero(featured, thumbnails));
    }

    let empty_text = if studio.catalog().is_empty() {
        "The catalog is empty"
    } else {
        "No movies found"
    };

    let body = column![
        category_chips(studio.category()),
        grid(studio.visible(), empty_text, thumbnails)
    ]
    .spacing(24)
    .padding([0, 32]);

    scrollable(page.push(body).padding(bottom(32.0)))
        .height(Length::Fill)
        .into()
}

fn bottom(amount: f32) -> Padding {
    Padding {
        top: 0.0,
        right: 0.0,
        bottom: amount,
        left: 0.0,
    }
}

/// Banner for the top catalog entry
fn hero<'a>(movie: &'a Movie, thumbnails: &Thumbnails) -> Element<'a, Message> {
    let info = column![
        text(&movie.title).size(44),
        text(format!("{} • {} • {}", movie.year, movie.duration, movie.category)).color(MUTED),
        text(&movie.description).size(16).width(Length::Fixed(560.0)),
        button(text("▶  Play").size(18))
            .padding([10, 28])
            .on_press(Message::PlayFeatured)
            .style(accent_button),
    ]
    .spacing(12);

    let overlay = container(info)
        .padding(40)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .style(|_theme| container::Style {
            background: Some(Color { a: 0.45, ..Color::BLACK }.into()),
            ..container::Style::default()
        });

    stack![thumbnail(thumbnails, &movie.id, Length::Fill, HERO_HEIGHT), overlay]
        .height(Length::Fixed(HERO_HEIGHT))
        .into()
}

/// Horizontally scrollable chip row: "All Movies" plus every category
fn category_chips<'a>(active: CategoryFilter) -> Element<'a, Message> {
    let chips = CategoryFilter::chips().map(|chip| -> Element<'a, Message> {
        let style: ButtonStyle = if chip == active { accent_button } else { chip_button };
        button(text(chip.label()).size(14))
            .padding([6, 16])
            .on_press(Message::CategorySelected(chip))
            .style(style)
            .into()
    });

    scrollable(Row::with_children(chips).spacing(12).padding(bottom(8.0)))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .into()
}

/// Wrapping grid of movie cards
fn grid<'a>(movies: Vec<&'a Movie>, empty_text: &'a str, thumbnails: &Thumbnails) -> Element<'a, Message> {
    if movies.is_empty() {
        return container(text(empty_text).size(18).color(MUTED))
            .width(Length::Fill)
            .padding(48)
            .align_x(alignment::Horizontal::Center)
            .into();
    }

    let cards: Vec<Element<'a, Message>> = movies.into_iter().map(|movie| card(movie, thumbnails)).collect();

    Wrap::with_elements(cards).spacing(18.0).line_spacing(18.0).into()
}

fn card<'a>(movie: &'a Movie, thumbnails: &Thumbnails) -> Element<'a, Message> {
    let details = column![
        text(&movie.title).size(16),
        row![
            text(movie.year.to_string()).size(13).color(MUTED),
            text(movie.category.label()).size(13).color(MUTED),
            text(rating_label(movie.rating)).size(13).color(MUTED),
        ]
        .spacing(10),
    ]
    .spacing(4)
    .padding([8, 10]);

    let body = container(column![
        thumbnail(thumbnails, &movie.id, Length::Fixed(CARD_WIDTH), CARD_THUMB_HEIGHT),
        details
    ])
    .width(Length::Fixed(CARD_WIDTH))
    .style(panel);

    button(body)
        .padding(0)
        .on_press(Message::MovieSelected(movie.id.clone()))
        .style(button::text)
        .into()
}
