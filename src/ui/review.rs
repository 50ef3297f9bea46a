use iced::widget::{button, column, horizontal_space, row, text, text_input, vertical_space, Row};
use iced::{Alignment, Element, Length};

use super::style;
use crate::state::review::rating_label;
use crate::state::session::Session;
use crate::Message;

/// Review form for the selected spot
pub fn view(session: &Session) -> Element<'_, Message> {
    let draft = session.draft();
    let spot = session.selected_spot();
    let submitting = session.pending_return().is_some();

    let header = row![
        button(text("←")).on_press(Message::Back).style(button::text),
        text("Write a Review").size(18).font(style::BOLD),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let stars = Row::with_children((1..=5u8).map(|star| {
        let color = if star <= draft.rating {
            style::STAR
        } else {
            style::LIGHT_GRAY
        };
        button(text("★").size(36).color(color))
            .on_press(Message::RatingSelected(star))
            .style(button::text)
            .into()
    }))
    .spacing(4);

    let rating = column![
        text("How was your study session?").size(14).color(style::GRAY),
        stars,
        text(rating_label(draft.rating)).color(style::BLUE),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let body = column![
        text("Your Review").size(14),
        text_input(
            "Share your experience about the noise level, wifi speed, or available amenities...",
            &draft.text,
        )
        .on_input(Message::ReviewTextChanged)
        .on_submit(Message::SubmitReview)
        .padding(14),
    ]
    .spacing(8);

    let submit = button(
        row![horizontal_space(), text("Submit Review"), horizontal_space()].width(Length::Fill),
    )
    .on_press_maybe((!submitting).then_some(Message::SubmitReview))
    .style(button::primary)
    .padding(14)
    .width(Length::Fill);

    column![
        header,
        text(&spot.name).size(13).color(style::GRAY),
        rating,
        body,
        vertical_space(),
        submit,
    ]
    .spacing(24)
    .padding(20)
    .into()
}
