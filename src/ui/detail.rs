use iced::widget::{button, canvas, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::occupancy::OccupancyChart;
use super::style;
use crate::state::data::{Review, StudySpot};
use crate::state::navigation::Screen;
use crate::Message;

/// Place details: header, actions, occupancy, about and reviews.
/// `parent` is the tab the back button returns to.
pub fn view(spot: &StudySpot, parent: Option<Screen>) -> Element<'_, Message> {
    let back_label = match parent.filter(Screen::is_tab) {
        Some(screen) => format!("← {}", screen.tab_label()),
        None => "← Discover".to_string(),
    };
    let favorite = if spot.is_favorite { "♥" } else { "♡" };
    let top_bar = row![
        button(text(back_label)).on_press(Message::Back).style(button::text),
        horizontal_space(),
        button(text(favorite).size(20).color(if spot.is_favorite {
            style::RED
        } else {
            style::GRAY
        }))
        .on_press(Message::ToggleFavorite(spot.id.clone()))
        .style(button::text),
    ]
    .align_y(Alignment::Center);

    let header = column![
        style::badge(&spot.category, style::BLUE),
        text(&spot.name).size(24).font(style::BOLD),
        text(format!(
            "{} away  •  ★ {:.1} ({} reviews)",
            spot.distance,
            spot.rating,
            spot.review_count()
        ))
        .size(13)
        .color(style::GRAY),
    ]
    .spacing(6);

    let (check_in_label, check_in_style): (&str, fn(&iced::Theme, button::Status) -> button::Style) =
        if spot.checked_in {
            ("✓ Checked In", button::success)
        } else {
            ("Check In", button::secondary)
        };
    let mut actions = column![row![
        button(text("Directions"))
            .on_press(Message::Navigate(Screen::Map, None))
            .style(button::primary)
            .width(Length::Fill),
        button(text(check_in_label))
            .on_press_maybe((!spot.checked_in).then(|| Message::CheckIn(spot.id.clone())))
            .style(check_in_style)
            .width(Length::Fill),
    ]
    .spacing(12)]
    .spacing(6);
    if let Some(when) = &spot.last_check_in {
        actions = actions.push(text(format!("Last check-in: {}", when)).size(12).color(style::GRAY));
    }

    let occupancy = column![
        row![
            text("Live Occupancy").size(16).font(style::BOLD),
            horizontal_space(),
            style::badge(
                format!("Currently {}", spot.crowd_status),
                style::crowd_color(spot.crowd_status)
            ),
        ]
        .align_y(Alignment::Center),
        canvas(OccupancyChart {
            samples: &spot.occupancy_data,
        })
        .width(Length::Fill)
        .height(Length::Fixed(180.0)),
    ]
    .spacing(12);

    let amenities: Vec<Element<Message>> = spot
        .amenities
        .iter()
        .map(|a| style::chip(a.as_str()))
        .collect();
    let about = column![
        text("About").size(16).font(style::BOLD),
        text(&spot.description).size(14).color(style::GRAY),
        Wrap::with_elements(amenities).spacing(8.0).line_spacing(8.0),
    ]
    .spacing(10);

    let reviews: Element<Message> = if spot.reviews.is_empty() {
        container(text("No reviews yet. Be the first!").color(style::GRAY))
            .padding(24)
            .center_x(Length::Fill)
            .into()
    } else {
        Column::with_children(spot.reviews.iter().map(review_card))
            .spacing(12)
            .into()
    };

    let reviews_section = column![
        row![
            text("Reviews").size(16).font(style::BOLD),
            horizontal_space(),
            button(text("Write a Review").size(13))
                .on_press(Message::Navigate(Screen::Review, None))
                .style(button::text),
        ]
        .align_y(Alignment::Center),
        reviews,
    ]
    .spacing(12);

    scrollable(
        column![top_bar, header, actions, occupancy, about, reviews_section]
            .spacing(22)
            .padding(16),
    )
    .height(Length::Fill)
    .into()
}

fn review_card(review: &Review) -> Element<'_, Message> {
    let content = column![
        row![
            column![
                text(&review.user).size(14).font(style::BOLD),
                text(style::stars(review.rating)).size(12).color(style::STAR),
            ]
            .spacing(2),
            horizontal_space(),
            text(&review.date).size(12).color(style::GRAY),
        ],
        text(&review.text).size(14),
    ]
    .spacing(8);

    container(content)
        .padding(14)
        .width(Length::Fill)
        .style(style::card)
        .into()
}
