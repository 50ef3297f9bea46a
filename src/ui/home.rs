/// Discover tab: search, category chips and the filtered spot list
use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, text_input, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::style;
use crate::state::data::StudySpot;
use crate::state::filter::CATEGORIES;
use crate::state::navigation::Screen;
use crate::state::session::Session;
use crate::Message;

/// Number of amenities previewed on a card before "+N"
const AMENITY_PREVIEW: usize = 2;

pub fn view(session: &Session) -> Element<'_, Message> {
    let filter_label = if session.filters().is_default() {
        "Filters"
    } else {
        "Filters •"
    };

    let search = row![
        text_input("Find a Spot...", session.search_term())
            .on_input(Message::SearchChanged)
            .padding(10),
        button(text(filter_label))
            .on_press(Message::Navigate(Screen::Filter, None))
            .style(style::toggle_button(!session.filters().is_default()))
            .padding([10, 14]),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let chips: Vec<Element<Message>> = CATEGORIES
        .iter()
        .map(|&category| {
            button(text(category).size(13))
                .on_press(Message::CategorySelected(category.to_string()))
                .style(style::toggle_button(session.active_category() == category))
                .padding([6, 16])
                .into()
        })
        .collect();

    let spots = session.filtered_spots();
    let list: Element<Message> = if spots.is_empty() {
        container(text("No spots match your search.").color(style::GRAY))
            .padding(24)
            .center_x(Length::Fill)
            .into()
    } else {
        Column::with_children(spots.into_iter().map(spot_card))
            .spacing(12)
            .into()
    };

    column![
        text("McStudy").size(28).font(style::BOLD).color(style::NAVY),
        search,
        Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0),
        text("Popular Study Spots").size(18).font(style::BOLD),
        scrollable(list).height(Length::Fill),
    ]
    .spacing(14)
    .padding(16)
    .into()
}

/// Amenity chips for a card: the first few, then "+N"
fn amenity_preview(spot: &StudySpot) -> Vec<String> {
    let mut chips: Vec<String> = spot
        .amenities
        .iter()
        .take(AMENITY_PREVIEW)
        .cloned()
        .collect();
    if spot.amenities.len() > AMENITY_PREVIEW {
        chips.push(format!("+{}", spot.amenities.len() - AMENITY_PREVIEW));
    }
    chips
}

fn spot_card(spot: &StudySpot) -> Element<'_, Message> {
    let amenities = amenity_preview(spot)
        .into_iter()
        .fold(row![].spacing(6), |row, label| row.push(style::chip(label)));

    let content = column![
        row![
            text(&spot.name).size(15).font(style::BOLD),
            horizontal_space(),
            style::badge(spot.crowd_status.label(), style::crowd_color(spot.crowd_status)),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
        row![
            text(format!("★ {:.1}", spot.rating)).size(12).color(style::STAR),
            text(format!("•  {}", spot.distance)).size(12).color(style::GRAY),
        ]
        .spacing(6),
        amenities,
    ]
    .spacing(8);

    button(container(content).padding(12).width(Length::Fill).style(style::card))
        .on_press(Message::Navigate(Screen::Detail, Some(spot.id.clone())))
        .style(button::text)
        .padding(0)
        .width(Length::Fill)
        .into()
}
