use iced::widget::{button, checkbox, column, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::style;
use crate::state::filter::{NoiseLevel, AMENITY_CHOICES};
use crate::state::session::Session;
use crate::Message;

/// Full-screen filter overlay opened from the Discover tab.
/// Changes apply immediately; closing just goes back.
pub fn view(session: &Session) -> Element<'_, Message> {
    let filters = session.filters();

    let header = row![
        text("Filters").size(20),
        horizontal_space(),
        button(text("✕")).on_press(Message::Back).style(button::text),
    ]
    .align_y(Alignment::Center);

    let noise: Vec<Element<Message>> = NoiseLevel::CHOICES
        .iter()
        .map(|&level| {
            button(text(level.label()).size(13))
                .on_press(Message::NoiseSelected(level))
                .style(style::toggle_button(filters.noise_level == level))
                .padding([8, 16])
                .into()
        })
        .collect();

    let amenities: Vec<Element<Message>> = AMENITY_CHOICES
        .iter()
        .map(|&amenity| {
            checkbox(amenity, filters.has_amenity(amenity))
                .on_toggle(move |_| Message::AmenityToggled(amenity.to_string()))
                .width(Length::Fixed(170.0))
                .into()
        })
        .collect();

    let open_now = column![
        checkbox("Show Open Now", filters.open_now).on_toggle(Message::OpenNowToggled),
        text("Only show spots currently open").size(12).color(style::GRAY),
    ]
    .spacing(4);

    let body = column![
        section("Noise Level", Wrap::with_elements(noise).spacing(8.0).line_spacing(8.0).into()),
        section(
            "Amenities",
            Wrap::with_elements(amenities).spacing(12.0).line_spacing(12.0).into()
        ),
        open_now,
    ]
    .spacing(28);

    let matching = session.filtered_spots().len();
    let footer = row![
        button(text("Reset"))
            .on_press(Message::ResetFilters)
            .style(button::secondary)
            .width(Length::Fill),
        button(text(format!("Show {} Spots", matching)))
            .on_press(Message::Back)
            .style(button::primary)
            .width(Length::Fill),
    ]
    .spacing(12);

    column![header, scrollable(body).height(Length::Fill), footer]
        .spacing(16)
        .padding(20)
        .into()
}

fn section<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    column![text(title).size(14), content].spacing(10).into()
}
