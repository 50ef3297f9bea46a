/// Shared colors and small building blocks for the screens
use iced::widget::{button, container, text};
use iced::font::{Font, Weight};
use iced::{Background, Border, Color, Element, Theme};

use crate::state::data::{CrowdStatus, OccupancyBand};
use crate::Message;

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const NAVY: Color = Color::from_rgb(0.12, 0.23, 0.54);
pub const BLUE: Color = Color::from_rgb(0.15, 0.39, 0.92);
pub const GRAY: Color = Color::from_rgb(0.42, 0.45, 0.50);
pub const LIGHT_GRAY: Color = Color::from_rgb(0.95, 0.96, 0.97);
pub const STAR: Color = Color::from_rgb(0.98, 0.80, 0.08);

pub const GREEN: Color = Color::from_rgb(0.06, 0.73, 0.51);
pub const AMBER: Color = Color::from_rgb(0.96, 0.62, 0.04);
pub const RED: Color = Color::from_rgb(0.94, 0.27, 0.27);

pub fn crowd_color(status: CrowdStatus) -> Color {
    match status {
        CrowdStatus::Quiet => GREEN,
        CrowdStatus::Moderate => AMBER,
        CrowdStatus::Busy => RED,
    }
}

pub fn band_color(band: OccupancyBand) -> Color {
    match band {
        OccupancyBand::Low => GREEN,
        OccupancyBand::Medium => AMBER,
        OccupancyBand::High => RED,
    }
}

/// White rounded card
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            color: Color::from_rgb(0.90, 0.91, 0.93),
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Small pill with tinted background and colored text
pub fn badge<'a>(label: impl text::IntoFragment<'a>, color: Color) -> Element<'a, Message> {
    container(text(label).size(11).color(color))
        .padding([2, 8])
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..color })),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Gray amenity chip
pub fn chip<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(label).size(11).color(GRAY))
        .padding([3, 10])
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(LIGHT_GRAY)),
            border: Border {
                radius: 10.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Primary style when selected, secondary otherwise
pub fn toggle_button(selected: bool) -> fn(&Theme, button::Status) -> button::Style {
    if selected {
        button::primary
    } else {
        button::secondary
    }
}

/// "★★★☆☆" for a 1-5 rating
pub fn stars(rating: u8) -> String {
    (1..=5)
        .map(|i| if i <= rating { '★' } else { '☆' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars() {
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(3), "★★★☆☆");
        assert_eq!(stars(5), "★★★★★");
    }
}
