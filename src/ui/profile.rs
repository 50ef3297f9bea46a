use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use super::style;
use crate::config::Profile;
use crate::state::data::StudySpot;
use crate::state::navigation::Screen;
use crate::state::session::Session;
use crate::Message;

/// Lists on the profile tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Favorites,
    Recent,
}

impl ProfileTab {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileTab::Favorites => "My Favorites",
            ProfileTab::Recent => "Recently Visited",
        }
    }
}

/// Counters shown under the profile name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub favorites: usize,
    pub check_ins: usize,
    pub reviews: usize,
}

impl ProfileStats {
    pub fn from_session(session: &Session) -> Self {
        Self {
            favorites: session.catalog().favorites().count(),
            check_ins: session.catalog().checked_in().count(),
            reviews: session.my_review_count(),
        }
    }
}

pub fn view<'a>(session: &'a Session, profile: &'a Profile, tab: ProfileTab) -> Element<'a, Message> {
    let stats = ProfileStats::from_session(session);

    let header = column![
        text(&profile.display_name).size(22).font(style::BOLD),
        text(&profile.program).size(13).color(style::GRAY),
        row![
            stat(stats.favorites, "FAVORITES"),
            stat(stats.check_ins, "CHECK-INS"),
            stat(stats.reviews, "REVIEWS"),
        ]
        .spacing(32),
    ]
    .spacing(8)
    .align_x(Alignment::Center)
    .width(Length::Fill);

    let tabs = row([ProfileTab::Favorites, ProfileTab::Recent].map(|t| {
        button(text(t.label()).size(13))
            .on_press(Message::ProfileTabSelected(t))
            .style(style::toggle_button(t == tab))
            .width(Length::Fill)
            .into()
    }))
    .spacing(8);

    let (spots, empty_hint): (Vec<&StudySpot>, &str) = match tab {
        ProfileTab::Favorites => (
            session.catalog().favorites().collect(),
            "No favorites yet. Tap ♡ on a spot to save it.",
        ),
        ProfileTab::Recent => (
            session.catalog().checked_in().collect(),
            "No check-ins yet.",
        ),
    };

    let list: Element<Message> = if spots.is_empty() {
        container(text(empty_hint).color(style::GRAY))
            .padding(24)
            .center_x(Length::Fill)
            .into()
    } else {
        Column::with_children(spots.into_iter().map(|spot| entry(spot, tab)))
            .spacing(10)
            .into()
    };

    column![header, tabs, scrollable(list).height(Length::Fill)]
        .spacing(20)
        .padding(20)
        .into()
}

fn stat<'a>(value: usize, label: &'a str) -> Element<'a, Message> {
    column![
        text(value.to_string()).size(20).color(style::BLUE).font(style::BOLD),
        text(label).size(10).color(style::GRAY),
    ]
    .align_x(Alignment::Center)
    .into()
}

fn entry(spot: &StudySpot, tab: ProfileTab) -> Element<'_, Message> {
    let subtitle = match tab {
        ProfileTab::Favorites => format!("★ {:.1}  •  {}", spot.rating, spot.category),
        ProfileTab::Recent => format!(
            "Visited {}",
            spot.last_check_in.as_deref().unwrap_or("recently").to_lowercase()
        ),
    };

    button(
        container(
            column![
                text(&spot.name).size(14).font(style::BOLD),
                text(subtitle).size(12).color(style::GRAY),
            ]
            .spacing(4),
        )
        .padding(12)
        .width(Length::Fill)
        .style(style::card),
    )
    .on_press(Message::Navigate(Screen::Detail, Some(spot.id.clone())))
    .style(button::text)
    .padding(0)
    .width(Length::Fill)
    .into()
}
