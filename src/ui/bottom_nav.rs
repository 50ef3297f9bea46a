use iced::widget::{button, container, row, text};
use iced::{Element, Length};

use super::style;
use crate::state::navigation::Screen;
use crate::Message;

/// Persistent tab bar for the top-level screens
pub fn view(active: Screen) -> Element<'static, Message> {
    let tabs = row(Screen::TABS.map(|tab| {
        let color = if tab == active { style::BLUE } else { style::GRAY };
        button(
            container(text(tab.tab_label()).size(12).color(color)).center_x(Length::Fill),
        )
        .on_press(Message::Navigate(tab, None))
        .style(button::text)
        .width(Length::Fill)
        .into()
    }))
    .spacing(8);

    container(tabs)
        .padding([10, 24])
        .width(Length::Fill)
        .style(style::card)
        .into()
}
