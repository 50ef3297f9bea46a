use iced::widget::{container, text};
use iced::{Background, Border, Color, Element, Length, Theme};

use super::style;
use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown above the current screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            text: text.into(),
        }
    }
}

pub fn view(toast: &Toast) -> Element<'_, Message> {
    let color = match toast.kind {
        ToastKind::Success => style::GREEN,
        ToastKind::Error => style::RED,
    };

    container(text(&toast.text).size(14).color(Color::WHITE))
        .padding([10, 16])
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 8.0.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}
