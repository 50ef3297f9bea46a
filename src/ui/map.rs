use iced::alignment;
use iced::mouse::{self, Cursor};
use iced::widget::canvas::{self, Frame, Path, Program, Stroke, Text};
use iced::widget::{canvas as canvas_widget, column, text, text_input};
use iced::{Color, Element, Length, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector};

use super::style;
use crate::state::navigation::Screen;
use crate::state::session::Session;
use crate::Message;

/// Click radius around a pin, in pixels
const PIN_RADIUS: f32 = 14.0;

/// A spot's pin as the map draws it
#[derive(Debug, Clone)]
pub struct PinView {
    pub spot_id: String,
    pub label: String,
    /// Fraction of map height
    pub top: f32,
    /// Fraction of map width
    pub left: f32,
    /// Hidden by the current filtered view
    pub dimmed: bool,
}

/// Schematic campus map with one pin per spot
pub struct CampusMap {
    pub pins: Vec<PinView>,
}

impl CampusMap {
    /// Pins for every spot that has map coordinates
    pub fn from_session(session: &Session) -> Self {
        let visible: Vec<&str> = session
            .filtered_spots()
            .into_iter()
            .map(|s| s.id.as_str())
            .collect();

        let pins = session
            .catalog()
            .spots()
            .iter()
            .filter_map(|spot| {
                let pin = spot.map_pin.as_ref()?;
                Some(PinView {
                    spot_id: spot.id.clone(),
                    label: pin.label.clone(),
                    top: pin.top,
                    left: pin.left,
                    dimmed: !visible.contains(&spot.id.as_str()),
                })
            })
            .collect();

        CampusMap { pins }
    }

    fn pin_position(pin: &PinView, bounds: Size) -> Point {
        Point::new(pin.left * bounds.width, pin.top * bounds.height)
    }

    /// Pin under a point in map coordinates, nearest first
    fn pin_at(&self, bounds: Size, position: Point) -> Option<&PinView> {
        self.pins
            .iter()
            .map(|pin| (pin, Self::pin_position(pin, bounds).distance(position)))
            .filter(|(_, distance)| *distance <= PIN_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(pin, _)| pin)
    }
}

impl Program<Message> for CampusMap {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        // Grounds
        frame.fill_rectangle(Point::ORIGIN, size, Color::from_rgb(0.87, 0.93, 0.86));

        // Main walkways
        let walkways = Path::new(|p| {
            p.move_to(Point::new(0.0, size.height * 0.5));
            p.line_to(Point::new(size.width, size.height * 0.4));
            p.move_to(Point::new(size.width * 0.55, 0.0));
            p.line_to(Point::new(size.width * 0.45, size.height));
        });
        frame.stroke(
            &walkways,
            Stroke::default()
                .with_color(Color::from_rgb(0.97, 0.96, 0.92))
                .with_width(10.0),
        );

        let hovered = cursor
            .position_in(bounds)
            .and_then(|p| self.pin_at(size, p))
            .map(|pin| pin.spot_id.as_str());

        for pin in &self.pins {
            let center = Self::pin_position(pin, size);
            let alpha = if pin.dimmed { 0.35 } else { 1.0 };
            let radius = if hovered == Some(pin.spot_id.as_str()) { 10.0 } else { 8.0 };

            let marker = Path::circle(center, radius);
            frame.fill(&marker, Color { a: alpha, ..style::RED });
            frame.stroke(
                &marker,
                Stroke::default()
                    .with_color(Color { a: alpha, ..Color::WHITE })
                    .with_width(2.0),
            );

            frame.fill_text(Text {
                content: pin.label.clone(),
                position: center + Vector::new(0.0, radius + 4.0),
                color: Color { a: alpha, ..Color::from_rgb(0.12, 0.16, 0.22) },
                size: Pixels(12.0),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Top,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        // Clicking a pin opens that spot's details
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(position) = cursor.position_in(bounds) {
                if let Some(pin) = self.pin_at(bounds.size(), position) {
                    return (
                        canvas::event::Status::Captured,
                        Some(Message::Navigate(Screen::Detail, Some(pin.spot_id.clone()))),
                    );
                }
            }
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds) {
            Some(p) if self.pin_at(bounds.size(), p).is_some() => mouse::Interaction::Pointer,
            _ => mouse::Interaction::default(),
        }
    }
}

/// Map tab: search bar over the campus map
pub fn view(session: &Session) -> Element<'_, Message> {
    let search = text_input("Search campus map...", session.search_term())
        .on_input(Message::SearchChanged)
        .padding(10);

    column![
        search,
        canvas_widget(CampusMap::from_session(session))
            .width(Length::Fill)
            .height(Length::Fill),
        text("Tap a pin to see details").size(12).color(style::GRAY),
    ]
    .spacing(12)
    .padding(16)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::Catalog;

    fn session() -> Session {
        Session::new(Catalog::seeded().unwrap(), "You", 5)
    }

    #[test]
    fn test_pins_follow_filtered_view() {
        let mut session = session();
        session.set_search("Thode".into());

        let map = CampusMap::from_session(&session);
        assert_eq!(map.pins.len(), 6);
        let undimmed: Vec<&str> = map
            .pins
            .iter()
            .filter(|p| !p.dimmed)
            .map(|p| p.spot_id.as_str())
            .collect();
        assert_eq!(undimmed, vec!["2"]);
    }

    #[test]
    fn test_pin_hit_testing() {
        let map = CampusMap::from_session(&session());
        let size = Size::new(400.0, 600.0);

        // Thode sits at 20% across, 45% down
        let hit = map.pin_at(size, Point::new(82.0, 272.0));
        assert_eq!(hit.map(|p| p.spot_id.as_str()), Some("2"));

        assert!(map.pin_at(size, Point::new(5.0, 5.0)).is_none());
    }
}
