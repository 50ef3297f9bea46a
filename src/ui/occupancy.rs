/// Live occupancy bar chart
/// One bar per time slot, colored by how full the spot is. Hovering a bar
/// shows its percentage.
use iced::alignment;
use iced::widget::canvas::{self, Frame, Text};
use iced::{mouse, Color, Pixels, Point, Rectangle, Size};

use super::style;
use crate::state::data::OccupancySample;
use crate::Message;

/// Space reserved under the bars for time labels
const LABEL_HEIGHT: f32 = 18.0;
/// Space reserved above the bars for the hover readout
const READOUT_HEIGHT: f32 = 16.0;

/// Occupancy chart data
#[derive(Debug, Clone)]
pub struct OccupancyChart<'a> {
    pub samples: &'a [OccupancySample],
}

impl<'a> OccupancyChart<'a> {
    /// Index of the bar under a point in chart coordinates
    fn slot_at(&self, width: f32, position: Point) -> Option<usize> {
        if self.samples.is_empty() || width <= 0.0 {
            return None;
        }
        let slot_width = width / self.samples.len() as f32;
        let index = (position.x / slot_width) as usize;
        (index < self.samples.len()).then_some(index)
    }
}

impl canvas::Program<Message> for OccupancyChart<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if self.samples.is_empty() {
            return vec![frame.into_geometry()];
        }

        let width = bounds.width;
        let chart_height = (bounds.height - LABEL_HEIGHT - READOUT_HEIGHT).max(0.0);
        let slot_width = width / self.samples.len() as f32;
        let bar_width = slot_width * 0.6;
        let hovered = cursor
            .position_in(bounds)
            .and_then(|p| self.slot_at(width, p));

        for (i, sample) in self.samples.iter().enumerate() {
            let level = f32::from(sample.level.min(100)) / 100.0;
            let bar_height = level * chart_height;
            let x = i as f32 * slot_width + (slot_width - bar_width) / 2.0;
            let y = READOUT_HEIGHT + chart_height - bar_height;

            if hovered == Some(i) {
                frame.fill_rectangle(
                    Point::new(i as f32 * slot_width, READOUT_HEIGHT),
                    Size::new(slot_width, chart_height),
                    style::LIGHT_GRAY,
                );
                frame.fill_text(Text {
                    content: format!("{}% Full", sample.level),
                    position: Point::new(x + bar_width / 2.0, 0.0),
                    color: style::BLUE,
                    size: Pixels(11.0),
                    horizontal_alignment: alignment::Horizontal::Center,
                    vertical_alignment: alignment::Vertical::Top,
                    ..Text::default()
                });
            }

            frame.fill_rectangle(
                Point::new(x, y),
                Size::new(bar_width, bar_height),
                style::band_color(sample.band()),
            );

            frame.fill_text(Text {
                content: sample.time.clone(),
                position: Point::new(x + bar_width / 2.0, bounds.height),
                color: Color::from_rgb(0.61, 0.64, 0.69),
                size: Pixels(12.0),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Bottom,
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
