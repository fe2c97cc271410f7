//! Star field background layer
//!
//! Draws the mount-time [`StarField`] on a canvas. Positions are stored in
//! percent, so the field stretches with the window.

use iced::widget::canvas;
use iced::widget::canvas::{Frame, Geometry, Path};
use iced::{Element, Fill, Point, Rectangle, Renderer, Theme, mouse};

use crate::app::Message;
use crate::features::starfield::StarField;
use crate::ui::theme;

/// Brightness of stars when animation is off
const STATIC_BRIGHTNESS: f32 = 0.6;

struct StarFieldDrawer<'a> {
    field: &'a StarField,
    /// Seconds since mount, or `None` to draw the field static
    elapsed: Option<f32>,
}

impl<'a, Message> canvas::Program<Message> for StarFieldDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for star in self.field.stars() {
            let value = match self.elapsed {
                Some(elapsed) => star.pulse(elapsed),
                None => STATIC_BRIGHTNESS,
            };
            // Opacity and scale share the same keyframes
            if value <= 0.01 {
                continue;
            }

            let center = Point::new(
                bounds.width * star.x / 100.0,
                bounds.height * star.y / 100.0,
            );
            let radius = star.size / 2.0 * value;
            frame.fill(&Path::circle(center, radius), theme::faded(theme::STAR, value));
        }

        vec![frame.into_geometry()]
    }
}

/// Build the star field layer
pub fn view(field: &StarField, elapsed: Option<f32>) -> Element<'_, Message> {
    canvas(StarFieldDrawer { field, elapsed })
        .width(Fill)
        .height(Fill)
        .into()
}
