//! Soft purple glow behind the quote
//!
//! A blurred disc approximated by stacked translucent circles, pulsing in
//! scale (1 → 1.2 → 1) and turning once every 20 seconds.

use std::f32::consts::TAU;
use std::time::Duration;

use iced::widget::canvas;
use iced::widget::canvas::{Frame, Geometry, Path};
use iced::{Element, Point, Radians, Rectangle, Renderer, Theme, Vector, mouse};

use crate::app::Message;
use crate::ui::animation::{Loop, keyframes};
use crate::ui::theme;

/// Diameter of the glow core at scale 1
pub const GLOW_DIAMETER: f32 = 256.0;
/// Canvas edge; leaves room for the blur falloff and the pulse
const CANVAS_SIZE: f32 = GLOW_DIAMETER * 1.8;
const GLOW_CYCLE: Loop = Loop::new(Duration::from_secs(20));
const SCALE_KEYFRAMES: [f32; 3] = [1.0, 1.2, 1.0];
/// Layers used to fake the blur falloff
const BLUR_LAYERS: usize = 10;

struct GlowDrawer {
    scale: f32,
    angle: f32,
    opacity: f32,
}

impl<Message> canvas::Program<Message> for GlowDrawer {
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
        let radius = GLOW_DIAMETER / 2.0 * self.scale;

        frame.translate(Vector::new(bounds.width / 2.0, bounds.height / 2.0));
        frame.rotate(Radians(self.angle));

        for layer in 0..BLUR_LAYERS {
            let t = layer as f32 / BLUR_LAYERS as f32;
            // Outer layers are wider and fainter
            let layer_radius = radius * (1.6 - 0.6 * t);
            let alpha =
                3.0 * theme::GLOW_ALPHA * self.opacity * (0.15 + 0.85 * t) / BLUR_LAYERS as f32;
            // Slight off-centre so the turn is visible
            let offset = Point::new(radius * 0.08 * (1.0 - t), 0.0);
            frame.fill(
                &Path::circle(offset, layer_radius),
                theme::faded(theme::GLOW, alpha),
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Build the glow layer at `elapsed` since mount
pub fn view<'a>(elapsed: Duration, opacity: f32, scale: f32) -> Element<'a, Message> {
    let phase = GLOW_CYCLE.phase(elapsed);
    let size = CANVAS_SIZE * scale;
    canvas(GlowDrawer {
        scale: keyframes(&SCALE_KEYFRAMES, phase) * scale,
        angle: phase * TAU,
        opacity,
    })
    .width(size)
    .height(size)
    .into()
}
