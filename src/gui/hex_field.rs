//! Six-digit hex entry bound to one color.

use super::geometry::{Bounds, Point};
use super::input::KeyInput;
use super::metrics::Metrics;
use super::render::RenderContext;
use super::text_field::{InputFilter, TextField};
use super::widget::{Clickable, Drawable, Focusable};
use crate::color::{Color, color_to_hex, hex_to_color};

/// Maximum hex digits accepted.
pub const HEX_DIGITS: usize = 6;

/// A text field whose parsed value is the authoritative color.
///
/// The color is recomputed after every accepted edit; malformed text
/// resolves through [`hex_to_color`] and never fails.
#[derive(Debug, Clone)]
pub struct HexColorField {
    field: TextField,
    color: Color,
}

impl HexColorField {
    pub fn new(at: Point, color: Color, metrics: &Metrics) -> Self {
        let mut field = TextField::new(at, metrics.hex_field, metrics, InputFilter::Hex, HEX_DIGITS);
        field.set_text(&color_to_hex(color.rgb() as i32));
        Self {
            color: hex_to_color(field.text()),
            field,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.field.bounds()
    }

    pub fn text(&self) -> &str {
        self.field.text()
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.field.set_text(&color_to_hex(color.rgb() as i32));
        self.color = hex_to_color(self.field.text());
    }

    pub fn is_enabled(&self) -> bool {
        self.field.enabled
    }

    /// Enabling keeps focus; disabling drops it.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.field.enabled = enabled;
        if !enabled {
            self.field.set_focused(false);
        }
    }

    /// Returns whether the color may have changed.
    pub fn key_typed(&mut self, input: KeyInput) -> bool {
        if !self.field.key_typed(input) {
            return false;
        }
        self.color = hex_to_color(self.field.text());
        true
    }
}

impl Focusable for HexColorField {
    fn is_focused(&self) -> bool {
        self.field.is_focused()
    }

    fn set_focused(&mut self, focused: bool) {
        self.field.set_focused(focused);
    }
}

impl Clickable for HexColorField {
    fn on_press(&mut self, at: Point) -> bool {
        self.field.on_press(at)
    }
}

impl Drawable for HexColorField {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        self.field.draw(ctx, mouse);
    }
}
