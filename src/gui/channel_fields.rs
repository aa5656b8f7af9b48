//! Red, green and blue decimal entry bound to one color.

use super::geometry::Point;
use super::input::{Key, KeyInput};
use super::metrics::{FieldMetrics, Metrics};
use super::render::RenderContext;
use super::text_field::{InputFilter, TextField};
use super::widget::{Clickable, Drawable, Focusable};
use crate::color::{Color, clamp};

/// Digits per channel field.
pub const CHANNEL_DIGITS: usize = 3;

/// Resolve one channel's text.
///
/// Empty text contributes zero. Text that does not parse keeps `last`.
/// Parsed values are clamped to the 8-bit range.
pub fn parse_channel(text: &str, last: u8) -> u8 {
    if text.is_empty() {
        return 0;
    }
    match text.parse::<i64>() {
        Ok(value) => clamp(value, 0, 255) as u8,
        Err(_) => last,
    }
}

/// Three synchronized channel fields with a focus cycle.
#[derive(Debug, Clone)]
pub struct ChannelFields {
    fields: [TextField; 3],
    color: Color,
}

impl ChannelFields {
    pub fn new(positions: [Point; 3], field: FieldMetrics, metrics: &Metrics, color: Color) -> Self {
        let fields = positions.map(|at| {
            TextField::new(at, field, metrics, InputFilter::Decimal, CHANNEL_DIGITS)
        });
        let mut channels = Self { fields, color };
        channels.set_color(color);
        channels
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn fields(&self) -> &[TextField; 3] {
        &self.fields
    }

    pub fn text(&self, index: usize) -> &str {
        self.fields[index].text()
    }

    /// Rewrite every field from `color`.
    pub fn set_color(&mut self, color: Color) {
        self.color = Color::from_raw(color.rgb());
        for (field, value) in self.fields.iter_mut().zip(channels_of(color)) {
            field.set_text(&value.to_string());
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.fields.iter().position(TextField::is_focused)
    }

    /// Move focus to `index`, or clear it.
    pub fn focus(&mut self, index: Option<usize>) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.set_focused(Some(i) == index);
        }
    }

    /// Advance focus: first, second, third, none, first again.
    /// `reverse` walks the same cycle backwards.
    pub fn cycle_focus(&mut self, reverse: bool) {
        let count = self.fields.len();
        let next = match (self.focused(), reverse) {
            (None, false) => Some(0),
            (None, true) => Some(count - 1),
            (Some(i), false) if i + 1 < count => Some(i + 1),
            (Some(i), true) if i > 0 => Some(i - 1),
            (Some(_), _) => None,
        };
        self.focus(next);
    }

    /// Handle one key. Returns whether the color changed.
    pub fn key_typed(&mut self, input: KeyInput) -> bool {
        if input.key == Key::Tab {
            self.cycle_focus(input.shift);
            return false;
        }
        let Some(index) = self.focused() else {
            return false;
        };
        if !self.fields[index].key_typed(input) {
            return false;
        }

        let before = self.color;
        let last = channels_of(before);
        let mut values = [0u8; 3];
        for (i, field) in self.fields.iter().enumerate() {
            values[i] = parse_channel(field.text(), last[i]);
        }
        self.color = Color::from_rgb(values[0], values[1], values[2]);

        for (i, field) in self.fields.iter_mut().enumerate() {
            let text = field.text();
            // The field being typed in keeps its text unless it was clamped
            let keep = i == index && (text.is_empty() || text.parse::<u16>().is_ok_and(|v| v <= 255));
            if !keep {
                field.set_text(&values[i].to_string());
            }
        }
        self.color != before
    }
}

impl Clickable for ChannelFields {
    fn on_press(&mut self, at: Point) -> bool {
        let mut hit = false;
        for field in &mut self.fields {
            hit |= field.on_press(at);
        }
        hit
    }
}

impl Drawable for ChannelFields {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        for field in &self.fields {
            field.draw(ctx, mouse);
        }
    }
}

fn channels_of(color: Color) -> [u8; 3] {
    [color.red(), color.green(), color.blue()]
}
