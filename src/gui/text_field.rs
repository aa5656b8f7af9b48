//! Single-line text entry with a character filter.

use super::geometry::{Bounds, Point};
use super::input::{Key, KeyInput};
use super::metrics::{FieldMetrics, Metrics};
use super::render::RenderContext;
use super::widget::{Clickable, Drawable, Focusable, theme};

/// Which characters a field accepts. Rejected characters are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFilter {
    /// `[0-9a-fA-F]`
    Hex,
    /// `[0-9]`
    Decimal,
}

impl InputFilter {
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Hex => c.is_ascii_hexdigit(),
            Self::Decimal => c.is_ascii_digit(),
        }
    }
}

/// An editable text buffer with a cursor.
///
/// Only ASCII reaches the buffer, so cursor positions are byte offsets.
#[derive(Debug, Clone)]
pub struct TextField {
    bounds: Bounds,
    border: i32,
    padding: i32,
    text_offset: i32,
    char_width: i32,
    filter: InputFilter,
    max_len: usize,
    text: String,
    cursor: usize,
    focused: bool,
    pub enabled: bool,
}

impl TextField {
    pub fn new(
        at: Point,
        field: FieldMetrics,
        metrics: &Metrics,
        filter: InputFilter,
        max_len: usize,
    ) -> Self {
        Self {
            bounds: Bounds::new(at.x, at.y, field.width, field.height),
            border: field.border,
            padding: field.padding,
            text_offset: metrics.text_offset(field.height),
            char_width: metrics.char_width,
            filter,
            max_len,
            text: String::new(),
            cursor: 0,
            focused: false,
            enabled: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the buffer, dropping filtered characters and truncating to
    /// the maximum length. The cursor moves to the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = text
            .chars()
            .filter(|c| self.filter.accepts(*c))
            .take(self.max_len)
            .collect();
        self.cursor = self.text.len();
    }

    /// Apply one key to a focused, enabled field.
    ///
    /// Returns whether the buffer changed. Keys the field does not edit
    /// with (Tab, Enter, Escape) are ignored.
    pub fn key_typed(&mut self, input: KeyInput) -> bool {
        if !self.focused || !self.enabled {
            return false;
        }
        match input.key {
            Key::Char(c) => {
                if !self.filter.accepts(c) || self.text.len() >= self.max_len {
                    return false;
                }
                self.text.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            Key::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                self.text.remove(self.cursor);
                true
            }
            Key::Delete => {
                if self.cursor >= self.text.len() {
                    return false;
                }
                self.text.remove(self.cursor);
                true
            }
            Key::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            Key::Right => {
                self.cursor = (self.cursor + 1).min(self.text.len());
                false
            }
            Key::Home => {
                self.cursor = 0;
                false
            }
            Key::End => {
                self.cursor = self.text.len();
                false
            }
            Key::Tab | Key::Enter | Key::Escape => false,
        }
    }
}

impl Focusable for TextField {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

impl Clickable for TextField {
    /// Focus follows the click: a press inside focuses, anywhere else
    /// blurs. Disabled fields never take focus.
    fn on_press(&mut self, at: Point) -> bool {
        let hit = self.enabled && self.bounds.contains(at);
        self.focused = hit;
        if hit {
            let column = (at.x - self.bounds.x - self.border - self.padding) / self.char_width.max(1);
            self.cursor = (column.max(0) as usize).min(self.text.len());
        }
        hit
    }
}

impl Drawable for TextField {
    fn draw(&self, ctx: &mut dyn RenderContext, _mouse: Point) {
        if self.border > 0 {
            let border = if self.focused {
                theme::BORDER_HOT
            } else {
                theme::BORDER
            };
            ctx.fill_rect(self.bounds, border);
        }
        ctx.fill_rect(self.bounds.inset(self.border), theme::FIELD_BACKGROUND);

        let color = if self.enabled {
            theme::TEXT_FIELD
        } else {
            theme::TEXT_FIELD_DISABLED
        };
        let origin = Point::new(
            self.bounds.x + self.border + self.padding,
            self.bounds.y + self.text_offset,
        );
        ctx.draw_text(origin, &self.text, color);

        if self.focused {
            let caret = origin.offset(self.char_width * self.cursor as i32, 0);
            ctx.draw_text(caret, "_", color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(filter: InputFilter, max_len: usize) -> TextField {
        let metrics = Metrics::gui();
        let mut field = TextField::new(Point::new(0, 0), metrics.hex_field, &metrics, filter, max_len);
        field.set_focused(true);
        field
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut f = field(InputFilter::Decimal, 3);
        f.set_text("13");
        f.key_typed(Key::Left.into());
        assert!(f.key_typed(KeyInput::char('2')));
        assert_eq!(f.text(), "123");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_max_length_drops_input() {
        let mut f = field(InputFilter::Decimal, 3);
        f.set_text("255");
        assert!(!f.key_typed(KeyInput::char('5')));
        assert_eq!(f.text(), "255");
    }

    #[test]
    fn test_unfocused_field_ignores_keys() {
        let mut f = field(InputFilter::Hex, 6);
        f.set_focused(false);
        assert!(!f.key_typed(KeyInput::char('a')));
        assert_eq!(f.text(), "");
    }
}
