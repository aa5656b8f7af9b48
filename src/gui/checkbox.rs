//! Two-state checkbox with an optional label.

use super::geometry::{Bounds, Point};
use super::metrics::Metrics;
use super::render::RenderContext;
use super::widget::{Clickable, Drawable, theme};

/// A checkbox. Pressing it only reports the hit; the owner decides what
/// the new checked state is.
#[derive(Debug, Clone)]
pub struct Checkbox {
    bounds: Bounds,
    box_size: i32,
    label: Option<String>,
    label_offset: i32,
    text_offset: i32,
    pub checked: bool,
    pub enabled: bool,
}

impl Checkbox {
    pub fn new(at: Point, label: Option<String>, metrics: &Metrics) -> Self {
        let box_size = metrics.checkbox_size;
        let label_offset = box_size + metrics.checkbox_label_gap;
        let width = match &label {
            Some(text) => label_offset + metrics.text_width(text),
            None => box_size,
        };
        Self {
            bounds: Bounds::new(at.x, at.y, width, metrics.checkbox_height),
            box_size,
            label,
            label_offset,
            text_offset: metrics.text_offset(metrics.checkbox_height),
            checked: false,
            enabled: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Hit test that ignores disabled boxes.
    pub fn hit(&self, at: Point) -> bool {
        self.enabled && self.bounds.contains(at)
    }

    fn box_bounds(&self) -> Bounds {
        Bounds::new(self.bounds.x, self.bounds.y, self.box_size, self.bounds.height)
    }
}

impl Drawable for Checkbox {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        let hot = self.hit(mouse);
        let frame = self.box_bounds();
        ctx.fill_rect(frame, if hot { theme::BORDER_HOT } else { theme::BORDER });
        let inner = frame.inset(1);
        if inner.width > 0 && inner.height > 0 {
            ctx.fill_rect(inner, theme::FIELD_BACKGROUND);
        }

        let text_color = if self.enabled {
            theme::TEXT
        } else {
            theme::TEXT_DISABLED
        };
        if self.checked {
            let mark = Point::new(frame.x + (frame.width - 1) / 2, frame.y + self.text_offset);
            ctx.draw_text(mark, "x", text_color);
        }
        if let Some(label) = &self.label {
            let at = Point::new(self.bounds.x + self.label_offset, self.bounds.y + self.text_offset);
            ctx.draw_text(at, label, text_color);
        }
    }
}

impl Clickable for Checkbox {
    fn on_press(&mut self, at: Point) -> bool {
        self.hit(at)
    }
}
