//! Labelled push button.

use super::geometry::{Bounds, Point};
use super::metrics::Metrics;
use super::render::RenderContext;
use super::widget::{Clickable, Drawable, theme};

#[derive(Debug, Clone)]
pub struct Button {
    bounds: Bounds,
    label: String,
    label_at: Point,
    pub enabled: bool,
}

impl Button {
    pub fn new(bounds: Bounds, label: String, metrics: &Metrics) -> Self {
        let label_at = Point::new(
            bounds.x + (bounds.width - metrics.text_width(&label)) / 2,
            bounds.y + metrics.text_offset(bounds.height),
        );
        Self {
            bounds,
            label,
            label_at,
            enabled: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hit(&self, at: Point) -> bool {
        self.enabled && self.bounds.contains(at)
    }
}

impl Drawable for Button {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        let fill = if self.hit(mouse) {
            theme::BUTTON_HOT
        } else {
            theme::BUTTON
        };
        ctx.fill_rect(self.bounds, fill);
        let text = if self.enabled {
            theme::TEXT
        } else {
            theme::TEXT_DISABLED
        };
        ctx.draw_text(self.label_at, &self.label, text);
    }
}

impl Clickable for Button {
    fn on_press(&mut self, at: Point) -> bool {
        self.hit(at)
    }
}
