//! Swatch button that opens a [`ColorPicker`].

use super::geometry::{Bounds, Point};
use super::input::KeyInput;
use super::metrics::Metrics;
use super::picker::{ColorPicker, DialogResult, PickerPart};
use super::render::RenderContext;
use super::widget::{Clickable, Drawable, theme};
use crate::color::Color;
use crate::i18n::Localizer;

/// A color swatch with a label to its right.
///
/// The button owns the picker it opens. The picker's color reaches the
/// button only when the picker reports [`DialogResult::Ok`].
#[derive(Debug, Clone)]
pub struct ColorButton {
    bounds: Bounds,
    color: Color,
    label: String,
    label_at: Point,
    picker: Option<ColorPicker>,
    enabled: bool,
}

impl ColorButton {
    pub fn new(at: Point, color: Color, label: String, metrics: &Metrics) -> Self {
        let bounds = Bounds::new(at.x, at.y, metrics.button_width, metrics.button_height);
        Self {
            label_at: Point::new(
                bounds.right() + metrics.button_label_gap,
                bounds.y + metrics.text_offset(bounds.height),
            ),
            bounds,
            color,
            label,
            picker: None,
            enabled: true,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling discards an open picker.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.close_picker();
        }
    }

    pub fn picker(&self) -> Option<&ColorPicker> {
        self.picker.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.picker.is_some()
    }

    /// Open the picker anchored at the button's right edge.
    pub fn open_picker(&mut self, viewport: Bounds, metrics: &Metrics, localizer: &dyn Localizer) {
        if !self.enabled || self.picker.is_some() {
            return;
        }
        let anchor = Point::new(self.bounds.right(), self.bounds.y);
        self.picker = Some(ColorPicker::open(anchor, viewport, self.color, metrics, localizer));
    }

    /// Drop the picker without taking its color.
    pub fn close_picker(&mut self) {
        if self.picker.take().is_some() {
            tracing::debug!(color = %self.color, "discarded color picker");
        }
    }

    /// Forward a press to the open picker and settle its result.
    ///
    /// Returns whether the press landed on the picker, and which part.
    pub fn picker_pressed(&mut self, at: Point) -> Option<PickerPart> {
        let picker = self.picker.as_mut()?;
        let part = picker.part_at(at);
        picker.mouse_pressed(at);
        self.settle();
        part
    }

    pub fn picker_dragged(&mut self, at: Point) {
        if let Some(picker) = self.picker.as_mut() {
            picker.mouse_dragged(at);
        }
    }

    pub fn picker_released(&mut self, at: Point) {
        if let Some(picker) = self.picker.as_mut() {
            picker.mouse_released(at);
        }
    }

    /// Returns whether an open picker took the key.
    pub fn picker_key_typed(&mut self, input: KeyInput) -> bool {
        let Some(picker) = self.picker.as_mut() else {
            return false;
        };
        picker.key_typed(input);
        self.settle();
        true
    }

    pub fn has_text_focus(&self) -> bool {
        self.picker.as_ref().is_some_and(ColorPicker::has_text_focus)
    }

    /// Draw the open picker, if any. Called after every base control
    /// has been drawn so the picker lands on top.
    pub fn draw_picker(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        if let Some(picker) = &self.picker {
            picker.draw(ctx, mouse);
        }
    }

    fn settle(&mut self) {
        let Some(picker) = &self.picker else {
            return;
        };
        match picker.result() {
            DialogResult::None => {}
            DialogResult::Ok => {
                self.color = picker.color();
                tracing::debug!(color = %self.color, "picker confirmed");
                self.picker = None;
            }
            DialogResult::Cancel => {
                tracing::debug!("picker cancelled");
                self.picker = None;
            }
        }
    }
}

impl Clickable for ColorButton {
    /// Hit test only; the owner opens the picker since that needs the
    /// viewport and localizer.
    fn on_press(&mut self, at: Point) -> bool {
        self.enabled && self.bounds.contains(at)
    }
}

impl Drawable for ColorButton {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        let hot = self.bounds.contains(mouse) || self.picker.is_some();
        ctx.fill_rect(self.bounds, if hot { theme::BORDER_HOT } else { theme::BORDER });
        let swatch = self.bounds.inset(1);
        if swatch.width > 0 && swatch.height > 0 {
            ctx.fill_rect(swatch, self.color.opaque());
        } else {
            ctx.fill_rect(self.bounds, self.color.opaque());
        }

        if !self.label.is_empty() {
            let text = if self.enabled {
                theme::TEXT
            } else {
                theme::TEXT_DISABLED
            };
            ctx.draw_text(self.label_at, &self.label, text);
        }
    }
}
