//! One panel row per effect: a checkbox plus a color widget.

use super::checkbox::Checkbox;
use super::color_button::ColorButton;
use super::geometry::{Bounds, Point};
use super::hex_field::HexColorField;
use super::input::KeyInput;
use super::metrics::Metrics;
use super::picker::{ColorPicker, PickerPart};
use super::render::RenderContext;
use super::widget::{Clickable, Drawable, Focusable};
use crate::color::{Color, WHITE, hex_to_color};
use crate::config::ModConfig;
use crate::i18n::Localizer;

/// Which color widget the rows carry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// Six-digit hex entry; the label is tinted with the entered color.
    HexField,
    /// Swatch button that opens a picker.
    #[default]
    ColorButton,
}

/// Part of a line that accepted a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineRole {
    Checkbox,
    HexField,
    ColorButton,
}

/// Per-line environment needed to open a picker.
#[derive(Clone, Copy)]
pub struct LineContext<'a> {
    pub viewport: Bounds,
    pub metrics: &'a Metrics,
    pub localizer: &'a dyn Localizer,
}

#[derive(Debug, Clone)]
enum LineWidget {
    Hex {
        field: HexColorField,
        label: String,
        label_at: Point,
    },
    Button(ColorButton),
}

/// Initial state for one line.
#[derive(Debug, Clone)]
pub struct LineSpec {
    pub id: String,
    pub name: String,
    pub color: Color,
    /// Whether the effect starts with an override
    pub selected: bool,
}

/// A configuration line.
///
/// `selected` records the user's intent for this effect independently of
/// the global custom-colors toggle. The checkbox shows it only while that
/// toggle is on, so turning the toggle off and on again restores every
/// line exactly.
#[derive(Debug, Clone)]
pub struct ConfigLine {
    id: String,
    selected: bool,
    checkbox: Checkbox,
    widget: LineWidget,
}

impl ConfigLine {
    pub fn new(
        at: Point,
        spec: LineSpec,
        style: LineStyle,
        custom_enabled: bool,
        metrics: &Metrics,
    ) -> Self {
        let checkbox = Checkbox::new(at, None, metrics);
        let widget = match style {
            LineStyle::HexField => {
                let field_at = Point::new(checkbox.bounds().right() + metrics.hex_gap, at.y);
                let field = HexColorField::new(field_at, spec.color, metrics);
                let label_at = Point::new(
                    field.bounds().right() + metrics.hex_gap,
                    at.y + metrics.text_offset(metrics.hex_field.height),
                );
                LineWidget::Hex {
                    field,
                    label: spec.name,
                    label_at,
                }
            }
            LineStyle::ColorButton => {
                let button_at = Point::new(at.x + metrics.button_offset, at.y);
                LineWidget::Button(ColorButton::new(button_at, spec.color, spec.name, metrics))
            }
        };

        let mut line = Self {
            id: spec.id,
            selected: spec.selected,
            checkbox,
            widget,
        };
        line.refresh(custom_enabled);
        line
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// What the checkbox currently shows.
    pub fn is_checked(&self) -> bool {
        self.checkbox.checked
    }

    pub fn is_checkbox_enabled(&self) -> bool {
        self.checkbox.enabled
    }

    pub fn is_widget_enabled(&self) -> bool {
        match &self.widget {
            LineWidget::Hex { field, .. } => field.is_enabled(),
            LineWidget::Button(button) => button.is_enabled(),
        }
    }

    pub fn color(&self) -> Color {
        match &self.widget {
            LineWidget::Hex { field, .. } => field.color(),
            LineWidget::Button(button) => button.color(),
        }
    }

    pub fn label(&self) -> &str {
        match &self.widget {
            LineWidget::Hex { label, .. } => label,
            LineWidget::Button(button) => button.label(),
        }
    }

    pub fn hex_text(&self) -> Option<&str> {
        match &self.widget {
            LineWidget::Hex { field, .. } => Some(field.text()),
            LineWidget::Button(_) => None,
        }
    }

    pub fn checkbox_bounds(&self) -> Bounds {
        self.checkbox.bounds()
    }

    pub fn widget_bounds(&self) -> Bounds {
        match &self.widget {
            LineWidget::Hex { field, .. } => field.bounds(),
            LineWidget::Button(button) => button.bounds(),
        }
    }

    /// Recompute checkbox and widget state for the global toggle.
    /// Stored colors and the line's selection are untouched.
    pub fn refresh(&mut self, custom_enabled: bool) {
        self.checkbox.enabled = custom_enabled;
        self.checkbox.checked = custom_enabled && self.selected;
        self.set_widget_enabled(custom_enabled && self.selected);
    }

    fn set_widget_enabled(&mut self, enabled: bool) {
        match &mut self.widget {
            LineWidget::Hex { field, .. } => field.set_enabled(enabled),
            LineWidget::Button(button) => button.set_enabled(enabled),
        }
    }

    /// Checkbox first, then the color widget.
    pub fn mouse_pressed(&mut self, at: Point, ctx: LineContext<'_>) -> Option<LineRole> {
        if self.checkbox.on_press(at) {
            self.selected = !self.selected;
            self.checkbox.checked = self.selected;
            self.set_widget_enabled(self.selected);
            tracing::debug!(id = %self.id, selected = self.selected, "toggled line");
            return Some(LineRole::Checkbox);
        }

        match &mut self.widget {
            LineWidget::Hex { field, .. } => field.on_press(at).then_some(LineRole::HexField),
            LineWidget::Button(button) => {
                if !button.on_press(at) {
                    return None;
                }
                button.open_picker(ctx.viewport, ctx.metrics, ctx.localizer);
                Some(LineRole::ColorButton)
            }
        }
    }

    /// Drop keyboard focus without a press.
    pub fn blur(&mut self) {
        if let LineWidget::Hex { field, .. } = &mut self.widget {
            field.set_focused(false);
        }
    }

    /// Whether [`focus_text`](Self::focus_text) would succeed.
    pub fn can_take_text_focus(&self) -> bool {
        matches!(&self.widget, LineWidget::Hex { field, .. } if field.is_enabled())
    }

    /// Give keyboard focus to an enabled hex field.
    pub fn focus_text(&mut self) -> bool {
        match &mut self.widget {
            LineWidget::Hex { field, .. } if field.is_enabled() => {
                field.set_focused(true);
                true
            }
            _ => false,
        }
    }

    pub fn has_text_focus(&self) -> bool {
        match &self.widget {
            LineWidget::Hex { field, .. } => field.is_focused(),
            LineWidget::Button(button) => button.has_text_focus(),
        }
    }

    /// Returns whether the line used the key.
    pub fn key_typed(&mut self, input: KeyInput) -> bool {
        match &mut self.widget {
            LineWidget::Hex { field, .. } => {
                if !field.is_focused() {
                    return false;
                }
                field.key_typed(input);
                true
            }
            LineWidget::Button(button) => button.picker_key_typed(input),
        }
    }

    pub fn has_open_picker(&self) -> bool {
        matches!(&self.widget, LineWidget::Button(button) if button.is_open())
    }

    pub fn picker(&self) -> Option<&ColorPicker> {
        match &self.widget {
            LineWidget::Button(button) => button.picker(),
            LineWidget::Hex { .. } => None,
        }
    }

    /// Route a press to the open picker.
    pub fn picker_pressed(&mut self, at: Point) -> Option<PickerPart> {
        match &mut self.widget {
            LineWidget::Button(button) => button.picker_pressed(at),
            LineWidget::Hex { .. } => None,
        }
    }

    pub fn picker_dragged(&mut self, at: Point) {
        if let LineWidget::Button(button) = &mut self.widget {
            button.picker_dragged(at);
        }
    }

    pub fn picker_released(&mut self, at: Point) {
        if let LineWidget::Button(button) = &mut self.widget {
            button.picker_released(at);
        }
    }

    /// Discard an open picker without taking its color.
    pub fn close_picker(&mut self) {
        if let LineWidget::Button(button) = &mut self.widget {
            button.close_picker();
        }
    }

    /// Write this line into the override mapping.
    ///
    /// Follows the checkbox as shown, so every line drops its override while
    /// custom colors are off.
    pub fn commit(&self, config: &mut ModConfig) {
        if self.checkbox.checked {
            config.overrides.insert(self.id.clone(), self.color());
        } else {
            config.overrides.remove(&self.id);
        }
    }

    /// Second draw pass: the open picker, if any.
    pub fn draw_overlay(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        if let LineWidget::Button(button) = &self.widget {
            button.draw_picker(ctx, mouse);
        }
    }
}

impl Drawable for ConfigLine {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        self.checkbox.draw(ctx, mouse);
        match &self.widget {
            LineWidget::Hex {
                field,
                label,
                label_at,
            } => {
                field.draw(ctx, mouse);
                let tint = if self.checkbox.checked {
                    hex_to_color(field.text())
                } else {
                    WHITE
                };
                ctx.draw_text(*label_at, label, tint.opaque());
            }
            LineWidget::Button(button) => button.draw(ctx, mouse),
        }
    }
}
