//! Floating HSB color picker.
//!
//! The picker is owned by the button that opened it. It reports a
//! [`DialogResult`] and the owner decides what to do with the color; the
//! picker itself never writes anywhere.

use super::button::Button;
use super::channel_fields::ChannelFields;
use super::geometry::{Bounds, Point};
use super::input::{Key, KeyInput};
use super::metrics::{Metrics, PickerMetrics};
use super::render::{RenderContext, Texture};
use super::widget::{Clickable, Drawable, theme};
use crate::color::{Color, Hsb, clamp, hsb_to_rgb};
use crate::i18n::Localizer;

/// Outcome of a floating dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogResult {
    #[default]
    None,
    Ok,
    Cancel,
}

/// Interactive regions of an open picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PickerPart {
    HueSaturation,
    Brightness,
    Channel(usize),
    Ok,
    Cancel,
    Body,
}

/// Absolute positions of everything inside the picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerLayout {
    pub bounds: Bounds,
    pub plane: Bounds,
    pub bar: Bounds,
    pub fields: [Point; 3],
    pub preview: Bounds,
    pub ok: Bounds,
    pub cancel: Bounds,
}

impl PickerLayout {
    pub fn new(origin: Point, m: &PickerMetrics) -> Self {
        let bounds = Bounds::new(origin.x, origin.y, m.width, m.height);
        let plane = Bounds::new(
            origin.x + m.padding,
            origin.y + m.padding,
            m.plane_width,
            m.plane_height,
        );
        let bar = Bounds::new(plane.right() + m.bar_gap, plane.y, m.bar_width, m.plane_height);
        let field_x = bar.right() + m.field_gap;
        let fields = [0, 1, 2].map(|i| Point::new(field_x, origin.y + m.padding + i * m.field_spacing));
        let preview = Bounds::new(
            field_x,
            plane.bottom() - m.preview_height,
            m.field.width,
            m.preview_height,
        );
        let button_y = plane.bottom() + m.button_gap;
        let ok = Bounds::new(plane.x - m.frame, button_y, m.ok_width, m.button_height);
        let cancel = Bounds::new(
            ok.right() + m.button_spacing,
            button_y,
            m.cancel_width,
            m.button_height,
        );
        Self {
            bounds,
            plane,
            bar,
            fields,
            preview,
            ok,
            cancel,
        }
    }
}

/// The picker's transient state.
#[derive(Debug, Clone)]
pub struct ColorPicker {
    layout: PickerLayout,
    metrics: PickerMetrics,
    char_width: i32,
    text_height: i32,
    hsb: Hsb,
    color: Color,
    channels: ChannelFields,
    ok: Button,
    cancel: Button,
    brightness_label: String,
    dragging_hs: bool,
    dragging_b: bool,
    result: DialogResult,
}

impl ColorPicker {
    /// Open at `anchor`, moved as needed to fit inside `viewport`.
    pub fn open(
        anchor: Point,
        viewport: Bounds,
        color: Color,
        metrics: &Metrics,
        localizer: &dyn Localizer,
    ) -> Self {
        let m = metrics.picker;
        let origin = Bounds::new(anchor.x, anchor.y, m.width, m.height)
            .clamp_within(viewport)
            .origin();
        let layout = PickerLayout::new(origin, &m);
        let color = Color::from_raw(color.rgb());
        tracing::debug!(%color, x = origin.x, y = origin.y, "opened color picker");

        Self {
            channels: ChannelFields::new(layout.fields, m.field, metrics, color),
            ok: Button::new(layout.ok, localizer.translate("config.picker.ok"), metrics),
            cancel: Button::new(layout.cancel, localizer.translate("config.picker.cancel"), metrics),
            brightness_label: localizer.translate("config.picker.brightness"),
            layout,
            metrics: m,
            char_width: metrics.char_width,
            text_height: metrics.text_height,
            hsb: color.to_hsb(),
            color,
            dragging_hs: false,
            dragging_b: false,
            result: DialogResult::None,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.layout.bounds
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub fn hsb(&self) -> Hsb {
        self.hsb
    }

    /// The color the picker currently shows.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn channel_text(&self, index: usize) -> &str {
        self.channels.text(index)
    }

    pub fn result(&self) -> DialogResult {
        self.result
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging_hs || self.dragging_b
    }

    pub fn has_text_focus(&self) -> bool {
        self.channels.focused().is_some()
    }

    /// Which region of the picker lies under `at`.
    pub fn part_at(&self, at: Point) -> Option<PickerPart> {
        let layout = &self.layout;
        if !layout.bounds.contains(at) {
            return None;
        }
        let part = if layout.ok.contains(at) {
            PickerPart::Ok
        } else if layout.cancel.contains(at) {
            PickerPart::Cancel
        } else if layout.plane.contains(at) {
            PickerPart::HueSaturation
        } else if layout.bar.contains(at) {
            PickerPart::Brightness
        } else if let Some(i) = self
            .channels
            .fields()
            .iter()
            .position(|f| f.bounds().contains(at))
        {
            PickerPart::Channel(i)
        } else {
            PickerPart::Body
        };
        Some(part)
    }

    /// Handle a press. A press outside the picker cancels it.
    ///
    /// Returns whether the press landed on the picker.
    pub fn mouse_pressed(&mut self, at: Point) -> bool {
        if !self.layout.bounds.contains(at) {
            self.result = DialogResult::Cancel;
            return false;
        }

        if self.ok.on_press(at) {
            self.result = DialogResult::Ok;
        }
        if self.cancel.on_press(at) {
            self.result = DialogResult::Cancel;
        }
        if self.layout.plane.contains(at) {
            self.dragging_hs = true;
        }
        if self.layout.bar.contains(at) {
            self.dragging_b = true;
        }
        self.channels.on_press(at);
        self.mouse_dragged(at);
        true
    }

    /// Track the cursor while a drag is active.
    ///
    /// The cursor may leave the region; the mapped value is clamped.
    pub fn mouse_dragged(&mut self, at: Point) {
        if !self.is_dragging() {
            return;
        }
        let plane = self.layout.plane;
        let bar = self.layout.bar;
        if self.dragging_hs {
            self.hsb.hue = clamp(at.x - plane.x, 0, plane.width) as f32 / plane.width as f32;
            self.hsb.saturation = vertical_fraction(at.y, plane);
        }
        if self.dragging_b {
            self.hsb.brightness = vertical_fraction(at.y, bar);
        }
        self.color = Color::from_hsb(self.hsb);
        self.channels.set_color(self.color);
    }

    /// End both drags, wherever the release happens.
    pub fn mouse_released(&mut self, _at: Point) {
        self.dragging_hs = false;
        self.dragging_b = false;
    }

    /// Keyboard input. Enter confirms and Escape cancels; everything else
    /// goes to the channel fields.
    pub fn key_typed(&mut self, input: KeyInput) {
        match input.key {
            Key::Enter => self.result = DialogResult::Ok,
            Key::Escape => self.result = DialogResult::Cancel,
            _ => {
                if self.channels.key_typed(input) {
                    self.color = self.channels.color();
                    self.hsb = self.color.to_hsb();
                }
            }
        }
    }

    fn draw_frame(&self, ctx: &mut dyn RenderContext, bounds: Bounds) {
        if self.metrics.frame > 0 {
            ctx.fill_rect(bounds.inset(-self.metrics.frame), theme::BORDER);
        }
    }

    fn draw_crosshair(&self, ctx: &mut dyn RenderContext) {
        let plane = self.layout.plane;
        let arm = self.metrics.crosshair;
        let x = plane.x + (plane.width as f32 * self.hsb.hue) as i32;
        let y = plane.y + plane.height - (plane.height as f32 * self.hsb.saturation) as i32;
        ctx.fill_rect(Bounds::new(x - arm, y, 2 * arm + 1, 1), theme::BLACK);
        ctx.fill_rect(Bounds::new(x, y - arm, 1, 2 * arm + 1), theme::BLACK);
    }

    fn draw_brightness(&self, ctx: &mut dyn RenderContext) {
        let bar = self.layout.bar;
        let (r, g, b) = hsb_to_rgb(self.hsb.hue, self.hsb.saturation, 1.0);
        let top = Color::from_rgb(r, g, b).opaque();
        ctx.fill_gradient(bar, top, theme::BLACK);

        // Label runs down the bar one glyph per line
        let glyphs = self.brightness_label.chars().count() as i32;
        let x = bar.x + (bar.width - self.char_width) / 2;
        let mut y = bar.y + (bar.height - glyphs * self.text_height) / 2;
        let mut buf = [0u8; 4];
        for c in self.brightness_label.chars() {
            ctx.draw_text(Point::new(x, y), c.encode_utf8(&mut buf), theme::BLACK);
            y += self.text_height;
        }

        let frame = self.metrics.frame;
        let height = (2 * frame).max(1);
        let position = bar.y + bar.height - (bar.height as f32 * self.hsb.brightness) as i32;
        let marker_y = clamp(position - frame, bar.y - frame, bar.bottom() + frame - height);
        ctx.fill_rect(
            Bounds::new(bar.x - frame, marker_y, bar.width + 2 * frame, height),
            theme::BORDER_HOT,
        );
    }
}

impl Drawable for ColorPicker {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point) {
        let layout = &self.layout;
        ctx.fill_rect(layout.bounds, theme::OVERLAY);
        self.draw_frame(ctx, layout.plane);
        self.draw_frame(ctx, layout.bar);
        self.draw_frame(ctx, layout.preview);

        ctx.draw_texture(layout.plane, Texture::HueSaturationPlane);
        self.draw_crosshair(ctx);
        self.draw_brightness(ctx);
        ctx.fill_rect(layout.preview, self.color.opaque());

        self.channels.draw(ctx, mouse);
        self.ok.draw(ctx, mouse);
        self.cancel.draw(ctx, mouse);
    }
}

/// Fraction of `area`'s height above `y`, with the top mapping to 1.
fn vertical_fraction(y: i32, area: Bounds) -> f32 {
    (area.height - clamp(y - area.y, 0, area.height)) as f32 / area.height as f32
}
