//! [`RenderContext`] over a ratatui buffer, one cell per layout unit.

use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::Rect;
use ratatui::style::Color;

use crate::color::hsb_to_rgb;
use crate::gui::{Bounds, Point, RenderContext, Texture};

/// Draws panel coordinates into `area`, shifted up by `scroll` rows.
/// Anything outside `area` is clipped.
pub struct BufferCanvas<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    scroll: i32,
}

impl<'a> BufferCanvas<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, scroll: i32) -> Self {
        Self { buf, area, scroll }
    }

    fn cell(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let sx = i32::from(self.area.x) + x;
        let sy = i32::from(self.area.y) + y - self.scroll;
        let inside = sx >= i32::from(self.area.x)
            && sy >= i32::from(self.area.y)
            && sx < i32::from(self.area.right())
            && sy < i32::from(self.area.bottom());
        if !inside {
            return None;
        }
        self.buf.cell_mut((sx as u16, sy as u16))
    }
}

impl RenderContext for BufferCanvas<'_> {
    fn fill_rect(&mut self, bounds: Bounds, argb: u32) {
        for y in bounds.y..bounds.bottom() {
            for x in bounds.x..bounds.right() {
                if let Some(cell) = self.cell(x, y) {
                    let bg = blend(cell.bg, argb);
                    cell.set_symbol(" ");
                    cell.set_bg(bg);
                }
            }
        }
    }

    fn draw_texture(&mut self, bounds: Bounds, texture: Texture) {
        match texture {
            Texture::HueSaturationPlane => {
                let width = bounds.width.max(1) as f32;
                let height = bounds.height.max(1) as f32;
                for y in bounds.y..bounds.bottom() {
                    let saturation = 1.0 - (y - bounds.y) as f32 / height;
                    for x in bounds.x..bounds.right() {
                        let hue = (x - bounds.x) as f32 / width;
                        let (r, g, b) = hsb_to_rgb(hue, saturation, 1.0);
                        if let Some(cell) = self.cell(x, y) {
                            cell.set_symbol(" ");
                            cell.set_bg(Color::Rgb(r, g, b));
                        }
                    }
                }
            }
        }
    }

    fn fill_gradient(&mut self, bounds: Bounds, top: u32, bottom: u32) {
        let span = (bounds.height - 1).max(1) as f32;
        for y in bounds.y..bounds.bottom() {
            let t = (y - bounds.y) as f32 / span;
            let row = lerp_argb(top, bottom, t);
            for x in bounds.x..bounds.right() {
                if let Some(cell) = self.cell(x, y) {
                    let bg = blend(cell.bg, row);
                    cell.set_symbol(" ");
                    cell.set_bg(bg);
                }
            }
        }
    }

    fn draw_text(&mut self, at: Point, text: &str, argb: u32) {
        let (_, r, g, b) = split_argb(argb);
        for (i, c) in text.chars().enumerate() {
            if let Some(cell) = self.cell(at.x + i as i32, at.y) {
                cell.set_char(c);
                cell.set_fg(Color::Rgb(r, g, b));
            }
        }
    }
}

fn split_argb(argb: u32) -> (u8, u8, u8, u8) {
    (
        (argb >> 24) as u8,
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
    )
}

/// Composite `argb` over a cell background. Non-RGB backgrounds count as
/// black.
fn blend(under: Color, argb: u32) -> Color {
    let (a, r, g, b) = split_argb(argb);
    let (ur, ug, ub) = match under {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (0, 0, 0),
    };
    let alpha = f32::from(a) / 255.0;
    let mix = |top: u8, bottom: u8| {
        (f32::from(top) * alpha + f32::from(bottom) * (1.0 - alpha)).round() as u8
    };
    Color::Rgb(mix(r, ur), mix(g, ug), mix(b, ub))
}

fn lerp_argb(from: u32, to: u32, t: f32) -> u32 {
    let (fa, fr, fg, fb) = split_argb(from);
    let (ta, tr, tg, tb) = split_argb(to);
    let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u32;
    (lerp(fa, ta) << 24) | (lerp(fr, tr) << 16) | (lerp(fg, tg) << 8) | lerp(fb, tb)
}
