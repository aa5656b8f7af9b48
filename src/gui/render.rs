//! Rendering primitives supplied by the host, and a recording implementation.
//!
//! Colors passed to the primitives are packed `0xAARRGGBB`.

use super::geometry::{Bounds, Point};

/// Built-in textures the widgets ask the host to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Texture {
    /// Hue left to right, saturation top (full) to bottom (none), at full
    /// brightness.
    HueSaturationPlane,
}

/// Drawing surface for one frame.
pub trait RenderContext {
    fn fill_rect(&mut self, bounds: Bounds, argb: u32);
    fn draw_texture(&mut self, bounds: Bounds, texture: Texture);
    /// Vertical gradient from `top` to `bottom`.
    fn fill_gradient(&mut self, bounds: Bounds, top: u32, bottom: u32);
    fn draw_text(&mut self, at: Point, text: &str, argb: u32);
}

/// One recorded primitive call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Rect(Bounds, u32),
    Texture(Bounds, Texture),
    Gradient(Bounds, u32, u32),
    Text(Point, String, u32),
}

/// Render context that records calls instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded text, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(_, text, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Index of the first text command equal to `text`.
    pub fn position_of_text(&self, text: &str) -> Option<usize> {
        self.commands
            .iter()
            .position(|c| matches!(c, DrawCommand::Text(_, t, _) if t == text))
    }

    /// Color of the first text command equal to `text`.
    pub fn text_color(&self, text: &str) -> Option<u32> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text(_, t, argb) if t == text => Some(*argb),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl RenderContext for DrawList {
    fn fill_rect(&mut self, bounds: Bounds, argb: u32) {
        self.commands.push(DrawCommand::Rect(bounds, argb));
    }

    fn draw_texture(&mut self, bounds: Bounds, texture: Texture) {
        self.commands.push(DrawCommand::Texture(bounds, texture));
    }

    fn fill_gradient(&mut self, bounds: Bounds, top: u32, bottom: u32) {
        self.commands.push(DrawCommand::Gradient(bounds, top, bottom));
    }

    fn draw_text(&mut self, at: Point, text: &str, argb: u32) {
        self.commands
            .push(DrawCommand::Text(at, text.to_string(), argb));
    }
}
