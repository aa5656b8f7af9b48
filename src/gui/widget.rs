//! Capability traits composed by the concrete widgets.

use super::geometry::Point;
use super::render::RenderContext;

/// Something that paints itself.
pub trait Drawable {
    fn draw(&self, ctx: &mut dyn RenderContext, mouse: Point);
}

/// Something that reacts to mouse presses.
pub trait Clickable {
    /// Handle a press; returns whether the press hit this widget.
    fn on_press(&mut self, at: Point) -> bool;

    /// Handle the release paired with an accepted press.
    fn on_release(&mut self, _at: Point) {}
}

/// Something that can hold exclusive keyboard focus.
pub trait Focusable {
    fn is_focused(&self) -> bool;
    fn set_focused(&mut self, focused: bool);
}

/// Foreground colors shared by the widgets.
pub mod theme {
    pub const TEXT: u32 = 0xFFFF_FFFF;
    pub const TEXT_DISABLED: u32 = 0xFFA0_A0A0;
    pub const TEXT_FIELD: u32 = 0xFFE0_E0E0;
    pub const TEXT_FIELD_DISABLED: u32 = 0xFF70_7070;
    pub const BORDER: u32 = 0xFFA0_A0A0;
    pub const BORDER_HOT: u32 = 0xFFFF_FFFF;
    pub const FIELD_BACKGROUND: u32 = 0xFF00_0000;
    pub const OVERLAY: u32 = 0xAA00_0000;
    pub const BLACK: u32 = 0xFF00_0000;
    pub const BUTTON: u32 = 0xFF55_5555;
    pub const BUTTON_HOT: u32 = 0xFF7E_88BF;
}
