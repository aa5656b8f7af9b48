//! Host-agnostic widget engine for the settings panel.
//!
//! Widgets draw through [`RenderContext`] and take input as plain points and
//! [`KeyInput`] values, so any host that can fill rectangles and draw text
//! can show the panel.

pub mod button;
pub mod channel_fields;
pub mod checkbox;
pub mod color_button;
pub mod config_line;
pub mod geometry;
pub mod hex_field;
pub mod input;
pub mod metrics;
pub mod panel;
pub mod picker;
pub mod render;
pub mod text_field;
pub mod widget;

pub use config_line::{ConfigLine, LineRole, LineStyle};
pub use geometry::{Bounds, Point};
pub use input::{Key, KeyInput};
pub use metrics::Metrics;
pub use panel::{ActiveControl, PanelController, ToggleId};
pub use picker::{ColorPicker, DialogResult, PickerPart};
pub use render::{DrawCommand, DrawList, RenderContext, Texture};
pub use widget::{Clickable, Drawable, Focusable};
