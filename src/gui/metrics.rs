//! Layout constants for the panel and its widgets.
//!
//! [`Metrics::gui`] reproduces the point-based layout of a scaled game GUI;
//! [`Metrics::terminal`] packs the same structure into character cells.

/// Text field sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMetrics {
    pub width: i32,
    pub height: i32,
    /// Border drawn around the field background
    pub border: i32,
    /// Horizontal text inset inside the border
    pub padding: i32,
}

/// Color picker overlay sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerMetrics {
    pub width: i32,
    pub height: i32,
    pub padding: i32,
    /// Frame drawn around the plane, bar and preview
    pub frame: i32,
    pub plane_width: i32,
    pub plane_height: i32,
    pub bar_gap: i32,
    pub bar_width: i32,
    pub field_gap: i32,
    pub field: FieldMetrics,
    pub field_spacing: i32,
    pub preview_height: i32,
    pub button_gap: i32,
    pub button_height: i32,
    pub ok_width: i32,
    pub cancel_width: i32,
    pub button_spacing: i32,
    /// Crosshair arm length
    pub crosshair: i32,
}

/// Everything the panel needs to lay itself out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub line_spacing: i32,
    pub toggle_indent: i32,
    pub line_indent: i32,
    pub char_width: i32,
    pub text_height: i32,
    pub checkbox_size: i32,
    pub checkbox_height: i32,
    pub checkbox_label_gap: i32,
    /// Hex-entry lines: gap between checkbox, field and label
    pub hex_gap: i32,
    pub hex_field: FieldMetrics,
    /// Color-button lines: button offset from the line start
    pub button_offset: i32,
    pub button_width: i32,
    pub button_height: i32,
    pub button_label_gap: i32,
    pub picker: PickerMetrics,
}

impl Metrics {
    /// Point-based layout for a scaled game GUI.
    pub const fn gui() -> Self {
        Self {
            line_spacing: 16,
            toggle_indent: 10,
            line_indent: 20,
            char_width: 6,
            text_height: 8,
            checkbox_size: 12,
            checkbox_height: 12,
            checkbox_label_gap: 2,
            hex_gap: 4,
            hex_field: FieldMetrics {
                width: 48,
                height: 12,
                border: 1,
                padding: 3,
            },
            button_offset: 18,
            button_width: 24,
            button_height: 12,
            button_label_gap: 8,
            picker: PickerMetrics {
                width: 206,
                height: 173,
                padding: 10,
                frame: 1,
                plane_width: 128,
                plane_height: 128,
                bar_gap: 5,
                bar_width: 15,
                field_gap: 5,
                field: FieldMetrics {
                    width: 32,
                    height: 16,
                    border: 1,
                    padding: 3,
                },
                field_spacing: 20,
                preview_height: 32,
                button_gap: 7,
                button_height: 20,
                ok_width: 55,
                cancel_width: 65,
                button_spacing: 6,
                crosshair: 5,
            },
        }
    }

    /// Cell-based layout for a terminal.
    pub const fn terminal() -> Self {
        Self {
            line_spacing: 1,
            toggle_indent: 1,
            line_indent: 2,
            char_width: 1,
            text_height: 1,
            checkbox_size: 3,
            checkbox_height: 1,
            checkbox_label_gap: 1,
            hex_gap: 1,
            hex_field: FieldMetrics {
                width: 8,
                height: 1,
                border: 0,
                padding: 1,
            },
            button_offset: 4,
            button_width: 4,
            button_height: 1,
            button_label_gap: 1,
            picker: PickerMetrics {
                width: 47,
                height: 16,
                padding: 1,
                frame: 0,
                plane_width: 36,
                plane_height: 12,
                bar_gap: 1,
                bar_width: 2,
                field_gap: 1,
                field: FieldMetrics {
                    width: 5,
                    height: 1,
                    border: 0,
                    padding: 1,
                },
                field_spacing: 2,
                preview_height: 3,
                button_gap: 1,
                button_height: 1,
                ok_width: 4,
                cancel_width: 8,
                button_spacing: 2,
                crosshair: 1,
            },
        }
    }

    /// Width of `text` in layout units.
    pub fn text_width(&self, text: &str) -> i32 {
        self.char_width * text.chars().count() as i32
    }

    /// Vertical offset that centers one text line in `height`.
    pub fn text_offset(&self, height: i32) -> i32 {
        (height - self.text_height) / 2
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::gui()
    }
}
