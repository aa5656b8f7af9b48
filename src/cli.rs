//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use csscolorparser::Color as CssColor;

use crate::color::Color;
use crate::config::{ConfigOverrides, DEFAULT_CONFIG_FILE};
use crate::gui::LineStyle;

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// YAML (default)
    #[default]
    Yaml,
    /// JSON
    Json,
}

/// Widget shown on each effect line of the panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LineStyleArg {
    /// Six-digit hex entry field
    Hex,
    /// Swatch button opening an HSB picker
    #[default]
    Picker,
}

impl From<LineStyleArg> for LineStyle {
    fn from(arg: LineStyleArg) -> Self {
        match arg {
            LineStyleArg::Hex => LineStyle::HexField,
            LineStyleArg::Picker => LineStyle::ColorButton,
        }
    }
}

/// Potion color overrides: report, edit, or open the settings panel.
#[derive(Parser, Debug)]
#[command(name = "potioncolorizer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (.toml, or legacy .json)
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Open the interactive settings panel
    #[arg(short, long)]
    pub interactive: bool,

    /// Widget used on each effect line in the panel
    #[arg(long, value_enum, default_value_t = LineStyleArg::Picker)]
    pub line_style: LineStyleArg,

    /// Remove the enchantment glint from potions
    #[arg(long, value_name = "BOOL")]
    pub deglint: Option<bool>,

    /// Color potions by their effects
    #[arg(long, value_name = "BOOL")]
    pub recolor: Option<bool>,

    /// Apply the custom color overrides
    #[arg(long, value_name = "BOOL")]
    pub custom_colors: Option<bool>,

    /// Override an effect color, e.g. potion.poison=#00ff00 (repeatable)
    #[arg(long = "set", value_name = "ID=COLOR", value_parser = parse_assignment)]
    pub set: Vec<(String, Color)>,

    /// Remove an effect's override (repeatable)
    #[arg(long = "unset", value_name = "ID")]
    pub unset: Vec<String>,

    /// Write the resulting configuration back to the config file
    #[arg(long)]
    pub save: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Log file path (default: potioncolorizer.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Toggle values given on the command line, for layering over the file.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            deglint: self.deglint,
            recolor: self.recolor,
            custom_colors: self.custom_colors,
        }
    }
}

/// Parse a CSS color into a 24-bit color. Alpha is dropped.
///
/// Supports: hex (#RRGGBB), rgb(), hsl(), named colors, etc.
pub fn parse_color(input: &str) -> Result<Color, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Color::from_rgb(r, g, b))
}

/// Parse `ID=COLOR`.
pub fn parse_assignment(s: &str) -> Result<(String, Color), String> {
    let (id, color) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=COLOR, got '{}'", s))?;
    let id = id.trim();
    if id.is_empty() {
        return Err("effect identifier is empty".to_string());
    }
    let color = parse_color(color.trim())?;
    Ok((id.to_string(), color))
}
