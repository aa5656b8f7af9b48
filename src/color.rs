//! Color model: integer RGB, HSB triples and hexadecimal text.
//!
//! All conversions are total. Malformed text falls back to a fixed color
//! instead of failing, and negative integers are floored to black.

use std::fmt;

use palette::{FromColor, Hsv, Srgb};
use serde::{Deserialize, Serialize};

/// Fallback for hex text that cannot be parsed.
pub const WHITE: Color = Color(0xFF_FFFF);

/// Opaque black, used for cleared channels and empty hex text.
pub const BLACK: Color = Color(0);

/// A packed `0xRRGGBB` color.
///
/// The raw value is kept as parsed so that hex text round-trips exactly;
/// channel accessors only look at the low 24 bits.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(from = "i64", into = "i64")]
pub struct Color(u32);

impl Color {
    /// Build from a raw integer. Negative values become black.
    pub fn from_int(value: i32) -> Self {
        Self(value.max(0) as u32)
    }

    /// Build from three 8-bit channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Build from a value already known to be non-negative.
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// The raw stored value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The value masked to 24 bits.
    pub const fn rgb(self) -> u32 {
        self.0 & 0xFF_FFFF
    }

    pub const fn red(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub const fn green(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub const fn blue(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Fully opaque ARGB value for the rendering primitives.
    pub const fn opaque(self) -> u32 {
        0xFF00_0000 | self.rgb()
    }

    /// Convert to a palette sRGB value.
    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.red(), self.green(), self.blue())
    }

    /// Convert from a palette sRGB value.
    pub fn from_srgb(srgb: Srgb<u8>) -> Self {
        Self::from_rgb(srgb.red, srgb.green, srgb.blue)
    }

    /// HSB representation of the 24-bit value.
    pub fn to_hsb(self) -> Hsb {
        rgb_to_hsb(self.red(), self.green(), self.blue())
    }

    /// Build from an HSB triple; components are clamped first.
    pub fn from_hsb(hsb: Hsb) -> Self {
        let (r, g, b) = hsb_to_rgb(hsb.hue, hsb.saturation, hsb.brightness);
        Self::from_rgb(r, g, b)
    }
}

impl From<i64> for Color {
    fn from(value: i64) -> Self {
        Self(value.clamp(0, i64::from(u32::MAX)) as u32)
    }
}

impl From<Color> for i64 {
    fn from(color: Color) -> Self {
        i64::from(color.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.rgb())
    }
}

/// Hue, saturation and brightness, each normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsb {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Hsb {
    pub fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }
}

/// Convert 8-bit channels to HSB.
pub fn rgb_to_hsb(red: u8, green: u8, blue: u8) -> Hsb {
    let srgb: Srgb<f32> = Srgb::new(red, green, blue).into_format();
    let hsv: Hsv = Hsv::from_color(srgb);

    let hue = hsv.hue.into_positive_degrees() / 360.0;
    Hsb {
        // 360 degrees folds back onto 0
        hue: if hue >= 1.0 { 0.0 } else { hue },
        saturation: clamp(hsv.saturation, 0.0, 1.0),
        brightness: clamp(hsv.value, 0.0, 1.0),
    }
}

/// Convert an HSB triple to 8-bit channels.
///
/// Out-of-range components are clamped to `[0, 1]` before conversion.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> (u8, u8, u8) {
    let hue = clamp(hue, 0.0, 1.0);
    let saturation = clamp(saturation, 0.0, 1.0);
    let brightness = clamp(brightness, 0.0, 1.0);

    let hsv: Hsv = Hsv::new(hue * 360.0, saturation, brightness);
    let srgb: Srgb<f32> = Srgb::from_color(hsv);
    let srgb: Srgb<u8> = srgb.into_format();
    (srgb.red, srgb.green, srgb.blue)
}

/// Parse base-16 text.
///
/// Empty text is black; anything that does not parse is [`WHITE`].
pub fn hex_to_color(text: &str) -> Color {
    if text.is_empty() {
        return BLACK;
    }
    match i32::from_str_radix(text, 16) {
        Ok(value) => Color::from_int(value),
        Err(_) => WHITE,
    }
}

/// Format as lowercase hex without zero padding. Negative values format as `0`.
pub fn color_to_hex(color: i32) -> String {
    format!("{:x}", color.max(0))
}

/// Clamp `value` into `[lo, hi]`. NaN maps to `lo`.
pub fn clamp<T: PartialOrd + Copy>(value: T, lo: T, hi: T) -> T {
    if value > hi {
        hi
    } else if value >= lo {
        value
    } else {
        lo
    }
}
