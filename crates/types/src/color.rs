//! RGB text colors, the sixteen named legacy colors and ARGB shadow colors.

use crate::parsers::{self, ParseError, run_parser};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// An RGB color packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TextColor(u32);

impl TextColor {
    pub const fn new(value: u32) -> Self {
        Self(value & 0x00FF_FFFF)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Parse a hex color string (`#RGB` or `#RRGGBB`).
    pub fn from_hex_string(s: &str) -> Result<Self, ParseError> {
        run_parser(parsers::parse_rgb, s)
            .map(|(r, g, b)| Self::from_rgb(r, g, b))
            .map_err(|_| ParseError::InvalidColor(s.to_string()))
    }

    /// Returns the color as a lowercase `#rrggbb` string.
    pub fn as_hex_string(self) -> String {
        format!("#{:06x}", self.0)
    }

    pub fn as_hsv(self) -> Hsv {
        Hsv::from_rgb(self.red(), self.green(), self.blue())
    }

    /// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`.
    pub fn lerp(t: f32, a: TextColor, b: TextColor) -> TextColor {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| -> u8 {
            (from as f32 + t * (to as f32 - from as f32)).round() as u8
        };
        TextColor::from_rgb(
            channel(a.red(), b.red()),
            channel(a.green(), b.green()),
            channel(a.blue(), b.blue()),
        )
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl From<NamedTextColor> for TextColor {
    fn from(named: NamedTextColor) -> Self {
        TextColor::new(named.value())
    }
}

impl From<NamedTextColor> for Option<TextColor> {
    fn from(named: NamedTextColor) -> Self {
        Some(named.into())
    }
}

impl Serialize for TextColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_hex_string())
    }
}

impl<'de> Deserialize<'de> for TextColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum TextColorDef {
            Str(String),
            Num(u32),
        }

        match TextColorDef::deserialize(deserializer)? {
            TextColorDef::Str(s) => match NamedTextColor::from_name(&s) {
                Some(named) => Ok(named.into()),
                None => Self::from_hex_string(&s).map_err(de::Error::custom),
            },
            TextColorDef::Num(n) => Ok(TextColor::new(n)),
        }
    }
}

/// A color in hue/saturation/value space, each component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f32 / 255.0;
        let g = g as f32 / 255.0;
        let b = b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let s = if max == 0.0 { 0.0 } else { delta / max };
        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0) / 6.0
        } else if max == g {
            ((b - r) / delta + 2.0) / 6.0
        } else {
            ((r - g) / delta + 4.0) / 6.0
        };

        Self { h, s, v: max }
    }

    /// Squared distance with hue weighted three times and wrapped around the wheel.
    fn distance(&self, other: &Hsv) -> f32 {
        let hue_diff = (self.h - other.h).abs();
        let hue = 3.0 * hue_diff.min(1.0 - hue_diff);
        let saturation = self.s - other.s;
        let value = self.v - other.v;
        hue * hue + saturation * saturation + value * value
    }
}

/// The sixteen named colors of the legacy chat palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedTextColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

impl NamedTextColor {
    pub const ALL: [NamedTextColor; 16] = [
        NamedTextColor::Black,
        NamedTextColor::DarkBlue,
        NamedTextColor::DarkGreen,
        NamedTextColor::DarkAqua,
        NamedTextColor::DarkRed,
        NamedTextColor::DarkPurple,
        NamedTextColor::Gold,
        NamedTextColor::Gray,
        NamedTextColor::DarkGray,
        NamedTextColor::Blue,
        NamedTextColor::Green,
        NamedTextColor::Aqua,
        NamedTextColor::Red,
        NamedTextColor::LightPurple,
        NamedTextColor::Yellow,
        NamedTextColor::White,
    ];

    pub const fn value(self) -> u32 {
        match self {
            NamedTextColor::Black => 0x000000,
            NamedTextColor::DarkBlue => 0x0000aa,
            NamedTextColor::DarkGreen => 0x00aa00,
            NamedTextColor::DarkAqua => 0x00aaaa,
            NamedTextColor::DarkRed => 0xaa0000,
            NamedTextColor::DarkPurple => 0xaa00aa,
            NamedTextColor::Gold => 0xffaa00,
            NamedTextColor::Gray => 0xaaaaaa,
            NamedTextColor::DarkGray => 0x555555,
            NamedTextColor::Blue => 0x5555ff,
            NamedTextColor::Green => 0x55ff55,
            NamedTextColor::Aqua => 0x55ffff,
            NamedTextColor::Red => 0xff5555,
            NamedTextColor::LightPurple => 0xff55ff,
            NamedTextColor::Yellow => 0xffff55,
            NamedTextColor::White => 0xffffff,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            NamedTextColor::Black => "black",
            NamedTextColor::DarkBlue => "dark_blue",
            NamedTextColor::DarkGreen => "dark_green",
            NamedTextColor::DarkAqua => "dark_aqua",
            NamedTextColor::DarkRed => "dark_red",
            NamedTextColor::DarkPurple => "dark_purple",
            NamedTextColor::Gold => "gold",
            NamedTextColor::Gray => "gray",
            NamedTextColor::DarkGray => "dark_gray",
            NamedTextColor::Blue => "blue",
            NamedTextColor::Green => "green",
            NamedTextColor::Aqua => "aqua",
            NamedTextColor::Red => "red",
            NamedTextColor::LightPurple => "light_purple",
            NamedTextColor::Yellow => "yellow",
            NamedTextColor::White => "white",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Returns the named color with exactly this RGB value, if any.
    pub fn from_value(value: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    /// Finds the named color closest to `color` in HSV space.
    pub fn nearest_to(color: TextColor) -> NamedTextColor {
        if let Some(exact) = Self::from_value(color.value()) {
            return exact;
        }

        let target = color.as_hsv();
        let mut nearest = NamedTextColor::Black;
        let mut best = f32::MAX;
        for candidate in Self::ALL {
            let distance = TextColor::from(candidate).as_hsv().distance(&target);
            if distance < best {
                best = distance;
                nearest = candidate;
            }
        }
        nearest
    }
}

impl fmt::Display for NamedTextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ARGB color packed as `0xAARRGGBB`, used for text shadows.
///
/// [`ShadowColor::NONE`] is an explicit "no shadow" value, which is different
/// from a style that leaves the shadow color unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShadowColor(u32);

impl ShadowColor {
    pub const NONE: ShadowColor = ShadowColor(0);

    pub const fn new(argb: u32) -> Self {
        Self(argb)
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn from_text_color(color: TextColor, alpha: u8) -> Self {
        Self(((alpha as u32) << 24) | color.value())
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Parse a `#RRGGBBAA` string.
    pub fn from_hex_string(s: &str) -> Result<Self, ParseError> {
        run_parser(parsers::parse_rgba, s)
            .map(|(a, r, g, b)| Self::from_argb(a, r, g, b))
            .map_err(|_| ParseError::InvalidColor(s.to_string()))
    }

    /// Returns the color as a lowercase `#rrggbbaa` string.
    pub fn as_hex_string(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red(),
            self.green(),
            self.blue(),
            self.alpha()
        )
    }
}

impl fmt::Display for ShadowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_hex_string())
    }
}

impl Serialize for ShadowColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.as_hex_string())
    }
}

impl<'de> Deserialize<'de> for ShadowColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_string(&s).map_err(de::Error::custom)
    }
}
