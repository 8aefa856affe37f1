//! Accent color parsing
//!
//! Accepts the canonical color-string forms understood by the platform:
//! `#RRGGBB`, `#AARRGGBB`, or one of the well-known color names.

use std::fmt;

/// 32-bit ARGB color value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArgbColor(u32);

const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF000000),
    ("darkgray", 0xFF444444),
    ("darkgrey", 0xFF444444),
    ("gray", 0xFF888888),
    ("grey", 0xFF888888),
    ("lightgray", 0xFFCCCCCC),
    ("lightgrey", 0xFFCCCCCC),
    ("white", 0xFFFFFFFF),
    ("red", 0xFFFF0000),
    ("green", 0xFF00FF00),
    ("blue", 0xFF0000FF),
    ("yellow", 0xFFFFFF00),
    ("cyan", 0xFF00FFFF),
    ("magenta", 0xFFFF00FF),
    ("aqua", 0xFF00FFFF),
    ("fuchsia", 0xFFFF00FF),
    ("lime", 0xFF00FF00),
    ("maroon", 0xFF800000),
    ("navy", 0xFF000080),
    ("olive", 0xFF808000),
    ("purple", 0xFF800080),
    ("silver", 0xFFC0C0C0),
    ("teal", 0xFF008080),
];

impl ArgbColor {
    pub const fn from_argb32(argb: u32) -> Self {
        Self(argb)
    }

    /// Parse a color string
    /// 6-digit hex gets full opacity, 8-digit hex is taken as AARRGGBB.
    /// The '#' prefix is required for hex forms; names are case-insensitive.
    pub fn parse(input: &str) -> Option<Self> {
        if let Some(hex) = input.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let value = u32::from_str_radix(hex, 16).ok()?;
            return match hex.len() {
                6 => Some(Self(0xFF00_0000 | value)),
                8 => Some(Self(value)),
                _ => None,
            };
        }

        let name = input.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|&(_, argb)| Self(argb))
    }

    pub fn argb32(self) -> u32 {
        self.0
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
