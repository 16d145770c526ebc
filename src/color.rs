//! The fixed palette events can be tagged with

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six colors an event can be painted with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    Red,
    Green,
    Yellow,
    Blue,
    Orange,
    Gray,
}

impl EventColor {
    /// Every color, in the order a color picker should list them
    pub const ALL: [EventColor; 6] = [
        EventColor::Red, EventColor::Green, EventColor::Yellow,
        EventColor::Blue, EventColor::Orange, EventColor::Gray,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EventColor::Red => "Red",
            EventColor::Green => "Green",
            EventColor::Yellow => "Yellow",
            EventColor::Blue => "Blue",
            EventColor::Orange => "Orange",
            EventColor::Gray => "Gray",
        }
    }

    /// The color event blocks are filled with
    pub fn hex(&self) -> &'static str {
        match self {
            EventColor::Red => "#ff0000",
            EventColor::Green => "#00ff00",
            EventColor::Yellow => "#ffff00",
            EventColor::Blue => "#0000ff",
            EventColor::Orange => "#ffc800",
            EventColor::Gray => "#808080",
        }
    }

    /// The light shade used as the background of an edit form showing this color
    pub fn tint_hex(&self) -> &'static str {
        match self {
            EventColor::Red => "#ffc8c8",
            EventColor::Green => "#c8ffc8",
            EventColor::Yellow => "#ffffc8",
            EventColor::Blue => "#c8c8ff",
            EventColor::Orange => "#ffe1c8",
            EventColor::Gray => "#e1e1e1",
        }
    }

    /// The fill color, resolved to a renderer-friendly value
    pub fn css(&self) -> csscolorparser::Color {
        parse_known(self.hex())
    }

    /// The form tint, resolved to a renderer-friendly value
    pub fn tint_css(&self) -> csscolorparser::Color {
        parse_known(self.tint_hex())
    }

    /// The 8-bit RGB components of the fill color
    pub fn rgb(&self) -> (u8, u8, u8) {
        let (r, g, b, _a) = self.css().rgba_u8();
        (r, g, b)
    }
}

fn parse_known(hex: &str) -> csscolorparser::Color {
    match csscolorparser::parse(hex) {
        Ok(color) => color,
        Err(err) => {
            // Unreachable with the tables above
            log::error!("Invalid palette entry {}: {}", hex, err);
            csscolorparser::Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
        }
    }
}

impl Display for EventColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.name())
    }
}

/// Returned when a string names no color of the palette
#[derive(Clone, Debug, PartialEq)]
pub struct UnknownColor(pub String);

impl Display for UnknownColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "unknown color {:?}, expected one of red, green, yellow, blue, orange, gray", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for EventColor {
    type Err = UnknownColor;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        EventColor::ALL.iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| UnknownColor(s.to_string()))
    }
}
