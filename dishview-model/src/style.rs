use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Visual tokens attached to a category, kept in their CSS notation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryStyle {
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub stroke_rgba: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub glow_rgba: Option<String>,
}

impl CategoryStyle {
    pub fn new(stroke: impl Into<String>, glow: impl Into<String>) -> Self {
        Self {
            stroke_rgba: Some(stroke.into()),
            glow_rgba: Some(glow.into()),
        }
    }

    /// Parsed stroke color; malformed tokens read as absent.
    pub fn stroke(&self) -> Option<Rgba> {
        self.stroke_rgba.as_deref().and_then(|s| s.parse().ok())
    }

    /// Parsed glow color; malformed tokens read as absent.
    pub fn glow(&self) -> Option<Rgba> {
        self.glow_rgba.as_deref().and_then(|s| s.parse().ok())
    }
}

/// An 8-bit RGB color with a unit alpha channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl FromStr for Rgba {
    type Err = ModelError;

    /// Accepts `rgba(r, g, b, a)` and `rgb(r, g, b)`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ModelError::InvalidColor(s.to_string());
        let trimmed = s.trim();

        let (body, expects_alpha) =
            if let Some(rest) = trimmed.strip_prefix("rgba(") {
                (rest, true)
            } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
                (rest, false)
            } else {
                return Err(invalid());
            };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if expects_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let channel = |part: &str| part.parse::<u8>().map_err(|_| invalid());
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;
        let a = if expects_alpha {
            let a = parts[3].parse::<f32>().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(invalid());
            }
            a
        } else {
            1.0
        };

        Ok(Self { r, g, b, a })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rgba_and_rgb() {
        let c: Rgba = "rgba(255, 120, 0, 0.6)".parse().unwrap();
        assert_eq!(c, Rgba::new(255, 120, 0, 0.6));

        let c: Rgba = "rgb(10,20,30)".parse().unwrap();
        assert_eq!(c, Rgba::new(10, 20, 30, 1.0));
    }

    #[test]
    fn rejects_malformed_tokens() {
        for bad in [
            "",
            "#ff0000",
            "rgba(1, 2, 3)",
            "rgb(1, 2, 3, 0.5)",
            "rgba(256, 0, 0, 1)",
            "rgba(0, 0, 0, 1.5)",
            "rgba(0, 0, 0, 1",
        ] {
            assert!(bad.parse::<Rgba>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn style_reads_malformed_tokens_as_absent() {
        let style = CategoryStyle {
            stroke_rgba: Some("rgba(0, 200, 255, 0.9)".into()),
            glow_rgba: Some("glowy".into()),
        };
        assert_eq!(style.stroke(), Some(Rgba::new(0, 200, 255, 0.9)));
        assert_eq!(style.glow(), None);
    }
}
