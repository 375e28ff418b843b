//! Shared types for the navigator module

use std::fmt;
use std::str::FromStr;

/// Scroll axis of the navigator overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Single-row strip scrolling along x.
    #[default]
    Horizontal,
    /// Multi-column grid scrolling along y, with a search filter.
    Vertical,
}

impl Orientation {
    pub fn supports_search(self) -> bool {
        matches!(self, Orientation::Vertical)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("horizontal"),
            Orientation::Vertical => f.write_str("vertical"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOrientation(pub String);

impl fmt::Display for UnknownOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown orientation {:?}", self.0)
    }
}

impl std::error::Error for UnknownOrientation {}

impl FromStr for Orientation {
    type Err = UnknownOrientation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" | "strip" => Ok(Orientation::Horizontal),
            "vertical" | "v" | "grid" => Ok(Orientation::Vertical),
            other => Err(UnknownOrientation(other.to_string())),
        }
    }
}

/// Inputs the host supplies when opening the navigator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigatorProps {
    pub is_open: bool,
    /// Level to start on instead of root, if the catalog has it.
    pub initial_category: Option<String>,
}

impl NavigatorProps {
    pub fn open(initial_category: Option<String>) -> Self {
        Self {
            is_open: true,
            initial_category,
        }
    }

    pub fn closed() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_parses_aliases() {
        assert_eq!("Grid".parse(), Ok(Orientation::Vertical));
        assert_eq!(" horizontal ".parse(), Ok(Orientation::Horizontal));
        assert!("diagonal".parse::<Orientation>().is_err());
    }
}
