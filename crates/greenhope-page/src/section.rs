//! Section identifiers and their layout-derived bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five content sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    About,
    Mission,
    Vision,
    Work,
    Opportunities,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::About,
        SectionId::Mission,
        SectionId::Vision,
        SectionId::Work,
        SectionId::Opportunities,
    ];

    /// Element identifier, as used in link anchors (`#about`).
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::About => "about",
            SectionId::Mission => "mission",
            SectionId::Vision => "vision",
            SectionId::Work => "work",
            SectionId::Opportunities => "opportunities",
        }
    }

    /// Navigation label: the identifier with its first letter capitalised.
    pub fn label(self) -> &'static str {
        match self {
            SectionId::About => "About",
            SectionId::Mission => "Mission",
            SectionId::Vision => "Vision",
            SectionId::Work => "Work",
            SectionId::Opportunities => "Opportunities",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix('#').unwrap_or(s);
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a rendered section, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Offset of the section's top edge from the top of the page.
    pub top: i32,
    /// Rendered height, excluding the margin below the section.
    pub height: i32,
}

impl SectionBounds {
    pub const fn new(top: i32, height: i32) -> Self {
        Self { top, height }
    }

    /// Offset just past the bottom edge.
    pub const fn bottom(&self) -> i32 {
        self.top + self.height
    }
}
