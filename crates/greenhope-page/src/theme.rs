//! Page theme: resolved colors for every paint role.

use greenhope_types::backend::Color;
use greenhope_types::color::lighten;
use greenhope_types::config::Palette;
use greenhope_types::error::Result;

use crate::content::Icon;

/// Paint roles used by layout items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    PrimaryDark,
    Heading,
    Subheading,
    Background,
    Surface,
    SurfaceAlt,
    Border,
    Text,
    TextMuted,
    OnPrimary,
    Icon(Icon),
    IconBadge,
}

/// Resolved page colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub primary_dark: Color,
    pub heading: Color,
    pub subheading: Color,
    pub background: Color,
    pub surface: Color,
    pub surface_alt: Color,
    pub border: Color,
    pub text: Color,
    pub text_muted: Color,
    pub on_primary: Color,
}

impl Theme {
    /// Resolve a palette into colors.
    pub fn from_palette(palette: &Palette) -> Result<Self> {
        let text_muted = palette.color("text_muted")?;
        Ok(Self {
            primary: palette.color("primary")?,
            primary_dark: palette.color("primary_dark")?,
            heading: palette.color("heading")?,
            subheading: palette.color("subheading")?,
            background: palette.color("background")?,
            surface: palette.color("surface")?,
            surface_alt: palette.color("surface_alt")?,
            border: lighten(text_muted, 0.8),
            text: palette.color("text")?,
            text_muted,
            on_primary: palette.color("on_primary")?,
        })
    }

    /// Color for a paint role.
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Primary => self.primary,
            Tone::PrimaryDark => self.primary_dark,
            Tone::Heading => self.heading,
            Tone::Subheading => self.subheading,
            Tone::Background => self.background,
            Tone::Surface => self.surface,
            Tone::SurfaceAlt => self.surface_alt,
            Tone::Border => self.border,
            Tone::Text => self.text,
            Tone::TextMuted => self.text_muted,
            Tone::OnPrimary => self.on_primary,
            Tone::IconBadge => self.surface,
            Tone::Icon(icon) => match icon {
                Icon::Heart => Color::rgb(239, 68, 68),
                Icon::Book => Color::rgb(59, 130, 246),
                Icon::Globe => Color::rgb(34, 197, 94),
                Icon::Users => Color::rgb(168, 85, 247),
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::default()).unwrap_or_else(|_| Self {
            primary: Color::rgb(22, 163, 74),
            primary_dark: Color::rgb(21, 128, 61),
            heading: Color::rgb(21, 128, 61),
            subheading: Color::rgb(22, 101, 52),
            background: Color::WHITE,
            surface: Color::rgb(220, 252, 231),
            surface_alt: Color::rgb(240, 253, 244),
            border: Color::rgb(229, 231, 235),
            text: Color::rgb(31, 41, 55),
            text_muted: Color::rgb(55, 65, 81),
            on_primary: Color::WHITE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_resolves() {
        let theme = Theme::from_palette(&Palette::default()).unwrap();
        assert_eq!(theme.primary, Color::rgb(0x16, 0xa3, 0x4a));
        assert_eq!(theme.on_primary, Color::WHITE);
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn palette_override_applies() {
        let palette = Palette {
            primary: "#0000ff".to_string(),
            ..Palette::default()
        };
        let theme = Theme::from_palette(&palette).unwrap();
        assert_eq!(theme.tone(Tone::Primary), Color::rgb(0, 0, 255));
    }

    #[test]
    fn invalid_palette_is_error() {
        let palette = Palette {
            text: "black".to_string(),
            ..Palette::default()
        };
        assert!(Theme::from_palette(&palette).is_err());
    }

    #[test]
    fn icons_have_distinct_colors() {
        let theme = Theme::default();
        let heart = theme.tone(Tone::Icon(Icon::Heart));
        let book = theme.tone(Tone::Icon(Icon::Book));
        assert_ne!(heart, book);
    }
}
