//! Page configuration.
//!
//! Loaded from a TOML file; every field has a default so an empty file (or
//! no file at all) yields a working page.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::backend::Color;
use crate::color::parse_hex_color;
use crate::error::{GreenHopeError, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "GREENHOPE_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "greenhope.toml";

/// Top-level configuration for the page and its host window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Window title.
    pub window_title: String,
    /// Initial drawable width in pixels.
    pub screen_width: u32,
    /// Initial drawable height in pixels.
    pub screen_height: u32,
    /// Distance of the scroll-spy reference point below the scroll offset.
    pub spy_offset: i32,
    /// Gap kept above a section when it is scrolled into view.
    pub scroll_margin_top: i32,
    /// Animate programmatic scrolling.
    pub smooth_scroll: bool,
    /// Duration of a programmatic scroll animation.
    pub smooth_scroll_ms: u32,
    /// Viewports narrower than this use the drawer navigation.
    pub mobile_breakpoint: u32,
    /// Pixels scrolled per wheel notch.
    pub wheel_step: i32,
    /// Theme colors as `#rrggbb` strings.
    pub palette: Palette,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            window_title: "Green Hope NGO".to_string(),
            screen_width: 1024,
            screen_height: 720,
            spy_offset: 50,
            scroll_margin_top: 96,
            smooth_scroll: true,
            smooth_scroll_ms: 450,
            mobile_breakpoint: 768,
            wheel_step: 48,
            palette: Palette::default(),
        }
    }
}

/// Hex color strings for the page theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Header, drawer and footer background.
    pub primary: String,
    /// Highlight behind the active drawer entry.
    pub primary_dark: String,
    /// Section heading color.
    pub heading: String,
    /// Card heading color.
    pub subheading: String,
    /// Page background.
    pub background: String,
    /// Tinted card background.
    pub surface: String,
    /// Lightly tinted card background.
    pub surface_alt: String,
    /// Body text.
    pub text: String,
    /// Secondary body text.
    pub text_muted: String,
    /// Text drawn on `primary`.
    pub on_primary: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#16a34a".to_string(),
            primary_dark: "#15803d".to_string(),
            heading: "#15803d".to_string(),
            subheading: "#166534".to_string(),
            background: "#ffffff".to_string(),
            surface: "#dcfce7".to_string(),
            surface_alt: "#f0fdf4".to_string(),
            text: "#1f2937".to_string(),
            text_muted: "#374151".to_string(),
            on_primary: "#ffffff".to_string(),
        }
    }
}

impl Palette {
    /// Parse one named entry, reporting which key was malformed.
    pub fn color(&self, key: &str) -> Result<Color> {
        let raw = match key {
            "primary" => &self.primary,
            "primary_dark" => &self.primary_dark,
            "heading" => &self.heading,
            "subheading" => &self.subheading,
            "background" => &self.background,
            "surface" => &self.surface,
            "surface_alt" => &self.surface_alt,
            "text" => &self.text,
            "text_muted" => &self.text_muted,
            "on_primary" => &self.on_primary,
            _ => return Err(GreenHopeError::Config(format!("unknown palette key '{key}'"))),
        };
        parse_hex_color(raw)
            .ok_or_else(|| GreenHopeError::Config(format!("palette.{key}: invalid color '{raw}'")))
    }

    /// Every palette key, in declaration order.
    pub const KEYS: [&'static str; 10] = [
        "primary",
        "primary_dark",
        "heading",
        "subheading",
        "background",
        "surface",
        "surface_alt",
        "text",
        "text_muted",
        "on_primary",
    ];
}

impl PageConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve the active configuration.
    ///
    /// Resolution order:
    /// 1. Explicit path (e.g. first CLI argument)
    /// 2. Path in the `GREENHOPE_CONFIG` environment variable
    /// 3. `./greenhope.toml`
    /// 4. Built-in defaults
    pub fn resolve(explicit: Option<&str>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(Path::new(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::load(Path::new(&path));
        }
        let local = Path::new(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            return Self::load(local);
        }
        log::warn!("No {DEFAULT_CONFIG_FILE} found -- using built-in defaults");
        Ok(Self::default())
    }

    /// Reject values the page cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(GreenHopeError::Config(format!(
                "screen size must be non-zero, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.spy_offset < 0 {
            return Err(GreenHopeError::Config(format!(
                "spy_offset must be >= 0, got {}",
                self.spy_offset
            )));
        }
        if self.scroll_margin_top < 0 {
            return Err(GreenHopeError::Config(format!(
                "scroll_margin_top must be >= 0, got {}",
                self.scroll_margin_top
            )));
        }
        if self.wheel_step <= 0 {
            return Err(GreenHopeError::Config(format!(
                "wheel_step must be > 0, got {}",
                self.wheel_step
            )));
        }
        for key in Palette::KEYS {
            self.palette.color(key)?;
        }
        Ok(())
    }

    /// Whether a viewport of `width` uses the drawer navigation.
    pub fn is_narrow(&self, width: u32) -> bool {
        width < self.mobile_breakpoint
    }
}
