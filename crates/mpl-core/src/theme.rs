// ABOUTME: Splitter color palettes and theme lookup.
// ABOUTME: Resolves a theme name or explicit palette to the colors a renderer uses.

use serde::{Deserialize, Serialize};

use crate::color::{self, Color};

/// Colors for a splitter bar and its grab handle in each visual state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    #[serde(with = "color::hex")]
    pub splitter: Color,
    #[serde(with = "color::hex")]
    pub splitter_hover: Color,
    #[serde(with = "color::hex")]
    pub splitter_active: Color,
    #[serde(with = "color::hex")]
    pub handle: Color,
    #[serde(with = "color::hex")]
    pub handle_hover: Color,
    #[serde(with = "color::hex")]
    pub handle_active: Color,
}

fn hex(s: &str) -> Color {
    Color::from_hex(s).unwrap_or_default()
}

impl Palette {
    pub fn light() -> Self {
        Self {
            splitter: hex("#f0f0f0"),
            splitter_hover: hex("#d9d9d9"),
            splitter_active: hex("#1890ff"),
            handle: hex("#cccccc"),
            handle_hover: hex("#999999"),
            handle_active: hex("#1890ff"),
        }
    }

    pub fn dark() -> Self {
        Self {
            splitter: hex("#303030"),
            splitter_hover: hex("#434343"),
            splitter_active: hex("#177ddc"),
            handle: hex("#595959"),
            handle_hover: hex("#8c8c8c"),
            handle_active: hex("#177ddc"),
        }
    }

    /// Look up a built-in palette by name
    pub fn named(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::light()
    }
}

/// Either the name of a built-in palette or a fully specified one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Theme {
    Named(String),
    Custom(Palette),
}

impl Theme {
    /// Resolve to concrete colors; unknown names fall back to the light palette
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Named(name) => Palette::named(name).unwrap_or_default(),
            Theme::Custom(palette) => *palette,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Named("light".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_themes_resolve() {
        assert_eq!(Theme::Named("dark".into()).palette(), Palette::dark());
        assert_eq!(Theme::default().palette(), Palette::light());
    }

    #[test]
    fn unknown_name_falls_back_to_light() {
        assert_eq!(Theme::Named("solarized".into()).palette(), Palette::light());
    }

    #[test]
    fn custom_palette_is_used_verbatim() {
        let mut custom = Palette::dark();
        custom.splitter = Color::WHITE;
        assert_eq!(Theme::Custom(custom).palette().splitter, Color::WHITE);
    }

    #[test]
    fn dark_active_color_matches_preset() {
        assert_eq!(Palette::dark().splitter_active.to_hex(), "#177ddc");
    }
}
