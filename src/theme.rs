//! Theme colors for the palette panel.
//!
//! Colors are plain hex values (`u32`) grouped by role. The whole theme is
//! serde-loadable so a user theme file can override any subset of it.

use serde::{Deserialize, Serialize};

/// Hex color representation (u32)
pub type HexColor = u32;

/// Combine a hex color with an alpha value for use with `gpui::rgba()`.
/// Shifts the color left 8 bits and ors in the alpha byte.
#[inline]
pub fn with_alpha(hex: HexColor, alpha: u8) -> u32 {
    (hex << 8) | (alpha as u32)
}

/// Background color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Main panel background (0x1e1e1e)
    pub main: HexColor,
    /// Header strip background (0x2d2d30)
    pub header: HexColor,
    /// Normal face of an unselected list row (0x252526)
    #[serde(default = "default_list_item_face")]
    pub list_item_face: HexColor,
}

fn default_list_item_face() -> HexColor {
    0x252526
}

/// Text color definitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextColors {
    /// Primary text color (0xffffff - white)
    pub primary: HexColor,
    /// Secondary text color (0xe0e0e0)
    pub secondary: HexColor,
    /// Muted text color (0x808080)
    pub muted: HexColor,
    /// Dimmed text color (0x666666)
    pub dimmed: HexColor,
}

/// Accent and highlight colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccentColors {
    /// Selected row highlight (0x007acc - blue)
    pub selected: HexColor,
    /// Subtle selection background for list rows (0x2a2a2a)
    #[serde(default = "default_selected_subtle")]
    pub selected_subtle: HexColor,
}

fn default_selected_subtle() -> HexColor {
    0x2a2a2a
}

/// Border and chrome colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UIColors {
    /// Border color (0x464647)
    pub border: HexColor,
    /// Tooltip background (0x3c3c3c)
    #[serde(default = "default_tooltip_face")]
    pub tooltip_face: HexColor,
}

fn default_tooltip_face() -> HexColor {
    0x3c3c3c
}

/// Complete color scheme definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub ui: UIColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme {
            background: BackgroundColors {
                main: 0x1e1e1e,
                header: 0x2d2d30,
                list_item_face: default_list_item_face(),
            },
            text: TextColors {
                primary: 0xffffff,
                secondary: 0xe0e0e0,
                muted: 0x808080,
                dimmed: 0x666666,
            },
            accent: AccentColors {
                selected: 0x007acc,
                selected_subtle: default_selected_subtle(),
            },
            ui: UIColors {
                border: 0x464647,
                tooltip_face: default_tooltip_face(),
            },
        }
    }
}

/// The application theme
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub colors: ColorScheme,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_alpha_packs_rgba() {
        assert_eq!(with_alpha(0x1e1e1e, 0xff), 0x1e1e1eff);
        assert_eq!(with_alpha(0xffffff, 0x00), 0xffffff00);
    }

    #[test]
    fn test_default_theme_roundtrips_through_json() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back.colors.background.main, theme.colors.background.main);
        assert_eq!(back.colors.accent.selected, theme.colors.accent.selected);
    }

    #[test]
    fn test_partial_theme_uses_defaults() {
        let theme: Theme = serde_json::from_str("{}").unwrap();
        assert_eq!(theme.colors.text.primary, 0xffffff);
        assert_eq!(theme.colors.background.list_item_face, 0x252526);
    }
}
