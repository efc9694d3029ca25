//! Palette data model.
//!
//! A `Palette` is an ordered list of RGBA colors with a display name and an
//! optional free-text comment. Palettes are produced by the loader and are
//! read-only once delivered to the UI.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PaletteColor {
    /// Fully opaque color from RGB channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack the R/G/B channels as 0xRRGGBB. The alpha channel is dropped;
    /// swatch fills are always opaque.
    pub fn rgb_hex(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

/// One palette entry: a color plus the optional label the file gave it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub color: PaletteColor,
    pub label: Option<String>,
}

impl PaletteEntry {
    pub fn new(color: PaletteColor) -> Self {
        Self { color, label: None }
    }

    pub fn labeled(color: PaletteColor, label: impl Into<String>) -> Self {
        Self {
            color,
            label: Some(label.into()),
        }
    }
}

/// A named, ordered color palette.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    /// Free-text comment from the palette file; empty when the file had none.
    pub comment: String,
    pub entries: Vec<PaletteEntry>,
}

impl Palette {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_comment(&self) -> bool {
        !self.comment.is_empty()
    }

    /// Colors in index order.
    pub fn colors(&self) -> impl Iterator<Item = PaletteColor> + '_ {
        self.entries.iter().map(|e| e.color)
    }
}

/// A loaded palette as delivered by the loader: the palette itself plus
/// where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteResource {
    /// Display name (palette name, falling back to the file stem).
    pub name: String,
    /// Source file the palette was read from.
    pub path: PathBuf,
    pub palette: Palette,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_drops_alpha() {
        let c = PaletteColor::rgba(0x12, 0x34, 0x56, 0x00);
        assert_eq!(c.rgb_hex(), 0x123456);
        let opaque = PaletteColor::rgb(0x12, 0x34, 0x56);
        assert_eq!(opaque.rgb_hex(), c.rgb_hex());
    }

    #[test]
    fn test_has_comment() {
        let mut palette = Palette::new("dawn");
        assert!(!palette.has_comment());
        palette.comment = "warm sunrise tones".to_string();
        assert!(palette.has_comment());
    }

    #[test]
    fn test_colors_iterates_in_index_order() {
        let mut palette = Palette::new("rgb");
        palette.entries = vec![
            PaletteEntry::new(PaletteColor::rgb(255, 0, 0)),
            PaletteEntry::labeled(PaletteColor::rgb(0, 255, 0), "green"),
            PaletteEntry::new(PaletteColor::rgb(0, 0, 255)),
        ];
        let hex: Vec<u32> = palette.colors().map(|c| c.rgb_hex()).collect();
        assert_eq!(hex, vec![0xff0000, 0x00ff00, 0x0000ff]);
    }
}
