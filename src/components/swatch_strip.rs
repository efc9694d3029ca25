//! Swatch strip: the row of small colored boxes previewing a palette.
//!
//! Every dimension is a fixed multiple of the UI scale factor so strips
//! look the same across display densities. The strip sits along the
//! bottom-left of its row and draws one box per palette entry, in index
//! order, using only the entry's R/G/B channels.

use gpui::*;

use super::RowRect;
use crate::palette::Palette;

/// Unscaled edge length of one swatch box.
pub const SWATCH_BOX: f32 = 4.0;

/// Unscaled distance from the row bottom to the top of the swatch boxes.
pub const SWATCH_RAISE: f32 = 6.0;

/// Unscaled vertical padding above and below the row content.
pub const ROW_PADDING: f32 = 2.0;

/// Unscaled height of the row content area.
pub const ROW_CONTENT: f32 = 16.0;

/// Fixed row height for the given UI scale. Independent of how many
/// entries the palette has.
pub fn row_height(scale: f32) -> f32 {
    (ROW_PADDING + ROW_CONTENT + ROW_PADDING) * scale
}

/// One positioned, colored swatch box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwatchBox {
    pub rect: RowRect,
    /// Fill color as 0xRRGGBB; always rendered opaque.
    pub color: u32,
}

/// Compute the swatch boxes for `palette` inside the row `bounds`.
/// Boxes run left-to-right from the row's left edge along its bottom;
/// the caller clips them to the row.
pub fn swatch_boxes(palette: &Palette, bounds: RowRect, scale: f32) -> Vec<SwatchBox> {
    let fills: Vec<u32> = palette.colors().map(|c| c.rgb_hex()).collect();
    swatch_hex_boxes(&fills, bounds, scale)
}

/// As [`swatch_boxes`], for already-packed 0xRRGGBB fills.
pub fn swatch_hex_boxes(fills: &[u32], bounds: RowRect, scale: f32) -> Vec<SwatchBox> {
    let edge = SWATCH_BOX * scale;
    let y = bounds.y + bounds.h - SWATCH_RAISE * scale;
    fills
        .iter()
        .enumerate()
        .map(|(i, &color)| SwatchBox {
            rect: RowRect::new(bounds.x + i as f32 * edge, y, edge, edge),
            color,
        })
        .collect()
}

/// The swatch strip element. Positioned by its parent row; expects the
/// parent to be `.relative()` and to clip overflow.
#[derive(IntoElement)]
pub struct SwatchStrip {
    colors: Vec<u32>,
    scale: f32,
}

impl SwatchStrip {
    pub fn new(palette: &Palette, scale: f32) -> Self {
        Self::from_hex(palette.colors().map(|c| c.rgb_hex()).collect(), scale)
    }

    /// Build from already-packed 0xRRGGBB fills.
    pub fn from_hex(colors: Vec<u32>, scale: f32) -> Self {
        Self { colors, scale }
    }
}

impl RenderOnce for SwatchStrip {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        // The strip fills the row's box; place each swatch at its computed
        // rectangle within it.
        let bounds = RowRect::new(
            0.0,
            0.0,
            self.colors.len() as f32 * SWATCH_BOX * self.scale,
            row_height(self.scale),
        );
        let boxes = swatch_hex_boxes(&self.colors, bounds, self.scale);
        div().absolute().inset_0().children(boxes.into_iter().map(|b| {
            div()
                .absolute()
                .left(px(b.rect.x))
                .top(px(b.rect.y))
                .w(px(b.rect.w))
                .h(px(b.rect.h))
                .bg(rgb(b.color))
        }))
    }
}
