//! Reusable UI components for the palette panel.
//!
//! # Components
//!
//! - [`PaletteListItem`] - one palette row: name, swatch strip, optional
//!   comment affordance
//! - [`SwatchStrip`] - the fixed-height strip of palette entry boxes
//!
//! # Design Patterns
//!
//! All components follow these patterns:
//! - **Colors struct**: Pre-computed colors (Copy/Clone) for efficient closure use
//! - **Builder pattern**: Fluent API with `.method()` chaining
//! - **IntoElement trait**: Compatible with GPUI's element system
//! - Layout arithmetic kept in pure helpers so geometry is unit-testable

pub mod palette_list_item;
#[cfg(test)]
mod palette_list_item_tests;
pub mod swatch_strip;

pub use palette_list_item::{PaletteListItem, PaletteListItemColors};
#[allow(unused_imports)]
pub use swatch_strip::{row_height, SwatchStrip, SWATCH_BOX, SWATCH_RAISE};

/// Plain rectangle used by the pure layout helpers. Kept free of GPUI types
/// so the geometry can be tested directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RowRect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}
