//! Unit tests for PaletteListItem layout and activation helpers.
//!
//! Tests verify:
//! - Affordance positioning (trailing edge, vertical centering, natural size)
//! - Comment-link activation (at most one open request per click)

use std::cell::RefCell;

use super::palette_list_item::{affordance_rect, open_comment_link, PaletteListItemColors};
use super::RowRect;
use crate::theme::Theme;

// =============================================================================
// Affordance layout
// =============================================================================

#[test]
fn test_affordance_is_flush_to_trailing_edge() {
    let row = RowRect::new(0.0, 0.0, 300.0, 20.0);
    let rect = affordance_rect(row, 24.0, 12.0);
    assert_eq!(rect.x + rect.w, row.x + row.w);
}

#[test]
fn test_affordance_is_vertically_centered() {
    let row = RowRect::new(0.0, 100.0, 300.0, 20.0);
    let rect = affordance_rect(row, 24.0, 12.0);
    assert_eq!(rect.y, 100.0 + (20.0 - 12.0) / 2.0);
    // Equal space above and below
    assert_eq!(rect.y - row.y, (row.y + row.h) - (rect.y + rect.h));
}

#[test]
fn test_affordance_keeps_its_natural_size() {
    let row = RowRect::new(0.0, 0.0, 300.0, 20.0);
    let rect = affordance_rect(row, 24.0, 12.0);
    assert_eq!((rect.w, rect.h), (24.0, 12.0));

    // Resizing the row moves the affordance but never stretches it
    let wider = affordance_rect(RowRect::new(0.0, 0.0, 500.0, 40.0), 24.0, 12.0);
    assert_eq!((wider.w, wider.h), (24.0, 12.0));
    assert_eq!(wider.x, 500.0 - 24.0);
}

#[test]
fn test_affordance_tracks_row_origin() {
    let rect = affordance_rect(RowRect::new(50.0, 200.0, 100.0, 20.0), 10.0, 10.0);
    assert_eq!(rect.x, 50.0 + 100.0 - 10.0);
    assert_eq!(rect.y, 200.0 + 5.0);
}

// =============================================================================
// Comment-link activation
// =============================================================================

#[test]
fn test_activation_opens_the_first_link_exactly_once() {
    let opened = RefCell::new(Vec::new());
    open_comment_link("see https://example.com/x! and http://other.example", |url| {
        opened.borrow_mut().push(url.to_string());
    });
    assert_eq!(*opened.borrow(), vec!["https://example.com/x!"]);
}

#[test]
fn test_activation_without_link_opens_nothing() {
    let count = RefCell::new(0);
    open_comment_link("just a plain note about colors", |_| {
        *count.borrow_mut() += 1;
    });
    assert_eq!(*count.borrow(), 0);
}

#[test]
fn test_activation_is_repeatable() {
    let opened = RefCell::new(Vec::new());
    let comment = "mirror at http://a.example";
    for _ in 0..2 {
        open_comment_link(comment, |url| opened.borrow_mut().push(url.to_string()));
    }
    assert_eq!(opened.borrow().len(), 2);
    assert!(opened.borrow().iter().all(|u| u == "http://a.example"));
}

// =============================================================================
// Colors
// =============================================================================

#[test]
fn test_colors_from_theme_uses_list_item_face() {
    let theme = Theme::default();
    let colors = PaletteListItemColors::from_theme(&theme);
    assert_eq!(colors.list_item_face, theme.colors.background.list_item_face);
    assert_eq!(colors.text_primary, theme.colors.text.primary);
}
