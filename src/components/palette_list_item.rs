//! One palette row: name, swatch strip, and the optional comment affordance.
//!
//! The comment affordance is a private control owned by the row. It exists
//! only when the palette carries a comment; clicking it plays the normal
//! press feedback and then opens the first link embedded in the comment.

use gpui::*;
use std::rc::Rc;

use super::swatch_strip::{row_height, SwatchStrip};
use super::RowRect;
use crate::link;
use crate::palette::Palette;
use crate::theme::{with_alpha, Theme};
use crate::tooltips::AnchorSide;

/// Callback type for row and affordance click events
pub type OnClickCallback = Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>;

/// Callback type for affordance hover events (true = entered, false = left)
pub type OnHoverCallback = Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>;

/// Horizontal clearance between the affordance and its tooltip bubble.
const TOOLTIP_CLEARANCE: f32 = 26.0;

/// Pre-computed colors for PaletteListItem rendering
#[derive(Clone, Copy)]
pub struct PaletteListItemColors {
    pub text_primary: u32,
    pub text_secondary: u32,
    pub text_muted: u32,
    pub accent_selected_subtle: u32,
    pub list_item_face: u32,
    pub tooltip_face: u32,
    pub border: u32,
}

impl PaletteListItemColors {
    /// Create from theme reference
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            text_primary: theme.colors.text.primary,
            text_secondary: theme.colors.text.secondary,
            text_muted: theme.colors.text.muted,
            accent_selected_subtle: theme.colors.accent.selected_subtle,
            list_item_face: theme.colors.background.list_item_face,
            tooltip_face: theme.colors.ui.tooltip_face,
            border: theme.colors.ui.border,
        }
    }
}

/// Position an affordance of the given natural size inside a row: flush to
/// the trailing edge, vertically centered, never stretched.
pub fn affordance_rect(row: RowRect, natural_w: f32, natural_h: f32) -> RowRect {
    RowRect::new(
        row.x + row.w - natural_w,
        row.y + row.h / 2.0 - natural_h / 2.0,
        natural_w,
        natural_h,
    )
}

/// Run the activation side of a comment affordance click: extract the first
/// embedded link and hand it to the opener. At most one open request per
/// call; none when the comment has no link.
pub fn open_comment_link(comment: &str, open_url: impl Fn(&str)) {
    if let Some(url) = link::find_link(comment) {
        open_url(url);
    }
}

/// The comment affordance. Private to the row; only rows construct it.
#[derive(IntoElement)]
struct CommentButton {
    index: usize,
    face: u32,
    text_color: u32,
    on_click: Option<Rc<OnClickCallback>>,
    on_hover: Option<Rc<OnHoverCallback>>,
}

impl RenderOnce for CommentButton {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        // White at ~15% alpha lifts the control on hover on any dark face
        let hover_overlay = rgba(0xffffff26);

        let mut button = div()
            .id(ElementId::NamedInteger("palette-comment".into(), self.index as u64))
            .flex_shrink_0()
            .px(px(4.))
            .py(px(2.))
            .rounded(px(3.))
            .bg(rgb(self.face))
            .text_xs()
            .text_color(rgb(self.text_color))
            .cursor_pointer()
            .hover(move |s| s.bg(hover_overlay))
            .active(|s| s.bg(rgba(0xffffff40)))
            .child("💬");

        if let Some(callback) = self.on_click {
            button = button.on_click(move |event, window, cx| {
                // The click belongs to the affordance, not the row
                cx.stop_propagation();
                callback(event, window, cx);
            });
        }
        if let Some(callback) = self.on_hover {
            button = button.on_hover(move |hovered, window, cx| {
                callback(hovered, window, cx);
            });
        }
        button
    }
}

/// A selectable palette row
///
/// Supports:
/// - Palette name with ellipsis truncation
/// - Swatch strip along the bottom-left, clipped to the row
/// - Optional comment affordance at the trailing edge (iff the palette has
///   a comment), with a tooltip bubble on its leading side while hovered
/// - Selection state with themed colors
///
/// # Example
/// ```ignore
/// let colors = PaletteListItemColors::from_theme(&theme);
/// PaletteListItem::new(index, &resource.palette, colors)
///     .scale(1.0)
///     .selected(true)
///     .on_select(Box::new(|_, _, _| {}))
/// ```
#[derive(IntoElement)]
pub struct PaletteListItem {
    index: usize,
    name: SharedString,
    swatch_colors: Vec<u32>,
    has_comment: bool,
    colors: PaletteListItemColors,
    scale: f32,
    selected: bool,
    tooltip: Option<(SharedString, AnchorSide)>,
    on_select: Option<OnClickCallback>,
    on_comment_click: Option<Rc<OnClickCallback>>,
    on_comment_hover: Option<Rc<OnHoverCallback>>,
}

impl PaletteListItem {
    /// Create a row for the palette at `index`.
    pub fn new(index: usize, palette: &Palette, colors: PaletteListItemColors) -> Self {
        Self {
            index,
            name: SharedString::from(palette.name.clone()),
            swatch_colors: palette.colors().map(|c| c.rgb_hex()).collect(),
            has_comment: palette.has_comment(),
            colors,
            scale: 1.0,
            selected: false,
            tooltip: None,
            on_select: None,
            on_comment_click: None,
            on_comment_hover: None,
        }
    }

    /// Set the UI scale factor
    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Set whether this row is selected
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Show a tooltip bubble beside the affordance (anchor = which side of
    /// the affordance it appears on)
    pub fn tooltip(mut self, text: impl Into<SharedString>, anchor: AnchorSide) -> Self {
        self.tooltip = Some((text.into(), anchor));
        self
    }

    /// Set the row click callback
    pub fn on_select(mut self, callback: OnClickCallback) -> Self {
        self.on_select = Some(callback);
        self
    }

    /// Set the affordance click callback
    pub fn on_comment_click(mut self, callback: OnClickCallback) -> Self {
        self.on_comment_click = Some(Rc::new(callback));
        self
    }

    /// Set the affordance hover callback
    pub fn on_comment_hover(mut self, callback: OnHoverCallback) -> Self {
        self.on_comment_hover = Some(Rc::new(callback));
        self
    }
}

impl RenderOnce for PaletteListItem {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let colors = self.colors;
        let scale = self.scale;
        let height = row_height(scale);

        let selected_bg = rgba(with_alpha(colors.accent_selected_subtle, 0x80));
        let hover_bg = rgba(with_alpha(colors.accent_selected_subtle, 0x40));
        let name_color = if self.selected {
            rgb(colors.text_primary)
        } else {
            rgb(colors.text_secondary)
        };

        let mut row = div()
            .id(ElementId::NamedInteger("palette-row".into(), self.index as u64))
            .relative()
            .w_full()
            .h(px(height))
            .px(px(8.))
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .gap(px(6.))
            .bg(if self.selected {
                selected_bg
            } else {
                rgba(0x00000000)
            })
            .hover(move |s| s.bg(hover_bg))
            .cursor_pointer();

        if let Some(callback) = self.on_select {
            row = row.on_click(move |event, window, cx| callback(event, window, cx));
        }

        // Swatch layer first so text and controls paint above it; clipped
        // to the row bounds here rather than on the row itself, which must
        // stay unclipped for the tooltip bubble.
        row = row.child(
            div()
                .absolute()
                .inset_0()
                .overflow_hidden()
                .child(SwatchStrip::from_hex(self.swatch_colors, scale)),
        );

        // Name, truncated to the space the affordance leaves over
        row = row.child(
            div()
                .flex_1()
                .min_w(px(0.))
                .overflow_hidden()
                .text_ellipsis()
                .whitespace_nowrap()
                .text_size(px(12. * scale))
                .text_color(name_color)
                .child(self.name),
        );

        if self.has_comment {
            row = row.child(CommentButton {
                index: self.index,
                face: colors.list_item_face,
                text_color: colors.text_muted,
                on_click: self.on_comment_click,
                on_hover: self.on_comment_hover,
            });
        }

        if let Some((text, anchor)) = self.tooltip {
            let bubble = div()
                .max_w(px(260.))
                .px(px(6.))
                .py(px(2.))
                .rounded(px(3.))
                .bg(rgb(colors.tooltip_face))
                .border_1()
                .border_color(rgb(colors.border))
                .text_xs()
                .text_color(rgb(colors.text_primary))
                .overflow_hidden()
                .text_ellipsis()
                .whitespace_nowrap()
                .child(text);
            let holder = div().absolute().h_full().flex().items_center();
            row = row.child(match anchor {
                AnchorSide::Left => holder
                    .right(px(TOOLTIP_CLEARANCE * scale))
                    .child(bubble),
                AnchorSide::Right => holder.left(px(TOOLTIP_CLEARANCE * scale)).child(bubble),
            });
        }

        row
    }
}
