//! The palettes list box.
//!
//! `PalettesListState` is the plain bookkeeping half: delivered resources in
//! arrival order, the selection, tooltip registrations, and the
//! palette-changed subscriber list. `PalettesListBox` is the GPUI entity
//! wrapped around it: it owns the background loader handle, drains ready
//! events from an async task, and renders the rows through `uniform_list`.

use gpui::*;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::components::palette_list_item::open_comment_link;
use crate::components::swatch_strip::row_height;
use crate::components::{PaletteListItem, PaletteListItemColors};
use crate::loader::{LoaderDelegate, PalettesLoader, ResourceEvent};
use crate::palette::{Palette, PaletteResource};
use crate::theme::Theme;
use crate::tooltips::{AnchorSide, TooltipRegistry};

/// Callback type for palette-changed subscribers
pub type PaletteChangeCallback = Box<dyn Fn(&Palette)>;

/// Tooltip registry key for the comment affordance of the row at `index`.
pub fn comment_tooltip_id(index: usize) -> String {
    format!("palette-comment-{index}")
}

/// Given the current selection, pick the row a one-step move lands on.
/// Clamps at the ends; an empty list has nowhere to go.
pub fn step_selection(current: Option<usize>, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, true) => 0,
        (None, false) => len - 1,
        (Some(i), true) => (i + 1).min(len - 1),
        (Some(i), false) => i.saturating_sub(1),
    })
}

/// Resource and selection bookkeeping, free of any UI types.
///
/// Invariants: resources keep their arrival order forever; the selection is
/// `None` or a valid index; subscribers hear about each selection change
/// exactly once, and never about a no-op reselect.
#[derive(Default)]
pub struct PalettesListState {
    resources: Vec<PaletteResource>,
    selected: Option<usize>,
    subscribers: Vec<PaletteChangeCallback>,
    tooltips: TooltipRegistry,
}

impl PalettesListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a newly delivered resource and return its row index.
    ///
    /// Commented palettes get their tooltip registered here, once, at row
    /// construction time; the tooltip anchors to the affordance's leading
    /// side.
    pub fn push_resource(&mut self, resource: PaletteResource) -> usize {
        let index = self.resources.len();
        if resource.palette.has_comment() {
            self.tooltips.register(
                comment_tooltip_id(index),
                resource.palette.comment.clone(),
                AnchorSide::Left,
            );
        }
        self.resources.push(resource);
        index
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn resource(&self, index: usize) -> Option<&PaletteResource> {
        self.resources.get(index)
    }

    pub fn tooltips(&self) -> &TooltipRegistry {
        &self.tooltips
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_resource(&self) -> Option<&PaletteResource> {
        self.selected.and_then(|i| self.resources.get(i))
    }

    /// The palette bound to the current selection, if any.
    pub fn selected_palette(&self) -> Option<&Palette> {
        self.selected_resource().map(|r| &r.palette)
    }

    /// Change the selection. Returns whether anything changed. Selecting an
    /// out-of-range index is ignored; a change to a valid row notifies every
    /// subscriber exactly once.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        if let Some(i) = index {
            if i >= self.resources.len() {
                return false;
            }
        }
        if index == self.selected {
            return false;
        }
        self.selected = index;
        if let Some(i) = index {
            let palette = &self.resources[i].palette;
            for subscriber in &self.subscribers {
                subscriber(palette);
            }
        }
        true
    }

    /// Subscribe to palette-changed notifications.
    pub fn subscribe(&mut self, callback: PaletteChangeCallback) {
        self.subscribers.push(callback);
    }
}

/// The panel entity: list box + background loader handle.
pub struct PalettesListBox {
    state: PalettesListState,
    loader: Option<PalettesLoader>,
    loading_done: bool,
    hovered_comment: Option<usize>,
    scroll_handle: UniformListScrollHandle,
    focus_handle: FocusHandle,
    colors: PaletteListItemColors,
    theme: Arc<Theme>,
    ui_scale: f32,
    open_url: Rc<dyn Fn(&str)>,
}

impl PalettesListBox {
    /// Build the list box and start loading through `delegate`. The
    /// delegate fully owns the knowledge of where palettes live and how to
    /// read them.
    pub fn new(
        delegate: impl LoaderDelegate,
        theme: Arc<Theme>,
        ui_scale: f32,
        cx: &mut Context<Self>,
    ) -> Self {
        let loader = PalettesLoader::spawn(delegate);
        let events = loader.events();

        cx.spawn(async move |this, cx: &mut gpui::AsyncApp| {
            while let Ok(ResourceEvent::Ready(resource)) = events.recv().await {
                let alive = this.update(cx, |view: &mut PalettesListBox, cx| {
                    view.on_resource_ready(resource, cx);
                });
                if alive.is_err() {
                    return;
                }
            }
            let _ = this.update(cx, |view: &mut PalettesListBox, cx| {
                view.loading_done = true;
                cx.notify();
            });
        })
        .detach();

        Self {
            state: PalettesListState::new(),
            loader: Some(loader),
            loading_done: false,
            hovered_comment: None,
            scroll_handle: UniformListScrollHandle::new(),
            focus_handle: cx.focus_handle(),
            colors: PaletteListItemColors::from_theme(&theme),
            theme,
            ui_scale,
            open_url: Rc::new(|url: &str| {
                if let Err(e) = open::that(url) {
                    warn!(url, error = %e, "Failed to open link");
                }
            }),
        }
    }

    /// Replace the URL opener (embedders and tests).
    pub fn set_url_opener(&mut self, opener: Rc<dyn Fn(&str)>) {
        self.open_url = opener;
    }

    /// Subscribe to palette-changed notifications.
    pub fn subscribe(&mut self, callback: PaletteChangeCallback) {
        self.state.subscribe(callback);
    }

    /// The palette bound to the current selection, if any.
    pub fn selected_palette(&self) -> Option<&Palette> {
        self.state.selected_palette()
    }

    fn on_resource_ready(&mut self, resource: PaletteResource, cx: &mut Context<Self>) {
        let index = self.state.push_resource(resource);
        debug!(index, total = self.state.len(), "Palette row added");
        cx.notify();
    }

    fn select_row(&mut self, index: usize, cx: &mut Context<Self>) {
        if self.state.select(Some(index)) {
            if let Some(resource) = self.state.resource(index) {
                info!(name = %resource.name, index, "Palette selected");
            }
            cx.notify();
        }
    }

    fn step(&mut self, forward: bool, cx: &mut Context<Self>) {
        if let Some(next) = step_selection(self.state.selected_index(), self.state.len(), forward)
        {
            self.select_row(next, cx);
        }
    }

    fn open_comment(&mut self, index: usize) {
        if let Some(resource) = self.state.resource(index) {
            let opener = self.open_url.clone();
            open_comment_link(&resource.palette.comment, |url| opener(url));
        }
    }

    fn set_comment_hover(&mut self, index: usize, hovered: bool, cx: &mut Context<Self>) {
        let next = if hovered {
            Some(index)
        } else if self.hovered_comment == Some(index) {
            None
        } else {
            self.hovered_comment
        };
        if next != self.hovered_comment {
            self.hovered_comment = next;
            cx.notify();
        }
    }

    fn render_header(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        div()
            .w_full()
            .px(px(10.))
            .py(px(6.))
            .bg(rgb(colors.background.header))
            .border_b_1()
            .border_color(rgb(colors.ui.border))
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .child(
                div()
                    .text_sm()
                    .font_weight(FontWeight::MEDIUM)
                    .text_color(rgb(colors.text.primary))
                    .child("Palettes"),
            )
            .child(
                div()
                    .text_xs()
                    .text_color(rgb(colors.text.muted))
                    .child(format!("{}", self.state.len())),
            )
    }

    fn render_footer(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let hint = match self.state.selected_resource() {
            Some(resource) => format!(
                "{} · {} colors",
                resource.name,
                resource.palette.len()
            ),
            None => "↑↓ to select a palette".to_string(),
        };
        div()
            .w_full()
            .px(px(10.))
            .py(px(4.))
            .border_t_1()
            .border_color(rgb(colors.ui.border))
            .text_xs()
            .text_color(rgb(colors.text.muted))
            .overflow_hidden()
            .text_ellipsis()
            .whitespace_nowrap()
            .child(hint)
    }

    fn render_empty_state(&self) -> impl IntoElement {
        let colors = &self.theme.colors;
        let message = if self.loading_done {
            "No palettes found"
        } else {
            "Loading palettes…"
        };
        div()
            .flex_1()
            .w_full()
            .flex()
            .items_center()
            .justify_center()
            .text_sm()
            .text_color(rgb(colors.text.dimmed))
            .child(message)
    }

    fn render_rows(&mut self, cx: &mut Context<Self>) -> impl IntoElement {
        let item_height = row_height(self.ui_scale);
        uniform_list(
            "palettes-list",
            self.state.len(),
            cx.processor(
                move |this: &mut PalettesListBox, visible_range: std::ops::Range<usize>, _window, cx| {
                    let selected = this.state.selected_index();
                    let mut items = Vec::with_capacity(visible_range.len());
                    for idx in visible_range {
                        let Some(resource) = this.state.resource(idx) else {
                            continue;
                        };
                        let mut item =
                            PaletteListItem::new(idx, &resource.palette, this.colors)
                                .scale(this.ui_scale)
                                .selected(selected == Some(idx))
                                .on_select(Box::new(cx.listener(
                                    move |this, _: &ClickEvent, _window, cx| {
                                        this.select_row(idx, cx);
                                    },
                                )))
                                .on_comment_click(Box::new(cx.listener(
                                    move |this, _: &ClickEvent, _window, _cx| {
                                        this.open_comment(idx);
                                    },
                                )))
                                .on_comment_hover(Box::new(cx.listener(
                                    move |this, hovered: &bool, _window, cx| {
                                        this.set_comment_hover(idx, *hovered, cx);
                                    },
                                )));
                        if this.hovered_comment == Some(idx) {
                            if let Some(tooltip) =
                                this.state.tooltips().get(&comment_tooltip_id(idx))
                            {
                                item = item.tooltip(tooltip.text.clone(), tooltip.anchor);
                            }
                        }
                        items.push(div().h(px(item_height)).w_full().child(item));
                    }
                    items
                },
            ),
        )
        .flex_1()
        .w_full()
        .track_scroll(&self.scroll_handle)
    }
}

impl Drop for PalettesListBox {
    fn drop(&mut self) {
        // Stop accepting ready-events and release the loader; in-flight
        // work drains against a closed channel.
        if let Some(loader) = self.loader.take() {
            loader.stop();
        }
        debug!("Palettes list box dropped");
    }
}

impl Focusable for PalettesListBox {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for PalettesListBox {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = &self.theme.colors;
        let background = rgb(colors.background.main);

        let body = if self.state.is_empty() {
            self.render_empty_state().into_any_element()
        } else {
            self.render_rows(cx).into_any_element()
        };

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(background)
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                match event.keystroke.key.as_str() {
                    "up" => this.step(false, cx),
                    "down" => this.step(true, cx),
                    "enter" => {
                        // Re-asserting the current selection is a no-op by
                        // contract; subscribers stay quiet.
                        if let Some(index) = this.state.selected_index() {
                            this.select_row(index, cx);
                        }
                    }
                    _ => {}
                }
            }))
            .child(self.render_header())
            .child(body)
            .child(self.render_footer())
    }
}
