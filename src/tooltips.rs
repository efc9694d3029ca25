//! Tooltip registrations for list-row affordances.
//!
//! Rows register a tooltip once at construction; the panel looks the text
//! up at render time and draws it beside the hovered control. The registry
//! is plain UI-thread state.

use std::collections::HashMap;

/// Which side of the registered control the tooltip appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    pub text: String,
    pub anchor: AnchorSide,
}

#[derive(Debug, Default)]
pub struct TooltipRegistry {
    entries: HashMap<String, Tooltip>,
}

impl TooltipRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register tooltip `text` for the control identified by `id`,
    /// displayed on the given `anchor` side.
    pub fn register(&mut self, id: impl Into<String>, text: impl Into<String>, anchor: AnchorSide) {
        self.entries.insert(
            id.into(),
            Tooltip {
                text: text.into(),
                anchor,
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&Tooltip> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
