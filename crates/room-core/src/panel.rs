//! Info panel state machine: CLOSED (initial) and OPEN.
//!
//! A click opens the panel for the hovered item and a click with nothing
//! hovered does nothing. Only an explicit close returns to CLOSED.

use crate::registry::{ItemId, PanelContent, Registry};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoPanel {
    open: bool,
    shown: Option<ItemId>,
    content: Option<PanelContent>,
}

impl InfoPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Content most recently displayed. Kept after close so the DOM does not
    /// flash empty while the panel animates out.
    pub fn content(&self) -> Option<&PanelContent> {
        self.content.as_ref()
    }

    pub fn shown_item(&self) -> Option<ItemId> {
        self.shown
    }

    /// Handle a click on the scene. Returns the content to display when the
    /// panel was (re)opened.
    pub fn click(&mut self, hovered: Option<ItemId>, registry: &Registry) -> Option<&PanelContent> {
        let item = registry.get(hovered?)?;
        self.content = Some(item.panel_content());
        self.shown = hovered;
        self.open = true;
        log::debug!("[panel] open {}", item.key);
        self.content.as_ref()
    }

    /// Returns `true` when the panel was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.shown = None;
        if was_open {
            log::debug!("[panel] close");
        }
        was_open
    }

    /// Value for the panel's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }

    /// Whether the panel subtree should carry `inert`.
    pub fn is_inert(&self) -> bool {
        !self.open
    }
}
