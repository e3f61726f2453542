use crate::constants::{HostIds, LINK_VISIBLE_DISPLAY};
use crate::dom;
use room_core::{InfoPanel, PanelContent, SetupError};
use web_sys as web;

/// DOM side of the info panel. Mirrors `InfoPanel` into the host elements.
#[derive(Clone)]
pub struct PanelView {
    root: web::HtmlElement,
    title: web::HtmlElement,
    text: web::HtmlElement,
    link: web::HtmlAnchorElement,
    close: web::HtmlElement,
}

impl PanelView {
    pub fn from_document(document: &web::Document, ids: &HostIds) -> Result<Self, SetupError> {
        Ok(Self {
            root: dom::element_by_id(document, ids.panel)?,
            title: dom::element_by_id(document, ids.panel_title)?,
            text: dom::element_by_id(document, ids.panel_text)?,
            link: dom::element_by_id(document, ids.panel_link)?,
            close: dom::element_by_id(document, ids.panel_close)?,
        })
    }

    pub fn close_control(&self) -> &web::HtmlElement {
        &self.close
    }

    /// Bring the DOM in line with `panel`.
    pub fn render(&self, panel: &InfoPanel) {
        if panel.is_open() {
            if let Some(content) = panel.content() {
                self.show_content(content);
            }
        }
        _ = self.root.set_attribute("aria-hidden", panel.aria_hidden());
        if panel.is_inert() {
            _ = self.root.set_attribute("inert", "");
        } else {
            _ = self.root.remove_attribute("inert");
        }
    }

    fn show_content(&self, content: &PanelContent) {
        self.title.set_text_content(Some(&content.title));
        self.text.set_text_content(Some(&content.text));
        match &content.link {
            Some(href) => {
                self.link.set_href(href);
                dom::set_display(&self.link, LINK_VISIBLE_DISPLAY);
            }
            None => {
                _ = self.link.remove_attribute("href");
                dom::set_display(&self.link, "none");
            }
        }
    }
}
