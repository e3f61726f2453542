/// Host document element ids and presentation constants.
///
/// The ids form the contract with `index.html`; everything else keeps magic
/// strings and numbers out of the wiring code.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostIds {
    pub container: &'static str,
    pub panel: &'static str,
    pub panel_title: &'static str,
    pub panel_text: &'static str,
    pub panel_link: &'static str,
    pub panel_close: &'static str,
}

impl Default for HostIds {
    fn default() -> Self {
        Self {
            container: "canvas-wrap",
            panel: "info",
            panel_title: "info-title",
            panel_text: "info-text",
            panel_link: "info-link",
            panel_close: "info-close",
        }
    }
}

// Floating label classes
pub const LABEL_CLASS: &str = "label";
pub const LABEL_HOVER_CLASS: &str = "is-hover";

// Panel link display values
pub const LINK_VISIBLE_DISPLAY: &str = "inline-block";

// Key that closes the info panel
pub const CLOSE_KEY: &str = "Escape";

// Render targets
pub const MSAA_SAMPLES: u32 = 4;
