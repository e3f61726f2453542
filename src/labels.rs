//! Screen-space overlay for the floating item labels.
//!
//! Labels live in an absolutely positioned layer stacked over the canvas and
//! are moved every frame to the projection of their item's anchor point.

use crate::constants::{LABEL_CLASS, LABEL_HOVER_CLASS};
use crate::dom;
use room_core::{ItemId, LabelPlacement, Registry};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct LabelOverlay {
    root: web::HtmlElement,
    labels: Vec<web::HtmlElement>,
}

fn create_div(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

impl LabelOverlay {
    /// Create the overlay layer inside `container` with one label per item,
    /// in registration order.
    pub fn mount(
        document: &web::Document,
        container: &web::HtmlElement,
        registry: &Registry,
    ) -> anyhow::Result<Self> {
        let root = create_div(document)?;
        let style = root.style();
        _ = style.set_property("position", "absolute");
        _ = style.set_property("inset", "0");
        _ = style.set_property("pointer-events", "none");
        _ = style.set_property("overflow", "hidden");

        let mut labels = Vec::with_capacity(registry.len());
        for (_, item) in registry.iter() {
            let el = create_div(document)?;
            el.set_class_name(LABEL_CLASS);
            el.set_text_content(Some(&item.label));
            _ = el.style().set_property("position", "absolute");
            _ = el.style().set_property("left", "0");
            _ = el.style().set_property("top", "0");
            _ = root.append_child(&el);
            labels.push(el);
        }
        container
            .append_child(&root)
            .map_err(|e| anyhow::anyhow!("append overlay: {:?}", e))?;
        Ok(Self { root, labels })
    }

    pub fn resize(&self, width: f32, height: f32) {
        let style = self.root.style();
        _ = style.set_property("width", &format!("{width}px"));
        _ = style.set_property("height", &format!("{height}px"));
    }

    pub fn set_highlight(&self, item: ItemId, on: bool) {
        if let Some(el) = self.labels.get(item.index()) {
            let cl = el.class_list();
            if on {
                _ = cl.add_1(LABEL_HOVER_CLASS);
            } else {
                _ = cl.remove_1(LABEL_HOVER_CLASS);
            }
        }
    }

    /// Position labels; nearer labels stack above farther ones.
    pub fn layout(&self, placements: &[LabelPlacement]) {
        let mut order: Vec<&LabelPlacement> = placements.iter().collect();
        order.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        for (z, p) in order.into_iter().enumerate() {
            let Some(el) = self.labels.get(p.item.index()) else {
                continue;
            };
            match p.screen {
                Some(px) => {
                    dom::set_display(el, "");
                    let style = el.style();
                    _ = style.set_property(
                        "transform",
                        &format!(
                            "translate(-50%, -50%) translate({:.1}px, {:.1}px)",
                            px.x, px.y
                        ),
                    );
                    _ = style.set_property("z-index", &z.to_string());
                }
                None => dom::set_display(el, "none"),
            }
        }
    }
}
