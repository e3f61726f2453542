#![cfg(target_arch = "wasm32")]
use constants::HostIds;
use room_core::mesh::MeshData;
use room_core::{AppConfig, LoopHandle, RoomApp, Viewport};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod panel;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("room-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    _ = canvas.style().set_property("display", "block");
    _ = canvas.style().set_property("touch-action", "none");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    Ok(canvas)
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let ids = HostIds::default();

    // Without the container there is nothing to draw into.
    let container: web::HtmlElement = dom::element_by_id(&document, ids.container)?;
    let panel_view = panel::PanelView::from_document(&document, &ids)?;
    let canvas = create_canvas(&document, &container)?;

    let (width, height) = dom::container_size(&container);
    let app = Rc::new(RefCell::new(RoomApp::new(
        AppConfig::default(),
        Viewport::new(width, height),
    )));
    log::info!("[registry] {} interactive items", app.borrow().registry().len());

    let labels = Rc::new(labels::LabelOverlay::mount(
        &document,
        &container,
        app.borrow().registry(),
    )?);

    let resize_targets = events::ResizeTargets {
        app: app.clone(),
        container: container.clone(),
        canvas: canvas.clone(),
        labels: labels.clone(),
    };
    events::apply_resize(&resize_targets);
    events::wire_resize(resize_targets);

    panel_view.render(app.borrow().panel());
    events::wire_input_handlers(events::InputWiring {
        app: app.clone(),
        container: container.clone(),
        canvas: canvas.clone(),
        panel: panel_view.clone(),
    });
    events::wire_close_key(app.clone(), panel_view);

    // No RefCell borrow may be held across the await; input handlers are live.
    let (background, opaque) = {
        let app = app.borrow();
        (
            app.shell().background,
            MeshData::from_parts(app.opaque_parts().iter()),
        )
    };
    let gpu = frame::init_gpu(&canvas, background, &opaque).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        labels,
        container,
        canvas,
        gpu,
        translucent: Default::default(),
    }));
    let handle = LoopHandle::new();
    frame::start_loop(frame_ctx.clone(), &handle);
    events::wire_page_lifecycle(frame_ctx, handle);
    Ok(())
}
