use crate::dom;
use crate::labels::LabelOverlay;
use crate::render;
use room_core::mesh::MeshData;
use room_core::{HoverChange, LoopHandle, RoomApp};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: Rc<RefCell<RoomApp>>,
    pub labels: Rc<LabelOverlay>,
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub translucent: MeshData,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let (outcome, placements) = {
            let mut app = self.app.borrow_mut();
            let outcome = app.frame();
            (outcome, app.label_placements())
        };
        if let Some(change) = outcome.hover {
            self.apply_hover(change);
        }
        self.labels.layout(&placements);

        if let Some(g) = &mut self.gpu {
            let app = self.app.borrow();
            g.set_camera(app.camera().view_projection(), &app.shell().lighting);
            self.translucent.clear();
            for part in app.translucent_parts() {
                self.translucent.push_part(&part);
            }
            g.set_translucent(&self.translucent);
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }

    fn apply_hover(&self, change: HoverChange) {
        if let Some(prev) = change.previous {
            self.labels.set_highlight(prev, false);
        }
        if let Some(cur) = change.current {
            self.labels.set_highlight(cur, true);
        }
        dom::set_cursor(&self.container, change.cursor.as_css());
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    background: [f32; 3],
    opaque: &MeshData,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, background, opaque).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Drive `frame_ctx` from requestAnimationFrame until `handle` is stopped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>, handle: &LoopHandle) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let handle_tick = handle.clone();
    let generation = handle.generation();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // A callback left pending across stop/resume belongs to the old loop.
        if handle_tick.generation() != generation || !handle_tick.tick() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        schedule(&tick_clone);
    }) as Box<dyn FnMut()>));
    schedule(&tick);
    log::info!("[loop] started");
}

fn schedule(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
