//! requestAnimationFrame loop driving the scene.

use app_core::{InputState, TunnelScene};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;

pub struct FrameContext {
    pub scene: TunnelScene,
    pub input: Rc<RefCell<InputState>>,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // One snapshot per tick; listener writes land between frames
        let input = *self.input.borrow();
        self.scene.advance(dt, &input);

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.set_group(self.scene.group_matrix());
            g.write_instances(self.scene.instance_matrices());
            if let Err(e) = g.render() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    instance_count: u32,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, instance_count).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Start the RAF loop. The loop reschedules itself until `running` is
/// cleared, after which no further frames are invoked. The closure knot
/// itself is leaked; it is created once per page load.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, running: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
