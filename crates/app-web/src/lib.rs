#![cfg(target_arch = "wasm32")]
//! WASM entry point: canvas acquisition, listener wiring, frame loop.

use app_core::{InputState, SceneConfig, TunnelScene};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;
mod render;

const SCENE_SEED: u64 = 42;

struct App {
    running: Rc<Cell<bool>>,
    listeners: events::InputListeners,
}

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("background scene starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let input = Rc::new(RefCell::new(InputState::default()));
    let listeners = events::wire_input_listeners(&window, &canvas, input.clone());

    let scene = TunnelScene::new(SceneConfig::default(), SCENE_SEED);
    let gpu = frame::init_gpu(&canvas, scene.config().count as u32).await;

    let running = Rc::new(Cell::new(true));
    APP.with(|a| {
        *a.borrow_mut() = Some(App {
            running: running.clone(),
            listeners,
        })
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        input,
        canvas,
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx, running);

    Ok(())
}

/// Stop the frame loop and remove all event listeners. Safe to call more
/// than once; subsequent calls are no-ops.
#[wasm_bindgen]
pub fn shutdown() {
    if let Some(app) = APP.with(|a| a.borrow_mut().take()) {
        app.running.set(false);
        let mut listeners = app.listeners;
        listeners.detach();
        log::info!("background scene stopped");
    }
}
