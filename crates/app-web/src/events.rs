//! Passive scroll / resize / pointermove listeners feeding [`InputState`].
//!
//! The listeners only overwrite scalars, so no queueing or ordering is
//! needed; the frame loop reads whatever was written last. Unlike fire-and-
//! forget closures, every registration is held in an [`InputListeners`]
//! guard so teardown removes the handlers again.

use app_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

type EventClosure = Closure<dyn FnMut(web::Event)>;

/// Owns the registered event listeners. `detach` removes them all and is
/// idempotent; dropping the guard detaches as well.
pub struct InputListeners {
    entries: Vec<(web::EventTarget, &'static str, EventClosure)>,
}

impl InputListeners {
    fn attach(&mut self, target: &web::EventTarget, name: &'static str, closure: EventClosure) {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        _ = target.add_event_listener_with_callback_and_add_event_listener_options(
            name,
            closure.as_ref().unchecked_ref(),
            &opts,
        );
        self.entries.push((target.clone(), name, closure));
    }

    pub fn detach(&mut self) {
        for (target, name, closure) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for InputListeners {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Seed the input state from the live window and register the listeners.
pub fn wire_input_listeners(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    input: Rc<RefCell<InputState>>,
) -> InputListeners {
    {
        let mut st = input.borrow_mut();
        let (w, h) = dom::viewport_size(window);
        st.set_viewport(w, h);
        st.set_scroll(window.scroll_y().unwrap_or(0.0) as f32);
    }

    let mut listeners = InputListeners {
        entries: Vec::new(),
    };
    let target: &web::EventTarget = window.as_ref();

    {
        let window = window.clone();
        let input = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            input
                .borrow_mut()
                .set_scroll(window.scroll_y().unwrap_or(0.0) as f32);
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(target, "scroll", closure);
    }

    {
        let window = window.clone();
        let canvas = canvas.clone();
        let input = input.clone();
        let closure = Closure::wrap(Box::new(move |_: web::Event| {
            let (w, h) = dom::viewport_size(&window);
            input.borrow_mut().set_viewport(w, h);
            dom::sync_canvas_backing_size(&canvas);
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(target, "resize", closure);
    }

    {
        let input = input.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                input
                    .borrow_mut()
                    .set_pointer_from_client(ev.client_x() as f32, ev.client_y() as f32);
            }
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(target, "pointermove", closure);
    }

    listeners
}
