use crate::app::App;
use crate::render::{self, RenderState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<App>,
    pub last: Option<RenderState>,
}

impl FrameContext {
    /// Push state into the DOM, but only when something changed since the last frame.
    pub fn frame(&mut self) {
        let state = self.app.render_state();
        if self.last == Some(state) {
            return;
        }
        render::apply(&self.app.document, &state);
        if self.last.map(|l| l.view) != Some(state.view) {
            log::debug!("[frame] {:?}", state.view);
        }
        self.last = Some(state);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
