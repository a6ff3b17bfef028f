#![cfg(target_arch = "wasm32")]
use dice_core::{
    AnimationController, CapabilityStore, ControllerParams, KeyValueStore, MemoryStore,
    ToneSynthesizer, UniformSource,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod modal;
mod render;
mod storage;
mod timer;
mod view;

fn open_backing_store() -> Box<dyn KeyValueStore> {
    match storage::LocalStorage::open() {
        Some(s) => Box::new(s),
        None => {
            log::warn!("[init] localStorage unavailable, purchases last for this page only");
            Box::new(MemoryStore::new())
        }
    }
}

fn wire_pagehide(app: &Rc<app::App>) {
    let Some(window) = web::window() else {
        return;
    };
    let app = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        // A page kept in the back/forward cache comes back with this same state.
        if ev.persisted() {
            log::debug!("[init] page cached, keeping audio and controller");
            return;
        }
        app.shutdown();
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dice-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let store = Rc::new(CapabilityStore::load(open_backing_store()));
    let synth = Rc::new(ToneSynthesizer::new(
        store.clone(),
        audio::WebAudioBackend::factory(),
    ));
    let controller = AnimationController::new(
        ControllerParams::default(),
        Box::new(UniformSource::from_entropy()),
        synth,
        Rc::new(timer::WindowTimer),
    );
    let app = Rc::new(app::App {
        controller,
        store,
        document: document.clone(),
    });

    modal::close(&document);
    events::buttons::wire_buttons(&document, &app);
    events::keyboard::wire_global_keydown(app.clone());
    wire_pagehide(&app);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext { app, last: None }));
    frame::start_loop(frame_ctx);
    log::info!("[init] ready");
    Ok(())
}
