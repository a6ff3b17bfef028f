use dice_core::{Timer, TimerCallback, TimerError};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot callbacks on the browser event loop via `setTimeout`.
pub struct WindowTimer;

impl Timer for WindowTimer {
    fn schedule_once(&self, delay: Duration, callback: TimerCallback) -> Result<(), TimerError> {
        let window = web::window().ok_or(TimerError::NoScheduler)?;
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let closure = Closure::once_into_js(move || callback());
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), millis)
            .map_err(|e| TimerError::Rejected(format!("{:?}", e)))?;
        Ok(())
    }
}
