use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Storage, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Current wall-clock time in whole milliseconds since the Unix epoch.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Owning guard for a recurring browser interval. Dropping the guard clears
/// the interval, so replacing it on "new game" is the cancellation and a
/// duplicate tick can never be left running.
pub struct IntervalHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        window().clear_interval_with_handle(self.id);
    }
}

/// Schedule `callback` to run every `period_ms` milliseconds.
///
/// # Errors
/// Returns an error when the browser refuses to schedule the interval.
pub fn set_interval(
    period_ms: i32,
    callback: impl FnMut() + 'static,
) -> Result<IntervalHandle, JsValue> {
    let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
    let id = window().set_interval_with_callback_and_timeout_and_arguments_0(
        callback.as_ref().unchecked_ref(),
        period_ms,
    )?;
    Ok(IntervalHandle {
        id,
        _callback: callback,
    })
}
