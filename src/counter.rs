use site_core::constants::{COUNTER_DEFAULT_DURATION_MS, COUNTER_TICK_MS};
use site_core::CounterAnimation;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Count `element`'s text up from 0 to `target` over `duration` ms (2000 by default).
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(
    element: web::Element,
    target: f64,
    duration: Option<f64>,
) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let mut animation =
        CounterAnimation::new(target, duration.unwrap_or(COUNTER_DEFAULT_DURATION_MS));
    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let handle_tick = handle.clone();
    let win_tick = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let frame = animation.tick();
        element.set_text_content(Some(&frame.text));
        if frame.finished {
            if let Some(id) = handle_tick.take() {
                win_tick.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);

    let id = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        COUNTER_TICK_MS,
    )?;
    handle.set(Some(id));
    closure.forget();
    Ok(())
}
