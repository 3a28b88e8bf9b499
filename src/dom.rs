use site_core::constants::StyleSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// All elements matching `selector`, in document order. A selector the
/// browser rejects yields nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] selector {:?} rejected: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

/// Attach `handler` for the page lifetime.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once the document has been parsed.
pub fn when_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    add_listener(document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn apply_style(el: &web::Element, styles: StyleSet) {
    for (property, value) in styles {
        set_style(el, property, value);
    }
}

/// Swap between two style sets on mouse enter/leave.
pub fn wire_hover(el: &web::Element, hover: StyleSet, rest: StyleSet) {
    let enter_el = el.clone();
    add_listener(el, "mouseenter", move |_| apply_style(&enter_el, hover));
    let leave_el = el.clone();
    add_listener(el, "mouseleave", move |_| apply_style(&leave_el, rest));
}
