use crate::dom;
use site_core::constants::{BODY_FADE_IN, FADE_IN_KEYFRAMES, MOBILE_CLASS, SLIDE_IN_UP_KEYFRAMES};
use site_core::device::is_mobile_user_agent;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Append the animation keyframes used by the filter and photo fade-in.
pub fn inject_keyframes(document: &web::Document) -> anyhow::Result<()> {
    let head = document
        .head()
        .ok_or_else(|| anyhow::anyhow!("document has no <head>"))?;
    for css in [SLIDE_IN_UP_KEYFRAMES, FADE_IN_KEYFRAMES] {
        let style = document
            .create_element("style")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

#[inline]
pub fn user_agent(window: &web::Window) -> String {
    window.navigator().user_agent().unwrap_or_default()
}

/// Tag `<body>` on phones and tablets.
pub fn tag_mobile(document: &web::Document, user_agent: &str) {
    if !is_mobile_user_agent(user_agent) {
        return;
    }
    if let Some(body) = document.body() {
        _ = body.class_list().add_1(MOBILE_CLASS);
    }
}

/// Fade the body in once every resource has loaded.
pub fn wire_preloader(window: &web::Window, document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    if document.ready_state() == "complete" {
        dom::apply_style(&body, BODY_FADE_IN);
        return;
    }
    dom::add_listener(window, "load", move |_| dom::apply_style(&body, BODY_FADE_IN));
}

/// Dark mode is not styled yet; the preference is only reported.
pub fn probe_dark_mode(window: &web::Window) -> bool {
    let prefers_dark = window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false);
    log::debug!("[page] prefers dark scheme: {}", prefers_dark);
    prefers_dark
}

pub fn register_service_worker(window: &web::Window, path: &str) {
    let navigator = window.navigator();
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false) {
        log::info!("[sw] service workers not supported");
        return;
    }
    let promise = navigator.service_worker().register(path);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => log::info!("[sw] registered"),
            Err(e) => log::warn!("[sw] service worker unavailable: {:?}", e),
        }
    });
}
