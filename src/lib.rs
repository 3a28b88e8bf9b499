#![cfg(target_arch = "wasm32")]
use site_core::device::parallax_enabled;
use site_core::SiteConfig;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod counter;
mod dom;
mod filter;
mod lazy;
mod links;
mod menu;
mod observer;
mod page;
mod reveal;
mod scroll;

pub use counter::animate_counter;
pub use links::share_on_social;

/// Run one wiring step; a failing step is logged and the rest still run.
fn step(name: &str, f: impl FnOnce() -> anyhow::Result<()>) {
    if let Err(e) = f() {
        log::error!("[{}] {:?}", name, e);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("site-web starting");

    if let Err(e) = init(SiteConfig::default()) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init(config: SiteConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    step("styles", || page::inject_keyframes(&document));

    // Behaviors that only need the window or already-parsed markup.
    lazy::wire_lazy_images(&window, &document, &config.lazy_images);
    scroll::wire_navbar(&window, &document, config.navbar_scroll_threshold);
    scroll::wire_smooth_scroll(&window, &document, config.header_offset);
    reveal::wire_reveal(&window, &document, &config.reveal);
    reveal::wire_card_hover(&document);
    links::rewrite_whatsapp_links(&document, &config);
    links::wire_cta_tracking(&document);
    let user_agent = page::user_agent(&window);
    page::tag_mobile(&document, &user_agent);
    if parallax_enabled(&user_agent) {
        scroll::wire_parallax(&window, &document);
    } else {
        log::info!("[page] mobile device, parallax disabled");
    }
    page::wire_preloader(&window, &document);
    page::probe_dark_mode(&window);
    page::register_service_worker(&window, &config.service_worker_path);

    let doc = document.clone();
    dom::when_ready(&document, move || {
        step("menu", || menu::wire_menu(&doc));
        filter::wire_portfolio_filter(&doc);
        links::wire_instagram(&window, &doc, &config.instagram_url);
        lazy::wire_portfolio_photos(&window, &doc, &config.portfolio_photos);
    });

    log::info!("site-web ready");
    Ok(())
}
