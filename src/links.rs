use crate::dom;
use site_core::constants::{PHONE_HOVER, PHONE_REST, SHARE_WINDOW_FEATURES, STORY_HOVER, STORY_REST};
use site_core::share::{is_whatsapp_link, share_url, whatsapp_chat_url};
use site_core::{SharePlatform, SiteConfig};
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Point the floating button and the large CTA at the chat link.
pub fn rewrite_whatsapp_links(document: &web::Document, config: &SiteConfig) {
    let url = whatsapp_chat_url(&config.whatsapp_number, &config.whatsapp_message);
    let mut rewritten = 0;
    for link in dom::query_all(document, ".whatsapp-float, .cta-button-large") {
        let is_whatsapp = link
            .get_attribute("href")
            .map(|href| is_whatsapp_link(&href))
            .unwrap_or(false);
        if is_whatsapp && link.set_attribute("href", &url).is_ok() {
            rewritten += 1;
        }
    }
    log::debug!("[links] rewrote {} WhatsApp link(s)", rewritten);
}

pub fn wire_cta_tracking(document: &web::Document) {
    for button in dom::query_all(document, ".cta-button, .cta-button-large, .whatsapp-float") {
        let b = button.clone();
        dom::add_listener(&button, "click", move |_| {
            log::info!("[cta] clicked: {}", b.text_content().unwrap_or_default().trim());
        });
    }
    if let Some(button) = dom::query(document, ".instagram-button") {
        dom::add_listener(&button, "click", |_| {
            log::info!("[cta] Instagram button clicked");
        });
    }
}

/// Stories open the profile; stories and the phone mock-up react to hover.
pub fn wire_instagram(window: &web::Window, document: &web::Document, profile_url: &str) {
    for story in dom::query_all(document, ".instagram-story") {
        let win = window.clone();
        let url = profile_url.to_string();
        dom::add_listener(&story, "click", move |_| {
            if let Err(e) = win.open_with_url_and_target(&url, "_blank") {
                log::warn!("[instagram] open failed: {:?}", e);
            }
        });
        dom::wire_hover(&story, STORY_HOVER, STORY_REST);
    }
    if let Some(phone) = dom::query(document, ".instagram-phone") {
        dom::wire_hover(&phone, PHONE_HOVER, PHONE_REST);
    }
}

/// Open a share window for the current page. Unknown platforms are ignored.
#[wasm_bindgen(js_name = shareOnSocial)]
pub fn share_on_social(platform: &str) -> Result<(), JsValue> {
    let platform = match platform.parse::<SharePlatform>() {
        Ok(p) => p,
        Err(e) => {
            log::warn!("[share] {}", e);
            return Ok(());
        }
    };
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let page_url = window.location().href()?;
    let url = share_url(platform, &page_url, &SiteConfig::default().share_title);
    window.open_with_url_and_target_and_features(&url, "_blank", SHARE_WINDOW_FEATURES)?;
    log::info!("[share] opened {}", platform);
    Ok(())
}
