use crate::dom;
use crate::observer;
use site_core::constants::{CARD_HOVER, CARD_REST, REVEAL_HIDDEN, REVEAL_SHOWN};
use site_core::ObserverConfig;
use web_sys as web;

const REVEAL_SELECTOR: &str = ".portfolio-item, .feature-item";

/// Hide cards and features until they scroll into view, then slide them up.
pub fn wire_reveal(window: &web::Window, document: &web::Document, config: &ObserverConfig) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }
    let shared = observer::create_observer::<web::Element>(window, config, "reveal");
    let mut observer = shared.borrow_mut();
    let count = targets.len();
    for el in targets {
        dom::apply_style(&el, REVEAL_HIDDEN);
        observer.register(el, |el: &web::Element| dom::apply_style(el, REVEAL_SHOWN));
    }
    log::info!("[reveal] watching {} elements", count);
}

pub fn wire_card_hover(document: &web::Document) {
    for card in dom::query_all(document, ".portfolio-item") {
        dom::wire_hover(&card, CARD_HOVER, CARD_REST);
    }
}
