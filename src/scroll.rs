use crate::dom;
use site_core::scroll::{is_section_anchor, navbar_style, parallax_transforms, smooth_scroll_top};
use web_sys as web;

pub fn wire_navbar(window: &web::Window, document: &web::Document, threshold: f64) {
    let Some(navbar) = dom::query(document, ".navbar") else {
        return;
    };
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_| {
        let style = navbar_style(win.scroll_y().unwrap_or(0.0), threshold);
        dom::set_style(&navbar, "box-shadow", style.box_shadow);
        dom::set_style(&navbar, "background", style.background);
    });
}

/// In-page anchor links scroll smoothly, leaving room for the fixed header.
pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document, header_offset: f64) {
    for anchor in dom::query_all(document, r##"a[href^="#"]"##) {
        let a = anchor.clone();
        let win = window.clone();
        let doc = document.clone();
        dom::add_listener(&anchor, "click", move |ev| {
            let Some(href) = a.get_attribute("href") else {
                return;
            };
            if !is_section_anchor(&href) {
                return;
            }
            let Some(target) = dom::query(&doc, &href) else {
                return;
            };
            ev.prevent_default();
            let top = smooth_scroll_top(
                target.get_bounding_client_rect().top(),
                win.page_y_offset().unwrap_or(0.0),
                header_offset,
            );
            let opts = web::ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(web::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

pub fn wire_parallax(window: &web::Window, document: &web::Document) {
    let circle = dom::query(document, ".decoration-circle");
    let square = dom::query(document, ".decoration-square");
    let triangle = dom::query(document, ".decoration-triangle");
    if circle.is_none() && square.is_none() && triangle.is_none() {
        return;
    }
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_| {
        let t = parallax_transforms(win.page_y_offset().unwrap_or(0.0));
        for (el, transform) in [(&circle, &t.circle), (&square, &t.square), (&triangle, &t.triangle)] {
            if let Some(el) = el {
                dom::set_style(el, "transform", transform);
            }
        }
    });
}
