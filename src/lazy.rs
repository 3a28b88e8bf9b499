use crate::dom;
use crate::observer::{self, HasElement};
use site_core::constants::{ACTIVE_ATTR, LOADED_CLASS, PENDING_ATTR, PHOTO_FADE_IN};
use site_core::{register_placeholders, ObserverConfig, Placeholder, ResolvePolicy};
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub enum LoadedHook {
    /// Add the `loaded` class right away.
    Class,
    /// Fade the image in once the browser finishes fetching it.
    FadeInOnLoad,
}

/// `<img>` whose `src` is deferred in `data-src`.
pub struct LazyImage {
    el: web::Element,
    hook: LoadedHook,
}

impl LazyImage {
    pub fn new(el: web::Element, hook: LoadedHook) -> Self {
        Self { el, hook }
    }
}

impl HasElement for LazyImage {
    fn element(&self) -> &web::Element {
        &self.el
    }
}

impl Placeholder for LazyImage {
    fn pending_resource(&self) -> Option<String> {
        self.el.get_attribute(PENDING_ATTR)
    }

    fn active_resource(&self) -> Option<String> {
        self.el.get_attribute(ACTIVE_ATTR)
    }

    fn set_active_resource(&self, value: &str) {
        _ = self.el.set_attribute(ACTIVE_ATTR, value);
    }

    fn mark_loaded(&self) {
        match self.hook {
            LoadedHook::Class => {
                _ = self.el.class_list().add_1(LOADED_CLASS);
            }
            LoadedHook::FadeInOnLoad => {
                let el = self.el.clone();
                dom::add_listener(&self.el, "load", move |_| {
                    dom::apply_style(&el, PHOTO_FADE_IN);
                });
            }
        }
    }
}

fn wire_group(
    window: &web::Window,
    document: &web::Document,
    selector: &str,
    config: &ObserverConfig,
    hook: LoadedHook,
    policy: ResolvePolicy,
    label: &'static str,
) {
    let images: Vec<LazyImage> = dom::query_all(document, selector)
        .into_iter()
        .map(|el| LazyImage::new(el, hook))
        .collect();
    if images.is_empty() {
        return;
    }
    let shared = observer::create_observer::<LazyImage>(window, config, label);
    let mut observer = shared.borrow_mut();
    register_placeholders(&mut observer, images, policy);
}

/// Every `img[data-src]`: swap the source in and tag it `loaded`.
pub fn wire_lazy_images(window: &web::Window, document: &web::Document, config: &ObserverConfig) {
    wire_group(
        window,
        document,
        "img[data-src]",
        config,
        LoadedHook::Class,
        ResolvePolicy::Replace,
        "lazy",
    );
}

/// Portfolio photos prefetch ahead of the viewport and keep any source
/// that is already set.
pub fn wire_portfolio_photos(
    window: &web::Window,
    document: &web::Document,
    config: &ObserverConfig,
) {
    wire_group(
        window,
        document,
        ".portfolio-photo",
        config,
        LoadedHook::FadeInOnLoad,
        ResolvePolicy::FillEmpty,
        "photos",
    );
}
