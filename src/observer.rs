//! `IntersectionObserver` backing for [`site_core::VisibilityObserver`].

use site_core::constants::WATCH_ID_PREFIX;
use site_core::{ObserverConfig, VisibilityEntry, VisibilityHost, VisibilityObserver, WatchId};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Anything the browser observer can watch.
pub trait HasElement {
    fn element(&self) -> &web::Element;
}

impl HasElement for web::Element {
    fn element(&self) -> &web::Element {
        self
    }
}

pub type SharedObserver<E> = Rc<RefCell<VisibilityObserver<E, IntersectionHost>>>;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

pub struct IntersectionHost {
    observer: web::IntersectionObserver,
    // Attribute carrying the WatchId; one per observer so ids never collide.
    id_attr: String,
    _callback: EntriesCallback,
}

impl<E: HasElement> VisibilityHost<E> for IntersectionHost {
    fn observe(&self, id: WatchId, element: &E) {
        let el = element.element();
        _ = el.set_attribute(&self.id_attr, &id.to_string());
        self.observer.observe(el);
    }

    fn unobserve(&self, element: &E) {
        self.observer.unobserve(element.element());
    }
}

impl IntersectionHost {
    fn new<E: HasElement + 'static>(
        config: &ObserverConfig,
        label: &'static str,
        shared: Weak<RefCell<VisibilityObserver<E, IntersectionHost>>>,
    ) -> anyhow::Result<Self> {
        let id_attr = format!("{}{}", WATCH_ID_PREFIX, label);
        let attr = id_attr.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _io: web::IntersectionObserver| {
                let Some(shared) = shared.upgrade() else {
                    return;
                };
                let batch: Vec<VisibilityEntry> = entries
                    .iter()
                    .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let id = entry
                            .target()
                            .get_attribute(&attr)
                            .and_then(|raw| WatchId::parse(&raw))?;
                        Some(VisibilityEntry {
                            id,
                            is_intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect();
                let resolved = shared.borrow_mut().dispatch(batch);
                if resolved > 0 {
                    log::debug!("[{}] resolved {} element(s)", label, resolved);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(config.threshold));
        init.set_root_margin(&config.root_margin.to_string());
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            observer,
            id_attr,
            _callback: callback,
        })
    }
}

#[inline]
pub fn intersection_supported(window: &web::Window) -> bool {
    js_sys::Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

/// Build the page-lifetime observer for one group of elements. Without
/// `IntersectionObserver` support the observer resolves eagerly.
pub fn create_observer<E: HasElement + 'static>(
    window: &web::Window,
    config: &ObserverConfig,
    label: &'static str,
) -> SharedObserver<E> {
    let supported = intersection_supported(window);
    let shared = Rc::new_cyclic(|weak| {
        let host = if supported {
            match IntersectionHost::new(config, label, weak.clone()) {
                Ok(host) => Some(host),
                Err(e) => {
                    log::error!("[{}] IntersectionObserver error: {:?}", label, e);
                    None
                }
            }
        } else {
            None
        };
        RefCell::new(VisibilityObserver::new(host))
    });
    if shared.borrow().is_eager() {
        log::warn!("[{}] visibility detection unavailable, loading eagerly", label);
    }
    // Never released: the browser callback only holds a weak handle.
    std::mem::forget(shared.clone());
    shared
}
