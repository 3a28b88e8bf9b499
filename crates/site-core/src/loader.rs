//! Visibility-triggered resource loading.
//!
//! A placeholder carries a deferred resource (`data-src`) and an active one
//! (`src`). When the placeholder first becomes visible the deferred value is
//! copied over and the element is flagged as loaded.

use crate::observer::{VisibilityHost, VisibilityObserver, WatchId};

/// Element whose real resource is deferred until it is visible.
///
/// Setters take `&self`: DOM handles are shared references with interior
/// mutability on the host side.
pub trait Placeholder {
    fn pending_resource(&self) -> Option<String>;
    fn active_resource(&self) -> Option<String>;
    fn set_active_resource(&self, value: &str);
    /// Styling/animation hook, run once per resolution.
    fn mark_loaded(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ResolvePolicy {
    /// Copy the pending value whenever one is present.
    #[default]
    Replace,
    /// Copy only if the active slot is still empty.
    FillEmpty,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Loaded(String),
    AlreadyCurrent,
    MissingPending,
    KeptExisting,
}

impl Resolution {
    #[inline]
    pub fn changed(&self) -> bool {
        matches!(self, Resolution::Loaded(_))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Apply the one-time resolution step to `element`.
///
/// An absent or empty pending value leaves the active resource untouched.
pub fn resolve<P: Placeholder + ?Sized>(element: &P, policy: ResolvePolicy) -> Resolution {
    let outcome = match non_empty(element.pending_resource()) {
        None => Resolution::MissingPending,
        Some(pending) => {
            let active = non_empty(element.active_resource());
            match (policy, active) {
                (ResolvePolicy::FillEmpty, Some(_)) => Resolution::KeptExisting,
                (_, Some(active)) if active == pending => Resolution::AlreadyCurrent,
                _ => {
                    element.set_active_resource(&pending);
                    Resolution::Loaded(pending)
                }
            }
        }
    };
    element.mark_loaded();
    outcome
}

/// Registration pass: subscribe every placeholder to `observer`.
///
/// In eager mode the placeholders resolve before this returns.
pub fn register_placeholders<E, H, I>(
    observer: &mut VisibilityObserver<E, H>,
    elements: I,
    policy: ResolvePolicy,
) -> Vec<WatchId>
where
    E: Placeholder + 'static,
    H: VisibilityHost<E>,
    I: IntoIterator<Item = E>,
{
    let ids: Vec<WatchId> = elements
        .into_iter()
        .map(|element| {
            observer.register(element, move |el: &E| {
                let outcome = resolve(el, policy);
                log::debug!("[lazy] resolved {:?}", outcome);
            })
        })
        .collect();
    log::info!(
        "[lazy] registered {} placeholders (eager={})",
        ids.len(),
        observer.is_eager()
    );
    ids
}
