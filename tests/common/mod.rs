// Fakes shared by the host-side tests: a placeholder image and a host that
// records every observe/unobserve call.

#![allow(dead_code)]

use site_core::{Placeholder, VisibilityHost, WatchId};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct ImgState {
    pub name: String,
    pub pending: Option<String>,
    pub active: RefCell<Option<String>>,
    pub writes: Cell<u32>,
    pub loaded: Cell<u32>,
}

#[derive(Clone, Debug)]
pub struct Img(pub Rc<ImgState>);

impl Img {
    pub fn new(name: &str, pending: Option<&str>, active: Option<&str>) -> Self {
        Img(Rc::new(ImgState {
            name: name.to_string(),
            pending: pending.map(str::to_string),
            active: RefCell::new(active.map(str::to_string)),
            ..Default::default()
        }))
    }

    pub fn active(&self) -> Option<String> {
        self.0.active.borrow().clone()
    }

    pub fn writes(&self) -> u32 {
        self.0.writes.get()
    }

    pub fn loaded(&self) -> u32 {
        self.0.loaded.get()
    }
}

impl Placeholder for Img {
    fn pending_resource(&self) -> Option<String> {
        self.0.pending.clone()
    }

    fn active_resource(&self) -> Option<String> {
        self.active()
    }

    fn set_active_resource(&self, value: &str) {
        *self.0.active.borrow_mut() = Some(value.to_string());
        self.0.writes.set(self.0.writes.get() + 1);
    }

    fn mark_loaded(&self) {
        self.0.loaded.set(self.0.loaded.get() + 1);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostCall {
    Observe(WatchId, String),
    Unobserve(String),
}

#[derive(Clone, Default)]
pub struct RecordingHost {
    pub calls: Rc<RefCell<Vec<HostCall>>>,
}

impl RecordingHost {
    pub fn calls(&self) -> Vec<HostCall> {
        self.calls.borrow().clone()
    }

    pub fn unobserved(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                HostCall::Unobserve(name) => Some(name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl VisibilityHost<Img> for RecordingHost {
    fn observe(&self, id: WatchId, element: &Img) {
        self.calls
            .borrow_mut()
            .push(HostCall::Observe(id, element.0.name.clone()));
    }

    fn unobserve(&self, element: &Img) {
        self.calls
            .borrow_mut()
            .push(HostCall::Unobserve(element.0.name.clone()));
    }
}
