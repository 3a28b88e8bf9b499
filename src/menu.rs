use crate::dom;
use site_core::constants::ACTIVE_CLASS;
use site_core::MenuState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
struct MenuWiring {
    hamburger: web::Element,
    nav_menu: web::Element,
    state: Rc<RefCell<MenuState>>,
}

impl MenuWiring {
    fn render(&self) {
        let open = self.state.borrow().open;
        for el in [&self.hamburger, &self.nav_menu] {
            _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
        }
    }

    fn close(&self) {
        self.state.borrow_mut().close();
        self.render();
    }
}

/// Hamburger toggle; closes on nav-link clicks and on clicks elsewhere.
pub fn wire_menu(document: &web::Document) -> anyhow::Result<()> {
    let hamburger =
        dom::query(document, ".hamburger").ok_or_else(|| anyhow::anyhow!("missing .hamburger"))?;
    let nav_menu =
        dom::query(document, ".nav-menu").ok_or_else(|| anyhow::anyhow!("missing .nav-menu"))?;
    let w = MenuWiring {
        hamburger,
        nav_menu,
        state: Rc::new(RefCell::new(MenuState::default())),
    };

    {
        let hamburger = w.hamburger.clone();
        let w = w.clone();
        dom::add_listener(&hamburger, "click", move |_| {
            let open = w.state.borrow_mut().toggle();
            w.render();
            log::debug!("[menu] open={}", open);
        });
    }

    for link in dom::query_all(document, ".nav-link") {
        let w = w.clone();
        dom::add_listener(&link, "click", move |_| w.close());
    }

    dom::add_listener(document, "click", move |ev| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Node>().ok());
        let inside_menu = w.nav_menu.contains(target.as_ref());
        let on_hamburger = w.hamburger.contains(target.as_ref());
        if w.state.borrow().closes_on_click(inside_menu, on_hamburger) {
            w.close();
        }
    });
    Ok(())
}
