use crate::dom;
use site_core::constants::ACTIVE_CLASS;
use site_core::PortfolioFilter;
use std::rc::Rc;
use web_sys as web;

pub fn wire_portfolio_filter(document: &web::Document) {
    let buttons = Rc::new(dom::query_all(document, ".filter-btn"));
    let items = Rc::new(dom::query_all(document, ".portfolio-item"));
    for button in buttons.iter() {
        let this = button.clone();
        let buttons = buttons.clone();
        let items = items.clone();
        dom::add_listener(button, "click", move |_| {
            let filter = PortfolioFilter::from_attr(this.get_attribute("data-filter").as_deref());
            for b in buttons.iter() {
                _ = b.class_list().remove_1(ACTIVE_CLASS);
            }
            _ = this.class_list().add_1(ACTIVE_CLASS);
            for item in items.iter() {
                let category = item.get_attribute("data-category");
                dom::apply_style(item, filter.item_style(category.as_deref()));
            }
            log::debug!("[filter] {:?}", filter);
        });
    }
}
