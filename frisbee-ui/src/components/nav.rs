//! Mobile navigation menu

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, Node};

use frisbee_live::ui::dom::{ACTIVE_CLASS, HAMBURGER_ID, NAV_LINKS_ID};
use frisbee_live::ui::{MenuClick, MenuState};

use crate::dom;

/// Wire the hamburger button, menu links and outside clicks
pub fn init_menu() {
    let (Some(hamburger), Some(nav_links)) = (dom::by_id(HAMBURGER_ID), dom::by_id(NAV_LINKS_ID))
    else {
        return;
    };

    let menu = Rc::new(RefCell::new(MenuState::new()));

    {
        let (menu, hamburger_el, nav) = (Rc::clone(&menu), hamburger.clone(), nav_links.clone());
        dom::listen(&hamburger, "click", move |_: MouseEvent| {
            let open = menu.borrow_mut().handle_click(MenuClick::Trigger);
            render(open, &hamburger_el, &nav);
        });
    }

    for link in dom::query_all(Some(&nav_links), "a") {
        let (menu, hamburger_el, nav) = (Rc::clone(&menu), hamburger.clone(), nav_links.clone());
        dom::listen(&link, "click", move |_: MouseEvent| {
            let open = menu.borrow_mut().handle_click(MenuClick::Link);
            render(open, &hamburger_el, &nav);
        });
    }

    let Some(document) = dom::document() else {
        return;
    };
    dom::listen(&document, "click", move |event: Event| {
        let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside = |el: &Element| target.as_ref().map(|t| el.contains(Some(t))).unwrap_or(false);

        if inside(&hamburger) || inside(&nav_links) {
            return;
        }
        let open = menu.borrow_mut().handle_click(MenuClick::Outside);
        render(open, &hamburger, &nav_links);
    });
}

fn render(open: bool, hamburger: &Element, nav_links: &Element) {
    for el in [hamburger, nav_links] {
        let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
    }
}
