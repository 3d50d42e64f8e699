use std::rc::Rc;

use landing::controller::ClickTarget;
use landing::PageError;
use leptos::prelude::window;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, KeyboardEvent, Node};

use super::effects::js_error;
use super::probe::DomProbe;
use super::Page;

/// Adds an event listener that lives as long as the page.
pub(super) fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), PageError> {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())
        .map_err(|e| js_error(&format!("addEventListener({event})"), e))?;
    cb.forget();
    Ok(())
}

pub(super) fn bind_all(page: &Rc<Page>) -> Result<(), PageError> {
    bind_navigation(page)?;
    bind_nav_links(page)?;
    bind_contact_form(page)?;
    bind_window(page)?;
    Ok(())
}

fn bind_navigation(page: &Rc<Page>) -> Result<(), PageError> {
    let els = &page.elements;

    let p = Rc::clone(page);
    listen(&els.toggle, "click", move |ev| {
        p.dispatch(Some(&ev), |c| c.on_toggle_click())
    })?;

    let p = Rc::clone(page);
    listen(&els.document, "click", move |ev| {
        let target = click_target(&p, &ev);
        p.dispatch(Some(&ev), |c| c.on_document_click(target))
    })?;

    let p = Rc::clone(page);
    listen(&els.document, "keydown", move |ev| {
        let Some(key) = ev.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        p.dispatch(Some(&ev), |c| c.on_key(&key))
    })?;

    Ok(())
}

fn bind_nav_links(page: &Rc<Page>) -> Result<(), PageError> {
    for link in &page.elements.nav_links {
        let p = Rc::clone(page);
        let anchor = link.clone();
        listen(link, "click", move |ev| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            let probe = DomProbe {
                document: &p.elements.document,
                navbar: &p.elements.navbar,
            };
            p.dispatch(Some(&ev), |c| c.on_nav_link_click(&href, &probe))
        })?;
    }
    Ok(())
}

fn bind_contact_form(page: &Rc<Page>) -> Result<(), PageError> {
    let Some(form) = &page.elements.form else {
        if let Some(unbound) = &page.elements.unbound_form {
            // Keep the browser from posting a half-wired form and navigating away.
            listen(unbound, "submit", |ev| {
                ev.prevent_default();
                warn!("contact form is missing fields; submission ignored");
            })?;
        } else {
            debug!("no contact form; skipping form bindings");
        }
        return Ok(());
    };

    let p = Rc::clone(page);
    listen(&form.form, "submit", move |ev| {
        let Some(form) = &p.elements.form else {
            return;
        };
        let input = form.read();
        p.dispatch(Some(&ev), |c| c.on_submit(&input))
    })?;

    if form.char_count.is_some() {
        let p = Rc::clone(page);
        listen(form.message.html(), "input", move |ev| {
            let Some(form) = &p.elements.form else {
                return;
            };
            let text = form.message.value();
            p.dispatch(Some(&ev), |c| c.on_message_input(&text))
        })?;
    }

    Ok(())
}

fn bind_window(page: &Rc<Page>) -> Result<(), PageError> {
    let win = window();

    let p = Rc::clone(page);
    let w = win.clone();
    listen(&win, "scroll", move |ev| {
        let offset = w.scroll_y().unwrap_or(0.0);
        p.dispatch(Some(&ev), |c| c.on_scroll(offset))
    })?;

    let p = Rc::clone(page);
    listen(&win, "pagehide", move |ev| {
        p.dispatch(Some(&ev), |c| c.on_page_hide())
    })?;

    Ok(())
}

fn click_target(page: &Page, ev: &Event) -> ClickTarget {
    let Some(node) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
        return ClickTarget::default();
    };
    ClickTarget {
        inside_menu: page.elements.menu.contains(Some(&node)),
        on_toggle: page.elements.toggle.contains(Some(&node)),
    }
}
