use std::rc::Rc;

use landing::form::Field;
use landing::nav::overflow_for;
use landing::{Effect, PageError};
use leptos::prelude::window;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions,
};

use super::elements::{query, query_all, ContactForm};
use super::Page;

pub(super) fn js_error(context: &str, v: JsValue) -> PageError {
    let message = v.as_string().unwrap_or_else(|| format!("{v:?}"));
    PageError::dom(context, message)
}

/// Applies effects in order. A failing effect is logged and skipped; the rest
/// still run.
pub(super) fn apply(page: &Rc<Page>, event: Option<&web_sys::Event>, effects: Vec<Effect>) {
    for effect in effects {
        if let Err(e) = apply_one(page, event, effect) {
            warn!("{e}");
        }
    }
}

fn apply_one(
    page: &Rc<Page>,
    event: Option<&web_sys::Event>,
    effect: Effect,
) -> Result<(), PageError> {
    let els = &page.elements;
    let cfg = &page.config;

    match effect {
        Effect::InjectStyle(css) => {
            let head = els
                .document
                .head()
                .ok_or_else(|| PageError::missing("head"))?;
            let style = els
                .document
                .create_element("style")
                .map_err(|e| js_error("createElement(style)", e))?;
            style.set_text_content(Some(&css));
            head.append_child(&style)
                .map_err(|e| js_error("head.appendChild", e))?;
        }
        Effect::SetNavOpen(open) => {
            set_class(&els.toggle, &cfg.classes.active, open)?;
            set_class(&els.menu, &cfg.classes.active, open)?;
            set_style(&els.body, "overflow", overflow_for(open))?;
        }
        Effect::PreventDefault => {
            if let Some(ev) = event {
                ev.prevent_default();
            }
        }
        Effect::ScrollTo { top } => {
            let opts = ScrollToOptions::new();
            opts.set_top(top);
            opts.set_behavior(ScrollBehavior::Smooth);
            window().scroll_to_with_scroll_to_options(&opts);
        }
        Effect::ClearFieldErrors => {
            for slot in query_all(&els.document, &cfg.selectors.error_slots)? {
                slot.set_text_content(Some(""));
            }
        }
        Effect::ShowFieldError { field, message } => {
            let selector = match field {
                Field::Name => &cfg.selectors.name_error,
                Field::Email => &cfg.selectors.email_error,
                Field::Message => &cfg.selectors.message_error,
            };
            match query(&els.document, selector)? {
                Some(slot) => slot.set_text_content(Some(&message)),
                None => debug!("no error slot {selector} for {}", field.label()),
            }
        }
        Effect::RevealField(field) => {
            let el = contact_form(page)?.field(field).html();
            let opts = ScrollIntoViewOptions::new();
            opts.set_behavior(ScrollBehavior::Smooth);
            opts.set_block(ScrollLogicalPosition::Center);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
            el.focus().map_err(|e| js_error("focus", e))?;
        }
        Effect::SetSubmitting(on) => {
            if let Some(button) = &contact_form(page)?.submit_button {
                set_class(button, &cfg.classes.loading, on)?;
            }
        }
        Effect::ScheduleCompletion { ticket, delay_ms } => {
            debug!("submission {} in flight ({delay_ms} ms)", ticket.id());
            if let Err(e) = super::timer::schedule(page, ticket, delay_ms) {
                page.dispatch(None, |c| c.abort_submission());
                return Err(e);
            }
        }
        Effect::CancelCompletion(ticket) => {
            debug!("submission {} cancelled", ticket.id());
            page.timers.borrow_mut().cancel(ticket);
        }
        Effect::Acknowledge(message) => {
            window()
                .alert_with_message(&message)
                .map_err(|e| js_error("alert", e))?;
        }
        Effect::ResetForm => contact_form(page)?.form.reset(),
        Effect::SetCounter { count, color } => {
            if let Some(counter) = &contact_form(page)?.char_count {
                counter.set_text_content(Some(&count.to_string()));
                set_style(counter, "color", &color)?;
            }
        }
        Effect::SetNavbarScrolled(on) => set_class(&els.navbar, &cfg.classes.scrolled, on)?,
        Effect::SetNavbarTransform(transform) => set_style(&els.navbar, "transform", transform)?,
    }
    Ok(())
}

fn contact_form(page: &Page) -> Result<&ContactForm, PageError> {
    page.elements
        .form
        .as_ref()
        .ok_or_else(|| PageError::missing(page.config.selectors.form.clone()))
}

fn set_class(el: &Element, class: &str, on: bool) -> Result<(), PageError> {
    el.class_list()
        .toggle_with_force(class, on)
        .map(|_| ())
        .map_err(|e| js_error("classList.toggle", e))
}

/// An empty value removes the inline property.
fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), PageError> {
    el.style()
        .set_property(property, value)
        .map_err(|e| js_error("style.setProperty", e))
}
