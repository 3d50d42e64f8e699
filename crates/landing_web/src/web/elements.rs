use landing::form::{Field, FormInput};
use landing::{PageConfig, PageError};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement,
};

/// Handles to every element the page behavior touches, resolved once at
/// startup.
pub(super) struct PageElements {
    pub(super) document: Document,
    pub(super) body: HtmlElement,
    pub(super) toggle: HtmlElement,
    pub(super) menu: HtmlElement,
    pub(super) navbar: HtmlElement,
    pub(super) nav_links: Vec<Element>,
    pub(super) form: Option<ContactForm>,
    /// A form that is present but missing fields. Only its default submission
    /// is suppressed.
    pub(super) unbound_form: Option<HtmlFormElement>,
}

pub(super) struct ContactForm {
    pub(super) form: HtmlFormElement,
    pub(super) name: TextField,
    pub(super) email: TextField,
    pub(super) message: TextField,
    pub(super) submit_button: Option<Element>,
    pub(super) char_count: Option<HtmlElement>,
}

/// An `<input>` or a `<textarea>`.
pub(super) enum TextField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl TextField {
    pub(super) fn value(&self) -> String {
        match self {
            TextField::Input(el) => el.value(),
            TextField::TextArea(el) => el.value(),
        }
    }

    pub(super) fn html(&self) -> &HtmlElement {
        match self {
            TextField::Input(el) => &**el,
            TextField::TextArea(el) => &**el,
        }
    }
}

impl ContactForm {
    pub(super) fn field(&self, field: Field) -> &TextField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub(super) fn read(&self) -> FormInput {
        FormInput::new(self.name.value(), self.email.value(), self.message.value())
    }
}

impl PageElements {
    /// Navigation elements must exist; the contact form is optional.
    pub(super) fn find(document: &Document, cfg: &PageConfig) -> Result<Self, PageError> {
        let sel = &cfg.selectors;
        let body = document.body().ok_or_else(|| PageError::missing("body"))?;

        let toggle = required_html(document, &sel.toggle)?;
        let menu = required_html(document, &sel.menu)?;
        let navbar = required_html(document, &sel.navbar)?;
        let nav_links = query_all(document, &sel.nav_links)?;

        let mut unbound_form = None;
        let form = match query(document, &sel.form)? {
            None => None,
            Some(el) => match ContactForm::find(document, el.clone(), cfg) {
                Ok(form) => Some(form),
                Err(e) => {
                    warn!("contact form not bound: {e}");
                    unbound_form = el.dyn_into::<HtmlFormElement>().ok();
                    None
                }
            },
        };

        Ok(Self {
            document: document.clone(),
            body,
            toggle,
            menu,
            navbar,
            nav_links,
            form,
            unbound_form,
        })
    }
}

impl ContactForm {
    fn find(document: &Document, el: Element, cfg: &PageConfig) -> Result<Self, PageError> {
        let sel = &cfg.selectors;
        let form = el
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| PageError::UnexpectedElement {
                selector: sel.form.clone(),
                expected: "form",
            })?;

        Ok(Self {
            name: text_field(document, &sel.name_input)?,
            email: text_field(document, &sel.email_input)?,
            message: text_field(document, &sel.message_input)?,
            submit_button: form
                .query_selector(&sel.submit_button)
                .map_err(|e| super::effects::js_error("querySelector", e))?,
            char_count: query(document, &sel.char_count)?
                .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
            form,
        })
    }
}

pub(super) fn query(document: &Document, selector: &str) -> Result<Option<Element>, PageError> {
    document
        .query_selector(selector)
        .map_err(|e| super::effects::js_error(&format!("querySelector({selector})"), e))
}

pub(super) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document
        .query_selector_all(selector)
        .map_err(|e| super::effects::js_error(&format!("querySelectorAll({selector})"), e))?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn required_html(document: &Document, selector: &str) -> Result<HtmlElement, PageError> {
    query(document, selector)?
        .ok_or_else(|| PageError::missing(selector))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| PageError::UnexpectedElement {
            selector: selector.to_string(),
            expected: "HTML element",
        })
}

fn text_field(document: &Document, selector: &str) -> Result<TextField, PageError> {
    let el = query(document, selector)?.ok_or_else(|| PageError::missing(selector))?;
    let el = match el.dyn_into::<HtmlInputElement>() {
        Ok(input) => return Ok(TextField::Input(input)),
        Err(el) => el,
    };
    el.dyn_into::<HtmlTextAreaElement>()
        .map(TextField::TextArea)
        .map_err(|_| PageError::UnexpectedElement {
            selector: selector.to_string(),
            expected: "text field",
        })
}
