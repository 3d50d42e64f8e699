use landing::DocumentProbe;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Live document geometry for the anchor handler.
pub(super) struct DomProbe<'a> {
    pub(super) document: &'a Document,
    pub(super) navbar: &'a HtmlElement,
}

impl DocumentProbe for DomProbe<'_> {
    fn element_top(&self, id: &str) -> Option<f64> {
        let el = self.document.get_element_by_id(id)?;
        let el = el.dyn_into::<HtmlElement>().ok()?;
        Some(f64::from(el.offset_top()))
    }

    fn header_height(&self) -> f64 {
        f64::from(self.navbar.offset_height())
    }
}
