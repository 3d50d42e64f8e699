//! In-page anchor navigation.

use std::borrow::Cow;

/// How a navigation link's href should be handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorHref<'a> {
    /// `#some-id`: scroll to the element with this (decoded) id.
    Fragment(Cow<'a, str>),
    /// The bare `#` placeholder: swallow the click, do not scroll.
    Placeholder,
    /// Anything else is left to the browser.
    External,
}

pub fn classify(href: &str) -> AnchorHref<'_> {
    let Some(fragment) = href.strip_prefix('#') else {
        return AnchorHref::External;
    };
    if fragment.is_empty() {
        return AnchorHref::Placeholder;
    }
    match urlencoding::decode(fragment) {
        Ok(id) => AnchorHref::Fragment(id),
        // Not valid UTF-8 once decoded; look it up verbatim.
        Err(_) => AnchorHref::Fragment(Cow::Borrowed(fragment)),
    }
}

/// Scroll position that puts an element's top just below a fixed header.
pub fn scroll_target(element_top: f64, header_height: f64) -> f64 {
    (element_top - header_height).max(0.0)
}
