use thiserror::Error;

/// Failures surfaced while wiring the page up.
///
/// Validation problems in the contact form are not errors: they are reported
/// per field through [`crate::form::FieldError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PageError {
    /// A required element is absent from the document.
    #[error("missing element: {selector}")]
    MissingElement { selector: String },

    /// An element exists but is not the kind the page expects (e.g. `#message`
    /// is not a textarea or input).
    #[error("element {selector} is not a {expected}")]
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },

    #[error("config: {0}")]
    Config(String),

    /// A browser API call threw.
    #[error("{context}: {message}")]
    Dom { context: String, message: String },
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        PageError::MissingElement {
            selector: selector.into(),
        }
    }

    pub fn dom(context: impl Into<String>, message: impl Into<String>) -> Self {
        PageError::Dom {
            context: context.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        let e = PageError::missing("#navMenu");
        assert_eq!(e.to_string(), "missing element: #navMenu");

        let e = PageError::UnexpectedElement {
            selector: "#message".to_string(),
            expected: "text field",
        };
        assert_eq!(e.to_string(), "element #message is not a text field");
    }
}
