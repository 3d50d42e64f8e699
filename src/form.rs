//! Contact form validation.
//!
//! Every rule runs on every attempt; failures aggregate rather than stopping at
//! the first bad field.

use std::sync::OnceLock;

use regex::Regex;

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    /// Document order; the first failing field in this order gets focus.
    pub fn all() -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Message]
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    TooShort { min: usize },
    InvalidEmail,
}

impl FieldError {
    pub fn message(self, field: Field) -> String {
        match (self, field) {
            (FieldError::Required, Field::Name) => "Name is required".to_string(),
            (FieldError::Required, Field::Email) => "Email is required".to_string(),
            (FieldError::Required, Field::Message) => "Message is required".to_string(),
            (FieldError::TooShort { min }, Field::Name) => {
                format!("Name must be at least {min} characters")
            }
            (FieldError::TooShort { min }, Field::Email) => {
                format!("Email must be at least {min} characters")
            }
            (FieldError::TooShort { min }, Field::Message) => {
                format!("Message must be at least {min} characters")
            }
            (FieldError::InvalidEmail, _) => "Please enter a valid email address".to_string(),
        }
    }
}

/// Raw field values as read from the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    errors: Vec<(Field, FieldError)>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[(Field, FieldError)] {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| *e)
    }

    pub fn first_invalid(&self) -> Option<Field> {
        self.errors.first().map(|(f, _)| *f)
    }
}

pub fn validate(input: &FormInput) -> Validation {
    let mut errors = Vec::new();
    for &field in Field::all() {
        if let Some(e) = check_field(field, input.value(field)) {
            errors.push((field, e));
        }
    }
    Validation { errors }
}

pub fn check_field(field: Field, raw: &str) -> Option<FieldError> {
    let value = raw.trim();
    if value.is_empty() {
        return Some(FieldError::Required);
    }
    match field {
        Field::Name => min_chars(value, NAME_MIN_CHARS),
        Field::Message => min_chars(value, MESSAGE_MIN_CHARS),
        Field::Email => (!is_valid_email(value)).then_some(FieldError::InvalidEmail),
    }
}

/// Counts UTF-16 code units, the same unit the live counter displays.
fn min_chars(value: &str, min: usize) -> Option<FieldError> {
    (value.encode_utf16().count() < min).then_some(FieldError::TooShort { min })
}

/// A non-empty local part, `@`, and a domain with at least one dot; no
/// whitespace anywhere and exactly one `@`.
pub fn is_valid_email(value: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| {
            Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
        })
        .is_match(value)
}
