//! Page configuration.
//!
//! Defaults reproduce the stock landing page markup and styling. A page can
//! override any subset of keys with a JSON document; missing keys keep their
//! defaults.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::PageError;

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PageConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub navbar: NavbarConfig,
    pub counter: CounterConfig,
    pub submit: SubmitConfig,
    /// `trace` | `debug` | `info` | `warn` | `error`
    pub log_level: LogLevel,
}

/// CSS selectors used to find page elements.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Selectors {
    pub toggle: String,
    pub menu: String,
    pub navbar: String,
    pub nav_links: String,
    pub form: String,
    pub name_input: String,
    pub email_input: String,
    pub message_input: String,
    pub name_error: String,
    pub email_error: String,
    pub message_error: String,
    /// All error slots, cleared at the start of each submission attempt.
    pub error_slots: String,
    pub submit_button: String,
    pub char_count: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            toggle: "#hamburger".to_string(),
            menu: "#navMenu".to_string(),
            navbar: ".navbar".to_string(),
            nav_links: ".nav-link".to_string(),
            form: "#contactForm".to_string(),
            name_input: "#name".to_string(),
            email_input: "#email".to_string(),
            message_input: "#message".to_string(),
            name_error: "#nameError".to_string(),
            email_error: "#emailError".to_string(),
            message_error: "#messageError".to_string(),
            error_slots: ".form-error".to_string(),
            submit_button: ".submit-button".to_string(),
            char_count: "#charCount".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Classes {
    /// Marks the toggle control and the menu panel while the menu is open.
    pub active: String,
    pub scrolled: String,
    /// Marks the submit button while a submission is in flight.
    pub loading: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            active: "active".to_string(),
            scrolled: "scrolled".to_string(),
            loading: "loading".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavbarConfig {
    /// Offsets strictly above this get the scrolled style.
    pub scrolled_after: f64,
    /// Scrolling down strictly past this hides the navbar.
    pub hide_after: f64,
    pub transition_secs: f32,
    pub scrolled_background: String,
    pub scrolled_shadow: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_after: 50.0,
            hide_after: 100.0,
            transition_secs: 0.3,
            scrolled_background: "rgba(7, 22, 41, 0.98)".to_string(),
            scrolled_shadow: "0 0.125rem 1rem rgba(0, 0, 0, 0.1)".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CounterConfig {
    pub warn_above: usize,
    pub alert_above: usize,
    pub normal_color: String,
    pub warn_color: String,
    pub alert_color: String,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            warn_above: 400,
            alert_above: 450,
            normal_color: "#071629".to_string(),
            warn_color: "#ffa500".to_string(),
            alert_color: "#ff6565".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SubmitConfig {
    pub delay_ms: u32,
    pub success_message: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            delay_ms: 1500,
            success_message: "Thank you! Your message has been sent successfully.".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl PageConfig {
    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        serde_json::from_str(raw).map_err(|e| PageError::Config(e.to_string()))
    }

    /// The stylesheet injected once at startup: the scrolled navbar look and
    /// the transitions that make navbar changes animate.
    pub fn navbar_stylesheet(&self) -> String {
        let nav = &self.navbar;
        let sel = &self.selectors.navbar;
        let secs = nav.transition_secs;
        format!(
            "{sel}.{scrolled} {{\n    background-color: {bg} !important;\n    box-shadow: {shadow};\n}}\n\n{sel} {{\n    transition: transform {secs}s ease, background-color {secs}s ease;\n}}\n",
            scrolled = self.classes.scrolled,
            bg = nav.scrolled_background,
            shadow = nav.scrolled_shadow,
        )
    }
}
