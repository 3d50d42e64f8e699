//! # landing
//!
//! Interaction logic for a single landing page: mobile navigation, in-page
//! anchor scrolling, the contact form, and the scroll-reactive navbar.
//!
//! Nothing in this crate touches the DOM. Each handler on [`PageController`]
//! takes a snapshot of the event and returns the [`Effect`]s the page should
//! apply, so the whole behavior can be unit-tested on the host. The browser
//! side lives in the `landing_web` crate.
//!
//! ## Quick Start
//!
//! ```
//! use landing::prelude::*;
//!
//! let mut page = PageController::new(PageConfig::default());
//!
//! let effects = page.on_toggle_click();
//! assert!(effects.contains(&Effect::SetNavOpen(true)));
//!
//! let effects = page.on_key("Escape");
//! assert!(effects.contains(&Effect::SetNavOpen(false)));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): JSON configuration loading via [`PageConfig::from_json`]
//!
//! ## Modules
//!
//! - [`controller`]: the page controller and its effect vocabulary
//! - [`nav`]: open/closed state of the mobile menu
//! - [`anchor`]: fragment parsing and scroll target math
//! - [`form`]: contact form validation
//! - [`counter`]: live character counter tiers
//! - [`navbar`]: scroll direction tracking for the fixed navbar
//! - [`submit`]: cancellable simulated submission lifecycle
//! - [`config`]: selectors, thresholds, colors and messages

pub mod anchor;
pub mod config;
pub mod controller;
pub mod counter;
pub mod error;
pub mod form;
pub mod nav;
pub mod navbar;
pub mod submit;

pub use config::PageConfig;
pub use controller::{DocumentProbe, Effect, PageController};
pub use error::PageError;

pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::controller::{ClickTarget, DocumentProbe, Effect, PageController};
    pub use crate::error::PageError;
    pub use crate::form::{Field, FieldError, FormInput};
    pub use crate::submit::SubmitTicket;
}
