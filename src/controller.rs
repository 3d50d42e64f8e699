//! The page controller.
//!
//! One [`PageController`] exists per page. It owns the only mutable state the
//! page has (menu open flag, last scroll offset, pending submission) and turns
//! event snapshots into [`Effect`]s. The browser crate applies the effects; the
//! controller never sees a DOM node.

use crate::anchor::{self, AnchorHref};
use crate::config::PageConfig;
use crate::counter::{self, CounterTier};
use crate::form::{self, Field, FormInput};
use crate::nav::{NavState, NavTrigger};
use crate::navbar::ScrollTracker;
use crate::submit::{SubmissionTracker, SubmitTicket};

/// A DOM mutation requested by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a `<style>` block to the document head.
    InjectStyle(String),
    /// Set or clear the active class on the toggle and the menu, and lock or
    /// unlock body scrolling to match.
    SetNavOpen(bool),
    /// Suppress the browser's default action for the current event.
    PreventDefault,
    /// Smooth-scroll the window to an absolute offset.
    ScrollTo { top: f64 },
    /// Empty every error slot in the form.
    ClearFieldErrors,
    ShowFieldError { field: Field, message: String },
    /// Smooth-scroll the field to the middle of the viewport and focus it.
    RevealField(Field),
    SetSubmitting(bool),
    ScheduleCompletion { ticket: SubmitTicket, delay_ms: u32 },
    CancelCompletion(SubmitTicket),
    /// Blocking acknowledgment dialog.
    Acknowledge(String),
    ResetForm,
    SetCounter { count: usize, color: String },
    SetNavbarScrolled(bool),
    SetNavbarTransform(&'static str),
}

/// Where a document-level click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickTarget {
    pub inside_menu: bool,
    pub on_toggle: bool,
}

/// Geometry the anchor handler needs from the live document.
pub trait DocumentProbe {
    /// Top offset of the element with this id, or `None` if there is no such
    /// element.
    fn element_top(&self, id: &str) -> Option<f64>;

    /// Current height of the fixed header.
    fn header_height(&self) -> f64;
}

#[derive(Debug, Clone)]
pub struct PageController {
    config: PageConfig,
    nav: NavState,
    scroll: ScrollTracker,
    submission: SubmissionTracker,
}

impl PageController {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            nav: NavState::new(),
            scroll: ScrollTracker::new(),
            submission: SubmissionTracker::new(),
        }
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn nav_open(&self) -> bool {
        self.nav.is_open()
    }

    pub fn pending_submission(&self) -> Option<SubmitTicket> {
        self.submission.pending()
    }

    /// Effects to apply once, before any event arrives.
    pub fn init_effects(&self) -> Vec<Effect> {
        vec![Effect::InjectStyle(self.config.navbar_stylesheet())]
    }

    pub fn on_toggle_click(&mut self) -> Vec<Effect> {
        self.nav_effects(NavTrigger::ToggleClicked)
    }

    pub fn on_document_click(&mut self, target: ClickTarget) -> Vec<Effect> {
        if target.inside_menu || target.on_toggle {
            return Vec::new();
        }
        self.nav_effects(NavTrigger::OutsideClicked)
    }

    pub fn on_key(&mut self, key: &str) -> Vec<Effect> {
        if key != "Escape" {
            return Vec::new();
        }
        self.nav_effects(NavTrigger::Escape)
    }

    /// A navigation link was activated. The menu always closes; in-page
    /// fragments are scrolled to instead of jumped to.
    pub fn on_nav_link_click(&mut self, href: &str, probe: &dyn DocumentProbe) -> Vec<Effect> {
        let mut out = self.nav_effects(NavTrigger::LinkClicked);
        match anchor::classify(href) {
            AnchorHref::External => {}
            AnchorHref::Placeholder => out.push(Effect::PreventDefault),
            AnchorHref::Fragment(id) => {
                out.push(Effect::PreventDefault);
                if let Some(top) = probe.element_top(&id) {
                    out.push(Effect::ScrollTo {
                        top: anchor::scroll_target(top, probe.header_height()),
                    });
                }
            }
        }
        out
    }

    pub fn on_message_input(&self, text: &str) -> Vec<Effect> {
        vec![self.counter_effect(counter::message_len(text))]
    }

    pub fn on_submit(&mut self, input: &FormInput) -> Vec<Effect> {
        let mut out = vec![Effect::PreventDefault, Effect::ClearFieldErrors];

        let validation = form::validate(input);
        for &(field, err) in validation.errors() {
            out.push(Effect::ShowFieldError {
                field,
                message: err.message(field),
            });
        }

        if let Some(field) = validation.first_invalid() {
            out.push(Effect::RevealField(field));
            return out;
        }

        let started = self.submission.begin();
        if let Some(old) = started.superseded {
            out.push(Effect::CancelCompletion(old));
        }
        out.push(Effect::SetSubmitting(true));
        out.push(Effect::ScheduleCompletion {
            ticket: started.ticket,
            delay_ms: self.config.submit.delay_ms,
        });
        out
    }

    /// The simulated latency for `ticket` has elapsed.
    pub fn on_submit_elapsed(&mut self, ticket: SubmitTicket) -> Vec<Effect> {
        if !self.submission.finish(ticket) {
            return Vec::new();
        }
        vec![
            Effect::SetSubmitting(false),
            Effect::Acknowledge(self.config.submit.success_message.clone()),
            Effect::ResetForm,
            self.counter_effect(0),
        ]
    }

    /// The page is being hidden or unloaded; drop any in-flight submission.
    pub fn on_page_hide(&mut self) -> Vec<Effect> {
        self.abort_submission()
    }

    /// Drops the in-flight submission, e.g. when its timer could not be
    /// started. The loading state is cleared and nothing is acknowledged.
    pub fn abort_submission(&mut self) -> Vec<Effect> {
        match self.submission.cancel() {
            Some(ticket) => vec![
                Effect::CancelCompletion(ticket),
                Effect::SetSubmitting(false),
            ],
            None => Vec::new(),
        }
    }

    pub fn on_scroll(&mut self, offset: f64) -> Vec<Effect> {
        let look = self.scroll.observe(offset, &self.config.navbar);
        vec![
            Effect::SetNavbarScrolled(look.scrolled),
            Effect::SetNavbarTransform(look.transform()),
        ]
    }

    fn nav_effects(&mut self, trigger: NavTrigger) -> Vec<Effect> {
        match self.nav.apply(trigger) {
            Some(open) => vec![Effect::SetNavOpen(open)],
            None => Vec::new(),
        }
    }

    fn counter_effect(&self, count: usize) -> Effect {
        let cfg = &self.config.counter;
        Effect::SetCounter {
            count,
            color: CounterTier::for_len(count, cfg).color(cfg).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoTargets;

    impl DocumentProbe for NoTargets {
        fn element_top(&self, _id: &str) -> Option<f64> {
            None
        }

        fn header_height(&self) -> f64 {
            70.0
        }
    }

    #[test]
    fn outside_click_closes_only_when_open() {
        let mut c = PageController::new(PageConfig::default());
        let outside = ClickTarget::default();
        assert!(c.on_document_click(outside).is_empty());

        c.on_toggle_click();
        assert!(c
            .on_document_click(ClickTarget {
                inside_menu: true,
                on_toggle: false
            })
            .is_empty());
        assert!(c
            .on_document_click(ClickTarget {
                inside_menu: false,
                on_toggle: true
            })
            .is_empty());
        assert!(c.nav_open());

        assert_eq!(c.on_document_click(outside), vec![Effect::SetNavOpen(false)]);
        assert!(!c.nav_open());
    }

    #[test]
    fn escape_closes_other_keys_ignored() {
        let mut c = PageController::new(PageConfig::default());
        c.on_toggle_click();
        assert!(c.on_key("Enter").is_empty());
        assert_eq!(c.on_key("Escape"), vec![Effect::SetNavOpen(false)]);
        assert!(c.on_key("Escape").is_empty());
    }

    #[test]
    fn missing_fragment_target_is_a_quiet_no_op() {
        let mut c = PageController::new(PageConfig::default());
        assert_eq!(
            c.on_nav_link_click("#nowhere", &NoTargets),
            vec![Effect::PreventDefault]
        );
        assert_eq!(c.on_nav_link_click("#", &NoTargets), vec![Effect::PreventDefault]);
        assert!(c.on_nav_link_click("/faq", &NoTargets).is_empty());
    }

    #[test]
    fn every_submit_starts_by_preventing_the_browser_post() {
        let mut c = PageController::new(PageConfig::default());
        for input in [
            FormInput::default(),
            FormInput::new("Ana", "nope", "short"),
            FormInput::new("Ana", "ana@example.com", "Hello there, friend"),
        ] {
            assert_eq!(c.on_submit(&input).first(), Some(&Effect::PreventDefault));
        }
    }

    #[test]
    fn counter_colors_by_length() {
        let c = PageController::new(PageConfig::default());
        let color = |n: usize| match c.on_message_input(&"x".repeat(n)).pop() {
            Some(Effect::SetCounter { count, color }) => {
                assert_eq!(count, n);
                color
            }
            other => panic!("unexpected effect: {other:?}"),
        };
        assert_eq!(color(400), "#071629");
        assert_eq!(color(401), "#ffa500");
        assert_eq!(color(451), "#ff6565");
    }

    #[test]
    fn init_injects_navbar_style() {
        let c = PageController::new(PageConfig::default());
        match c.init_effects().as_slice() {
            [Effect::InjectStyle(css)] => assert!(css.contains(".navbar.scrolled")),
            other => panic!("unexpected init effects: {other:?}"),
        }
    }
}
