use std::collections::HashMap;

use landing::navbar::{TRANSFORM_HIDDEN, TRANSFORM_SHOWN};
use landing::prelude::*;

struct FakeDocument {
    tops: HashMap<&'static str, f64>,
    header: f64,
}

impl FakeDocument {
    fn landing() -> Self {
        let mut tops = HashMap::new();
        tops.insert("features", 900.0);
        tops.insert("contact", 2400.0);
        tops.insert("hero", 20.0);
        Self { tops, header: 72.0 }
    }
}

impl DocumentProbe for FakeDocument {
    fn element_top(&self, id: &str) -> Option<f64> {
        self.tops.get(id).copied()
    }

    fn header_height(&self) -> f64 {
        self.header
    }
}

fn controller() -> PageController {
    PageController::new(PageConfig::default())
}

fn ok_input() -> FormInput {
    FormInput::new("Ana", "ana@example.com", "I would like a demo, please.")
}

#[test]
fn toggle_twice_round_trips() {
    let mut page = controller();
    assert_eq!(page.on_toggle_click(), vec![Effect::SetNavOpen(true)]);
    assert_eq!(page.on_toggle_click(), vec![Effect::SetNavOpen(false)]);
    assert!(!page.nav_open());
}

#[test]
fn link_click_closes_menu_and_scrolls_below_header() {
    let doc = FakeDocument::landing();
    let mut page = controller();
    page.on_toggle_click();

    let effects = page.on_nav_link_click("#features", &doc);
    assert_eq!(
        effects,
        vec![
            Effect::SetNavOpen(false),
            Effect::PreventDefault,
            Effect::ScrollTo { top: 828.0 },
        ]
    );

    // Targets near the top clamp to zero.
    let effects = page.on_nav_link_click("#hero", &doc);
    assert_eq!(
        effects,
        vec![Effect::PreventDefault, Effect::ScrollTo { top: 0.0 }]
    );
}

#[test]
fn anchor_handler_always_prevents_in_page_navigation() {
    let doc = FakeDocument::landing();
    let mut page = controller();
    for href in ["#features", "#contact", "#missing", "#", "#%E2%9C%93", "#%ZZ"] {
        let effects = page.on_nav_link_click(href, &doc);
        assert!(
            effects.contains(&Effect::PreventDefault),
            "{href} was not intercepted"
        );
    }
}

#[test]
fn scroll_sequence_drives_navbar() {
    let mut page = controller();
    let look = |effects: Vec<Effect>| match effects.as_slice() {
        [Effect::SetNavbarScrolled(s), Effect::SetNavbarTransform(t)] => (*s, *t),
        other => panic!("unexpected scroll effects: {other:?}"),
    };

    assert_eq!(look(page.on_scroll(0.0)), (false, TRANSFORM_SHOWN));
    assert_eq!(look(page.on_scroll(60.0)), (true, TRANSFORM_SHOWN));
    assert_eq!(look(page.on_scroll(150.0)), (true, TRANSFORM_HIDDEN));
    assert_eq!(look(page.on_scroll(80.0)), (true, TRANSFORM_SHOWN));
}

#[test]
fn invalid_submission_reports_every_field_and_reveals_first() {
    let mut page = controller();
    let effects = page.on_submit(&FormInput::new("A", "a@b", "too short"));
    assert_eq!(
        effects,
        vec![
            Effect::PreventDefault,
            Effect::ClearFieldErrors,
            Effect::ShowFieldError {
                field: Field::Name,
                message: "Name must be at least 2 characters".to_string(),
            },
            Effect::ShowFieldError {
                field: Field::Email,
                message: "Please enter a valid email address".to_string(),
            },
            Effect::ShowFieldError {
                field: Field::Message,
                message: "Message must be at least 10 characters".to_string(),
            },
            Effect::RevealField(Field::Name),
        ]
    );
    assert_eq!(page.pending_submission(), None);
}

#[test]
fn successful_submission_resets_exactly_once() {
    let mut page = controller();
    let effects = page.on_submit(&ok_input());
    let ticket = match effects.as_slice() {
        [Effect::PreventDefault, Effect::ClearFieldErrors, Effect::SetSubmitting(true), Effect::ScheduleCompletion { ticket, delay_ms: 1500 }] => {
            *ticket
        }
        other => panic!("unexpected submit effects: {other:?}"),
    };

    let done = page.on_submit_elapsed(ticket);
    assert_eq!(
        done,
        vec![
            Effect::SetSubmitting(false),
            Effect::Acknowledge("Thank you! Your message has been sent successfully.".to_string()),
            Effect::ResetForm,
            Effect::SetCounter {
                count: 0,
                color: "#071629".to_string(),
            },
        ]
    );
    let resets = done.iter().filter(|e| **e == Effect::ResetForm).count();
    assert_eq!(resets, 1);

    assert!(page.on_submit_elapsed(ticket).is_empty());
}

#[test]
fn rapid_resubmission_completes_only_the_latest() {
    let mut page = controller();
    page.on_submit(&ok_input());
    let first = page.pending_submission().unwrap();

    let effects = page.on_submit(&ok_input());
    assert!(effects.contains(&Effect::CancelCompletion(first)));
    let second = page.pending_submission().unwrap();
    assert_ne!(first, second);

    assert!(page.on_submit_elapsed(first).is_empty());
    assert!(page.on_submit_elapsed(second).contains(&Effect::ResetForm));
}

#[test]
fn page_hide_cancels_pending_submission() {
    let mut page = controller();
    assert!(page.on_page_hide().is_empty());

    page.on_submit(&ok_input());
    let ticket = page.pending_submission().unwrap();
    assert_eq!(
        page.on_page_hide(),
        vec![Effect::CancelCompletion(ticket), Effect::SetSubmitting(false)]
    );
    assert!(page.on_submit_elapsed(ticket).is_empty());
}

#[test]
fn invalid_resubmission_leaves_pending_submission_alone() {
    let mut page = controller();
    page.on_submit(&ok_input());
    let ticket = page.pending_submission().unwrap();

    let effects = page.on_submit(&FormInput::default());
    assert!(effects.contains(&Effect::RevealField(Field::Name)));
    assert_eq!(page.pending_submission(), Some(ticket));
}

#[test]
fn configured_delay_and_message_flow_through() {
    let mut cfg = PageConfig::default();
    cfg.submit.delay_ms = 5;
    cfg.submit.success_message = "Sent.".to_string();
    let mut page = PageController::new(cfg);

    let effects = page.on_submit(&ok_input());
    let ticket = page.pending_submission().unwrap();
    assert!(effects.contains(&Effect::ScheduleCompletion { ticket, delay_ms: 5 }));
    assert!(page
        .on_submit_elapsed(ticket)
        .contains(&Effect::Acknowledge("Sent.".to_string())));
}

#[test]
fn astral_message_accepted_when_counter_reaches_minimum() {
    let mut page = controller();
    let message = "🎧🎧🎧🎧🎧";

    match page.on_message_input(message).as_slice() {
        [Effect::SetCounter { count, .. }] => assert_eq!(*count, 10),
        other => panic!("unexpected counter effects: {other:?}"),
    }

    let effects = page.on_submit(&FormInput::new("Ana", "a@b.com", message));
    assert!(!effects
        .iter()
        .any(|e| matches!(e, Effect::ShowFieldError { .. } | Effect::RevealField(_))));
    assert!(page.pending_submission().is_some());
}

#[test]
fn aborted_submission_clears_loading_and_never_completes() {
    let mut page = controller();
    page.on_submit(&ok_input());
    let ticket = page.pending_submission().unwrap();

    assert_eq!(
        page.abort_submission(),
        vec![Effect::CancelCompletion(ticket), Effect::SetSubmitting(false)]
    );
    assert_eq!(page.pending_submission(), None);
    assert!(page.on_submit_elapsed(ticket).is_empty());
    assert!(page.abort_submission().is_empty());
}
