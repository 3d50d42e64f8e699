use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use landing::submit::SubmitTicket;
use landing::PageError;
use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

use super::effects::js_error;
use super::Page;

/// Browser timeouts backing in-flight simulated submissions, keyed by ticket.
#[derive(Default)]
pub(super) struct SubmitTimers {
    handles: HashMap<SubmitTicket, TimeoutHandle>,
}

impl SubmitTimers {
    pub(super) fn cancel(&mut self, ticket: SubmitTicket) {
        if let Some(handle) = self.handles.remove(&ticket) {
            handle.clear();
        }
    }
}

pub(super) fn schedule(page: &Rc<Page>, ticket: SubmitTicket, delay_ms: u32) -> Result<(), PageError> {
    let fired = Rc::clone(page);
    let handle = set_timeout_with_handle(
        move || {
            fired.timers.borrow_mut().handles.remove(&ticket);
            fired.dispatch(None, |c| c.on_submit_elapsed(ticket));
        },
        Duration::from_millis(u64::from(delay_ms)),
    )
    .map_err(|e| js_error("setTimeout", e))?;

    page.timers.borrow_mut().handles.insert(ticket, handle);
    Ok(())
}
