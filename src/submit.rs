//! Lifecycle of the simulated contact form submission.
//!
//! Each accepted submission gets a fresh ticket. At most one ticket is pending;
//! starting a new one supersedes the old, and only the pending ticket may
//! complete.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    issued: u64,
    pending: Option<SubmitTicket>,
}

/// Result of [`SubmissionTracker::begin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Started {
    pub ticket: SubmitTicket,
    /// The in-flight submission this one replaced, if any.
    pub superseded: Option<SubmitTicket>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<SubmitTicket> {
        self.pending
    }

    pub fn begin(&mut self) -> Started {
        self.issued += 1;
        let ticket = SubmitTicket(self.issued);
        let superseded = self.pending.replace(ticket);
        Started { ticket, superseded }
    }

    /// Returns `true` exactly once for the pending ticket; stale or cancelled
    /// tickets return `false`.
    pub fn finish(&mut self, ticket: SubmitTicket) -> bool {
        if self.pending == Some(ticket) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) -> Option<SubmitTicket> {
        self.pending.take()
    }
}
