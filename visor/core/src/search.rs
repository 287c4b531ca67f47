//! Search Request Sequencing
//!
//! Grounded search is the one source where responses can arrive out of
//! order: the operator may fire a second query while the first is still in
//! flight. Every query gets a ticket from a monotonic sequence, and only the
//! response holding the latest ticket is allowed to touch the search slot.
//! Anything older is discarded on arrival.
//!
//! All tickets are issued and checked from the single orchestration task, so
//! a plain counter is enough; there is no cross-thread contention to guard.

/// Ticket identifying one search request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestId(u64);

/// Monotonic issuer of search tickets
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Create a sequence with no tickets issued
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding all earlier ones
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Whether this ticket is still the latest one issued
    #[must_use]
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }
}
