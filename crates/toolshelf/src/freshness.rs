//! Request sequencing so that a superseded fetch cannot overwrite newer state.
//!
//! Each load takes a ticket from [`Freshness::issue`] before it starts and
//! offers its result with [`Freshness::accept`] when it finishes. Only a
//! result whose ticket is newer than every previously accepted ticket is
//! applied. `Freshness` lives inside the owner's state mutex so that the
//! accept check and the state write happen under one lock.

/// Monotonic ticket counter plus the newest ticket whose result was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Freshness {
    issued: u64,
    applied: u64,
}

/// Sequence number handed to a load when it is issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl Freshness {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Record that `ticket` resolved. Returns `true` if its result should be
    /// applied, `false` if a newer result has already been applied.
    pub fn accept(&mut self, ticket: Ticket) -> bool {
        if ticket.0 > self.applied {
            self.applied = ticket.0;
            true
        } else {
            false
        }
    }

    /// Whether `ticket` is the most recently issued one.
    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.issued
    }

    /// Number of tickets issued so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Whether the most recently issued request has not resolved yet.
    pub fn is_pending(&self) -> bool {
        self.applied < self.issued
    }

    /// Whether any request has resolved.
    pub fn has_resolved(&self) -> bool {
        self.applied > 0
    }
}
