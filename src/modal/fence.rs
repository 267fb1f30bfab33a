//! Latest-request-wins fencing for overlapping fetches

/// Sequence number handed out when a request is issued
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
  pub fn seq(self) -> u64 {
    self.0
  }
}

/// Issues monotonically increasing tickets; only the newest one is current.
#[derive(Clone, Debug, Default)]
pub struct RequestFence {
  latest: u64,
}

impl RequestFence {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn issue(&mut self) -> Ticket {
    self.latest += 1;
    Ticket(self.latest)
  }

  /// Retire every outstanding ticket without issuing a new one
  pub fn invalidate(&mut self) {
    self.latest += 1;
  }

  pub fn is_current(&self, ticket: Ticket) -> bool {
    ticket.0 == self.latest
  }
}
