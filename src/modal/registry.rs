//! Per-modal visibility, content and request fencing

use super::fence::{RequestFence, Ticket};
use super::kind::ModalKind;
use crate::render::ModalBody;

/// What the content area of a modal currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalContent {
  /// Never opened
  #[default]
  Idle,
  /// Request in flight
  Loading,
  Ready(ModalBody),
}

/// State of one modal instance
#[derive(Clone, Debug, Default)]
pub struct ModalState {
  visible: bool,
  content: ModalContent,
  fence: RequestFence,
}

impl ModalState {
  pub fn is_visible(&self) -> bool {
    self.visible
  }

  pub fn content(&self) -> &ModalContent {
    &self.content
  }

  /// Show the modal with the loading placeholder and issue a ticket for the fetch
  pub fn open(&mut self) -> Ticket {
    self.visible = true;
    self.content = ModalContent::Loading;
    self.fence.issue()
  }

  /// Apply a finished request. Returns false when a newer request superseded it.
  pub fn resolve(&mut self, ticket: Ticket, body: ModalBody) -> bool {
    if !self.fence.is_current(ticket) {
      return false;
    }
    self.content = ModalContent::Ready(body);
    true
  }

  pub fn close(&mut self) {
    self.visible = false;
    self.fence.invalidate();
  }
}

/// Element a document click landed on, as far as dismissal is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
  /// The backdrop element itself
  Backdrop(ModalKind),
  /// Anything else, including elements nested inside a modal
  Other,
}

impl ClickTarget {
  /// Classify a click by element identity. Only a target equal to a mounted
  /// backdrop counts; descendants of the backdrop compare unequal.
  pub fn classify<E: PartialEq>(target: &E, backdrop: impl Fn(ModalKind) -> Option<E>) -> Self {
    ModalKind::ALL
      .into_iter()
      .find(|kind| backdrop(*kind).map_or(false, |el| el == *target))
      .map_or(ClickTarget::Other, ClickTarget::Backdrop)
  }
}

/// State of every modal on the page
#[derive(Clone, Debug, Default)]
pub struct ModalRegistry {
  failures: ModalState,
  certificate: ModalState,
}

impl ModalRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, kind: ModalKind) -> &ModalState {
    match kind {
      ModalKind::Failures => &self.failures,
      ModalKind::Certificate => &self.certificate,
    }
  }

  fn get_mut(&mut self, kind: ModalKind) -> &mut ModalState {
    match kind {
      ModalKind::Failures => &mut self.failures,
      ModalKind::Certificate => &mut self.certificate,
    }
  }

  pub fn open(&mut self, kind: ModalKind) -> Ticket {
    self.get_mut(kind).open()
  }

  pub fn resolve(&mut self, kind: ModalKind, ticket: Ticket, body: ModalBody) -> bool {
    let applied = self.get_mut(kind).resolve(ticket, body);
    if !applied {
      tracing::debug!(modal = %kind, seq = ticket.seq(), "discarding stale response");
    }
    applied
  }

  pub fn close(&mut self, kind: ModalKind) {
    self.get_mut(kind).close();
  }

  /// Global click handling: a click exactly on a shown modal's backdrop hides it.
  /// Returns the modal that was dismissed, if any.
  pub fn click(&mut self, target: ClickTarget) -> Option<ModalKind> {
    let ClickTarget::Backdrop(kind) = target else {
      return None;
    };
    let state = self.get_mut(kind);
    if !state.is_visible() {
      return None;
    }
    state.close();
    Some(kind)
  }
}
