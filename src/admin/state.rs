//! Global modal state for the dashboard using Leptos signals

use crate::admin::apiclient;
use crate::config::ApiSection;
use crate::modal::{ClickTarget, ModalContent, ModalKind, ModalRegistry};
use crate::render;
use leptos::*;

/// Handle to the detail modals, provided as context by `App`
#[derive(Clone, Copy)]
pub struct DetailModals {
  registry: RwSignal<ModalRegistry>,
  api: StoredValue<ApiSection>,
}

impl DetailModals {
  pub fn new(api: ApiSection) -> Self {
    Self {
      registry: create_rw_signal(ModalRegistry::new()),
      api: store_value(api),
    }
  }

  pub fn is_visible(&self, kind: ModalKind) -> bool {
    self.registry.with(|r| r.get(kind).is_visible())
  }

  pub fn content(&self, kind: ModalKind) -> ModalContent {
    self.registry.with(|r| r.get(kind).content().clone())
  }

  /// Show the modal, then load and render the record in the background.
  /// A later `open` or `close` on the same modal supersedes this one.
  pub fn open(&self, kind: ModalKind, record_id: String) {
    let Some(ticket) = self.registry.try_update(|r| r.open(kind)) else {
      return;
    };
    let api = self.api.get_value();
    let registry = self.registry;

    spawn_local(async move {
      let outcome = apiclient::fetch_details(&api, kind, &record_id).await;
      let body = render::render_outcome(outcome);
      registry.update(|r| {
        r.resolve(kind, ticket, body);
      });
    });
  }

  pub fn close(&self, kind: ModalKind) {
    self.registry.update(|r| r.close(kind));
  }

  /// Close whichever shown modal owns the clicked backdrop
  pub fn click(&self, target: ClickTarget) {
    if let ClickTarget::Other = target {
      return;
    }
    self.registry.update(|r| {
      if let Some(kind) = r.click(target) {
        tracing::debug!(modal = %kind, "dismissed by backdrop click");
      }
    });
  }
}
