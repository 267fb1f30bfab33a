//! Document-wide click observer: backdrop dismissal and row triggers

use crate::admin::state::DetailModals;
use crate::modal::{ClickTarget, ModalKind};
use leptos::*;
use wasm_bindgen::{JsCast, JsValue};

/// Backdrop elements of the mounted modals
#[derive(Clone, Copy)]
pub struct ModalBackdrops {
  failures: NodeRef<html::Div>,
  certificate: NodeRef<html::Div>,
}

impl ModalBackdrops {
  pub fn new() -> Self {
    Self {
      failures: create_node_ref(),
      certificate: create_node_ref(),
    }
  }

  pub fn get(&self, kind: ModalKind) -> NodeRef<html::Div> {
    match kind {
      ModalKind::Failures => self.failures,
      ModalKind::Certificate => self.certificate,
    }
  }
}

impl Default for ModalBackdrops {
  fn default() -> Self {
    Self::new()
  }
}

/// Install the click observer for the lifetime of the current owner
pub fn use_click_observer(modals: DetailModals, backdrops: ModalBackdrops) {
  let handle = window_event_listener(ev::click, move |ev| {
    if let Some((kind, record_id)) = find_trigger(&ev) {
      modals.open(kind, record_id);
      return;
    }
    modals.click(classify(&ev, &backdrops));
  });
  on_cleanup(move || handle.remove());
}

fn classify(ev: &web_sys::MouseEvent, backdrops: &ModalBackdrops) -> ClickTarget {
  let Some(target) = ev.target() else {
    return ClickTarget::Other;
  };
  let target: JsValue = target.into();

  ClickTarget::classify(&target, |kind| {
    backdrops.get(kind).get_untracked().map(|el| {
      let el: &JsValue = &el;
      el.clone()
    })
  })
}

/// Nearest ancestor-or-self carrying a trigger attribute, e.g. `data-failure-id="42"`
fn find_trigger(ev: &web_sys::MouseEvent) -> Option<(ModalKind, String)> {
  let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
  ModalKind::ALL.into_iter().find_map(|kind| {
    let attribute = kind.trigger_attribute();
    let row = element.closest(&format!("[{}]", attribute)).ok().flatten()?;
    row.get_attribute(attribute).map(|id| (kind, id))
  })
}
