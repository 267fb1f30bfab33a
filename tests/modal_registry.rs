//! Modal state tests - open/resolve ordering, fencing and backdrop dismissal

use certmon::details::DetailRecord;
use certmon::modal::{ClickTarget, ModalContent, ModalKind, ModalRegistry};
use certmon::render::{render_outcome, ModalBody};
use certmon::DetailError;

fn failure_body(id: &str) -> ModalBody {
  let json = format!(r#"{{"certificate": {{"id": "{}", "status": "done"}}}}"#, id);
  render_outcome(DetailRecord::parse(ModalKind::Failures, &json))
}

fn shown_id(registry: &ModalRegistry, kind: ModalKind) -> String {
  match registry.get(kind).content() {
    ModalContent::Ready(body) => match &body.sections()[0].body {
      certmon::render::SectionBody::Fields { rows, .. } => rows[0].value.clone(),
      other => panic!("Expected field rows, got {:?}", other),
    },
    other => panic!("Expected rendered content, got {:?}", other),
  }
}

// =============================================================================
// Open / resolve
// =============================================================================

#[test]
fn test_new_registry_is_hidden_and_idle() {
  let registry = ModalRegistry::new();
  for kind in ModalKind::ALL {
    assert!(!registry.get(kind).is_visible());
    assert_eq!(registry.get(kind).content(), &ModalContent::Idle);
  }
}

#[test]
fn test_open_shows_loading_placeholder() {
  let mut registry = ModalRegistry::new();
  registry.open(ModalKind::Certificate);

  let state = registry.get(ModalKind::Certificate);
  assert!(state.is_visible());
  assert_eq!(state.content(), &ModalContent::Loading);
  assert!(!registry.get(ModalKind::Failures).is_visible());
}

#[test]
fn test_resolve_replaces_placeholder() {
  let mut registry = ModalRegistry::new();
  let ticket = registry.open(ModalKind::Failures);
  assert!(registry.resolve(ModalKind::Failures, ticket, failure_body("c1")));
  assert_eq!(shown_id(&registry, ModalKind::Failures), "c1");
}

#[test]
fn test_resolve_with_error_body() {
  let mut registry = ModalRegistry::new();
  let ticket = registry.open(ModalKind::Failures);
  let body = render_outcome(Err(DetailError::Transport("TypeError: network error".into())));
  registry.resolve(ModalKind::Failures, ticket, body);

  match registry.get(ModalKind::Failures).content() {
    ModalContent::Ready(body) => assert_eq!(
      body.error_line(),
      Some("Erro ao carregar detalhes: TypeError: network error")
    ),
    other => panic!("Expected rendered content, got {:?}", other),
  }
}

// =============================================================================
// Fencing
// =============================================================================

#[test]
fn test_out_of_order_responses_keep_latest_request() {
  let mut registry = ModalRegistry::new();
  let first = registry.open(ModalKind::Failures);
  let second = registry.open(ModalKind::Failures);

  // Second response arrives first, then the stale first one
  assert!(registry.resolve(ModalKind::Failures, second, failure_body("second")));
  assert!(!registry.resolve(ModalKind::Failures, first, failure_body("first")));

  assert_eq!(shown_id(&registry, ModalKind::Failures), "second");
}

#[test]
fn test_stale_response_does_not_replace_loading() {
  let mut registry = ModalRegistry::new();
  let first = registry.open(ModalKind::Failures);
  let _second = registry.open(ModalKind::Failures);

  assert!(!registry.resolve(ModalKind::Failures, first, failure_body("first")));
  assert_eq!(
    registry.get(ModalKind::Failures).content(),
    &ModalContent::Loading
  );
}

#[test]
fn test_fences_are_per_modal() {
  let mut registry = ModalRegistry::new();
  let failures = registry.open(ModalKind::Failures);
  let _certificate = registry.open(ModalKind::Certificate);

  assert!(registry.resolve(ModalKind::Failures, failures, failure_body("f1")));
}

#[test]
fn test_close_discards_in_flight_response() {
  let mut registry = ModalRegistry::new();
  let ticket = registry.open(ModalKind::Failures);
  registry.close(ModalKind::Failures);

  assert!(!registry.resolve(ModalKind::Failures, ticket, failure_body("late")));
  assert!(!registry.get(ModalKind::Failures).is_visible());
}

// =============================================================================
// Dismissal
// =============================================================================

#[test]
fn test_backdrop_click_hides_shown_modal() {
  let mut registry = ModalRegistry::new();
  registry.open(ModalKind::Certificate);

  let dismissed = registry.click(ClickTarget::Backdrop(ModalKind::Certificate));
  assert_eq!(dismissed, Some(ModalKind::Certificate));
  assert!(!registry.get(ModalKind::Certificate).is_visible());
}

#[test]
fn test_click_inside_content_keeps_modal_open() {
  let mut registry = ModalRegistry::new();
  registry.open(ModalKind::Failures);

  assert_eq!(registry.click(ClickTarget::Other), None);
  assert!(registry.get(ModalKind::Failures).is_visible());
}

#[test]
fn test_backdrop_click_only_affects_its_modal() {
  let mut registry = ModalRegistry::new();
  registry.open(ModalKind::Failures);
  registry.open(ModalKind::Certificate);

  registry.click(ClickTarget::Backdrop(ModalKind::Failures));
  assert!(!registry.get(ModalKind::Failures).is_visible());
  assert!(registry.get(ModalKind::Certificate).is_visible());
}

#[test]
fn test_backdrop_click_on_hidden_modal_is_noop() {
  let mut registry = ModalRegistry::new();
  assert_eq!(registry.click(ClickTarget::Backdrop(ModalKind::Failures)), None);
}

#[test]
fn test_close_is_unconditional() {
  let mut registry = ModalRegistry::new();
  registry.close(ModalKind::Certificate);
  assert!(!registry.get(ModalKind::Certificate).is_visible());

  registry.open(ModalKind::Certificate);
  registry.close(ModalKind::Certificate);
  assert!(!registry.get(ModalKind::Certificate).is_visible());
}

#[test]
fn test_reopen_after_dismissal_loads_again() {
  let mut registry = ModalRegistry::new();
  let first = registry.open(ModalKind::Failures);
  registry.resolve(ModalKind::Failures, first, failure_body("one"));
  registry.click(ClickTarget::Backdrop(ModalKind::Failures));

  let second = registry.open(ModalKind::Failures);
  assert_eq!(
    registry.get(ModalKind::Failures).content(),
    &ModalContent::Loading
  );
  registry.resolve(ModalKind::Failures, second, failure_body("two"));
  assert_eq!(shown_id(&registry, ModalKind::Failures), "two");
}

// =============================================================================
// Click classification
// =============================================================================

/// Elements of a mounted page, identified by DOM id
fn mounted_backdrop(kind: ModalKind) -> Option<&'static str> {
  Some(kind.modal_id())
}

#[test]
fn test_classify_backdrop_element_itself() {
  for kind in ModalKind::ALL {
    assert_eq!(
      ClickTarget::classify(&kind.modal_id(), mounted_backdrop),
      ClickTarget::Backdrop(kind)
    );
  }
}

#[test]
fn test_classify_descendant_of_backdrop_is_other() {
  // Content container and anything inside it sit under the backdrop
  for target in ["modalContent", "certificateModalContent", "close-button", "info-item"] {
    assert_eq!(
      ClickTarget::classify(&target, mounted_backdrop),
      ClickTarget::Other,
      "target {target}"
    );
  }
}

#[test]
fn test_classify_unmounted_backdrop_is_other() {
  let target = ModalKind::Failures.modal_id();
  assert_eq!(
    ClickTarget::classify(&target, |_| None::<&str>),
    ClickTarget::Other
  );
}

#[test]
fn test_click_inside_content_does_not_dismiss() {
  let mut registry = ModalRegistry::new();
  registry.open(ModalKind::Certificate);

  let inside = ClickTarget::classify(&ModalKind::Certificate.content_id(), mounted_backdrop);
  assert_eq!(registry.click(inside), None);
  assert!(registry.get(ModalKind::Certificate).is_visible());

  let backdrop = ClickTarget::classify(&ModalKind::Certificate.modal_id(), mounted_backdrop);
  assert_eq!(registry.click(backdrop), Some(ModalKind::Certificate));
  assert!(!registry.get(ModalKind::Certificate).is_visible());
}
