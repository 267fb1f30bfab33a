//! Detail modal components

use crate::admin::state::DetailModals;
use crate::modal::{ModalContent, ModalKind};
use crate::render::{FieldRow, JsonBlock, ModalBody, Section, SectionBody, LOADING_TEXT};
use leptos::*;

/// One detail modal. The outer element is the backdrop.
#[component]
pub fn DetailModal(kind: ModalKind, backdrop: NodeRef<html::Div>) -> impl IntoView {
  let modals = use_context::<DetailModals>().expect("DetailModals not found");

  view! {
    <div
      id=kind.modal_id()
      class="modal"
      node_ref=backdrop
      style:display=move || if modals.is_visible(kind) { "block" } else { "none" }
    >
      <div class="modal-content">
        <span class="close" title="Fechar" on:click=move |_| modals.close(kind)>"×"</span>
        <div id=kind.content_id()>
          {move || content_view(modals.content(kind))}
        </div>
      </div>
    </div>
  }
}

fn content_view(content: ModalContent) -> View {
  match content {
    ModalContent::Idle => ().into_view(),
    ModalContent::Loading => view! { <p>{LOADING_TEXT}</p> }.into_view(),
    ModalContent::Ready(ModalBody::Error(line)) => {
      view! { <p style="color: red;">{line}</p> }.into_view()
    }
    ModalContent::Ready(ModalBody::Sections(sections)) => {
      sections.into_iter().map(section_view).collect_view()
    }
  }
}

fn section_view(section: Section) -> View {
  view! {
    <div class="modal-section">
      <h3>{section.title}</h3>
      {section_body_view(section.body)}
    </div>
  }
  .into_view()
}

fn section_body_view(body: SectionBody) -> View {
  match body {
    SectionBody::NotFound(message) => view! { <p>{message}</p> }.into_view(),
    SectionBody::Json(pretty) => json_view(pretty),
    SectionBody::Fields { rows, attachment } => {
      let mut nodes: Vec<View> = rows.into_iter().map(row_view).collect();
      if let Some(block) = attachment {
        nodes.push(attachment_view(block));
      }
      nodes.collect_view()
    }
  }
}

fn row_view(row: FieldRow) -> View {
  let value = match row.badge_class() {
    Some(class) => view! { <span class=class>{row.value}</span> }.into_view(),
    None => row.value.into_view(),
  };

  view! {
    <div class="info-item">
      <span class="info-label">{row.label}":"</span>
      " "
      {value}
    </div>
  }
  .into_view()
}

fn attachment_view(block: JsonBlock) -> View {
  view! {
    <div style="margin-top: 15px;">
      <strong>{block.caption}</strong>
      {json_view(block.pretty)}
    </div>
  }
  .into_view()
}

fn json_view(pretty: String) -> View {
  view! {
    <div class="json-content">
      <pre>{pretty}</pre>
    </div>
  }
  .into_view()
}
