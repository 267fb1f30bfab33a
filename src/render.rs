//! Pure rendering of detail records into the modal view model.
//!
//! The view layer turns a [`ModalBody`] into DOM nodes; everything that
//! decides *what* is shown lives here so it can be tested without a browser.

use crate::details::{
  display_or_na, pretty_json, CertificateDetails, CertificateInfo, CourseInfo, DetailRecord,
  FailureCertificate, FailureDetails, FieldValue, StudentInfo,
};
use crate::error::DetailError;
use serde_json::Value;

pub const LOADING_TEXT: &str = "Carregando...";
pub const PLATFORM_DATA_CAPTION: &str = "Dados do Certificado:";

/// Content of a modal once its request has finished
#[derive(Clone, Debug, PartialEq)]
pub enum ModalBody {
  /// Single red error line
  Error(String),
  Sections(Vec<Section>),
}

impl ModalBody {
  /// Error reported by the endpoint in its `error` field
  pub fn api_error(message: &str) -> Self {
    ModalBody::Error(format!("Erro: {}", message))
  }

  /// Request or decoding failure
  pub fn load_error(err: &DetailError) -> Self {
    ModalBody::Error(format!("Erro ao carregar detalhes: {}", err))
  }

  pub fn sections(&self) -> &[Section] {
    match self {
      ModalBody::Sections(sections) => sections,
      ModalBody::Error(_) => &[],
    }
  }

  pub fn error_line(&self) -> Option<&str> {
    match self {
      ModalBody::Error(line) => Some(line),
      ModalBody::Sections(_) => None,
    }
  }
}

/// Titled block for one sub-object of a record
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
  pub title: &'static str,
  pub body: SectionBody,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SectionBody {
  /// Label/value rows, optionally followed by a JSON attachment
  Fields {
    rows: Vec<FieldRow>,
    attachment: Option<JsonBlock>,
  },
  /// Arbitrary JSON object shown as-is
  Json(String),
  /// Backing sub-object is absent
  NotFound(&'static str),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldRow {
  pub label: &'static str,
  pub value: String,
  /// CSS modifier for badge rows (`badge {class}`); `Some("")` for a badge without one
  pub badge: Option<String>,
}

impl FieldRow {
  fn plain(label: &'static str, value: &Option<FieldValue>) -> Self {
    Self {
      label,
      value: display_or_na(value.as_ref()),
      badge: None,
    }
  }

  fn badge(label: &'static str, value: &Option<FieldValue>) -> Self {
    Self {
      label,
      value: display_or_na(value.as_ref()),
      badge: Some(value.as_ref().and_then(FieldValue::text).unwrap_or_default()),
    }
  }

  /// Class attribute of the badge span, if this row is a badge
  pub fn badge_class(&self) -> Option<String> {
    self.badge.as_ref().map(|class| {
      if class.is_empty() {
        "badge".to_string()
      } else {
        format!("badge {}", class)
      }
    })
  }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JsonBlock {
  pub caption: &'static str,
  pub pretty: String,
}

/// Render the outcome of a fetch
pub fn render_outcome(outcome: Result<DetailRecord, DetailError>) -> ModalBody {
  match outcome {
    Ok(record) => render_record(&record),
    Err(err) => {
      tracing::warn!(error = %err, "failed to load details");
      ModalBody::load_error(&err)
    }
  }
}

pub fn render_record(record: &DetailRecord) -> ModalBody {
  if let Some(message) = record.error() {
    return ModalBody::api_error(&message);
  }
  match record {
    DetailRecord::Failure(details) => render_failure(details),
    DetailRecord::Certificate(details) => render_certificate(details),
  }
}

fn render_failure(details: &FailureDetails) -> ModalBody {
  ModalBody::Sections(vec![
    Section {
      title: "📜 Certificado",
      body: fields_or_not_found(
        details.certificate.as_ref(),
        failure_certificate_fields,
        "Nenhum certificado encontrado",
      ),
    },
    Section {
      title: "👤 Metadado do Usuário",
      body: json_or_not_found(details.user_metadata.as_ref(), "Nenhum metadado encontrado"),
    },
    Section {
      title: "📋 Payload da Tarefa",
      body: json_or_not_found(details.payload.as_ref(), "Nenhum payload encontrado"),
    },
  ])
}

fn render_certificate(details: &CertificateDetails) -> ModalBody {
  ModalBody::Sections(vec![
    Section {
      title: "📜 Informações do Certificado",
      body: fields_or_not_found(
        details.certificate.as_ref(),
        certificate_fields,
        "Certificado não encontrado",
      ),
    },
    Section {
      title: "👤 Informações do Aluno",
      body: fields_or_not_found(
        details.student.as_ref(),
        student_fields,
        "Informações do aluno não encontradas",
      ),
    },
    Section {
      title: "📚 Informações do Curso",
      body: fields_or_not_found(
        details.course.as_ref(),
        course_fields,
        "Informações do curso não encontradas",
      ),
    },
  ])
}

fn fields_or_not_found<T>(
  object: Option<&T>,
  fields: fn(&T) -> SectionBody,
  not_found: &'static str,
) -> SectionBody {
  object.map_or(SectionBody::NotFound(not_found), fields)
}

fn json_or_not_found(value: Option<&Value>, not_found: &'static str) -> SectionBody {
  value.map_or(SectionBody::NotFound(not_found), |v| {
    SectionBody::Json(pretty_json(v))
  })
}

fn platform_data(value: Option<&Value>) -> Option<JsonBlock> {
  value.map(|v| JsonBlock {
    caption: PLATFORM_DATA_CAPTION,
    pretty: pretty_json(v),
  })
}

fn failure_certificate_fields(c: &FailureCertificate) -> SectionBody {
  SectionBody::Fields {
    rows: vec![
      FieldRow::plain("ID", &c.id),
      FieldRow::badge("Status", &c.status),
      FieldRow::plain("Criado em", &c.created_at),
    ],
    attachment: platform_data(c.platform_data.as_ref()),
  }
}

fn certificate_fields(c: &CertificateInfo) -> SectionBody {
  SectionBody::Fields {
    rows: vec![
      FieldRow::plain("ID", &c.id),
      FieldRow::plain("Template ID", &c.template_id),
      FieldRow::plain("PDF URL", &c.pdf_url),
      FieldRow::badge("Status", &c.status),
      FieldRow::plain("Concluído em", &c.completed_on),
      FieldRow::plain("Criado em", &c.created_at),
      FieldRow::plain("Atualizado em", &c.updated_at),
    ],
    attachment: platform_data(c.platform_data.as_ref()),
  }
}

fn student_fields(s: &StudentInfo) -> SectionBody {
  SectionBody::Fields {
    rows: vec![
      FieldRow::plain("ID", &s.id),
      FieldRow::plain("Nome", &s.name),
      FieldRow::plain("Email", &s.email),
      FieldRow::plain("CPF", &s.cpf),
      FieldRow::plain("Telefones", &s.phone),
      FieldRow::plain("Cargo", &s.position),
      FieldRow::plain("Setor", &s.sector),
      FieldRow::plain("Criado em", &s.created_at),
    ],
    attachment: None,
  }
}

fn course_fields(c: &CourseInfo) -> SectionBody {
  SectionBody::Fields {
    rows: vec![
      FieldRow::plain("ID", &c.id),
      FieldRow::plain("Título", &c.title),
      FieldRow::plain("Slug", &c.slug),
    ],
    attachment: None,
  }
}
