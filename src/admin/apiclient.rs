//! API client for the detail endpoints

use crate::config::{ApiSection, DashboardConfig};
use crate::details::DetailRecord;
use crate::error::{DetailError, DetailResult};
use crate::modal::ModalKind;
use gloo_net::http::Request;
use gloo_storage::{LocalStorage, Storage};

const API_BASE_KEY: &str = "certmon_api_base";

pub fn get_stored_api_base() -> Option<String> {
  LocalStorage::get(API_BASE_KEY).ok()
}

/// Apply the runtime API base override, if one was stored
pub fn apply_stored_overrides(config: DashboardConfig) -> DashboardConfig {
  match get_stored_api_base() {
    Some(base_url) => {
      tracing::info!(%base_url, "using stored API base");
      config.with_base_url(base_url)
    }
    None => config,
  }
}

fn transport_error(err: gloo_net::Error) -> DetailError {
  match err {
    gloo_net::Error::SerdeError(e) => DetailError::Decode(e.to_string()),
    other => DetailError::Transport(other.to_string()),
  }
}

/// Fetch and parse one record. Error statuses are not failures here: the
/// server reports them as a JSON body with an `error` field.
pub async fn fetch_details(
  api: &ApiSection,
  kind: ModalKind,
  record_id: &str,
) -> DetailResult<DetailRecord> {
  let url = api.details_url(kind, record_id);
  tracing::debug!(%url, modal = %kind, "fetching details");

  let resp = Request::get(&url).send().await.map_err(transport_error)?;
  if !resp.ok() {
    tracing::warn!(%url, status = resp.status(), "details endpoint returned error status");
  }
  let body = resp.text().await.map_err(transport_error)?;
  DetailRecord::parse(kind, &body)
}
