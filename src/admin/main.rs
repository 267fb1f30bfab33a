//! certmon detail modals - Client-Side Rendered (WASM)

use certmon::admin::{apiclient, App};
use certmon::config::DashboardConfig;
use certmon::logging;
use leptos::*;

const EMBEDDED_CONFIG: &str = include_str!("../../dashboard.yaml");

fn main() {
  console_error_panic_hook::set_once();

  let (config, rejected) = match DashboardConfig::from_yaml(EMBEDDED_CONFIG) {
    Ok(config) => (config, None),
    Err(err) => (DashboardConfig::default(), Some(err)),
  };
  logging::init(&config.logging.level);
  if let Some(err) = rejected {
    tracing::warn!(error = %err, "embedded config rejected, using defaults");
  }

  let config = apiclient::apply_stored_overrides(config);
  tracing::info!(base_url = %config.api.base_url, "detail modals ready");

  mount_to_body(move || view! { <App config=config/> });
}
