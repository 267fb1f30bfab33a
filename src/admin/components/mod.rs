//! Dashboard UI Components

use crate::admin::state::DetailModals;
use crate::config::DashboardConfig;
use crate::modal::ModalKind;
use leptos::*;

mod dismissal;
mod modal;

pub use dismissal::{use_click_observer, ModalBackdrops};
pub use modal::DetailModal;

/// Main App component: both detail modals plus the global click observer.
/// The surrounding page (tables with trigger rows) is rendered by the server.
#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
  let modals = DetailModals::new(config.api);
  provide_context(modals);

  let backdrops = ModalBackdrops::new();
  use_click_observer(modals, backdrops);

  let failures_backdrop = backdrops.get(ModalKind::Failures);
  let certificate_backdrop = backdrops.get(ModalKind::Certificate);

  view! {
    <DetailModal kind=ModalKind::Failures backdrop=failures_backdrop/>
    <DetailModal kind=ModalKind::Certificate backdrop=certificate_backdrop/>
  }
}
