//! Browser UI for the detail modals (CSR)

pub mod apiclient;
pub mod components;
pub mod state;

pub use components::App;
pub use state::DetailModals;
