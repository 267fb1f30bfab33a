//! Modal state shared by the detail dialogs

mod fence;
mod kind;
mod registry;

pub use fence::{RequestFence, Ticket};
pub use kind::ModalKind;
pub use registry::{ClickTarget, ModalContent, ModalRegistry, ModalState};
