// UI Components
// Overlay modal and the dialog primitive it is built on

pub mod confirm_button;
pub mod dialog;
pub mod modal;

pub use confirm_button::ConfirmButton;
pub use modal::Modal;
