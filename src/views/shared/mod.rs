pub mod alert;
pub mod input;
pub mod progress_button;
pub mod spinner;
pub mod language_selector;

pub use alert::{render_alert, AlertKind};
pub use input::InputField;
pub use progress_button::ProgressButton;
pub use spinner::render_spinner;
pub use language_selector::render_language_selector;
