pub mod details;
pub mod environment;
pub mod form;
pub mod redirect;
pub mod target;

pub use environment::{Environment, Notification, FORM_OPENED};
pub use form::{ContactForm, FormField, FormState, UnknownField};
pub use redirect::submit;
pub use target::{EntryIds, PrefillTarget, TargetError};
