//! Domain model types (pure).

pub mod error;
pub mod key_action;
pub mod revision;

pub use error::{AppError, InputError};
pub use key_action::KeyAction;
pub use revision::Revision;
