//! UI state machine (pure).
//!
//! All state transitions are plain functions testable without a terminal.

pub mod action;
pub mod app_state;
pub mod update;

pub use action::{Action, MenuCommand};
pub use app_state::{AppState, DividerDrag, MenuState, PREVIEW_LINES};
pub use update::{action_for_key, update, DETAILS_PAGE};
