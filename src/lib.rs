//! vctui
//!
//! An immediate-mode display list for terminal UIs, and a revision browser
//! built on it.
//!
//! Each frame, views declare draws, style effects, pointer interactions and
//! popup windows into a [`render::DisplayContext`]. The context composites
//! into a ratatui buffer and then routes the next pointer events against
//! what was declared.
//!
//! The library splits into a pure core and an impure shell:
//! - [`layout`] and [`render`]: geometry, compositing, hit-testing, list
//!   virtualization and text runs
//! - [`state`]: the browser's state machine
//! - [`view`]: panes declared into the display list, plus the event loop
//! - [`config`], [`logging`], [`source`]: startup plumbing

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod render;
pub mod source;
pub mod state;
pub mod view;
