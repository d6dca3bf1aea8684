//! Retained display model.
//!
//! Each frame, components emit draw, effect, interaction and window ops into
//! a [`DisplayContext`]. The context then composites itself into a ratatui
//! [`Buffer`](ratatui::buffer::Buffer) and, until the next frame is built,
//! answers pointer events by hit-testing the recorded interactions.
//!
//! ```text
//! components ──add_*──▶ DisplayContext ──render──▶ Buffer
//!                            │
//!          MouseEvent ──process_mouse_event──▶ MouseResolution<M>
//! ```
//!
//! [`TextBuilder`] and [`ListRenderer`] are the two composite emitters built
//! on top of the primitive ops.

mod context;
mod list;
mod message;
mod mouse;
mod ops;
mod text;

pub use context::{DisplayContext, WindowScope};
pub use list::{ListParams, ListRenderer, ListSpan, Viewport};
pub use message::Message;
pub use mouse::{MouseResolution, WHEEL_DELTA};
pub use ops::{
    rect_contains, DrawOp, Effect, EffectOp, InteractionKind, InteractionOp, WindowId, WindowOp,
};
pub use text::TextBuilder;
