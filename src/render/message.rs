//! Application message contract.

/// A value routed back to the application when an interaction fires.
///
/// The compositor never inspects messages. It only offers two optional
/// stamping hooks, both of which return the message unchanged by default:
///
/// - [`with_scroll_delta`](Message::with_scroll_delta) for Scroll regions
/// - [`with_drag_start`](Message::with_drag_start) for Drag regions
///
/// Returning `None` from a hook drops the event.
pub trait Message: Clone {
    /// Stamp the wheel delta into the message.
    ///
    /// `delta` is negative for up/left and positive for down/right.
    fn with_scroll_delta(&self, delta: i32, horizontal: bool) -> Option<Self> {
        let _ = (delta, horizontal);
        Some(self.clone())
    }

    /// Stamp the pointer position at which a drag began.
    fn with_drag_start(&self, x: u16, y: u16) -> Option<Self> {
        let _ = (x, y);
        Some(self.clone())
    }
}

impl Message for String {}
impl Message for &'static str {}
impl Message for usize {}
impl Message for u32 {}
impl Message for i32 {}
