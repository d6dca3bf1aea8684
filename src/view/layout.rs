//! Screen partitioning.
//!
//! ```text
//! ┌ list ──────────┐│┌ details ─────────┐
//! │                ││ │                  │
//! └────────────────┘│└──────────────────┘
//!  status bar
//! ```

use crate::layout::{Extent, LayoutBox};
use ratatui::layout::Rect;

/// Width of the draggable divider.
pub const DIVIDER_WIDTH: i32 = 1;

/// Rectangles for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    /// Revision list pane.
    pub list: LayoutBox,
    /// Divider between the panes.
    pub divider: LayoutBox,
    /// Details pane.
    pub details: LayoutBox,
    /// Bottom status bar.
    pub status: LayoutBox,
}

impl FrameLayout {
    /// Partition `area`, giving the list `split_percent` of the width.
    pub fn compute(area: Rect, split_percent: u16) -> Self {
        let root = LayoutBox::from(area);
        let (status, body) = root.cut_bottom(1);
        let columns = body.h(&[
            Extent::Percent(i32::from(split_percent)),
            Extent::Fixed(DIVIDER_WIDTH),
            Extent::Fill(1),
        ]);
        Self {
            list: columns[0],
            divider: columns[1],
            details: columns[2],
            status,
        }
    }
}

/// Place a `width` x `height` popup with its top-left at `(x, y)`, shifted
/// left/up as needed to stay on `screen`.
pub fn popup_rect(x: u16, y: u16, width: u16, height: u16, screen: Rect) -> Rect {
    let width = width.min(screen.width);
    let height = height.min(screen.height);
    let x = x.clamp(screen.x, screen.right() - width);
    let y = y.clamp(screen.y, screen.bottom() - height);
    Rect::new(x, y, width, height)
}
