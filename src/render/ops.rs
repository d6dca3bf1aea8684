//! Operation records accumulated by a [`DisplayContext`](super::DisplayContext).
//!
//! Draws and effects are merged at render time and applied in `(z, order)`
//! ascending order. Interactions and windows are only consulted when routing
//! pointer input.

use bitflags::bitflags;
use ratatui::buffer::Cell;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Text;

/// Identifier of a window scope. [`WindowId::ROOT`] is the base layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct WindowId(u32);

impl WindowId {
    /// The base layer; interactions added outside any window carry this id.
    pub const ROOT: Self = Self(0);

    /// Create a window id from a raw value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Check if this is the root id.
    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

bitflags! {
    /// Which pointer events an interaction region reacts to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InteractionKind: u8 {
        /// Left-button press.
        const CLICK = 1 << 0;
        /// Wheel, vertical or horizontal.
        const SCROLL = 1 << 1;
        /// Left-button press that starts a drag.
        const DRAG = 1 << 2;
        /// Pointer hovering.
        const HOVER = 1 << 3;
    }
}

/// A block of pre-styled text blitted into a rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOp {
    /// Target rectangle; content outside it is clipped.
    pub rect: Rect,
    /// Pre-rendered styled lines.
    pub content: Text<'static>,
    /// Stacking layer.
    pub z: i32,
    /// Insertion order within the context.
    pub order: u64,
}

/// A style transform over cells that were already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Swap foreground and background.
    Reverse,
    /// Faint text.
    Dim,
    /// Underlined text.
    Underline,
    /// Bold text.
    Bold,
    /// Crossed-out text.
    Strike,
    /// Replace the background with the style's background.
    Highlight(Style),
    /// Overwrite symbol and style of every cell.
    Fill {
        /// Symbol written into every cell.
        symbol: char,
        /// Style every cell is reset to.
        style: Style,
    },
}

impl Effect {
    /// Apply this effect to a single cell.
    ///
    /// Only `Fill` touches the symbol. The modifier effects add exactly one
    /// attribute; `Highlight` only replaces the background.
    pub fn apply(&self, cell: &mut Cell) {
        match *self {
            Effect::Reverse => add_modifier(cell, Modifier::REVERSED),
            Effect::Dim => add_modifier(cell, Modifier::DIM),
            Effect::Underline => add_modifier(cell, Modifier::UNDERLINED),
            Effect::Bold => add_modifier(cell, Modifier::BOLD),
            Effect::Strike => add_modifier(cell, Modifier::CROSSED_OUT),
            Effect::Highlight(style) => {
                if let Some(bg) = style.bg {
                    cell.set_bg(bg);
                }
            }
            Effect::Fill { symbol, style } => {
                cell.reset();
                cell.set_char(symbol);
                cell.set_style(style);
            }
        }
    }
}

fn add_modifier(cell: &mut Cell, modifier: Modifier) {
    cell.set_style(Style::default().add_modifier(modifier));
}

/// An effect scoped to a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectOp {
    /// Affected cells.
    pub rect: Rect,
    /// The transform.
    pub effect: Effect,
    /// Stacking layer.
    pub z: i32,
    /// Insertion order within the context.
    pub order: u64,
}

/// A reactive region that resolves to a message.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionOp<M> {
    /// Hit area.
    pub rect: Rect,
    /// Message produced when the region is hit.
    pub message: M,
    /// Event kinds this region reacts to.
    pub kinds: InteractionKind,
    /// Stacking layer.
    pub z: i32,
    /// Window the region belongs to.
    pub window: WindowId,
    /// Insertion order within the context.
    pub order: u64,
}

/// An input-routing scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowOp {
    /// Window identifier, unique per root context.
    pub id: WindowId,
    /// Window area.
    pub rect: Rect,
    /// Stacking layer.
    pub z: i32,
    /// Insertion order within the context.
    pub order: u64,
}

/// True when `(x, y)` lies inside `rect` (min-inclusive, max-exclusive).
pub fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
}
