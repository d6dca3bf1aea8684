//! Per-frame operation accumulator and compositor.

use super::ops::{DrawOp, Effect, EffectOp, InteractionKind, InteractionOp, WindowId, WindowOp};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use std::ops::{Deref, DerefMut};
use unicode_width::UnicodeWidthChar;

/// Accumulates everything the components emit for one frame.
///
/// A context has two phases. While *accumulating*, components call the
/// `add_*` methods and [`window`](Self::window). Once the frame is built it
/// is *resolved*: [`render`](Self::render) composites it into a buffer and
/// [`process_mouse_event`](Self::process_mouse_event) routes input against
/// it, both read-only. The only way back to accumulating is
/// [`clear`](Self::clear).
///
/// # Ordering
/// Every op gets an insertion order from one counter shared by the root and
/// all window scopes derived from it. Draws and effects composite in
/// `(z, order)` ascending order, interleaved.
#[derive(Debug, Clone)]
pub struct DisplayContext<M> {
    pub(super) draws: Vec<DrawOp>,
    pub(super) effects: Vec<EffectOp>,
    pub(super) interactions: Vec<InteractionOp<M>>,
    pub(super) windows: Vec<WindowOp>,
    next_order: u64,
    next_window: u32,
    current_window: WindowId,
}

impl<M> Default for DisplayContext<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> DisplayContext<M> {
    /// Create an empty root context.
    pub fn new() -> Self {
        Self {
            draws: Vec::new(),
            effects: Vec::new(),
            interactions: Vec::new(),
            windows: Vec::new(),
            next_order: 0,
            next_window: 1,
            current_window: WindowId::ROOT,
        }
    }

    /// Reset for the next frame, keeping the allocations.
    pub fn clear(&mut self) {
        self.draws.clear();
        self.effects.clear();
        self.interactions.clear();
        self.windows.clear();
        self.next_order = 0;
        self.next_window = 1;
        self.current_window = WindowId::ROOT;
    }

    fn bump_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }

    /// Window that new interactions are tagged with.
    pub fn window_id(&self) -> WindowId {
        self.current_window
    }

    /// Recorded draw ops, in insertion order.
    pub fn draws(&self) -> &[DrawOp] {
        &self.draws
    }

    /// Recorded effect ops, in insertion order.
    pub fn effects(&self) -> &[EffectOp] {
        &self.effects
    }

    /// Recorded interactions, in insertion order.
    pub fn interactions(&self) -> &[InteractionOp<M>] {
        &self.interactions
    }

    /// Recorded windows, in insertion order.
    pub fn windows(&self) -> &[WindowOp] {
        &self.windows
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
            && self.effects.is_empty()
            && self.interactions.is_empty()
            && self.windows.is_empty()
    }

    /// Blit pre-styled content into `rect`.
    pub fn add_draw(&mut self, rect: Rect, content: impl Into<Text<'static>>, z: i32) {
        let order = self.bump_order();
        self.draws.push(DrawOp {
            rect,
            content: content.into(),
            z,
            order,
        });
    }

    /// Paint `rect` with repeated `symbol` in `style`. No-op for empty rects.
    pub fn add_fill(&mut self, rect: Rect, symbol: char, style: Style, z: i32) {
        if rect.is_empty() {
            return;
        }
        let symbol_width = symbol.width().unwrap_or(1).max(1) as u16;
        let row: String = std::iter::repeat(symbol)
            .take(usize::from(rect.width / symbol_width))
            .collect();
        let lines: Vec<Line<'static>> = (0..rect.height)
            .map(|_| Line::styled(row.clone(), style))
            .collect();
        self.add_draw(rect, Text::from(lines), z);
    }

    /// Record a style transform over `rect`.
    pub fn add_effect(&mut self, rect: Rect, effect: Effect, z: i32) {
        let order = self.bump_order();
        self.effects.push(EffectOp {
            rect,
            effect,
            z,
            order,
        });
    }

    /// Reverse video over `rect`.
    pub fn add_reverse(&mut self, rect: Rect, z: i32) {
        self.add_effect(rect, Effect::Reverse, z);
    }

    /// Dim the text in `rect`.
    pub fn add_dim(&mut self, rect: Rect, z: i32) {
        self.add_effect(rect, Effect::Dim, z);
    }

    /// Underline the text in `rect`.
    pub fn add_underline(&mut self, rect: Rect, z: i32) {
        self.add_effect(rect, Effect::Underline, z);
    }

    /// Embolden the text in `rect`.
    pub fn add_bold(&mut self, rect: Rect, z: i32) {
        self.add_effect(rect, Effect::Bold, z);
    }

    /// Strike through the text in `rect`.
    pub fn add_strike(&mut self, rect: Rect, z: i32) {
        self.add_effect(rect, Effect::Strike, z);
    }

    /// Replace the background of `rect` with the background of `style`.
    pub fn add_highlight(&mut self, rect: Rect, style: Style, z: i32) {
        self.add_effect(rect, Effect::Highlight(style), z);
    }

    /// Overwrite every cell of `rect` in place, at effect time.
    pub fn add_fill_effect(&mut self, rect: Rect, symbol: char, style: Style, z: i32) {
        self.add_effect(rect, Effect::Fill { symbol, style }, z);
    }

    /// Register a reactive region in the current window.
    pub fn add_interaction(&mut self, rect: Rect, message: M, kinds: InteractionKind, z: i32) {
        let order = self.bump_order();
        let window = self.current_window;
        self.interactions.push(InteractionOp {
            rect,
            message,
            kinds,
            z,
            window,
            order,
        });
    }

    /// Register a left-click region.
    pub fn add_click(&mut self, rect: Rect, message: M, z: i32) {
        self.add_interaction(rect, message, InteractionKind::CLICK, z);
    }

    /// Register a wheel region.
    pub fn add_scroll(&mut self, rect: Rect, message: M, z: i32) {
        self.add_interaction(rect, message, InteractionKind::SCROLL, z);
    }

    /// Register a drag-start region.
    pub fn add_drag(&mut self, rect: Rect, message: M, z: i32) {
        self.add_interaction(rect, message, InteractionKind::DRAG, z);
    }

    /// Register a hover region.
    pub fn add_hover(&mut self, rect: Rect, message: M, z: i32) {
        self.add_interaction(rect, message, InteractionKind::HOVER, z);
    }

    /// Open a window scope over `rect`.
    ///
    /// Interactions added through the returned scope (directly, or via
    /// [`TextBuilder`](super::TextBuilder) and
    /// [`ListRenderer`](super::ListRenderer)) are tagged with a fresh window
    /// id. Dropping the scope restores the enclosing window.
    pub fn window(&mut self, rect: Rect, z: i32) -> WindowScope<'_, M> {
        let id = WindowId::new(self.next_window);
        self.next_window += 1;
        let order = self.bump_order();
        self.windows.push(WindowOp { id, rect, z, order });
        let previous = std::mem::replace(&mut self.current_window, id);
        WindowScope { ctx: self, previous }
    }

    /// Import every op of `other`, appended after the ops already here.
    ///
    /// Foreign window ids are relabelled so they cannot collide with ours;
    /// `other`'s root-scoped interactions join the current window. Insertion
    /// order is reissued, preserving `other`'s relative order.
    pub fn merge(&mut self, other: DisplayContext<M>) {
        let base_order = self.next_order;
        let window_offset = self.next_window - 1;
        let current = self.current_window;
        let remap = |id: WindowId| {
            if id.is_root() {
                current
            } else {
                WindowId::new(id.get() + window_offset)
            }
        };

        self.draws.extend(other.draws.into_iter().map(|mut op| {
            op.order += base_order;
            op
        }));
        self.effects.extend(other.effects.into_iter().map(|mut op| {
            op.order += base_order;
            op
        }));
        self.interactions
            .extend(other.interactions.into_iter().map(|mut op| {
                op.order += base_order;
                op.window = remap(op.window);
                op
            }));
        self.windows.extend(other.windows.into_iter().map(|mut op| {
            op.order += base_order;
            op.id = remap(op.id);
            op
        }));

        self.next_order = base_order + other.next_order;
        self.next_window += other.next_window - 1;
    }

    /// Composite draws and effects into `buf`.
    ///
    /// Ops are applied once each, sorted by `(z, order)`. A draw replaces
    /// symbol and style of every cell it writes; effects only restyle. All
    /// writes are clipped to the op's rect and to the buffer area.
    pub fn render(&self, buf: &mut Buffer) {
        enum Layer<'a> {
            Draw(&'a DrawOp),
            Effect(&'a EffectOp),
        }

        let mut layers: Vec<(i32, u64, Layer<'_>)> =
            Vec::with_capacity(self.draws.len() + self.effects.len());
        layers.extend(self.draws.iter().map(|op| (op.z, op.order, Layer::Draw(op))));
        layers.extend(
            self.effects
                .iter()
                .map(|op| (op.z, op.order, Layer::Effect(op))),
        );
        layers.sort_by_key(|(z, order, _)| (*z, *order));

        for (_, _, layer) in layers {
            match layer {
                Layer::Draw(op) => render_draw(buf, op),
                Layer::Effect(op) => render_effect(buf, op),
            }
        }
    }
}

fn render_draw(buf: &mut Buffer, op: &DrawOp) {
    let clip = op.rect.intersection(buf.area);
    if clip.is_empty() {
        return;
    }
    let base = op.content.style;
    for (row, line) in op.content.lines.iter().enumerate() {
        let Some(y) = op.rect.y.checked_add(row as u16) else {
            break;
        };
        if y >= clip.bottom() {
            break;
        }
        if y < clip.top() {
            continue;
        }
        let line_style = base.patch(line.style);
        let mut x = op.rect.x;
        'spans: for span in &line.spans {
            let style = line_style.patch(span.style);
            for ch in span.content.chars() {
                let width = ch.width().unwrap_or(0) as u16;
                if width == 0 {
                    continue;
                }
                if x.saturating_add(width) > clip.right() {
                    break 'spans;
                }
                if x >= clip.left() {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.reset();
                        cell.set_char(ch).set_style(style);
                    }
                    for trailing in x + 1..x + width {
                        if let Some(cell) = buf.cell_mut((trailing, y)) {
                            cell.reset();
                        }
                    }
                }
                x += width;
            }
        }
    }
}

fn render_effect(buf: &mut Buffer, op: &EffectOp) {
    let clip = op.rect.intersection(buf.area);
    for y in clip.top()..clip.bottom() {
        for x in clip.left()..clip.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                op.effect.apply(cell);
            }
        }
    }
}

/// A window-scoped view of a [`DisplayContext`].
///
/// Derefs to the context, so every `add_*` method and nested
/// [`window`](DisplayContext::window) call is available. Interactions added
/// while the scope lives belong to its window.
pub struct WindowScope<'a, M> {
    ctx: &'a mut DisplayContext<M>,
    previous: WindowId,
}

impl<M> WindowScope<'_, M> {
    /// Id of the window this scope tags interactions with.
    pub fn id(&self) -> WindowId {
        self.ctx.current_window
    }
}

impl<M> Deref for WindowScope<'_, M> {
    type Target = DisplayContext<M>;

    fn deref(&self) -> &Self::Target {
        self.ctx
    }
}

impl<M> DerefMut for WindowScope<'_, M> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.ctx
    }
}

impl<M> Drop for WindowScope<'_, M> {
    fn drop(&mut self) {
        self.ctx.current_window = self.previous;
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
