//! Virtualized list layout.
//!
//! Maps a logical sequence of variably sized items onto a fixed viewport.
//! Positions are measured in cumulative lines: item `i` occupies
//! `[item_start, item_end)` where `item_start` is the sum of the heights of
//! all items before it.
//!
//! # Scrolling
//! `start_line` is clamped to `[0, max(0, total - view_height)]` on every
//! layout. With `ensure_cursor_visible`, the viewport moves by the minimum
//! amount that brings the cursor item into view; it never re-centres.
//! Manual scrolling through [`ListRenderer::set_scroll_offset`] or
//! [`ListRenderer::scroll_by`] does not trigger cursor snapping.

use super::context::DisplayContext;
use ratatui::layout::Rect;
use tracing::trace;

/// The visible slice of one logical item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSpan {
    /// Index of the item this slice belongs to.
    pub index: usize,
    /// Absolute screen rectangle of the visible lines.
    pub rect: Rect,
    /// First visible line, relative to the top of the item.
    pub line_offset: usize,
    /// Number of visible lines.
    pub line_count: usize,
    /// Line at which the item starts, in list coordinates.
    pub item_start: usize,
    /// Line at which the item ends (exclusive), in list coordinates.
    pub item_end: usize,
}

impl ListSpan {
    /// True when the whole item is on screen.
    pub fn is_complete(&self) -> bool {
        self.line_count == self.item_end - self.item_start
    }
}

/// The scroll window over a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// Screen rectangle the list is drawn into.
    pub view: Rect,
    /// First list line shown at the top of `view`.
    pub start_line: usize,
}

impl Viewport {
    /// Number of lines the viewport shows.
    pub fn height(&self) -> usize {
        usize::from(self.view.height)
    }
}

/// Per-frame inputs to [`ListRenderer::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Screen rectangle to lay the list out in.
    pub view: Rect,
    /// Number of logical items.
    pub item_count: usize,
    /// Focused item, if any. Out-of-range values are ignored.
    pub cursor: Option<usize>,
    /// Scroll minimally so the cursor item is visible.
    pub ensure_cursor_visible: bool,
    /// Stacking layer of the per-item click regions.
    pub z: i32,
}

impl ListParams {
    /// Params for `item_count` items in `view`, no cursor, `z = 0`.
    pub fn new(view: Rect, item_count: usize) -> Self {
        Self {
            view,
            item_count,
            cursor: None,
            ensure_cursor_visible: false,
            z: 0,
        }
    }

    /// Focus `cursor` and keep it on screen.
    pub fn follow_cursor(mut self, cursor: usize) -> Self {
        self.cursor = Some(cursor);
        self.ensure_cursor_visible = true;
        self
    }

    /// Set the stacking layer for item click regions.
    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }
}

/// Virtualization engine for scrollable lists.
///
/// Keeps the scroll position between frames; everything else is
/// recomputed on each [`layout`](Self::layout).
#[derive(Debug, Clone, Default)]
pub struct ListRenderer {
    viewport: Viewport,
    spans: Vec<ListSpan>,
    total_lines: usize,
}

impl ListRenderer {
    /// Create a renderer scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total height of the list at the last layout.
    pub fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Visible spans from the last layout, top to bottom.
    pub fn spans(&self) -> &[ListSpan] {
        &self.spans
    }

    /// Visible span of item `index`, if on screen.
    pub fn span_for(&self, index: usize) -> Option<&ListSpan> {
        self.spans.iter().find(|span| span.index == index)
    }

    /// First item with any visible line.
    pub fn first_row_index(&self) -> Option<usize> {
        self.spans.first().map(|span| span.index)
    }

    /// Last item with any visible line.
    pub fn last_row_index(&self) -> Option<usize> {
        self.spans.last().map(|span| span.index)
    }

    /// Current scroll position in lines.
    pub fn scroll_offset(&self) -> usize {
        self.viewport.start_line
    }

    /// Jump to `line`. Clamped at the next layout.
    pub fn set_scroll_offset(&mut self, line: usize) {
        self.viewport.start_line = line;
    }

    /// Scroll by a signed number of lines, clamped to the bounds of the
    /// last layout.
    pub fn scroll_by(&mut self, delta: i32) {
        let max_start = self.max_start_line() as i64;
        let next = (self.viewport.start_line as i64 + i64::from(delta)).clamp(0, max_start.max(0));
        self.viewport.start_line = next as usize;
    }

    fn max_start_line(&self) -> usize {
        self.total_lines.saturating_sub(self.viewport.height())
    }

    /// Compute the visible spans without emitting anything.
    ///
    /// `measure(i)` is called once per item and returns its height in lines.
    pub fn layout<F>(&mut self, params: &ListParams, mut measure: F) -> &[ListSpan]
    where
        F: FnMut(usize) -> usize,
    {
        let heights: Vec<usize> = (0..params.item_count).map(&mut measure).collect();
        self.total_lines = heights.iter().sum();
        self.viewport.view = params.view;
        self.spans.clear();

        let view_height = self.viewport.height();
        let max_start = self.max_start_line();
        self.viewport.start_line = self.viewport.start_line.min(max_start);

        if params.ensure_cursor_visible && view_height > 0 {
            if let Some(cursor) = params.cursor.filter(|c| *c < heights.len()) {
                self.reveal(cursor, &heights);
            }
        }

        let start = self.viewport.start_line;
        let end = start + view_height;
        let mut item_start = 0;
        for (index, height) in heights.iter().copied().enumerate() {
            let item_end = item_start + height;
            if item_start >= end {
                break;
            }
            let visible_start = item_start.max(start);
            let visible_end = item_end.min(end);
            if visible_start < visible_end {
                let line_count = visible_end - visible_start;
                self.spans.push(ListSpan {
                    index,
                    rect: Rect::new(
                        params.view.x,
                        params.view.y + (visible_start - start) as u16,
                        params.view.width,
                        line_count as u16,
                    ),
                    line_offset: visible_start - item_start,
                    line_count,
                    item_start,
                    item_end,
                });
            }
            item_start = item_end;
        }
        &self.spans
    }

    fn reveal(&mut self, cursor: usize, heights: &[usize]) {
        let view_height = self.viewport.height();
        let cursor_start: usize = heights[..cursor].iter().sum();
        let cursor_end = cursor_start + heights[cursor];
        let before = self.viewport.start_line;

        if cursor_start < before {
            self.viewport.start_line = cursor_start;
        } else if cursor_end > before + view_height {
            self.viewport.start_line = cursor_end.saturating_sub(view_height);
        }
        self.viewport.start_line = self.viewport.start_line.min(self.max_start_line());

        if self.viewport.start_line != before {
            trace!(
                cursor,
                from = before,
                to = self.viewport.start_line,
                "list scrolled to reveal cursor"
            );
        }
    }

    /// Lay out the list and emit it into `ctx`.
    ///
    /// For each visible span, `render_item` paints the item and a Click
    /// region carrying `click_message(index)` is registered over the span
    /// (items whose factory returns `None` get no region). Callers add their
    /// own Scroll region over `params.view` so wheel events between items
    /// still scroll.
    pub fn render<M, F, R, C>(
        &mut self,
        ctx: &mut DisplayContext<M>,
        params: ListParams,
        measure: F,
        mut render_item: R,
        mut click_message: C,
    ) where
        F: FnMut(usize) -> usize,
        R: FnMut(&mut DisplayContext<M>, &ListSpan),
        C: FnMut(usize) -> Option<M>,
    {
        self.layout(&params, measure);
        for span in &self.spans {
            render_item(ctx, span);
            if let Some(message) = click_message(span.index) {
                ctx.add_click(span.rect, message, params.z);
            }
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
