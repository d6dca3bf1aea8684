//! Fluent builder for runs of styled and clickable text.

use super::context::DisplayContext;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Clone)]
struct Segment<M> {
    x: u16,
    y: u16,
    width: u16,
    text: String,
    style: Style,
    message: Option<M>,
}

/// Lays out a sequence of text segments starting at an origin cell.
///
/// Each non-empty segment becomes one draw op at its computed position;
/// clickable segments also get a Click interaction over the same cells.
/// Embedded `\n` moves to column 0 of the next row.
///
/// ```
/// # use vctui::render::{DisplayContext, TextBuilder};
/// # use ratatui::style::Style;
/// let mut ctx: DisplayContext<usize> = DisplayContext::new();
/// let area = TextBuilder::new(0, 0)
///     .write("abandon ")
///     .clickable("[x]", Style::default(), 1)
///     .done(&mut ctx);
/// assert_eq!(area.width, 11);
/// assert_eq!(ctx.draws().len(), 2);
/// assert_eq!(ctx.interactions().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TextBuilder<M> {
    x: u16,
    y: u16,
    z: i32,
    wrap: Option<u16>,
    col: u16,
    row: u16,
    max_col: u16,
    touched: bool,
    segments: Vec<Segment<M>>,
}

impl<M: Clone> TextBuilder<M> {
    /// Start a builder whose first cell is `(x, y)`.
    pub fn new(x: u16, y: u16) -> Self {
        Self {
            x,
            y,
            z: 0,
            wrap: None,
            col: 0,
            row: 0,
            max_col: 0,
            touched: false,
            segments: Vec::new(),
        }
    }

    /// Start a builder at the top-left of `rect`, wrapping at its width.
    pub fn in_rect(rect: Rect) -> Self {
        Self::new(rect.x, rect.y).wrap(rect.width)
    }

    /// Stacking layer for every emitted op.
    pub fn z(mut self, z: i32) -> Self {
        self.z = z;
        self
    }

    /// Break onto a new row before exceeding `width` columns.
    pub fn wrap(mut self, width: u16) -> Self {
        self.wrap = Some(width);
        self
    }

    /// Append unstyled text.
    pub fn write(self, text: &str) -> Self {
        self.push(text, Style::default(), None)
    }

    /// Append styled text.
    pub fn styled(self, text: &str, style: Style) -> Self {
        self.push(text, style, None)
    }

    /// Append styled text that produces `message` when clicked.
    pub fn clickable(self, text: &str, style: Style, message: M) -> Self {
        self.push(text, style, Some(message))
    }

    /// Move to column 0 of the next row.
    pub fn new_line(mut self) -> Self {
        self.touched = true;
        self.break_row();
        self
    }

    /// Advance the cursor `n` columns without drawing.
    pub fn space(mut self, n: u16) -> Self {
        self.touched = true;
        self.col = self.col.saturating_add(n);
        self.max_col = self.max_col.max(self.col);
        self
    }

    /// Size of the laid-out text as `(width, height)`.
    ///
    /// Width is the furthest column reached on any row, height the last row
    /// index plus one. A builder nothing was appended to measures `(0, 0)`.
    pub fn measure(&self) -> (u16, u16) {
        if !self.touched {
            return (0, 0);
        }
        (self.max_col, self.row.saturating_add(1))
    }

    /// Emit the segments into `ctx` and return the covered area.
    pub fn done(self, ctx: &mut DisplayContext<M>) -> Rect {
        let (width, height) = self.measure();
        let z = self.z;
        for segment in self.segments {
            let rect = Rect::new(segment.x, segment.y, segment.width, 1);
            ctx.add_draw(rect, Span::styled(segment.text, segment.style), z);
            if let Some(message) = segment.message {
                ctx.add_click(rect, message, z);
            }
        }
        Rect::new(self.x, self.y, width, height)
    }

    fn break_row(&mut self) {
        self.row = self.row.saturating_add(1);
        self.col = 0;
    }

    fn push(mut self, text: &str, style: Style, message: Option<M>) -> Self {
        self.touched = true;
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                self.break_row();
            }
            self.push_line(piece, style, &message);
        }
        self
    }

    fn push_line(&mut self, piece: &str, style: Style, message: &Option<M>) {
        let piece = piece.strip_suffix('\r').unwrap_or(piece);
        if piece.width() == 0 {
            return;
        }
        let Some(limit) = self.wrap else {
            self.emit(piece.to_string(), piece.width() as u16, style, message);
            return;
        };

        let mut chunk = String::new();
        let mut chunk_width: u16 = 0;
        for ch in piece.chars() {
            let w = ch.width().unwrap_or(0) as u16;
            let fits =
                u32::from(self.col) + u32::from(chunk_width) + u32::from(w) <= u32::from(limit);
            if !fits && (chunk_width > 0 || self.col > 0) {
                if chunk_width > 0 {
                    self.emit(std::mem::take(&mut chunk), chunk_width, style, message);
                    chunk_width = 0;
                }
                self.break_row();
            }
            chunk.push(ch);
            chunk_width = chunk_width.saturating_add(w);
        }
        if chunk_width > 0 {
            self.emit(chunk, chunk_width, style, message);
        }
    }

    fn emit(&mut self, text: String, width: u16, style: Style, message: &Option<M>) {
        self.segments.push(Segment {
            x: self.x.saturating_add(self.col),
            y: self.y.saturating_add(self.row),
            width,
            text,
            style,
            message: message.clone(),
        });
        self.col = self.col.saturating_add(width);
        self.max_col = self.max_col.max(self.col);
    }
}
