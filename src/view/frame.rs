//! Box-drawing borders.

use crate::layout::LayoutBox;
use crate::render::DisplayContext;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use unicode_width::UnicodeWidthStr;

/// Draw a single-line border around `area` with `title` on the top edge and
/// return the interior.
///
/// The interior is painted with spaces in `border` style, so popups hide
/// whatever lies beneath. Boxes smaller than 2x2 draw nothing and have an
/// empty interior.
pub fn draw_frame<M>(
    ctx: &mut DisplayContext<M>,
    area: LayoutBox,
    title: &str,
    border: Style,
    title_style: Style,
    z: i32,
) -> LayoutBox {
    if area.width() < 2 || area.height() < 2 {
        return LayoutBox::new(Rect::new(area.rect.x, area.rect.y, 0, 0));
    }
    let inner = area.inset(1);

    let w = usize::from(area.width()) - 2;
    let mut lines = Vec::with_capacity(usize::from(area.height()));
    lines.push(Line::from(format!("┌{}┐", "─".repeat(w))));
    for _ in 2..area.height() {
        lines.push(Line::from(format!("│{}│", " ".repeat(w))));
    }
    lines.push(Line::from(format!("└{}┘", "─".repeat(w))));
    ctx.add_draw(area.rect, Text::from(lines).style(border), z);

    if !title.is_empty() && w > 2 {
        let label = format!(" {title} ");
        let r = area.rect;
        let slot = Rect::new(r.x + 1, r.y, (w as u16).min(label.width() as u16), 1);
        ctx.add_draw(slot, Span::styled(label, title_style), z);
    }
    inner
}
