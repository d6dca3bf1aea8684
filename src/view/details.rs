//! Details pane for the revision under the cursor.

use super::frame::draw_frame;
use super::styles::Palette;
use crate::layout::LayoutBox;
use crate::model::Revision;
use crate::render::{DisplayContext, TextBuilder};
use crate::state::{Action, AppState, MenuCommand};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span, Text};

/// Full text of `rev` as shown in the details pane.
pub fn detail_lines(rev: &Revision, palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Change ", palette.muted),
            Span::styled(rev.change_id.clone(), palette.change_id),
        ]),
        Line::default(),
        Line::styled(rev.summary.clone(), Modifier::BOLD),
        Line::default(),
    ];
    lines.extend(rev.body.iter().map(|line| Line::raw(line.clone())));
    lines
}

/// Render the details pane. Clamps `state.details_scroll` to the content.
pub fn render_details_pane(
    ctx: &mut DisplayContext<Action>,
    state: &mut AppState,
    palette: &Palette,
    area: LayoutBox,
) {
    let inner = draw_frame(ctx, area, "Details", palette.border, palette.title, 0);
    if inner.is_empty() {
        return;
    }
    let Some(rev) = state.current() else {
        ctx.add_draw(inner.rect, Span::styled("nothing selected", palette.muted), 0);
        return;
    };
    let lines = detail_lines(rev, palette);

    let (toolbar, body) = inner.cut_top(1);
    let expand = if state.is_expanded(state.cursor) { "[collapse]" } else { "[expand]" };
    let mark = if state.is_marked(state.cursor) { "[unmark]" } else { "[mark]" };
    TextBuilder::in_rect(toolbar.rect)
        .clickable(expand, palette.button, Action::Menu(MenuCommand::Expand))
        .space(1)
        .clickable(mark, palette.button, Action::Menu(MenuCommand::Mark))
        .done(ctx);

    let height = usize::from(body.height());
    state.details_scroll = state.details_scroll.min(lines.len().saturating_sub(height));
    let visible: Vec<Line<'static>> = lines
        .into_iter()
        .skip(state.details_scroll)
        .take(height)
        .collect();
    ctx.add_draw(body.rect, Text::from(visible), 0);
    ctx.add_scroll(body.rect, Action::ScrollDetails(0), 0);
}
