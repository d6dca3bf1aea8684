//! Revision list pane.

use super::frame::draw_frame;
use super::styles::Palette;
use crate::layout::LayoutBox;
use crate::model::Revision;
use crate::render::{DisplayContext, ListParams, ListSpan};
use crate::state::{Action, AppState};
use ratatui::text::{Line, Span, Text};

/// Indent of description lines under the header.
const BODY_INDENT: &str = "    ";

/// Lines of one list item: header, then up to `preview` body lines.
pub fn item_lines(
    rev: &Revision,
    marked: bool,
    preview: usize,
    palette: &Palette,
) -> Vec<Line<'static>> {
    let marker = if marked { "* " } else { "  " };
    let mut lines = vec![Line::from(vec![
        Span::styled(marker, palette.marked),
        Span::styled(rev.change_id.clone(), palette.change_id),
        Span::raw(" "),
        Span::raw(rev.summary.clone()),
    ])];
    lines.extend(rev.body.iter().take(preview).map(|line| {
        Line::from(vec![
            Span::raw(BODY_INDENT),
            Span::styled(line.clone(), palette.muted),
        ])
    }));
    lines
}

/// Render the list into `area`, updating the list scroll state.
pub fn render_list_pane(
    ctx: &mut DisplayContext<Action>,
    state: &mut AppState,
    palette: &Palette,
    area: LayoutBox,
) {
    let title = if state.is_empty() {
        "Revisions".to_string()
    } else {
        format!("Revisions {}/{}", state.cursor + 1, state.len())
    };
    let inner = draw_frame(ctx, area, &title, palette.border, palette.title, 0);
    if inner.is_empty() {
        return;
    }
    ctx.add_scroll(inner.rect, Action::ScrollList(0), 0);

    if state.is_empty() {
        ctx.add_draw(inner.rect, Span::styled("no revisions", palette.muted), 0);
        return;
    }

    let params = ListParams::new(inner.rect, state.len());
    let params = if state.follow_cursor {
        params.follow_cursor(state.cursor)
    } else {
        ListParams {
            cursor: Some(state.cursor),
            ..params
        }
    };

    let mut list = std::mem::take(&mut state.list);
    let view: &AppState = state;
    list.render(
        ctx,
        params,
        |i| view.item_height(i),
        |ctx, span| render_item(ctx, view, palette, span),
        |i| Some(Action::Select(i)),
    );
    state.list = list;
}

fn render_item(
    ctx: &mut DisplayContext<Action>,
    state: &AppState,
    palette: &Palette,
    span: &ListSpan,
) {
    let Some(rev) = state.revisions().get(span.index) else {
        return;
    };
    let lines: Vec<Line<'static>> = item_lines(
        rev,
        state.is_marked(span.index),
        state.preview_lines(span.index),
        palette,
    )
    .into_iter()
    .skip(span.line_offset)
    .take(span.line_count)
    .collect();
    ctx.add_draw(span.rect, Text::from(lines), 0);

    if span.index == state.cursor {
        if palette.selection.bg.is_some() {
            ctx.add_highlight(span.rect, palette.selection, 1);
        } else {
            ctx.add_reverse(span.rect, 1);
        }
    }
    ctx.add_hover(span.rect, Action::Select(span.index), 0);
}
