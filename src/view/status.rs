//! Bottom status bar.

use super::styles::Palette;
use crate::layout::LayoutBox;
use crate::render::{DisplayContext, TextBuilder};
use crate::state::{Action, AppState};
use ratatui::style::Modifier;
use unicode_width::UnicodeWidthStr;

const MENU_BUTTON: &str = "[m] menu";
const QUIT_HINT: &str = "q quit ";

/// Status bar text for the action under the pointer.
pub fn describe_hover(action: &Action, state: &AppState) -> Option<String> {
    match action {
        Action::Select(index) => state
            .revisions()
            .get(*index)
            .map(|rev| format!("select {}", rev.change_id)),
        Action::BeginDividerDrag(_) => Some("drag to resize".to_string()),
        Action::Menu(command) => Some(command.label().to_lowercase()),
        _ => None,
    }
}

/// Render the status bar: source, position, hover hint or last message,
/// and key hints on the right.
pub fn render_status(
    ctx: &mut DisplayContext<Action>,
    state: &AppState,
    palette: &Palette,
    area: LayoutBox,
) {
    let rect = area.rect;
    if rect.is_empty() {
        return;
    }
    ctx.add_fill(rect, ' ', palette.status, 0);

    let message = state
        .hover
        .as_ref()
        .and_then(|action| describe_hover(action, state))
        .or_else(|| state.status.clone())
        .unwrap_or_default();
    let position = if state.is_empty() {
        String::new()
    } else {
        format!("{}/{}", state.cursor + 1, state.len())
    };
    let marked = match state.marked_count() {
        0 => String::new(),
        n => format!(" {n} marked"),
    };

    let left = TextBuilder::new(rect.x, rect.y)
        .z(1)
        .styled(
            &format!(" {} ", state.source_label),
            palette.status.add_modifier(Modifier::BOLD),
        )
        .styled(&format!(" {position}{marked} "), palette.status)
        .styled(&format!(" {message}"), palette.status);
    let (left_width, _) = left.measure();
    left.done(ctx);

    let right_width = (MENU_BUTTON.width() + 2 + QUIT_HINT.width()) as u16;
    if left_width.saturating_add(right_width) < rect.width {
        let x = rect.right() - right_width;
        TextBuilder::new(x, rect.y)
            .z(1)
            .clickable(MENU_BUTTON, palette.status, Action::OpenMenu { x, y: rect.y })
            .space(2)
            .styled(QUIT_HINT, palette.status)
            .done(ctx);
    }
}
