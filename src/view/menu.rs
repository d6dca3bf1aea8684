//! Context menu popup.

use super::frame::draw_frame;
use super::layout::popup_rect;
use super::styles::Palette;
use crate::layout::LayoutBox;
use crate::render::DisplayContext;
use crate::state::{Action, AppState, MenuCommand};
use ratatui::layout::Rect;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Layer of the menu window and its frame.
pub const MENU_Z: i32 = 100;

/// Layer of the menu entries.
pub const MENU_ITEM_Z: i32 = MENU_Z + 1;

/// Screen rectangle of the open menu.
pub fn menu_rect(state: &AppState, screen: Rect) -> Option<Rect> {
    let menu = state.menu?;
    let label_width = MenuCommand::ALL
        .iter()
        .map(|command| command.label().width())
        .max()
        .unwrap_or(0) as u16;
    let height = MenuCommand::ALL.len() as u16 + 2;
    Some(popup_rect(menu.x, menu.y, label_width + 4, height, screen))
}

/// Render the menu, if open, as a window over everything else.
pub fn render_menu(
    ctx: &mut DisplayContext<Action>,
    state: &AppState,
    palette: &Palette,
    screen: Rect,
) {
    let (Some(menu), Some(rect)) = (state.menu, menu_rect(state, screen)) else {
        return;
    };
    let title = state
        .revisions()
        .get(menu.target)
        .map_or("", |rev| rev.change_id.as_str());

    let mut window = ctx.window(rect, MENU_Z);
    let inner = draw_frame(
        &mut *window,
        LayoutBox::from(rect),
        title,
        palette.menu,
        palette.menu.patch(palette.title),
        MENU_Z,
    );
    window.add_scroll(rect, Action::MoveMenu(0), MENU_Z);

    for (i, command) in MenuCommand::ALL.iter().enumerate() {
        let y = inner.rect.y + i as u16;
        if y >= inner.rect.bottom() {
            break;
        }
        let row = Rect::new(inner.rect.x, y, inner.rect.width, 1);
        let label = Span::styled(format!(" {} ", command.label()), palette.menu);
        window.add_draw(row, label, MENU_ITEM_Z);
        if i == menu.selected {
            window.add_reverse(row, MENU_ITEM_Z);
        }
        window.add_click(row, Action::Menu(*command), MENU_ITEM_Z);
        window.add_hover(row, Action::Menu(*command), MENU_ITEM_Z);
    }
}
