//! State transitions.
//!
//! [`update`] applies one [`Action`]; [`action_for_key`] turns a bound key
//! into the action it means in the current state.

use crate::config::{MAX_SPLIT_PERCENT, MIN_SPLIT_PERCENT};
use crate::model::KeyAction;
use crate::state::{Action, AppState, DividerDrag, MenuCommand, MenuState};
use tracing::debug;

/// Lines the details pane moves per page key.
pub const DETAILS_PAGE: i32 = 10;

/// Apply `action` to `state`.
pub fn update(state: &mut AppState, action: Action) {
    debug!(?action, "update");
    match action {
        Action::Select(index) => {
            if index < state.len() {
                set_cursor(state, index);
            }
        }
        Action::MoveCursor(delta) => {
            if !state.is_empty() {
                let last = state.len() as i64 - 1;
                let next = (state.cursor as i64 + i64::from(delta)).clamp(0, last);
                set_cursor(state, next as usize);
            }
        }
        Action::CursorFirst => {
            if !state.is_empty() {
                set_cursor(state, 0);
            }
        }
        Action::CursorLast => {
            if !state.is_empty() {
                set_cursor(state, state.len() - 1);
            }
        }
        Action::ScrollList(delta) => {
            state.follow_cursor = false;
            state.list.scroll_by(delta);
        }
        Action::ScrollDetails(delta) => {
            let next = state.details_scroll as i64 + i64::from(delta);
            state.details_scroll = next.max(0) as usize;
        }
        Action::BeginDividerDrag(x) => {
            state.menu = None;
            state.drag = Some(DividerDrag {
                origin_x: x,
                origin_split: state.split_percent,
            });
        }
        Action::DragDivider { x, width } => {
            if let Some(drag) = state.drag {
                state.split_percent = dragged_split(drag, x, width);
            }
        }
        Action::EndDrag => {
            if state.drag.take().is_some() {
                debug!(split = state.split_percent, "divider released");
            }
        }
        Action::OpenMenu { x, y } => {
            if !state.is_empty() {
                state.menu = Some(MenuState {
                    target: state.cursor,
                    x,
                    y,
                    selected: 0,
                });
            }
        }
        Action::CloseMenu => state.menu = None,
        Action::MoveMenu(delta) => {
            if let Some(menu) = state.menu.as_mut() {
                let n = MenuCommand::ALL.len() as i64;
                menu.selected = (menu.selected as i64 + i64::from(delta)).rem_euclid(n) as usize;
            }
        }
        Action::ActivateMenu => {
            if let Some(menu) = state.menu {
                if let Some(command) = MenuCommand::ALL.get(menu.selected) {
                    update(state, Action::Menu(*command));
                }
            }
        }
        Action::Menu(command) => run_menu_command(state, command),
        Action::Quit => state.should_quit = true,
    }
}

fn set_cursor(state: &mut AppState, index: usize) {
    if state.cursor != index {
        state.details_scroll = 0;
    }
    state.cursor = index;
    state.follow_cursor = true;
}

fn dragged_split(drag: DividerDrag, x: u16, width: u16) -> u16 {
    if width == 0 {
        return drag.origin_split;
    }
    let moved = i64::from(x) - i64::from(drag.origin_x);
    let percent = i64::from(drag.origin_split) + moved * 100 / i64::from(width);
    percent.clamp(i64::from(MIN_SPLIT_PERCENT), i64::from(MAX_SPLIT_PERCENT)) as u16
}

fn run_menu_command(state: &mut AppState, command: MenuCommand) {
    let target = state.menu.take().map_or(state.cursor, |menu| menu.target);
    let Some(change_id) = state.revisions().get(target).map(|r| r.change_id.clone()) else {
        return;
    };
    match command {
        MenuCommand::Expand => {
            if let Some(expanded) = state.toggle_expanded(target) {
                let verb = if expanded { "expanded" } else { "collapsed" };
                state.status = Some(format!("{verb} {change_id}"));
            }
        }
        MenuCommand::Mark => {
            if let Some(marked) = state.toggle_marked(target) {
                let verb = if marked { "marked" } else { "unmarked" };
                state.status = Some(format!("{verb} {change_id}"));
            }
        }
        MenuCommand::Close => {}
    }
}

/// Translate a bound key into an action for the current state.
///
/// While the menu is open, movement keys drive the menu highlight.
pub fn action_for_key(state: &AppState, key: KeyAction) -> Option<Action> {
    if state.menu.is_some() {
        return match key {
            KeyAction::Down => Some(Action::MoveMenu(1)),
            KeyAction::Up => Some(Action::MoveMenu(-1)),
            KeyAction::Activate => Some(Action::ActivateMenu),
            KeyAction::Cancel | KeyAction::ToggleMenu => Some(Action::CloseMenu),
            KeyAction::Quit => Some(Action::Quit),
            _ => None,
        };
    }

    match key {
        KeyAction::Down => Some(Action::MoveCursor(1)),
        KeyAction::Up => Some(Action::MoveCursor(-1)),
        KeyAction::First => Some(Action::CursorFirst),
        KeyAction::Last => Some(Action::CursorLast),
        KeyAction::DetailsPageDown => Some(Action::ScrollDetails(DETAILS_PAGE)),
        KeyAction::DetailsPageUp => Some(Action::ScrollDetails(-DETAILS_PAGE)),
        KeyAction::ToggleMenu => {
            let (x, y) = menu_anchor(state);
            Some(Action::OpenMenu { x, y })
        }
        KeyAction::Activate => Some(Action::Menu(MenuCommand::Expand)),
        KeyAction::Cancel => None,
        KeyAction::Quit => Some(Action::Quit),
    }
}

/// Where a keyboard-opened menu appears: just inside the cursor row, or the
/// list origin when the cursor row is off screen.
fn menu_anchor(state: &AppState) -> (u16, u16) {
    match state.list.span_for(state.cursor) {
        Some(span) => (span.rect.x.saturating_add(2), span.rect.y.saturating_add(1)),
        None => {
            let view = state.list.viewport().view;
            (view.x, view.y)
        }
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
