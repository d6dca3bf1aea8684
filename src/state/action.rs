//! Messages produced by interactions and key presses.

use crate::render::Message;

/// Entries of the context menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Show or hide the full description in the list.
    Expand,
    /// Toggle the mark on the revision.
    Mark,
    /// Dismiss the menu.
    Close,
}

impl MenuCommand {
    /// All commands, top to bottom.
    pub const ALL: [MenuCommand; 3] = [MenuCommand::Expand, MenuCommand::Mark, MenuCommand::Close];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Expand => "Expand / collapse",
            MenuCommand::Mark => "Toggle mark",
            MenuCommand::Close => "Close",
        }
    }
}

/// Everything that can change [`AppState`](super::AppState).
///
/// Scroll and drag variants carry placeholder values when registered; the
/// router stamps the real wheel delta and press position in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Put the cursor on revision `n`.
    Select(usize),
    /// Move the cursor by a signed number of revisions.
    MoveCursor(i32),
    /// Cursor to the first revision.
    CursorFirst,
    /// Cursor to the last revision.
    CursorLast,
    /// Scroll the list without moving the cursor.
    ScrollList(i32),
    /// Scroll the details pane.
    ScrollDetails(i32),
    /// Left press on the divider at this column.
    BeginDividerDrag(u16),
    /// Pointer moved to column `x` while dragging, on a screen `width` wide.
    DragDivider {
        /// Pointer column.
        x: u16,
        /// Screen width.
        width: u16,
    },
    /// Button released after a drag.
    EndDrag,
    /// Open the context menu for the cursor revision, anchored at a cell.
    OpenMenu {
        /// Anchor column.
        x: u16,
        /// Anchor row.
        y: u16,
    },
    /// Dismiss the context menu.
    CloseMenu,
    /// Move the menu highlight.
    MoveMenu(i32),
    /// Run the highlighted menu entry.
    ActivateMenu,
    /// Run a menu command on the menu target (or the cursor revision).
    Menu(MenuCommand),
    /// Leave the application.
    Quit,
}

impl Message for Action {
    fn with_scroll_delta(&self, delta: i32, horizontal: bool) -> Option<Self> {
        match self {
            Action::ScrollList(_) | Action::ScrollDetails(_) | Action::MoveMenu(_)
                if horizontal =>
            {
                None
            }
            Action::ScrollList(_) => Some(Action::ScrollList(delta)),
            Action::ScrollDetails(_) => Some(Action::ScrollDetails(delta)),
            Action::MoveMenu(_) => Some(Action::MoveMenu(delta.signum())),
            other => Some(other.clone()),
        }
    }

    fn with_drag_start(&self, x: u16, _y: u16) -> Option<Self> {
        match self {
            Action::BeginDividerDrag(_) => Some(Action::BeginDividerDrag(x)),
            other => Some(other.clone()),
        }
    }
}
