//! Domain-level keyboard actions independent of key bindings.

/// What a key press means, before looking at any state.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` is handled
/// by [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move down one item (list) or entry (menu). Default: j/↓
    Down,
    /// Move up one item (list) or entry (menu). Default: k/↑
    Up,
    /// Jump to the first revision. Default: g/Home
    First,
    /// Jump to the last revision. Default: G/End
    Last,
    /// Scroll the details pane down a page. Default: Ctrl+d/PageDown
    DetailsPageDown,
    /// Scroll the details pane up a page. Default: Ctrl+u/PageUp
    DetailsPageUp,
    /// Open or close the context menu. Default: m
    ToggleMenu,
    /// Run the highlighted menu entry. Default: Enter
    Activate,
    /// Close the menu. Default: Esc
    Cancel,
    /// Exit. Default: q
    Quit,
}
