//! Application state.
//!
//! `AppState` is plain data plus a [`ListRenderer`] that keeps the list
//! scroll position between frames. Transitions live in
//! [`update`](super::update).

use crate::config::ResolvedConfig;
use crate::model::Revision;
use crate::render::ListRenderer;
use crate::state::Action;

/// Body lines shown under a collapsed revision.
pub const PREVIEW_LINES: usize = 1;

/// An in-progress divider drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DividerDrag {
    /// Column of the press that started the drag.
    pub origin_x: u16,
    /// Split percentage when the drag started.
    pub origin_split: u16,
}

/// The open context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    /// Revision the menu acts on.
    pub target: usize,
    /// Anchor column.
    pub x: u16,
    /// Anchor row.
    pub y: u16,
    /// Highlighted entry in [`MenuCommand::ALL`](super::MenuCommand::ALL).
    pub selected: usize,
}

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone)]
pub struct AppState {
    revisions: Vec<Revision>,
    expanded: Vec<bool>,
    marked: Vec<bool>,

    /// Index of the focused revision. Always `< len()` unless empty.
    pub cursor: usize,

    /// List scroll state.
    pub list: ListRenderer,

    /// Scroll the list so the cursor stays visible on the next frame.
    /// Cleared by wheel scrolling so the user can look away.
    pub follow_cursor: bool,

    /// First visible line of the details pane. Clamped while rendering.
    pub details_scroll: usize,

    /// Width of the list pane in percent.
    pub split_percent: u16,

    /// Divider drag in progress.
    pub drag: Option<DividerDrag>,

    /// Context menu, when open.
    pub menu: Option<MenuState>,

    /// Action under the pointer, for the status bar.
    pub hover: Option<Action>,

    /// One-shot message for the status bar.
    pub status: Option<String>,

    /// Where the revisions came from.
    pub source_label: String,

    /// Set by [`Action::Quit`].
    pub should_quit: bool,
}

impl AppState {
    /// Create state for `revisions` with the cursor on the first one.
    pub fn new(revisions: Vec<Revision>) -> Self {
        let n = revisions.len();
        Self {
            revisions,
            expanded: vec![false; n],
            marked: vec![false; n],
            cursor: 0,
            list: ListRenderer::new(),
            follow_cursor: true,
            details_scroll: 0,
            split_percent: ResolvedConfig::default().split_percent,
            drag: None,
            menu: None,
            hover: None,
            status: None,
            source_label: String::new(),
            should_quit: false,
        }
    }

    /// Apply the config settings that seed UI state.
    pub fn with_config(mut self, config: &ResolvedConfig) -> Self {
        self.split_percent = config.split_percent;
        self
    }

    /// Set the source label shown in the status bar.
    pub fn with_source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = label.into();
        self
    }

    /// All revisions.
    pub fn revisions(&self) -> &[Revision] {
        &self.revisions
    }

    /// Number of revisions.
    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    /// True when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    /// Revision under the cursor.
    pub fn current(&self) -> Option<&Revision> {
        self.revisions.get(self.cursor)
    }

    /// Whether revision `index` shows its full body in the list.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Whether revision `index` is marked.
    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.get(index).copied().unwrap_or(false)
    }

    /// Number of marked revisions.
    pub fn marked_count(&self) -> usize {
        self.marked.iter().filter(|m| **m).count()
    }

    /// Body lines revision `index` shows in the list.
    pub fn preview_lines(&self, index: usize) -> usize {
        if self.is_expanded(index) {
            usize::MAX
        } else {
            PREVIEW_LINES
        }
    }

    /// Height of revision `index` in the list.
    pub fn item_height(&self, index: usize) -> usize {
        self.revisions
            .get(index)
            .map_or(0, |rev| rev.list_height(self.preview_lines(index)))
    }

    pub(super) fn toggle_expanded(&mut self, index: usize) -> Option<bool> {
        let flag = self.expanded.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }

    pub(super) fn toggle_marked(&mut self, index: usize) -> Option<bool> {
        let flag = self.marked.get_mut(index)?;
        *flag = !*flag;
        Some(*flag)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
