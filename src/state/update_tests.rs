//! Tests for state transitions.

use super::*;
use crate::model::Revision;
use crate::render::ListParams;
use ratatui::layout::Rect;

fn state_with(n: usize) -> AppState {
    let revisions = (0..n)
        .map(|i| Revision::new(format!("rev{i}"), format!("summary {i}")).with_line("body"))
        .collect();
    AppState::new(revisions)
}

mod cursor {
    use super::*;

    #[test]
    fn select_moves_cursor_and_resets_details() {
        let mut state = state_with(3);
        state.details_scroll = 7;
        state.follow_cursor = false;

        update(&mut state, Action::Select(2));

        assert_eq!(state.cursor, 2);
        assert_eq!(state.details_scroll, 0);
        assert!(state.follow_cursor);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let mut state = state_with(3);
        update(&mut state, Action::Select(3));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn reselecting_keeps_details_scroll() {
        let mut state = state_with(3);
        state.details_scroll = 4;
        update(&mut state, Action::Select(0));
        assert_eq!(state.details_scroll, 4);
    }

    #[test]
    fn move_cursor_clamps_at_both_ends() {
        let mut state = state_with(3);
        update(&mut state, Action::MoveCursor(-1));
        assert_eq!(state.cursor, 0);
        update(&mut state, Action::MoveCursor(10));
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn first_and_last() {
        let mut state = state_with(5);
        update(&mut state, Action::CursorLast);
        assert_eq!(state.cursor, 4);
        update(&mut state, Action::CursorFirst);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn empty_state_ignores_cursor_moves() {
        let mut state = AppState::default();
        update(&mut state, Action::MoveCursor(1));
        update(&mut state, Action::CursorLast);
        assert_eq!(state.cursor, 0);
    }
}

mod scrolling {
    use super::*;

    #[test]
    fn list_scroll_stops_following_cursor() {
        let mut state = state_with(20);
        state
            .list
            .layout(&ListParams::new(Rect::new(0, 0, 10, 5), 20), |_| 2);

        update(&mut state, Action::ScrollList(3));

        assert!(!state.follow_cursor);
        assert_eq!(state.list.scroll_offset(), 3);
    }

    #[test]
    fn details_scroll_never_goes_negative() {
        let mut state = state_with(1);
        update(&mut state, Action::ScrollDetails(3));
        assert_eq!(state.details_scroll, 3);
        update(&mut state, Action::ScrollDetails(-10));
        assert_eq!(state.details_scroll, 0);
    }
}

mod divider {
    use super::*;

    #[test]
    fn drag_moves_split_by_pointer_distance() {
        let mut state = state_with(1);
        state.split_percent = 40;

        update(&mut state, Action::BeginDividerDrag(40));
        update(&mut state, Action::DragDivider { x: 60, width: 100 });

        assert_eq!(state.split_percent, 60);
        update(&mut state, Action::EndDrag);
        assert!(state.drag.is_none());
    }

    #[test]
    fn drag_is_clamped() {
        let mut state = state_with(1);
        update(&mut state, Action::BeginDividerDrag(40));
        update(&mut state, Action::DragDivider { x: 0, width: 100 });
        assert_eq!(state.split_percent, MIN_SPLIT_PERCENT);
        update(&mut state, Action::DragDivider { x: 200, width: 100 });
        assert_eq!(state.split_percent, MAX_SPLIT_PERCENT);
    }

    #[test]
    fn motion_without_drag_is_ignored() {
        let mut state = state_with(1);
        state.split_percent = 40;
        update(&mut state, Action::DragDivider { x: 90, width: 100 });
        assert_eq!(state.split_percent, 40);
    }

    #[test]
    fn starting_a_drag_closes_the_menu() {
        let mut state = state_with(1);
        update(&mut state, Action::OpenMenu { x: 1, y: 1 });
        update(&mut state, Action::BeginDividerDrag(10));
        assert!(state.menu.is_none());
    }
}

mod menu {
    use super::*;

    #[test]
    fn open_targets_cursor() {
        let mut state = state_with(3);
        update(&mut state, Action::Select(1));
        update(&mut state, Action::OpenMenu { x: 5, y: 6 });

        assert_eq!(
            state.menu,
            Some(MenuState {
                target: 1,
                x: 5,
                y: 6,
                selected: 0
            })
        );
    }

    #[test]
    fn open_on_empty_state_does_nothing() {
        let mut state = AppState::default();
        update(&mut state, Action::OpenMenu { x: 0, y: 0 });
        assert!(state.menu.is_none());
    }

    #[test]
    fn move_menu_wraps() {
        let mut state = state_with(1);
        update(&mut state, Action::OpenMenu { x: 0, y: 0 });
        update(&mut state, Action::MoveMenu(-1));
        assert_eq!(state.menu.map(|m| m.selected), Some(MenuCommand::ALL.len() - 1));
        update(&mut state, Action::MoveMenu(1));
        assert_eq!(state.menu.map(|m| m.selected), Some(0));
    }

    #[test]
    fn activate_runs_highlighted_command_on_target() {
        let mut state = state_with(3);
        update(&mut state, Action::Select(2));
        update(&mut state, Action::OpenMenu { x: 0, y: 0 });
        update(&mut state, Action::MoveMenu(1));
        update(&mut state, Action::ActivateMenu);

        assert!(state.is_marked(2));
        assert!(state.menu.is_none());
        assert_eq!(state.status.as_deref(), Some("marked rev2"));
    }

    #[test]
    fn expand_changes_item_height() {
        let mut state = AppState::new(vec![Revision::new("a", "b")
            .with_line("1")
            .with_line("2")
            .with_line("3")]);
        assert_eq!(state.item_height(0), 2);

        update(&mut state, Action::Menu(MenuCommand::Expand));
        assert!(state.is_expanded(0));
        assert_eq!(state.item_height(0), 4);

        update(&mut state, Action::Menu(MenuCommand::Expand));
        assert_eq!(state.item_height(0), 2);
        assert_eq!(state.status.as_deref(), Some("collapsed a"));
    }

    #[test]
    fn close_command_only_closes() {
        let mut state = state_with(1);
        update(&mut state, Action::OpenMenu { x: 0, y: 0 });
        update(&mut state, Action::Menu(MenuCommand::Close));
        assert!(state.menu.is_none());
        assert!(state.status.is_none());
        assert_eq!(state.marked_count(), 0);
    }
}

mod keys {
    use super::*;

    #[test]
    fn movement_keys_drive_cursor_without_menu() {
        let state = state_with(3);
        assert_eq!(action_for_key(&state, KeyAction::Down), Some(Action::MoveCursor(1)));
        assert_eq!(action_for_key(&state, KeyAction::Up), Some(Action::MoveCursor(-1)));
        assert_eq!(action_for_key(&state, KeyAction::Cancel), None);
    }

    #[test]
    fn movement_keys_drive_menu_when_open() {
        let mut state = state_with(3);
        update(&mut state, Action::OpenMenu { x: 0, y: 0 });
        assert_eq!(action_for_key(&state, KeyAction::Down), Some(Action::MoveMenu(1)));
        assert_eq!(action_for_key(&state, KeyAction::Cancel), Some(Action::CloseMenu));
        assert_eq!(action_for_key(&state, KeyAction::ToggleMenu), Some(Action::CloseMenu));
        assert_eq!(action_for_key(&state, KeyAction::First), None);
    }

    #[test]
    fn menu_key_anchors_inside_cursor_row() {
        let mut state = state_with(3);
        state.list.layout(
            &ListParams::new(Rect::new(2, 1, 30, 10), 3).follow_cursor(0),
            |_| 2,
        );
        update(&mut state, Action::Select(1));

        assert_eq!(
            action_for_key(&state, KeyAction::ToggleMenu),
            Some(Action::OpenMenu { x: 4, y: 4 })
        );
    }

    #[test]
    fn page_keys_scroll_details() {
        let state = state_with(1);
        assert_eq!(
            action_for_key(&state, KeyAction::DetailsPageDown),
            Some(Action::ScrollDetails(DETAILS_PAGE))
        );
    }
}
