//! Tests for pointer routing.

use super::*;
use crossterm::event::KeyModifiers;
use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    Click(&'static str),
    Scroll { delta: i32, horizontal: bool },
    DragFrom(u16, u16),
    Rejected,
}

impl Message for Msg {
    fn with_scroll_delta(&self, delta: i32, horizontal: bool) -> Option<Self> {
        match self {
            Msg::Scroll { .. } => Some(Msg::Scroll { delta, horizontal }),
            Msg::Rejected => None,
            other => Some(other.clone()),
        }
    }

    fn with_drag_start(&self, x: u16, y: u16) -> Option<Self> {
        match self {
            Msg::DragFrom(..) => Some(Msg::DragFrom(x, y)),
            Msg::Rejected => None,
            other => Some(other.clone()),
        }
    }
}

fn event(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn press(column: u16, row: u16) -> MouseEvent {
    event(MouseEventKind::Down(MouseButton::Left), column, row)
}

fn full() -> Rect {
    Rect::new(0, 0, 80, 24)
}

mod clicks {
    use super::*;

    #[test]
    fn click_inside_region_returns_message() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(Rect::new(0, 0, 10, 1), Msg::Click("a"), 0);

        assert_eq!(
            ctx.process_mouse_event(press(3, 0)),
            MouseResolution::Message(Msg::Click("a"))
        );
    }

    #[test]
    fn click_outside_every_region_is_ignored() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(Rect::new(0, 0, 10, 1), Msg::Click("a"), 0);

        let resolution = ctx.process_mouse_event(press(10, 0));
        assert_eq!(resolution, MouseResolution::Ignored);
        assert_eq!(resolution.into_parts(), (None, false));
    }

    #[test]
    fn higher_z_wins_regardless_of_declaration_order() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(full(), Msg::Click("top"), 5);
        ctx.add_click(full(), Msg::Click("bottom"), 1);

        assert_eq!(
            ctx.process_mouse_event(press(1, 1)).into_message(),
            Some(Msg::Click("top"))
        );
    }

    #[test]
    fn equal_z_goes_to_first_declared() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(Rect::new(2, 0, 4, 1), Msg::Click("inner"), 0);
        ctx.add_click(Rect::new(0, 0, 20, 1), Msg::Click("row"), 0);

        assert_eq!(
            ctx.process_mouse_event(press(3, 0)).into_message(),
            Some(Msg::Click("inner"))
        );
        assert_eq!(
            ctx.process_mouse_event(press(10, 0)).into_message(),
            Some(Msg::Click("row"))
        );
    }

    #[test]
    fn scroll_only_region_does_not_answer_clicks() {
        let mut ctx = DisplayContext::new();
        ctx.add_scroll(full(), Msg::Scroll { delta: 0, horizontal: false }, 0);

        assert_eq!(ctx.process_mouse_event(press(1, 1)), MouseResolution::Ignored);
    }

    #[test]
    fn right_button_press_is_not_a_click() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(full(), Msg::Click("a"), 0);

        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            MouseResolution::Ignored
        );
    }
}

mod windows {
    use super::*;

    #[test]
    fn click_outside_all_windows_is_ignored_even_over_root_region() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(full(), Msg::Click("base"), 0);
        {
            let mut menu = ctx.window(Rect::new(10, 5, 10, 5), 100);
            menu.add_click(Rect::new(10, 5, 10, 1), Msg::Click("menu"), 101);
        }

        assert_eq!(ctx.process_mouse_event(press(0, 0)), MouseResolution::Ignored);
        assert_eq!(
            ctx.process_mouse_event(press(12, 5)).into_message(),
            Some(Msg::Click("menu"))
        );
    }

    #[test]
    fn root_regions_are_unreachable_through_a_window() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(full(), Msg::Click("base"), 500);
        let _menu = ctx.window(Rect::new(10, 5, 10, 5), 100);
        drop(_menu);

        assert_eq!(ctx.process_mouse_event(press(12, 6)), MouseResolution::Ignored);
    }

    #[test]
    fn overlapping_windows_route_to_higher_z() {
        let mut ctx = DisplayContext::new();
        {
            let mut high = ctx.window(Rect::new(0, 0, 10, 10), 50);
            high.add_click(Rect::new(0, 0, 10, 10), Msg::Click("high"), 0);
        }
        {
            let mut low = ctx.window(Rect::new(0, 0, 10, 10), 10);
            low.add_click(Rect::new(0, 0, 10, 10), Msg::Click("low"), 99);
        }

        assert_eq!(
            ctx.process_mouse_event(press(5, 5)).into_message(),
            Some(Msg::Click("high"))
        );
    }

    #[test]
    fn overlapping_windows_at_equal_z_route_to_later_window() {
        let mut ctx = DisplayContext::new();
        {
            let mut first = ctx.window(Rect::new(0, 0, 10, 10), 10);
            first.add_click(Rect::new(0, 0, 10, 10), Msg::Click("first"), 0);
        }
        {
            let mut second = ctx.window(Rect::new(5, 5, 10, 10), 10);
            second.add_click(Rect::new(5, 5, 10, 10), Msg::Click("second"), 0);
        }

        assert_eq!(
            ctx.process_mouse_event(press(6, 6)).into_message(),
            Some(Msg::Click("second"))
        );
        assert_eq!(
            ctx.process_mouse_event(press(1, 1)).into_message(),
            Some(Msg::Click("first"))
        );
    }

    #[test]
    fn menu_sub_region_beats_item_underneath() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(full(), Msg::Click("log"), 0);
        {
            let mut menu = ctx.window(Rect::new(20, 5, 30, 6), 100);
            menu.add_click(Rect::new(20, 6, 30, 1), Msg::Click("item"), 101);
            menu.add_click(Rect::new(40, 6, 6, 1), Msg::Click("shortcut"), 102);
        }

        assert_eq!(
            ctx.process_mouse_event(press(42, 6)).into_message(),
            Some(Msg::Click("shortcut"))
        );
        assert_eq!(
            ctx.process_mouse_event(press(25, 6)).into_message(),
            Some(Msg::Click("item"))
        );
    }

    #[test]
    fn window_at_reports_topmost() {
        let mut ctx: DisplayContext<Msg> = DisplayContext::new();
        let low = ctx.window(Rect::new(0, 0, 10, 10), 1).id();
        let high = ctx.window(Rect::new(0, 0, 5, 5), 2).id();

        assert_eq!(ctx.window_at(2, 2), Some(high));
        assert_eq!(ctx.window_at(7, 7), Some(low));
        assert_eq!(ctx.window_at(20, 20), None);
    }
}

mod wheel {
    use super::*;

    #[test]
    fn vertical_wheel_stamps_signed_delta() {
        let mut ctx = DisplayContext::new();
        ctx.add_scroll(full(), Msg::Scroll { delta: 0, horizontal: false }, 0);

        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::ScrollUp, 1, 1))
                .into_message(),
            Some(Msg::Scroll { delta: -3, horizontal: false })
        );
        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::ScrollDown, 1, 1))
                .into_message(),
            Some(Msg::Scroll { delta: 3, horizontal: false })
        );
    }

    #[test]
    fn horizontal_wheel_stamps_horizontal_flag() {
        let mut ctx = DisplayContext::new();
        ctx.add_scroll(full(), Msg::Scroll { delta: 0, horizontal: false }, 0);

        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::ScrollLeft, 1, 1))
                .into_message(),
            Some(Msg::Scroll { delta: -3, horizontal: true })
        );
        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::ScrollRight, 1, 1))
                .into_message(),
            Some(Msg::Scroll { delta: 3, horizontal: true })
        );
    }

    #[test]
    fn message_without_stamping_is_returned_unchanged() {
        let mut ctx = DisplayContext::new();
        ctx.add_scroll(full(), Msg::Click("plain"), 0);

        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::ScrollDown, 1, 1))
                .into_message(),
            Some(Msg::Click("plain"))
        );
    }

    #[test]
    fn rejected_stamp_drops_the_event() {
        let mut ctx = DisplayContext::new();
        ctx.add_scroll(full(), Msg::Rejected, 0);

        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::ScrollDown, 1, 1)),
            MouseResolution::Ignored
        );
    }

    #[test]
    fn default_stamping_keeps_plain_messages() {
        let mut ctx: DisplayContext<usize> = DisplayContext::new();
        ctx.add_scroll(full(), 7, 0);

        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::ScrollDown, 0, 0))
                .into_message(),
            Some(7)
        );
    }
}

mod drag {
    use super::*;

    #[test]
    fn press_on_drag_region_stamps_start_position() {
        let mut ctx = DisplayContext::new();
        ctx.add_drag(Rect::new(30, 0, 1, 24), Msg::DragFrom(0, 0), 0);

        assert_eq!(
            ctx.process_mouse_event(press(30, 7)).into_message(),
            Some(Msg::DragFrom(30, 7))
        );
    }

    #[test]
    fn drag_takes_precedence_over_click() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(full(), Msg::Click("row"), 10);
        ctx.add_drag(Rect::new(30, 0, 1, 24), Msg::DragFrom(0, 0), 0);

        assert_eq!(
            ctx.process_mouse_event(press(30, 2)).into_message(),
            Some(Msg::DragFrom(30, 2))
        );
    }

    #[test]
    fn rejected_drag_stamp_is_dropped() {
        let mut ctx = DisplayContext::new();
        ctx.add_drag(full(), Msg::Rejected, 0);

        assert_eq!(ctx.process_mouse_event(press(1, 1)), MouseResolution::Ignored);
    }
}

mod non_press {
    use super::*;

    #[test]
    fn motion_over_window_is_captured() {
        let mut ctx: DisplayContext<Msg> = DisplayContext::new();
        drop(ctx.window(Rect::new(0, 0, 10, 10), 1));

        let resolution =
            ctx.process_mouse_event(event(MouseEventKind::Drag(MouseButton::Left), 2, 2));
        assert_eq!(resolution, MouseResolution::Captured);
        assert!(resolution.is_handled());
        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::Up(MouseButton::Left), 20, 2)),
            MouseResolution::Ignored
        );
    }

    #[test]
    fn motion_never_fires_click_regions() {
        let mut ctx = DisplayContext::new();
        ctx.add_click(full(), Msg::Click("a"), 0);

        assert_eq!(
            ctx.process_mouse_event(event(MouseEventKind::Moved, 1, 1)),
            MouseResolution::Ignored
        );
    }
}

mod hover {
    use super::*;

    #[test]
    fn hover_at_finds_topmost_hover_region() {
        let mut ctx = DisplayContext::new();
        ctx.add_hover(full(), Msg::Click("under"), 0);
        ctx.add_hover(Rect::new(0, 0, 4, 1), Msg::Click("over"), 1);

        assert_eq!(ctx.hover_at(1, 0), Some(&Msg::Click("over")));
        assert_eq!(ctx.hover_at(10, 3), Some(&Msg::Click("under")));
    }

    #[test]
    fn hover_respects_window_scope() {
        let mut ctx = DisplayContext::new();
        ctx.add_hover(full(), Msg::Click("under"), 0);
        drop(ctx.window(Rect::new(0, 0, 4, 4), 10));

        assert_eq!(ctx.hover_at(1, 1), None);
        assert_eq!(ctx.hover_at(10, 10), None);
    }
}
