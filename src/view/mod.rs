//! TUI rendering and the terminal event loop.
//!
//! Each frame is declared into a [`DisplayContext`], composited into the
//! terminal buffer, and kept until the next frame so pointer events can be
//! routed against what is on screen.

pub mod details;
pub mod frame;
pub mod layout;
pub mod list_pane;
pub mod menu;
pub mod status;
pub mod styles;

pub use details::render_details_pane;
pub use layout::{popup_rect, FrameLayout};
pub use list_pane::render_list_pane;
pub use menu::{render_menu, MENU_ITEM_Z, MENU_Z};
pub use status::render_status;
pub use styles::{ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::layout::LayoutBox;
use crate::model::AppError;
use crate::render::{DisplayContext, MouseResolution};
use crate::source::InputSource;
use crate::state::{action_for_key, update, Action, AppState};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, info};

/// Layer of the divider's drag region, above the panes it separates.
const DIVIDER_Z: i32 = 10;

/// Declare one full frame into `ctx`.
///
/// Updates the scroll state kept in `state` (list viewport, clamped
/// details scroll).
pub fn render_frame(
    ctx: &mut DisplayContext<Action>,
    state: &mut AppState,
    palette: &Palette,
    area: Rect,
) {
    let layout = FrameLayout::compute(area, state.split_percent);
    render_list_pane(ctx, state, palette, layout.list);
    render_divider(ctx, state, palette, layout.divider);
    render_details_pane(ctx, state, palette, layout.details);
    render_status(ctx, state, palette, layout.status);
    render_menu(ctx, state, palette, area);
}

fn render_divider(
    ctx: &mut DisplayContext<Action>,
    state: &AppState,
    palette: &Palette,
    area: LayoutBox,
) {
    let style = if state.drag.is_some() {
        palette.divider_active
    } else {
        palette.border
    };
    ctx.add_fill(area.rect, '│', style, 0);
    ctx.add_drag(area.rect, Action::BeginDividerDrag(0), DIVIDER_Z);
    ctx.add_hover(area.rect, Action::BeginDividerDrag(0), DIVIDER_Z);
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    /// Last rendered frame, used for routing pointer events.
    ctx: DisplayContext<Action>,
    key_bindings: KeyBindings,
    palette: Palette,
    tick_rate: Duration,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, capturing the
    /// mouse unless disabled in `config`.
    pub fn new(
        input_source: InputSource,
        config: &ResolvedConfig,
        colors: ColorConfig,
    ) -> Result<Self, AppError> {
        let label = input_source.label();
        let revisions = input_source.into_revisions();
        info!(source = %label, count = revisions.len(), "loaded revisions");

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        if config.mouse {
            stdout.execute(EnableMouseCapture)?;
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        let state = AppState::new(revisions)
            .with_config(config)
            .with_source_label(label);
        Ok(Self::with_terminal(
            terminal,
            state,
            Palette::new(colors, &config.palette),
            Duration::from_millis(config.tick_rate_ms),
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (q or Ctrl+C). Redraws after every
    /// handled event; idle ticks do nothing.
    pub fn run(&mut self) -> Result<(), AppError> {
        self.draw()?;
        while !self.state.should_quit {
            if event::poll(self.tick_rate)? {
                let event = event::read()?;
                self.handle_event(event);
                self.draw()?;
            }
        }
        Ok(())
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Build an app around an existing terminal.
    pub fn with_terminal(
        terminal: Terminal<B>,
        state: AppState,
        palette: Palette,
        tick_rate: Duration,
    ) -> Self {
        Self {
            terminal,
            state,
            ctx: DisplayContext::new(),
            key_bindings: KeyBindings::default(),
            palette,
            tick_rate,
        }
    }

    /// Current application state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The most recently rendered frame.
    pub fn context(&self) -> &DisplayContext<Action> {
        &self.ctx
    }

    /// The underlying terminal.
    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Dispatch one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }

    /// Handle a single keyboard event through the key bindings.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(key_action) = self.key_bindings.get(key) else {
            return;
        };
        if let Some(action) = action_for_key(&self.state, key_action) {
            update(&mut self.state, action);
        }
    }

    /// Handle a single mouse event.
    ///
    /// Divider drags, right clicks and hover tracking are handled here;
    /// everything else is routed through the last frame's interactions.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) if self.state.drag.is_some() => {
                let width = self.screen_width();
                update(&mut self.state, Action::DragDivider { x, width });
                return;
            }
            MouseEventKind::Up(MouseButton::Left) if self.state.drag.is_some() => {
                update(&mut self.state, Action::EndDrag);
                return;
            }
            MouseEventKind::Down(MouseButton::Right) => {
                if self.state.menu.is_some() {
                    update(&mut self.state, Action::CloseMenu);
                } else if let Some(Action::Select(index)) = self.ctx.hover_at(x, y).cloned() {
                    update(&mut self.state, Action::Select(index));
                    update(&mut self.state, Action::OpenMenu { x, y });
                }
                return;
            }
            MouseEventKind::Moved => {
                self.state.hover = self.ctx.hover_at(x, y).cloned();
                return;
            }
            _ => {}
        }

        match self.ctx.process_mouse_event(mouse) {
            MouseResolution::Message(action) => update(&mut self.state, action),
            MouseResolution::Captured => {}
            MouseResolution::Ignored => {
                let left_press = mouse.kind == MouseEventKind::Down(MouseButton::Left);
                if left_press && self.state.menu.is_some() {
                    update(&mut self.state, Action::CloseMenu);
                }
            }
        }
    }

    /// Render the current frame, replacing the routing state.
    pub fn draw(&mut self) -> Result<(), AppError> {
        self.ctx.clear();
        let Self {
            terminal,
            state,
            ctx,
            palette,
            ..
        } = self;
        terminal.draw(|frame| {
            let area = frame.area();
            render_frame(ctx, state, palette, area);
            ctx.render(frame.buffer_mut());
        })?;
        Ok(())
    }

    fn screen_width(&self) -> u16 {
        self.terminal.size().map_or(0, |size| size.width)
    }
}

/// Initialize and run the TUI application with an input source
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when setup or the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_source(
    input_source: InputSource,
    config: &ResolvedConfig,
    colors: ColorConfig,
) -> Result<(), AppError> {
    let mut app = match TuiApp::new(input_source, config, colors) {
        Ok(app) => app,
        Err(err) => {
            let _ = restore_terminal();
            return Err(err);
        }
    };

    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), AppError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
