use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use std::io;

use super::actions::{ApplyResult, apply_action};
use super::app::{App, Focus, Mode};
use super::keymap::translate;
use super::ui;

pub(crate) fn handle_mouse_event(app: &mut App, terminal_area: Rect, mouse: MouseEvent) {
    if app.mode != Mode::Normal {
        return;
    }
    let areas = ui::split_areas(terminal_area);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = ui::sheet_at(app, areas.sidebar, mouse.column, mouse.row) {
                app.focus = Focus::Sidebar;
                app.select_sheet(index);
            }
        }
        MouseEventKind::ScrollDown => app.move_hover(1),
        MouseEventKind::ScrollUp => app.move_hover(-1),
        _ => {}
    }
}

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                // Only process key press events (Windows reports Press + Release)
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = translate(&app.keymap, app.mode, key)
                    && apply_action(app, action) == ApplyResult::Quit
                {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse_event(app, Rect::new(0, 0, size.width, size.height), mouse);
            }
            _ => {}
        }
    }
}
