use super::app::{App, Focus, Mode};
use super::keymap::Action;

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyResult {
    Continue,
    Quit,
}

const PAGE_SIZE: isize = 10;

/// Apply an action to the application state.
///
/// Returns `ApplyResult::Quit` if the application should exit.
pub fn apply_action(app: &mut App, action: Action) -> ApplyResult {
    match app.mode {
        Mode::Normal => apply_normal(app, action),
        Mode::GroupPicker => {
            match action {
                Action::Up => app.move_picker(-1),
                Action::Down => app.move_picker(1),
                Action::Page(n) => app.move_picker(n as isize * PAGE_SIZE),
                Action::First => app.picker_to(false),
                Action::Last => app.picker_to(true),
                Action::Confirm => app.confirm_picker(),
                Action::Cancel => app.close_modal(),
                _ => {}
            }
            ApplyResult::Continue
        }
        Mode::DataTable => {
            match action {
                Action::Up => app.scroll_table_by(-1),
                Action::Down => app.scroll_table_by(1),
                Action::Page(n) => app.scroll_table_by(n as isize * PAGE_SIZE),
                Action::First => app.table_scroll = 0,
                Action::Last => app.scroll_table_by(isize::MAX),
                Action::Cancel | Action::ToggleData => app.close_modal(),
                _ => {}
            }
            ApplyResult::Continue
        }
        Mode::Help => {
            match action {
                Action::Up => app.scroll_help_by(-1),
                Action::Down => app.scroll_help_by(1),
                Action::Page(n) => app.scroll_help_by(n as isize * PAGE_SIZE),
                Action::First => app.help_scroll = 0,
                Action::Last => app.scroll_help_by(isize::MAX),
                Action::Cancel | Action::ToggleHelp => app.close_modal(),
                _ => {}
            }
            ApplyResult::Continue
        }
    }
}

fn apply_normal(app: &mut App, action: Action) -> ApplyResult {
    match action {
        Action::Quit | Action::Cancel => return ApplyResult::Quit,
        Action::ToggleFocus => app.toggle_focus(),
        Action::OpenPicker => app.open_picker(),
        Action::ToggleData => app.toggle_data_table(),
        Action::ToggleHelp => app.toggle_help(),
        Action::Confirm => {}
        Action::First | Action::Last if app.focus == Focus::Sidebar => {
            let count = app.dashboard.workbook.sheets.len();
            let target = if action == Action::Last {
                count.saturating_sub(1)
            } else {
                0
            };
            app.select_sheet(target);
        }
        Action::Up => app.move_sheet(-1),
        Action::Down => app.move_sheet(1),
        Action::Page(n) => app.move_sheet(n as isize * PAGE_SIZE),
        Action::Left => app.move_hover(-1),
        Action::Right => app.move_hover(1),
        Action::First => app.hover_to(false),
        Action::Last => app.hover_to(true),
    }
    ApplyResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::sample_app;

    #[test]
    fn quit_from_dashboard_only() {
        let mut app = sample_app();
        app.toggle_help();
        assert_eq!(apply_action(&mut app, Action::Cancel), ApplyResult::Continue);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(apply_action(&mut app, Action::Cancel), ApplyResult::Quit);
        assert_eq!(apply_action(&mut app, Action::Quit), ApplyResult::Quit);
    }

    #[test]
    fn picker_flow_selects_group() {
        let mut app = sample_app();
        apply_action(&mut app, Action::OpenPicker);
        assert_eq!(app.mode, Mode::GroupPicker);
        apply_action(&mut app, Action::Down);
        apply_action(&mut app, Action::Confirm);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.selected_group(), Some("Sul"));
    }

    #[test]
    fn picker_cancel_keeps_group() {
        let mut app = sample_app();
        apply_action(&mut app, Action::OpenPicker);
        apply_action(&mut app, Action::Last);
        apply_action(&mut app, Action::Cancel);
        assert_eq!(app.selected_group(), None);
    }

    #[test]
    fn sidebar_focus_moves_sheets() {
        let mut app = sample_app();
        apply_action(&mut app, Action::ToggleFocus);
        assert_eq!(app.focus, Focus::Sidebar);
        apply_action(&mut app, Action::Last);
        assert_eq!(app.current_sheet(), "Capital");
        apply_action(&mut app, Action::Up);
        assert_eq!(app.current_sheet(), "Geral");
    }

    #[test]
    fn chart_focus_moves_hover() {
        let mut app = sample_app();
        assert_eq!(app.focus, Focus::Chart);
        apply_action(&mut app, Action::Right);
        apply_action(&mut app, Action::Right);
        assert_eq!(app.hover, 2);
        apply_action(&mut app, Action::First);
        assert_eq!(app.hover, 0);
        apply_action(&mut app, Action::Down);
        assert_eq!(app.current_sheet(), "Capital");
    }
}
