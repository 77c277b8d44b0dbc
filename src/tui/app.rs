//! Application state.
//!
//! [`App`] holds only the selection (sheet, per-sheet group, hovered point)
//! and UI state. Chart data is never cached: [`App::view`] asks the
//! [`Dashboard`] for a fresh [`ChartView`] every time.

use gradeline_core::{ChartView, Dashboard, GradelineError, Result};
use ratatui::widgets::ListState;
use std::collections::HashMap;

use super::keymap::Keymap;

/// Which pane receives navigation keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Chart,
}

/// Modal state. Popups take over input until closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Group dropdown is open.
    GroupPicker,
    DataTable,
    Help,
}

pub struct App {
    pub dashboard: Dashboard,
    pub title: String,
    pub sheet_index: usize,
    /// Group last chosen on each sheet during this session.
    group_by_sheet: HashMap<String, String>,
    pub focus: Focus,
    pub mode: Mode,
    /// Highlighted entry in the group dropdown.
    pub picker_index: usize,
    /// Category position of the hovered point.
    pub hover: usize,
    pub table_scroll: usize,
    pub help_scroll: usize,
    pub keymap: Keymap,
    pub status_message: String,
    pub sidebar_state: ListState,
}

impl App {
    /// Create the app with an initial selection.
    ///
    /// `sheet` must exist; `group`, when given, must exist on that sheet.
    pub fn with_selection(
        dashboard: Dashboard,
        title: String,
        keymap: Keymap,
        sheet: &str,
        group: Option<&str>,
    ) -> Result<Self> {
        let sheet_index = dashboard
            .sheet_names()
            .iter()
            .position(|s| *s == sheet)
            .ok_or_else(|| GradelineError::SheetNotFound(sheet.to_string()))?;

        let mut group_by_sheet = HashMap::new();
        if let Some(g) = group {
            // Validates the group against the sheet.
            dashboard.view(sheet, Some(g))?;
            group_by_sheet.insert(sheet.to_string(), g.to_string());
        }

        let mut sidebar_state = ListState::default();
        sidebar_state.select(Some(sheet_index));

        Ok(App {
            dashboard,
            title,
            sheet_index,
            group_by_sheet,
            focus: Focus::Chart,
            mode: Mode::Normal,
            picker_index: 0,
            hover: 0,
            table_scroll: 0,
            help_scroll: 0,
            keymap,
            status_message: String::new(),
            sidebar_state,
        })
    }

    pub fn sheet_names(&self) -> Vec<String> {
        self.dashboard
            .sheet_names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    pub fn current_sheet(&self) -> String {
        self.sheet_names()
            .get(self.sheet_index)
            .cloned()
            .unwrap_or_default()
    }

    /// Group remembered for the current sheet, if one was picked.
    pub fn selected_group(&self) -> Option<&str> {
        self.group_by_sheet
            .get(&self.current_sheet())
            .map(String::as_str)
    }

    /// Fresh view of the current selection.
    pub fn view(&self) -> Result<ChartView> {
        self.dashboard
            .view(&self.current_sheet(), self.selected_group())
    }

    pub fn groups(&self) -> Vec<String> {
        self.dashboard
            .groups(&self.current_sheet())
            .unwrap_or_default()
    }

    pub fn select_sheet(&mut self, index: usize) {
        let count = self.dashboard.workbook.sheets.len();
        if index >= count || index == self.sheet_index {
            return;
        }
        self.sheet_index = index;
        self.sidebar_state.select(Some(index));
        self.hover = 0;
        self.table_scroll = 0;
        self.status_message.clear();
        tracing::debug!(sheet = %self.current_sheet(), "sheet selected");
    }

    pub fn move_sheet(&mut self, delta: isize) {
        let count = self.dashboard.workbook.sheets.len();
        if count == 0 {
            return;
        }
        let target = self
            .sheet_index
            .saturating_add_signed(delta)
            .min(count - 1);
        self.select_sheet(target);
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Chart,
            Focus::Chart => Focus::Sidebar,
        };
    }

    pub fn open_picker(&mut self) {
        let groups = self.groups();
        if groups.is_empty() {
            self.status_message = "No groups in this sheet".to_string();
            return;
        }
        let current = self
            .view()
            .ok()
            .and_then(|v| v.group)
            .and_then(|g| groups.iter().position(|x| *x == g));
        self.picker_index = current.unwrap_or(0);
        self.mode = Mode::GroupPicker;
    }

    pub fn move_picker(&mut self, delta: isize) {
        let count = self.groups().len();
        if count == 0 {
            return;
        }
        self.picker_index = self.picker_index.saturating_add_signed(delta).min(count - 1);
    }

    pub fn picker_to(&mut self, last: bool) {
        self.picker_index = if last {
            self.groups().len().saturating_sub(1)
        } else {
            0
        };
    }

    /// Select the highlighted group and close the dropdown.
    pub fn confirm_picker(&mut self) {
        if let Some(group) = self.groups().get(self.picker_index).cloned() {
            self.select_group(&group);
        }
        self.mode = Mode::Normal;
    }

    pub fn select_group(&mut self, group: &str) {
        let sheet = self.current_sheet();
        tracing::debug!(sheet = %sheet, group, "group selected");
        self.group_by_sheet.insert(sheet, group.to_string());
        self.hover = 0;
        self.table_scroll = 0;
        self.status_message.clear();
    }

    fn point_count(&self) -> usize {
        self.view().map(|v| v.rows.len()).unwrap_or(0)
    }

    pub fn move_hover(&mut self, delta: isize) {
        let count = self.point_count();
        if count == 0 {
            self.hover = 0;
            return;
        }
        self.hover = self.hover.saturating_add_signed(delta).min(count - 1);
    }

    pub fn hover_to(&mut self, last: bool) {
        self.hover = if last {
            self.point_count().saturating_sub(1)
        } else {
            0
        };
    }

    pub fn toggle_data_table(&mut self) {
        self.mode = match self.mode {
            Mode::DataTable => Mode::Normal,
            _ => {
                self.table_scroll = 0;
                Mode::DataTable
            }
        };
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            Mode::Help => Mode::Normal,
            _ => {
                self.help_scroll = 0;
                Mode::Help
            }
        };
    }

    pub fn close_modal(&mut self) {
        self.mode = Mode::Normal;
    }

    pub fn scroll_table_by(&mut self, delta: isize) {
        let max = self.point_count().saturating_sub(1);
        self.table_scroll = self.table_scroll.saturating_add_signed(delta).min(max);
    }

    pub fn scroll_help_by(&mut self, delta: isize) {
        let max = super::help::help_lines(&self.keymap).len().saturating_sub(1);
        self.help_scroll = self.help_scroll.saturating_add_signed(delta).min(max);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use gradeline_core::{AxisLabels, ReshapeOptions, Sheet, Workbook};
    use gradeline_engine::engine::RawCell;

    fn t(s: &str) -> RawCell {
        RawCell::new_text(s)
    }

    pub(crate) fn sample_app() -> App {
        let geral = Sheet::from_grid(
            "Geral",
            vec![
                vec![t("Regional"), t("1ª"), t("2ª"), t("3ª")],
                vec![t("Sul"), t("8,5"), t("9,0"), t("9,5")],
                vec![t("Norte"), t("7"), t("6"), t("")],
                vec![t("Presença"), t("90%"), t("95%"), t("97%")],
            ],
        );
        let capital = Sheet::from_grid(
            "Capital",
            vec![
                vec![t("Regional"), t("1ª"), t("2ª")],
                vec![t("Centro"), t("5"), t("6")],
                vec![t("Leste"), t("4"), t("4")],
            ],
        );
        let options = ReshapeOptions {
            group_label: "Regional".to_string(),
            ..ReshapeOptions::default()
        };
        let dashboard = Dashboard::new(
            Workbook::new(vec![geral, capital]),
            options,
            AxisLabels::default(),
        )
        .unwrap();
        App::with_selection(dashboard, "Notas".to_string(), Keymap::Vim, "Geral", None).unwrap()
    }

    #[test]
    fn starts_on_requested_sheet_with_first_group() {
        let app = sample_app();
        assert_eq!(app.current_sheet(), "Geral");
        assert_eq!(app.selected_group(), None);
        let view = app.view().unwrap();
        assert_eq!(view.group.as_deref(), Some("Norte"));
        assert_eq!(view.rows.len(), 3);
    }

    #[test]
    fn rejects_unknown_selection() {
        let app = sample_app();
        let dashboard = app.dashboard.clone();
        assert!(App::with_selection(dashboard.clone(), String::new(), Keymap::Vim, "Nope", None).is_err());
        assert!(
            App::with_selection(dashboard, String::new(), Keymap::Vim, "Geral", Some("Oeste")).is_err()
        );
    }

    #[test]
    fn group_choice_is_remembered_per_sheet() {
        let mut app = sample_app();
        app.select_group("Sul");
        app.move_sheet(1);
        assert_eq!(app.current_sheet(), "Capital");
        assert_eq!(app.view().unwrap().group.as_deref(), Some("Centro"));

        app.move_sheet(-1);
        assert_eq!(app.view().unwrap().group.as_deref(), Some("Sul"));
    }

    #[test]
    fn sheet_movement_is_clamped() {
        let mut app = sample_app();
        app.move_sheet(-3);
        assert_eq!(app.sheet_index, 0);
        app.move_sheet(5);
        assert_eq!(app.sheet_index, 1);
        assert_eq!(app.sidebar_state.selected(), Some(1));
    }

    #[test]
    fn picker_starts_on_current_group() {
        let mut app = sample_app();
        app.select_group("Sul");
        app.open_picker();
        assert_eq!(app.mode, Mode::GroupPicker);
        assert_eq!(app.picker_index, 1);

        app.move_picker(-1);
        app.confirm_picker();
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.selected_group(), Some("Norte"));
    }

    #[test]
    fn hover_stays_on_a_category() {
        let mut app = sample_app();
        app.move_hover(10);
        assert_eq!(app.hover, 2);
        app.move_hover(-1);
        assert_eq!(app.hover, 1);
        app.hover_to(false);
        assert_eq!(app.hover, 0);

        app.hover_to(true);
        app.move_sheet(1);
        assert_eq!(app.hover, 0);
    }

    #[test]
    fn modals_toggle() {
        let mut app = sample_app();
        app.toggle_data_table();
        assert_eq!(app.mode, Mode::DataTable);
        app.toggle_data_table();
        assert_eq!(app.mode, Mode::Normal);
        app.toggle_help();
        assert_eq!(app.mode, Mode::Help);
        app.close_modal();
        assert_eq!(app.mode, Mode::Normal);
    }
}
