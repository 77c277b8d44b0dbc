//! UI rendering

use super::app::{App, Focus, Mode};
use super::help::{ABOUT_HEADING, help_lines};
use gradeline_core::ChartView;
use gradeline_engine::engine::{format_score, format_signed};
use gradeline_engine::plot::PlotData;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};
use textplots::{AxisBuilder, Chart, LabelBuilder, LabelFormat, LineStyle, Plot, Shape};

pub(crate) const TITLE_BAR_HEIGHT: u16 = 3;
pub(crate) const STATUS_BAR_HEIGHT: u16 = 1;
pub(crate) const SIDEBAR_PERCENT: u16 = 20;
const TOOLTIP_HEIGHT: u16 = 6;
const MAX_LABEL_STRIP_HEIGHT: u16 = 8;
const CHART_MIN_HEIGHT: u16 = 8;

/// Top-level screen regions.
pub(crate) struct Areas {
    pub title: Rect,
    pub sidebar: Rect,
    pub main: Rect,
    pub status: Rect,
}

pub(crate) fn split_areas(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Min(CHART_MIN_HEIGHT),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(SIDEBAR_PERCENT),
            Constraint::Percentage(100 - SIDEBAR_PERCENT),
        ])
        .split(rows[1]);
    Areas {
        title: rows[0],
        sidebar: cols[0],
        main: cols[1],
        status: rows[2],
    }
}

/// Sheet index under a mouse position in the sidebar.
pub(crate) fn sheet_at(app: &App, sidebar: Rect, mouse_col: u16, mouse_row: u16) -> Option<usize> {
    if sidebar.width < 3 || sidebar.height < 3 {
        return None;
    }
    let inner_x = sidebar.x.saturating_add(1);
    let inner_y = sidebar.y.saturating_add(1);
    let inner_right = inner_x.saturating_add(sidebar.width.saturating_sub(2));
    let inner_bottom = inner_y.saturating_add(sidebar.height.saturating_sub(2));
    if mouse_col < inner_x || mouse_col >= inner_right || mouse_row < inner_y || mouse_row >= inner_bottom {
        return None;
    }

    let index = app.sidebar_state.offset() + (mouse_row - inner_y) as usize;
    (index < app.dashboard.workbook.sheets.len()).then_some(index)
}

/// Draw the application UI
pub fn draw(f: &mut Frame, app: &mut App) {
    let areas = split_areas(f.area());

    draw_title_bar(f, app, areas.title);
    draw_sidebar(f, app, areas.sidebar);

    let view = app.view();
    match &view {
        Ok(view) => draw_main(f, app, view, areas.main),
        Err(err) => {
            let paragraph = Paragraph::new(format!("Error: {}", err))
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(paragraph, areas.main);
        }
    }
    draw_status_bar(f, app, areas.status);

    match app.mode {
        Mode::Normal => {}
        Mode::GroupPicker => draw_group_picker(f, app),
        Mode::DataTable => {
            if let Ok(view) = &view {
                draw_data_table(f, app, view);
            }
        }
        Mode::Help => draw_help_modal(f, app),
    }
}

fn focus_color(app: &App, focus: Focus) -> Color {
    if app.focus == focus && app.mode == Mode::Normal {
        Color::Cyan
    } else {
        Color::White
    }
}

fn draw_title_bar(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn draw_sidebar(f: &mut Frame, app: &mut App, area: Rect) {
    let items: Vec<ListItem> = app
        .sheet_names()
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let marker = if i == app.sheet_index { "(•)" } else { "( )" };
            ListItem::new(format!("{} {}", marker, name))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Planilhas ")
                .border_style(Style::default().fg(focus_color(app, Focus::Sidebar))),
        )
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    f.render_stateful_widget(list, area, &mut app.sidebar_state);
}

fn draw_main(f: &mut Frame, app: &App, view: &ChartView, area: Rect) {
    let label_height = (view.rows.len() as u16)
        .saturating_add(2)
        .min(MAX_LABEL_STRIP_HEIGHT);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(CHART_MIN_HEIGHT),
            Constraint::Length(label_height),
            Constraint::Length(TOOLTIP_HEIGHT),
        ])
        .split(area);

    let subheader = Paragraph::new(Line::from(Span::styled(
        view.sheet.clone(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(subheader, chunks[0]);

    draw_group_selector(f, app, view, chunks[1]);
    draw_chart(f, app, view, chunks[2]);
    draw_label_strip(f, app, view, chunks[3]);
    draw_tooltip(f, app, view, chunks[4]);
}

fn draw_group_selector(f: &mut Frame, app: &App, view: &ChartView, area: Rect) {
    let current = view.group.as_deref().unwrap_or("—");
    let line = Line::from(vec![
        Span::raw(format!("{}: ", view.group_label)),
        Span::styled(
            format!("[ {} ▾ ]", current),
            Style::default().fg(focus_color(app, Focus::Chart)),
        ),
        Span::styled(
            format!("  ({} opções)", view.groups.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_chart(f: &mut Frame, app: &App, view: &ChartView, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} × {} ", view.axis.category, view.axis.value))
        .border_style(Style::default().fg(focus_color(app, Focus::Chart)));

    let inner_width = area.width.saturating_sub(2);
    let inner_height = area.height.saturating_sub(2);

    // textplots uses a Braille canvas where one terminal character is 2x4 points.
    let plot_width_points = (inner_width as u32).saturating_mul(2);
    let has_warnings = view.plot.as_ref().is_ok_and(|d| !d.warnings.is_empty());
    let plot_height_chars = inner_height.saturating_sub(if has_warnings { 2 } else { 1 });
    let plot_height_points = (plot_height_chars as u32).saturating_mul(4);

    let content = if plot_width_points < 32 || plot_height_points < 3 {
        "Terminal too small for plot".to_string()
    } else {
        match &view.plot {
            Ok(data) => {
                let mut parts = vec![render_textplots(
                    data,
                    Some(app.hover),
                    plot_width_points,
                    plot_height_points,
                )];
                if !data.warnings.is_empty() {
                    parts.push(format!("Warning: {}", data.warnings.join("; ")));
                }
                parts.join("\n")
            }
            Err(e) => e.clone(),
        }
    };

    f.render_widget(Paragraph::new(content).block(block), area);
}

/// Render plot data to a string using textplots.
///
/// Each segment becomes a line; a single-point segment is drawn as a dot.
/// The hovered point gets a vertical guide down to the x axis.
pub(crate) fn render_textplots(data: &PlotData, hover: Option<usize>, width: u32, height: u32) -> String {
    let (xmin, xmax) = data.x_range;
    let (ymin, ymax) = data.y_range;
    let span_x = xmax - xmin;
    let span_y = ymax - ymin;

    // Shift points so minimums map to 0 (textplots draws axes at x=0, y=0)
    let shifted: Vec<Vec<(f32, f32)>> = data
        .segments
        .iter()
        .map(|seg| seg.iter().map(|(x, y)| (x - xmin, y - ymin)).collect())
        .collect();
    let guide: Vec<(f32, f32)> = hover
        .and_then(|i| data.point_at(i))
        .map(|(x, y)| vec![(x - xmin, 0.0), (x - xmin, y - ymin)])
        .unwrap_or_default();

    let mut shapes: Vec<Shape> = shifted
        .iter()
        .map(|seg| {
            if seg.len() == 1 {
                Shape::Points(seg)
            } else {
                Shape::Lines(seg)
            }
        })
        .collect();
    if !guide.is_empty() {
        shapes.push(Shape::Lines(&guide));
    }

    let axis_data = data.clone();
    let mut chart = Chart::new_with_y_range(width, height, 0.0, span_x, 0.0, span_y);
    let mut chart = chart
        .x_label_format(LabelFormat::Custom(Box::new(move |v| {
            axis_data.category_at(v + xmin).unwrap_or("").to_string()
        })))
        .y_label_format(LabelFormat::Custom(Box::new(move |v| {
            format!("{:.1}", v + ymin)
        })))
        .x_axis_style(LineStyle::Solid)
        .y_axis_style(LineStyle::Solid);
    for shape in &shapes {
        chart = chart.lineplot(shape);
    }
    chart.borders();
    chart.axis();
    chart.figures();
    chart.frame()
}

fn draw_label_strip(f: &mut Frame, app: &App, view: &ChartView, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = if visible > 0 && app.hover >= visible {
        app.hover + 1 - visible
    } else {
        0
    };

    let lines: Vec<Line> = view
        .rows
        .iter()
        .enumerate()
        .skip(start)
        .map(|(i, row)| {
            let style = if i == app.hover {
                Style::default().fg(Color::Black).bg(Color::Cyan)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::styled(if i == app.hover { "▶ " } else { "  " }, style),
                Span::styled(format!("{}: {}", row.category_label, row.label), style),
            ])
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title(" Rótulos ");
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_tooltip(f: &mut Frame, app: &App, view: &ChartView, area: Rect) {
    let lines: Vec<Line> = match view.rows.get(app.hover) {
        Some(row) => row
            .tooltip
            .lines()
            .enumerate()
            .map(|(i, text)| {
                let style = if i == 0 {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(text.to_string(), style))
            })
            .collect(),
        None => vec![Line::from("")],
    };
    let block = Block::default().borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

fn draw_group_picker(f: &mut Frame, app: &App) {
    let area = centered_rect(40, 50, f.area());
    let modal_style = Style::default().fg(Color::White).bg(Color::Black);

    let items: Vec<ListItem> = app.groups().into_iter().map(ListItem::new).collect();
    let title = app
        .view()
        .map(|v| format!(" {} ", v.group_label))
        .unwrap_or_default();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Cyan))
                .style(modal_style),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(app.picker_index));

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_data_table(f: &mut Frame, app: &App, view: &ChartView) {
    let area = centered_rect(80, 70, f.area());
    let modal_style = Style::default().fg(Color::White).bg(Color::Black);
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let header = Row::new(vec![
        Cell::from(view.group_label.clone()),
        Cell::from(view.axis.category.clone()),
        Cell::from(view.axis.value.clone()),
        Cell::from("Delta"),
        Cell::from("Delta %"),
    ])
    .style(header_style);

    let rows: Vec<Row> = view
        .rows
        .iter()
        .skip(app.table_scroll)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.group.clone()),
                Cell::from(r.category_label.clone()),
                Cell::from(format_score(r.value)),
                Cell::from(format_signed(r.delta)),
                Cell::from(format_signed(r.delta_pct)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(28),
        Constraint::Percentage(24),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
        Constraint::Percentage(16),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Dados ")
                .border_style(Style::default().fg(Color::Cyan))
                .style(modal_style),
        )
        .style(modal_style);

    f.render_widget(Clear, area);
    f.render_widget(table, area);
}

fn draw_help_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, f.area());
    let modal_style = Style::default().fg(Color::White).bg(Color::Black);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Help [{}] ", app.keymap.name()))
        .border_style(Style::default().fg(Color::Green))
        .style(modal_style);

    let lines: Vec<Line> = help_lines(&app.keymap)
        .into_iter()
        .skip(app.help_scroll)
        .map(|text| {
            let style = if text == ABOUT_HEADING {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if text.starts_with("  ") || text.is_empty() {
                Style::default().fg(Color::White)
            } else {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(modal_style)
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let file_info = app
        .dashboard
        .workbook
        .path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "[sem arquivo]".to_string());

    let status = if !app.status_message.is_empty() {
        app.status_message.clone()
    } else {
        format!(
            "{}  |  [{}]  |  {}",
            file_info,
            app.keymap.name(),
            app.keymap.status_hint()
        )
    };

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else if !app.status_message.is_empty() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    f.render_widget(Paragraph::new(Line::from(Span::styled(status, style))), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::sample_app;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn dashboard_shows_title_sheets_and_labels() {
        let mut app = sample_app();
        let text = screen_text(&mut app);
        assert!(text.contains("Notas"));
        assert!(text.contains("(•) Geral"));
        assert!(text.contains("( ) Capital"));
        assert!(text.contains("[ Norte ▾ ]"));
        assert!(text.contains("Nota 6.00 (Δ -1.00; -14.29%)"));
        assert!(text.contains("Variação Percentual: —%"));
    }

    #[test]
    fn hovered_point_drives_tooltip() {
        let mut app = sample_app();
        app.move_hover(1);
        let text = screen_text(&mut app);
        assert!(text.contains("Variação Absoluta: -1.00"));
    }

    #[test]
    fn popups_render_over_dashboard() {
        let mut app = sample_app();
        app.open_picker();
        assert!(screen_text(&mut app).contains("▶ Norte"));

        app.close_modal();
        app.toggle_data_table();
        assert!(screen_text(&mut app).contains("Dados"));

        app.close_modal();
        app.toggle_help();
        assert!(screen_text(&mut app).contains(ABOUT_HEADING));
    }

    #[test]
    fn sidebar_hit_test() {
        let app = sample_app();
        let areas = split_areas(Rect::new(0, 0, 120, 40));
        let sidebar = areas.sidebar;
        assert_eq!(sheet_at(&app, sidebar, sidebar.x + 2, sidebar.y + 1), Some(0));
        assert_eq!(sheet_at(&app, sidebar, sidebar.x + 2, sidebar.y + 2), Some(1));
        assert_eq!(sheet_at(&app, sidebar, sidebar.x + 2, sidebar.y + 3), None);
        assert_eq!(sheet_at(&app, sidebar, sidebar.x, sidebar.y + 1), None);
    }

    #[test]
    fn textplots_output_has_category_axis() {
        let app = sample_app();
        let view = app.view().unwrap();
        let data = view.plot.unwrap();
        let out = render_textplots(&data, Some(0), 120, 40);
        assert!(!out.is_empty());
        assert!(out.lines().count() > 5);
    }
}
