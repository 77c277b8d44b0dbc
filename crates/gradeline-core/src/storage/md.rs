//! Markdown export of a chart view

use crate::document::ChartView;
use gradeline_engine::engine::{format_score, format_signed};
use gradeline_engine::plot::PlotData;
use std::io::Write;
use std::path::Path;

/// Characters per category on the ASCII chart's x axis.
const CATEGORY_STEP: usize = 6;
const CHART_HEIGHT: usize = 10;

/// Write a Markdown report for one view to a file.
pub fn write_markdown(path: &Path, title: &str, view: &ChartView) -> std::io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    render_markdown(&mut file, title, view)
}

/// Render a Markdown report: heading, score table, then an ASCII chart.
pub fn render_markdown<W: Write>(w: &mut W, title: &str, view: &ChartView) -> std::io::Result<()> {
    writeln!(w, "# {}", escape_markdown(title))?;
    writeln!(w)?;

    let Some(group) = view.group.as_deref() else {
        writeln!(w, "## {}", escape_markdown(&view.sheet))?;
        writeln!(w)?;
        writeln!(w, "*No groups in this sheet*")?;
        return Ok(());
    };

    writeln!(
        w,
        "## {} - {}",
        escape_markdown(&view.sheet),
        escape_markdown(group)
    )?;
    writeln!(w)?;

    writeln!(
        w,
        "| {} | {} | {} | Delta | Delta % | Rótulo |",
        escape_markdown(&view.group_label),
        escape_markdown(&view.axis.category),
        escape_markdown(&view.axis.value)
    )?;
    writeln!(w, "|---|---|---|---|---|---|")?;
    for row in &view.rows {
        let pct = if row.delta_pct.is_missing() {
            format_signed(row.delta_pct)
        } else {
            format!("{}%", format_signed(row.delta_pct))
        };
        writeln!(
            w,
            "| {} | {} | {} | {} | {} | {} |",
            escape_markdown(&row.group),
            escape_markdown(&row.category_label),
            format_score(row.value),
            format_signed(row.delta),
            pct,
            escape_markdown(&row.label)
        )?;
    }

    writeln!(w)?;
    writeln!(w, "```")?;
    match &view.plot {
        Ok(data) => {
            render_line_chart(w, data)?;
            for warning in &data.warnings {
                writeln!(w, "Note: {}", warning)?;
            }
        }
        Err(e) => writeln!(w, "Error rendering chart: {}", e)?,
    }
    writeln!(w, "```")?;

    Ok(())
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ").replace('\r', "")
}

/// Render a simple ASCII line chart, one column slot per category.
fn render_line_chart<W: Write>(w: &mut W, data: &PlotData) -> std::io::Result<()> {
    let width = data.categories.len() * CATEGORY_STEP;
    let (y_min, y_max) = data.y_range;
    let y_range = y_max - y_min;

    let mut grid = vec![vec![' '; width]; CHART_HEIGHT];
    for (x, y) in data.segments.iter().flatten() {
        let row = (((y - y_min) / y_range) * (CHART_HEIGHT - 1) as f32).round() as usize;
        let col = (*x as usize) * CATEGORY_STEP + CATEGORY_STEP / 2;
        if row < CHART_HEIGHT && col < width {
            grid[row][col] = '*';
        }
    }

    // Print from top to bottom
    for row in (0..CHART_HEIGHT).rev() {
        let y_val = y_min + (row as f32 / (CHART_HEIGHT - 1) as f32) * y_range;
        let line: String = grid[row].iter().collect();
        writeln!(w, "{:>8.2} |{}", y_val, line.trim_end())?;
    }

    // X-axis
    writeln!(w, "         +{}", "-".repeat(width))?;

    // X-axis labels, clipped to their slot
    let labels: String = data
        .categories
        .iter()
        .map(|c| {
            let clipped: String = c.chars().take(CATEGORY_STEP - 1).collect();
            format!("{:^width$}", clipped, width = CATEGORY_STEP)
        })
        .collect();
    writeln!(w, "          {}", labels.trim_end())?;

    Ok(())
}
