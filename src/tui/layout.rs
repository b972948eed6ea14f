//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::runtime::{App, FIELDS, Field};
use super::style;
use crate::layout::{BATTERY_GRID, GridLayout, PANEL_GRID};

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(12),   // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // result
            Constraint::Length(6), // balance
            Constraint::Min(4),    // scene
        ])
        .split(body[1]);

    render_header(frame, app, chunks[0]);
    render_form(frame, app, body[0]);
    render_result(frame, app, right[0]);
    render_balance(frame, app, right[1]);
    render_scene(frame, app, right[2]);
    render_footer(frame, chunks[2]);
}

/// Header bar: title and active preset.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " HOUSE-ENERGY-SIM ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" preset: "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Editable rows: counts, then one checkbox + hours row per appliance.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = FIELDS
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let text = match *field {
                Field::Panels => format!(" Solar panels   {:>6}", app.input.solar_panel_count),
                Field::Batteries => format!(" Batteries      {:>6}", app.input.battery_count),
                Field::Load(appliance) => {
                    let setting = app.input.load(appliance);
                    let mark = if setting.enabled() { "x" } else { " " };
                    format!(
                        " [{mark}] {:<16} {:>4.1} h  ({:.1} kW)",
                        appliance.label(),
                        setting.daily_hours(),
                        appliance.power_kw(),
                    )
                }
            };
            let row_style = if i == app.selected {
                Style::default()
                    .bg(style::SELECTED_BG)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(text, row_style))
        })
        .collect();

    let block = Block::default().title(" Household ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Estimate text and star glyphs.
fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let result = app.result();
    let color = style::rating_color(result.star_rating);
    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", result.result_text),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  {}", result.star_rating.glyphs()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ];
    let block = Block::default().title(" Result ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Daily energy budget.
fn render_balance(frame: &mut Frame, app: &App, area: Rect) {
    let b = &app.report.balance;
    let lines = vec![
        Line::from(format!("  demand     {:>8.2} kWh/day", b.demand_kwh)),
        Line::from(format!("  solar      {:>8.2} kWh/day", b.generation_kwh)),
        Line::from(Span::styled(
            format!("  net        {:>8.2} kWh/day", b.net_kwh),
            Style::default().fg(style::net_color(b.net_kwh)),
        )),
        Line::from(format!("  storage    {:>8.2} kWh", b.storage_kwh)),
    ];
    let block = Block::default().title(" Energy Balance ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Roof panels and battery bank drawn from their placement grids.
fn render_scene(frame: &mut Frame, app: &App, area: Rect) {
    // borders plus one title line per grid
    let budget = usize::from(area.height.saturating_sub(4));
    let panel_budget = budget.div_ceil(2);
    let battery_budget = budget - panel_budget;

    let mut lines = vec![Line::from(format!(
        " Roof: {} panel(s)",
        app.input.solar_panel_count
    ))];
    lines.extend(grid_lines(
        &PANEL_GRID,
        app.input.solar_panel_count,
        panel_budget,
        "▦",
        style::PANEL_COLOR,
    ));
    lines.push(Line::from(format!(
        " Battery bank: {} unit(s)",
        app.input.battery_count
    )));
    lines.extend(grid_lines(
        &BATTERY_GRID,
        app.input.battery_count,
        battery_budget,
        "▮",
        style::BATTERY_COLOR,
    ));

    let block = Block::default().title(" Scene ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// One line per grid row, at most `max_rows` lines.
fn grid_lines(
    grid: &GridLayout,
    count: u32,
    max_rows: usize,
    glyph: &str,
    color: Color,
) -> Vec<Line<'static>> {
    if max_rows == 0 || count == 0 {
        return Vec::new();
    }
    let total_rows = grid.rows(count);
    let shown_rows = total_rows.min(u32::try_from(max_rows).unwrap_or(u32::MAX));
    // the last visible line reports hidden rows instead of drawing one
    let drawn_rows = if shown_rows < total_rows {
        shown_rows - 1
    } else {
        shown_rows
    };
    let visible = count.min(drawn_rows.saturating_mul(grid.per_row));

    let mut rows: Vec<String> = vec![String::from("  "); drawn_rows as usize];
    for p in grid.place(visible) {
        let row = &mut rows[p.row as usize];
        row.push_str(glyph);
        row.push(' ');
    }

    let mut lines: Vec<Line<'static>> = rows
        .into_iter()
        .map(|r| Line::from(Span::styled(r, Style::default().fg(color))))
        .collect();
    if drawn_rows < total_rows {
        lines.push(Line::from(format!(
            "  … {} more row(s)",
            total_rows - drawn_rows
        )));
    }
    lines
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  ↑/↓:Select  ←/→:Adjust  Space:Toggle  1-5:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_lines_fit_all_rows() {
        let lines = grid_lines(&BATTERY_GRID, 7, 5, "▮", Color::Green);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn grid_lines_summarize_hidden_rows() {
        // 50 panels = 5 rows, only 3 lines available
        let lines = grid_lines(&PANEL_GRID, 50, 3, "▦", Color::Cyan);
        assert_eq!(lines.len(), 3);
        let last: String = lines[2].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(last.contains("3 more row(s)"));
    }

    #[test]
    fn grid_lines_empty_when_nothing_to_draw() {
        assert!(grid_lines(&PANEL_GRID, 0, 5, "▦", Color::Cyan).is_empty());
        assert!(grid_lines(&PANEL_GRID, 10, 0, "▦", Color::Cyan).is_empty());
    }
}
