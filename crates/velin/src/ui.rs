use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, CursorFocus, Mode, RenderPlan};
use crate::config::Config;

/// Screen columns taken by the line-number gutter when it is enabled. The
/// controller's click mapping is configured with the same width.
pub const GUTTER_WIDTH: u16 = 5;

/// Draws one frame from the controller's render plan. Screen geometry,
/// colors and the physical cursor live here; the controller never draws.
pub fn draw(f: &mut Frame, app: &mut App, config: &Config) {
    let in_command_mode = app.mode() == Mode::Command;

    // Text area, status line, then (in command mode) suggestion + command
    // rows at the bottom of the screen.
    let mut constraints = vec![Constraint::Min(1), Constraint::Length(1)];
    if in_command_mode {
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
    }
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.size());

    let text_area = chunks[0];
    let plan = app.render_plan(text_area.height as usize);

    let content_area = draw_text(f, &plan, text_area, config);
    draw_status(f, &plan, chunks[1], config);

    let mut command_area = None;
    if in_command_mode {
        draw_suggestion(f, &plan, chunks[2], config);
        draw_command_line(f, &plan, chunks[3], config);
        command_area = Some(chunks[3]);
    }

    place_cursor(f, &plan, content_area, command_area);
}

/// Renders the visible buffer slice, with an optional line-number gutter.
/// Returns the area the text itself occupies.
fn draw_text(f: &mut Frame, plan: &RenderPlan, area: Rect, config: &Config) -> Rect {
    let content_area = if config.editor.line_numbers {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)])
            .split(area);

        let numbers: Vec<String> = (0..plan.lines.len())
            .map(|i| format!("{:4} ", plan.first_row + i + 1))
            .collect();
        let gutter =
            Paragraph::new(numbers.join("\n")).style(Style::default().fg(Color::DarkGray));
        f.render_widget(gutter, columns[0]);
        columns[1]
    } else {
        area
    };

    let text = Paragraph::new(plan.lines.join("\n"));
    f.render_widget(text, content_area);
    content_area
}

fn draw_status(f: &mut Frame, plan: &RenderPlan, area: Rect, config: &Config) {
    let theme = &config.theme;
    let style = if plan.status_is_error {
        Style::default()
            .fg(color(&theme.error_foreground))
            .bg(color(&theme.error_background))
    } else {
        Style::default()
            .fg(color(&theme.status_foreground))
            .bg(color(&theme.status_background))
    };

    let status = Paragraph::new(plan.status_text.clone()).style(style);
    f.render_widget(status, area);
}

fn draw_suggestion(f: &mut Frame, plan: &RenderPlan, area: Rect, config: &Config) {
    if let Some(suggestion) = plan.suggestion {
        let line = Paragraph::new(format!("→ {}", suggestion))
            .style(Style::default().fg(color(&config.theme.suggestion_foreground)));
        f.render_widget(line, area);
    }
}

fn draw_command_line(f: &mut Frame, plan: &RenderPlan, area: Rect, config: &Config) {
    let input = plan.command_line.unwrap_or_default();
    let line = Paragraph::new(input.to_string())
        .style(Style::default().fg(color(&config.theme.command_foreground)));
    f.render_widget(line, area);
}

fn place_cursor(f: &mut Frame, plan: &RenderPlan, text_area: Rect, command_area: Option<Rect>) {
    match plan.cursor {
        CursorFocus::Text { row, col } => {
            let x = text_area.x + (col as u16).min(text_area.width.saturating_sub(1));
            let y = text_area.y + (row as u16).min(text_area.height.saturating_sub(1));
            f.set_cursor(x, y);
        }
        CursorFocus::CommandLine { col } => {
            if let Some(area) = command_area {
                let x = area.x + (col as u16).min(area.width.saturating_sub(1));
                f.set_cursor(x, area.y);
            }
        }
    }
}

/// Resolves a configured color name; unknown names fall back to the
/// terminal default rather than failing the draw.
fn color(name: &str) -> Color {
    name.parse().unwrap_or(Color::Reset)
}
