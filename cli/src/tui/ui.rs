use doctrack_core::{
    definition_of, CreditRule,
    report::{TOTAL_CREDIT_CAP, TRAINING_CREDIT_CAP},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{App, InputMode, Pane};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress gauges
            Constraint::Min(8),    // Content
            Constraint::Length(1), // Advisory
            Constraint::Length(1), // Footer / input line
        ])
        .split(size);

    let header = Paragraph::new("DOCTORAL CREDITS")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    draw_gauges(f, app, main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(main_chunks[2]);

    draw_type_table(f, app, content_chunks[0]);
    draw_entry_table(f, app, content_chunks[1]);

    draw_advisory(f, app, main_chunks[3]);
    draw_footer(f, app, main_chunks[4]);
}

fn draw_gauges(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let report = &app.report;

    let training = Gauge::default()
        .block(
            Block::default()
                .title(" Training Credits ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if report.over_training_cap {
            Color::Red
        } else {
            Color::Blue
        }))
        .ratio(report.training_progress / 100.0)
        .label(format!(
            "{:.1}/{:.0} CD ({:.1}%)",
            report.training_credits, TRAINING_CREDIT_CAP, report.training_progress
        ));
    f.render_widget(training, halves[0]);

    let total = Gauge::default()
        .block(
            Block::default()
                .title(" Total Credits ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(report.total_progress / 100.0)
        .label(format!(
            "{:.1}/{:.0} CD ({:.1}%)",
            report.total_credits, TOTAL_CREDIT_CAP, report.total_progress
        ));
    f.render_widget(total, halves[1]);
}

fn draw_type_table(f: &mut Frame, app: &mut App, area: Rect) {
    let rows: Vec<Row> = app
        .summaries
        .iter()
        .map(|s| {
            let quota = match definition_of(s.kind).rule {
                CreditRule::HourBased { .. } => {
                    format!("{}h + {}h", s.classroom_total, s.autonomous_total)
                }
                CreditRule::DayBased { .. } => format!("{}d", s.days_total),
            };
            Row::new(vec![
                Span::styled(s.name, Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(quota),
                Span::raw(format!("{}", s.entry_count)),
                Span::styled(
                    format!("{:.1}", s.credits),
                    Style::default().fg(Color::Cyan),
                ),
            ])
        })
        .collect();

    let border_style = if app.focus == Pane::Types {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let table = Table::new(
        rows,
        [
            Constraint::Min(20),    // Name
            Constraint::Length(14), // Logged quota
            Constraint::Length(3),  // Entries
            Constraint::Length(5),  // Credits
        ],
    )
    .header(Row::new(vec!["Activity", "Logged", "#", "CD"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(" Activity Types ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.type_state);
}

fn draw_entry_table(f: &mut Frame, app: &mut App, area: Rect) {
    let day_based = matches!(
        definition_of(app.selected_kind()).rule,
        CreditRule::DayBased { .. }
    );

    let rows: Vec<Row> = app
        .entries
        .iter()
        .map(|view| {
            let amount = if day_based {
                format!("{}d", view.days)
            } else {
                format!("{}h/{}h", view.classroom_hours, view.autonomous_hours)
            };
            Row::new(vec![
                Span::raw(view.short_id()),
                Span::styled(view.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(view.date_from.format("%Y-%m-%d").to_string()),
                Span::raw(amount),
                Span::styled(
                    format!("{:.1}", view.credits),
                    Style::default().fg(Color::Cyan),
                ),
            ])
        })
        .collect();

    let border_style = if app.focus == Pane::Entries {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title = format!(" {} ", definition_of(app.selected_kind()).name);
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),  // Short id
            Constraint::Min(12),    // Title
            Constraint::Length(10), // From
            Constraint::Length(10), // Amount
            Constraint::Length(5),  // Credits
        ],
    )
    .header(Row::new(vec!["ID", "Title", "From", "Logged", "CD"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.entry_state);
}

fn draw_advisory(f: &mut Frame, app: &App, area: Rect) {
    if app.report.over_training_cap {
        let warning = Paragraph::new(format!(
            "Warning: training credits exceed the maximum of {:.0} CD",
            TRAINING_CREDIT_CAP
        ))
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
        f.render_widget(warning, area);
    } else if let Some(status) = &app.status {
        let line = Paragraph::new(status.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(line, area);
    }
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    match app.input_mode {
        InputMode::Normal => {
            let footer = Paragraph::new(
                "j/k: Navigate | Tab: Switch pane | a: Add | d: Delete | q: Quit",
            )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
            f.render_widget(footer, area);
        }
        InputMode::Adding => {
            let prompt = "add> ";
            let line = Line::from(vec![
                Span::styled(prompt, Style::default().fg(Color::Cyan)),
                Span::raw(app.input.as_str()),
            ]);
            f.render_widget(Paragraph::new(line), area);

            let before_cursor: String = app.input.chars().take(app.cursor_position).collect();
            let x = area.x + prompt.width() as u16 + before_cursor.width() as u16;
            f.set_cursor_position((x, area.y));
        }
    }
}
