use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};
use taskboard_core::{format_date_info, format_due_date, is_expired, Category, RecurrenceSet, Task, TaskColor};

use crate::tui::app::{App, InputMode};

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Title + category tabs
            Constraint::Length(1), // Sort bar
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Prompt / status / help
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);
    draw_sortbar(f, app, main_chunks[1]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[2]);

    draw_task_list(f, app, content_chunks[0]);
    draw_detail_view(f, app, content_chunks[1]);

    draw_footer(f, app, main_chunks[3]);
}

/// Title plus the six category tabs with badge counts. Zero-count tabs are
/// dimmed: they are disabled and the selection skips over them.
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "TASKBOARD",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
    ];

    for category in Category::ALL {
        let count = app.counts.get(category);
        let label = format!("{} {}", category.label(), count);
        let style = if category == app.category {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if count == 0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, area);
}

fn draw_sortbar(f: &mut Frame, app: &App, area: Rect) {
    let sortbar = Paragraph::new(Line::from(vec![
        Span::styled("SORT BY DATE ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.order.label(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (s to flip)", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Left);
    f.render_widget(sortbar, area);
}

fn draw_task_list(f: &mut Frame, app: &mut App, area: Rect) {
    let today = app.today;

    let rows: Vec<Row> = app
        .visible
        .iter()
        .map(|task| {
            let expired = is_expired(task.due_date, today);

            let favorite_icon = if task.is_favorite { "♥" } else { " " };
            let archive_icon = if task.is_archived { "▣" } else { " " };

            let due_str = match task.due_date {
                Some(due) => format_due_date(due),
                None => repeat_keys(task),
            };
            let due_style = if expired {
                Style::default().fg(Color::Red)
            } else {
                Style::default()
            };

            let description_style = if expired {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };

            Row::new(vec![
                Span::styled(favorite_icon, Style::default().fg(Color::Magenta)),
                Span::styled(archive_icon, Style::default().fg(Color::DarkGray)),
                Span::styled("▌", Style::default().fg(tag_color(task.color))),
                Span::styled(task.description.clone(), description_style),
                Span::styled(due_str, due_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),  // Favorite
            Constraint::Length(2),  // Archived
            Constraint::Length(2),  // Color tag
            Constraint::Min(10),    // Description
            Constraint::Length(14), // Due / repeat days
        ],
    )
    .header(Row::new(vec!["♥", "▣", " ", "Task", "Due"]).style(Style::default().fg(Color::Yellow)))
    .block(
        Block::default()
            .title(format!(" {} ", app.category.label()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    )
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view(f: &mut Frame, app: &App, area: Rect) {
    if let Some(task) = app.selected_task() {
        let due_str = task
            .due_date
            .map(format_date_info)
            .unwrap_or_else(|| "None".to_string());

        let mut detail_text = vec![
            Line::from(vec![
                Span::styled("Task: ", Style::default().fg(Color::Blue)),
                Span::styled(&task.description, Style::default().add_modifier(Modifier::BOLD)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("ID: ", Style::default().fg(Color::DarkGray)),
                Span::raw(task.id.clone()),
            ]),
            Line::from(vec![
                Span::styled("Color: ", Style::default().fg(Color::Blue)),
                Span::styled(task.color.as_str(), Style::default().fg(tag_color(task.color))),
            ]),
            Line::from(vec![
                Span::styled("Due: ", Style::default().fg(Color::Blue)),
                Span::raw(due_str),
            ]),
            Line::from(vec![
                Span::styled("Repeats: ", Style::default().fg(Color::Blue)),
                Span::raw(if task.repeating_days.is_repeating() {
                    repeat_keys(task)
                } else {
                    "No".to_string()
                }),
            ]),
            Line::from(vec![
                Span::styled("Favorite: ", Style::default().fg(Color::Blue)),
                Span::raw(if task.is_favorite { "Yes" } else { "No" }),
            ]),
            Line::from(vec![
                Span::styled("Archived: ", Style::default().fg(Color::Blue)),
                Span::raw(if task.is_archived { "Yes" } else { "No" }),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Created: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format_date_info(task.created_at)),
            ]),
            Line::from(vec![
                Span::styled("Updated: ", Style::default().fg(Color::DarkGray)),
                Span::raw(format_date_info(task.updated_at)),
            ]),
        ];

        if is_expired(task.due_date, app.today) {
            detail_text.push(Line::from(""));
            detail_text.push(Line::from(Span::styled(
                "OVERDUE",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
        }

        let detail_block = Paragraph::new(detail_text)
            .block(
                Block::default()
                    .title(" Detail ")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(detail_block, area);
    } else {
        let detail_block = Block::default()
            .title(" Detail ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        f.render_widget(detail_block, area);
    }
}

/// Bottom line: the input prompt while adding/editing, otherwise the last
/// notification, otherwise the key help.
fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let footer = match &app.input_mode {
        InputMode::Adding | InputMode::Editing(_) => {
            let prefix = match app.input_mode {
                InputMode::Adding => "add> ",
                _ => "edit> ",
            };
            f.set_cursor_position((
                area.x + (prefix.chars().count() + app.cursor_position) as u16,
                area.y,
            ));
            Paragraph::new(Line::from(vec![
                Span::styled(prefix, Style::default().fg(Color::Cyan)),
                Span::raw(app.input.as_str()),
            ]))
        }
        InputMode::Normal => match &app.status {
            Some(message) => Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Yellow)),
            None => Paragraph::new(
                "j/k: navigate | h/l: category | s: sort | a: add | e: edit | f: favorite | x: archive | d: delete | r: refresh | q: quit",
            )
            .style(Style::default().fg(Color::DarkGray)),
        },
    };
    f.render_widget(footer, area);
}

fn repeat_keys(task: &Task) -> String {
    task.repeating_days
        .active_days()
        .iter()
        .map(|d| RecurrenceSet::day_key(*d))
        .collect::<Vec<_>>()
        .join(" ")
}

fn tag_color(color: TaskColor) -> Color {
    match color {
        TaskColor::Black => Color::White,
        TaskColor::Gold => Color::Yellow,
        TaskColor::Blue => Color::Blue,
        TaskColor::Green => Color::Green,
        TaskColor::Fuchsia => Color::Magenta,
    }
}
