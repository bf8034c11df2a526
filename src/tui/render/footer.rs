use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::ops::todo_ops;
use crate::tui::app::App;

/// Render "N items left", the filter links, and "Clear completed".
///
/// Hidden while the list is empty; "Clear completed" only shows when at
/// least one item is completed.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let todos = app.todos();
    if todos.is_empty() {
        return;
    }
    let bg = app.theme.background;
    let remaining = todo_ops::remaining(todos);

    let mut spans = vec![
        Span::styled(
            remaining.to_string(),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            if remaining == 1 { " item left" } else { " items left" },
            Style::default().fg(app.theme.text).bg(bg),
        ),
        Span::styled("   ", Style::default().bg(bg)),
    ];

    for (i, filter) in Filter::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default().bg(bg)));
        }
        let style = if filter == app.filter() {
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(app.theme.dim).bg(bg)
        };
        spans.push(Span::styled(filter.label(), style));
    }

    if todo_ops::has_completed(todos) {
        spans.push(Span::styled("   ", Style::default().bg(bg)));
        spans.push(Span::styled(
            "Clear completed",
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
