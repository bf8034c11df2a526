use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

/// Render the status row (bottom of screen): last error, else key hints
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(ref status) = app.status {
        Line::from(Span::styled(
            format!("error: {}", status),
            Style::default().fg(app.theme.red).bg(bg),
        ))
    } else if app.show_key_hints {
        Line::from(Span::styled(
            key_hints(app),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::default()
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(app: &App) -> &'static str {
    if app.editing_id().is_some() {
        return "Enter save  Esc cancel  Tab/\u{2191}/\u{2193} save and leave";
    }
    match app.focus {
        Focus::NewTodo => "Enter add  Tab list  Ctrl-C quit",
        Focus::List => {
            "Space toggle  Enter edit  d delete  a all  C clear  1/2/3 filter  ? hints  q quit"
        }
    }
}
