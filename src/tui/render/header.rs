use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

const PLACEHOLDER: &str = "What needs to be done?";
const PROMPT: &str = "\u{276F} "; // ❯

/// Render the title and the new-todo input
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus == Focus::NewTodo && app.editing_id().is_none();

    let title = Line::from(Span::styled(
        "todos",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    let prompt_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let mut input_spans = vec![Span::styled(PROMPT, Style::default().fg(prompt_color).bg(bg))];
    if app.new_todo.is_empty() {
        input_spans.push(Span::styled(
            PLACEHOLDER,
            Style::default()
                .fg(app.theme.dim)
                .bg(bg)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        input_spans.push(Span::styled(
            app.new_todo.text().to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let lines = vec![title, Line::default(), Line::from(input_spans)];
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);

    if focused && area.height >= 3 {
        let x = area.x + PROMPT.chars().count() as u16 + app.new_todo.cursor_col() as u16;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(1)), area.y + 2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_placeholder_when_empty() {
        let app = app_with_todos(&[]);
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.starts_with("todos"));
        assert!(output.contains("What needs to be done?"));
    }

    #[test]
    fn shows_typed_text() {
        let mut app = app_with_todos(&[]);
        for c in "Buy milk".chars() {
            app.new_todo.insert_char(c);
        }
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("Buy milk"));
        assert!(!output.contains("What needs"));
    }
}
