use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Todo;
use crate::ops::todo_ops;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

/// Width of the selection marker plus checkbox, e.g. `▸ [x] `
const ROW_PREFIX_WIDTH: usize = 6;

/// Render the toggle-all row and the visible items.
///
/// Nothing is drawn while the list is empty.
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    if app.todos().is_empty() || area.height == 0 {
        return;
    }
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut lines = Vec::new();
    let all_done = todo_ops::all_completed(app.todos());
    lines.push(Line::from(vec![
        Span::styled("  ", Style::default().bg(bg)),
        Span::styled(
            checkbox(all_done),
            Style::default().fg(app.theme.dim).bg(bg),
        ),
        Span::styled(
            "Mark all as complete",
            Style::default().fg(app.theme.dim).bg(bg),
        ),
    ]));

    let visible = app.visible();
    let rows = (area.height as usize).saturating_sub(1);
    let offset = if rows == 0 {
        0
    } else {
        app.cursor.saturating_sub(rows - 1)
    };

    let mut edit_cursor = None;
    for (i, todo) in visible.iter().enumerate().skip(offset).take(rows) {
        let selected = app.focus == Focus::List && i == app.cursor;
        let editing = app.store.edit_session().is_editing(todo.id);
        if editing {
            let y = area.y + 1 + (i - offset) as u16;
            let x = area.x + ROW_PREFIX_WIDTH as u16 + app.edit_input.cursor_col() as u16;
            edit_cursor = Some(Position::new(x.min(area.right().saturating_sub(1)), y));
        }
        lines.push(render_row(app, todo, selected, editing, width));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
    if let Some(pos) = edit_cursor {
        frame.set_cursor_position(pos);
    }
}

fn render_row(
    app: &App,
    todo: &Todo,
    selected: bool,
    editing: bool,
    width: usize,
) -> Line<'static> {
    let bg = if selected || editing {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let marker = if selected || editing { "\u{25B8} " } else { "  " }; // ▸
    let title_width = width.saturating_sub(ROW_PREFIX_WIDTH);

    let title_span = if editing {
        Span::styled(
            truncate_to_width(app.edit_input.text(), title_width),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::UNDERLINED),
        )
    } else {
        let mut style = Style::default().fg(app.theme.todo_color(todo.completed)).bg(bg);
        if todo.completed {
            style = style.add_modifier(Modifier::CROSSED_OUT);
        }
        Span::styled(truncate_to_width(&todo.title, title_width), style)
    };

    let check_color = if todo.completed {
        app.theme.green
    } else {
        app.theme.dim
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(app.theme.highlight).bg(bg)),
        Span::styled(checkbox(todo.completed), Style::default().fg(check_color).bg(bg)),
        title_span,
    ])
}

fn checkbox(checked: bool) -> &'static str {
    if checked { "[x] " } else { "[ ] " }
}
