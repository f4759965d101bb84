use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let (left, left_color) = if let Some(ref msg) = app.status_message {
        (format!(" {}", msg), app.theme.text_bright)
    } else if app.show_key_hints {
        (format!(" {}", key_hints(app.focus)), app.theme.dim)
    } else {
        (String::new(), app.theme.dim)
    };

    let counts = format!(
        "{} active, {} completed ",
        app.store.active_todos().len(),
        app.store.completed_todos().len()
    );

    let mut spans = Vec::new();
    let counts_width = display_width(&counts);
    if counts_width + 1 < width {
        let left = truncate_to_width(&left, width - counts_width - 1);
        let padding = width - display_width(&left) - counts_width;
        spans.push(Span::styled(left, Style::default().fg(left_color).bg(bg)));
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(counts, Style::default().fg(app.theme.dim).bg(bg)));
    } else {
        spans.push(Span::styled(
            truncate_to_width(&left, width),
            Style::default().fg(left_color).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn key_hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Input => "Enter add  Tab next  Esc list",
        Focus::AddButton => "Enter/Space add  Tab next  Esc list",
        Focus::List => "Space toggle  h/l page  1-3 tab  D clear  ? help",
    }
}
