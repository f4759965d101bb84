use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Filter;
use crate::tui::app::{App, Focus};
use crate::util::unicode::truncate_to_width;

pub const EMPTY_STORE: &str = "No todos yet. Add one above!";
pub const EMPTY_CATEGORY: &str = "No todos in this category.";

/// Render the current page of the shown tab, scrolled to keep the cursor row
/// in view when the page is taller than `area`
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.shown_filter() == Filter::All && app.store.is_empty() {
        render_message(frame, app, area, EMPTY_STORE);
        return;
    }

    let items = app.current_items();
    let visible = app.list().visible(&items);
    if visible.is_empty() {
        render_message(frame, app, area, EMPTY_CATEGORY);
        return;
    }

    let scroll = app.list_mut().follow_cursor(area.height as usize);
    let list = app.list();
    let show_cursor = app.focus == Focus::List;
    // " ▸ [x] " prefix
    let title_width = (area.width as usize).saturating_sub(7);
    let lines: Vec<Line> = visible
        .iter()
        .enumerate()
        .skip(scroll)
        .take(area.height as usize)
        .map(|(i, todo)| {
            let is_cursor = show_cursor && i == list.cursor();
            let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

            let marker = if is_cursor { " \u{25B8} " } else { "   " };
            let box_color = if todo.completed { app.theme.green } else { app.theme.text };
            let mut title_style = if todo.completed {
                Style::default()
                    .fg(app.theme.dim)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(app.theme.text_bright).bg(row_bg)
            };
            if is_cursor {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }

            Line::from(vec![
                Span::styled(marker, Style::default().fg(app.theme.highlight).bg(row_bg)),
                Span::styled(todo.checkbox(), Style::default().fg(box_color).bg(row_bg)),
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(truncate_to_width(&todo.title, title_width), title_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn render_message(frame: &mut Frame, app: &App, area: Rect, text: &str) {
    let msg = Paragraph::new(format!(" {}", text))
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(msg, area);
}
