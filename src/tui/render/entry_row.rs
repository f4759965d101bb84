use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode::{byte_offset_to_display_col, display_col_to_byte_offset, display_width};

pub const HEADING: &str = "Todo Application";
pub const PLACEHOLDER: &str = "What needs to be done?";
const ADD_BUTTON: &str = " [ Add ]";
const PROMPT: &str = " > ";

pub fn render_heading(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let heading = Paragraph::new(Line::from(Span::styled(format!(" {}", HEADING), style)));
    frame.render_widget(heading, area);
}

/// Text field with the Add button to its right
pub fn render_entry_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(ADD_BUTTON.len() as u16 + 1),
        ])
        .split(area);

    render_field(frame, app, chunks[0]);
    render_add_button(frame, app, chunks[1]);
}

fn render_field(frame: &mut Frame, app: &mut App, area: Rect) {
    let text_width = (area.width as usize).saturating_sub(PROMPT.len());
    update_entry_h_scroll(app, text_width);

    let bg = app.theme.background;
    let focused = app.focus == Focus::Input;
    let prompt_color = if focused { app.theme.highlight } else { app.theme.dim };

    let mut spans = vec![Span::styled(PROMPT, Style::default().fg(prompt_color).bg(bg))];
    let value = app.entry.value();
    if value.is_empty() {
        spans.push(Span::styled(PLACEHOLDER, Style::default().fg(app.theme.dim).bg(bg)));
    } else {
        let start = display_col_to_byte_offset(value, app.entry_h_scroll);
        spans.push(Span::styled(
            &value[start..],
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if focused {
        let cursor_col = byte_offset_to_display_col(value, app.entry.cursor());
        let col = PROMPT.len() + cursor_col.saturating_sub(app.entry_h_scroll);
        let x = area.x.saturating_add(col as u16).min(area.right().saturating_sub(1));
        frame.set_cursor_position((x, area.y));
    }
}

/// Keep the cursor inside a `width`-column view of the entry, with a margin
/// on either side while there is text beyond it.
fn update_entry_h_scroll(app: &mut App, width: usize) {
    if width == 0 {
        return;
    }
    let value = app.entry.value();
    let cursor_col = byte_offset_to_display_col(value, app.entry.cursor());
    let margin = 10.min(width / 3);
    let total = display_width(value);
    // The cursor at the end needs one extra column
    let content_end = if cursor_col >= total { total + 1 } else { total };

    let mut scroll = app.entry_h_scroll;
    if cursor_col >= scroll + width.saturating_sub(margin) {
        scroll = cursor_col.saturating_sub(width.saturating_sub(margin + 1));
    }
    scroll = scroll.min(content_end.saturating_sub(width.saturating_sub(1)));
    if cursor_col < scroll + margin {
        scroll = cursor_col.saturating_sub(margin);
    }
    app.entry_h_scroll = scroll;
}

fn render_add_button(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let style = if app.focus == Focus::AddButton {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else if app.entry.is_valid() {
        Style::default().fg(app.theme.text).bg(bg)
    } else {
        // disabled
        Style::default().fg(app.theme.dim).bg(bg)
    };
    frame.render_widget(Paragraph::new(Line::from(Span::styled(ADD_BUTTON, style))), area);
}
