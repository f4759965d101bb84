pub mod entry_row;
pub mod help_overlay;
pub mod list_view;
pub mod pagination_row;
pub mod status_row;
pub mod tab_bar;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    render_in(frame, app, area);
}

/// Render the whole screen into `area`
pub fn render_in(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // heading | entry | gap | tabs (2) | list | page controls | status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    entry_row::render_heading(frame, app, chunks[0]);
    entry_row::render_entry_row(frame, app, chunks[1]);
    tab_bar::render_tab_bar(frame, app, chunks[3]);
    list_view::render_list_view(frame, app, chunks[4]);
    pagination_row::render_pagination_row(frame, app, chunks[5]);
    status_row::render_status_row(frame, app, chunks[6]);

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
}
