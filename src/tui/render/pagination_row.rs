use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::paginate::{Controls, PageLabel};
use crate::tui::app::App;

pub const REMOVE_BUTTON: &str = "[ Remove completed ]";

/// Page labels and the remove button, centered under the list
pub fn render_pagination_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let items = app.current_items();
    let list = app.list();

    let (show_labels, show_remove) = match list.controls(&items) {
        Controls::Hidden => return,
        Controls::RemoveOnly => (false, true),
        Controls::Full { remove } => (true, remove),
    };

    let mut spans: Vec<Span> = Vec::new();
    if show_labels {
        let view = list.page_view(items.len());
        for (i, label) in view.labels.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" ", Style::default().bg(bg)));
            }
            spans.push(label_span(app, *label, view.current_page));
        }
    }
    if show_remove {
        if !spans.is_empty() {
            spans.push(Span::styled("   ", Style::default().bg(bg)));
        }
        spans.push(Span::styled(
            REMOVE_BUTTON,
            Style::default().fg(app.theme.red).bg(bg),
        ));
    }

    let row = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    frame.render_widget(row, area);
}

fn label_span(app: &App, label: PageLabel, current_page: usize) -> Span<'static> {
    let bg = app.theme.background;
    match label {
        PageLabel::Page(n) if n == current_page => Span::styled(
            format!("[{}]", n),
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        PageLabel::Page(n) => Span::styled(n.to_string(), Style::default().fg(app.theme.text).bg(bg)),
        PageLabel::Ellipsis => {
            Span::styled("\u{2026}", Style::default().fg(app.theme.dim).bg(bg))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render(app: &App) -> String {
        render_to_string(50, 1, |frame, area| render_pagination_row(frame, app, area))
            .trim()
            .to_string()
    }

    #[test]
    fn first_of_five_pages() {
        let app = app_with_numbered(30, 6);
        assert_eq!(render(&app), "[1] 2 \u{2026} 5");
    }

    #[test]
    fn last_of_eight_pages() {
        let mut app = app_with_numbered(48, 6);
        app.last_page();
        assert_eq!(render(&app), "1 \u{2026} 7 [8]");
    }

    #[test]
    fn middle_page_has_both_gaps() {
        let mut app = app_with_numbered(60, 6);
        app.on_page_change(5);
        assert_eq!(render(&app), "1 \u{2026} 4 [5] 6 \u{2026} 10");
    }

    #[test]
    fn single_page_without_completed_is_hidden() {
        let app = app_with_numbered(3, 6);
        assert_eq!(render(&app), "");
    }

    #[test]
    fn single_page_with_completed_shows_only_remove() {
        let mut app = app_with_numbered(3, 6);
        app.toggle_selected();
        assert_eq!(render(&app), REMOVE_BUTTON);
    }

    #[test]
    fn labels_and_remove_together() {
        let mut app = app_with_numbered(8, 6);
        app.toggle_selected();
        assert_eq!(render(&app), format!("[1] 2   {}", REMOVE_BUTTON));
    }
}
