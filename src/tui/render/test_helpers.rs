use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::AppConfig;
use crate::tui::app::App;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 16;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app with the given page size and no todos
pub fn app_with_page_size(items_per_page: usize) -> App {
    let mut config = AppConfig::default();
    config.list.items_per_page = items_per_page;
    App::new(&config)
}

/// An app with the default page size holding `titles`, all active
pub fn app_with_todos(titles: &[&str]) -> App {
    let mut app = App::new(&AppConfig::default());
    for t in titles {
        app.store.add_todo(t);
    }
    app.sync_lists();
    app
}

/// `n` todos titled `Todo 1..=n` with the given page size
pub fn app_with_numbered(n: usize, items_per_page: usize) -> App {
    let mut app = app_with_page_size(items_per_page);
    for i in 1..=n {
        app.store.add_todo(&format!("Todo {}", i));
    }
    app.sync_lists();
    app
}
