use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::{AppConfig, Filter, TodoItem};
use crate::ops::store::TodoStore;

use super::input;
use super::list_display::ListDisplay;
use super::render;
use super::tabs::{Tab, TabSwitcher};
use super::text_entry::TextEntry;
use super::theme::Theme;

/// Which control receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The new-task text field
    Input,
    /// The Add button next to the field
    AddButton,
    /// The paged task list
    List,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Input => Focus::AddButton,
            Focus::AddButton => Focus::List,
            Focus::List => Focus::Input,
        }
    }

    pub fn prev(self) -> Focus {
        match self {
            Focus::Input => Focus::List,
            Focus::AddButton => Focus::Input,
            Focus::List => Focus::AddButton,
        }
    }
}

/// Main application state
pub struct App {
    pub store: TodoStore,
    pub entry: TextEntry,
    /// First display column of the entry shown in the text field
    pub entry_h_scroll: usize,
    /// Tab bar, controlled by `active_filter`
    pub tabs: TabSwitcher<Filter>,
    /// Tab the app shows; the tab bar only requests changes to it
    pub active_filter: Filter,
    /// One paged list per tab, indexed by `Filter::index`
    pub lists: [ListDisplay; 3],
    pub focus: Focus,
    pub theme: Theme,
    pub show_help: bool,
    pub show_key_hints: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let per_page = config.list.items_per_page;
        let active_filter = Filter::All;
        let tabs = Filter::ALL
            .into_iter()
            .map(|f| Tab::new(f.id(), f.label(), f))
            .collect();

        App {
            store: TodoStore::new(),
            entry: TextEntry::new(),
            entry_h_scroll: 0,
            tabs: TabSwitcher::new(tabs, Some(active_filter.id())),
            active_filter,
            lists: [
                ListDisplay::new(per_page),
                ListDisplay::new(per_page),
                ListDisplay::new(per_page),
            ],
            focus: Focus::Input,
            theme: Theme::from_config(&config.ui),
            show_help: false,
            show_key_hints: config.ui.show_key_hints,
            status_message: None,
            should_quit: false,
        }
    }

    /// The filter of the tab the tab bar is showing
    pub fn shown_filter(&self) -> Filter {
        self.tabs.active_content().copied().unwrap_or(Filter::All)
    }

    /// Items of the shown tab, in insertion order
    pub fn current_items(&self) -> Vec<TodoItem> {
        self.store.filtered(self.shown_filter())
    }

    pub fn list(&self) -> &ListDisplay {
        &self.lists[self.shown_filter().index()]
    }

    pub fn list_mut(&mut self) -> &mut ListDisplay {
        let i = self.shown_filter().index();
        &mut self.lists[i]
    }

    /// Page-reset check for every tab; run after each store mutation
    pub fn sync_lists(&mut self) {
        for filter in Filter::ALL {
            let count = self.store.filtered(filter).len();
            self.lists[filter.index()].sync(count);
        }
    }

    // -- submit paths -------------------------------------------------------

    /// Enter pressed in the text field
    pub fn submit_from_key(&mut self, key: KeyCode) {
        let store = &mut self.store;
        let submitted = self.entry.on_key_down(
            key,
            Some(&mut |value: &str| {
                store.add_todo(value);
            }),
        );
        if submitted {
            self.sync_lists();
        }
    }

    /// The Add button; same validity gate and effect as pressing Enter
    pub fn click_add(&mut self) {
        if !self.entry.is_valid() {
            return;
        }
        let value = self.entry.value().to_string();
        self.store.add_todo(&value);
        self.entry.reset();
        self.sync_lists();
    }

    // -- list actions -------------------------------------------------------

    pub fn toggle_selected(&mut self) {
        let items = self.current_items();
        let Some(id) = self.list().selected(&items).map(|t| t.id.clone()) else {
            return;
        };
        self.store.toggle_todo(&id);
        self.sync_lists();
    }

    pub fn remove_completed(&mut self) {
        let items = self.current_items();
        let i = self.shown_filter().index();
        let removed = self.lists[i].remove_completed(&mut self.store, &items);
        if removed > 0 {
            self.status_message = Some(format!(
                "Removed {} completed {}",
                removed,
                if removed == 1 { "todo" } else { "todos" }
            ));
            self.sync_lists();
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let count = self.current_items().len();
        self.list_mut().move_cursor(delta, count);
    }

    pub fn next_page(&mut self) {
        let count = self.current_items().len();
        self.list_mut().next_page(count);
    }

    pub fn prev_page(&mut self) {
        self.list_mut().prev_page();
    }

    pub fn first_page(&mut self) {
        self.list_mut().first_page();
    }

    pub fn last_page(&mut self) {
        let count = self.current_items().len();
        self.list_mut().last_page(count);
    }

    /// Page-change request from the page labels
    pub fn on_page_change(&mut self, page: usize) {
        self.list_mut().on_page_change(page);
    }

    // -- tabs ---------------------------------------------------------------

    /// Click on a tab. The tab bar reports the request; the app applies it.
    pub fn select_tab(&mut self, filter: Filter) {
        let mut requested = None;
        self.tabs
            .select(filter.id(), Some(&mut |id: &str| requested = Filter::from_id(id)));
        if let Some(f) = requested {
            debug!(tab = f.id(), "tab change");
            self.active_filter = f;
        }
        self.tabs.set_external(Some(self.active_filter.id()));
        self.sync_lists();
    }

    pub fn cycle_tab(&mut self, forward: bool) {
        let n = Filter::ALL.len();
        let i = self.active_filter.index();
        let next = if forward { (i + 1) % n } else { (i + n - 1) % n };
        self.select_tab(Filter::ALL[next]);
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);
    info!(items_per_page = config.list.items_per_page, "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal before the panic message is printed
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(todos = app.store.len(), "exiting tui");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        app.sync_lists();
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
