use crate::model::TodoItem;
use crate::ops::paginate::{self, Controls, PageView};
use crate::ops::store::TodoStore;

/// Page state for one paged list.
///
/// The list itself is passed in on every call; only the page, the page size
/// and a cursor within the page live here. Call [`ListDisplay::sync`] after
/// anything that can change the list length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListDisplay {
    current_page: usize,
    items_per_page: usize,
    /// Row within the current page
    cursor: usize,
    /// First page row drawn when the page is taller than the list area
    scroll: usize,
}

impl ListDisplay {
    pub fn new(items_per_page: usize) -> Self {
        debug_assert!(items_per_page > 0, "items_per_page must be positive");
        ListDisplay {
            current_page: 1,
            items_per_page: items_per_page.max(1),
            cursor: 0,
            scroll: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn total_pages(&self, item_count: usize) -> usize {
        paginate::total_pages(item_count, self.items_per_page)
    }

    /// Re-check after the list changed: a page past the end goes back to page 1.
    pub fn sync(&mut self, item_count: usize) {
        if self.current_page > self.total_pages(item_count) {
            self.current_page = 1;
        }
        let on_page = self.page_view(item_count).visible.len();
        self.cursor = self.cursor.min(on_page.saturating_sub(1));
        self.scroll = self.scroll.min(self.cursor);
    }

    /// Jump to `page`. Pages that don't exist show an empty list.
    pub fn on_page_change(&mut self, page: usize) {
        self.current_page = page;
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll a viewport of `height` rows just enough to show the cursor row.
    /// Returns the first row to draw.
    pub fn follow_cursor(&mut self, height: usize) -> usize {
        if height == 0 {
            return self.scroll;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
        self.scroll
    }

    pub fn page_view(&self, item_count: usize) -> PageView {
        paginate::compute_page(item_count, self.items_per_page, self.current_page)
    }

    /// Items on the current page
    pub fn visible<'a>(&self, items: &'a [TodoItem]) -> &'a [TodoItem] {
        &items[self.page_view(items.len()).visible]
    }

    /// Item under the cursor
    pub fn selected<'a>(&self, items: &'a [TodoItem]) -> Option<&'a TodoItem> {
        self.visible(items).get(self.cursor)
    }

    pub fn next_page(&mut self, item_count: usize) {
        if self.current_page < self.total_pages(item_count) {
            self.on_page_change(self.current_page + 1);
        }
    }

    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.on_page_change(self.current_page - 1);
        }
    }

    pub fn first_page(&mut self) {
        self.on_page_change(1);
    }

    pub fn last_page(&mut self, item_count: usize) {
        self.on_page_change(self.total_pages(item_count));
    }

    /// Move the cursor within the current page, stopping at either end
    pub fn move_cursor(&mut self, delta: isize, item_count: usize) {
        let on_page = self.page_view(item_count).visible.len();
        if on_page == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(on_page - 1);
    }

    /// The remove button is enabled only when this list has completed items
    pub fn has_completed(items: &[TodoItem]) -> bool {
        items.iter().any(|t| t.completed)
    }

    pub fn controls(&self, items: &[TodoItem]) -> Controls {
        paginate::controls(self.total_pages(items.len()), Self::has_completed(items))
    }

    /// Bulk-remove through the store when `scope` has anything completed.
    /// Returns how many items the store dropped.
    pub fn remove_completed(&self, store: &mut TodoStore, scope: &[TodoItem]) -> usize {
        if !Self::has_completed(scope) {
            return 0;
        }
        store.remove_completed()
    }
}
