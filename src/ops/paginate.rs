//! Windowed pagination with abbreviated page labels.
//!
//! Pages are 1-based. Everything here is a pure function of the item count,
//! the page size and the current page.

use std::ops::Range;

use serde::Serialize;

/// One entry in the page control row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "page")]
pub enum PageLabel {
    Page(usize),
    /// Gap between two non-adjacent page numbers
    Ellipsis,
}

/// Which parts of the control row are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controls {
    /// Single page and nothing to remove
    Hidden,
    /// Single page with completed items: only the remove button
    RemoveOnly,
    /// Page labels, plus the remove button when `remove` is set
    Full { remove: bool },
}

/// Result of paginating a list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Index range of the items on the current page
    pub visible: Range<usize>,
    pub labels: Vec<PageLabel>,
    pub total_pages: usize,
    pub current_page: usize,
}

/// `max(1, ceil(total_items / items_per_page))`
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(page_size(items_per_page)).max(1)
}

/// Items on `current_page`, clamped to `0..total_items`.
///
/// Page 0 and pages past the end give an empty range.
pub fn visible_range(total_items: usize, items_per_page: usize, current_page: usize) -> Range<usize> {
    let per_page = page_size(items_per_page);
    let Some(start) = current_page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(per_page))
    else {
        return 0..0;
    };
    let start = start.min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    start..end
}

/// Page numbers to show, ascending.
///
/// Up to three pages are all shown. Beyond that: the first and last page,
/// plus the current page and its neighbours. A current page outside
/// `1..=total_pages` is treated as the nearest existing page.
pub fn page_numbers(total_pages: usize, current_page: usize) -> Vec<usize> {
    if total_pages <= 3 {
        return (1..=total_pages).collect();
    }
    let current_page = current_page.clamp(1, total_pages);
    if current_page == 1 {
        return vec![1, 2, total_pages];
    }
    if current_page == total_pages {
        return vec![1, total_pages - 1, total_pages];
    }

    let mut pages = vec![1];
    if current_page > 1 {
        pages.push(current_page - 1);
    }
    pages.push(current_page);
    if current_page < total_pages {
        pages.push(current_page + 1);
    }
    pages.push(total_pages);
    pages.sort_unstable();
    pages.dedup();
    pages
}

/// Page numbers with an ellipsis wherever two neighbours differ by more than one
pub fn page_labels(total_pages: usize, current_page: usize) -> Vec<PageLabel> {
    let numbers = page_numbers(total_pages, current_page);
    let mut labels = Vec::with_capacity(numbers.len() * 2);
    for (i, &page) in numbers.iter().enumerate() {
        if i > 0 && page - numbers[i - 1] > 1 {
            labels.push(PageLabel::Ellipsis);
        }
        labels.push(PageLabel::Page(page));
    }
    labels
}

pub fn compute_page(total_items: usize, items_per_page: usize, current_page: usize) -> PageView {
    let total_pages = total_pages(total_items, items_per_page);
    PageView {
        visible: visible_range(total_items, items_per_page, current_page),
        labels: page_labels(total_pages, current_page),
        total_pages,
        current_page,
    }
}

pub fn controls(total_pages: usize, has_completed: bool) -> Controls {
    if has_completed && total_pages <= 1 {
        Controls::RemoveOnly
    } else if total_pages <= 1 {
        Controls::Hidden
    } else {
        Controls::Full {
            remove: has_completed,
        }
    }
}

/// Render labels as plain text, e.g. `1 2 … 5`
pub fn format_labels(labels: &[PageLabel]) -> String {
    labels
        .iter()
        .map(|l| match l {
            PageLabel::Page(n) => n.to_string(),
            PageLabel::Ellipsis => "\u{2026}".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn page_size(items_per_page: usize) -> usize {
    debug_assert!(items_per_page > 0, "items_per_page must be positive");
    items_per_page.max(1)
}
