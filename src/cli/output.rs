use serde::Serialize;

use crate::ops::paginate::{PageLabel, PageView, format_labels};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct PagesJson {
    pub total_items: usize,
    pub items_per_page: usize,
    pub total_pages: usize,
    pub current_page: usize,
    /// First and last visible item, 1-based; absent when the page is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_item: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_item: Option<usize>,
    pub labels: Vec<PageLabel>,
}

impl PagesJson {
    pub fn new(total_items: usize, items_per_page: usize, view: &PageView) -> Self {
        let (first_item, last_item) = visible_bounds(view);
        PagesJson {
            total_items,
            items_per_page,
            total_pages: view.total_pages,
            current_page: view.current_page,
            first_item,
            last_item,
            labels: view.labels.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Two lines: the visible slice and the page labels
pub fn format_pages_text(total_items: usize, view: &PageView) -> String {
    let slice = match visible_bounds(view) {
        (Some(first), Some(last)) => format!(
            "items {}-{} of {} (page {} of {})",
            first, last, total_items, view.current_page, view.total_pages
        ),
        _ => format!(
            "no items on page {} of {}",
            view.current_page, view.total_pages
        ),
    };
    format!("{}\npages: {}", slice, format_labels(&view.labels))
}

fn visible_bounds(view: &PageView) -> (Option<usize>, Option<usize>) {
    if view.visible.is_empty() {
        (None, None)
    } else {
        (Some(view.visible.start + 1), Some(view.visible.end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::paginate::compute_page;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_for_middle_page() {
        let view = compute_page(60, 6, 5);
        assert_eq!(
            format_pages_text(60, &view),
            "items 25-30 of 60 (page 5 of 10)\npages: 1 \u{2026} 4 5 6 \u{2026} 10"
        );
    }

    #[test]
    fn text_for_empty_list() {
        let view = compute_page(0, 6, 1);
        assert_eq!(format_pages_text(0, &view), "no items on page 1 of 1\npages: 1");
    }

    #[test]
    fn json_skips_missing_bounds() {
        let view = compute_page(0, 6, 1);
        let json = serde_json::to_value(PagesJson::new(0, 6, &view)).unwrap();
        assert_eq!(json["total_pages"], 1);
        assert!(json.get("first_item").is_none());
        assert_eq!(json["labels"][0]["kind"], "page");
    }
}
