/// A tab with an identifier, a label and whatever it shows when selected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab<T> {
    pub id: String,
    pub label: String,
    pub content: T,
}

impl<T> Tab<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>, content: T) -> Self {
        Tab {
            id: id.into(),
            label: label.into(),
            content,
        }
    }
}

/// Who decides which tab is shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The host owns the selection; clicks only notify it
    Controlled(String),
    /// The switcher owns the selection
    Uncontrolled(String),
}

impl Selection {
    fn id(&self) -> &str {
        match self {
            Selection::Controlled(id) | Selection::Uncontrolled(id) => id,
        }
    }
}

/// Tab selection that is either host-controlled or self-managed.
///
/// When controlled, `select` reports the requested tab through the callback
/// but keeps showing the host's tab until the host calls `set_external`.
#[derive(Debug, Clone)]
pub struct TabSwitcher<T> {
    tabs: Vec<Tab<T>>,
    selection: Selection,
}

impl<T> TabSwitcher<T> {
    pub fn new(tabs: Vec<Tab<T>>, external: Option<&str>) -> Self {
        let selection = match external {
            Some(id) => Selection::Controlled(id.to_string()),
            None => Selection::Uncontrolled(
                tabs.first().map(|t| t.id.clone()).unwrap_or_default(),
            ),
        };
        TabSwitcher { tabs, selection }
    }

    /// Follow the host's selected tab. `None` hands control back to the
    /// switcher, which keeps showing whatever was selected last.
    pub fn set_external(&mut self, external: Option<&str>) {
        self.selection = match external {
            Some(id) => Selection::Controlled(id.to_string()),
            None => Selection::Uncontrolled(self.selection.id().to_string()),
        };
    }

    /// Handle a click on tab `id`. The callback, when given, always hears about it.
    pub fn select(&mut self, id: &str, on_change: Option<&mut dyn FnMut(&str)>) {
        if let Selection::Uncontrolled(current) = &mut self.selection {
            *current = id.to_string();
        }
        if let Some(notify) = on_change {
            notify(id);
        }
    }

    pub fn active_id(&self) -> &str {
        self.selection.id()
    }

    pub fn active_tab(&self) -> Option<&Tab<T>> {
        let id = self.active_id();
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn active_content(&self) -> Option<&T> {
        self.active_tab().map(|t| &t.content)
    }

    pub fn tabs(&self) -> &[Tab<T>] {
        &self.tabs
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.selection, Selection::Controlled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<Tab<&'static str>> {
        vec![
            Tab::new("tab1", "Tab 1", "Tab 1 Content"),
            Tab::new("tab2", "Tab 2", "Tab 2 Content"),
            Tab::new("tab3", "Tab 3", "Tab 3 Content"),
        ]
    }

    #[test]
    fn first_tab_is_active_by_default() {
        let switcher = TabSwitcher::new(tabs(), None);
        assert_eq!(switcher.active_id(), "tab1");
        assert_eq!(switcher.active_content(), Some(&"Tab 1 Content"));
        assert!(!switcher.is_controlled());
    }

    #[test]
    fn uncontrolled_select_changes_content() {
        let mut switcher = TabSwitcher::new(tabs(), None);
        switcher.select("tab2", None);
        assert_eq!(switcher.active_content(), Some(&"Tab 2 Content"));
    }

    #[test]
    fn select_notifies_callback() {
        let mut switcher = TabSwitcher::new(tabs(), None);
        let mut seen = Vec::new();
        switcher.select("tab3", Some(&mut |id: &str| seen.push(id.to_string())));
        assert_eq!(seen, vec!["tab3"]);
    }

    #[test]
    fn external_value_is_followed() {
        let mut switcher = TabSwitcher::new(tabs(), Some("tab2"));
        assert_eq!(switcher.active_content(), Some(&"Tab 2 Content"));
        switcher.set_external(Some("tab3"));
        assert_eq!(switcher.active_content(), Some(&"Tab 3 Content"));
    }

    #[test]
    fn controlled_select_notifies_without_switching() {
        let mut switcher = TabSwitcher::new(tabs(), Some("tab2"));
        let mut seen = Vec::new();
        switcher.select("tab1", Some(&mut |id: &str| seen.push(id.to_string())));

        assert_eq!(seen, vec!["tab1"]);
        assert_eq!(switcher.active_content(), Some(&"Tab 2 Content"));
    }

    #[test]
    fn host_applies_notified_tab() {
        let mut switcher = TabSwitcher::new(tabs(), Some("tab2"));
        let mut requested = None;
        switcher.select("tab1", Some(&mut |id: &str| requested = Some(id.to_string())));
        switcher.set_external(requested.as_deref());
        assert_eq!(switcher.active_content(), Some(&"Tab 1 Content"));
    }

    #[test]
    fn dropping_external_control_keeps_current_tab() {
        let mut switcher = TabSwitcher::new(tabs(), Some("tab2"));
        switcher.set_external(None);
        assert!(!switcher.is_controlled());
        assert_eq!(switcher.active_content(), Some(&"Tab 2 Content"));

        switcher.select("tab3", None);
        assert_eq!(switcher.active_content(), Some(&"Tab 3 Content"));
    }

    #[test]
    fn empty_tab_list_has_no_content() {
        let mut switcher: TabSwitcher<&str> = TabSwitcher::new(Vec::new(), None);
        assert_eq!(switcher.active_id(), "");
        assert!(switcher.active_content().is_none());
        switcher.select("tab1", None);
        assert!(switcher.active_content().is_none());
    }

    #[test]
    fn unknown_external_id_shows_nothing() {
        let switcher = TabSwitcher::new(tabs(), Some("missing"));
        assert_eq!(switcher.active_id(), "missing");
        assert!(switcher.active_tab().is_none());
    }
}
