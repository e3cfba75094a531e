//! Product page description tabs.

/// A row of tab buttons, each paired with the panel of the same id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabSet {
    tabs: Vec<String>,
    panels: Vec<String>,
    active_tab: Option<usize>,
    active_panel: Option<usize>,
}

impl TabSet {
    /// Tabs named by `tabs`, backed by the panels named by `panels`. The
    /// first tab and its panel start active.
    #[must_use]
    pub fn new(tabs: Vec<String>, panels: Vec<String>) -> Self {
        let mut set = Self {
            tabs,
            panels,
            active_tab: None,
            active_panel: None,
        };
        if let Some(first) = set.tabs.first().cloned() {
            set.select(&first);
        }
        set
    }

    /// Tabs whose panels all exist.
    #[must_use]
    pub fn matched(ids: &[&str]) -> Self {
        let ids: Vec<String> = ids.iter().map(|id| (*id).to_string()).collect();
        Self::new(ids.clone(), ids)
    }

    /// Deactivate everything, then activate tab `id` and its panel if one
    /// exists. Returns `false` if no tab has that id.
    pub fn select(&mut self, id: &str) -> bool {
        let Some(tab) = self.tabs.iter().position(|t| t == id) else {
            return false;
        };
        self.active_tab = Some(tab);
        self.active_panel = self.panels.iter().position(|p| p == id);
        true
    }

    /// Tab ids in display order.
    #[must_use]
    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    /// Whether tab `id` is the active button.
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_tab
            .and_then(|i| self.tabs.get(i))
            .is_some_and(|t| t == id)
    }

    /// Id of the visible panel, if any.
    #[must_use]
    pub fn active_panel(&self) -> Option<&str> {
        self.active_panel
            .and_then(|i| self.panels.get(i))
            .map(String::as_str)
    }
}
