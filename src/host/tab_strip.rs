//! Tab strip collaborator: enumerates the host's tabs, resolves the context
//! selection, and creates or removes tabs on the feature's behalf.

use std::collections::HashSet;

use uuid::Uuid;

use crate::types::errors::TabError;
use crate::types::session::LazyTabState;
use crate::types::tab::Tab;

/// Trait defining the tab collection service interface.
pub trait TabStripTrait {
    /// All tabs in strip order.
    fn tabs(&self) -> &[Tab];
    fn tab_count(&self) -> usize;
    fn get_tab(&self, tab_id: &str) -> Option<&Tab>;
    /// Position of the tab the context menu was opened on, if any.
    fn context_index(&self) -> Option<usize>;
    /// Tabs an operation applies to: every selected tab when the context tab
    /// is part of a multi-selection, otherwise just the context tab.
    fn context_selection(&self) -> Vec<&Tab>;
    /// Creates a tab at `index` (clamped to the strip length) and returns its
    /// ID. With `lazy` set, the tab is a placeholder carrying that state for
    /// the host to resolve on first activation.
    fn create_tab(&mut self, url: &str, index: usize, lazy: Option<&LazyTabState>) -> String;
    /// Removes a tab, optionally with the host's close animation.
    fn remove_tab(&mut self, tab_id: &str, animate: bool) -> Result<(), TabError>;
}

/// In-memory tab strip for tests and the demo binary.
#[derive(Debug, Default)]
pub struct InMemoryTabStrip {
    tabs: Vec<Tab>,
    selected: HashSet<String>,
    context_id: Option<String>,
}

impl InMemoryTabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a strip holding one tab per URL, with the first tab as the
    /// context tab and nothing multi-selected.
    pub fn with_urls(urls: &[&str]) -> Self {
        let mut strip = Self::new();
        for url in urls {
            let count = strip.tab_count();
            strip.create_tab(url, count, None);
        }
        strip.context_id = strip.tabs.first().map(|t| t.id.clone());
        strip
    }

    fn find_index(&self, tab_id: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    /// Marks the tab at `index` as part of the multi-selection.
    pub fn select(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self
            .tabs
            .get(index)
            .ok_or_else(|| TabError::NotFound(format!("index {}", index)))?;
        self.selected.insert(tab.id.clone());
        Ok(())
    }

    /// Sets the context tab (the one the menu was opened on) by position.
    pub fn set_context(&mut self, index: usize) -> Result<(), TabError> {
        let tab = self
            .tabs
            .get(index)
            .ok_or_else(|| TabError::NotFound(format!("index {}", index)))?;
        self.context_id = Some(tab.id.clone());
        Ok(())
    }

    pub fn urls(&self) -> Vec<&str> {
        self.tabs.iter().map(|t| t.url.as_str()).collect()
    }
}

impl TabStripTrait for InMemoryTabStrip {
    fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    fn get_tab(&self, tab_id: &str) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == tab_id)
    }

    fn context_index(&self) -> Option<usize> {
        self.context_id.as_deref().and_then(|id| self.find_index(id))
    }

    fn context_selection(&self) -> Vec<&Tab> {
        let context = match self.context_id.as_deref().and_then(|id| self.get_tab(id)) {
            Some(tab) => tab,
            None => return Vec::new(),
        };
        if self.selected.contains(&context.id) && self.selected.len() > 1 {
            // Strip order, not selection order
            self.tabs
                .iter()
                .filter(|t| self.selected.contains(&t.id))
                .collect()
        } else {
            vec![context]
        }
    }

    fn create_tab(&mut self, url: &str, index: usize, lazy: Option<&LazyTabState>) -> String {
        let id = Uuid::new_v4().to_string();
        let tab = match lazy {
            Some(state) => Tab {
                id: id.clone(),
                url: state.url.clone(),
                title: state.title.clone(),
                pending_state: Some(state.clone()),
            },
            None => Tab {
                id: id.clone(),
                url: url.to_string(),
                title: url.to_string(),
                pending_state: None,
            },
        };
        let index = index.min(self.tabs.len());
        self.tabs.insert(index, tab);
        id
    }

    fn remove_tab(&mut self, tab_id: &str, _animate: bool) -> Result<(), TabError> {
        let index = self
            .find_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.to_string()))?;
        self.tabs.remove(index);
        self.selected.remove(tab_id);
        if self.context_id.as_deref() == Some(tab_id) {
            self.context_id = None;
        }
        Ok(())
    }
}
