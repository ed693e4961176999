//! Cut, copy, and paste tabs through the clipboard.
//!
//! The operations delegate everything meaningful to the injected host
//! collaborators: the clipboard carries separator-joined URLs, the tab strip
//! creates and removes tabs, the preference store decides the restore mode,
//! and the session store persists state after mutations, best-effort.

use crate::codec::encoder::encode_tabs;
use crate::codec::extractor::extract;
use crate::host::clipboard::ClipboardTrait;
use crate::host::prefs::PrefStoreTrait;
use crate::host::session_store::SessionStoreTrait;
use crate::host::tab_strip::TabStripTrait;
use crate::platform::LineSeparator;
use crate::types::errors::{ClipboardError, SessionError};

use super::paste_plan::{plan_paste, PasteAction};

/// Preference selecting on-demand restore for pasted tabs. Absent ⇒ eager.
pub const RESTORE_ON_DEMAND_PREF: &str = "browser.tabs.restore_on_demand";

/// The cut/copy/paste operations over a set of host collaborators.
///
/// The line separator is selected once at construction and fixed for the
/// lifetime of the value.
pub struct TabClipboard<C, T, P, S> {
    clipboard: C,
    tabs: T,
    prefs: P,
    session: S,
    separator: LineSeparator,
}

impl<C, T, P, S> TabClipboard<C, T, P, S>
where
    C: ClipboardTrait,
    T: TabStripTrait,
    P: PrefStoreTrait,
    S: SessionStoreTrait,
{
    pub fn new(clipboard: C, tabs: T, prefs: P, session: S, separator: LineSeparator) -> Self {
        Self {
            clipboard,
            tabs,
            prefs,
            session,
            separator,
        }
    }

    /// Copies the context selection's URLs to the clipboard as
    /// separator-joined text. Returns the number of tabs copied; an empty
    /// selection copies nothing and leaves the clipboard untouched.
    pub fn copy(&mut self) -> Result<usize, ClipboardError> {
        let selection: Vec<_> = self.tabs.context_selection().into_iter().cloned().collect();
        if selection.is_empty() {
            return Ok(0);
        }
        let text = encode_tabs(&selection, self.separator);
        self.clipboard.write(&text)?;
        Ok(selection.len())
    }

    /// Copies the context selection, then removes each copied tab (with the
    /// host's close animation) and triggers a best-effort session save.
    pub fn cut(&mut self) -> Result<usize, ClipboardError> {
        let count = self.copy()?;
        let ids: Vec<String> = self
            .tabs
            .context_selection()
            .into_iter()
            .map(|t| t.id.clone())
            .collect();
        for id in &ids {
            if let Err(e) = self.tabs.remove_tab(id, true) {
                log::warn!("Failed to remove cut tab: {}", e);
            }
        }
        if count > 0 {
            self.save_session_best_effort();
        }
        Ok(count)
    }

    /// Reads the clipboard, extracts every URL, and opens each one in a new
    /// tab immediately behind the context tab, preserving match order.
    ///
    /// A clipboard without text data aborts the operation: it is logged, zero
    /// tabs are opened, and no error escapes. Returns the number of tabs
    /// created.
    pub fn paste(&mut self) -> usize {
        let text = match self.clipboard.read() {
            Ok(text) => text,
            Err(e) => {
                log::info!("Paste aborted: {}", e);
                return 0;
            }
        };
        let matches = extract(&text);
        if matches.is_empty() {
            return 0;
        }

        let restore_on_demand = self.prefs.get_bool(RESTORE_ON_DEMAND_PREF).unwrap_or(false);
        // No context tab: append behind the end of the strip.
        let anchor = self
            .tabs
            .context_index()
            .unwrap_or_else(|| self.tabs.tab_count().saturating_sub(1));

        let plan = plan_paste(&matches, restore_on_demand, anchor);
        let created = plan.len();
        for planned in plan {
            match planned.action {
                PasteAction::Navigate(url) => {
                    self.tabs.create_tab(&url, planned.index, None);
                }
                PasteAction::RestoreOnDemand(state) => {
                    self.tabs.create_tab(&state.url, planned.index, Some(&state));
                }
            }
        }
        self.save_session_best_effort();
        created
    }

    fn save_session_best_effort(&mut self) {
        match self.session.save() {
            Ok(()) => {}
            Err(SessionError::Unsupported) => {
                log::debug!("Host has no session persistence; skipping save");
            }
            Err(e) => log::warn!("Session save failed: {}", e),
        }
    }

    pub fn tabs(&self) -> &T {
        &self.tabs
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Tears the command layer down, handing the collaborators back.
    pub fn into_parts(self) -> (C, T, P, S) {
        (self.clipboard, self.tabs, self.prefs, self.session)
    }
}
