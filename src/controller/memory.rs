//! In-memory tab platform.
//!
//! [`InMemoryTabs`] holds tabs grouped by window and records every activation
//! it performs. Clones share state.

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Error, Result};
use crate::identifiers::TabId;
use crate::protocol::TabDescriptor;

use super::platform::TabPlatform;

// ============================================================================
// Types
// ============================================================================

/// One open tab and the window it lives in.
#[derive(Debug, Clone)]
struct OpenTab {
    window_id: u32,
    descriptor: TabDescriptor,
}

/// Shared platform state.
#[derive(Debug, Default)]
struct TabsState {
    tabs: Vec<OpenTab>,
    activations: Vec<TabId>,
    query_error: Option<String>,
}

// ============================================================================
// InMemoryTabs
// ============================================================================

/// A [`TabPlatform`] over an in-memory tab list.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTabs {
    state: Arc<Mutex<TabsState>>,
}

impl InMemoryTabs {
    /// Creates a platform with no tabs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a tab in a window.
    ///
    /// An active tab deactivates the other tabs of its window.
    pub fn open(&self, window_id: u32, tab: TabDescriptor) {
        let mut state = self.state.lock();
        if tab.active {
            Self::deactivate_window(&mut state, window_id);
        }
        state.tabs.push(OpenTab {
            window_id,
            descriptor: tab,
        });
    }

    /// Closes a tab. Returns `false` if it was not open.
    pub fn close(&self, tab_id: TabId) -> bool {
        let mut state = self.state.lock();
        let before = state.tabs.len();
        state.tabs.retain(|t| t.descriptor.id != tab_id);
        state.tabs.len() != before
    }

    /// Makes the next `query_tabs` calls fail with this message.
    pub fn fail_queries(&self, message: impl Into<String>) {
        self.state.lock().query_error = Some(message.into());
    }

    /// Returns the active tab of a window.
    #[must_use]
    pub fn active_tab(&self, window_id: u32) -> Option<TabId> {
        self.state
            .lock()
            .tabs
            .iter()
            .find(|t| t.window_id == window_id && t.descriptor.active)
            .map(|t| t.descriptor.id)
    }

    /// Returns every successful activation, oldest first.
    #[must_use]
    pub fn activations(&self) -> Vec<TabId> {
        self.state.lock().activations.clone()
    }

    fn deactivate_window(state: &mut TabsState, window_id: u32) {
        state
            .tabs
            .iter_mut()
            .filter(|t| t.window_id == window_id)
            .for_each(|t| t.descriptor.active = false);
    }
}

#[async_trait]
impl TabPlatform for InMemoryTabs {
    async fn query_tabs(&self) -> Result<Vec<TabDescriptor>> {
        let state = self.state.lock();
        if let Some(message) = &state.query_error {
            return Err(Error::platform(message.clone()));
        }
        Ok(state.tabs.iter().map(|t| t.descriptor.clone()).collect())
    }

    async fn activate_tab(&self, tab_id: TabId) -> Result<()> {
        let mut state = self.state.lock();

        let window_id = state
            .tabs
            .iter()
            .find(|t| t.descriptor.id == tab_id)
            .map(|t| t.window_id)
            .ok_or_else(|| Error::tab_not_found(tab_id))?;

        Self::deactivate_window(&mut state, window_id);
        for tab in state.tabs.iter_mut().filter(|t| t.descriptor.id == tab_id) {
            tab.descriptor.active = true;
        }
        state.activations.push(tab_id);

        debug!(%tab_id, window_id, "Tab activated");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
