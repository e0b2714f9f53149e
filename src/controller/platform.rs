//! Host tab platform.

// ============================================================================
// Imports
// ============================================================================

use async_trait::async_trait;

use crate::error::Result;
use crate::identifiers::TabId;
use crate::protocol::TabDescriptor;

// ============================================================================
// TabPlatform
// ============================================================================

/// Tab operations provided by the browser.
///
/// A WebExtension binding maps these onto `tabs.query({})` and
/// `tabs.update(id, { active: true })`.
#[async_trait]
pub trait TabPlatform: Send + Sync {
    /// Lists every open tab in every window.
    async fn query_tabs(&self) -> Result<Vec<TabDescriptor>>;

    /// Makes the tab the active one in its window.
    ///
    /// Stale IDs may fail or silently do nothing, at the platform's choice.
    async fn activate_tab(&self, tab_id: TabId) -> Result<()>;
}
