//! Tab descriptors.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::identifiers::TabId;

// ============================================================================
// TabDescriptor
// ============================================================================

/// Read-only description of one open tab.
///
/// Field names on the wire follow the browser `tabs` API, so a tab object
/// returned by `tabs.query` decodes directly; unknown fields are ignored.
///
/// # Format
///
/// ```json
/// {
///   "id": 12,
///   "title": "Example Domain",
///   "favIconUrl": "https://example.com/favicon.ico",
///   "active": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Platform-assigned tab ID.
    pub id: TabId,

    /// Tab title. Empty when the platform withholds it.
    #[serde(default)]
    pub title: String,

    /// Favicon URL, if the platform knows one.
    #[serde(
        rename = "favIconUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub icon_url: Option<String>,

    /// Whether this tab is the active one in its window.
    #[serde(default)]
    pub active: bool,
}

impl TabDescriptor {
    /// Creates a descriptor without icon, not active.
    #[inline]
    #[must_use]
    pub fn new(id: TabId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            icon_url: None,
            active: false,
        }
    }

    /// Sets the favicon URL.
    #[inline]
    #[must_use]
    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Marks the tab as active in its window.
    #[inline]
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
