//! Type-safe identifiers.
//!
//! Newtype wrappers prevent mixing a tab ID with other integers.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// TabId
// ============================================================================

/// Platform-assigned tab identifier.
///
/// Opaque to this crate: it is only ever compared, logged and handed back to
/// the platform. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TabId(i32);

impl TabId {
    /// Wraps a raw platform tab ID.
    #[inline]
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Returns the raw platform tab ID.
    #[inline]
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TabId {
    #[inline]
    fn from(id: i32) -> Self {
        Self(id)
    }
}

// ============================================================================
// OverlayHandle
// ============================================================================

/// Handle to an overlay element attached to a page.
///
/// Issued by [`Page::attach_overlay`](crate::renderer::Page::attach_overlay);
/// only meaningful to the page that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayHandle(u64);

impl OverlayHandle {
    /// Wraps a page-local overlay key.
    #[inline]
    #[must_use]
    pub const fn new(key: u64) -> Self {
        Self(key)
    }

    /// Returns the page-local overlay key.
    #[inline]
    #[must_use]
    pub const fn key(self) -> u64 {
        self.0
    }
}

impl fmt::Display for OverlayHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "overlay#{}", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
