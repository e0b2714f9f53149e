//! Error types for the tab list menu.
//!
//! This module defines all error types used throughout the crate.
//!
//! Most failures in this crate are deliberately swallowed at the component
//! boundary (a missing renderer or a stale tab id is a silent no-op for the
//! user). The variants below are what the internal layers report before that
//! happens, so callers that drive the components directly can still observe
//! them.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Delivery | [`Error::PortClosed`], [`Error::NoReply`], [`Error::RendererNotAttached`] |
//! | Protocol | [`Error::Protocol`], [`Error::UnexpectedMessage`] |
//! | Platform | [`Error::Platform`], [`Error::TabNotFound`] |
//! | External | [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;

use crate::identifiers::TabId;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when menu options are invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Delivery Errors
    // ========================================================================
    /// The receiving side of a message port is gone.
    #[error("Message port closed")]
    PortClosed,

    /// The receiver dropped a request without replying.
    #[error("No reply received")]
    NoReply(#[from] RecvError),

    /// No renderer is attached to the page of the given tab.
    ///
    /// Typical for restricted pages where content scripts cannot run.
    #[error("No renderer attached to tab {tab_id}")]
    RendererNotAttached {
        /// Tab whose page has no renderer.
        tab_id: TabId,
    },

    // ========================================================================
    // Protocol Errors
    // ========================================================================
    /// Malformed or undecodable message.
    #[error("Protocol error: {message}")]
    Protocol {
        /// Description of the protocol violation.
        message: String,
    },

    /// A well-formed message arrived on a channel that does not handle it.
    #[error("Unexpected message: {action}")]
    UnexpectedMessage {
        /// The message action name.
        action: String,
    },

    // ========================================================================
    // Platform Errors
    // ========================================================================
    /// The host tab platform rejected an operation.
    #[error("Platform error: {message}")]
    Platform {
        /// Description reported by the platform.
        message: String,
    },

    /// Tab does not exist (closed since it was enumerated).
    #[error("Tab not found: {tab_id}")]
    TabNotFound {
        /// The missing tab ID.
        tab_id: TabId,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a renderer not attached error.
    #[inline]
    pub fn renderer_not_attached(tab_id: TabId) -> Self {
        Self::RendererNotAttached { tab_id }
    }

    /// Creates a protocol error.
    #[inline]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Creates an unexpected message error.
    #[inline]
    pub fn unexpected_message(action: impl Into<String>) -> Self {
        Self::UnexpectedMessage {
            action: action.into(),
        }
    }

    /// Creates a platform error.
    #[inline]
    pub fn platform(message: impl Into<String>) -> Self {
        Self::Platform {
            message: message.into(),
        }
    }

    /// Creates a tab not found error.
    #[inline]
    pub fn tab_not_found(tab_id: TabId) -> Self {
        Self::TabNotFound { tab_id }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the message never reached, or never came back from,
    /// the other side.
    #[inline]
    #[must_use]
    pub fn is_delivery_error(&self) -> bool {
        matches!(
            self,
            Self::PortClosed | Self::NoReply(_) | Self::RendererNotAttached { .. }
        )
    }

    /// Returns `true` if the host platform refused the operation.
    #[inline]
    #[must_use]
    pub fn is_platform_error(&self) -> bool {
        matches!(self, Self::Platform { .. } | Self::TabNotFound { .. })
    }

    /// Returns `true` if the error comes from a malformed or misrouted message.
    #[inline]
    #[must_use]
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Self::Protocol { .. } | Self::UnexpectedMessage { .. } | Self::Json(_)
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
