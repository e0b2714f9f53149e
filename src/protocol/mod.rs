//! Message protocol between the controller and per-page renderers.
//!
//! # Protocol Overview
//!
//! | Message | Direction | Payload | Reply |
//! |---------|-----------|---------|-------|
//! | `showMenu` | Controller → Renderer | `tabs` | [`MenuReply`] |
//! | `hideMenu` | Controller → Renderer | none | [`MenuReply`] |
//! | `activateTab` | Renderer → Controller | `tabId` | none |
//!
//! Messages are JSON objects discriminated by their `action` field, matching
//! the shape WebExtension runtime messaging uses:
//!
//! ```json
//! { "action": "activateTab", "tabId": 12 }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `message` | [`Message`] union and [`MenuReply`] |
//! | `tab` | [`TabDescriptor`] |

// ============================================================================
// Submodules
// ============================================================================

/// Message union and reply types.
pub mod message;

/// Tab descriptors supplied by the platform.
pub mod tab;

// ============================================================================
// Re-exports
// ============================================================================

pub use message::{MenuReply, MenuStatus, Message};
pub use tab::TabDescriptor;
