//! Privileged, page-independent side of the extension.
//!
//! The [`Controller`] turns the user trigger into a `showMenu` request to the
//! active page's renderer, and turns `activateTab` requests from renderers
//! into platform tab switches.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | [`Controller`] and its handlers |
//! | `platform` | [`TabPlatform`] host trait |
//! | `memory` | [`InMemoryTabs`] platform |
//!
//! # Example
//!
//! ```ignore
//! let controller = Controller::new(platform);
//! controller.attach_renderer(tab_id, renderer.port());
//!
//! // Toolbar button clicked while `tab_id` is active.
//! if let Some(pending) = controller.on_trigger(tab_id).await {
//!     let reply = pending.await?;
//! }
//! ```

// ============================================================================
// Submodules
// ============================================================================

mod core;
mod memory;
mod platform;

// ============================================================================
// Re-exports
// ============================================================================

pub use self::core::Controller;
pub use memory::InMemoryTabs;
pub use platform::TabPlatform;
