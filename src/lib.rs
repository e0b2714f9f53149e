//! Tab List Menu - a floating list of open tabs for WebExtensions.
//!
//! Clicking the extension's toolbar button opens a context menu of every
//! open tab at the last known mouse position; clicking an entry switches to
//! that tab.
//!
//! # Architecture
//!
//! Two components, connected only by JSON message passing:
//!
//! - **Controller** (background context): enumerates tabs on the user
//!   trigger, asks the active page to show them, and performs tab switches.
//! - **Renderer** (one per page): tracks the pointer, owns the menu overlay,
//!   keeps it inside the viewport, and reports the user's choice.
//!
//! ```text
//! trigger ─► Controller ── showMenu(tabs) ──► Renderer ─► overlay
//!                ▲                               │
//!                └──────── activateTab(id) ◄─────┘ row click
//! ```
//!
//! Key design principles:
//!
//! - The host browser is reached through [`TabPlatform`] and [`Page`], so the
//!   protocol and positioning logic run against any binding
//! - Menu visibility is a tagged state holding the overlay handle, never a
//!   separate flag
//! - Every failure the user could hit is a silent no-op
//!
//! # Quick Start
//!
//! ```no_run
//! use tab_list_menu::{
//!     Controller, ControllerPort, HeadlessPage, InMemoryTabs, MenuOptions, RendererHandle,
//!     TabDescriptor, TabId, channel,
//! };
//!
//! #[tokio::main]
//! async fn main() -> tab_list_menu::Result<()> {
//!     let tabs = InMemoryTabs::new();
//!     tabs.open(1, TabDescriptor::new(TabId::new(1), "Inbox").with_active(true));
//!     tabs.open(1, TabDescriptor::new(TabId::new(2), "Docs"));
//!
//!     let controller = Controller::new(tabs);
//!     let (port, inbox) = channel();
//!     tokio::spawn({
//!         let controller = controller.clone();
//!         async move { controller.serve(inbox).await }
//!     });
//!
//!     let page = HeadlessPage::new(1280.0, 720.0);
//!     let renderer = RendererHandle::spawn(page, MenuOptions::new(), ControllerPort::new(port));
//!     controller.attach_renderer(TabId::new(1), renderer.port());
//!
//!     if let Some(pending) = controller.on_trigger(TabId::new(1)).await {
//!         println!("menu {:?}", pending.await?.status);
//!     }
//!
//!     renderer.shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`controller`] | [`Controller`], [`TabPlatform`] |
//! | [`renderer`] | [`Renderer`], [`Page`], placement, theme |
//! | [`protocol`] | [`Message`], [`MenuReply`], [`TabDescriptor`] |
//! | [`transport`] | Message ports and typed endpoints |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Background-side controller.
///
/// - [`Controller`] - Trigger and activation handlers
/// - [`TabPlatform`] - Host tab API
pub mod controller;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Message protocol types.
pub mod protocol;

/// Page-side renderer.
///
/// - [`Renderer`] - Menu state machine
/// - [`RendererHandle`] - Renderer event loop
/// - [`Page`] - Document surface
pub mod renderer;

/// Message transport.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Controller types
pub use controller::{Controller, InMemoryTabs, TabPlatform};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::{OverlayHandle, TabId};

// Protocol types
pub use protocol::{MenuReply, MenuStatus, Message, TabDescriptor};

// Renderer types
pub use renderer::{
    ClickOutcome, ClickTarget, ColorScheme, HeadlessPage, MenuOptions, MenuState, Overlay, Page,
    PageEvent, Palette, Placement, Point, Renderer, RendererHandle, Size, Viewport, place_menu,
};

// Transport types
pub use transport::{ControllerPort, Inbox, PendingReply, Port, RendererPort, channel};
