//! Message transport between the controller and renderers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐   RendererPort → Inbox    ┌─────────────────┐
//! │   Controller    │──────────────────────────►│  Renderer       │
//! │  (privileged)   │                           │  (one per page) │
//! │                 │◄──────────────────────────│                 │
//! └─────────────────┘   Inbox ← ControllerPort  └─────────────────┘
//! ```
//!
//! Both directions carry JSON text, never shared values.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `port` | Raw port/inbox pair, pending replies |
//! | `endpoint` | Typed per-direction endpoints |

// ============================================================================
// Submodules
// ============================================================================

/// Typed per-direction endpoints.
pub mod endpoint;

/// Raw message ports.
pub mod port;

// ============================================================================
// Re-exports
// ============================================================================

pub use endpoint::{ControllerPort, RendererPort};
pub use port::{Inbox, Incoming, PendingReply, Port, Responder, channel};
