//! Page-side menu renderer.
//!
//! One renderer runs per page. It tracks the pointer, owns the menu state,
//! builds and places the overlay, and reports the user's choice to the
//! controller.
//!
//! # Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | `core` | [`Renderer`] state machine |
//! | `task` | [`RendererHandle`] event loop |
//! | `page` | [`Page`] trait and document events |
//! | `headless` | [`HeadlessPage`] in-memory document |
//! | `menu` | [`Overlay`] construction |
//! | `position` | Viewport-aware placement |
//! | `theme` | Palettes and stylesheet |
//! | `options` | [`MenuOptions`] |
//!
//! # Example
//!
//! ```ignore
//! let renderer = RendererHandle::spawn(page, MenuOptions::new(), controller_port);
//! controller.attach_renderer(tab_id, renderer.port());
//!
//! renderer.dispatch(PageEvent::PointerMove(Point::new(120.0, 80.0)))?;
//! ```

// ============================================================================
// Submodules
// ============================================================================

pub mod core;
pub mod headless;
pub mod menu;
pub mod options;
pub mod page;
pub mod position;
pub mod task;
pub mod theme;

// ============================================================================
// Re-exports
// ============================================================================

pub use self::core::{ClickOutcome, MenuState, OpenMenu, Renderer};
pub use headless::{AttachedOverlay, HeadlessPage};
pub use menu::{MenuRow, Overlay, RowLeading};
pub use options::MenuOptions;
pub use page::{ClickTarget, Page, PageEvent};
pub use position::{Placement, Point, Size, Viewport, place_menu};
pub use task::RendererHandle;
pub use theme::{ColorScheme, Palette};
