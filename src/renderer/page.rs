//! The page surface a renderer draws into.
//!
//! A [`Page`] is the renderer's only view of the document: a browser binding
//! implements it over the real DOM, and [`HeadlessPage`] implements it in
//! memory.
//!
//! [`HeadlessPage`]: super::HeadlessPage

// ============================================================================
// Imports
// ============================================================================

use crate::identifiers::OverlayHandle;

use super::menu::Overlay;
use super::position::{Point, Size, Viewport};

// ============================================================================
// Page
// ============================================================================

/// Document operations the renderer needs.
///
/// Implementations are driven from a single task; they are `Send` only so the
/// renderer can be moved onto that task.
pub trait Page: Send {
    /// Returns the viewport size and scroll offset.
    fn viewport(&self) -> Viewport;

    /// Evaluates `(prefers-color-scheme: dark)`.
    fn prefers_dark_scheme(&self) -> bool;

    /// Returns `true` if an element with this id exists in the document.
    fn contains_element(&self, id: &str) -> bool;

    /// Appends a `<style>` element with the given id to the document head.
    fn insert_style(&mut self, id: &str, css: &str);

    /// Appends the overlay to the document body and returns its handle.
    fn attach_overlay(&mut self, overlay: &Overlay) -> OverlayHandle;

    /// Returns the rendered size of an attached overlay.
    fn overlay_size(&self, handle: OverlayHandle) -> Option<Size>;

    /// Moves an attached overlay's top-left corner.
    fn place_overlay(&mut self, handle: OverlayHandle, origin: Point);

    /// Removes an overlay. Unknown handles are ignored.
    fn detach_overlay(&mut self, handle: OverlayHandle);

    /// Adds or removes the capture-phase document click listener.
    fn set_outside_click_listener(&mut self, attached: bool);
}

// ============================================================================
// PageEvent
// ============================================================================

/// Document events the renderer reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// `mousemove` at page coordinates.
    PointerMove(Point),
    /// `click` somewhere in the document.
    Click(ClickTarget),
    /// `visibilitychange`.
    VisibilityChange {
        /// `document.hidden` after the change.
        hidden: bool,
    },
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A menu row.
    Row {
        /// Overlay containing the row.
        overlay: OverlayHandle,
        /// Zero-based row index.
        index: usize,
    },
    /// Anything else in the document.
    Elsewhere,
}
