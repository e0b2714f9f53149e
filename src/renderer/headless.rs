//! In-memory page.
//!
//! [`HeadlessPage`] keeps a minimal document model: style elements, attached
//! overlays with their positions, and whether the outside-click listener is
//! registered. Overlay sizes come from a fixed override or a simple text
//! layout estimate.
//!
//! Clones share one document, so a test can hand a clone to a renderer task
//! and inspect the document from outside.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::identifiers::OverlayHandle;

use super::menu::Overlay;
use super::page::Page;
use super::position::{Point, Size, Viewport};

// ============================================================================
// Constants
// ============================================================================

/// Horizontal row padding on each side.
const ROW_PADDING_X: f64 = 10.0;

/// Vertical row padding on each side.
const ROW_PADDING_Y: f64 = 5.0;

/// Vertical menu padding on each side.
const MENU_PADDING_Y: f64 = 5.0;

/// Menu border width.
const BORDER: f64 = 1.0;

/// Average glyph advance relative to font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Line height relative to font size.
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Icon gap assumed by the layout estimate.
const ICON_GAP: f64 = 8.0;

/// Font size assumed by the layout estimate.
const FONT_SIZE: f64 = 11.0;

// ============================================================================
// AttachedOverlay
// ============================================================================

/// An overlay as it sits in the headless document.
#[derive(Debug, Clone, PartialEq)]
pub struct AttachedOverlay {
    /// Handle issued on attach.
    pub handle: OverlayHandle,
    /// The element tree.
    pub overlay: Overlay,
    /// Inline style set on the container.
    pub inline_style: String,
    /// Top-left corner, `None` until placed.
    pub origin: Option<Point>,
    /// Layout size.
    pub size: Size,
}

// ============================================================================
// HeadlessPage
// ============================================================================

/// Document state shared by clones.
struct Document {
    viewport: Viewport,
    prefers_dark: bool,
    styles: Vec<(String, String)>,
    overlays: Vec<AttachedOverlay>,
    click_listener: bool,
    fixed_menu_size: Option<Size>,
    next_key: u64,
}

/// A [`Page`] backed by an in-memory document.
#[derive(Clone)]
pub struct HeadlessPage {
    document: Arc<Mutex<Document>>,
}

impl fmt::Debug for HeadlessPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let document = self.document.lock();
        f.debug_struct("HeadlessPage")
            .field("viewport", &document.viewport)
            .field("overlays", &document.overlays.len())
            .field("styles", &document.styles.len())
            .finish_non_exhaustive()
    }
}

impl HeadlessPage {
    /// Creates an empty, unscrolled page with a light color scheme.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            document: Arc::new(Mutex::new(Document {
                viewport: Viewport::new(width, height),
                prefers_dark: false,
                styles: Vec::new(),
                overlays: Vec::new(),
                click_listener: false,
                fixed_menu_size: None,
                next_key: 1,
            })),
        }
    }

    /// Makes every overlay lay out at this size.
    #[must_use]
    pub fn with_menu_size(self, size: Size) -> Self {
        self.document.lock().fixed_menu_size = Some(size);
        self
    }

    /// Sets the color-scheme preference.
    #[must_use]
    pub fn with_dark_scheme(self, dark: bool) -> Self {
        self.set_dark_scheme(dark);
        self
    }

    /// Changes the color-scheme preference.
    pub fn set_dark_scheme(&self, dark: bool) {
        self.document.lock().prefers_dark = dark;
    }

    /// Changes the scroll offset.
    pub fn scroll_to(&self, x: f64, y: f64) {
        let mut document = self.document.lock();
        document.viewport = document.viewport.scrolled(x, y);
    }

    /// Number of overlays in the document.
    #[must_use]
    pub fn overlay_count(&self) -> usize {
        self.document.lock().overlays.len()
    }

    /// The first overlay in the document, if any.
    #[must_use]
    pub fn overlay(&self) -> Option<AttachedOverlay> {
        self.document.lock().overlays.first().cloned()
    }

    /// Number of style elements with this id.
    #[must_use]
    pub fn style_count(&self, id: &str) -> usize {
        self.document
            .lock()
            .styles
            .iter()
            .filter(|(style_id, _)| style_id == id)
            .count()
    }

    /// Returns `true` while the outside-click listener is registered.
    #[must_use]
    pub fn has_outside_click_listener(&self) -> bool {
        self.document.lock().click_listener
    }

    /// Estimates the rendered size of an overlay.
    fn layout(overlay: &Overlay) -> Size {
        let icon = f64::from(overlay.icon_size_px);
        let line = (FONT_SIZE * LINE_HEIGHT_RATIO).max(icon);
        let widest_title = overlay
            .rows
            .iter()
            .map(|row| row.title.chars().count())
            .max()
            .unwrap_or(0);

        let width = 2.0 * BORDER
            + 2.0 * ROW_PADDING_X
            + icon
            + ICON_GAP
            + widest_title as f64 * FONT_SIZE * GLYPH_WIDTH_RATIO;
        let height = 2.0 * BORDER
            + 2.0 * MENU_PADDING_Y
            + overlay.rows.len() as f64 * (line + 2.0 * ROW_PADDING_Y);

        Size::new(width, height)
    }
}

impl Page for HeadlessPage {
    fn viewport(&self) -> Viewport {
        self.document.lock().viewport
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.document.lock().prefers_dark
    }

    fn contains_element(&self, id: &str) -> bool {
        let document = self.document.lock();
        document.styles.iter().any(|(style_id, _)| style_id == id)
            || document.overlays.iter().any(|o| o.overlay.element_id == id)
    }

    fn insert_style(&mut self, id: &str, css: &str) {
        self.document
            .lock()
            .styles
            .push((id.to_string(), css.to_string()));
    }

    fn attach_overlay(&mut self, overlay: &Overlay) -> OverlayHandle {
        let mut document = self.document.lock();
        let handle = OverlayHandle::new(document.next_key);
        document.next_key += 1;

        let size = document
            .fixed_menu_size
            .unwrap_or_else(|| Self::layout(overlay));

        document.overlays.push(AttachedOverlay {
            handle,
            overlay: overlay.clone(),
            inline_style: overlay.inline_style(),
            origin: None,
            size,
        });
        handle
    }

    fn overlay_size(&self, handle: OverlayHandle) -> Option<Size> {
        self.document
            .lock()
            .overlays
            .iter()
            .find(|o| o.handle == handle)
            .map(|o| o.size)
    }

    fn place_overlay(&mut self, handle: OverlayHandle, origin: Point) {
        if let Some(attached) = self
            .document
            .lock()
            .overlays
            .iter_mut()
            .find(|o| o.handle == handle)
        {
            attached.origin = Some(origin);
        }
    }

    fn detach_overlay(&mut self, handle: OverlayHandle) {
        self.document.lock().overlays.retain(|o| o.handle != handle);
    }

    fn set_outside_click_listener(&mut self, attached: bool) {
        self.document.lock().click_listener = attached;
    }
}

// ============================================================================
// Tests
// ============================================================================
