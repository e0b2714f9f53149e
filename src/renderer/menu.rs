//! Menu overlay construction.
//!
//! Turns a tab list into an [`Overlay`]: the element tree a [`Page`]
//! materializes. Building is pure; nothing touches the page here.
//!
//! [`Page`]: super::Page

// ============================================================================
// Imports
// ============================================================================

use url::Url;

use crate::identifiers::TabId;
use crate::protocol::TabDescriptor;

use super::options::MenuOptions;
use super::theme::Palette;

// ============================================================================
// RowLeading
// ============================================================================

/// The fixed-size element at the start of a row.
///
/// Every row has exactly one, so titles line up whether or not a tab has a
/// favicon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowLeading {
    /// Favicon image.
    Icon {
        /// Image source.
        src: Url,
    },
    /// Blank box of the icon's size.
    Placeholder,
}

impl RowLeading {
    /// Picks an icon for a usable URL, a placeholder otherwise.
    ///
    /// Empty and unparseable URLs count as absent.
    #[must_use]
    pub fn for_icon_url(icon_url: Option<&str>) -> Self {
        icon_url
            .filter(|url| !url.is_empty())
            .and_then(|url| Url::parse(url).ok())
            .map_or(Self::Placeholder, |src| Self::Icon { src })
    }

    /// Returns `true` for a favicon.
    #[inline]
    #[must_use]
    pub fn is_icon(&self) -> bool {
        matches!(self, Self::Icon { .. })
    }
}

// ============================================================================
// MenuRow
// ============================================================================

/// One clickable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// Tab activated when the row is clicked.
    pub tab_id: TabId,
    /// Icon or placeholder.
    pub leading: RowLeading,
    /// Single-line title, truncated with an ellipsis by the stylesheet.
    pub title: String,
}

// ============================================================================
// Overlay
// ============================================================================

/// The menu element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    /// Container element id.
    pub element_id: String,
    /// Palette snapshotted when the menu was built.
    pub palette: Palette,
    /// Icon and placeholder edge length in pixels.
    pub icon_size_px: u32,
    /// Rows in tab order.
    pub rows: Vec<MenuRow>,
}

impl Overlay {
    /// Builds one row per tab, in order.
    #[must_use]
    pub fn build(tabs: &[TabDescriptor], palette: Palette, options: &MenuOptions) -> Self {
        let rows = tabs
            .iter()
            .map(|tab| MenuRow {
                tab_id: tab.id,
                leading: RowLeading::for_icon_url(tab.icon_url.as_deref()),
                title: tab.title.clone(),
            })
            .collect();

        Self {
            element_id: options.overlay_id.clone(),
            palette,
            icon_size_px: options.icon_size_px,
            rows,
        }
    }

    /// Inline style for the container.
    #[inline]
    #[must_use]
    pub fn inline_style(&self) -> String {
        self.palette.custom_properties()
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Tab IDs in row order.
    #[must_use]
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.rows.iter().map(|row| row.tab_id).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
