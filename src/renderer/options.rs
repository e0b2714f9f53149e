//! Menu appearance and behaviour options.
//!
//! Provides a type-safe interface for configuring the element ids, font and
//! icon metrics of the menu overlay, and whether it closes when the page is
//! hidden.
//!
//! # Example
//!
//! ```ignore
//! use tab_list_menu::MenuOptions;
//!
//! let options = MenuOptions::new()
//!     .with_font_size(13)
//!     .with_icon_size(20)
//!     .with_z_index(2_147_483_647);
//! ```
//!
//! Options also load from JSON, with any omitted field taking its default:
//!
//! ```json
//! { "fontSizePx": 13, "zIndex": 2147483647 }
//! ```

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ============================================================================
// Constants
// ============================================================================

/// Default overlay element id.
pub const DEFAULT_OVERLAY_ID: &str = "tab-list-menu";

/// Default style element id, doubling as the injected-styles marker.
pub const DEFAULT_STYLE_ID: &str = "tab-list-menu-style";

// ============================================================================
// MenuOptions
// ============================================================================

/// Menu overlay configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuOptions {
    /// Element id of the overlay container.
    pub overlay_id: String,

    /// Element id of the injected style block.
    pub style_id: String,

    /// CSS font family for row titles.
    pub font_family: String,

    /// Font size in pixels.
    pub font_size_px: u32,

    /// Icon and placeholder edge length in pixels.
    pub icon_size_px: u32,

    /// Gap between icon and title in pixels.
    pub icon_gap_px: u32,

    /// Stacking order of the overlay.
    pub z_index: i32,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            overlay_id: DEFAULT_OVERLAY_ID.to_string(),
            style_id: DEFAULT_STYLE_ID.to_string(),
            font_family: "sans-serif".to_string(),
            font_size_px: 11,
            icon_size_px: 16,
            icon_gap_px: 8,
            z_index: 10_000,
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

impl MenuOptions {
    /// Creates options with default settings.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from JSON and validates them.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the text is not a valid options object
    /// - [`Error::Config`] if a value is out of range
    pub fn from_json(text: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(text)?;
        options.validate()?;
        Ok(options)
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl MenuOptions {
    /// Sets the overlay element id.
    #[inline]
    #[must_use]
    pub fn with_overlay_id(mut self, id: impl Into<String>) -> Self {
        self.overlay_id = id.into();
        self
    }

    /// Sets the style element id.
    #[inline]
    #[must_use]
    pub fn with_style_id(mut self, id: impl Into<String>) -> Self {
        self.style_id = id.into();
        self
    }

    /// Sets the font family.
    #[inline]
    #[must_use]
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Sets the font size in pixels.
    #[inline]
    #[must_use]
    pub fn with_font_size(mut self, px: u32) -> Self {
        self.font_size_px = px;
        self
    }

    /// Sets the icon edge length in pixels.
    #[inline]
    #[must_use]
    pub fn with_icon_size(mut self, px: u32) -> Self {
        self.icon_size_px = px;
        self
    }

    /// Sets the icon-to-title gap in pixels.
    #[inline]
    #[must_use]
    pub fn with_icon_gap(mut self, px: u32) -> Self {
        self.icon_gap_px = px;
        self
    }

    /// Sets the overlay z-index.
    #[inline]
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

// ============================================================================
// Validation
// ============================================================================

impl MenuOptions {
    /// Checks that ids are usable and sizes are non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        Self::validate_id("overlayId", &self.overlay_id)?;
        Self::validate_id("styleId", &self.style_id)?;

        if self.overlay_id == self.style_id {
            return Err(Error::config("overlayId and styleId must differ"));
        }
        if self.font_size_px == 0 {
            return Err(Error::config("fontSizePx must be positive"));
        }
        if self.icon_size_px == 0 {
            return Err(Error::config("iconSizePx must be positive"));
        }
        if self.font_family.trim().is_empty() {
            return Err(Error::config("fontFamily must not be empty"));
        }
        Ok(())
    }

    fn validate_id(field: &str, id: &str) -> Result<()> {
        if id.is_empty() {
            return Err(Error::config(format!("{field} must not be empty")));
        }
        if id.chars().any(char::is_whitespace) {
            return Err(Error::config(format!("{field} must not contain whitespace")));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = MenuOptions::new();
        assert_eq!(options.overlay_id, DEFAULT_OVERLAY_ID);
        assert_eq!(options.style_id, DEFAULT_STYLE_ID);
        assert_eq!(options.font_size_px, 11);
        assert_eq!(options.icon_size_px, 16);
        assert_eq!(options.z_index, 10_000);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_chain() {
        let options = MenuOptions::new()
            .with_overlay_id("menu")
            .with_style_id("menu-css")
            .with_font_family("system-ui")
            .with_font_size(13)
            .with_icon_size(20)
            .with_icon_gap(4)
            .with_z_index(5);

        assert_eq!(options.overlay_id, "menu");
        assert_eq!(options.style_id, "menu-css");
        assert_eq!(options.font_family, "system-ui");
        assert_eq!(options.font_size_px, 13);
        assert_eq!(options.icon_size_px, 20);
        assert_eq!(options.icon_gap_px, 4);
        assert_eq!(options.z_index, 5);
    }

    #[test]
    fn test_from_json_partial() {
        let options =
            MenuOptions::from_json(r#"{"fontSizePx": 13, "zIndex": 7}"#).expect("parse");
        assert_eq!(options.font_size_px, 13);
        assert_eq!(options.z_index, 7);
        assert_eq!(options.overlay_id, DEFAULT_OVERLAY_ID);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(MenuOptions::new().with_overlay_id("").validate().is_err());
        assert!(MenuOptions::new().with_style_id("a b").validate().is_err());
        assert!(
            MenuOptions::new()
                .with_style_id(DEFAULT_OVERLAY_ID)
                .validate()
                .is_err()
        );
        assert!(MenuOptions::new().with_font_size(0).validate().is_err());
        assert!(MenuOptions::new().with_icon_size(0).validate().is_err());
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        let err = MenuOptions::from_json(r#"{"iconSizePx": 0}"#).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
