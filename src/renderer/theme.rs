//! Light and dark palettes and the shared menu stylesheet.
//!
//! The stylesheet is injected once per page and never mentions a color. Each
//! overlay carries its palette as CSS custom properties in its own inline
//! style, so a menu keeps the palette it was built with.

// ============================================================================
// Imports
// ============================================================================

use super::options::MenuOptions;

// ============================================================================
// ColorScheme
// ============================================================================

/// System color-scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// `prefers-color-scheme: light` (or no preference).
    Light,
    /// `prefers-color-scheme: dark`.
    Dark,
}

impl ColorScheme {
    /// Maps a `(prefers-color-scheme: dark)` media query result.
    #[inline]
    #[must_use]
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Returns the palette for this scheme.
    #[inline]
    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Light => Palette::LIGHT,
            Self::Dark => Palette::DARK,
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Menu colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Menu background.
    pub background: &'static str,
    /// Title text.
    pub text: &'static str,
    /// 1px menu border.
    pub border: &'static str,
    /// Drop shadow color.
    pub shadow: &'static str,
    /// Row background under the pointer.
    pub hover: &'static str,
}

impl Palette {
    /// White background, black text.
    pub const LIGHT: Self = Self {
        background: "#fff",
        text: "#000",
        border: "#ccc",
        shadow: "rgba(0,0,0,0.15)",
        hover: "#eee",
    };

    /// Dark-gray background, white text.
    pub const DARK: Self = Self {
        background: "#333",
        text: "#fff",
        border: "#444",
        shadow: "rgba(0,0,0,0.5)",
        hover: "#555",
    };

    /// Renders the palette as CSS custom property declarations.
    #[must_use]
    pub fn custom_properties(&self) -> String {
        format!(
            "--tab-list-menu-background: {}; --tab-list-menu-text: {}; \
             --tab-list-menu-border: {}; --tab-list-menu-shadow: {}; \
             --tab-list-menu-hover: {};",
            self.background, self.text, self.border, self.shadow, self.hover
        )
    }
}

// ============================================================================
// Stylesheet
// ============================================================================

/// Row element class.
pub const ROW_CLASS: &str = "tab-list-menu-row";

/// Icon element class.
pub const ICON_CLASS: &str = "tab-list-menu-icon";

/// Placeholder element class.
pub const PLACEHOLDER_CLASS: &str = "tab-list-menu-placeholder";

/// Title element class.
pub const TITLE_CLASS: &str = "tab-list-menu-title";

/// Renders the shared stylesheet for the configured overlay.
///
/// Rules are `!important` so page styles cannot leak into the menu.
#[must_use]
pub fn stylesheet(options: &MenuOptions) -> String {
    let id = &options.overlay_id;
    let font = &options.font_family;
    let font_size = options.font_size_px;
    let icon = options.icon_size_px;
    let gap = options.icon_gap_px;
    let z_index = options.z_index;

    format!(
        r#"#{id} {{
  position: absolute !important;
  z-index: {z_index} !important;
  font-family: {font} !important;
  font-size: {font_size}px !important;
  color: var(--tab-list-menu-text) !important;
  background: var(--tab-list-menu-background) !important;
  border: 1px solid var(--tab-list-menu-border) !important;
  box-shadow: 0 2px 5px var(--tab-list-menu-shadow) !important;
  padding: 5px 0 !important;
}}
#{id} .{ROW_CLASS} {{
  display: flex !important;
  align-items: center !important;
  padding: 5px 10px !important;
  cursor: pointer !important;
}}
#{id} .{ROW_CLASS}:hover {{
  background: var(--tab-list-menu-hover) !important;
}}
#{id} .{ICON_CLASS}, #{id} .{PLACEHOLDER_CLASS} {{
  width: {icon}px !important;
  height: {icon}px !important;
  margin-right: {gap}px !important;
  flex-shrink: 0 !important;
}}
#{id} .{TITLE_CLASS} {{
  white-space: nowrap !important;
  overflow: hidden !important;
  text-overflow: ellipsis !important;
}}
#{id} * {{
  font-size: {font_size}px !important;
}}
"#
    )
}

// ============================================================================
// Tests
// ============================================================================
