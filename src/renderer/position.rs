//! Menu placement against the viewport.
//!
//! The menu opens with its top-left corner at the pointer. On each axis it
//! flips to the other side of the pointer when it would overflow the visible
//! area and would fit after flipping. A menu larger than the viewport on an
//! axis is left where it is on that axis.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

// ============================================================================
// Geometry
// ============================================================================

/// A position in page coordinates (CSS pixels, scroll included).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset from the page's left edge.
    pub x: f64,
    /// Vertical offset from the page's top edge.
    pub y: f64,
}

impl Point {
    /// Creates a point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rendered dimensions of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    /// Width in CSS pixels.
    pub width: f64,
    /// Height in CSS pixels.
    pub height: f64,
}

impl Size {
    /// Creates a size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Visible area of the page.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    /// `window.innerWidth`.
    pub width: f64,
    /// `window.innerHeight`.
    pub height: f64,
    /// `window.scrollX`.
    pub scroll_x: f64,
    /// `window.scrollY`.
    pub scroll_y: f64,
}

impl Viewport {
    /// Creates an unscrolled viewport.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll_x: 0.0,
            scroll_y: 0.0,
        }
    }

    /// Sets the scroll offset.
    #[inline]
    #[must_use]
    pub const fn scrolled(mut self, scroll_x: f64, scroll_y: f64) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }
}

// ============================================================================
// Placement
// ============================================================================

/// Where the menu ended up and which flips produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner of the menu in page coordinates.
    pub origin: Point,
    /// Menu opens to the left of the pointer.
    pub flipped_x: bool,
    /// Menu opens above the pointer.
    pub flipped_y: bool,
}

/// Computes the menu's top-left corner for a pointer position.
///
/// Both axes are decided from the unflipped pointer, independently.
#[must_use]
pub fn place_menu(pointer: Point, menu: Size, viewport: Viewport) -> Placement {
    let x = flip_axis(pointer.x, menu.width, viewport.width, viewport.scroll_x);
    let y = flip_axis(pointer.y, menu.height, viewport.height, viewport.scroll_y);

    Placement {
        origin: Point::new(x.unwrap_or(pointer.x), y.unwrap_or(pointer.y)),
        flipped_x: x.is_some(),
        flipped_y: y.is_some(),
    }
}

/// Returns the flipped start coordinate, or `None` when no flip applies.
#[inline]
fn flip_axis(start: f64, extent: f64, visible: f64, scroll: f64) -> Option<f64> {
    let fits = extent <= visible;
    let overflows = start + extent > visible + scroll;
    (fits && overflows).then(|| start - extent)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 800.0);
    const MENU: Size = Size::new(150.0, 200.0);

    #[test]
    fn test_flips_horizontally_near_right_edge() {
        let placement = place_menu(Point::new(900.0, 100.0), MENU, VIEWPORT);
        assert_eq!(placement.origin, Point::new(750.0, 100.0));
        assert!(placement.flipped_x);
        assert!(!placement.flipped_y);
    }

    #[test]
    fn test_flips_vertically_near_bottom_edge() {
        let placement = place_menu(Point::new(100.0, 700.0), MENU, VIEWPORT);
        assert_eq!(placement.origin, Point::new(100.0, 500.0));
        assert!(!placement.flipped_x);
        assert!(placement.flipped_y);
    }

    #[test]
    fn test_flips_both_in_corner() {
        let placement = place_menu(Point::new(900.0, 700.0), MENU, VIEWPORT);
        assert_eq!(placement.origin, Point::new(750.0, 500.0));
        assert!(placement.flipped_x && placement.flipped_y);
    }

    #[test]
    fn test_no_flip_with_room() {
        let placement = place_menu(Point::new(100.0, 100.0), MENU, VIEWPORT);
        assert_eq!(placement.origin, Point::new(100.0, 100.0));
        assert!(!placement.flipped_x && !placement.flipped_y);
    }

    #[test]
    fn test_oversized_menu_never_flips_horizontally() {
        let wide = Size::new(1200.0, 200.0);
        for x in [0.0, 100.0, 500.0, 900.0, 999.0] {
            let placement = place_menu(Point::new(x, 100.0), wide, VIEWPORT);
            assert!(!placement.flipped_x, "flipped at x={x}");
            assert_eq!(placement.origin.x, x);
        }
    }

    #[test]
    fn test_oversized_menu_never_flips_vertically() {
        let tall = Size::new(150.0, 1000.0);
        for y in [0.0, 100.0, 400.0, 700.0, 799.0] {
            let placement = place_menu(Point::new(100.0, y), tall, VIEWPORT);
            assert!(!placement.flipped_y, "flipped at y={y}");
            assert_eq!(placement.origin.y, y);
        }
    }

    #[test]
    fn test_exact_fit_does_not_flip() {
        let placement = place_menu(Point::new(850.0, 600.0), MENU, VIEWPORT);
        assert_eq!(placement.origin, Point::new(850.0, 600.0));
    }

    #[test]
    fn test_scroll_offset_moves_edges() {
        let viewport = VIEWPORT.scrolled(0.0, 1000.0);

        // Below the fold of an unscrolled page, but visible after scrolling.
        let placement = place_menu(Point::new(100.0, 1500.0), MENU, viewport);
        assert!(!placement.flipped_y);

        let placement = place_menu(Point::new(100.0, 1700.0), MENU, viewport);
        assert_eq!(placement.origin.y, 1500.0);
    }

    proptest! {
        #[test]
        fn prop_horizontal_flip_rule(
            x in 0.0f64..3000.0,
            y in 0.0f64..3000.0,
            w in 1.0f64..1500.0,
            h in 1.0f64..1500.0,
            sx in 0.0f64..1000.0,
        ) {
            let viewport = VIEWPORT.scrolled(sx, 0.0);
            let placement = place_menu(Point::new(x, y), Size::new(w, h), viewport);

            let expected = w <= viewport.width && x + w > viewport.width + sx;
            prop_assert_eq!(placement.flipped_x, expected);
            if expected {
                prop_assert_eq!(placement.origin.x, x - w);
            } else {
                prop_assert_eq!(placement.origin.x, x);
            }
        }

        #[test]
        fn prop_vertical_flip_rule(
            x in 0.0f64..3000.0,
            y in 0.0f64..3000.0,
            w in 1.0f64..1500.0,
            h in 1.0f64..1500.0,
            sy in 0.0f64..1000.0,
        ) {
            let viewport = VIEWPORT.scrolled(0.0, sy);
            let placement = place_menu(Point::new(x, y), Size::new(w, h), viewport);

            let expected = h <= viewport.height && y + h > viewport.height + sy;
            prop_assert_eq!(placement.flipped_y, expected);
            if expected {
                prop_assert_eq!(placement.origin.y, y - h);
            } else {
                prop_assert_eq!(placement.origin.y, y);
            }
        }

        #[test]
        fn prop_axes_are_independent(
            x in 0.0f64..2000.0,
            y in 0.0f64..2000.0,
            w in 1.0f64..1500.0,
        ) {
            let a = place_menu(Point::new(x, y), Size::new(w, 50.0), VIEWPORT);
            let b = place_menu(Point::new(x, y), Size::new(w, 5000.0), VIEWPORT);
            prop_assert_eq!(a.origin.x, b.origin.x);

            let c = place_menu(Point::new(x, y), Size::new(50.0, w), VIEWPORT);
            let d = place_menu(Point::new(x, y), Size::new(5000.0, w), VIEWPORT);
            prop_assert_eq!(c.origin.y, d.origin.y);
        }
    }
}
