//=========================================================================
// Clock Hit Region
//
// Resolution-independent hit-testing for the on-screen clock widget.
//
// The clickable area is the union of a circle (the clock face) and an
// axis-aligned rectangle (the surrounding HUD panel). Both shapes are
// stored in viewport-relative fractional coordinates, derived from pixel
// constants measured at a reference resolution, so a point hits the same
// logical area regardless of the current window size.
//
// Hit-testing is pure: the same pixel point and viewport always produce
// the same answer.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::Viewport;

//=== Reference Calibration ===============================================

/// Reference resolution the default pixel constants were measured at.
const REFERENCE_WIDTH: f32 = 1600.0;
const REFERENCE_HEIGHT: f32 = 900.0;

/// Clock face center at the reference resolution, in pixels.
const CLOCK_CENTER_PX: (f32, f32) = (1336.0, 117.0);

/// Clock face radius at the reference resolution, in pixels.
const CLOCK_RADIUS_PX: f32 = 111.0;

/// HUD panel rectangle at the reference resolution, in pixels.
const PANEL_TOP_LEFT_PX: (f32, f32) = (1343.0, 14.0);
const PANEL_BOTTOM_RIGHT_PX: (f32, f32) = (1576.0, 211.0);

//=== HitRegion ===========================================================

/// Circle-union-rectangle hit region in fractional viewport coordinates.
///
/// Fractional coordinates are pixel positions divided by the viewport
/// dimensions (x by width, y by height). The circle radius is a fraction
/// of the viewport width, matching how the region was calibrated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    circle_center: (f32, f32),
    circle_radius: f32,
    rect_top_left: (f32, f32),
    rect_bottom_right: (f32, f32),
}

impl HitRegion {
    //--- Construction -----------------------------------------------------

    /// Builds a region from pixel constants measured at a reference
    /// resolution.
    ///
    /// The pixel values are converted to fractional coordinates once,
    /// here; hit-testing never needs the reference resolution again.
    pub fn from_reference_pixels(
        reference: Viewport,
        circle_center: (f32, f32),
        circle_radius: f32,
        rect_top_left: (f32, f32),
        rect_bottom_right: (f32, f32),
    ) -> Self {
        Self {
            circle_center: (
                circle_center.0 / reference.width,
                circle_center.1 / reference.height,
            ),
            circle_radius: circle_radius / reference.width,
            rect_top_left: (
                rect_top_left.0 / reference.width,
                rect_top_left.1 / reference.height,
            ),
            rect_bottom_right: (
                rect_bottom_right.0 / reference.width,
                rect_bottom_right.1 / reference.height,
            ),
        }
    }

    /// The default clock-widget region, calibrated at 1600×900.
    pub fn clock_default() -> Self {
        Self::from_reference_pixels(
            Viewport::new(REFERENCE_WIDTH, REFERENCE_HEIGHT),
            CLOCK_CENTER_PX,
            CLOCK_RADIUS_PX,
            PANEL_TOP_LEFT_PX,
            PANEL_BOTTOM_RIGHT_PX,
        )
    }

    //--- Hit Testing ------------------------------------------------------

    /// Returns `true` if the pixel point lies inside the circle OR the
    /// rectangle, after conversion to fractional coordinates.
    pub fn contains(&self, x_px: f32, y_px: f32, viewport: Viewport) -> bool {
        let point = (x_px / viewport.width, y_px / viewport.height);
        self.circle_contains(point) || self.rect_contains(point)
    }

    //--- Internal Helpers -------------------------------------------------

    fn circle_contains(&self, point: (f32, f32)) -> bool {
        let dx = point.0 - self.circle_center.0;
        let dy = point.1 - self.circle_center.1;
        dx * dx + dy * dy < self.circle_radius * self.circle_radius
    }

    fn rect_contains(&self, point: (f32, f32)) -> bool {
        self.rect_top_left.0 <= point.0
            && point.0 <= self.rect_bottom_right.0
            && self.rect_top_left.1 <= point.1
            && point.1 <= self.rect_bottom_right.1
    }
}

impl Default for HitRegion {
    /// Defaults to the calibrated clock-widget region.
    fn default() -> Self {
        Self::clock_default()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
