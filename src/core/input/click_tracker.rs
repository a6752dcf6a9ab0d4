//=========================================================================
// Click Tracker
//
// Press/release pairing for the clock widget.
//
// A "click" is a primary-action press inside the hit region followed by
// a release of the same logical button, with the release position
// hit-tested again. A release that drifts outside the region consumes
// the pending press without completing a click, so dragging off the
// clock cancels the toggle.
//
// Frame lifecycle: press() arms the tracker, release() disarms it.
// The armed flag is consumed exactly once per qualifying press, whether
// or not the release lands inside the region.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::{PointerEvent, Viewport};
use super::hit_region::HitRegion;

//=== ReleaseOutcome ======================================================

/// Result of feeding a pointer release into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// A qualifying press was pending and the release landed inside the
    /// region: the click completed.
    Click,

    /// A qualifying press was pending but the release landed outside
    /// the region: the press was consumed with no click.
    Cancelled,

    /// No pending press, or the release was not the action button.
    Ignored,
}

//=== ClickTracker ========================================================

/// Tracks a press-down inside the clock region awaiting its release.
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed: bool,
}

impl ClickTracker {
    /// Creates a tracker with no pending press.
    pub fn new() -> Self {
        Self { pressed: false }
    }

    /// Returns `true` while a qualifying press awaits its release.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    //--- Press Handling ---------------------------------------------------

    /// Feeds a pointer press.
    ///
    /// Arms the tracker and returns `true` if the press used the primary
    /// action button and landed inside `region`; the caller should then
    /// ask the host to suppress default handling of the button. Any
    /// other press leaves the tracker unchanged.
    pub fn press(&mut self, event: &PointerEvent, region: &HitRegion, viewport: Viewport) -> bool {
        if event.is_action && region.contains(event.x, event.y, viewport) {
            self.pressed = true;
            return true;
        }
        false
    }

    //--- Release Handling -------------------------------------------------

    /// Feeds a pointer release.
    ///
    /// If a press is pending and the release is the action button, the
    /// pending flag is cleared and the release position is hit-tested to
    /// decide between [`ReleaseOutcome::Click`] and
    /// [`ReleaseOutcome::Cancelled`]. Everything else is
    /// [`ReleaseOutcome::Ignored`].
    pub fn release(
        &mut self,
        event: &PointerEvent,
        region: &HitRegion,
        viewport: Viewport,
    ) -> ReleaseOutcome {
        if !self.pressed || !event.is_action {
            return ReleaseOutcome::Ignored;
        }

        self.pressed = false;
        if region.contains(event.x, event.y, viewport) {
            ReleaseOutcome::Click
        } else {
            ReleaseOutcome::Cancelled
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
