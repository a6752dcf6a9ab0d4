//=========================================================================
// Late-Night Cycle
//
// Keeps the clock (and the outdoor light) running past the host's
// normal end-of-day cutoff.
//
// Once per simulated second the cycle:
// 1. Rolls a past-cutoff time back into the next day's early morning
//    and captures the current outdoor light as the "evening color"
// 2. While the time is before 6:00 AM, blends the evening color toward
//    the morning color and tints it by the host's ambient light
// 3. Tracks whether the late-night window is active
//
// The cycle is pure with respect to the host: it receives the current
// host values and returns the writes the host should apply, which keeps
// the whole thing testable without a running game.
//
//=========================================================================

//=== External Crates =====================================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::clock::TimeOfDay;
use crate::core::color::Rgba;

//=== NightTick ===========================================================

/// Host writes produced by one late-night tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NightTick {
    /// New clock value, present when the tick rolled the day back.
    pub rolled_time: Option<TimeOfDay>,

    /// Outdoor light to display, present inside the blend window.
    pub outdoor_light: Option<Rgba>,
}

//=== NightCycle ==========================================================

/// Late-night window state and lighting interpolation.
#[derive(Debug, Default)]
pub struct NightCycle {
    /// Whether the current time falls in the post-midnight pre-dawn
    /// blend window.
    late_night: bool,

    /// Outdoor light captured at the day-rollover moment. Only
    /// meaningful while `late_night` is set.
    saved_evening: Rgba,
}

impl NightCycle {
    /// Creates a cycle outside the late-night window.
    pub fn new() -> Self {
        Self {
            late_night: false,
            saved_evening: Rgba::TRANSPARENT,
        }
    }

    /// Returns `true` while the late-night window is active.
    pub fn is_late_night(&self) -> bool {
        self.late_night
    }

    //--- Window Exits -----------------------------------------------------

    /// Resets the window at the start of a simulated day.
    pub fn reset(&mut self) {
        self.late_night = false;
    }

    /// Ends the window explicitly (the 5:50 → 6:00 forcing transition).
    pub fn end_window(&mut self) {
        if self.late_night {
            debug!("Late-night window closed");
        }
        self.late_night = false;
    }

    //--- Periodic Tick ----------------------------------------------------

    /// Runs the once-per-simulated-second update.
    ///
    /// `time` is the host's current clock, `outdoor` and `ambient` its
    /// current light colors, `morning` its fixed morning color. The
    /// returned [`NightTick`] lists the writes the host should apply.
    pub fn tick(
        &mut self,
        time: TimeOfDay,
        outdoor: Rgba,
        ambient: Rgba,
        morning: Rgba,
    ) -> NightTick {
        let mut result = NightTick::default();
        let mut time = time;

        // Roll past-cutoff times into the next day's early morning and
        // remember tonight's light for the blend.
        if time.is_past_pass_out_cutoff() {
            time = time.rolled_back();
            result.rolled_time = Some(time);
            self.saved_evening = outdoor;
            debug!("Day rolled back to {}, evening color captured", time);
        }

        if time.is_before_morning() {
            let factor = 1.0 - time.night_progress();
            let blended = self.saved_evening.lerp(morning, factor);
            result.outdoor_light = Some(ambient.modulate(blended));

            if !self.late_night {
                debug!("Late-night window opened at {}", time);
            }
            self.late_night = true;
        } else {
            if self.late_night {
                debug!("Late-night window closed at {}", time);
            }
            self.late_night = false;
        }

        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
