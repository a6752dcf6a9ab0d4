//=========================================================================
// Time-of-Day Encoding
//
// Newtype over the host's integer time encoding plus the fixed
// timestamps this add-on reacts to.
//
// Encoding: 100 units per in-game hour, minutes stored in the low two
// decimal digits. 600 = 6:00 AM, 1300 = 1:00 PM, 2400 = midnight. The
// host lets the value run past 2400 into the small hours (2550 = 1:50
// AM) and treats values ≥ 2550 as its end-of-day "pass out" trigger.
//
// This add-on rolls such values back by a full day (−2400) to keep the
// clock running through the night, then blends the outdoor light from
// the saved evening color toward the morning color across the 2:00 AM →
// 6:00 AM window.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;

//=== TimeOfDay ===========================================================

/// In-game time of day in the host's 100-units-per-hour encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(pub i32);

impl TimeOfDay {
    //--- Fixed Timestamps -------------------------------------------------

    /// 6:00 AM. End of the late-night window.
    pub const MORNING: Self = Self(600);

    /// The host's pass-out cutoff. Times at or past this are rolled back.
    pub const PASS_OUT_CUTOFF: Self = Self(2550);

    /// Value forced onto the clock to trigger the host's end-of-day
    /// sequence when the late-night window runs out.
    pub const FORCED_PASS_OUT: Self = Self(2600);

    /// Old-time side of the transition that ends the late-night window.
    pub const LAST_NIGHT_TICK: Self = Self(550);

    /// 4:00 AM alert timestamp.
    pub const ALERT_FOUR_AM: Self = Self(400);

    /// 4:30 AM alert timestamp.
    pub const ALERT_FOUR_THIRTY_AM: Self = Self(500);

    /// 5:00 AM alert timestamp.
    pub const ALERT_FIVE_AM: Self = Self(530);

    //--- Encoding Constants -----------------------------------------------

    /// One full day in encoding units.
    const DAY_UNITS: i32 = 2400;

    /// Width of the blend window (2:00 AM → 6:00 AM), in units.
    const NIGHT_WINDOW_UNITS: f32 = 400.0;

    /// 2:00 AM expressed in the `+DAY_UNITS` normalized frame.
    const TWO_AM_NORMALIZED: i32 = 3000;

    //--- Accessors --------------------------------------------------------

    /// Wraps a raw host value.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw host encoding.
    pub const fn raw(self) -> i32 {
        self.0
    }

    //--- Day Rollover -----------------------------------------------------

    /// Whether the host is about to run its pass-out sequence.
    pub fn is_past_pass_out_cutoff(self) -> bool {
        self >= Self::PASS_OUT_CUTOFF
    }

    /// Rolls the value back one full day, wrapping a post-midnight time
    /// into the next day's early-morning range (2550 → 150).
    pub const fn rolled_back(self) -> Self {
        Self(self.0 - Self::DAY_UNITS)
    }

    /// Whether the time falls in the pre-dawn blend window.
    pub fn is_before_morning(self) -> bool {
        self < Self::MORNING
    }

    //--- Night Progress ---------------------------------------------------

    /// Distance from morning as a fraction of the blend window.
    ///
    /// The time is normalized to the previous day's frame (values ≤ 600
    /// get a full day added), then measured against 2:00 AM: 1.0 at
    /// exactly 2:00 AM falling to 0.0 at 6:00 AM. Times earlier than
    /// 2:00 AM yield values above 1.0; the color lerp saturates those at
    /// the full-evening endpoint.
    pub fn night_progress(self) -> f32 {
        let normalized = if self.0 <= Self::MORNING.0 {
            self.0 + Self::DAY_UNITS
        } else {
            self.0
        };
        (normalized - Self::TWO_AM_NORMALIZED).abs() as f32 / Self::NIGHT_WINDOW_UNITS
    }
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for TimeOfDay {
    /// Formats as a 12-hour clock reading, e.g. `600` → `6:00am`,
    /// `2550` → `1:50am`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = (self.0 / 100).rem_euclid(24);
        let minutes = self.0.rem_euclid(100);
        let suffix = if hours < 12 { "am" } else { "pm" };
        let display_hours = match hours % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{}:{:02}{}", display_hours, minutes, suffix)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
