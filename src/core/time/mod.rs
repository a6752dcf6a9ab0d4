//=========================================================================
// Time Subsystem
//
// Time-of-day encoding and the late-night lighting cycle.
//
// Responsibilities:
// - Wrap the host's integer clock encoding with the fixed timestamps
//   this add-on reacts to
// - Keep the clock running past the host's end-of-day cutoff
// - Interpolate the outdoor light across the pre-dawn window
//
//=========================================================================

//=== Submodules ==========================================================

pub mod clock;
pub mod night;

//=== Public API ==========================================================

pub use clock::TimeOfDay;
pub use night::{NightCycle, NightTick};
