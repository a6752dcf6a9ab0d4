//=========================================================================
// Input Subsystem
//
// Pointer-event types, clock hit-testing, and click tracking.
//
// Responsibilities:
// - Normalize host pointer payloads into portable event types
// - Hit-test screen points against the clock widget region
// - Pair presses with releases to recognize completed clicks
//
// Notes:
// The subsystem is purely computational: it never touches host state.
// Session gating (world ready, player free) is the controller's job.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod click_tracker;
pub mod event;
pub mod hit_region;

//=== Public API ==========================================================

pub use click_tracker::{ClickTracker, ReleaseOutcome};
pub use event::{PointerButton, PointerEvent, Viewport};
pub use hit_region::HitRegion;
