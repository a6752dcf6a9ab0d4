//=========================================================================
// Core Subsystems
//
// Internal logic modules for the add-on.
//
// Architecture:
//   host:  facade trait + event enum (the host boundary)
//   input: pointer events, clock hit-testing, click tracking
//   time:  clock encoding + late-night lighting cycle
//   pause: render-window pause composition
//   color: normalized RGBA math shared by the above
//
// Everything here is purely computational; only the controller facade
// drives a `Host` with the results.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod color;
pub mod host;
pub mod input;
pub mod pause;
pub mod time;

//=== Public API ==========================================================

pub use color::Rgba;
pub use host::{Host, HostEvent, HudPriority};
pub use input::{ClickTracker, HitRegion, PointerButton, PointerEvent, ReleaseOutcome, Viewport};
pub use pause::PauseOverride;
pub use time::{NightCycle, NightTick, TimeOfDay};
