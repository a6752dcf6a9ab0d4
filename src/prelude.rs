//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use sleepless::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Controller facade
pub use crate::SleeplessController;

// Host boundary
pub use crate::core::host::{Host, HostEvent, HudPriority};

// Input types
pub use crate::core::input::{HitRegion, PointerButton, PointerEvent, Viewport};

// Time and lighting
pub use crate::core::color::Rgba;
pub use crate::core::time::TimeOfDay;

// Settings
pub use crate::config::ModSettings;
