//=========================================================================
// Pointer Event Types
//
// Defines the internal representation of host-delivered pointer input.
//
// This module abstracts the host's input payloads (button presses and
// releases with screen coordinates) into a stable, host-agnostic format
// consumed by the hit-testing and click-tracking logic.
//
// Responsibilities:
// - Represent pointer buttons in a portable way
// - Carry screen-pixel coordinates alongside each press/release
// - Carry the host's own "primary action button" classification
// - Describe the current viewport so pixel coordinates can be converted
//   to resolution-independent fractional coordinates
//
//=========================================================================

//=== PointerButton =======================================================

/// Physical pointer button identifier.
///
/// Abstracts host-specific button representations into a stable enum.
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== PointerEvent ========================================================

/// Pointer press or release payload delivered by the host.
///
/// Which of press/release it represents is determined by the host event
/// it arrives in; the payload itself is identical for both.
///
/// The host decides which buttons count as the "primary action" button
/// (mouse left, a gamepad face button, a rebound key). That
/// classification is delivered with the event rather than re-derived
/// here, so remapped controls keep working without this crate knowing
/// about bindings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// The physical button involved.
    pub button: PointerButton,

    /// Cursor X position in screen pixels (top-left origin).
    pub x: f32,

    /// Cursor Y position in screen pixels (top-left origin).
    pub y: f32,

    /// Whether the host classifies `button` as the primary action button.
    pub is_action: bool,
}

impl PointerEvent {
    /// Creates a primary-action event at the given screen position.
    ///
    /// Convenience constructor for the common case (and for tests).
    pub fn action(button: PointerButton, x: f32, y: f32) -> Self {
        Self {
            button,
            x,
            y,
            is_action: true,
        }
    }
}

//=== Viewport ============================================================

/// Current viewport dimensions in pixels.
///
/// Used to convert screen-pixel coordinates into fractional coordinates
/// so hit-testing behaves identically at every resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f32,

    /// Viewport height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport from pixel dimensions.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
