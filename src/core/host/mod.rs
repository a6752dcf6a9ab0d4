//=========================================================================
// Host Interface
//=========================================================================
//
// Controller-to-host interface types (facade trait and events).
//
// Defines the contract between this add-on and the game that drives it.
// The controller never reaches into game state directly: everything it
// reads or writes goes through the [`Host`] trait, and everything the
// game tells it arrives as a [`HostEvent`]. A test double implementing
// `Host` is all that is needed to exercise the full controller without
// a running game.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::color::Rgba;
use crate::core::input::{PointerButton, PointerEvent, Viewport};
use crate::core::time::TimeOfDay;

//=== HudPriority =========================================================

/// Priority/type code attached to a HUD notification.
///
/// The numeric codes are defined by the host's HUD message API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudPriority(pub i32);

impl HudPriority {
    /// Informational banner, the only kind this add-on emits.
    pub const INFO: Self = Self(2);
}

//=== Host ================================================================

/// Facade over the game state and services this add-on touches.
///
/// Split by concern:
/// - session predicates (`is_world_ready`, `is_player_free`, roles)
/// - clock and lighting state (read/write)
/// - fire-and-forget output (notifications, sounds, chat, suppression)
///
/// All methods are synchronous and infallible; the host validates its
/// own state before delivering events.
pub trait Host {
    //--- Session Predicates -----------------------------------------------

    /// Whether a world/session is loaded and active.
    fn is_world_ready(&self) -> bool;

    /// Whether player input is currently free (no menu open, no cutscene).
    fn is_player_free(&self) -> bool;

    /// Whether this process is authoritative for the session.
    fn is_master(&self) -> bool;

    /// Whether the session has multiple participants.
    fn is_multiplayer(&self) -> bool;

    //--- Viewport ---------------------------------------------------------

    /// Current viewport dimensions in pixels.
    fn viewport(&self) -> Viewport;

    //--- Clock ------------------------------------------------------------

    /// Current simulated time of day.
    fn time_of_day(&self) -> TimeOfDay;

    /// Overwrites the simulated time of day.
    fn set_time_of_day(&mut self, time: TimeOfDay);

    //--- Lighting ---------------------------------------------------------

    /// The outdoor light currently displayed.
    fn outdoor_light(&self) -> Rgba;

    /// Overwrites the displayed outdoor light.
    fn set_outdoor_light(&mut self, color: Rgba);

    /// The host's pure ambient light for the current moment.
    fn ambient_light(&self) -> Rgba;

    /// The host's fixed morning color constant.
    fn morning_color(&self) -> Rgba;

    //--- Pause ------------------------------------------------------------

    /// The host's global pause flag.
    fn is_paused(&self) -> bool;

    /// Overwrites the host's global pause flag.
    fn set_paused(&mut self, paused: bool);

    //--- Output -----------------------------------------------------------

    /// Shows a short on-screen HUD notification.
    fn show_notification(&mut self, text: &str, priority: HudPriority);

    /// Plays a sound effect by host-defined name.
    fn play_sound(&mut self, name: &str);

    /// Broadcasts a plain-text chat message to all participants.
    fn broadcast_chat(&mut self, text: &str);

    /// Prevents the given button press from reaching other handlers
    /// this frame.
    fn suppress_button(&mut self, button: PointerButton);
}

//=== HostEvent ===========================================================

/// Lifecycle callbacks the host delivers to the controller.
///
/// All events arrive on the host's main simulation/render thread,
/// synchronously and non-reentrantly. `RenderingHud`/`RenderedHud`
/// bracket the HUD render pass exactly once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// A pointer button was pressed.
    ButtonPressed(PointerEvent),

    /// A pointer button was released.
    ButtonReleased(PointerEvent),

    /// The HUD render pass is about to begin.
    RenderingHud,

    /// The HUD render pass just ended.
    RenderedHud,

    /// One simulated second of real time elapsed.
    OneSecondUpdate,

    /// The simulated clock advanced from `old` to `new`.
    TimeChanged { old: TimeOfDay, new: TimeOfDay },

    /// A new simulated day started.
    DayStarted,
}
