//=========================================================================
// Render-Time Pause Override
//
// Composes the user's pause toggle with the host's native pause flag,
// but only for the duration of the HUD render pass.
//
// Frame lifecycle (host guarantees exactly one bracket per frame):
//   begin_render(host_pause) → host renders HUD → end_render()
//
// The host's flag is set to `host_pause OR user_paused` for the render
// window and restored to its snapshot afterwards, so the override never
// leaks into the host's own pause bookkeeping.
//
//=========================================================================

//=== PauseOverride =======================================================

/// User-requested pause override with render-window composition.
#[derive(Debug, Default)]
pub struct PauseOverride {
    /// The user's toggle. Persists until toggled again.
    paused: bool,

    /// Host pause flag saved at render-start, restored at render-end.
    snapshot: bool,
}

impl PauseOverride {
    /// Creates an override in the unpaused state.
    pub fn new() -> Self {
        Self {
            paused: false,
            snapshot: false,
        }
    }

    /// Returns the user's current pause toggle.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flips the user's pause toggle and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    //--- Render Bracketing ------------------------------------------------

    /// Begins the HUD render window.
    ///
    /// Snapshots the host's current pause flag and returns the composed
    /// value the host should display for this window.
    pub fn begin_render(&mut self, host_paused: bool) -> bool {
        self.snapshot = host_paused;
        host_paused || self.paused
    }

    /// Ends the HUD render window.
    ///
    /// Returns the snapshot the host's pause flag must be restored to.
    pub fn end_render(&self) -> bool {
        self.snapshot
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
