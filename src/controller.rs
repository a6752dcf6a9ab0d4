//=========================================================================
// Sleepless Controller
//
// Main entry point and coordinator for the add-on.
//
// Architecture:
// ```text
//     Host event loop ──HostEvent──> SleeplessController
//                                        │
//                                        ├─ ClickTracker   (clock clicks)
//                                        ├─ PauseOverride  (HUD pause)
//                                        └─ NightCycle     (lighting)
//                                        │
//                      reads/writes <────┘ via the Host facade
// ```
//
// The host (or a thin adapter) constructs one controller at startup and
// forwards each lifecycle callback into [`SleeplessController::handle`],
// which dispatches to the matching handler method. Handlers only touch
// game state through the injected [`Host`] reference, so the whole
// controller runs against a test double.
//
//=========================================================================

//=== External Crates =====================================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::config::ModSettings;
use crate::core::host::{Host, HostEvent, HudPriority};
use crate::core::input::{ClickTracker, PointerEvent, ReleaseOutcome};
use crate::core::pause::PauseOverride;
use crate::core::time::{NightCycle, TimeOfDay};

//=== Notification Text ===================================================

const MSG_TIME_STOPPED: &str = "Time is stopped.";
const MSG_TIME_FLOWING: &str = "Time is flowing.";

/// Late-night alerts: timestamp, HUD text, multiplayer chat text.
const LATE_NIGHT_ALERTS: [(TimeOfDay, &str, &str); 3] = [
    (
        TimeOfDay::ALERT_FOUR_AM,
        "It's getting very late...",
        "LATE-NIGHT ALERT: It is 4:00am!",
    ),
    (
        TimeOfDay::ALERT_FOUR_THIRTY_AM,
        "It's getting very very late...",
        "LATE-NIGHT ALERT: It is 4:30am!",
    ),
    (
        TimeOfDay::ALERT_FIVE_AM,
        "So... sleepy.....",
        "LATE-NIGHT ALERT: It is 5am!",
    ),
];

//=== SleeplessController =================================================

/// Host-driven time, lighting, and clock-pause controller.
///
/// Owns all add-on state (no module-level globals): the pending-click
/// flag, the user pause toggle with its render snapshot, and the
/// late-night window with its saved evening color. Construct once at
/// startup and keep for the process lifetime.
pub struct SleeplessController {
    settings: ModSettings,
    clicks: ClickTracker,
    pause: PauseOverride,
    night: NightCycle,
}

impl SleeplessController {
    //--- Construction -----------------------------------------------------

    /// Creates a controller with default settings.
    pub fn new() -> Self {
        Self::with_settings(ModSettings::default())
    }

    /// Creates a controller from loaded settings.
    pub fn with_settings(settings: ModSettings) -> Self {
        Self {
            settings,
            clicks: ClickTracker::new(),
            pause: PauseOverride::new(),
            night: NightCycle::new(),
        }
    }

    //--- State Queries ----------------------------------------------------

    /// Returns the user's pause toggle.
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// Returns `true` while the late-night window is active.
    pub fn is_late_night(&self) -> bool {
        self.night.is_late_night()
    }

    /// Returns `true` while a clock press awaits its release.
    pub fn is_clock_pressed(&self) -> bool {
        self.clicks.is_pressed()
    }

    //--- Event Dispatch ---------------------------------------------------

    /// Dispatches one host lifecycle event to its handler.
    ///
    /// This is the registration surface: the host adapter subscribes its
    /// native callbacks and forwards each as the matching [`HostEvent`].
    pub fn handle(&mut self, host: &mut dyn Host, event: HostEvent) {
        match event {
            HostEvent::ButtonPressed(pointer) => self.on_button_pressed(host, pointer),
            HostEvent::ButtonReleased(pointer) => self.on_button_released(host, pointer),
            HostEvent::RenderingHud => self.on_rendering_hud(host),
            HostEvent::RenderedHud => self.on_rendered_hud(host),
            HostEvent::OneSecondUpdate => self.on_one_second_update(host),
            HostEvent::TimeChanged { old, new } => self.on_time_changed(host, old, new),
            HostEvent::DayStarted => self.on_day_started(),
        }
    }

    //--- Pointer Handlers -------------------------------------------------

    fn on_button_pressed(&mut self, host: &mut dyn Host, pointer: PointerEvent) {
        if !host.is_world_ready() || !host.is_player_free() {
            return;
        }

        if self
            .clicks
            .press(&pointer, &self.settings.clock_region, host.viewport())
        {
            // Keep the press from reaching other systems this frame.
            host.suppress_button(pointer.button);
        }
    }

    fn on_button_released(&mut self, host: &mut dyn Host, pointer: PointerEvent) {
        if !host.is_world_ready() {
            return;
        }

        let outcome = self
            .clicks
            .release(&pointer, &self.settings.clock_region, host.viewport());

        if outcome == ReleaseOutcome::Click {
            let paused = self.pause.toggle();
            info!(
                "Clock clicked, time flow {}",
                if paused { "stopped" } else { "resumed" }
            );

            let text = if paused {
                MSG_TIME_STOPPED
            } else {
                MSG_TIME_FLOWING
            };
            host.show_notification(text, HudPriority::INFO);
            host.play_sound(&self.settings.confirmation_sound);
        }
    }

    //--- Render Handlers --------------------------------------------------

    fn on_rendering_hud(&mut self, host: &mut dyn Host) {
        let displayed = self.pause.begin_render(host.is_paused());
        host.set_paused(displayed);
    }

    fn on_rendered_hud(&mut self, host: &mut dyn Host) {
        host.set_paused(self.pause.end_render());
    }

    //--- Time Handlers ----------------------------------------------------

    fn on_one_second_update(&mut self, host: &mut dyn Host) {
        if !host.is_world_ready() {
            return;
        }

        let tick = self.night.tick(
            host.time_of_day(),
            host.outdoor_light(),
            host.ambient_light(),
            host.morning_color(),
        );

        if let Some(time) = tick.rolled_time {
            host.set_time_of_day(time);
        }
        if let Some(light) = tick.outdoor_light {
            host.set_outdoor_light(light);
        }
    }

    fn on_time_changed(&mut self, host: &mut dyn Host, old: TimeOfDay, new: TimeOfDay) {
        // A late-night clock reaching 6:00 AM hands control back to the
        // host's own end-of-day sequence. Only the authoritative session
        // mutates shared time; everyone closes their local window.
        if self.night.is_late_night()
            && old == TimeOfDay::LAST_NIGHT_TICK
            && new == TimeOfDay::MORNING
        {
            if host.is_master() {
                info!("Late night reached {}, forcing pass-out", new);
                host.set_time_of_day(TimeOfDay::FORCED_PASS_OUT);
            }
            self.night.end_window();
        }

        if self.settings.late_night_alerts {
            for (at, text, chat) in LATE_NIGHT_ALERTS {
                if new == at {
                    host.show_notification(text, HudPriority::INFO);
                    host.play_sound(&self.settings.confirmation_sound);
                    if host.is_multiplayer() {
                        host.broadcast_chat(chat);
                    }
                }
            }
        }
    }

    fn on_day_started(&mut self) {
        self.night.reset();
    }
}

impl Default for SleeplessController {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Rgba;
    use crate::core::input::{PointerButton, Viewport};

    //--- Fake Host --------------------------------------------------------

    /// Records every controller write for assertions.
    struct FakeHost {
        world_ready: bool,
        player_free: bool,
        master: bool,
        multiplayer: bool,
        viewport: Viewport,
        time: TimeOfDay,
        outdoor: Rgba,
        ambient: Rgba,
        morning: Rgba,
        paused: bool,
        notifications: Vec<String>,
        sounds: Vec<String>,
        chat: Vec<String>,
        suppressed: Vec<PointerButton>,
    }

    impl FakeHost {
        /// An active single-player session at the reference resolution.
        fn new() -> Self {
            Self {
                world_ready: true,
                player_free: true,
                master: true,
                multiplayer: false,
                viewport: Viewport::new(1600.0, 900.0),
                time: TimeOfDay::new(1200),
                outdoor: Rgba::new(0.2, 0.2, 0.5, 1.0),
                ambient: Rgba::WHITE,
                morning: Rgba::new(0.9, 0.9, 0.8, 1.0),
                paused: false,
                notifications: Vec::new(),
                sounds: Vec::new(),
                chat: Vec::new(),
                suppressed: Vec::new(),
            }
        }

        fn notification_count(&self, text: &str) -> usize {
            self.notifications.iter().filter(|n| *n == text).count()
        }
    }

    impl Host for FakeHost {
        fn is_world_ready(&self) -> bool {
            self.world_ready
        }
        fn is_player_free(&self) -> bool {
            self.player_free
        }
        fn is_master(&self) -> bool {
            self.master
        }
        fn is_multiplayer(&self) -> bool {
            self.multiplayer
        }
        fn viewport(&self) -> Viewport {
            self.viewport
        }
        fn time_of_day(&self) -> TimeOfDay {
            self.time
        }
        fn set_time_of_day(&mut self, time: TimeOfDay) {
            self.time = time;
        }
        fn outdoor_light(&self) -> Rgba {
            self.outdoor
        }
        fn set_outdoor_light(&mut self, color: Rgba) {
            self.outdoor = color;
        }
        fn ambient_light(&self) -> Rgba {
            self.ambient
        }
        fn morning_color(&self) -> Rgba {
            self.morning
        }
        fn is_paused(&self) -> bool {
            self.paused
        }
        fn set_paused(&mut self, paused: bool) {
            self.paused = paused;
        }
        fn show_notification(&mut self, text: &str, _priority: HudPriority) {
            self.notifications.push(text.to_string());
        }
        fn play_sound(&mut self, name: &str) {
            self.sounds.push(name.to_string());
        }
        fn broadcast_chat(&mut self, text: &str) {
            self.chat.push(text.to_string());
        }
        fn suppress_button(&mut self, button: PointerButton) {
            self.suppressed.push(button);
        }
    }

    //--- Test Helpers -----------------------------------------------------

    /// A primary-action event at the clock center.
    fn click_inside() -> PointerEvent {
        PointerEvent::action(PointerButton::Left, 1336.0, 117.0)
    }

    /// A primary-action event far from the clock.
    fn click_outside() -> PointerEvent {
        PointerEvent::action(PointerButton::Left, 100.0, 700.0)
    }

    fn press(controller: &mut SleeplessController, host: &mut FakeHost, event: PointerEvent) {
        controller.handle(host, HostEvent::ButtonPressed(event));
    }

    fn release(controller: &mut SleeplessController, host: &mut FakeHost, event: PointerEvent) {
        controller.handle(host, HostEvent::ButtonReleased(event));
    }

    fn time_changed(
        controller: &mut SleeplessController,
        host: &mut FakeHost,
        old: i32,
        new: i32,
    ) {
        controller.handle(
            host,
            HostEvent::TimeChanged {
                old: TimeOfDay::new(old),
                new: TimeOfDay::new(new),
            },
        );
    }

    /// Drives the controller into the late-night window via the
    /// rollover tick.
    fn enter_late_night(controller: &mut SleeplessController, host: &mut FakeHost) {
        host.time = TimeOfDay::new(2600);
        controller.handle(host, HostEvent::OneSecondUpdate);
        assert!(controller.is_late_night());
    }

    //=====================================================================
    // Clock Click Tests
    //=====================================================================

    /// A full click on the clock toggles the pause, notifies, plays the
    /// sound, and suppresses the press.
    #[test]
    fn click_on_clock_toggles_pause() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        press(&mut controller, &mut host, click_inside());
        assert_eq!(host.suppressed, vec![PointerButton::Left]);

        release(&mut controller, &mut host, click_inside());
        assert!(controller.is_paused());
        assert_eq!(host.notifications, vec![MSG_TIME_STOPPED.to_string()]);
        assert_eq!(host.sounds, vec!["junimoMeep1".to_string()]);
    }

    /// A second full click restores the original state and announces it.
    #[test]
    fn second_click_resumes_time() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        for _ in 0..2 {
            press(&mut controller, &mut host, click_inside());
            release(&mut controller, &mut host, click_inside());
        }

        assert!(!controller.is_paused());
        assert_eq!(
            host.notifications,
            vec![MSG_TIME_STOPPED.to_string(), MSG_TIME_FLOWING.to_string()]
        );
    }

    /// Press inside + release outside leaves the pause unchanged but
    /// consumes the pending press.
    #[test]
    fn drag_off_clock_cancels_toggle() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        press(&mut controller, &mut host, click_inside());
        release(&mut controller, &mut host, click_outside());

        assert!(!controller.is_paused());
        assert!(!controller.is_clock_pressed());
        assert!(host.notifications.is_empty());
    }

    /// Press outside + release inside never toggles (no press was
    /// registered).
    #[test]
    fn press_outside_never_registers() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        press(&mut controller, &mut host, click_outside());
        release(&mut controller, &mut host, click_inside());

        assert!(!controller.is_paused());
        assert!(host.suppressed.is_empty());
    }

    /// Presses are ignored while no world is loaded.
    #[test]
    fn press_ignored_without_world() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        host.world_ready = false;

        press(&mut controller, &mut host, click_inside());
        assert!(!controller.is_clock_pressed());
        assert!(host.suppressed.is_empty());
    }

    /// Presses are ignored while a menu holds the player's input.
    #[test]
    fn press_ignored_while_player_busy() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        host.player_free = false;

        press(&mut controller, &mut host, click_inside());
        assert!(!controller.is_clock_pressed());
    }

    /// Releases are ignored while no world is loaded, keeping the press
    /// pending.
    #[test]
    fn release_ignored_without_world() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        press(&mut controller, &mut host, click_inside());
        host.world_ready = false;
        release(&mut controller, &mut host, click_inside());

        assert!(!controller.is_paused());
        assert!(controller.is_clock_pressed());
    }

    /// Clicks land the same way on a different viewport size.
    #[test]
    fn click_works_at_other_resolutions() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        host.viewport = Viewport::new(1920.0, 1080.0);

        // Clock center scaled from 1600x900 to 1920x1080.
        let event = PointerEvent::action(PointerButton::Left, 1336.0 * 1.2, 117.0 * 1.2);
        press(&mut controller, &mut host, event);
        release(&mut controller, &mut host, event);

        assert!(controller.is_paused());
    }

    //=====================================================================
    // Render Bracketing Tests
    //=====================================================================

    /// For every host/user pause combination the displayed value inside
    /// the render window is the OR, and the host value is restored after.
    #[test]
    fn render_window_composes_and_restores() {
        for host_paused in [false, true] {
            for user_paused in [false, true] {
                let mut controller = SleeplessController::new();
                let mut host = FakeHost::new();
                host.paused = host_paused;

                if user_paused {
                    press(&mut controller, &mut host, click_inside());
                    release(&mut controller, &mut host, click_inside());
                }

                controller.handle(&mut host, HostEvent::RenderingHud);
                assert_eq!(host.paused, host_paused || user_paused);

                controller.handle(&mut host, HostEvent::RenderedHud);
                assert_eq!(host.paused, host_paused);
            }
        }
    }

    //=====================================================================
    // Late-Night Tick Tests
    //=====================================================================

    /// The rollover tick rewrites the host clock and outdoor light.
    #[test]
    fn rollover_tick_updates_host() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        let evening = host.outdoor;

        host.time = TimeOfDay::new(2600);
        controller.handle(&mut host, HostEvent::OneSecondUpdate);

        assert_eq!(host.time, TimeOfDay::new(200));
        assert!(controller.is_late_night());
        // Progress 1.0 at 2:00 AM: full evening color under white ambient.
        assert_eq!(host.outdoor, evening);
    }

    /// Near morning the displayed light has moved toward the morning
    /// color.
    #[test]
    fn late_tick_blends_toward_morning() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        let evening = host.outdoor;
        enter_late_night(&mut controller, &mut host);

        host.time = TimeOfDay::new(550);
        controller.handle(&mut host, HostEvent::OneSecondUpdate);

        let expected = evening.lerp(host.morning, 0.875);
        assert!((host.outdoor.r - expected.r).abs() < 1e-5);
        assert!((host.outdoor.g - expected.g).abs() < 1e-5);
    }

    /// The tick does nothing while no world is loaded.
    #[test]
    fn tick_ignored_without_world() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        host.world_ready = false;
        host.time = TimeOfDay::new(2600);

        controller.handle(&mut host, HostEvent::OneSecondUpdate);
        assert_eq!(host.time, TimeOfDay::new(2600));
        assert!(!controller.is_late_night());
    }

    /// A morning tick closes the window.
    #[test]
    fn morning_tick_ends_late_night() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        enter_late_night(&mut controller, &mut host);

        host.time = TimeOfDay::new(700);
        controller.handle(&mut host, HostEvent::OneSecondUpdate);
        assert!(!controller.is_late_night());
    }

    /// Day start resets the window.
    #[test]
    fn day_start_resets_late_night() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        enter_late_night(&mut controller, &mut host);

        controller.handle(&mut host, HostEvent::DayStarted);
        assert!(!controller.is_late_night());
    }

    //=====================================================================
    // Pass-Out Forcing Tests
    //=====================================================================

    /// The authoritative session forces the clock to the pass-out value
    /// at the 5:50 → 6:00 transition.
    #[test]
    fn master_forces_pass_out_at_morning() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        enter_late_night(&mut controller, &mut host);

        time_changed(&mut controller, &mut host, 550, 600);

        assert_eq!(host.time, TimeOfDay::FORCED_PASS_OUT);
        assert!(!controller.is_late_night());
    }

    /// Non-authoritative sessions leave the clock alone but still close
    /// their window.
    #[test]
    fn non_master_only_closes_window() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        host.master = false;
        enter_late_night(&mut controller, &mut host);
        host.time = TimeOfDay::new(600);

        time_changed(&mut controller, &mut host, 550, 600);

        assert_eq!(host.time, TimeOfDay::new(600));
        assert!(!controller.is_late_night());
    }

    /// Outside the late-night window the transition is inert.
    #[test]
    fn forcing_requires_late_night() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        host.time = TimeOfDay::new(600);

        time_changed(&mut controller, &mut host, 550, 600);
        assert_eq!(host.time, TimeOfDay::new(600));
    }

    //=====================================================================
    // Late-Night Alert Tests
    //=====================================================================

    /// The 4:00 AM alert fires exactly once across the transition
    /// sequence around 400.
    #[test]
    fn four_am_alert_fires_exactly_once() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        time_changed(&mut controller, &mut host, 380, 390);
        time_changed(&mut controller, &mut host, 390, 400);
        time_changed(&mut controller, &mut host, 400, 410);

        assert_eq!(host.notification_count("It's getting very late..."), 1);
        assert_eq!(host.sounds.len(), 1);
    }

    /// All three alerts fire at their own timestamps.
    #[test]
    fn each_alert_has_its_own_timestamp() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        time_changed(&mut controller, &mut host, 390, 400);
        time_changed(&mut controller, &mut host, 450, 500);
        time_changed(&mut controller, &mut host, 520, 530);

        assert_eq!(host.notification_count("It's getting very late..."), 1);
        assert_eq!(host.notification_count("It's getting very very late..."), 1);
        assert_eq!(host.notification_count("So... sleepy....."), 1);
    }

    /// Multiplayer sessions also get the chat broadcast.
    #[test]
    fn multiplayer_alert_broadcasts_chat() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();
        host.multiplayer = true;

        time_changed(&mut controller, &mut host, 390, 400);
        assert_eq!(host.chat, vec!["LATE-NIGHT ALERT: It is 4:00am!".to_string()]);
    }

    /// Single-player sessions skip the chat broadcast.
    #[test]
    fn single_player_alert_skips_chat() {
        let mut controller = SleeplessController::new();
        let mut host = FakeHost::new();

        time_changed(&mut controller, &mut host, 390, 400);
        assert!(host.chat.is_empty());
    }

    /// Disabling alerts in the settings silences them without touching
    /// the pass-out forcing.
    #[test]
    fn settings_can_disable_alerts() {
        let settings = ModSettings {
            late_night_alerts: false,
            ..ModSettings::default()
        };
        let mut controller = SleeplessController::with_settings(settings);
        let mut host = FakeHost::new();
        enter_late_night(&mut controller, &mut host);

        time_changed(&mut controller, &mut host, 390, 400);
        assert!(host.notifications.is_empty());

        time_changed(&mut controller, &mut host, 550, 600);
        assert_eq!(host.time, TimeOfDay::FORCED_PASS_OUT);
    }

    /// The configured confirmation sound is the one played.
    #[test]
    fn configured_sound_is_played() {
        let settings = ModSettings {
            confirmation_sound: "chime".to_string(),
            ..ModSettings::default()
        };
        let mut controller = SleeplessController::with_settings(settings);
        let mut host = FakeHost::new();

        press(&mut controller, &mut host, click_inside());
        release(&mut controller, &mut host, click_inside());
        assert_eq!(host.sounds, vec!["chime".to_string()]);
    }
}
