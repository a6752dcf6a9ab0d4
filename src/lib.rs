//=========================================================================
// Sleepless — Library Root
//
// This crate defines the public API surface of the Sleepless add-on:
// late-night time flow, day/night lighting interpolation, and a
// clickable pause toggle on the in-game clock widget.
//
// Responsibilities:
// - Expose the controller facade (`SleeplessController`)
// - Expose the host boundary (`Host` trait, `HostEvent`)
// - Keep internal subsystems grouped under `core`
//
// Typical usage (inside a host adapter):
// ```no_run
// use sleepless::prelude::*;
// use std::path::Path;
//
// # struct GameHost;
// # impl Host for GameHost {
// #     fn is_world_ready(&self) -> bool { true }
// #     fn is_player_free(&self) -> bool { true }
// #     fn is_master(&self) -> bool { true }
// #     fn is_multiplayer(&self) -> bool { false }
// #     fn viewport(&self) -> Viewport { Viewport::new(1600.0, 900.0) }
// #     fn time_of_day(&self) -> TimeOfDay { TimeOfDay::new(600) }
// #     fn set_time_of_day(&mut self, _: TimeOfDay) {}
// #     fn outdoor_light(&self) -> Rgba { Rgba::WHITE }
// #     fn set_outdoor_light(&mut self, _: Rgba) {}
// #     fn ambient_light(&self) -> Rgba { Rgba::WHITE }
// #     fn morning_color(&self) -> Rgba { Rgba::WHITE }
// #     fn is_paused(&self) -> bool { false }
// #     fn set_paused(&mut self, _: bool) {}
// #     fn show_notification(&mut self, _: &str, _: HudPriority) {}
// #     fn play_sound(&mut self, _: &str) {}
// #     fn broadcast_chat(&mut self, _: &str) {}
// #     fn suppress_button(&mut self, _: PointerButton) {}
// # }
// # fn forward_events(_: &mut SleeplessController, _: &mut GameHost) {}
// fn entry(host: &mut GameHost) -> anyhow::Result<()> {
//     let settings = sleepless::config::load_settings(Path::new("settings.json"))?;
//     let mut controller = SleeplessController::with_settings(settings);
//
//     // The adapter subscribes host callbacks and forwards each one:
//     // controller.handle(host, HostEvent::OneSecondUpdate), etc.
//     forward_events(&mut controller, host);
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the internal subsystems (input, time, pause, host
// boundary). It is exposed publicly so adapters can name every type,
// but normal usage goes through the `SleeplessController` facade.
//
// `config` loads the optional JSON settings file.
//
pub mod config;
pub mod core;

//--- Internal Modules ----------------------------------------------------
//
// `controller` defines the facade that ties the subsystems together.
//
mod controller;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the controller as the main entry point so adapters can
// simply `use sleepless::SleeplessController;`.
//
pub use controller::SleeplessController;

pub mod prelude;
