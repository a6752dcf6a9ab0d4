//=========================================================================
// Mod Settings
//
// User-editable JSON settings file.
//
// The file is optional: a missing file yields defaults, and every field
// inside it is optional too. Malformed JSON, an unsupported version, or
// nonsensical region geometry is reported as an error with enough
// context to fix the file by hand.
//
// Example:
// ```json
// {
//     "version": 1,
//     "late_night_alerts": true,
//     "confirmation_sound": "junimoMeep1",
//     "clock_region": {
//         "reference_width": 1600.0,
//         "reference_height": 900.0,
//         "circle_center": [1336.0, 117.0],
//         "circle_radius": 111.0,
//         "box_top_left": [1343.0, 14.0],
//         "box_bottom_right": [1576.0, 211.0]
//     }
// }
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fs;
use std::path::Path;

//=== External Crates =====================================================

use anyhow::{bail, Context, Result};
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::input::{HitRegion, Viewport};

//=== Defaults ============================================================

/// Default confirmation sound, by host sound-bank name.
const DEFAULT_SOUND: &str = "junimoMeep1";

const SUPPORTED_VERSION: u32 = 1;

//=== ModSettings =========================================================

/// Validated, ready-to-use settings.
#[derive(Debug, Clone)]
pub struct ModSettings {
    /// Enables the 4:00/4:30/5:00 AM late-night alerts.
    pub late_night_alerts: bool,

    /// Host sound-bank name played on pause toggles and alerts.
    pub confirmation_sound: String,

    /// Clickable clock region, possibly recalibrated by the user.
    pub clock_region: HitRegion,
}

impl Default for ModSettings {
    fn default() -> Self {
        Self {
            late_night_alerts: true,
            confirmation_sound: DEFAULT_SOUND.to_string(),
            clock_region: HitRegion::clock_default(),
        }
    }
}

//=== Loading =============================================================

/// Loads settings from `path`, falling back to defaults when the file
/// does not exist.
pub fn load_settings(path: &Path) -> Result<ModSettings> {
    if !path.exists() {
        return Ok(ModSettings::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("unable to read settings file {}", path.display()))?;
    parse_settings_text(&content)
        .with_context(|| format!("failed to load {}", path.display()))
}

/// Parses and validates settings from JSON text.
pub fn parse_settings_text(content: &str) -> Result<ModSettings> {
    let raw = serde_json::from_str::<SettingsFile>(content).map_err(|err| {
        let line = err.line();
        let column = err.column();
        anyhow::anyhow!("invalid JSON at line {line}, column {column}: {err}")
    })?;

    if raw.version != SUPPORTED_VERSION {
        bail!(
            "unsupported settings version {}; expected version {}",
            raw.version,
            SUPPORTED_VERSION
        );
    }

    let clock_region = match raw.clock_region {
        Some(region) => region.into_hit_region()?,
        None => HitRegion::clock_default(),
    };

    Ok(ModSettings {
        late_night_alerts: raw.late_night_alerts,
        confirmation_sound: raw.confirmation_sound,
        clock_region,
    })
}

//=== File Schema =========================================================

#[derive(Debug, Deserialize)]
struct SettingsFile {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_alerts")]
    late_night_alerts: bool,

    #[serde(default = "default_sound")]
    confirmation_sound: String,

    #[serde(default)]
    clock_region: Option<RegionFile>,
}

/// Pixel-calibrated region override, in the same shape the defaults
/// were measured in.
#[derive(Debug, Deserialize)]
struct RegionFile {
    reference_width: f32,
    reference_height: f32,
    circle_center: [f32; 2],
    circle_radius: f32,
    box_top_left: [f32; 2],
    box_bottom_right: [f32; 2],
}

impl RegionFile {
    fn into_hit_region(self) -> Result<HitRegion> {
        if self.reference_width <= 0.0 || self.reference_height <= 0.0 {
            bail!(
                "clock_region reference resolution must be positive, got {}x{}",
                self.reference_width,
                self.reference_height
            );
        }
        if self.circle_radius <= 0.0 {
            bail!(
                "clock_region circle_radius must be positive, got {}",
                self.circle_radius
            );
        }
        if self.box_top_left[0] > self.box_bottom_right[0]
            || self.box_top_left[1] > self.box_bottom_right[1]
        {
            bail!("clock_region box_top_left must not lie past box_bottom_right");
        }

        Ok(HitRegion::from_reference_pixels(
            Viewport::new(self.reference_width, self.reference_height),
            (self.circle_center[0], self.circle_center[1]),
            self.circle_radius,
            (self.box_top_left[0], self.box_top_left[1]),
            (self.box_bottom_right[0], self.box_bottom_right[1]),
        ))
    }
}

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

fn default_alerts() -> bool {
    true
}

fn default_sound() -> String {
    DEFAULT_SOUND.to_string()
}

//=========================================================================
// Unit Tests
//=========================================================================
