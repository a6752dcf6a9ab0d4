//=========================================================================
// Color
//
// Normalized RGBA color used for ambient/outdoor light blending.
//
// Responsibilities:
// - Represent host light colors in a stable, host-agnostic format
// - Linear interpolation between two colors (late-night → morning blend)
// - Component-wise modulation (tinting a light against the ambient value)
//
// All channels are stored as `f32` in the 0.0–1.0 range. The host adapter
// is responsible for converting to/from its own byte or vector formats.
//
//=========================================================================

//=== Rgba ================================================================

/// Normalized RGBA color (each channel 0.0–1.0).
///
/// Copy-cheap value type; every operation returns a new color rather
/// than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    /// Red channel.
    pub r: f32,

    /// Green channel.
    pub g: f32,

    /// Blue channel.
    pub b: f32,

    /// Alpha channel.
    pub a: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Opaque white (identity element for [`Rgba::modulate`]).
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from raw channel values.
    ///
    /// Channels are not range-checked; callers are expected to stay
    /// within 0.0–1.0.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    //--- Blending ---------------------------------------------------------

    /// Linearly interpolates toward `other` by factor `t`.
    ///
    /// `t` is clamped to 0.0–1.0 before blending: `t = 0.0` yields `self`,
    /// `t = 1.0` yields `other`. The clamp mirrors the saturating lerp
    /// semantics of typical game math libraries, so a factor computed from
    /// a time value slightly outside the blend window degrades gracefully
    /// to the nearest endpoint.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Multiplies each channel against the matching channel of `other`.
    ///
    /// Used to tint the blended night color against the host's current
    /// ambient light, producing a darkening effect relative to the pure
    /// ambient value.
    pub fn modulate(self, other: Self) -> Self {
        Self {
            r: self.r * other.r,
            g: self.g * other.g,
            b: self.b * other.b,
            a: self.a * other.a,
        }
    }
}

impl Default for Rgba {
    /// Defaults to fully transparent.
    fn default() -> Self {
        Self::TRANSPARENT
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
