//! Color types and conversion functions for huebox.
//!
//! Provides three color types (`Hsv`, `Rgb`, `Hsl`) plus hex-string encoding
//! and pure conversion functions between them. All conversions are pure
//! functions (no methods with side effects) and total: hue inputs are wrapped
//! into [0, 360) and percent inputs clamped to [0, 100] before computing.
//!
//! Unit convention: the public API uses degrees and percent throughout;
//! values are normalized to [0, 1] fractions internally. Converted hue and
//! percent outputs are rounded to the nearest integer, RGB channels to the
//! nearest integer in [0, 255].

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// HSV color: hue in degrees [0, 360), saturation and value in percent [0, 100].
///
/// The `Default` value (h=215, s=100, v=100) is the picker's fallback color,
/// used when a deep-link fragment cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Default for Hsv {
    fn default() -> Self {
        Hsv {
            h: 215.0,
            s: 100.0,
            v: 100.0,
        }
    }
}

/// RGB color with 8-bit channels.
///
/// Serializes as a hex string `"#rrggbb"` for human-readable formats.
/// The hex encoding is an exact per-channel bijection (no precision loss).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSL color: hue in degrees [0, 360), saturation and lightness in percent [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Rgb {
    /// Parses a hex color string like "#ff00aa", "ff00aa", or the 3-digit
    /// shorthand "#f0a" (each digit doubled to "#ff00aa"). Case insensitive,
    /// leading `#` optional.
    ///
    /// Returns `ColorError::InvalidColor` if the input is not 3 or 6 valid
    /// hex digits after stripping the prefix.
    pub fn from_hex(hex: &str) -> Result<Rgb, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 3 && hex.len() != 6 {
            return Err(ColorError::InvalidColor(format!(
                "expected 3 or 6 hex digits, got {}",
                hex.len()
            )));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(format!(
                "invalid hex digits in '{hex}'"
            )));
        }
        let full: String = if hex.len() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&full[range], 16)
                .map_err(|e| ColorError::InvalidColor(format!("invalid channel: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Converts the color to a hex string like `"#rrggbb"`.
    ///
    /// Channels are lowercase hex, zero-padded to two digits each.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Wraps a hue angle into [0, 360).
fn wrap_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}

/// Clamps a percent value to [0, 100].
fn clamp_percent(p: f64) -> f64 {
    p.clamp(0.0, 100.0)
}

/// Converts HSV to RGB via the standard hexagon decomposition.
///
/// The hue circle is split into six 60-degree sectors; the sector index and
/// fractional position select the channel permutation of `v`, `p`, `q`, `t`.
/// Hue wraps, saturation and value clamp, so this is total over all inputs.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let h = wrap_hue(c.h) / 360.0;
    let s = clamp_percent(c.s) / 100.0;
    let v = clamp_percent(c.v) / 100.0;

    let i = (h * 6.0).floor();
    let f = h * 6.0 - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match i as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: (r * 255.0).round() as u8,
        g: (g * 255.0).round() as u8,
        b: (b * 255.0).round() as u8,
    }
}

/// Converts RGB to HSV.
///
/// Hue is 0 when the channels are equal (achromatic: hue is undefined there,
/// defined as 0). A negative raw hue from the max-red branch is wrapped into
/// [0, 360) before rounding, so magenta-ish colors land near 300, not -60.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let r = f64::from(c.r);
    let g = f64::from(c.g);
    let b = f64::from(c.b);

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;

    let v = max / 255.0;
    let s = if max == 0.0 { 0.0 } else { d / max };

    let h = if d == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };

    Hsv {
        h: h.round().rem_euclid(360.0),
        s: (s * 100.0).round(),
        v: (v * 100.0).round(),
    }
}

/// Converts HSV to HSL. Hue passes through unchanged (wrapped and rounded);
/// only saturation and lightness are recomputed.
///
/// Saturation is undefined at the lightness extremes (l=0 pure black,
/// l=1 pure white) and defined as 0 there.
pub fn hsv_to_hsl(c: Hsv) -> Hsl {
    let h = wrap_hue(c.h);
    let s = clamp_percent(c.s) / 100.0;
    let v = clamp_percent(c.v) / 100.0;

    let l = (2.0 - s) * v / 2.0;
    let s = if l == 0.0 || l == 1.0 {
        0.0
    } else if l < 0.5 {
        s * v / (l * 2.0)
    } else {
        s * v / (2.0 - l * 2.0)
    };

    Hsl {
        h: h.round().rem_euclid(360.0),
        s: (s * 100.0).round(),
        l: (l * 100.0).round(),
    }
}

/// Converts HSL to HSV. Hue passes through unchanged (wrapped and rounded).
///
/// The degenerate pure-black case (`l + s == 0` after rescaling, where
/// saturation is undefined) yields saturation 0.
pub fn hsl_to_hsv(c: Hsl) -> Hsv {
    let h = wrap_hue(c.h);
    let s = clamp_percent(c.s) / 100.0;
    let l = clamp_percent(c.l) / 100.0 * 2.0;

    let s = s * if l <= 1.0 { l } else { 2.0 - l };
    let v = (l + s) / 2.0;
    let s = if l + s == 0.0 { 0.0 } else { 2.0 * s / (l + s) };

    Hsv {
        h: h.round().rem_euclid(360.0),
        s: (s * 100.0).round(),
        v: (v * 100.0).round(),
    }
}

/// Convenience: HSV to hex string via the chain HSV -> RGB -> hex.
pub fn hsv_to_hex(c: Hsv) -> String {
    hsv_to_rgb(c).to_hex()
}
