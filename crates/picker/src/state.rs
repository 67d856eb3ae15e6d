//! Canonical picker state and handle geometry.
//!
//! `PickerState` holds the single in-memory color the picker edits, always
//! in HSV. The saturation/value canvas and the hue bar are described by an
//! injected [`Geometry`] value rather than ambient globals, so the same
//! state model drives any rendering surface.
//!
//! Coordinate conventions match the canvas: x grows right, y grows down,
//! saturation grows with x, value grows upward (y = 0 is value 100).

use crate::error::PickerError;
use huebox_core::color::{hsv_to_hex, hsv_to_hsl, hsv_to_rgb, Hsl, Hsv, Rgb};
use huebox_core::parse::parse_color_string;
use serde::{Deserialize, Serialize};

/// Pixel geometry of the saturation/value canvas and the hue bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    canvas_width: f64,
    canvas_height: f64,
    hue_bar_width: f64,
}

impl Geometry {
    /// Creates a geometry from pixel dimensions.
    ///
    /// Each dimension must be finite and strictly positive; position
    /// mappings divide by them.
    pub fn new(
        canvas_width: f64,
        canvas_height: f64,
        hue_bar_width: f64,
    ) -> Result<Self, PickerError> {
        let check = |value: f64, name: &'static str| {
            if value.is_finite() && value > 0.0 {
                Ok(value)
            } else {
                Err(PickerError::InvalidGeometry(name))
            }
        };
        Ok(Self {
            canvas_width: check(canvas_width, "canvas_width")?,
            canvas_height: check(canvas_height, "canvas_height")?,
            hue_bar_width: check(hue_bar_width, "hue_bar_width")?,
        })
    }

    /// Width of the saturation/value canvas in pixels.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Height of the saturation/value canvas in pixels.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Width of the hue bar in pixels.
    pub fn hue_bar_width(&self) -> f64 {
        self.hue_bar_width
    }
}

/// The picker's canonical color state, held in HSV.
///
/// All other representations (`rgb()`, `hsl()`, `hex()`) are derived on
/// demand through the conversion core.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PickerState {
    hsv: Hsv,
}

impl PickerState {
    /// Creates a picker showing the default color (h=215, s=100, v=100).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a picker showing a specific color.
    pub fn with_color(hsv: Hsv) -> Self {
        Self { hsv }
    }

    /// Creates a picker from a deep-link fragment.
    ///
    /// Falls back to the default color when the fragment matches none of
    /// the recognized notations; startup never fails on a bad fragment.
    pub fn from_fragment(fragment: &str) -> Self {
        Self {
            hsv: parse_color_string(fragment).unwrap_or_default(),
        }
    }

    /// Replaces the current color from a changed fragment.
    ///
    /// Returns `true` if the fragment was recognized and applied; an
    /// unrecognized fragment leaves the state untouched.
    pub fn apply_fragment(&mut self, fragment: &str) -> bool {
        match parse_color_string(fragment) {
            Ok(hsv) => {
                self.hsv = hsv;
                true
            }
            Err(_) => false,
        }
    }

    /// The current color in HSV.
    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The current color in RGB.
    pub fn rgb(&self) -> Rgb {
        hsv_to_rgb(self.hsv)
    }

    /// The current color in HSL.
    pub fn hsl(&self) -> Hsl {
        hsv_to_hsl(self.hsv)
    }

    /// The current color as a `#rrggbb` hex string.
    pub fn hex(&self) -> String {
        hsv_to_hex(self.hsv)
    }

    /// Sets saturation and value from a pointer position on the canvas.
    ///
    /// Positions are clamped to the canvas bounds; x maps to saturation,
    /// inverted y to value (the top edge is value 100).
    pub fn set_canvas_position(&mut self, x: f64, y: f64, geometry: &Geometry) {
        let x = x.clamp(0.0, geometry.canvas_width);
        let y = y.clamp(0.0, geometry.canvas_height);
        self.hsv.s = x * 100.0 / geometry.canvas_width;
        self.hsv.v = (geometry.canvas_height - y) * 100.0 / geometry.canvas_height;
    }

    /// Sets hue from a pointer position on the hue bar.
    ///
    /// The position is clamped to the bar, scaled to degrees, rounded, and
    /// wrapped into [0, 360) (the right edge is the same red as the left).
    pub fn set_hue_position(&mut self, x: f64, geometry: &Geometry) {
        let x = x.clamp(0.0, geometry.hue_bar_width);
        self.hsv.h = (x * 360.0 / geometry.hue_bar_width)
            .round()
            .rem_euclid(360.0);
    }

    /// Pixel position of the color handle on the canvas, as `(x, y)`.
    pub fn color_handle_position(&self, geometry: &Geometry) -> (f64, f64) {
        let x = self.hsv.s * geometry.canvas_width / 100.0;
        let y = geometry.canvas_height - self.hsv.v * geometry.canvas_height / 100.0;
        (x, y)
    }

    /// Pixel position of the hue handle on the hue bar.
    pub fn hue_handle_position(&self, geometry: &Geometry) -> f64 {
        self.hsv.h * geometry.hue_bar_width / 360.0
    }

    /// The current color as a CSS `rgb(r, g, b)` string.
    pub fn css_rgb(&self) -> String {
        let rgb = self.rgb();
        format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
    }

    /// The current color as a CSS `hsl(h, s%, l%)` string.
    pub fn css_hsl(&self) -> String {
        let hsl = self.hsl();
        format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
    }

    /// The hue handle's swatch color: the current hue at full saturation
    /// and half lightness.
    pub fn hue_css(&self) -> String {
        format!("hsl({}, 100%, 50%)", self.hsv.h.round())
    }

    /// Foreground color (`#fff` or `#000`) that stays readable over the
    /// current color.
    ///
    /// Washed-out colors (saturation below 40) go by value alone; saturated
    /// colors use white except in the yellow-green hue window (51, 98] where
    /// black reads better.
    pub fn foreground(&self) -> &'static str {
        if self.hsv.s < 40.0 {
            if self.hsv.v < 40.0 {
                "#fff"
            } else {
                "#000"
            }
        } else if self.hsv.h > 51.0 && self.hsv.h <= 98.0 {
            "#000"
        } else {
            "#fff"
        }
    }
}
