//! Gradient stops for the saturation/value canvas.
//!
//! The canvas is painted as 101 horizontal rows, one per integer value
//! level from 100 (top) down to 0. Each row is a left-to-right gradient
//! from zero to full saturation at that value, expressed as HSL stops so a
//! renderer can hand them straight to a CSS/canvas gradient.

use huebox_core::color::{hsv_to_hsl, Hsl, Hsv};
use serde::{Deserialize, Serialize};

/// One horizontal row of the saturation/value gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientRow {
    /// Left stop: saturation 0 at this row's value level.
    pub start: Hsl,
    /// Right stop: saturation 100 at this row's value level.
    pub end: Hsl,
    /// Vertical offset of the row from the top, in percent of canvas height.
    pub offset: f64,
}

/// Computes the gradient rows for a hue, top (value 100) to bottom (value 0).
pub fn gradient_rows(hue: f64) -> Vec<GradientRow> {
    (0u32..=100)
        .rev()
        .map(|value| {
            let value = f64::from(value);
            GradientRow {
                start: hsv_to_hsl(Hsv {
                    h: hue,
                    s: 0.0,
                    v: value,
                }),
                end: hsv_to_hsl(Hsv {
                    h: hue,
                    s: 100.0,
                    v: value,
                }),
                offset: 100.0 - value,
            }
        })
        .collect()
}
