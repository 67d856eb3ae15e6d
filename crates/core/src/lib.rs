#![deny(unsafe_code)]
//! Color conversion core for the huebox color picker.
//!
//! Provides the `Hsv`/`Rgb`/`Hsl` color types, pure conversion functions
//! between them (including hex-string encoding), and a parser for the
//! textual color notations (`#hex`, `rgb(...)`, `hsl(...)`) used in
//! deep-link fragments.
//!
//! Everything here is synchronous, allocation-light, and free of shared
//! state; all functions may be called from any thread.

pub mod color;
pub mod error;
pub mod parse;

pub use color::{hsl_to_hsv, hsv_to_hex, hsv_to_hsl, hsv_to_rgb, rgb_to_hsv, Hsl, Hsv, Rgb};
pub use error::ColorError;
pub use parse::parse_color_string;
