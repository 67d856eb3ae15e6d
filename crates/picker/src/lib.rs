#![deny(unsafe_code)]
//! DOM-free picker state for the huebox color picker.
//!
//! This crate sits between `huebox-core` (the pure conversion math) and any
//! rendering surface. It owns the canonical HSV state, maps pointer
//! positions to color components and back (handle placement), produces the
//! gradient stops for the saturation/value canvas, and formats CSS color
//! strings. Pixel geometry is injected explicitly; nothing here touches a
//! canvas or the DOM.

pub mod error;
pub mod gradient;
pub mod state;

pub use error::PickerError;
pub use gradient::{gradient_rows, GradientRow};
pub use state::{Geometry, PickerState};
