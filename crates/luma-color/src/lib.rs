// SPDX-License-Identifier: MIT
//
// luma-color — color literal parser for luma.
//
// Turns the color encodings UI code actually writes (hex, `rgb()`/`rgba()`
// strings, numeric triples and quadruples) into one validated, fully
// opaque byte triple. Translucent colors are refused with enough detail
// for the caller to alpha-blend them first; nothing here guesses at a
// background.

pub mod color;
pub mod error;
pub mod parse;

pub use color::{ColorInput, Rgb8};
pub use error::{Alpha, ColorError, Result};
pub use parse::parse;
