// SPDX-License-Identifier: MIT
//
// glint-style — Styling core for glint.
//
// Pure value computation only: 24-bit RGB colors with saturating
// arithmetic and gradients, the 16-name legacy palette, SGR escape
// sequence encoding, and per-character formatted strings. Nothing in
// this crate touches a terminal, holds state, or performs I/O beyond
// writing bytes into a caller-supplied writer. The console layer lives
// in glint-console; this crate is what it encodes with.

pub mod color;
pub mod effect;
pub mod error;
pub mod escape;
pub mod fmtstr;

pub use color::{Color, LegacyColor, gradient};
pub use effect::{GraphicEffect, GraphicsMode};
pub use error::{Error, Result};
pub use fmtstr::FormatString;
