// SPDX-License-Identifier: MIT
//
// Error type for the styling core.
//
// Everything in this crate fails fast and locally: constructors and lookups
// validate their inputs and return an error immediately, with no partial
// values and no fallback defaults. Absent styling is expressed with
// `Option`, never by downgrading a failure to some neutral color.

use thiserror::Error;

/// Errors produced by color, gradient, and formatted-string construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A structurally invalid argument, such as a zero-length gradient.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A value outside its domain: an unknown palette name, a normalized
    /// channel outside `[0, 1]`, or an index past the end of a formatted
    /// string.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// Raw-part assembly received text and style arrays of different
    /// lengths.
    #[error("length mismatch: {text} chars vs {styles} styles")]
    LengthMismatch {
        /// Character count of the text payload.
        text: usize,
        /// Length of the style array.
        styles: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
