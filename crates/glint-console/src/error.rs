// SPDX-License-Identifier: MIT
//
// Error type for the console layer.
//
// Platform failures surface to the caller wrapped, never swallowed: a
// screen-buffer read that the backend cannot perform is an error the
// caller sees, not a silently empty result.

use thiserror::Error;

/// The largest screen-buffer region a single read may cover, in cells.
///
/// The classic console host's `ReadConsoleOutput` rejects reads whose
/// record buffer exceeds 64 KiB; at 4 bytes per cell record that is
/// 16 384 cells. The ceiling is enforced uniformly so callers hit the
/// same limit on every backend instead of only in production.
pub const MAX_REGION_CELLS: u32 = 16_384;

/// Errors produced by console backends and the [`Console`] context.
///
/// [`Console`]: crate::console::Console
#[derive(Error, Debug)]
pub enum Error {
    /// A styling error bubbled up from the core.
    #[error(transparent)]
    Style(#[from] glint_style::Error),

    /// A screen-buffer region with bad geometry: zero-sized or reaching
    /// outside the buffer.
    #[error("invalid region: {0}")]
    InvalidRegion(String),

    /// A region read larger than the platform ceiling.
    #[error("region of {cells} cells exceeds the {MAX_REGION_CELLS}-cell read ceiling")]
    RegionTooLarge {
        /// Requested region size in cells.
        cells: u32,
    },

    /// An operation this backend has no way to perform, such as reading
    /// the screen buffer back through a plain VT stream.
    #[error("unsupported by this backend: {0}")]
    Unsupported(&'static str),

    /// A native I/O failure, surfaced verbatim.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
