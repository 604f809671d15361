// SPDX-License-Identifier: MIT
//
// The Console Buffer Bridge — the contract the core requires from host
// console I/O.
//
// Everything platform-specific lives behind the `ConsoleBuffer` trait:
// stream writes, direct screen-buffer addressing, rectangular reads,
// font selection, and window-size locking. The styling core never
// talks to a platform API directly; it talks to a `ConsoleBuffer`, and
// each target supplies its own implementation (a VT stream, an
// in-memory grid, or a native console API).

use std::fmt;

use bitflags::bitflags;

use crate::error::{Error, MAX_REGION_CELLS, Result};

// ─── Coords ─────────────────────────────────────────────────────────────────

/// A screen-buffer position: column `x`, row `y`, zero-based.
///
/// Conversions to and from plain tuples are explicit named functions.
/// There is no implicit coercion between positions and integer pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coords {
    /// Column (zero-based, left edge is 0).
    pub x: u16,
    /// Row (zero-based, top edge is 0).
    pub y: u16,
}

impl Coords {
    /// Create a position from column and row.
    #[inline]
    #[must_use]
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Create a position from a `(column, row)` tuple.
    #[inline]
    #[must_use]
    pub const fn from_tuple(pair: (u16, u16)) -> Self {
        Self {
            x: pair.0,
            y: pair.1,
        }
    }

    /// The position as a `(column, row)` tuple.
    #[inline]
    #[must_use]
    pub const fn as_tuple(self) -> (u16, u16) {
        (self.x, self.y)
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ─── Size ───────────────────────────────────────────────────────────────────

/// Screen-buffer dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// Total number of cells (`cols × rows`).
    #[inline]
    #[must_use]
    pub const fn area(self) -> u32 {
        self.cols as u32 * self.rows as u32
    }

    /// Whether a position lies inside this buffer.
    #[inline]
    #[must_use]
    pub const fn contains(self, pos: Coords) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }
}

// ─── Font ───────────────────────────────────────────────────────────────────

/// A console font request.
///
/// Either a named fixed-pitch TrueType face with a cell height, or a
/// raster/vector font selected by raw cell dimensions. The request is
/// plain data; whether and how it takes effect is each backend's
/// concern, reported through [`ConsoleBuffer::set_font`]'s boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Font {
    /// A named TrueType face.
    TrueType {
        /// Face name, e.g. `"Consolas"`.
        name: String,
        /// Cell height in pixels.
        size: u16,
        /// Font weight (400 regular, 700 bold); 0 leaves it to the host.
        weight: u16,
    },
    /// A raster font selected by raw cell dimensions.
    Vector {
        /// Cell width in pixels.
        width: u16,
        /// Cell height in pixels.
        height: u16,
        /// Font weight; 0 leaves it to the host.
        weight: u16,
    },
}

impl Font {
    /// A named TrueType face at the given cell height, default weight.
    #[must_use]
    pub fn true_type(name: impl Into<String>, size: u16) -> Self {
        Self::TrueType {
            name: name.into(),
            size,
            weight: 0,
        }
    }

    /// A raster font with the given cell dimensions, default weight.
    #[must_use]
    pub const fn vector(width: u16, height: u16) -> Self {
        Self::Vector {
            width,
            height,
            weight: 0,
        }
    }

    /// Copy of `self` with the weight replaced.
    #[must_use]
    pub fn with_weight(self, weight: u16) -> Self {
        match self {
            Self::TrueType { name, size, .. } => Self::TrueType { name, size, weight },
            Self::Vector { width, height, .. } => Self::Vector {
                width,
                height,
                weight,
            },
        }
    }
}

// ─── WindowControls ─────────────────────────────────────────────────────────

bitflags! {
    /// The interactive window controls a host may expose.
    ///
    /// [`ConsoleBuffer::lock_window_size`] returns the subset it
    /// successfully disabled; an empty set means the host exposes no
    /// such controls (or none could be locked).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WindowControls: u8 {
        /// The minimize button.
        const MINIMIZE = 1 << 0;
        /// The maximize button.
        const MAXIMIZE = 1 << 1;
        /// Interactive edge-drag resizing.
        const RESIZE   = 1 << 2;
    }
}

// ─── Region Validation ──────────────────────────────────────────────────────

/// Check a rectangular read against buffer bounds and the platform
/// ceiling. Shared by backends so every implementation rejects the
/// same regions.
///
/// # Errors
///
/// [`Error::InvalidRegion`] for zero-sized or out-of-bounds regions,
/// [`Error::RegionTooLarge`] past [`MAX_REGION_CELLS`].
pub fn validate_region(pos: Coords, width: u16, height: u16, buffer: Size) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidRegion(format!(
            "zero-sized region {width}x{height} at {pos}"
        )));
    }
    let right = u32::from(pos.x) + u32::from(width);
    let bottom = u32::from(pos.y) + u32::from(height);
    if right > u32::from(buffer.cols) || bottom > u32::from(buffer.rows) {
        return Err(Error::InvalidRegion(format!(
            "region {width}x{height} at {pos} exceeds the {}x{} buffer",
            buffer.cols, buffer.rows
        )));
    }
    let cells = u32::from(width) * u32::from(height);
    if cells > MAX_REGION_CELLS {
        return Err(Error::RegionTooLarge { cells });
    }
    Ok(())
}

// ─── ConsoleBuffer ──────────────────────────────────────────────────────────

/// The Console Buffer Bridge: host console I/O as the core requires it.
///
/// Calls are issued synchronously in caller order; the bridge imposes
/// no further ordering guarantees. A single caller must own the
/// backend for the duration of a styled run, or interleaved writes
/// from elsewhere will corrupt the output visually.
pub trait ConsoleBuffer {
    /// Emit literal text to the active output stream, no interpretation.
    ///
    /// The text may carry escape sequences; the stream (or its stand-in)
    /// interprets them as rendering state, never as cell content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the underlying stream write fails.
    fn write_raw(&mut self, text: &str) -> Result<()>;

    /// Emit a single literal character to the active output stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the underlying stream write fails.
    fn write_raw_char(&mut self, ch: char) -> Result<()>;

    /// Write text directly into the screen buffer at a position,
    /// bypassing the stream cursor.
    ///
    /// Like [`write_raw`](Self::write_raw), the text may carry escape
    /// sequences around the cell content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] when the position is outside
    /// the buffer, or [`Error::Io`] on stream failure.
    fn write_at(&mut self, text: &str, pos: Coords) -> Result<()>;

    /// Write a single character directly into the screen buffer.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`write_at`](Self::write_at).
    fn write_char_at(&mut self, ch: char, pos: Coords) -> Result<()>;

    /// Read a rectangular region of the screen buffer as row strings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] or [`Error::RegionTooLarge`]
    /// per [`validate_region`], or [`Error::Unsupported`] when the
    /// backend has no way to read its buffer back.
    fn read_region(&self, pos: Coords, width: u16, height: u16) -> Result<Vec<String>>;

    /// Select a console font. Success/failure, never an error.
    fn set_font(&mut self, font: &Font) -> bool;

    /// Disable interactive resize/minimize/maximize where the host
    /// exposes such controls. Returns the subset successfully locked.
    fn lock_window_size(&mut self) -> WindowControls;

    /// Current buffer size in columns × rows.
    fn size(&self) -> Size;
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Coords ──────────────────────────────────────────────────────────

    #[test]
    fn coords_tuple_conversions_are_inverses() {
        let pos = Coords::new(3, 7);
        assert_eq!(Coords::from_tuple(pos.as_tuple()), pos);
        assert_eq!(Coords::from_tuple((3, 7)).as_tuple(), (3, 7));
    }

    #[test]
    fn coords_display() {
        assert_eq!(Coords::new(10, 2).to_string(), "(10, 2)");
    }

    #[test]
    fn coords_default_is_origin() {
        assert_eq!(Coords::default(), Coords::new(0, 0));
    }

    // ── Size ────────────────────────────────────────────────────────────

    #[test]
    fn size_area() {
        assert_eq!(Size { cols: 80, rows: 24 }.area(), 1920);
        assert_eq!(Size { cols: 0, rows: 24 }.area(), 0);
    }

    #[test]
    fn size_contains_is_exclusive_of_the_edges() {
        let s = Size { cols: 80, rows: 24 };
        assert!(s.contains(Coords::new(0, 0)));
        assert!(s.contains(Coords::new(79, 23)));
        assert!(!s.contains(Coords::new(80, 0)));
        assert!(!s.contains(Coords::new(0, 24)));
    }

    // ── Font ────────────────────────────────────────────────────────────

    #[test]
    fn true_type_font_carries_name_and_size() {
        let f = Font::true_type("Consolas", 16);
        assert_eq!(
            f,
            Font::TrueType {
                name: "Consolas".into(),
                size: 16,
                weight: 0
            }
        );
    }

    #[test]
    fn vector_font_carries_cell_dimensions() {
        assert_eq!(
            Font::vector(8, 12),
            Font::Vector {
                width: 8,
                height: 12,
                weight: 0
            }
        );
    }

    #[test]
    fn with_weight_replaces_only_the_weight() {
        let f = Font::true_type("Consolas", 16).with_weight(700);
        assert_eq!(
            f,
            Font::TrueType {
                name: "Consolas".into(),
                size: 16,
                weight: 700
            }
        );

        let v = Font::vector(8, 12).with_weight(400);
        assert_eq!(
            v,
            Font::Vector {
                width: 8,
                height: 12,
                weight: 400
            }
        );
    }

    // ── WindowControls ──────────────────────────────────────────────────

    #[test]
    fn window_controls_flags_are_distinct() {
        let all = WindowControls::all();
        assert!(all.contains(WindowControls::MINIMIZE));
        assert!(all.contains(WindowControls::MAXIMIZE));
        assert!(all.contains(WindowControls::RESIZE));
        assert_eq!(all.bits(), 0b111);
    }

    // ── Region Validation ───────────────────────────────────────────────

    const BUF: Size = Size {
        cols: 200,
        rows: 100,
    };

    #[test]
    fn valid_region_passes() {
        validate_region(Coords::new(0, 0), 200, 50, BUF).unwrap();
        validate_region(Coords::new(199, 99), 1, 1, BUF).unwrap();
    }

    #[test]
    fn zero_sized_region_is_invalid() {
        let err = validate_region(Coords::new(0, 0), 0, 5, BUF).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
        let err = validate_region(Coords::new(0, 0), 5, 0, BUF).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
    }

    #[test]
    fn out_of_bounds_region_is_invalid() {
        let err = validate_region(Coords::new(150, 0), 51, 1, BUF).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
        let err = validate_region(Coords::new(0, 99), 1, 2, BUF).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
    }

    #[test]
    fn region_at_the_cell_ceiling_passes() {
        // 200 x 81 = 16 200 cells, just under the 16 384-cell ceiling.
        validate_region(Coords::new(0, 0), 200, 81, BUF).unwrap();
    }

    #[test]
    fn region_past_the_cell_ceiling_is_rejected() {
        // 200 x 82 = 16 400 cells.
        let err = validate_region(Coords::new(0, 0), 200, 82, BUF).unwrap_err();
        assert!(matches!(err, Error::RegionTooLarge { cells: 16_400 }));
    }
}
