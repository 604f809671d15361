// SPDX-License-Identifier: MIT
//
// 24-bit color values, the legacy 16-color palette, and gradients.
//
// Single-character variable names (r, g, b, t) are the standard
// mathematical convention in color code. Renaming them would make the
// arithmetic harder to compare against reference tables.
#![allow(clippy::many_single_char_names)]
//
// Colors here are plain sRGB bytes. There is no perceptual space and no
// gamma handling: terminals take the three channel values verbatim in the
// `38;2;r;g;b` SGR form, so the math that matters is byte-exact saturation,
// a normalized [0, 1] float view, and per-channel linear interpolation.

use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

use crate::error::{Error, Result};

// ─── Color ───────────────────────────────────────────────────────────────────

/// A 24-bit RGB color, one byte per channel.
///
/// Arithmetic on colors never fails and never wraps: `+` and `-` saturate
/// per channel at the byte extremes, and `*` multiplies the normalized
/// views (a darkening/tinting operation).
///
/// # Examples
///
/// ```
/// use glint_style::color::Color;
///
/// let orange = Color::new(255, 128, 0);
/// let dimmed = orange * Color::new(128, 128, 128);
///
/// // Saturating arithmetic clamps instead of wrapping.
/// assert_eq!(orange + Color::new(16, 200, 0), Color::new(255, 255, 0));
///
/// // Named palette lookup uses the Campbell scheme.
/// assert_eq!(Color::from_palette("Red")?, Color::new(231, 72, 86));
/// # Ok::<(), glint_style::Error>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from three byte channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from normalized channels, clamping each into
    /// `[0, 1]` before conversion to bytes.
    ///
    /// This is the lenient float constructor: out-of-range inputs are
    /// pulled to the nearest bound rather than rejected. Use
    /// [`Color::try_from_normal`] when out-of-range input should be an
    /// error.
    #[must_use]
    pub fn from_normal_clamped(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: channel_from_normal(r.clamp(0.0, 1.0)),
            g: channel_from_normal(g.clamp(0.0, 1.0)),
            b: channel_from_normal(b.clamp(0.0, 1.0)),
        }
    }

    /// Create a color from normalized channels, rejecting any value
    /// outside `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when any channel is not a finite
    /// value in `[0, 1]`.
    pub fn try_from_normal(r: f32, g: f32, b: f32) -> Result<Self> {
        for (name, v) in [("r", r), ("g", g), ("b", b)] {
            if !(0.0..=1.0).contains(&v) {
                return Err(Error::OutOfRange(format!(
                    "normalized channel {name}={v} outside [0, 1]"
                )));
            }
        }
        Ok(Self {
            r: channel_from_normal(r),
            g: channel_from_normal(g),
            b: channel_from_normal(b),
        })
    }

    /// Look up one of the 16 legacy terminal colors by name.
    ///
    /// Names are the exact `LegacyColor` variant names (`"Red"`,
    /// `"DarkCyan"`, ...), case sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when the name is not one of the 16
    /// recognized legacy colors.
    pub fn from_palette(name: &str) -> Result<Self> {
        name.parse::<LegacyColor>().map(LegacyColor::rgb)
    }

    // ─── Normalized View ─────────────────────────────────────────────────

    /// The three channels as floats in `[0, 1]`, in `[r, g, b]` order.
    #[inline]
    #[must_use]
    pub fn to_normal(self) -> [f32; 3] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        ]
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { r, g, b } = self;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Arithmetic ──────────────────────────────────────────────────────────────

impl Add for Color {
    type Output = Self;

    /// Per-channel saturating addition: overflowing channels clamp at 255.
    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
        }
    }
}

impl Sub for Color {
    type Output = Self;

    /// Per-channel saturating subtraction: underflowing channels clamp at 0.
    fn sub(self, rhs: Self) -> Self {
        Self {
            r: self.r.saturating_sub(rhs.r),
            g: self.g.saturating_sub(rhs.g),
            b: self.b.saturating_sub(rhs.b),
        }
    }
}

impl Mul for Color {
    type Output = Self;

    /// Per-channel product of the normalized views, converted back to
    /// bytes. Multiplying by white is the identity; multiplying by black
    /// yields black.
    fn mul(self, rhs: Self) -> Self {
        let [ar, ag, ab] = self.to_normal();
        let [br, bg, bb] = rhs.to_normal();
        Self {
            r: channel_from_normal(ar * br),
            g: channel_from_normal(ag * bg),
            b: channel_from_normal(ab * bb),
        }
    }
}

/// Convert a normalized channel in `[0, 1]` to a byte with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_from_normal(v: f32) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).clamp(0.0, 255.0) as u8
}

// ─── Legacy Palette ──────────────────────────────────────────────────────────

/// The 16 legacy terminal colors, mapped to fixed RGB triples.
///
/// The triples are the Campbell scheme (the Windows Terminal defaults),
/// so legacy names render identically whether the host resolves them
/// itself or receives the truecolor expansion from [`LegacyColor::rgb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegacyColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl LegacyColor {
    /// All 16 legacy colors in their conventional host order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkCyan,
        Self::DarkRed,
        Self::DarkMagenta,
        Self::DarkYellow,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
    ];

    /// The fixed RGB triple for this legacy color.
    #[must_use]
    pub const fn rgb(self) -> Color {
        match self {
            Self::Black => Color::new(12, 12, 12),
            Self::DarkBlue => Color::new(0, 55, 218),
            Self::DarkGreen => Color::new(19, 161, 14),
            Self::DarkCyan => Color::new(58, 150, 221),
            Self::DarkRed => Color::new(197, 15, 31),
            Self::DarkMagenta => Color::new(136, 23, 152),
            Self::DarkYellow => Color::new(193, 156, 0),
            Self::Gray => Color::new(204, 204, 204),
            Self::DarkGray => Color::new(118, 118, 118),
            Self::Blue => Color::new(59, 120, 255),
            Self::Green => Color::new(22, 198, 12),
            Self::Cyan => Color::new(97, 214, 214),
            Self::Red => Color::new(231, 72, 86),
            Self::Magenta => Color::new(180, 0, 158),
            Self::Yellow => Color::new(249, 241, 165),
            Self::White => Color::new(242, 242, 242),
        }
    }

    /// The canonical name, matching the variant spelling.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::DarkBlue => "DarkBlue",
            Self::DarkGreen => "DarkGreen",
            Self::DarkCyan => "DarkCyan",
            Self::DarkRed => "DarkRed",
            Self::DarkMagenta => "DarkMagenta",
            Self::DarkYellow => "DarkYellow",
            Self::Gray => "Gray",
            Self::DarkGray => "DarkGray",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Cyan => "Cyan",
            Self::Red => "Red",
            Self::Magenta => "Magenta",
            Self::Yellow => "Yellow",
            Self::White => "White",
        }
    }
}

impl FromStr for LegacyColor {
    type Err = Error;

    /// Parse a canonical legacy color name. Case sensitive.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::OutOfRange(format!("unknown legacy color name {s:?}")))
    }
}

impl fmt::Display for LegacyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<LegacyColor> for Color {
    fn from(legacy: LegacyColor) -> Self {
        legacy.rgb()
    }
}

// ─── Gradients ───────────────────────────────────────────────────────────────

/// Generate `size` colors linearly interpolating each channel from `from`
/// to `to`, inclusive of both endpoints.
///
/// For `size >= 2` the first element is exactly `from` and the last is
/// exactly `to`; every channel moves monotonically between them. For
/// `size == 1` the step formula has no second endpoint to reach, so the
/// result is defined as `[from]`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `size == 0`.
///
/// # Examples
///
/// ```
/// use glint_style::color::{Color, gradient};
///
/// let fade = gradient(Color::new(0, 0, 0), Color::new(255, 255, 255), 3)?;
/// assert_eq!(fade[1], Color::new(128, 128, 128));
/// # Ok::<(), glint_style::Error>(())
/// ```
pub fn gradient(from: Color, to: Color, size: usize) -> Result<Vec<Color>> {
    if size == 0 {
        return Err(Error::InvalidArgument("gradient size must be at least 1"));
    }
    if size == 1 {
        return Ok(vec![from]);
    }

    #[allow(clippy::cast_precision_loss)]
    let last = (size - 1) as f32;
    let mut colors = Vec::with_capacity(size);
    for i in 0..size {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f32 / last;
        colors.push(Color {
            r: lerp_channel(from.r, to.r, t),
            g: lerp_channel(from.g, to.g, t),
            b: lerp_channel(from.b, to.b, t),
        });
    }
    Ok(colors)
}

/// Interpolate a single channel at parameter `t` in `[0, 1]`.
///
/// At `t == 0.0` this returns exactly `a`, at `t == 1.0` exactly `b`:
/// both bytes are exact in f32, and rounding an already-integral value
/// is the identity.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u8, b: u8, t: f32) -> u8 {
    let v = (f32::from(b) - f32::from(a)).mul_add(t, f32::from(a));
    // Safe: v lies between two byte values, so v + 0.5 is within [0, 255.5].
    (v + 0.5).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
