// SPDX-License-Identifier: MIT
//
// SGR escape sequence encoding.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit; that is the console layer's job. This
// module just knows the byte-level encoding of every styling command.
//
// The grammar is fixed: introducer `\x1b[`, decimal parameters separated
// by `;`, terminated by `m`. Colors always use the 24-bit form, parameter
// 38 (foreground) or 48 (background) followed by `2` and the three channel
// bytes: `\x1b[38;2;R;G;Bm`.
//
// Absent inputs write nothing. An `Option::None` color or mode is "no
// instruction for this channel" and must never produce a sequence.
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to a `Vec`-backed buffer.

use std::io::{self, Write};

use crate::color::Color;
use crate::effect::{GraphicEffect, GraphicsMode};

// ─── Reset Constants ─────────────────────────────────────────────────────────

/// Clears both grounds back to terminal defaults (SGR 0;39;49).
pub const RESET_COLOR: &str = "\x1b[0;39;49m";

/// Clears the text effect (SGR 0;0;0).
pub const RESET_EFFECTS: &str = "\x1b[0;0;0m";

// ─── Color Sequences ─────────────────────────────────────────────────────────

/// Write the truecolor foreground sequence for `color`.
///
/// Absent colors write nothing.
#[inline]
pub fn fg(w: &mut impl Write, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(Color { r, g, b }) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
        None => Ok(()),
    }
}

/// Write the truecolor background sequence for `color`.
///
/// Absent colors write nothing.
#[inline]
pub fn bg(w: &mut impl Write, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(Color { r, g, b }) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
        None => Ok(()),
    }
}

// ─── Effect Sequences ────────────────────────────────────────────────────────

/// Write the sequence for a single text effect.
///
/// Absent modes write nothing.
#[inline]
pub fn effect(w: &mut impl Write, mode: Option<GraphicsMode>) -> io::Result<()> {
    match mode {
        Some(m) => write!(w, "\x1b[{}m", m.code()),
        None => Ok(()),
    }
}

/// Write the full paint-state encoding: foreground sequence, background
/// sequence, effect sequence, in that fixed order. Each part is skipped
/// when its field is absent; a fully absent effect writes nothing at all.
pub fn graphic_effect(w: &mut impl Write, paint: GraphicEffect) -> io::Result<()> {
    fg(w, paint.foreground)?;
    bg(w, paint.background)?;
    effect(w, paint.effect)
}

/// Write the full color reset, clearing both grounds.
#[inline]
pub fn reset_color(w: &mut impl Write) -> io::Result<()> {
    w.write_all(RESET_COLOR.as_bytes())
}

/// Write the full effect reset.
#[inline]
pub fn reset_effects(w: &mut impl Write) -> io::Result<()> {
    w.write_all(RESET_EFFECTS.as_bytes())
}

// ─── String Forms ────────────────────────────────────────────────────────────
//
// Owned-string conveniences for callers assembling sequences by hand. The
// byte output is identical to the writer forms above, pinned by tests.

/// The color sequence as an owned string. `foreground` selects the ground:
/// `true` encodes parameter 38, `false` parameter 48.
#[must_use]
pub fn color_sequence(color: Option<Color>, foreground: bool) -> String {
    match color {
        Some(Color { r, g, b }) => {
            let ground = if foreground { 38 } else { 48 };
            format!("\x1b[{ground};2;{r};{g};{b}m")
        }
        None => String::new(),
    }
}

/// The effect sequence as an owned string.
#[must_use]
pub fn effect_sequence(mode: Option<GraphicsMode>) -> String {
    match mode {
        Some(m) => format!("\x1b[{}m", m.code()),
        None => String::new(),
    }
}

/// The full paint-state encoding as an owned string.
#[must_use]
pub fn graphic_effect_sequence(paint: GraphicEffect) -> String {
    let mut s = color_sequence(paint.foreground, true);
    s.push_str(&color_sequence(paint.background, false));
    s.push_str(&effect_sequence(paint.effect));
    s
}

// ─── Tests ───────────────────────────────────────────────────────────────────
