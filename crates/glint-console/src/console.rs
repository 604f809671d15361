// SPDX-License-Identifier: MIT
//
// Console — the explicit style cursor and output driver.
//
// A `Console` owns a bridge backend plus the current foreground,
// background, and effect. That state is the style cursor: what
// unstyled output renders as. It lives here, in a value the caller
// passes around, never in process globals — two consoles never share
// styling state, and a second output target costs nothing but a
// second value.
//
// The output driver interleaves sequence-then-character per position:
// each styled character carries its own escape prefix, and every run
// ends with an effect reset so trailing text is never mis-styled by a
// later unrelated write. Per-character emission is the baseline
// contract; the whole run still reaches the backend as a single
// `write_raw` so it hits the stream in one uninterrupted burst.

use glint_style::color::Color;
use glint_style::effect::{GraphicEffect, GraphicsMode};
use glint_style::escape;
use glint_style::fmtstr::FormatString;

use crate::bridge::{ConsoleBuffer, Coords, Font, Size, WindowControls};
use crate::error::{Error, Result};

// ─── Rendering ──────────────────────────────────────────────────────────────

/// Encode a formatted string into its escape-annotated byte stream.
///
/// For each character: the encoded sequence for its style (empty when
/// unstyled), then the character itself. The run always ends with the
/// effect reset. Pure; [`Console::write`] sends exactly these bytes.
///
/// # Examples
///
/// ```
/// use glint_console::console::render;
/// use glint_style::{Color, FormatString};
///
/// let ok = FormatString::with_color("OK", Color::new(0, 255, 0));
/// assert_eq!(
///     render(&ok),
///     "\x1b[38;2;0;255;0mO\x1b[38;2;0;255;0mK\x1b[0;0;0m"
/// );
/// ```
#[must_use]
pub fn render(value: &FormatString) -> String {
    render_run(value, false)
}

fn render_run(value: &FormatString, newline: bool) -> String {
    let mut out = String::new();
    for (ch, style) in value {
        if let Some(style) = style {
            out.push_str(&escape::graphic_effect_sequence(style));
        }
        out.push(ch);
    }
    if newline {
        out.push('\n');
    }
    out.push_str(escape::RESET_EFFECTS);
    out
}

// ─── Console ────────────────────────────────────────────────────────────────

/// A console with an explicit style cursor over a bridge backend.
///
/// # Examples
///
/// ```
/// use glint_console::console::Console;
/// use glint_console::headless::HeadlessConsole;
/// use glint_style::{Color, FormatString};
///
/// let mut con = Console::new(HeadlessConsole::new(40, 5));
/// con.write(&FormatString::with_color("ready", Color::new(0, 255, 0)))?;
/// # Ok::<(), glint_console::Error>(())
/// ```
pub struct Console<B: ConsoleBuffer> {
    backend: B,
    foreground: Option<Color>,
    background: Option<Color>,
    effect: Option<GraphicsMode>,
    default_fg: Option<Color>,
    default_bg: Option<Color>,
}

impl<B: ConsoleBuffer> Console<B> {
    /// Wrap a backend with an empty style cursor and no defaults.
    ///
    /// No defaults means the reset operations fall back to the
    /// terminal's own colors.
    pub fn new(backend: B) -> Self {
        Self::with_defaults(backend, None, None)
    }

    /// Wrap a backend with default foreground and background colors.
    ///
    /// The defaults are what [`reset_color`](Self::reset_color)
    /// restores; they also seed the style cursor.
    pub fn with_defaults(backend: B, fg: Option<Color>, bg: Option<Color>) -> Self {
        Self {
            backend,
            foreground: fg,
            background: bg,
            effect: None,
            default_fg: fg,
            default_bg: bg,
        }
    }

    // ─── Style Cursor ─────────────────────────────────────────────────────

    /// The current foreground color.
    #[inline]
    #[must_use]
    pub const fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    /// The current background color.
    #[inline]
    #[must_use]
    pub const fn background(&self) -> Option<Color> {
        self.background
    }

    /// The current text effect.
    #[inline]
    #[must_use]
    pub const fn effect(&self) -> Option<GraphicsMode> {
        self.effect
    }

    /// The default colors, as `(foreground, background)`.
    #[inline]
    #[must_use]
    pub const fn defaults(&self) -> (Option<Color>, Option<Color>) {
        (self.default_fg, self.default_bg)
    }

    /// Set the foreground and emit its sequence.
    ///
    /// `None` clears the cursor field without emitting anything; the
    /// terminal keeps whatever foreground it had.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn set_foreground(&mut self, color: Option<Color>) -> Result<()> {
        self.foreground = color;
        self.emit(&escape::color_sequence(color, true))
    }

    /// Set the background and emit its sequence.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn set_background(&mut self, color: Option<Color>) -> Result<()> {
        self.background = color;
        self.emit(&escape::color_sequence(color, false))
    }

    /// Set the text effect and emit its sequence.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn set_effect(&mut self, mode: Option<GraphicsMode>) -> Result<()> {
        self.effect = mode;
        self.emit(&escape::effect_sequence(mode))
    }

    /// Apply every present field of a paint state, absent fields left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn set_graphics(&mut self, paint: GraphicEffect) -> Result<()> {
        if paint.foreground.is_some() {
            self.set_foreground(paint.foreground)?;
        }
        if paint.background.is_some() {
            self.set_background(paint.background)?;
        }
        if paint.effect.is_some() {
            self.set_effect(paint.effect)?;
        }
        Ok(())
    }

    /// Reset both grounds to the console's defaults.
    ///
    /// Emits the color reset, then re-applies the stored defaults; the
    /// style cursor ends up at the defaults.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn reset_color(&mut self) -> Result<()> {
        self.emit(escape::RESET_COLOR)?;
        self.set_foreground(self.default_fg)?;
        self.set_background(self.default_bg)
    }

    /// Reset the text effect, clearing the effect cursor.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn reset_graphics(&mut self) -> Result<()> {
        self.effect = None;
        self.emit(escape::RESET_EFFECTS)
    }

    fn emit(&mut self, seq: &str) -> Result<()> {
        if seq.is_empty() {
            return Ok(());
        }
        self.backend.write_raw(seq)
    }

    // ─── Styled Output ────────────────────────────────────────────────────

    /// Write a formatted string: sequence-then-character per position,
    /// then an effect reset.
    ///
    /// Unstyled positions carry no bytes of their own; they render in
    /// whatever style the stream is already in.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn write(&mut self, value: &FormatString) -> Result<()> {
        self.backend.write_raw(&render(value))
    }

    /// Write a formatted string followed by a newline.
    ///
    /// The newline is part of the run, before the trailing reset.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn write_line(&mut self, value: &FormatString) -> Result<()> {
        self.backend.write_raw(&render_run(value, true))
    }

    /// Write one uniformly styled text run.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn write_styled(&mut self, text: &str, paint: GraphicEffect) -> Result<()> {
        self.write(&FormatString::styled(text, paint))
    }

    /// Write plain text straight through, no styling and no reset.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn write_plain(&mut self, text: &str) -> Result<()> {
        self.backend.write_raw(text)
    }

    /// Write a single plain character straight through.
    ///
    /// # Errors
    ///
    /// Propagates backend write failures.
    pub fn write_char(&mut self, ch: char) -> Result<()> {
        self.backend.write_raw_char(ch)
    }

    // ─── Screen Buffer ────────────────────────────────────────────────────

    /// Write text directly into the screen buffer at a position.
    ///
    /// # Errors
    ///
    /// Propagates backend failures, including out-of-bounds positions.
    pub fn write_at(&mut self, text: &str, pos: Coords) -> Result<()> {
        self.backend.write_at(text, pos)
    }

    /// Write a single character directly into the screen buffer.
    ///
    /// # Errors
    ///
    /// Propagates backend failures, including out-of-bounds positions.
    pub fn write_char_at(&mut self, ch: char, pos: Coords) -> Result<()> {
        self.backend.write_char_at(ch, pos)
    }

    /// Read a rectangular region of the screen buffer as row strings.
    ///
    /// # Errors
    ///
    /// Propagates backend failures: bad geometry, the region ceiling,
    /// or a backend that cannot read at all.
    pub fn read_region(&self, pos: Coords, width: u16, height: u16) -> Result<Vec<String>> {
        self.backend.read_region(pos, width, height)
    }

    /// Read a single row of `length` cells starting at a position.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`read_region`](Self::read_region).
    pub fn read_row(&self, pos: Coords, length: u16) -> Result<String> {
        let mut rows = self.read_region(pos, length, 1)?;
        Ok(rows.swap_remove(0))
    }

    /// Read the character at a position.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`read_region`](Self::read_region), plus
    /// [`Error::InvalidRegion`] when the cell holds no character of
    /// its own (a wide-character tail).
    pub fn read_char_at(&self, pos: Coords) -> Result<char> {
        self.read_row(pos, 1)?.chars().next().ok_or_else(|| {
            Error::InvalidRegion(format!("no character of its own at {pos}"))
        })
    }

    /// Restyle the character at a position without changing the text.
    ///
    /// Reads the cell back, then rewrites it in place wrapped in the
    /// paint state's sequence and an effect reset.
    ///
    /// # Errors
    ///
    /// Propagates read and write failures; on a backend that cannot
    /// read (a plain VT stream) this fails with [`Error::Unsupported`].
    pub fn graphic_override(&mut self, pos: Coords, paint: GraphicEffect) -> Result<()> {
        let ch = self.read_char_at(pos)?;
        log::trace!("graphic override of {ch:?} at {pos}");

        let mut run = escape::graphic_effect_sequence(paint);
        run.push(ch);
        run.push_str(escape::RESET_EFFECTS);
        self.backend.write_at(&run, pos)
    }

    /// Recolor one ground of the character at a position.
    ///
    /// `foreground` routes the color: `true` restyles the text color,
    /// `false` the background. Never both.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`graphic_override`](Self::graphic_override).
    pub fn color_override(&mut self, pos: Coords, color: Color, foreground: bool) -> Result<()> {
        let paint = if foreground {
            GraphicEffect::fg(color)
        } else {
            GraphicEffect::bg(color)
        };
        self.graphic_override(pos, paint)
    }

    // ─── Host Passthroughs ────────────────────────────────────────────────

    /// Select a console font. Success/failure, never an error.
    pub fn set_font(&mut self, font: &Font) -> bool {
        self.backend.set_font(font)
    }

    /// Lock the window size. Returns the controls actually disabled.
    pub fn lock_window_size(&mut self) -> WindowControls {
        self.backend.lock_window_size()
    }

    /// Current buffer size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.backend.size()
    }

    /// Borrow the backend.
    #[inline]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Borrow the backend mutably.
    #[inline]
    pub const fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Unwrap the console, returning its backend.
    #[must_use]
    pub fn into_inner(self) -> B {
        self.backend
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
