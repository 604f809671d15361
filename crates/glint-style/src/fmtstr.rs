// SPDX-License-Identifier: MIT
//
// FormatString — text with independent per-character styling.
//
// A FormatString pairs a text payload with one `Option<GraphicEffect>` per
// character. The two run in lockstep: the style array length always equals
// the character count (chars, not bytes), construction pads short style
// sources with `None` and truncates long ones, and concatenation joins the
// style arrays positionally with no merging.
//
// The type is immutable. Every composing operation returns a new value,
// so a FormatString can be iterated, concatenated, and written any number
// of times without changing.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::Add;
use std::str::Chars;

use crate::color::Color;
use crate::effect::{GraphicEffect, GraphicsMode};
use crate::error::{Error, Result};

// ─── FormatString ────────────────────────────────────────────────────────────

/// An immutable string whose characters each carry an optional paint state.
///
/// # Examples
///
/// ```
/// use glint_style::color::Color;
/// use glint_style::effect::GraphicEffect;
/// use glint_style::fmtstr::FormatString;
///
/// let ok = FormatString::with_color("OK", Color::new(0, 255, 0));
/// let rest = FormatString::plain(" ready");
/// let line = ok + rest;
///
/// assert_eq!(line.text(), "OK ready");
/// assert_eq!(line.len(), 8);
/// let (ch, style) = line.get(0)?;
/// assert_eq!(ch, 'O');
/// assert_eq!(style, Some(GraphicEffect::fg(Color::new(0, 255, 0))));
/// assert_eq!(line.get(2)?.1, None);
/// # Ok::<(), glint_style::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatString {
    text: String,
    styles: Vec<Option<GraphicEffect>>,
}

impl FormatString {
    // ─── Uniform Constructors ─────────────────────────────────────────────

    /// Unstyled text: every position carries no instruction.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let styles = vec![None; text.chars().count()];
        Self { text, styles }
    }

    /// Apply one full paint state to every character.
    #[must_use]
    pub fn styled(text: impl Into<String>, effect: GraphicEffect) -> Self {
        let text = text.into();
        let styles = vec![Some(effect); text.chars().count()];
        Self { text, styles }
    }

    /// Apply one foreground color to every character.
    #[must_use]
    pub fn with_color(text: impl Into<String>, color: Color) -> Self {
        Self::styled(text, GraphicEffect::fg(color))
    }

    /// Apply one text effect to every character.
    #[must_use]
    pub fn with_effect(text: impl Into<String>, mode: GraphicsMode) -> Self {
        Self::styled(text, GraphicEffect::mode(mode))
    }

    // ─── Per-Character Constructors ───────────────────────────────────────
    //
    // All of these align position-wise: a source shorter than the text
    // leaves the tail unstyled, a longer one is truncated to the text
    // length. An absent entry yields an unstyled position, never a
    // default effect.

    /// Apply paint states position-wise.
    #[must_use]
    pub fn from_effects(text: impl Into<String>, effects: &[Option<GraphicEffect>]) -> Self {
        let text = text.into();
        let styles = aligned(text.chars().count(), effects, |e| e);
        Self { text, styles }
    }

    /// Apply colors position-wise, routed into one ground.
    ///
    /// `foreground` selects the slot every color lands in: `true` styles
    /// text color, `false` styles the background. A single color never
    /// fills both slots.
    #[must_use]
    pub fn from_colors(
        text: impl Into<String>,
        colors: &[Option<Color>],
        foreground: bool,
    ) -> Self {
        let text = text.into();
        let styles = aligned(text.chars().count(), colors, |c| {
            c.map(|c| {
                if foreground {
                    GraphicEffect::fg(c)
                } else {
                    GraphicEffect::bg(c)
                }
            })
        });
        Self { text, styles }
    }

    /// Apply text effects position-wise.
    #[must_use]
    pub fn from_modes(text: impl Into<String>, modes: &[Option<GraphicsMode>]) -> Self {
        let text = text.into();
        let styles = aligned(text.chars().count(), modes, |m| m.map(GraphicEffect::mode));
        Self { text, styles }
    }

    /// Assemble from raw parts, requiring exact alignment.
    ///
    /// Unlike the other constructors this neither pads nor truncates.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] when `styles.len()` differs from
    /// the character count of `text`.
    pub fn from_parts(
        text: impl Into<String>,
        styles: Vec<Option<GraphicEffect>>,
    ) -> Result<Self> {
        let text = text.into();
        let chars = text.chars().count();
        if styles.len() != chars {
            return Err(Error::LengthMismatch {
                text: chars,
                styles: styles.len(),
            });
        }
        Ok(Self { text, styles })
    }

    // ─── Access ───────────────────────────────────────────────────────────

    /// The text payload.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The style array, one entry per character.
    #[inline]
    #[must_use]
    pub fn styles(&self) -> &[Option<GraphicEffect>] {
        &self.styles
    }

    /// Length in characters (not bytes).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the string holds no characters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// The (character, optional style) pair at a character index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] when `index` is past the end.
    pub fn get(&self, index: usize) -> Result<(char, Option<GraphicEffect>)> {
        match self.text.chars().nth(index) {
            Some(ch) => Ok((ch, self.styles[index])),
            None => Err(Error::OutOfRange(format!(
                "index {index} past the end of a {}-char string",
                self.len()
            ))),
        }
    }

    /// Iterate over (character, optional style) pairs.
    ///
    /// The iterator borrows; it can be restarted by calling `iter` again
    /// and never mutates the source.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chars: self.text.chars(),
            styles: self.styles.iter(),
        }
    }
}

impl fmt::Display for FormatString {
    /// Renders the plain text payload, without styling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Align a style source to `len` entries: truncate the excess, pad the
/// tail with `None`.
fn aligned<T: Copy>(
    len: usize,
    source: &[T],
    style_of: impl Fn(T) -> Option<GraphicEffect>,
) -> Vec<Option<GraphicEffect>> {
    let mut styles: Vec<Option<GraphicEffect>> =
        source.iter().take(len).copied().map(style_of).collect();
    styles.resize(len, None);
    styles
}

// ─── Concatenation ───────────────────────────────────────────────────────────

impl Add for FormatString {
    type Output = Self;

    /// Concatenate two formatted strings. The style array of the result
    /// is the direct concatenation of the operands' arrays.
    fn add(mut self, rhs: Self) -> Self {
        self.text.push_str(&rhs.text);
        self.styles.extend(rhs.styles);
        self
    }
}

impl Add<&str> for FormatString {
    type Output = Self;

    /// Append plain text; the appended positions are unstyled.
    fn add(mut self, rhs: &str) -> Self {
        self.text.push_str(rhs);
        let total = self.styles.len() + rhs.chars().count();
        self.styles.resize(total, None);
        self
    }
}

// ─── Iteration ───────────────────────────────────────────────────────────────

/// Borrowing iterator over a [`FormatString`]'s (character, style) pairs.
pub struct Iter<'a> {
    chars: Chars<'a>,
    styles: std::slice::Iter<'a, Option<GraphicEffect>>,
}

impl Iterator for Iter<'_> {
    type Item = (char, Option<GraphicEffect>);

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        let style = self.styles.next().copied().flatten();
        Some((ch, style))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.styles.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a FormatString {
    type Item = (char, Option<GraphicEffect>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
