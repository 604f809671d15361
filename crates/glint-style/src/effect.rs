// SPDX-License-Identifier: MIT
//
// Text effects and the combined paint state.
//
// `GraphicsMode` is the closed set of SGR rendering effects with their wire
// codes. `GraphicEffect` is the optional triple (foreground, background,
// effect) callers attach to characters. An absent field means "no
// instruction for that channel", which the encoder turns into no bytes at
// all; there is no default color that silently overwrites terminal state.

use crate::color::Color;

// ─── Graphics Mode ───────────────────────────────────────────────────────────

/// A text rendering effect, identified by its SGR parameter code.
///
/// The discriminants are the wire codes. Code 6 (rapid blink) is absent
/// on purpose: no mainstream host renders it, and the classic console
/// table this palette targets never listed it.
///
/// Every variant encodes uniformly. Hosts that ignore an effect simply
/// drop the sequence; [`GraphicsMode::widely_supported`] reports which
/// variants that affects so callers can pick a fallback presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum GraphicsMode {
    /// SGR 0, clears every rendering effect.
    #[default]
    Reset = 0,
    /// SGR 1, increased intensity.
    Bold = 1,
    /// SGR 2, decreased intensity.
    Faint = 2,
    /// SGR 3, italic or oblique.
    Italic = 3,
    /// SGR 4, straight underline.
    Underline = 4,
    /// SGR 5, slow blink.
    Blink = 5,
    /// SGR 7, swap foreground and background.
    Inverse = 7,
    /// SGR 8, invisible text.
    Hidden = 8,
    /// SGR 9, crossed-out text.
    Strikethrough = 9,
}

impl GraphicsMode {
    /// Every effect, in wire-code order.
    pub const ALL: [Self; 9] = [
        Self::Reset,
        Self::Bold,
        Self::Faint,
        Self::Italic,
        Self::Underline,
        Self::Blink,
        Self::Inverse,
        Self::Hidden,
        Self::Strikethrough,
    ];

    /// The numeric SGR parameter for this effect.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the major terminal hosts all render this effect.
    ///
    /// The legacy Windows console host ignores `Faint`, `Italic`,
    /// `Blink`, `Hidden`, and `Strikethrough`. This is capability
    /// metadata only: encoding is identical for every variant.
    #[must_use]
    pub const fn widely_supported(self) -> bool {
        !matches!(
            self,
            Self::Faint | Self::Italic | Self::Blink | Self::Hidden | Self::Strikethrough
        )
    }
}

// ─── Graphic Effect ──────────────────────────────────────────────────────────

/// A complete paint state: optional foreground, background, and effect.
///
/// All eight presence combinations are valid. Two effects are equal iff
/// all three fields are equal, including matching absence.
///
/// # Examples
///
/// ```
/// use glint_style::color::Color;
/// use glint_style::effect::{GraphicEffect, GraphicsMode};
///
/// let warning = GraphicEffect::fg(Color::new(249, 241, 165))
///     .with_effect(GraphicsMode::Bold);
/// assert_eq!(warning.background, None);
/// assert!(!warning.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphicEffect {
    /// Foreground (text) color; absent leaves the terminal's unchanged.
    pub foreground: Option<Color>,
    /// Background color; absent leaves the terminal's unchanged.
    pub background: Option<Color>,
    /// Text effect; absent leaves the terminal's unchanged.
    pub effect: Option<GraphicsMode>,
}

impl GraphicEffect {
    /// The effect carrying no instructions at all. Encodes to nothing.
    pub const EMPTY: Self = Self {
        foreground: None,
        background: None,
        effect: None,
    };

    /// Create a paint state with all three fields spelled out.
    #[inline]
    #[must_use]
    pub const fn new(
        foreground: Option<Color>,
        background: Option<Color>,
        effect: Option<GraphicsMode>,
    ) -> Self {
        Self {
            foreground,
            background,
            effect,
        }
    }

    /// A foreground-only paint state.
    #[inline]
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            foreground: Some(color),
            background: None,
            effect: None,
        }
    }

    /// A background-only paint state.
    #[inline]
    #[must_use]
    pub const fn bg(color: Color) -> Self {
        Self {
            foreground: None,
            background: Some(color),
            effect: None,
        }
    }

    /// An effect-only paint state.
    #[inline]
    #[must_use]
    pub const fn mode(effect: GraphicsMode) -> Self {
        Self {
            foreground: None,
            background: None,
            effect: Some(effect),
        }
    }

    // ─── Builders ─────────────────────────────────────────────────────────

    /// Copy of `self` with the foreground replaced.
    #[inline]
    #[must_use]
    pub const fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Copy of `self` with the background replaced.
    #[inline]
    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Copy of `self` with the effect replaced.
    #[inline]
    #[must_use]
    pub const fn with_effect(mut self, effect: GraphicsMode) -> Self {
        self.effect = Some(effect);
        self
    }

    // ─── Queries ──────────────────────────────────────────────────────────

    /// Whether no field carries an instruction.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.effect.is_none()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Graphics Mode ───────────────────────────────────────────────────

    #[test]
    fn codes_match_the_sgr_table() {
        assert_eq!(GraphicsMode::Reset.code(), 0);
        assert_eq!(GraphicsMode::Bold.code(), 1);
        assert_eq!(GraphicsMode::Faint.code(), 2);
        assert_eq!(GraphicsMode::Italic.code(), 3);
        assert_eq!(GraphicsMode::Underline.code(), 4);
        assert_eq!(GraphicsMode::Blink.code(), 5);
        assert_eq!(GraphicsMode::Inverse.code(), 7);
        assert_eq!(GraphicsMode::Hidden.code(), 8);
        assert_eq!(GraphicsMode::Strikethrough.code(), 9);
    }

    #[test]
    fn code_six_is_unassigned() {
        assert!(GraphicsMode::ALL.iter().all(|m| m.code() != 6));
    }

    #[test]
    fn all_lists_every_variant_once() {
        let mut codes: Vec<u8> = GraphicsMode::ALL.iter().map(|m| m.code()).collect();
        codes.dedup();
        assert_eq!(codes, [0, 1, 2, 3, 4, 5, 7, 8, 9]);
    }

    #[test]
    fn default_mode_is_reset() {
        assert_eq!(GraphicsMode::default(), GraphicsMode::Reset);
    }

    #[test]
    fn support_flags_match_the_console_host_table() {
        for (mode, supported) in [
            (GraphicsMode::Reset, true),
            (GraphicsMode::Bold, true),
            (GraphicsMode::Faint, false),
            (GraphicsMode::Italic, false),
            (GraphicsMode::Underline, true),
            (GraphicsMode::Blink, false),
            (GraphicsMode::Inverse, true),
            (GraphicsMode::Hidden, false),
            (GraphicsMode::Strikethrough, false),
        ] {
            assert_eq!(mode.widely_supported(), supported, "{mode:?}");
        }
    }

    // ── Graphic Effect ──────────────────────────────────────────────────

    #[test]
    fn empty_has_no_instructions() {
        assert!(GraphicEffect::EMPTY.is_empty());
        assert_eq!(GraphicEffect::EMPTY, GraphicEffect::default());
    }

    #[test]
    fn single_field_constructors_leave_the_rest_absent() {
        let c = Color::new(1, 2, 3);
        assert_eq!(GraphicEffect::fg(c), GraphicEffect::new(Some(c), None, None));
        assert_eq!(GraphicEffect::bg(c), GraphicEffect::new(None, Some(c), None));
        assert_eq!(
            GraphicEffect::mode(GraphicsMode::Bold),
            GraphicEffect::new(None, None, Some(GraphicsMode::Bold))
        );
    }

    #[test]
    fn builders_replace_one_field() {
        let base = GraphicEffect::fg(Color::new(10, 20, 30));
        let both = base.with_background(Color::new(40, 50, 60));
        assert_eq!(both.foreground, Some(Color::new(10, 20, 30)));
        assert_eq!(both.background, Some(Color::new(40, 50, 60)));
        assert_eq!(both.effect, None);

        let styled = both.with_effect(GraphicsMode::Underline);
        assert_eq!(styled.effect, Some(GraphicsMode::Underline));
    }

    #[test]
    fn equality_covers_all_three_fields() {
        let c = Color::new(9, 9, 9);
        let a = GraphicEffect::new(Some(c), None, Some(GraphicsMode::Bold));
        let b = GraphicEffect::new(Some(c), None, Some(GraphicsMode::Bold));
        assert_eq!(a, b);

        assert_ne!(a, a.with_background(c));
        assert_ne!(a, GraphicEffect::new(Some(c), None, Some(GraphicsMode::Faint)));
        assert_ne!(a, GraphicEffect::new(None, None, Some(GraphicsMode::Bold)));
    }

    #[test]
    fn absence_is_distinct_from_any_value() {
        let zero = Color::new(0, 0, 0);
        assert_ne!(GraphicEffect::EMPTY, GraphicEffect::fg(zero));
        assert_ne!(GraphicEffect::EMPTY, GraphicEffect::mode(GraphicsMode::Reset));
    }
}
