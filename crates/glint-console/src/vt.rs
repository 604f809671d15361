// SPDX-License-Identifier: MIT
//
// VtConsole — the bridge implementation for a real ANSI terminal.
//
// Safety: This module necessarily uses `unsafe` for ioctl (TIOCGWINSZ)
// and isatty. These are the standard POSIX interfaces for terminal
// size queries — there is no safe alternative. Each unsafe block is
// minimal.
#![allow(unsafe_code)]
//
// A VT stream is write-mostly: styled output and cursor-addressed
// writes map cleanly onto escape sequences, but the stream offers no
// way to read the screen buffer back, change the host font, or remove
// window controls. Those operations return their failure shape
// (Unsupported / false / empty flags) rather than pretending, and log
// at debug so a misrouted call is visible without breaking anything.

use std::io::{self, Write};

use crate::bridge::{ConsoleBuffer, Coords, Font, Size, WindowControls};
use crate::error::{Error, Result};

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn probe_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
#[must_use]
pub fn probe_size() -> Option<Size> {
    None
}

/// Check whether stdout is connected to a terminal (TTY).
#[cfg(unix)]
#[must_use]
pub fn is_tty() -> bool {
    unsafe { libc::isatty(libc::STDOUT_FILENO) != 0 }
}

#[cfg(not(unix))]
#[must_use]
pub fn is_tty() -> bool {
    false
}

// ─── VtConsole ──────────────────────────────────────────────────────────────

/// Console backend driving a real ANSI terminal through stdout.
///
/// Raw writes go to the locked stdout handle and flush per call, so a
/// styled run reaches the terminal as one uninterrupted burst.
/// Positioned writes save the cursor (DECSC), move with CUP, write,
/// and restore (DECRC), leaving the stream cursor where it was.
pub struct VtConsole {
    /// Cached terminal size; refresh with [`refresh_size`](Self::refresh_size).
    size: Size,
}

impl VtConsole {
    /// Create a backend, probing the terminal size.
    ///
    /// Falls back to 80×24 when the size cannot be determined (piped
    /// output, tests).
    #[must_use]
    pub fn new() -> Self {
        let size = probe_size().unwrap_or(Size { cols: 80, rows: 24 });
        log::debug!("vt console at {}x{}", size.cols, size.rows);
        Self { size }
    }

    /// Re-query the terminal size from the OS.
    ///
    /// Call after a resize signal to pick up the new dimensions.
    /// Returns the updated size and caches it.
    pub fn refresh_size(&mut self) -> Size {
        if let Some(s) = probe_size() {
            self.size = s;
        }
        self.size
    }

    fn emit(text: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl Default for VtConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBuffer for VtConsole {
    fn write_raw(&mut self, text: &str) -> Result<()> {
        Self::emit(text)
    }

    fn write_raw_char(&mut self, ch: char) -> Result<()> {
        Self::emit(ch.encode_utf8(&mut [0u8; 4]))
    }

    fn write_at(&mut self, text: &str, pos: Coords) -> Result<()> {
        if !self.size.contains(pos) {
            return Err(Error::InvalidRegion(format!(
                "write at {pos} outside the {}x{} terminal",
                self.size.cols, self.size.rows
            )));
        }
        // DECSC, CUP (1-based), payload, DECRC: the stream cursor ends
        // up exactly where it started.
        let row = pos.y + 1;
        let col = pos.x + 1;
        Self::emit(&format!("\x1b7\x1b[{row};{col}H{text}\x1b8"))
    }

    fn write_char_at(&mut self, ch: char, pos: Coords) -> Result<()> {
        self.write_at(ch.encode_utf8(&mut [0u8; 4]), pos)
    }

    fn read_region(&self, pos: Coords, width: u16, height: u16) -> Result<Vec<String>> {
        log::debug!("read_region {width}x{height} at {pos} on a vt stream");
        Err(Error::Unsupported(
            "a VT stream cannot read the screen buffer back",
        ))
    }

    fn set_font(&mut self, font: &Font) -> bool {
        log::debug!("set_font {font:?} ignored: a VT stream cannot change the host font");
        false
    }

    fn lock_window_size(&mut self) -> WindowControls {
        log::debug!("lock_window_size ignored: a VT stream exposes no window controls");
        WindowControls::empty()
    }

    fn size(&self) -> Size {
        self.size
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
