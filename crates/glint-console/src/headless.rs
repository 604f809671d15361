// SPDX-License-Identifier: MIT
//
// HeadlessConsole — an in-memory screen buffer with no terminal behind it.
//
// A row-major `Vec<char>` grid standing in for the host's console
// buffer. It implements every bridge operation locally, which makes it
// the backend of choice for tests and for rendering into a virtual
// screen: direct writes land in cells, region reads come straight back
// out, and styled stream output can be asserted against exactly.
//
// Escape sequences never become cells. The stream writer scans them
// off and records each one verbatim in a side log, so a test can check
// both what the screen shows and which styling commands were issued.
//
// Wide characters (CJK, some emoji) occupy two columns: the first cell
// holds the character, the second a continuation marker. Region reads
// skip continuation cells so a wide character reads back once.

use unicode_width::UnicodeWidthChar;

use crate::bridge::{ConsoleBuffer, Coords, Font, Size, WindowControls, validate_region};
use crate::error::{Error, Result};

/// Marker stored in the second column of a wide character.
const CONTINUATION: char = '\0';

/// An in-memory console backend with a fixed-size cell grid.
///
/// # Examples
///
/// ```
/// use glint_console::bridge::{ConsoleBuffer, Coords};
/// use glint_console::headless::HeadlessConsole;
///
/// let mut con = HeadlessConsole::new(20, 4);
/// con.write_at("hello", Coords::new(2, 1))?;
/// let rows = con.read_region(Coords::new(0, 1), 8, 1)?;
/// assert_eq!(rows, vec!["  hello "]);
/// # Ok::<(), glint_console::Error>(())
/// ```
pub struct HeadlessConsole {
    size: Size,
    /// Row-major cell grid; `CONTINUATION` marks wide-character tails.
    cells: Vec<char>,
    /// Virtual stream cursor advanced by raw writes.
    cursor: Coords,
    /// Escape sequences seen on the stream, verbatim, in order.
    escapes: Vec<String>,
    /// The last font request, if any.
    font: Option<Font>,
    /// Controls reported locked so far.
    locked: WindowControls,
}

impl HeadlessConsole {
    /// Create a blank grid of the given dimensions, filled with spaces.
    #[must_use]
    pub fn new(cols: u16, rows: u16) -> Self {
        let size = Size { cols, rows };
        Self {
            size,
            cells: vec![' '; size.area() as usize],
            cursor: Coords::new(0, 0),
            escapes: Vec::new(),
            font: None,
            locked: WindowControls::empty(),
        }
    }

    // ─── Inspection ───────────────────────────────────────────────────────

    /// The character stored at a position, `None` outside the grid.
    ///
    /// Continuation cells read back as `None`; the character lives in
    /// the cell to their left.
    #[must_use]
    pub fn char_at(&self, pos: Coords) -> Option<char> {
        let ch = *self.cells.get(self.index(pos)?)?;
        (ch != CONTINUATION).then_some(ch)
    }

    /// The virtual stream cursor position.
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Coords {
        self.cursor
    }

    /// Every escape sequence written to the stream so far, in order.
    #[must_use]
    pub fn escape_log(&self) -> &[String] {
        &self.escapes
    }

    /// The most recent font request, if any.
    #[must_use]
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// The window controls reported locked so far.
    #[inline]
    #[must_use]
    pub const fn locked_controls(&self) -> WindowControls {
        self.locked
    }

    // ─── Cell Placement ───────────────────────────────────────────────────

    fn index(&self, pos: Coords) -> Option<usize> {
        self.size
            .contains(pos)
            .then(|| usize::from(pos.y) * usize::from(self.size.cols) + usize::from(pos.x))
    }

    /// Store a character at a position, maintaining wide-pair integrity.
    ///
    /// Overwriting a wide character's head clears its tail; overwriting
    /// a tail clears the head. Out-of-grid positions are dropped.
    fn set_cell(&mut self, pos: Coords, ch: char) {
        let Some(i) = self.index(pos) else { return };

        // Break any wide pair this write lands inside.
        if self.cells[i] == CONTINUATION && pos.x > 0 {
            let head = self.index(Coords::new(pos.x - 1, pos.y)).unwrap_or(i);
            self.cells[head] = ' ';
        }
        if let Some(tail) = self.index(Coords::new(pos.x + 1, pos.y)) {
            if self.cells[tail] == CONTINUATION && self.cells[i] != CONTINUATION {
                self.cells[tail] = ' ';
            }
        }

        self.cells[i] = ch;
    }

    /// Place text starting at `from`, interpreting newlines and wrapping
    /// at the right edge. Text below the last row is discarded (the grid
    /// has no scrollback). Returns the final cursor.
    #[allow(clippy::cast_possible_truncation)] // char widths are 0..=2
    fn place(&mut self, text: &str, from: Coords) -> Coords {
        let mut pos = from;
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            // Escape sequences change rendering state, never cells.
            if ch == '\x1b' {
                self.escapes.push(scan_escape(&mut chars));
                continue;
            }
            match ch {
                '\n' => {
                    pos.x = 0;
                    pos.y = pos.y.saturating_add(1);
                    continue;
                }
                '\r' => {
                    pos.x = 0;
                    continue;
                }
                _ => {}
            }

            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                // Combining marks have no cell of their own.
                continue;
            }
            if pos.x + width > self.size.cols {
                pos.x = 0;
                pos.y = pos.y.saturating_add(1);
            }
            if pos.y >= self.size.rows {
                break;
            }

            self.set_cell(pos, ch);
            if width == 2 {
                self.set_cell(Coords::new(pos.x + 1, pos.y), CONTINUATION);
            }
            pos.x += width;
        }
        pos
    }
}

/// Consume one escape sequence from a character stream, ESC already
/// taken, and return it whole (introducer included).
///
/// CSI sequences (`ESC [`) run to their final byte in `@..=~`; any
/// other escape is ESC plus a single byte (covers DECSC/DECRC).
fn scan_escape(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut seq = String::from('\x1b');
    match chars.peek() {
        Some('[') => {
            for ch in chars.by_ref() {
                seq.push(ch);
                if ch != '[' && ('\x40'..='\x7e').contains(&ch) {
                    break;
                }
            }
        }
        Some(_) => {
            if let Some(ch) = chars.next() {
                seq.push(ch);
            }
        }
        None => {}
    }
    seq
}

impl ConsoleBuffer for HeadlessConsole {
    fn write_raw(&mut self, text: &str) -> Result<()> {
        self.cursor = self.place(text, self.cursor);
        Ok(())
    }

    fn write_raw_char(&mut self, ch: char) -> Result<()> {
        self.cursor = self.place(ch.encode_utf8(&mut [0u8; 4]), self.cursor);
        Ok(())
    }

    fn write_at(&mut self, text: &str, pos: Coords) -> Result<()> {
        if !self.size.contains(pos) {
            return Err(Error::InvalidRegion(format!(
                "write at {pos} outside the {}x{} buffer",
                self.size.cols, self.size.rows
            )));
        }
        // Direct buffer writes move a local cursor, not the stream's.
        self.place(text, pos);
        Ok(())
    }

    fn write_char_at(&mut self, ch: char, pos: Coords) -> Result<()> {
        self.write_at(ch.encode_utf8(&mut [0u8; 4]), pos)
    }

    fn read_region(&self, pos: Coords, width: u16, height: u16) -> Result<Vec<String>> {
        validate_region(pos, width, height, self.size)?;

        let mut rows = Vec::with_capacity(usize::from(height));
        for y in pos.y..pos.y + height {
            let mut row = String::with_capacity(usize::from(width));
            for x in pos.x..pos.x + width {
                // Wide-character tails read back as nothing; the head
                // cell already contributed the character.
                if let Some(ch) = self.char_at(Coords::new(x, y)) {
                    row.push(ch);
                }
            }
            rows.push(row);
        }
        Ok(rows)
    }

    fn set_font(&mut self, font: &Font) -> bool {
        self.font = Some(font.clone());
        true
    }

    fn lock_window_size(&mut self) -> WindowControls {
        self.locked = WindowControls::all();
        self.locked
    }

    fn size(&self) -> Size {
        self.size
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ── Stream Writes ───────────────────────────────────────────────────

    #[test]
    fn raw_write_places_chars_and_advances_the_cursor() {
        let mut con = HeadlessConsole::new(10, 3);
        con.write_raw("abc").unwrap();
        assert_eq!(con.char_at(Coords::new(0, 0)), Some('a'));
        assert_eq!(con.char_at(Coords::new(2, 0)), Some('c'));
        assert_eq!(con.cursor(), Coords::new(3, 0));
    }

    #[test]
    fn raw_write_char_matches_raw_write() {
        let mut con = HeadlessConsole::new(10, 3);
        con.write_raw_char('x').unwrap();
        assert_eq!(con.char_at(Coords::new(0, 0)), Some('x'));
        assert_eq!(con.cursor(), Coords::new(1, 0));
    }

    #[test]
    fn newline_moves_the_cursor_down_and_home() {
        let mut con = HeadlessConsole::new(10, 3);
        con.write_raw("ab\ncd").unwrap();
        assert_eq!(con.char_at(Coords::new(0, 1)), Some('c'));
        assert_eq!(con.cursor(), Coords::new(2, 1));
    }

    #[test]
    fn carriage_return_homes_without_moving_down() {
        let mut con = HeadlessConsole::new(10, 3);
        con.write_raw("ab\rZ").unwrap();
        assert_eq!(con.char_at(Coords::new(0, 0)), Some('Z'));
        assert_eq!(con.char_at(Coords::new(1, 0)), Some('b'));
    }

    #[test]
    fn writes_wrap_at_the_right_edge() {
        let mut con = HeadlessConsole::new(4, 2);
        con.write_raw("abcdef").unwrap();
        assert_eq!(con.read_region(Coords::new(0, 0), 4, 2).unwrap(), vec![
            "abcd", "ef  "
        ]);
    }

    #[test]
    fn writes_below_the_last_row_are_discarded() {
        let mut con = HeadlessConsole::new(4, 1);
        con.write_raw("abcd\nxyz").unwrap();
        assert_eq!(con.read_region(Coords::new(0, 0), 4, 1).unwrap(), vec!["abcd"]);
    }

    // ── Escape Filtering ────────────────────────────────────────────────

    #[test]
    fn escape_sequences_are_logged_not_rendered() {
        let mut con = HeadlessConsole::new(10, 2);
        con.write_raw("\x1b[38;2;0;255;0mOK\x1b[0;0;0m").unwrap();
        assert_eq!(con.char_at(Coords::new(0, 0)), Some('O'));
        assert_eq!(con.char_at(Coords::new(1, 0)), Some('K'));
        assert_eq!(con.escape_log(), ["\x1b[38;2;0;255;0m", "\x1b[0;0;0m"]);
    }

    #[test]
    fn non_csi_escapes_are_logged_as_two_bytes() {
        let mut con = HeadlessConsole::new(10, 2);
        con.write_raw("\x1b7a\x1b8").unwrap();
        assert_eq!(con.escape_log(), ["\x1b7", "\x1b8"]);
        assert_eq!(con.char_at(Coords::new(0, 0)), Some('a'));
    }

    // ── Wide Characters ─────────────────────────────────────────────────

    #[test]
    fn wide_chars_occupy_two_cells_and_read_back_once() {
        let mut con = HeadlessConsole::new(6, 1);
        con.write_raw("日a").unwrap();
        assert_eq!(con.char_at(Coords::new(0, 0)), Some('日'));
        assert_eq!(con.char_at(Coords::new(1, 0)), None); // continuation
        assert_eq!(con.char_at(Coords::new(2, 0)), Some('a'));
        assert_eq!(con.cursor(), Coords::new(3, 0));

        // 3 cells wide, the wide char contributes one character.
        assert_eq!(con.read_region(Coords::new(0, 0), 3, 1).unwrap(), vec!["日a"]);
    }

    #[test]
    fn wide_char_wraps_rather_than_splitting() {
        let mut con = HeadlessConsole::new(3, 2);
        con.write_raw("ab日").unwrap();
        assert_eq!(con.char_at(Coords::new(0, 1)), Some('日'));
        assert_eq!(con.char_at(Coords::new(2, 0)), Some(' '));
    }

    #[test]
    fn overwriting_a_wide_head_clears_its_tail() {
        let mut con = HeadlessConsole::new(6, 1);
        con.write_at("日", Coords::new(0, 0)).unwrap();
        con.write_at("x", Coords::new(0, 0)).unwrap();
        assert_eq!(con.char_at(Coords::new(0, 0)), Some('x'));
        assert_eq!(con.char_at(Coords::new(1, 0)), Some(' '));
    }

    #[test]
    fn overwriting_a_continuation_clears_the_head() {
        let mut con = HeadlessConsole::new(6, 1);
        con.write_at("日", Coords::new(0, 0)).unwrap();
        con.write_at("x", Coords::new(1, 0)).unwrap();
        assert_eq!(con.char_at(Coords::new(0, 0)), Some(' '));
        assert_eq!(con.char_at(Coords::new(1, 0)), Some('x'));
    }

    // ── Direct Buffer Writes ────────────────────────────────────────────

    #[test]
    fn write_at_round_trips_through_read_region() {
        let mut con = HeadlessConsole::new(20, 5);
        con.write_at("hello", Coords::new(3, 2)).unwrap();
        assert_eq!(
            con.read_region(Coords::new(3, 2), 5, 1).unwrap(),
            vec!["hello"]
        );
    }

    #[test]
    fn write_at_does_not_move_the_stream_cursor() {
        let mut con = HeadlessConsole::new(20, 5);
        con.write_raw("ab").unwrap();
        con.write_at("x", Coords::new(5, 3)).unwrap();
        assert_eq!(con.cursor(), Coords::new(2, 0));
    }

    #[test]
    fn write_at_outside_the_buffer_is_invalid() {
        let mut con = HeadlessConsole::new(10, 2);
        let err = con.write_at("x", Coords::new(10, 0)).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
        let err = con.write_char_at('x', Coords::new(0, 2)).unwrap_err();
        assert!(matches!(err, Error::InvalidRegion(_)));
    }

    #[test]
    fn write_at_filters_escapes_like_the_stream() {
        let mut con = HeadlessConsole::new(10, 2);
        con.write_at("\x1b[1mB\x1b[0;0;0m", Coords::new(4, 1)).unwrap();
        assert_eq!(con.char_at(Coords::new(4, 1)), Some('B'));
        assert_eq!(con.escape_log(), ["\x1b[1m", "\x1b[0;0;0m"]);
    }

    // ── Region Reads ────────────────────────────────────────────────────

    #[test]
    fn blank_regions_read_as_spaces() {
        let con = HeadlessConsole::new(5, 2);
        assert_eq!(
            con.read_region(Coords::new(0, 0), 5, 2).unwrap(),
            vec!["     ", "     "]
        );
    }

    #[test]
    fn zero_sized_region_is_rejected() {
        let con = HeadlessConsole::new(5, 2);
        assert!(matches!(
            con.read_region(Coords::new(0, 0), 0, 1),
            Err(Error::InvalidRegion(_))
        ));
    }

    #[test]
    fn out_of_bounds_region_is_rejected() {
        let con = HeadlessConsole::new(5, 2);
        assert!(matches!(
            con.read_region(Coords::new(4, 0), 2, 1),
            Err(Error::InvalidRegion(_))
        ));
    }

    #[test]
    fn oversized_region_is_rejected() {
        let con = HeadlessConsole::new(200, 100);
        assert!(matches!(
            con.read_region(Coords::new(0, 0), 200, 100),
            Err(Error::RegionTooLarge { cells: 20_000 })
        ));
    }

    // ── Font & Window ───────────────────────────────────────────────────

    #[test]
    fn set_font_records_the_request() {
        let mut con = HeadlessConsole::new(5, 2);
        assert!(con.set_font(&Font::true_type("Consolas", 16)));
        assert_eq!(con.font(), Some(&Font::true_type("Consolas", 16)));
    }

    #[test]
    fn lock_window_size_reports_all_controls() {
        let mut con = HeadlessConsole::new(5, 2);
        assert_eq!(con.lock_window_size(), WindowControls::all());
        assert_eq!(con.locked_controls(), WindowControls::all());
    }

    #[test]
    fn size_reports_the_grid_dimensions() {
        let con = HeadlessConsole::new(120, 40);
        assert_eq!(con.size(), Size { cols: 120, rows: 40 });
    }
}
