//! Frame presentation on the terminal

use crossterm::{
    cursor, queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use spincube_core::CharGrid;
use std::io::{self, Write};

/// One-time terminal setup: hide the cursor and start from a clean screen.
pub fn prepare<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, cursor::Hide, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    out.flush()
}

/// Write one frame to `out`.
///
/// Emits the grid rows top to bottom, each terminated by a newline, followed
/// by the clear-screen and cursor-home sequences that set up the next
/// frame's overwrite.
pub fn present<W: Write>(grid: &CharGrid, out: &mut W) -> io::Result<()> {
    for line in grid.lines() {
        queue!(out, Print(line), Print('\n'))?;
    }
    queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_emits_grid_rows() {
        let grid = CharGrid::new(6, 4);
        let mut out = Vec::new();
        present(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("      \n"));
        assert_eq!(text.matches('\n').count(), 4);
    }

    #[test]
    fn test_present_appends_control_sequences() {
        let grid = CharGrid::new(2, 1);
        let mut out = Vec::new();
        present(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Everything after the last row is terminal control, not glyphs.
        let tail = text.rsplit('\n').next().unwrap();
        assert!(!tail.is_empty());
        assert!(tail.starts_with('\u{1b}'));
    }
}
