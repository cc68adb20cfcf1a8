//! Formatting utilities for terminal output

use crate::core::{Cell, Grid, Pos};
use crate::puzzles::crossword::Crossword;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters spaced out one row per line, blanks as dots
#[must_use]
pub fn format_letter_grid(grid: &Grid<Cell>) -> String {
    grid.iter_rows()
        .map(|row| {
            row.iter()
                .map(|cell| cell.letter().map_or('·', |c| c.to_ascii_uppercase()).to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// The empty crossword: answer cells as boxes, numbered where an entry starts
#[must_use]
pub fn format_crossword_blank(crossword: &Crossword) -> String {
    let grid = &crossword.grid;
    let number_at = |pos: Pos| {
        crossword
            .entries
            .iter()
            .find(|e| e.placement.origin() == pos)
            .map(|e| e.number)
    };

    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let pos = Pos::new(row, col);
                    match (grid.get(pos), number_at(pos)) {
                        (Some(Cell::Letter(_)), Some(n)) => format!("{n:>2}"),
                        (Some(Cell::Letter(_)), None) => " □".to_string(),
                        _ => "  ".to_string(),
                    }
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
