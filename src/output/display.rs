//! Display functions for command results

use super::formatters::{create_progress_bar, format_crossword_blank, format_letter_grid};
use crate::commands::{AnalysisResult, LadderResult, StressResult, WordListing};
use crate::core::{Direction, Pos};
use crate::puzzles::bingo::{BINGO_SIZE, BingoCard};
use crate::puzzles::crossword::Crossword;
use crate::puzzles::maze::Maze;
use crate::puzzles::misspelling::{SpellingChoice, Stage};
use crate::puzzles::word_search::WordSearch;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print a word search grid and its word list
pub fn print_word_search(puzzle: &WordSearch, show_answers: bool) {
    banner("WORD SEARCH");

    if show_answers {
        for (row, cells) in puzzle.grid.iter_rows().enumerate() {
            let line: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let letter = cell.letter().unwrap_or(' ').to_ascii_uppercase().to_string();
                    let pos = Pos::new(row, col);
                    if puzzle.placed.iter().any(|p| p.cells().any(|c| c == pos)) {
                        letter.bright_green().bold().to_string()
                    } else {
                        letter.bright_black().to_string()
                    }
                })
                .collect();
            println!("  {}", line.join(" "));
        }
    } else {
        for line in format_letter_grid(&puzzle.grid).lines() {
            println!("  {line}");
        }
    }

    println!("\n🔎 {}", "Find these words:".bright_cyan().bold());
    for placed in &puzzle.placed {
        println!("   • {}", placed.word.to_uppercase());
    }

    if !puzzle.dropped.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Did not fit:".yellow(),
            puzzle.dropped.join(", ").bright_black()
        );
    }
}

/// Print the empty crossword with numbered clues
pub fn print_crossword(puzzle: &Crossword, show_answers: bool) {
    banner("CROSSWORD");

    let board = if show_answers {
        format_letter_grid(&puzzle.grid)
    } else {
        format_crossword_blank(puzzle)
    };
    for line in board.lines() {
        println!("  {line}");
    }

    for direction in Direction::ALL {
        println!(
            "\n✏️  {}",
            direction.label().to_uppercase().bright_cyan().bold()
        );
        for entry in puzzle.clues(direction) {
            print!("   {:>2}. {}", entry.number, entry.clue);
            if show_answers {
                print!(" {}", format!("({})", entry.placement.word.to_uppercase()).green());
            }
            println!();
        }
    }

    if !puzzle.unplaced.is_empty() {
        println!(
            "\n{} {}",
            "⚠ Could not place:".yellow(),
            puzzle.unplaced.join(", ").bright_black()
        );
    }
}

/// Print a maze as a word table, path words highlighted
pub fn print_maze(maze: &Maze) {
    banner("SENTENCE MAZE");
    println!("\nSentence: {}", maze.sentence.join(" ").bright_yellow().bold());

    let width = maze
        .grid
        .iter()
        .filter_map(|(_, cell)| cell.word.as_ref().map(String::len))
        .max()
        .unwrap_or(1);

    println!();
    for row in maze.grid.iter_rows() {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let word = format!("{:<width$}", cell.word.as_deref().unwrap_or(""));
                if cell.is_start {
                    word.bright_green().bold().to_string()
                } else if cell.is_end {
                    word.bright_red().bold().to_string()
                } else if cell.is_path {
                    word.bright_white().to_string()
                } else {
                    word.bright_black().to_string()
                }
            })
            .collect();
        println!("  {}", line.join("  "));
    }
}

/// Print a ladder solution
pub fn print_ladder_result(result: &LadderResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let width = result.target.len();
    for (i, step) in result.steps.iter().enumerate() {
        let bar = create_progress_bar((width - step.distance) as f64, width as f64, width * 2);
        println!(
            "  {:>2}. {}  [{}] {} to go",
            i,
            step.word.to_uppercase().bright_white().bold(),
            bar.green(),
            step.distance
        );
    }

    println!();
    let rungs = result.steps.len().saturating_sub(1);
    if result.success {
        println!("{}", format!("✅ Climbed in {rungs} steps!").green().bold());
    } else {
        println!("{}", "❌ No ladder found".red().bold());
    }
}

/// Print the result of a stress run
pub fn print_stress_result(result: &StressResult) {
    banner("MISSPELLING STRESS CHECK");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Misspellings:     {}", result.total);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.per_second);

    let collisions = result.collisions.len();
    let summary = format!("{collisions}");
    println!(
        "   Collisions:       {}",
        if collisions == 0 {
            summary.green().bold()
        } else {
            summary.red().bold()
        }
    );

    println!("\n📈 {}", "Stages:".bright_cyan().bold());
    let mut stages: Vec<(&Stage, &usize)> = result.stage_distribution.iter().collect();
    stages.sort_by(|a, b| b.1.cmp(a.1));
    for (stage, &count) in stages {
        let pct = if result.total == 0 {
            0.0
        } else {
            (count as f64 / result.total as f64) * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {:<13} {} {count:6} ({pct:5.1}%)", stage.to_string(), bar.green());
    }

    if !result.samples.is_empty() {
        println!("\n🔤 {}", "Samples:".bright_cyan().bold());
        for sample in &result.samples {
            println!(
                "   {} → {} ({})",
                sample.correct.bright_white(),
                sample.incorrect.bright_yellow(),
                sample.stage.to_string().bright_black()
            );
        }
    }

    for collision in &result.collisions {
        println!(
            "   {} {} → {}",
            "✗".red(),
            collision.correct,
            collision.incorrect.red()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    banner(&format!("WORD: {}", result.word.to_uppercase()));

    println!(
        "\n👏 {} {}",
        "Syllables:".bright_cyan().bold(),
        result.syllables.join(" · ").bright_yellow().bold()
    );
    println!("   {} syllable(s)", result.syllables.len());

    if !result.known_word {
        println!("   {}", "(not in the word list)".bright_black());
    }

    println!("\n🔤 {}", "Phonics patterns:".bright_cyan().bold());
    if result.phonics.is_empty() {
        println!("   {}", "none found".bright_black());
    }
    for rule in &result.phonics {
        println!("   • {rule}");
    }

    println!("\n🗣️  {}", "Reading tips:".bright_cyan().bold());
    if result.pronunciation.is_empty() {
        println!("   {}", "Sound it out letter by letter".bright_black());
    }
    for tip in &result.pronunciation {
        println!("   • {tip}");
    }

    if let Some(entry) = &result.definition {
        println!("\n📖 {}", "Meaning:".bright_cyan().bold());
        if let Some(phonetic) = &entry.phonetic {
            println!("   {}", phonetic.bright_black());
        }
        for meaning in &entry.meanings {
            println!("   {}", meaning.part_of_speech.italic());
            for sense in &meaning.definitions {
                println!("     - {}", sense.definition);
                if let Some(example) = &sense.example {
                    println!("       \"{}\"", example.bright_black());
                }
            }
        }
    }
}

/// Print a bingo card
pub fn print_bingo_card(card: &BingoCard) {
    banner("SIGHT WORD BINGO");

    let width = card
        .grid()
        .iter()
        .map(|(_, square)| square.word.len())
        .max()
        .unwrap_or(1)
        .max(4);
    let rule = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(BINGO_SIZE));

    println!("\n  {}", "B I N G O".bright_yellow().bold());
    println!("  {rule}");
    for row in card.grid().iter_rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|square| {
                let word = format!("{:^width$}", square.word);
                if square.marked {
                    word.bright_green().bold().to_string()
                } else {
                    word
                }
            })
            .collect();
        println!("  | {} |", cells.join(" | "));
        println!("  {rule}");
    }
}

/// Print spelling rounds as numbered pairs
pub fn print_spelling_rounds(rounds: &[[SpellingChoice; 2]], show_answers: bool) {
    banner("WHICH SPELLING IS RIGHT?");

    for (i, pair) in rounds.iter().enumerate() {
        let options: Vec<String> = pair
            .iter()
            .zip(['a', 'b'])
            .map(|(choice, label)| {
                let text = format!("{label}) {}", choice.word);
                if show_answers && choice.correct {
                    text.bright_green().bold().to_string()
                } else {
                    text
                }
            })
            .collect();
        println!("  {:>2}. {}", i + 1, options.join("    "));
    }
}

/// Print a word list in columns
pub fn print_word_listing(listing: &WordListing) {
    println!("\n{}", listing.title.bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    if listing.words.is_empty() {
        println!("  {}", "(no words)".bright_black());
        return;
    }

    for chunk in listing.words.chunks(6) {
        let line: Vec<String> = chunk.iter().map(|w| format!("{w:<12}")).collect();
        println!("  {}", line.join("").trim_end());
    }
    println!("\n  {} words", listing.words.len());
}
