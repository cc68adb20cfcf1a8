//! Text-mode games
//!
//! Word ladder and quiz rounds played at the prompt, without the TUI.

use crate::corpus::Dictionary;
use crate::puzzles::ladder::{LadderGame, LadderValidator};
use crate::puzzles::quiz::{letter_sound_round, rhyme_round, sentence_round};
use crate::wordlists::seeds::{LADDER_PUZZLES, LETTER_SOUNDS, RHYME_SETS, SENTENCES};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, Write};

/// Play word ladders at the prompt
///
/// Starts with the `first` start and target words if given, then moves on
/// to random built-in ladders.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// ladder's two words differ in length.
pub fn run_ladder_game<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    first: Option<(&str, &str)>,
    rng: &mut R,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Word Ladder - Play                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Change one letter at a time. Every step must be a real word.");
    println!("Commands: 'hint', 'new' for another ladder, 'quit' to exit\n");

    let validator = LadderValidator::new(dictionary);
    let mut first = first;

    loop {
        let game = match first.take() {
            Some((start, target)) => LadderGame::new(validator, start, target),
            None => {
                let puzzle = LADDER_PUZZLES
                    .choose(rng)
                    .ok_or_else(|| "No ladder puzzles available".to_string())?;
                LadderGame::from_puzzle(validator, puzzle)
            }
        };
        let mut game = game.map_err(|e| e.to_string())?;

        while !game.is_solved() {
            println!("────────────────────────────────────────────────────────────");
            println!(
                "{}  →  {}",
                game.steps().join(" → ").to_uppercase().bright_white().bold(),
                game.target().to_uppercase().bright_cyan().bold()
            );

            let input = get_user_input("Next word")?.to_lowercase();
            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => break,
                "hint" | "h" => match game.hint() {
                    Some(hint) => println!("💡 Try {}\n", hint.to_uppercase().bright_yellow()),
                    None => println!("No hint from here. Type 'new' to start over.\n"),
                },
                word => {
                    if let Err(rejection) = game.submit(word) {
                        println!("❌ {rejection}\n");
                    }
                }
            }
        }

        if game.is_solved() {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("{}", "    🎉  L A D D E R   C L I M B E D !  🎉    ".bright_green().bold());
            println!("{}", "═".repeat(60).bright_cyan());
            println!(
                "\n  {} in {} {}",
                game.steps().join(" → ").to_uppercase().bright_white(),
                (game.steps().len() - 1).to_string().bright_cyan().bold(),
                if game.steps().len() == 2 { "step" } else { "steps" }
            );
            println!();

            if !matches!(
                get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
                "yes" | "y"
            ) {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }

        println!("\n🔄 New ladder!\n");
    }
}

/// Play `rounds` quiz questions, cycling rhyme, letter-sound and sentence
///
/// Returns the number answered correctly.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_quiz<R: Rng + ?Sized>(rounds: usize, rng: &mut R) -> Result<usize, String> {
    println!("\n{}", "═".repeat(60).cyan());
    println!("{}", "🧩 QUIZ TIME".bold().cyan());
    println!("{}\n", "═".repeat(60).cyan());

    let mut score = 0;
    for round in 0..rounds {
        println!("{}", format!("Question {}", round + 1).bold());
        let correct = match round % 3 {
            0 => {
                let Some(set) = RHYME_SETS.choose(rng) else { continue };
                let quiz = rhyme_round(set, rng);
                println!("Which words rhyme with {}?", quiz.target.to_uppercase().bright_cyan());
                println!("  {}", quiz.choices.join("  "));
                let answer = get_user_input("Rhymes (separate with spaces)")?;
                let picked: Vec<&str> = answer.split_whitespace().collect();
                picked.len() == quiz.rhyme_count() && picked.iter().all(|w| quiz.is_rhyme(w))
            }
            1 => {
                let Some(entry) = LETTER_SOUNDS.choose(rng) else { continue };
                let quiz = letter_sound_round(*entry, rng);
                println!(
                    "Which letters make the sound {} as in {}?",
                    quiz.entry.sound.bright_cyan(),
                    quiz.entry.example.bright_white()
                );
                println!("  {}", quiz.choices.join("  "));
                quiz.check(&get_user_input("Letters")?)
            }
            _ => {
                let Some(template) = SENTENCES.choose(rng) else { continue };
                let quiz = sentence_round(template, rng);
                println!("Put the words in order: {}", quiz.scrambled.join(" ").bright_cyan());
                let answer = get_user_input("Sentence")?;
                let words: Vec<&str> = answer.split_whitespace().collect();
                let correct = quiz.check(&words);
                if !correct {
                    println!("  It reads: {}", quiz.answer().bright_white());
                }
                correct
            }
        };

        if correct {
            score += 1;
            println!("{}\n", "✓ Correct!".bright_green().bold());
        } else {
            println!("{}\n", "✗ Not quite".bright_red());
        }
    }

    println!("Score: {}/{}", score.to_string().bright_cyan().bold(), rounds);
    Ok(score)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Err("End of input".to_string());
    }

    Ok(input.trim().to_string())
}
