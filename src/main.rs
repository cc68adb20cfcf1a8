//! Word Games - CLI
//!
//! Word searches, crosswords, sentence mazes, word ladders and spelling
//! practice for early readers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};
use word_games::{
    commands::{
        LadderConfig, LadderStrategy, SearchConfig, StressConfig, WordSource, add_sight_word,
        analyze_word, build_bingo, build_crossword, build_maze, build_spelling_rounds,
        build_word_search, list_category, list_sight_words, random_sight_words, run_ladder_game,
        run_quiz, run_stress, solve_ladder,
    },
    core::WordEntry,
    corpus::{
        CorpusRepository, DefinitionSource, Dictionary, JsonDefinitions, JsonFileRepository,
        MemoryRepository, WordCorpus,
    },
    interactive::{MazeApp, MazeFactory, run_tui},
    output::{
        print_analysis_result, print_bingo_card, print_crossword, print_ladder_result, print_maze,
        print_spelling_rounds, print_stress_result, print_word_listing, print_word_search,
    },
    puzzles::{
        crossword::{CrosswordConfig, DEFAULT_CROSSWORD_SIZE},
        ladder::LadderValidator,
        misspelling::{Difficulty, MisspellingConfig, MisspellingGenerator},
    },
    wordlists::{Category, Grade, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_games",
    about = "Puzzle generators and word games for early readers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// JSON file holding custom sight words (in-memory when omitted)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Word list file (one word per line) replacing the built-in dictionary
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// JSON definitions file used for crossword clues and word meanings
    #[arg(long, global = true)]
    definitions: Option<PathBuf>,
}

/// Where puzzle words come from; an explicit list wins over a category,
/// which wins over a grade
#[derive(clap::Args)]
struct WordArgs {
    /// Words to use
    words: Vec<String>,

    /// Use a themed category (animals, colors, food, body, home, nature)
    #[arg(short, long)]
    category: Option<Category>,

    /// Draw sight words from one grade (prek, k, 1, 2, 3)
    #[arg(short, long)]
    grade: Option<Grade>,

    /// How many words to draw
    #[arg(short = 'n', long, default_value = "8")]
    count: usize,
}

impl WordArgs {
    fn source(&self) -> WordSource {
        if !self.words.is_empty() {
            WordSource::List(self.words.clone())
        } else if let Some(category) = self.category {
            WordSource::Category(category)
        } else {
            WordSource::SightWords(self.grade)
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a word search
    Search {
        #[command(flatten)]
        selection: WordArgs,

        /// Grid width and height
        #[arg(short, long, default_value = "10")]
        size: usize,

        /// Highlight the hidden words
        #[arg(long)]
        answers: bool,
    },

    /// Generate a crossword
    Crossword {
        #[command(flatten)]
        selection: WordArgs,

        /// Board width and height
        #[arg(short, long, default_value_t = DEFAULT_CROSSWORD_SIZE)]
        size: usize,

        /// Fill in the answers
        #[arg(long)]
        answers: bool,
    },

    /// Walk a sentence maze in the terminal
    Maze {
        /// Maze width and height
        #[arg(short, long, default_value = "6")]
        size: usize,

        /// Sentence to hide (a built-in sentence when omitted)
        #[arg(long)]
        sentence: Option<String>,

        /// Print the maze instead of playing it
        #[arg(long)]
        print: bool,
    },

    /// Word ladders: change one letter at a time
    Ladder {
        #[command(subcommand)]
        action: LadderAction,
    },

    /// Spelling practice: pick the correct spelling
    Misspell {
        /// easy, medium or hard
        #[arg(short, long, default_value = "medium")]
        difficulty: Difficulty,

        /// Number of pairs
        #[arg(short, long, default_value = "5")]
        rounds: usize,

        /// Mark the correct spelling
        #[arg(long)]
        answers: bool,

        /// Misspell this word instead
        #[arg(long)]
        word: Option<String>,
    },

    /// Generate many misspellings and check none is a real word
    Stress {
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,
    },

    /// Split a word into syllables
    Syllables { word: String },

    /// Show the phonics patterns and reading tips for a word
    Phonics { word: String },

    /// List, draw or add sight words
    Words {
        #[command(subcommand)]
        action: WordsAction,
    },

    /// Make a sight-word bingo card
    Bingo {
        #[arg(short, long)]
        grade: Option<Grade>,
    },

    /// Rhyme, letter-sound and sentence questions
    Quiz {
        #[arg(short, long, default_value = "6")]
        rounds: usize,
    },
}

#[derive(Subcommand)]
enum LadderAction {
    /// Check one step
    Check { previous: String, word: String },

    /// Suggest the next step
    Hint { current: String, target: String },

    /// Find a ladder between two words
    Solve {
        start: String,
        target: String,

        /// Follow hints instead of searching for the shortest ladder
        #[arg(long)]
        hints: bool,

        #[arg(long, default_value = "20")]
        max_steps: usize,
    },

    /// Play at the prompt
    Play {
        start: Option<String>,
        target: Option<String>,
    },
}

#[derive(Subcommand)]
enum WordsAction {
    /// List sight words, or a category's words
    List {
        #[arg(short, long)]
        grade: Option<Grade>,

        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Draw random sight words
    Random {
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,

        #[arg(short, long)]
        grade: Option<Grade>,
    },

    /// Add a custom sight word
    Add { word: String },
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter);

    tracing_subscriber::registry().with(stderr_layer).init();
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    match path {
        Some(path) => {
            let words = load_from_file(path)?;
            tracing::debug!(count = words.len(), path = %path.display(), "loaded dictionary");
            Ok(Dictionary::from_words(words.into_iter().map(WordEntry::into_string)))
        }
        None => Ok(Dictionary::embedded()),
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;
    let definitions = cli
        .definitions
        .as_deref()
        .map(JsonDefinitions::from_file)
        .transpose()?;

    match cli.store.clone() {
        Some(path) => {
            let corpus = WordCorpus::with_dictionary(dictionary, JsonFileRepository::new(path));
            run(cli.command, corpus, definitions.as_ref(), &mut rng)
        }
        None => {
            let corpus = WordCorpus::with_dictionary(dictionary, MemoryRepository::new());
            run(cli.command, corpus, definitions.as_ref(), &mut rng)
        }
    }
}

fn run<Repo: CorpusRepository>(
    command: Commands,
    mut corpus: WordCorpus<Repo>,
    definitions: Option<&JsonDefinitions>,
    rng: &mut StdRng,
) -> Result<()> {
    let definitions = definitions.map(|d| d as &dyn DefinitionSource);

    match command {
        Commands::Search {
            selection,
            size,
            answers,
        } => {
            let config = SearchConfig {
                count: selection.count,
                size,
                ..SearchConfig::new(selection.source())
            };
            let puzzle = build_word_search(&corpus, &config, rng).map_err(|e| anyhow::anyhow!(e))?;
            print_word_search(&puzzle, answers);
        }
        Commands::Crossword {
            selection,
            size,
            answers,
        } => {
            let puzzle = build_crossword(
                &corpus,
                &selection.source(),
                selection.count,
                definitions,
                &CrosswordConfig { size },
                rng,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            print_crossword(&puzzle, answers);
        }
        Commands::Maze {
            size,
            sentence,
            print,
        } => run_maze_command(&corpus, size, sentence.as_deref(), print, rng)?,
        Commands::Ladder { action } => run_ladder_command(action, corpus.dictionary(), rng)?,
        Commands::Misspell {
            difficulty,
            rounds,
            answers,
            word,
        } => {
            if let Some(word) = word {
                let generator = MisspellingGenerator::new(corpus.dictionary(), MisspellingConfig::default());
                let result = generator.generate(&word, rng);
                println!("{} → {} ({})", result.correct, result.incorrect, result.stage);
            } else {
                let rounds = build_spelling_rounds(&corpus, difficulty, rounds, rng)
                    .map_err(|e| anyhow::anyhow!(e))?;
                print_spelling_rounds(&rounds, answers);
            }
        }
        Commands::Stress { count } => {
            let seed = rng.random();
            let result = run_stress(corpus.dictionary(), StressConfig::new(count, seed))
                .map_err(|e| anyhow::anyhow!(e))?;
            print_stress_result(&result);
        }
        Commands::Syllables { word } => {
            let result = analyze_word(&word, corpus.dictionary(), None).map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", result.syllables.join(" · "));
        }
        Commands::Phonics { word } => {
            let result =
                analyze_word(&word, corpus.dictionary(), definitions).map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result);
        }
        Commands::Words { action } => match action {
            WordsAction::List { grade, category } => {
                let listing = match category {
                    Some(category) => list_category(&corpus, category),
                    None => list_sight_words(&corpus, grade),
                };
                print_word_listing(&listing);
            }
            WordsAction::Random { count, grade } => {
                print_word_listing(&random_sight_words(&corpus, count, grade, rng));
            }
            WordsAction::Add { word } => {
                let message = add_sight_word(&mut corpus, &word).map_err(|e| anyhow::anyhow!(e))?;
                println!("{message}");
            }
        },
        Commands::Bingo { grade } => {
            let card = build_bingo(&corpus, grade, rng).map_err(|e| anyhow::anyhow!(e))?;
            print_bingo_card(&card);
        }
        Commands::Quiz { rounds } => {
            run_quiz(rounds, rng).map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}

fn run_maze_command<Repo: CorpusRepository>(
    corpus: &WordCorpus<Repo>,
    size: usize,
    sentence: Option<&str>,
    print: bool,
    rng: &mut StdRng,
) -> Result<()> {
    if print {
        let maze = build_maze(corpus, size, sentence, rng).map_err(|e| anyhow::anyhow!(e))?;
        print_maze(&maze);
        return Ok(());
    }

    let factory: MazeFactory = Box::new(move || build_maze(corpus, size, sentence, rng));
    let app = MazeApp::new(factory).map_err(|e| anyhow::anyhow!(e))?;
    run_tui(app)
}

fn run_ladder_command(action: LadderAction, dictionary: &Dictionary, rng: &mut StdRng) -> Result<()> {
    let validator = LadderValidator::new(dictionary);

    match action {
        LadderAction::Check { previous, word } => match validator.check(&word, &previous) {
            Ok(()) => println!("✅ {previous} → {word} is a valid step"),
            Err(rejection) => println!("❌ {rejection}"),
        },
        LadderAction::Hint { current, target } => match validator.next_hint(&current, &target) {
            Some(hint) => println!("💡 Try {}", hint.to_uppercase()),
            None => println!("No hint: already there, or no word is one letter away"),
        },
        LadderAction::Solve {
            start,
            target,
            hints,
            max_steps,
        } => {
            let config = LadderConfig {
                strategy: if hints {
                    LadderStrategy::Hints
                } else {
                    LadderStrategy::Shortest
                },
                max_steps,
                ..LadderConfig::new(start, target)
            };
            let result = solve_ladder(config, dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_ladder_result(&result);
        }
        LadderAction::Play { start, target } => {
            let first = match (&start, &target) {
                (Some(start), Some(target)) => Some((start.as_str(), target.as_str())),
                (None, None) => None,
                _ => anyhow::bail!("Give both a start and a target word, or neither"),
            };
            run_ladder_game(dictionary, first, rng).map_err(|e| anyhow::anyhow!(e))?;
        }
    }

    Ok(())
}
