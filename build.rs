//! Build script to generate embedded word lists
//!
//! Reads word list files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/common_words.txt",
        "common.rs",
        "COMMON_WORDS",
        "Curated common-word dictionary",
    ),
    (
        "data/sight_words/pre_primer.txt",
        "sight_pre_primer.rs",
        "SIGHT_PRE_PRIMER",
        "Dolch pre-primer sight words (pre-kindergarten)",
    ),
    (
        "data/sight_words/primer.txt",
        "sight_primer.rs",
        "SIGHT_PRIMER",
        "Dolch primer sight words (kindergarten)",
    ),
    (
        "data/sight_words/first.txt",
        "sight_first.rs",
        "SIGHT_FIRST",
        "Dolch first grade sight words",
    ),
    (
        "data/sight_words/second.txt",
        "sight_second.rs",
        "SIGHT_SECOND",
        "Dolch second grade sight words",
    ),
    (
        "data/sight_words/third.txt",
        "sight_third.rs",
        "SIGHT_THIRD",
        "Dolch third grade sight words",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for &(input, output, const_name, doc_comment) in LISTS {
        generate_word_list(
            input,
            &Path::new(&out_dir).join(output),
            const_name,
            doc_comment,
        );

        // Rebuild if word lists change
        println!("cargo:rerun-if-changed={input}");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{}\",", word.to_lowercase()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
