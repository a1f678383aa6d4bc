//! Build script to generate the embedded seed word list
//!
//! Reads `word,category` lines and generates Rust source code with a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_seed_list(
        "data/seed_words.txt",
        &Path::new(&out_dir).join("seed_words.rs"),
        "SEED_WORDS",
        "Words inserted into an empty word store on first run",
    );

    // Rebuild if the seed list changes
    println!("cargo:rerun-if-changed=data/seed_words.txt");
}

fn generate_seed_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            line.split_once(',')
                .map(|(word, category)| (word.trim(), category.trim()))
                .unwrap_or_else(|| panic!("Seed line must be `word,category`: {line}"))
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated seed list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} (`(word, category)` pairs)").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, category) in entries {
        writeln!(output, "    (\"{word}\", \"{category}\"),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
