//! Simple line mode
//!
//! Text-based hangman without the TUI. Same rules, no sound.

use crate::core::{CategoryFilter, GuessOutcome, Round};
use crate::output::formatters::{hint_message, loss_message, win_message};
use crate::output::print_round;
use crate::store::{WordSource, start_round};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Run line mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<S: WordSource + ?Sized>(source: &S, filter: CategoryFilter) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    play(
        source,
        filter,
        &mut stdin.lock(),
        &mut stdout.lock(),
        &mut rand::rng(),
    )
}

/// Line mode over arbitrary input and output
///
/// Returns when the player quits or the input ends.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play<S, R, W, G>(
    source: &S,
    mut filter: CategoryFilter,
    input: &mut R,
    out: &mut W,
    rng: &mut G,
) -> Result<()>
where
    S: WordSource + ?Sized,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║                 HANGMAN                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "Type a letter to guess it.")?;
    writeln!(
        out,
        "Commands: 'hint', 'new', 'category <name>', 'quit'\n"
    )?;

    let mut round = new_round(source, filter, out)?;
    print_round(out, &round)?;

    loop {
        write!(out, "\nGuess: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim();

        match line.to_lowercase().as_str() {
            "quit" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "reset" => {
                round = new_round(source, filter, out)?;
            }
            "hint" => {
                if !round.hint_available() {
                    writeln!(out, "{}", "No hint available yet.".bright_black())?;
                    continue;
                }
                if let Some(letter) = round.give_hint(rng) {
                    writeln!(out, "{}", hint_message(letter).yellow())?;
                    if round.is_won() {
                        writeln!(out, "\n{}", win_message().green().bold())?;
                        round = new_round(source, filter, out)?;
                    }
                }
            }
            command if command.starts_with("category") => {
                let name = command.trim_start_matches("category");
                match name.parse::<CategoryFilter>() {
                    Ok(choice) => {
                        filter = choice;
                        writeln!(out, "Category set to {filter}")?;
                        round = new_round(source, filter, out)?;
                    }
                    Err(err) => {
                        writeln!(out, "{}", err.red())?;
                        continue;
                    }
                }
            }
            guess => {
                let outcome = round.guess(guess);
                // Invalid and repeated guesses change nothing
                if outcome == GuessOutcome::Rejected {
                    continue;
                }
                if outcome.is_final() {
                    let result = if outcome == GuessOutcome::Win {
                        win_message().green().bold()
                    } else {
                        loss_message(round.word().text()).red().bold()
                    };
                    writeln!(out, "\n{result}")?;
                    round = new_round(source, filter, out)?;
                }
            }
        }

        print_round(out, &round)?;
    }
}

fn new_round<S, W>(source: &S, filter: CategoryFilter, out: &mut W) -> Result<Round>
where
    S: WordSource + ?Sized,
    W: Write,
{
    let (round, notice) = start_round(source, filter);
    if let Some(text) = notice {
        writeln!(out, "{} {text}", "Database Error:".red().bold())?;
    }
    writeln!(out, "\n🔄 New round started!")?;
    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::testing::ScriptedSource;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn run(source: &ScriptedSource, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let mut rng = StdRng::seed_from_u64(5);
        play(source, CategoryFilter::All, &mut input, &mut out, &mut rng).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn win_then_quit() {
        let source = ScriptedSource::words(&[("cat", "Animals"), ("dog", "Animals")]);
        let text = run(&source, "c\na\nt\nquit\n");
        assert!(text.contains("Congrats! You won!"));
        assert!(text.contains("Thanks for playing"));
    }

    #[test]
    fn loss_reveals_word() {
        let source = ScriptedSource::words(&[("dog", "Animals")]);
        let text = run(&source, "q\nw\ne\nr\nt\ny\n");
        assert!(text.contains("You lose! The word was: dog"));
    }

    #[test]
    fn hint_requires_three_misses() {
        let source = ScriptedSource::words(&[("python", "Programming")]);
        let text = run(&source, "hint\na\nb\nc\nhint\n");
        assert!(text.contains("No hint available yet."));
        assert!(text.contains("A hint was given!"));
    }

    #[test]
    fn category_command_changes_filter() {
        let source = ScriptedSource::words(&[("cat", "Animals"), ("turkey", "Countries")]);
        let text = run(&source, "category countries\nquit\n");
        assert!(text.contains("Category set to Countries"));
        assert!(text.contains("_ _ _ _ _ _"));
        assert_eq!(
            source.filters.borrow().last(),
            Some(&"Countries".parse::<CategoryFilter>().unwrap())
        );
    }

    #[test]
    fn unknown_category_is_reported() {
        let source = ScriptedSource::words(&[("cat", "Animals")]);
        let text = run(&source, "category sports\n");
        assert!(text.contains("Unknown category 'sports'"));
    }

    #[test]
    fn storage_failure_is_reported() {
        let source = ScriptedSource::new(vec![Err(crate::store::StoreError::Database(
            rusqlite::Error::InvalidQuery,
        ))]);
        let text = run(&source, "quit\n");
        assert!(text.contains("Database Error:"));
        assert!(text.contains("General"));
    }
}
