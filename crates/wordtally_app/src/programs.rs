//! The interactive programs behind each command.
//!
//! Each one gets its text from the command line or a prompt, runs it
//! through `wordtally_core` and writes the result lines.

use serde::Serialize;
use wordtally_core::{count_letter, word_value, Score, TextMetrics};
use wordtally_logging::{wordtally_debug, wordtally_info};

use crate::cli::Command;
use crate::config::AppConfig;
use crate::console::{LineReader, LineWriter};
use crate::error::AppError;

const NAME_PROMPT: &str = "Enter your name:";
const WORD_PROMPT: &str = "Enter a word:";
const SENTENCE_PROMPT: &str = "Enter a sentence:";

#[derive(Debug, Serialize)]
struct LetterReport<'a> {
    word: &'a str,
    letter: char,
    count: usize,
}

#[derive(Debug, Serialize)]
struct MetricsReport<'a> {
    sentence: &'a str,
    words: usize,
    letters: usize,
}

#[derive(Debug, Serialize)]
struct ScoreReport<'a> {
    word: &'a str,
    value: Score,
}

/// Output options shared by all programs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub json: bool,
}

pub fn run<C>(
    command: Command,
    config: &AppConfig,
    output: Output,
    console: &mut C,
) -> Result<(), AppError>
where
    C: LineReader + LineWriter,
{
    wordtally_info!("Running {:?}", command);
    match command {
        Command::Hello => console.write_line(&config.hello_message)?,
        Command::Greet { name } => {
            let name = require(name, NAME_PROMPT, console)?;
            console.write_line(&greet(&config.greeting_word, &name))?;
        }
        Command::Beans { word, letter } => {
            let letter = match letter {
                Some(raw) => parse_letter(&raw)?,
                None => config.default_letter,
            };
            let word = require(word, WORD_PROMPT, console)?;
            count_beans(&word, letter, output, console)?;
        }
        Command::Wc { sentence } => {
            let sentence = require(sentence, SENTENCE_PROMPT, console)?;
            word_count(&sentence, output, console)?;
        }
        Command::Scrabble { word } => {
            // A missing word scores zero rather than failing.
            let word = acquire(word, WORD_PROMPT, console)?.unwrap_or_default();
            scrabble(&word, output, console)?;
        }
    }
    Ok(())
}

fn greet(greeting_word: &str, name: &str) -> String {
    format!("{greeting_word} {name}!")
}

/// Accepts exactly one `char`; anything else is a usage error.
fn parse_letter(raw: &str) -> Result<char, AppError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => Ok(letter),
        _ => Err(AppError::InvalidLetter(raw.to_string())),
    }
}

fn count_beans<W: LineWriter + ?Sized>(
    word: &str,
    letter: char,
    output: Output,
    console: &mut W,
) -> Result<(), AppError> {
    let count = count_letter(word, letter);
    wordtally_debug!("Counted {} of {:?} in {:?}", count, letter, word);
    if output.json {
        let report = LetterReport {
            word,
            letter,
            count,
        };
        console.write_line(&serde_json::to_string(&report)?)?;
    } else {
        let label: String = letter.to_uppercase().collect();
        console.write_line(&format!("Number of {label}s: {count}"))?;
    }
    Ok(())
}

fn word_count<W: LineWriter + ?Sized>(
    sentence: &str,
    output: Output,
    console: &mut W,
) -> Result<(), AppError> {
    let metrics = TextMetrics::of(sentence);
    wordtally_debug!("Measured {:?}: {:?}", sentence, metrics);
    if output.json {
        let report = MetricsReport {
            sentence,
            words: metrics.words,
            letters: metrics.letters,
        };
        console.write_line(&serde_json::to_string(&report)?)?;
    } else {
        console.write_line(&format!("Word count: {}", metrics.words))?;
        console.write_line(&format!("Letter count: {}", metrics.letters))?;
    }
    Ok(())
}

fn scrabble<W: LineWriter + ?Sized>(
    word: &str,
    output: Output,
    console: &mut W,
) -> Result<(), AppError> {
    let value = word_value(word);
    wordtally_debug!("Scored {:?} as {}", word, value);
    if output.json {
        let report = ScoreReport { word, value };
        console.write_line(&serde_json::to_string(&report)?)?;
    } else {
        console.write_line(&format!("Value: {value}"))?;
    }
    Ok(())
}

/// Use the command-line text if given, otherwise prompt for it.
fn acquire<R: LineReader + ?Sized>(
    arg: Option<String>,
    prompt: &'static str,
    console: &mut R,
) -> Result<Option<String>, AppError> {
    match arg {
        Some(text) => Ok(Some(text)),
        None => Ok(console.read_line(prompt)?),
    }
}

fn require<R: LineReader + ?Sized>(
    arg: Option<String>,
    prompt: &'static str,
    console: &mut R,
) -> Result<String, AppError> {
    acquire(arg, prompt, console)?.ok_or(AppError::NoInput { prompt })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use std::io;

    #[derive(Default)]
    struct ScriptedConsole {
        inputs: VecDeque<String>,
        prompts: Vec<String>,
        lines: Vec<String>,
    }

    impl ScriptedConsole {
        fn with_input(lines: &[&str]) -> Self {
            Self {
                inputs: lines.iter().map(|line| line.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl LineReader for ScriptedConsole {
        fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
            self.prompts.push(prompt.to_string());
            Ok(self.inputs.pop_front())
        }
    }

    impl LineWriter for ScriptedConsole {
        fn write_line(&mut self, text: &str) -> io::Result<()> {
            self.lines.push(text.to_string());
            Ok(())
        }
    }

    fn run_with(
        command: Command,
        input: &[&str],
        output: Output,
    ) -> (ScriptedConsole, Result<(), AppError>) {
        wordtally_logging::initialize_for_tests();
        let mut console = ScriptedConsole::with_input(input);
        let result = run(command, &AppConfig::default(), output, &mut console);
        (console, result)
    }

    #[test]
    fn hello_prints_configured_message() {
        let (console, result) = run_with(Command::Hello, &[], Output::default());
        result.unwrap();
        assert_eq!(console.lines, vec!["Hello, World"]);
        assert!(console.prompts.is_empty());
    }

    #[test]
    fn greet_prompts_for_a_name() {
        let (console, result) = run_with(Command::Greet { name: None }, &["Ada"], Output::default());
        result.unwrap();
        assert_eq!(console.prompts, vec![NAME_PROMPT]);
        assert_eq!(console.lines, vec!["Hi Ada!"]);
    }

    #[test]
    fn greet_uses_configured_greeting_word() {
        let config = AppConfig {
            greeting_word: "Salut".to_string(),
            ..AppConfig::default()
        };
        let mut console = ScriptedConsole::default();
        let command = Command::Greet {
            name: Some("Grace".to_string()),
        };
        run(command, &config, Output::default(), &mut console).unwrap();
        assert!(console.prompts.is_empty());
        assert_eq!(console.lines, vec!["Salut Grace!"]);
    }

    #[test]
    fn beans_counts_bs_by_default() {
        let command = Command::Beans {
            word: None,
            letter: None,
        };
        let (console, result) = run_with(command, &["Bumblebee"], Output::default());
        result.unwrap();
        assert_eq!(console.prompts, vec![WORD_PROMPT]);
        assert_eq!(console.lines, vec!["Number of Bs: 3"]);
    }

    #[test]
    fn beans_counts_another_letter() {
        let command = Command::Beans {
            word: Some("Bumblebee".to_string()),
            letter: Some("E".to_string()),
        };
        let (console, result) = run_with(command, &[], Output::default());
        result.unwrap();
        assert_eq!(console.lines, vec!["Number of Es: 3"]);
    }

    #[test]
    fn beans_rejects_multi_character_letters() {
        for raw in ["ab", ""] {
            let command = Command::Beans {
                word: Some("abba".to_string()),
                letter: Some(raw.to_string()),
            };
            let (console, result) = run_with(command, &[], Output::default());
            assert!(matches!(result, Err(AppError::InvalidLetter(ref got)) if got == raw));
            assert!(console.lines.is_empty());
        }
    }

    #[test]
    fn wc_reports_words_then_letters() {
        let (console, result) =
            run_with(Command::Wc { sentence: None }, &["hello world"], Output::default());
        result.unwrap();
        assert_eq!(console.prompts, vec![SENTENCE_PROMPT]);
        assert_eq!(console.lines, vec!["Word count: 2", "Letter count: 10"]);
    }

    #[test]
    fn wc_counts_blank_line_as_one_word() {
        let (console, result) = run_with(Command::Wc { sentence: None }, &[""], Output::default());
        result.unwrap();
        assert_eq!(console.lines, vec!["Word count: 1", "Letter count: 0"]);
    }

    #[test]
    fn wc_without_input_fails() {
        let (console, result) = run_with(Command::Wc { sentence: None }, &[], Output::default());
        assert!(matches!(
            result,
            Err(AppError::NoInput {
                prompt: SENTENCE_PROMPT
            })
        ));
        assert!(console.lines.is_empty());
    }

    #[test]
    fn scrabble_scores_the_word() {
        let (console, result) =
            run_with(Command::Scrabble { word: None }, &["quiz"], Output::default());
        result.unwrap();
        assert_eq!(console.lines, vec!["Value: 22"]);
    }

    #[test]
    fn scrabble_without_input_scores_zero() {
        let (console, result) = run_with(Command::Scrabble { word: None }, &[], Output::default());
        result.unwrap();
        assert_eq!(console.lines, vec!["Value: 0"]);
    }

    #[test]
    fn json_output_is_one_object_per_run() {
        let json = Output { json: true };

        let (console, result) = run_with(
            Command::Scrabble {
                word: Some("cat".to_string()),
            },
            &[],
            json,
        );
        result.unwrap();
        assert_eq!(console.lines, vec![r#"{"word":"cat","value":5}"#]);

        let (console, result) = run_with(
            Command::Wc {
                sentence: Some("to be".to_string()),
            },
            &[],
            json,
        );
        result.unwrap();
        assert_eq!(
            console.lines,
            vec![r#"{"sentence":"to be","words":2,"letters":4}"#]
        );

        let (console, result) = run_with(
            Command::Beans {
                word: Some("Bob".to_string()),
                letter: None,
            },
            &[],
            json,
        );
        result.unwrap();
        assert_eq!(console.lines, vec![r#"{"word":"Bob","letter":"b","count":2}"#]);
    }
}
