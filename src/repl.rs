// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Interactive REPL that prints the token stream of each input.

use crate::output::{self, Style};
use owo_colors::OwoColorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Config, Editor, Helper};
use spacey_lexer::{Lexer, MatcherSet, tokenize_with};
use std::borrow::Cow;
use std::path::PathBuf;

/// REPL configuration constants
const HISTORY_FILE: &str = ".spacey_lex_history";
const MAX_HISTORY_SIZE: usize = 1000;

/// REPL commands that can be executed with a dot prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Help,
    Exit,
    Clear,
    Version,
    Load,
    Json,
    Trivia,
    Matchers,
}

impl ReplCommand {
    /// Parse a REPL command from input string
    pub fn parse(input: &str) -> Option<(Self, Option<&str>)> {
        let input = input.trim();
        let rest = input.strip_prefix('.')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let cmd = parts.next()?.to_lowercase();
        let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

        match cmd.as_str() {
            "help" | "h" | "?" => Some((ReplCommand::Help, arg)),
            "exit" | "quit" | "q" => Some((ReplCommand::Exit, arg)),
            "clear" | "cls" => Some((ReplCommand::Clear, arg)),
            "version" | "v" => Some((ReplCommand::Version, arg)),
            "load" | "l" => Some((ReplCommand::Load, arg)),
            "json" => Some((ReplCommand::Json, arg)),
            "trivia" => Some((ReplCommand::Trivia, arg)),
            "matchers" => Some((ReplCommand::Matchers, arg)),
            _ => None,
        }
    }

    /// Get all available commands for help/completion
    pub fn all_commands() -> &'static [(&'static str, &'static str)] {
        &[
            (".help", "Show this help message"),
            (".exit", "Exit the REPL"),
            (".clear", "Clear the screen"),
            (".version", "Show version information"),
            (".load <file>", "Tokenize a JavaScript file"),
            (".json", "Toggle JSON output"),
            (".trivia", "Toggle white space and comment tokens"),
            (".matchers [a,b,..]", "Show or replace the matcher order"),
        ]
    }
}

/// Completion, hints, highlighting and validation for the editor
struct LexHelper {
    /// Matchers used to color the line being edited
    matchers: MatcherSet,
    /// Command names for completion
    commands: Vec<&'static str>,
}

impl LexHelper {
    fn new(matchers: MatcherSet) -> Self {
        let commands = ReplCommand::all_commands()
            .iter()
            .filter_map(|(cmd, _)| cmd.split_whitespace().next())
            .collect();

        Self { matchers, commands }
    }

    /// Command names that extend `word`.
    fn candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.commands
            .iter()
            .copied()
            .filter(move |cmd| word.starts_with('.') && cmd.starts_with(word) && cmd.len() > word.len())
    }
}

impl Completer for LexHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let word = &line[..pos];
        let matches = self
            .candidates(word)
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd[word.len()..].to_string(),
            })
            .collect();

        Ok((pos, matches))
    }
}

impl Hinter for LexHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &rustyline::Context<'_>) -> Option<Self::Hint> {
        if pos < line.len() || line.len() < 2 {
            return None;
        }

        self.candidates(line)
            .next()
            .map(|cmd| (&cmd[line.len()..]).dimmed().to_string())
    }
}

impl Highlighter for LexHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.trim_start().starts_with('.') {
            return Cow::Owned(line.magenta().to_string());
        }
        Cow::Owned(highlight_source(line, &self.matchers))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

/// Colors `source` token by token; text after a lexer error stays plain.
fn highlight_source(source: &str, matchers: &MatcherSet) -> String {
    let mut result = String::with_capacity(source.len() * 2);
    let mut consumed = 0;

    for item in Lexer::with_matchers(source, matchers.clone()) {
        match item {
            Ok(token) => {
                consumed += token.text.len();
                result.push_str(&output::paint(token.kind, &token.text));
            }
            Err(_) => break,
        }
    }

    result.push_str(&source[consumed..]);
    result
}

/// Whether the input stops inside a string or comment.
fn is_unterminated(source: &str, matchers: &MatcherSet) -> bool {
    match tokenize_with(source, matchers) {
        Ok(_) => false,
        Err(failure) => failure.error.is_unterminated(),
    }
}

impl Validator for LexHelper {
    fn validate(&self, ctx: &mut ValidationContext<'_>) -> rustyline::Result<ValidationResult> {
        let input = ctx.input();
        if ReplCommand::parse(input).is_none() && is_unterminated(input, &self.matchers) {
            return Ok(ValidationResult::Incomplete);
        }
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for LexHelper {}

/// The interactive token-dump REPL
pub struct Repl {
    matchers: MatcherSet,
    style: Style,
    editor: Editor<LexHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Repl {
    /// Create a new REPL instance
    pub fn new(matchers: MatcherSet, style: Style) -> rustyline::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .max_history_size(MAX_HISTORY_SIZE)?
            .auto_add_history(true)
            .build();

        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(LexHelper::new(matchers.clone())));

        let history_path = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("spacey")
            .join(HISTORY_FILE);

        if let Some(parent) = history_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = editor.load_history(&history_path);

        Ok(Self {
            matchers,
            style,
            editor,
            history_path,
        })
    }

    /// Run the REPL main loop
    pub fn run(&mut self) -> rustyline::Result<()> {
        self.print_banner();

        loop {
            match self.editor.readline(&self.format_prompt()) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }

                    if let Some((cmd, arg)) = ReplCommand::parse(&line) {
                        match self.execute_command(cmd, arg) {
                            CommandResult::Continue => continue,
                            CommandResult::Exit => break,
                        }
                    }

                    // Trivia is part of the output, so the line is not trimmed
                    self.tokenize_and_print(&line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}", "^C".dimmed());
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("{}", "^D".dimmed());
                    break;
                }
                Err(err) => {
                    eprintln!("{}: {:?}", "Error".red().bold(), err);
                    break;
                }
            }
        }

        let _ = self.editor.save_history(&self.history_path);

        self.print_goodbye();
        Ok(())
    }

    fn print_banner(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!(
            "  {} {} {}",
            "Spacey Lexer".white().bold(),
            "v".dimmed(),
            version.bright_yellow()
        );
        println!("  {}", "Every code point, accounted for".dimmed());
        println!();
        println!(
            "  {} {} {}",
            "Type".dimmed(),
            ".help".cyan(),
            "for available commands".dimmed()
        );
        println!();
    }

    fn print_goodbye(&self) {
        println!();
        println!("{}", "Goodbye!".bright_cyan());
        println!();
    }

    fn format_prompt(&self) -> String {
        let mode = if self.style.json { "lex:json>" } else { "lex>" };
        format!("{} ", mode.bright_green().bold())
    }

    fn execute_command(&mut self, cmd: ReplCommand, arg: Option<&str>) -> CommandResult {
        match cmd {
            ReplCommand::Help => self.print_help(),
            ReplCommand::Exit => return CommandResult::Exit,
            ReplCommand::Clear => print!("\x1B[2J\x1B[H"),
            ReplCommand::Version => self.print_version(),
            ReplCommand::Load => match arg {
                Some(path) => self.load_file(path),
                None => eprintln!(
                    "{}: {} {}",
                    "Error".red().bold(),
                    ".load".cyan(),
                    "requires a file path".dimmed()
                ),
            },
            ReplCommand::Json => {
                self.style.json = !self.style.json;
                println!("JSON output {}", on_off(self.style.json));
            }
            ReplCommand::Trivia => {
                self.style.trivia = !self.style.trivia;
                println!("Trivia tokens {}", on_off(self.style.trivia));
            }
            ReplCommand::Matchers => match arg {
                Some(list) => self.set_matchers(list),
                None => {
                    let names: Vec<_> = self.matchers.names().collect();
                    println!("{}", names.join(", ").cyan());
                }
            },
        }
        CommandResult::Continue
    }

    fn set_matchers(&mut self, list: &str) {
        let names = list.split(',').map(str::trim).filter(|n| !n.is_empty());
        match MatcherSet::from_names(names) {
            Ok(set) => {
                self.matchers = set.clone();
                self.editor.set_helper(Some(LexHelper::new(set)));
            }
            Err(e) => eprintln!("{}: {}", "Error".red().bold(), e),
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "REPL Commands:".white().bold());
        println!();

        for (cmd, desc) in ReplCommand::all_commands() {
            println!("  {:20} {}", cmd.cyan(), desc.dimmed());
        }

        println!();
        println!("{}", "Keyboard Shortcuts:".white().bold());
        println!();
        println!(
            "  {:20} {}",
            "Ctrl+C".yellow(),
            "Cancel current input".dimmed()
        );
        println!("  {:20} {}", "Ctrl+D".yellow(), "Exit REPL".dimmed());
        println!("  {:20} {}", "Tab".yellow(), "Complete a command".dimmed());
        println!("  {:20} {}", "↑/↓".yellow(), "Navigate history".dimmed());
        println!();
        println!(
            "  {}",
            "An unterminated string or comment continues on the next line.".dimmed()
        );
        println!();
    }

    fn print_version(&self) {
        let version = env!("CARGO_PKG_VERSION");
        println!();
        println!("{}: {}", "spacey-lex".bright_cyan().bold(), version.yellow());
        println!();
    }

    fn load_file(&mut self, path: &str) {
        match std::fs::read_to_string(path) {
            Ok(source) => self.tokenize_and_print(&source),
            Err(e) => eprintln!("{}: {}: {}", "Error".red().bold(), path.cyan(), e),
        }
    }

    fn tokenize_and_print(&self, source: &str) {
        match tokenize_with(source, &self.matchers) {
            Ok(tokens) => {
                if let Err(e) = output::print_tokens(&tokens, self.style) {
                    eprintln!("{}: {}", "Error".red().bold(), e);
                }
            }
            Err(failure) => output::print_failure(&failure, self.style),
        }
    }
}

/// Result of executing a REPL command
enum CommandResult {
    Continue,
    Exit,
}

fn on_off(enabled: bool) -> String {
    if enabled {
        "on".green().to_string()
    } else {
        "off".red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repl_command_parse() {
        assert!(matches!(
            ReplCommand::parse(".help"),
            Some((ReplCommand::Help, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".exit"),
            Some((ReplCommand::Exit, None))
        ));
        assert!(matches!(
            ReplCommand::parse(".load test.js"),
            Some((ReplCommand::Load, Some("test.js")))
        ));
        assert!(matches!(
            ReplCommand::parse(".matchers whitespace,punctuator"),
            Some((ReplCommand::Matchers, Some("whitespace,punctuator")))
        ));
        assert!(matches!(
            ReplCommand::parse(".JSON"),
            Some((ReplCommand::Json, None))
        ));
        assert!(ReplCommand::parse("not a command").is_none());
        assert!(ReplCommand::parse("...spread").is_none());
    }

    #[test]
    fn test_unterminated_input_continues() {
        let matchers = MatcherSet::standard();
        assert!(is_unterminated("/* open", &matchers));
        assert!(is_unterminated("'open", &matchers));
        // rustyline joins continued lines with a newline
        assert!(is_unterminated("'open\nstill open", &matchers));
        assert!(is_unterminated("\"a\r\nb", &matchers));
        assert!(!is_unterminated("'open\nclosed'", &matchers));
        assert!(!is_unterminated("a /* closed */", &matchers));
        // Errors other than running out of input are reported, not continued
        assert!(!is_unterminated("0b2", &matchers));
    }

    #[test]
    fn test_highlight_keeps_text() {
        let matchers = MatcherSet::standard();
        let source = "x = 'a' // c";
        let plain = highlight_source(source, &matchers);
        assert!(plain.contains("x"));
        assert!(plain.contains("'a'"));
        assert!(plain.contains("// c"));

        // The tail after an error is copied as is
        let broken = highlight_source("a @ b", &matchers);
        assert!(broken.ends_with("@ b"));
    }

    #[test]
    fn test_hint_completes_command() {
        let helper = LexHelper::new(MatcherSet::standard());
        let history = DefaultHistory::new();
        let ctx = rustyline::Context::new(&history);
        assert_eq!(
            helper.hint(".ver", 4, &ctx).map(|h| h.contains("sion")),
            Some(true)
        );
        assert!(helper.hint("x = 1", 5, &ctx).is_none());
    }

    #[test]
    fn test_command_completion() {
        let helper = LexHelper::new(MatcherSet::standard());
        let found: Vec<_> = helper.candidates(".js").collect();
        assert_eq!(found, vec![".json"]);
        assert_eq!(helper.candidates("js").count(), 0);
        assert_eq!(helper.candidates(".json").count(), 0);
    }
}
