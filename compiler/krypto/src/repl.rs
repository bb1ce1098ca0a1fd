use krypto_checker::{verify_answer, Verdict};
use krypto_parser::ParserConfig;

use crate::evaluate::{evaluate_source, render_snippet, Outcome};

/// Puzzle the REPL checks answers against.
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    pub cards: Vec<i64>,
    pub target: i64,
}

#[derive(Debug)]
pub struct ReplSession {
    config: ParserConfig,
    puzzle: Option<Puzzle>,
}

impl ReplSession {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            puzzle: None,
        }
    }

    pub fn prompt(&self) -> &'static str {
        if self.puzzle.is_some() {
            "krypto?> "
        } else {
            "krypto> "
        }
    }

    /// Handles one input line. Returns the lines to print and whether to exit.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }
        if trimmed.starts_with(':') {
            return self.handle_command(trimmed);
        }
        (self.submit(line), false)
    }

    fn handle_command(&mut self, line: &str) -> (Vec<String>, bool) {
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or_default();
        match command {
            ":help" => (
                vec![
                    "commands: :help, :quit, :puzzle <cards> <target>, :clear".to_string(),
                    "example: :puzzle 1,2,3,4,5 7".to_string(),
                    "any other line is evaluated as a formula".to_string(),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":clear" => {
                self.puzzle = None;
                (vec!["puzzle cleared".to_string()], false)
            }
            ":puzzle" => {
                let cards = words.next().map(parse_cards);
                let target = words.next().map(str::parse::<i64>);
                match (cards, target) {
                    (Some(Ok(cards)), Some(Ok(target))) => {
                        let msg = format!("puzzle: cards {cards:?}, target {target}");
                        self.puzzle = Some(Puzzle { cards, target });
                        (vec![msg], false)
                    }
                    _ => (
                        vec!["error: usage: :puzzle <c1,c2,...> <target>".to_string()],
                        false,
                    ),
                }
            }
            other => (vec![format!("error: unknown command '{other}'")], false),
        }
    }

    fn submit(&self, line: &str) -> Vec<String> {
        if let Some(puzzle) = &self.puzzle {
            return match verify_answer(&puzzle.cards, puzzle.target, line, self.config) {
                Ok(verdict) => vec![describe_verdict(&verdict, puzzle.target)],
                Err(e) => vec![format!("error: {e}")],
            };
        }

        match evaluate_source(line, self.config) {
            Ok(Outcome::Value {
                value,
                trailing: None,
                ..
            }) => vec![value.to_string()],
            Ok(Outcome::Value {
                value,
                trailing: Some(position),
                ..
            }) => vec![
                render_snippet(line, position, "ignored trailing input"),
                value.to_string(),
            ],
            Ok(Outcome::NoMatch { position }) => {
                vec![render_snippet(line, position, "could not parse formula")]
            }
            Err(e) => vec![format!("error: {e}")],
        }
    }
}

pub fn describe_verdict(verdict: &Verdict, target: i64) -> String {
    match verdict {
        Verdict::Unparsable => "could not parse formula".to_string(),
        Verdict::WrongCards { used } => format!("wrong cards: formula uses {used:?}"),
        Verdict::WrongValue { value } => format!("{value} is not {target}"),
        Verdict::Correct { value } => format!("correct: {value}"),
    }
}

/// Parses a comma-separated card list such as `1,2,3`.
pub fn parse_cards(s: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    s.split(',').map(|c| c.trim().parse()).collect()
}

pub fn run_repl(config: ParserConfig) -> i32 {
    use rustyline::error::ReadlineError;
    use rustyline::Editor;
    let mut rl = match Editor::<(), rustyline::history::DefaultHistory>::new() {
        Ok(e) => e,
        Err(e) => {
            eprintln!("error: failed to initialize repl: {e}");
            return 2;
        }
    };

    let mut session = ReplSession::new(config);
    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let (out, exit) = session.handle_line(&line);
                for l in out {
                    println!("{l}");
                }
                if exit {
                    return 0;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return 0,
            Err(e) => {
                eprintln!("error: repl failed: {e}");
                return 2;
            }
        }
    }
}
