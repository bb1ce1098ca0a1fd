use std::collections::HashSet;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use itertools::Itertools;
use krypto_checker::{
    compute_impossibles, distinct_hands, find_answers, verify_answer, AssignedFormula,
    MAX_CARD_NUMBER, NUM_HAND_CARDS,
};
use krypto_parser::ParserConfig;
use log::LevelFilter;
use serde::Serialize;

mod evaluate;
mod repl;
mod settings;

use evaluate::{evaluate_source, render_snippet, Outcome};
use repl::{describe_verdict, run_repl};

#[derive(Debug, Parser)]
#[command(
    name = "krypto",
    version,
    about = "Parse, check and solve Krypto card puzzles",
    long_about = "krypto evaluates arithmetic answers to Krypto puzzles and searches for solutions.\n\n\
        An answer uses non-negative integers, parentheses and + - * /.\n\n\
        EXAMPLES:\n\
        \n  echo '(1 + 2) * 3' | krypto eval                 Evaluate an answer\n\
        \n  krypto check --cards 1,2,3,4,5 --target 7 a.txt   Check an answer file\n\
        \n  krypto solve --cards 1,3,4,6,9 --target 10 -n 3   Show three solutions\n\
        \n  krypto impossibles --cards 1,1,1,1,1              List unreachable targets\n\
        \n  krypto repl                                       Start an interactive session"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Maximum cursor operations per parse (overrides KRYPTO_SCAN_LIMIT)
    #[arg(long = "scan-limit", value_name = "N", global = true)]
    scan_limit: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate an answer and print its value
    Eval(InputArgs),

    /// Print the parsed formula tree as JSON
    Json(InputArgs),

    /// Check an answer against a hand and a target
    Check(CheckArgs),

    /// Search for formulas over a hand that reach a target
    Solve(SolveArgs),

    /// List targets in 1..=10 that a hand cannot reach
    Impossibles(HandArgs),

    /// List every dealable hand that has unreachable targets
    Survey,

    /// Start an interactive session
    Repl,
}

#[derive(Debug, Args, Clone)]
struct InputArgs {
    /// File holding the answer (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
struct HandArgs {
    /// Comma-separated cards, e.g. 1,2,3,4,5
    #[arg(
        long,
        value_delimiter = ',',
        required = true,
        allow_negative_numbers = true
    )]
    cards: Vec<i64>,
}

#[derive(Debug, Args, Clone)]
struct CheckArgs {
    #[command(flatten)]
    hand: HandArgs,

    #[arg(long)]
    target: i64,

    /// Print the verdict as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    input: InputArgs,
}

#[derive(Debug, Args, Clone)]
struct SolveArgs {
    #[command(flatten)]
    hand: HandArgs,

    #[arg(long)]
    target: i64,

    /// Maximum number of solutions to print
    #[arg(short = 'n', long, default_value_t = 1)]
    limit: usize,

    /// Print solutions as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct Answer {
    formula: AssignedFormula,
    display: String,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

fn read_source_from_input(input: &Option<PathBuf>) -> Result<String, String> {
    if let Some(path) = input {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {e}", path.display()))
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        Ok(buf)
    }
}

fn run_eval(args: &InputArgs, config: ParserConfig, as_json: bool) -> i32 {
    let source = match read_source_from_input(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    match evaluate_source(&source, config) {
        Ok(Outcome::Value {
            formula,
            value,
            trailing,
        }) => {
            if let Some(position) = trailing {
                eprintln!(
                    "warning: ignoring trailing input\n{}",
                    render_snippet(&source, position, "formula ends here")
                );
            }
            if as_json {
                match krypto_ast::to_json(&formula) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("error: failed to serialize formula: {e}");
                        return 2;
                    }
                }
            } else {
                println!("{value}");
            }
            0
        }
        Ok(Outcome::NoMatch { position }) => {
            eprintln!(
                "error: could not parse formula\n{}",
                render_snippet(&source, position, "scanning stopped here")
            );
            1
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_check(args: &CheckArgs, config: ParserConfig) -> i32 {
    let source = match read_source_from_input(&args.input.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let answer = source.trim_end_matches(&['\n', '\r'][..]);

    let verdict = match verify_answer(&args.hand.cards, args.target, answer, config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&verdict) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize verdict: {e}");
                return 2;
            }
        }
    } else {
        println!("{}", describe_verdict(&verdict, args.target));
    }

    if verdict.is_correct() { 0 } else { 1 }
}

fn run_solve(args: &SolveArgs) -> i32 {
    let answers: Vec<Answer> = match find_answers(&args.hand.cards, args.target) {
        Ok(iter) => iter
            .take(args.limit)
            .map(|formula| Answer {
                display: formula.to_string(),
                formula,
            })
            .collect(),
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&answers) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize answers: {e}");
                return 2;
            }
        }
    } else if answers.is_empty() {
        println!("no solution");
    } else {
        for answer in &answers {
            println!("{}", answer.display);
        }
    }

    if answers.is_empty() { 1 } else { 0 }
}

fn target_range() -> HashSet<i64> {
    (1..=MAX_CARD_NUMBER).collect()
}

fn format_targets(set: HashSet<i64>) -> String {
    format!("{:?}", set.into_iter().sorted().collect_vec())
}

fn run_impossibles(args: &HandArgs) -> i32 {
    match compute_impossibles(&args.cards, target_range()) {
        Ok(impossibles) => {
            println!("{}", format_targets(impossibles));
            0
        }
        Err(e) => {
            eprintln!("error: {e}");
            2
        }
    }
}

fn run_survey() -> i32 {
    for hand in distinct_hands(NUM_HAND_CARDS) {
        let impossibles = match compute_impossibles(&hand, target_range()) {
            Ok(set) => set,
            Err(e) => {
                eprintln!("error: {e}");
                return 2;
            }
        };
        if !impossibles.is_empty() {
            println!("{hand:?} != {}", format_targets(impossibles));
        }
    }
    0
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = settings::parser_config(cli.scan_limit);
    log::debug!("parser config: {config:?}");

    let cmd = cli
        .command
        .unwrap_or(Command::Eval(InputArgs { input: None }));

    match cmd {
        Command::Eval(args) => run_eval(&args, config, false),
        Command::Json(args) => run_eval(&args, config, true),
        Command::Check(args) => run_check(&args, config),
        Command::Solve(args) => run_solve(&args),
        Command::Impossibles(args) => run_impossibles(&args),
        Command::Survey => run_survey(),
        Command::Repl => run_repl(config),
    }
}

fn main() {
    std::process::exit(run_cli());
}
