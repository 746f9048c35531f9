use std::{
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use clap::Parser;
use rpncalc::{
    config::{Config, LogLevel},
    evaluate_expression, evaluate_postfix_str,
    logging::init_logging,
};
use tracing::{debug, warn};

/// rpncalc evaluates arithmetic expressions such as `(3 + 4) * 2` and prints
/// their postfix form and value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as postfix text, such as `3 4 +`, and print only the
    /// result.
    #[arg(short, long)]
    rpn: bool,

    /// Minimum level of log messages written to stderr. Overrides
    /// `RPNCALC_LOG_LEVEL`.
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Never show the input prompt, even when stdin is a terminal.
    #[arg(long)]
    no_prompt: bool,

    /// The expression to evaluate. Without it, expressions are read from
    /// stdin, one per line, until end of input.
    expression: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::from_env(args.log_level) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        },
    };
    let config = config.with_prompt(!args.no_prompt && io::stdin().is_terminal());

    init_logging(&config);
    debug!(?config, "configuration loaded");

    match &args.expression {
        Some(expression) => {
            if run_line(expression, args.rpn) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        None => read_print_loop(&config, args.rpn),
    }
}

/// Evaluates one line of input and prints the outcome. Returns `false` if
/// the line failed.
fn run_line(line: &str, rpn: bool) -> bool {
    let outcome = if rpn {
        evaluate_postfix_str(line).map(|value| println!("Result: {value}"))
    } else {
        evaluate_expression(line).map(|evaluation| {
                                     println!("Postfix: {}", evaluation.postfix);
                                     println!("Result: {}", evaluation.value);
                                 })
    };

    if let Err(e) = outcome {
        debug!(kind = ?e.kind(), "expression rejected");
        eprintln!("Error: {e}");
        return false;
    }

    true
}

fn read_print_loop(config: &Config, rpn: bool) -> ExitCode {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        if config.prompt {
            print!("Input expression: ");
            let _ = io::stdout().flush();
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                warn!(error = %e, "failed to read from stdin");
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            },
            None => {
                if config.prompt {
                    println!();
                }
                break;
            },
        };

        let line = line.trim();
        if !line.is_empty() {
            run_line(line, rpn);
        }
    }

    ExitCode::SUCCESS
}
