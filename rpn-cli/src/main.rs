use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use log::{debug, info, LevelFilter};
use rpn::interpreter::evaluate;
use rpn::interpreter::evaluator::evaluate_postfix;
use rpn::interpreter::parser::convert_infix_to_postfix;
use std::io;
use std::io::BufRead;

/// Converts and evaluates arithmetic expressions using reverse polish notation
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    #[clap(subcommand)]
    command: Command,

    #[clap(flatten)]
    verbose: Verbosity,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates an infix expression, e.g. "3 + (4 * 2 + 1) / (1 - 5)"
    Eval {
        /// The expression to evaluate. Read line by line from stdin if omitted
        expression: Option<String>,
    },
    /// Converts an infix expression to postfix notation
    Convert {
        /// The expression to convert. Read line by line from stdin if omitted
        expression: Option<String>,
    },
    /// Evaluates a postfix expression, e.g. "1 2 + 4 * 3 +"
    Postfix {
        /// The expression to evaluate. Read line by line from stdin if omitted
        expression: Option<String>,
    },
}

impl Command {
    fn expression(&self) -> Option<&str> {
        match self {
            Command::Eval { expression }
            | Command::Convert { expression }
            | Command::Postfix { expression } => expression.as_deref(),
        }
    }

    fn run(&self, expression: &str) -> Result<String> {
        let output = match self {
            Command::Eval { .. } => evaluate(expression)
                .with_context(|| format!("could not evaluate `{}`", expression))?
                .to_string(),
            Command::Convert { .. } => convert_infix_to_postfix(expression)
                .with_context(|| format!("could not convert `{}`", expression))?,
            Command::Postfix { .. } => evaluate_postfix(expression)
                .with_context(|| format!("could not evaluate postfix `{}`", expression))?
                .to_string(),
        };
        Ok(output)
    }
}

/// Logs at the verbosity given on the command line, unless `RUST_LOG` says otherwise.
fn logger(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    builder
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    logger(args.verbose.log_level_filter()).init();
    debug!("{:?}", args);

    match args.command.expression() {
        Some(expression) => println!("{}", args.command.run(expression)?),
        None => {
            info!("reading expressions from stdin");
            for line in io::stdin().lock().lines() {
                let line = line.context("failed to read from stdin")?;
                if line.trim().is_empty() {
                    continue;
                }
                println!("{}", args.command.run(&line)?);
            }
        }
    }
    Ok(())
}
