
use rpn::{parse, postfix_of};
use rpn::expr::evaluate;
use rpn::parsing::operator::OperatorTable;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

/// Evaluates infix arithmetic expressions, honoring the usual operator
/// precedence and associativity.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(after_help = "Set RPN_LOG to error, warn, info, debug, or trace to control logging.")]
struct Args {
  /// Print the postfix (RPN) form instead of the value.
  #[arg(long, conflicts_with = "ast")]
  postfix: bool,

  /// Print the fully parenthesized expression tree instead of the
  /// value.
  #[arg(long)]
  ast: bool,

  /// Expressions to evaluate. With none, one expression is read per
  /// line from standard input.
  #[arg(allow_hyphen_values = true)]
  expressions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
  Value,
  Postfix,
  Ast,
}

impl Args {
  fn output_mode(&self) -> OutputMode {
    if self.postfix {
      OutputMode::Postfix
    } else if self.ast {
      OutputMode::Ast
    } else {
      OutputMode::Value
    }
  }
}

/// Reads the log level for this crate out of an `RPN_LOG` value,
/// defaulting to warnings only.
fn log_level(value: Option<&str>) -> anyhow::Result<LevelFilter> {
  match value {
    Some(level) => level.trim().parse::<LevelFilter>()
      .with_context(|| format!("Invalid RPN_LOG level {level:?}")),
    None => Ok(LevelFilter::WARN),
  }
}

fn init_logging() -> anyhow::Result<()> {
  use tracing_subscriber::{fmt::Layer, prelude::*, filter::Targets};

  let level = log_level(env::var("RPN_LOG").ok().as_deref())?;

  tracing_subscriber::registry()
    .with(Layer::new()
      .with_writer(io::stderr)
      .with_filter(Targets::new()
        .with_default(LevelFilter::WARN)
        .with_target("rpn", level)
      )
    )
    .try_init()?;
  Ok(())
}

fn render(operator_table: &OperatorTable, text: &str, mode: OutputMode) -> Result<String, rpn::error::Error> {
  match mode {
    OutputMode::Value => {
      let expr = parse(operator_table, text)?;
      Ok(evaluate(&expr)?.to_string())
    }
    OutputMode::Postfix => {
      Ok(postfix_of(operator_table, text)?.join(" "))
    }
    OutputMode::Ast => {
      Ok(parse(operator_table, text)?.to_string())
    }
  }
}

/// Prints the result for one expression, or reports its error.
/// Returns whether it succeeded.
fn report(operator_table: &OperatorTable, text: &str, mode: OutputMode) -> bool {
  match render(operator_table, text, mode) {
    Ok(output) => {
      println!("{output}");
      true
    }
    Err(err) => {
      error!("Failed on input {text:?}");
      eprintln!("error: {err}");
      false
    }
  }
}

fn run(args: Args) -> anyhow::Result<bool> {
  init_logging()?;

  let mode = args.output_mode();
  let operator_table = OperatorTable::common();
  let mut all_ok = true;
  if args.expressions.is_empty() {
    info!("Reading expressions from standard input");
    for line in io::stdin().lock().lines() {
      let line = line.context("Failed to read standard input")?;
      if line.trim().is_empty() {
        continue;
      }
      all_ok &= report(operator_table, &line, mode);
    }
  } else {
    for text in &args.expressions {
      all_ok &= report(operator_table, text, mode);
    }
  }
  Ok(all_ok)
}

fn main() -> ExitCode {
  let args = Args::parse();
  match run(args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(err) => {
      eprintln!("rpn: {err:#}");
      ExitCode::from(2)
    }
  }
}
