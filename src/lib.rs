
//! A small infix arithmetic engine.
//!
//! Text is split into tokens, reordered into postfix form with the
//! shunting yard algorithm, assembled into an expression tree, and
//! finally evaluated:
//!
//! ```text
//! "1 + 2 * 3" -> [1, +, 2, *, 3] -> [1, 2, 3, *, +] -> (1 + (2 * 3)) -> 7
//! ```

pub mod error;
pub mod expr;
pub mod parsing;
pub mod stack;

use error::Error;
use expr::{build_ast, evaluate, Expr};
use parsing::operator::OperatorTable;
use parsing::shunting_yard::to_postfix;
use parsing::tokenizer::tokenize;

/// Converts `text` to postfix order, returning the whole token list.
pub fn postfix_of(operator_table: &OperatorTable, text: &str) -> Result<Vec<String>, Error> {
  let tokens = to_postfix(operator_table, tokenize(operator_table, text))
    .collect::<Result<Vec<_>, _>>()?;
  Ok(tokens)
}

/// Parses `text` into an expression tree.
pub fn parse<'t>(operator_table: &'t OperatorTable, text: &str) -> Result<Expr<'t>, Error> {
  let postfix = postfix_of(operator_table, text)?;
  Ok(build_ast(operator_table, postfix)?)
}

/// Parses and evaluates `text`.
pub fn calculate(operator_table: &OperatorTable, text: &str) -> Result<f64, Error> {
  let expr = parse(operator_table, text)?;
  Ok(evaluate(&expr)?)
}

/// Parses and evaluates `text` using the [common
/// operators](OperatorTable::common).
pub fn evaluate_str(text: &str) -> Result<f64, Error> {
  calculate(OperatorTable::common(), text)
}
