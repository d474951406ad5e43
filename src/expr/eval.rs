
use super::{Expr, Node};

use tracing::debug;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
  #[error("Operator '{symbol}' has no evaluation rule")]
  UndefinedOperator {
    symbol: String,
  },
  #[error("Operator '{symbol}' evaluates {expected} operands, but was given {actual}")]
  ArityMismatch {
    symbol: String,
    expected: usize,
    actual: usize,
  },
  #[error("Division by zero")]
  DivisionByZero,
  #[error("Operator '{symbol}' produced a value outside the real numbers")]
  Domain {
    symbol: String,
  },
}

/// Reduces an expression to a single number.
pub fn evaluate(expr: &Expr<'_>) -> Result<f64, EvalError> {
  let value = expr.evaluate()?;
  debug!("{expr} evaluated to {value}");
  Ok(value)
}

impl<'t> Expr<'t> {
  pub fn evaluate(&self) -> Result<f64, EvalError> {
    match self {
      Expr::Number(n) => Ok(*n),
      Expr::Node(node) => node.evaluate(),
    }
  }
}

impl<'t> Node<'t> {
  /// Evaluates each child in order, then applies the operator to the
  /// results.
  pub fn evaluate(&self) -> Result<f64, EvalError> {
    let args = self.children.iter()
      .map(Expr::evaluate)
      .collect::<Result<Vec<_>, _>>()?;
    self.operator.apply(&args)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::expr::build_ast;
  use crate::parsing::operator::{Operator, OperatorTable, Associativity, Precedence, EvalRule};
  use crate::parsing::shunting_yard::to_postfix;
  use crate::parsing::tokenizer::tokenize;

  use approx::assert_abs_diff_eq;

  fn eval_with(table: &OperatorTable, text: &str) -> Result<f64, EvalError> {
    let postfix: Vec<_> = to_postfix(table, tokenize(table, text))
      .collect::<Result<_, _>>()
      .unwrap();
    evaluate(&build_ast(table, postfix).unwrap())
  }

  fn eval(text: &str) -> Result<f64, EvalError> {
    eval_with(OperatorTable::common(), text)
  }

  #[test]
  fn test_full_expression() {
    let value = eval("3 + 4* 2.0 / (1.-5) ^ 2 ^3").unwrap();
    assert_eq!(value.round(), 3.0);
    assert_abs_diff_eq!(value, 3.0001220703125, epsilon = 1e-12);
  }

  #[test]
  fn test_right_assoc_power() {
    assert_eq!(eval("2^3^2"), Ok(512.0));
    assert_eq!(eval("(2^3)^2"), Ok(64.0));
  }

  #[test]
  fn test_left_assoc_ops() {
    assert_eq!(eval("10-3-2"), Ok(5.0));
    assert_eq!(eval("64/4/2"), Ok(8.0));
    assert_eq!(eval("10-(3-2)"), Ok(9.0));
  }

  #[test]
  fn test_precedence() {
    assert_eq!(eval("2*3+1"), Ok(7.0));
    assert_eq!(eval("1+2*3"), Ok(7.0));
    assert_eq!(eval("2*3^2"), Ok(18.0));
    assert_eq!(eval("1-2*3+4"), Ok(-1.0));
    assert_eq!(eval("(1+2)*(3+4)"), Ok(21.0));
    assert_abs_diff_eq!(eval("1/3*3").unwrap(), 1.0, epsilon = 1e-12);
  }

  #[test]
  fn test_bare_number() {
    assert_eq!(eval("2.5"), Ok(2.5));
  }

  #[test]
  fn test_division_by_zero() {
    assert_eq!(eval("1/0"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("1/(2-2)"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("0^(0-1)"), Err(EvalError::DivisionByZero));
    assert_eq!(eval("(1-1)^(0-2)*3"), Err(EvalError::DivisionByZero));
  }

  #[test]
  fn test_domain_error() {
    assert_eq!(eval("(0-8)^0.5"), Err(EvalError::Domain { symbol: String::from("^") }));
  }

  #[test]
  fn test_undefined_operator() {
    let mut table = OperatorTable::common_operators();
    table.insert(Operator::new("%", Precedence::new(3), Associativity::Left, 2)).unwrap();
    assert_eq!(
      eval_with(&table, "1 + 7 % 2"),
      Err(EvalError::UndefinedOperator { symbol: String::from("%") }),
    );
  }

  #[test]
  fn test_rule_on_wrong_arity() {
    let mut table = OperatorTable::new();
    table.insert(
      Operator::new("+", Precedence::new(2), Associativity::Left, 3).with_rule(EvalRule::Add),
    ).unwrap();
    let expr = build_ast(&table, ["1", "2", "3", "+"]).unwrap();
    assert_eq!(
      evaluate(&expr),
      Err(EvalError::ArityMismatch { symbol: String::from("+"), expected: 2, actual: 3 }),
    );
  }

  #[test]
  fn test_errors_in_children_propagate() {
    let mut table = OperatorTable::common_operators();
    table.insert(Operator::new("%", Precedence::new(3), Associativity::Left, 2)).unwrap();
    assert_eq!(eval_with(&table, "(1/0) % 2"), Err(EvalError::DivisionByZero));
  }
}
