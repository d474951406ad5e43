
use super::{Expr, Node};
use crate::parsing::operator::OperatorTable;
use crate::stack::{Stack, StackError};

use tracing::debug;
use thiserror::Error;

use std::num::ParseFloatError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
  #[error("Operator '{symbol}' needs {expected} operands, but only {actual} are available")]
  StackUnderflow {
    symbol: String,
    expected: usize,
    actual: usize,
  },
  #[error("Failed to parse number '{token}'")]
  ParseNumber {
    token: String,
    #[source]
    source: ParseFloatError,
  },
  #[error("Empty expression")]
  EmptyExpression,
  #[error("Missing operator, {operands} operands remain after parsing")]
  MissingOperator {
    operands: usize,
  },
}

/// Builds an expression tree from tokens in postfix order.
///
/// Every token found in `operator_table` becomes a [`Node`] taking
/// its operands from the tokens before it, and every other token must
/// parse as a floating-point number.
pub fn build_ast<'t, I>(operator_table: &'t OperatorTable, postfix: I) -> Result<Expr<'t>, BuildError>
where I : IntoIterator,
      I::Item : AsRef<str> {
  let mut stack: Stack<Expr<'t>> = Stack::new();
  for token in postfix {
    let token = token.as_ref();
    if let Some(op) = operator_table.get(token) {
      let children = stack.pop_several(op.arity()).map_err(|err| match err {
        StackError::NotEnoughElements { expected, actual } => {
          BuildError::StackUnderflow { symbol: op.symbol().to_owned(), expected, actual }
        }
      })?;
      stack.push(Expr::Node(Node::new(op, children)));
    } else {
      let n = token.parse::<f64>().map_err(|source| {
        BuildError::ParseNumber { token: token.to_owned(), source }
      })?;
      stack.push(Expr::Number(n));
    }
  }
  match stack.len() {
    0 => Err(BuildError::EmptyExpression),
    1 => {
      // unwrap: The stack has exactly one element.
      let expr = stack.pop().unwrap();
      debug!("built expression {expr}");
      Ok(expr)
    }
    operands => Err(BuildError::MissingOperator { operands }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::parsing::operator::{Operator, Associativity, Precedence};
  use crate::parsing::shunting_yard::to_postfix;
  use crate::parsing::tokenizer::tokenize;

  fn build(text: &str) -> Result<Expr<'static>, BuildError> {
    let table = OperatorTable::common();
    let postfix: Vec<_> = to_postfix(table, tokenize(table, text))
      .collect::<Result<_, _>>()
      .unwrap();
    build_ast(table, postfix)
  }

  fn node(symbol: &str, left: impl Into<Expr<'static>>, right: impl Into<Expr<'static>>) -> Expr<'static> {
    let op = OperatorTable::common().get(symbol).unwrap();
    Expr::Node(Node::new(op, vec![left.into(), right.into()]))
  }

  #[test]
  fn test_full_expression() {
    // 3 + ((4 * 2) / ((1 - 5) ^ (2 ^ 3)))
    let expected = node(
      "+",
      3.0,
      node(
        "/",
        node("*", 4.0, 2.0),
        node("^", node("-", 1.0, 5.0), node("^", 2.0, 3.0)),
      ),
    );
    assert_eq!(build("3 + 4* 2.0 / (1.-5) ^ 2 ^3").unwrap(), expected);
  }

  #[test]
  fn test_children_in_source_order() {
    assert_eq!(build("10-3").unwrap(), node("-", 10.0, 3.0));
    assert_eq!(build("10-3-2").unwrap(), node("-", node("-", 10.0, 3.0), 2.0));
  }

  #[test]
  fn test_bare_number() {
    assert_eq!(build("42").unwrap(), Expr::Number(42.0));
    assert_eq!(build("(.5)").unwrap(), Expr::Number(0.5));
  }

  #[test]
  fn test_stack_underflow() {
    assert_eq!(
      build("1+"),
      Err(BuildError::StackUnderflow { symbol: String::from("+"), expected: 2, actual: 1 }),
    );
    assert_eq!(
      build("+"),
      Err(BuildError::StackUnderflow { symbol: String::from("+"), expected: 2, actual: 0 }),
    );
  }

  #[test]
  fn test_parse_number_error() {
    let err = build("1 + abc").unwrap_err();
    assert!(matches!(err, BuildError::ParseNumber { ref token, .. } if token == "abc"));
    assert!(matches!(build("1..2"), Err(BuildError::ParseNumber { .. })));
  }

  #[test]
  fn test_empty_expression() {
    assert_eq!(build(""), Err(BuildError::EmptyExpression));
    assert_eq!(build("()"), Err(BuildError::EmptyExpression));
  }

  #[test]
  fn test_missing_operator() {
    let table = OperatorTable::common();
    assert_eq!(build_ast(table, ["1", "2"]), Err(BuildError::MissingOperator { operands: 2 }));
    assert_eq!(build("(1)(2)(3)"), Err(BuildError::MissingOperator { operands: 3 }));
  }

  #[test]
  fn test_other_arities() {
    let mut table = OperatorTable::new();
    table.insert(Operator::new("?", Precedence::new(1), Associativity::Left, 3)).unwrap();
    let expr = build_ast(&table, ["1", "2", "3", "?"]).unwrap();
    match expr {
      Expr::Node(node) => {
        assert_eq!(node.operator().symbol(), "?");
        assert_eq!(node.children(), &[Expr::Number(1.0), Expr::Number(2.0), Expr::Number(3.0)]);
      }
      other => panic!("expected a node, got {other:?}"),
    }
  }
}
