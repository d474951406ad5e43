
use super::{Operator, EvalRule};
use super::precedence::Precedence;
use super::associativity::Associativity;
use crate::parsing::{LEFT_PAREN, RIGHT_PAREN};

use once_cell::sync::Lazy;
use thiserror::Error;

use std::collections::{hash_map, HashMap};

static COMMON_OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::common_operators);

/// A table of operators, indexed by their symbol.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  mapping: HashMap<String, Operator>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum OperatorTableError {
  #[error("Operator symbol must not be empty")]
  EmptySymbol,
  #[error("Operator symbol '{0}' must not contain parentheses")]
  ContainsParenthesis(String),
  #[error("Operator symbol '{0}' must not contain whitespace")]
  ContainsWhitespace(String),
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      mapping: HashMap::with_capacity(capacity),
    }
  }

  /// The process-wide table of [common
  /// operators](OperatorTable::common_operators). It is built on first
  /// use and never modified afterward.
  pub fn common() -> &'static OperatorTable {
    &COMMON_OPERATORS
  }

  pub fn get(&self, symbol: &str) -> Option<&Operator> {
    self.mapping.get(symbol)
  }

  pub fn contains(&self, symbol: &str) -> bool {
    self.mapping.contains_key(symbol)
  }

  /// Whether the single character `ch` is, by itself, the symbol of a
  /// known operator.
  pub fn is_operator_char(&self, ch: char) -> bool {
    let mut buf = [0; 4];
    self.contains(ch.encode_utf8(&mut buf))
  }

  /// Adds an operator to the table, returning the operator previously
  /// registered under the same symbol, if any.
  pub fn insert(&mut self, op: Operator) -> Result<Option<Operator>, OperatorTableError> {
    validate_symbol(op.symbol())?;
    let symbol = op.symbol().to_owned();
    Ok(self.mapping.insert(symbol, op))
  }

  /// Builds a table from a sequence of operators. Later operators
  /// replace earlier ones with the same symbol.
  pub fn try_from_iter<I>(iter: I) -> Result<OperatorTable, OperatorTableError>
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op)?;
    }
    Ok(table)
  }

  /// The usual arithmetic operators: `^` binds tightest and groups to
  /// the right, then `*` and `/`, then `+` and `-`.
  pub fn common_operators() -> OperatorTable {
    let operators = vec![
      Operator::binary("^", Precedence::new(4), Associativity::Right, EvalRule::Power),
      Operator::binary("*", Precedence::new(3), Associativity::Left, EvalRule::Multiply),
      Operator::binary("/", Precedence::new(3), Associativity::Left, EvalRule::Divide),
      Operator::binary("+", Precedence::new(2), Associativity::Left, EvalRule::Add),
      Operator::binary("-", Precedence::new(2), Associativity::Left, EvalRule::Subtract),
    ];
    // unwrap: None of the above symbols contain parentheses or whitespace.
    OperatorTable::try_from_iter(operators).unwrap()
  }

  pub fn iter(&self) -> impl Iterator<Item = &Operator> {
    self.mapping.values()
  }

  pub fn len(&self) -> usize {
    self.mapping.len()
  }

  pub fn is_empty(&self) -> bool {
    self.mapping.is_empty()
  }
}

fn validate_symbol(symbol: &str) -> Result<(), OperatorTableError> {
  if symbol.is_empty() {
    Err(OperatorTableError::EmptySymbol)
  } else if symbol.contains([LEFT_PAREN, RIGHT_PAREN]) {
    Err(OperatorTableError::ContainsParenthesis(symbol.to_owned()))
  } else if symbol.contains(char::is_whitespace) {
    Err(OperatorTableError::ContainsWhitespace(symbol.to_owned()))
  } else {
    Ok(())
  }
}

impl IntoIterator for OperatorTable {
  type Item = Operator;
  type IntoIter = hash_map::IntoValues<String, Operator>;

  fn into_iter(self) -> Self::IntoIter {
    self.mapping.into_values()
  }
}
