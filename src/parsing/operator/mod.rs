
//! Operators and the table which maps their symbols to their
//! definitions.

mod associativity;
mod precedence;
mod rule;
mod table;

pub use associativity::Associativity;
pub use precedence::Precedence;
pub use rule::EvalRule;
pub use table::{OperatorTable, OperatorTableError};

use crate::expr::EvalError;

/// An operator has a symbol, a precedence, an associativity, and an
/// arity. Operators which carry an [`EvalRule`] can be evaluated;
/// operators without one are known to the parser only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
  symbol: String,
  prec: Precedence,
  assoc: Associativity,
  arity: usize,
  rule: Option<EvalRule>,
}

impl Operator {
  /// Constructs a new operator with no evaluation rule bound.
  pub fn new(
    symbol: impl Into<String>,
    prec: Precedence,
    assoc: Associativity,
    arity: usize,
  ) -> Self {
    Operator {
      symbol: symbol.into(),
      prec,
      assoc,
      arity,
      rule: None,
    }
  }

  /// Constructs a binary operator evaluated by `rule`.
  pub fn binary(
    symbol: impl Into<String>,
    prec: Precedence,
    assoc: Associativity,
    rule: EvalRule,
  ) -> Self {
    Operator::new(symbol, prec, assoc, 2).with_rule(rule)
  }

  pub fn with_rule(mut self, rule: EvalRule) -> Self {
    self.rule = Some(rule);
    self
  }

  pub fn symbol(&self) -> &str {
    &self.symbol
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn arity(&self) -> usize {
    self.arity
  }

  pub fn rule(&self) -> Option<EvalRule> {
    self.rule
  }

  /// Whether `self`, arriving at the shunting yard, should let `other`
  /// (currently on top of the operator stack) be emitted first.
  ///
  /// A left-associative operator yields to anything at least as
  /// strong as itself, while a right-associative operator yields only
  /// to strictly stronger operators, so `a ^ b ^ c` nests to the
  /// right.
  pub fn weaker_than(&self, other: &Operator) -> bool {
    match self.assoc {
      Associativity::Left => self.prec <= other.prec,
      Associativity::Right => self.prec < other.prec,
    }
  }

  /// Applies this operator's evaluation rule to already-evaluated
  /// operands.
  pub fn apply(&self, args: &[f64]) -> Result<f64, EvalError> {
    let rule = self.rule.ok_or_else(|| EvalError::UndefinedOperator {
      symbol: self.symbol.clone(),
    })?;
    rule.apply(&self.symbol, args)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn left(prec: u32) -> Operator {
    Operator::binary("#", Precedence::new(prec), Associativity::Left, EvalRule::Add)
  }

  fn right(prec: u32) -> Operator {
    Operator::binary("#", Precedence::new(prec), Associativity::Right, EvalRule::Power)
  }

  #[test]
  fn test_left_assoc_weaker_than_itself() {
    let op = left(2);
    assert!(op.weaker_than(&op));
  }

  #[test]
  fn test_right_assoc_not_weaker_than_itself() {
    let op = right(4);
    assert!(!op.weaker_than(&op));
  }

  #[test]
  fn test_weaker_than_across_precedences() {
    assert!(left(2).weaker_than(&left(3)));
    assert!(!left(3).weaker_than(&left(2)));
    assert!(right(3).weaker_than(&right(4)));
    assert!(!right(4).weaker_than(&left(3)));
  }

  #[test]
  fn test_apply_without_rule() {
    let op = Operator::new("%", Precedence::new(3), Associativity::Left, 2);
    assert_eq!(op.rule(), None);
    assert_eq!(
      op.apply(&[1.0, 2.0]),
      Err(EvalError::UndefinedOperator { symbol: String::from("%") }),
    );
  }

  #[test]
  fn test_apply_with_rule() {
    let op = Operator::binary("-", Precedence::new(2), Associativity::Left, EvalRule::Subtract);
    assert_eq!(op.apply(&[10.0, 3.0]), Ok(7.0));
  }
}
