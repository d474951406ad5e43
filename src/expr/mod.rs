
//! Expression trees built from postfix token streams.

mod builder;
mod eval;

pub use builder::{build_ast, BuildError};
pub use eval::{evaluate, EvalError};

use crate::parsing::operator::Operator;

use itertools::Itertools;

use std::fmt::{self, Display, Formatter};

/// An expression: either a numeric leaf or an operator application.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'t> {
  Number(f64),
  Node(Node<'t>),
}

/// An operator applied to exactly as many operands as its arity
/// demands. The operator itself is borrowed from the table which
/// recognized it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<'t> {
  operator: &'t Operator,
  children: Vec<Expr<'t>>,
}

impl<'t> Node<'t> {
  /// Constructs a node applying `operator` to `children`, in source
  /// order. Returns `None` if the number of children does not match
  /// the operator's arity.
  pub fn try_new(operator: &'t Operator, children: Vec<Expr<'t>>) -> Option<Self> {
    if children.len() == operator.arity() {
      Some(Node { operator, children })
    } else {
      None
    }
  }

  /// As [`Node::try_new`], for callers which have already popped
  /// exactly `operator.arity()` children.
  pub(crate) fn new(operator: &'t Operator, children: Vec<Expr<'t>>) -> Self {
    debug_assert_eq!(children.len(), operator.arity());
    Node { operator, children }
  }

  pub fn operator(&self) -> &'t Operator {
    self.operator
  }

  pub fn children(&self) -> &[Expr<'t>] {
    &self.children
  }
}

impl<'t> From<f64> for Expr<'t> {
  fn from(n: f64) -> Self {
    Expr::Number(n)
  }
}

impl<'t> From<Node<'t>> for Expr<'t> {
  fn from(node: Node<'t>) -> Self {
    Expr::Node(node)
  }
}

impl<'t> Display for Expr<'t> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Expr::Number(n) => write!(f, "{n}"),
      Expr::Node(node) => node.fmt(f),
    }
  }
}

/// Nodes display fully parenthesized, with the operator between each
/// pair of operands.
impl<'t> Display for Node<'t> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let separator = format!(" {} ", self.operator.symbol());
    write!(f, "({})", self.children.iter().join(&separator))
  }
}
