
//! Reorders infix tokens into postfix (reverse Polish) order.

use super::{LEFT_PAREN, RIGHT_PAREN};
use super::operator::{Operator, OperatorTable};
use crate::stack::Stack;

use tracing::trace;
use thiserror::Error;

use std::collections::VecDeque;
use std::fmt::{self, Display, Formatter};
use std::iter::FusedIterator;

/// Lazy iterator producing postfix tokens. Construct one with
/// [`to_postfix`].
///
/// Once an error has been produced, the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Postfix<'t, I> {
  operator_table: &'t OperatorTable,
  input: I,
  operator_stack: Stack<StackEntry<'t>>,
  ready: VecDeque<String>,
  finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry<'t> {
  LeftParen,
  Operator(&'t Operator),
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShuntingYardError {
  #[error("Mismatched parentheses: unmatched {0}")]
  ParenthesesMismatch(Unmatched),
}

/// Which side of a parenthesis pair went unmatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unmatched {
  Left,
  Right,
}

/// Converts a sequence of infix tokens into postfix order, using
/// `operator_table` to recognize operators. Tokens which are neither
/// operators nor parentheses are passed through untouched.
pub fn to_postfix<'t, I>(operator_table: &'t OperatorTable, tokens: I) -> Postfix<'t, I::IntoIter>
where I : IntoIterator,
      I::Item : AsRef<str> {
  Postfix {
    operator_table,
    input: tokens.into_iter(),
    operator_stack: Stack::new(),
    ready: VecDeque::new(),
    finished: false,
  }
}

impl<'t, I> Postfix<'t, I> {
  fn accept(&mut self, token: &str) -> Result<(), ShuntingYardError> {
    let operator_table = self.operator_table;
    if let Some(op) = operator_table.get(token) {
      // Emit stacked operators which bind at least as tightly as
      // `op`. A left parenthesis stops the search.
      while let Some(entry) = self.operator_stack.pop_if(|entry| {
        matches!(entry, StackEntry::Operator(top) if op.weaker_than(top))
      }) {
        self.ready.push_back(entry.to_string());
      }
      self.operator_stack.push(StackEntry::Operator(op));
    } else if is_paren(token, LEFT_PAREN) {
      self.operator_stack.push(StackEntry::LeftParen);
    } else if is_paren(token, RIGHT_PAREN) {
      loop {
        match self.operator_stack.pop() {
          Ok(StackEntry::LeftParen) => break,
          Ok(entry) => self.ready.push_back(entry.to_string()),
          Err(_) => return Err(ShuntingYardError::ParenthesesMismatch(Unmatched::Right)),
        }
      }
    } else {
      self.ready.push_back(token.to_owned());
    }
    Ok(())
  }

  fn drain(&mut self) -> Result<(), ShuntingYardError> {
    if self.operator_stack.iter().any(|entry| *entry == StackEntry::LeftParen) {
      return Err(ShuntingYardError::ParenthesesMismatch(Unmatched::Left));
    }
    while let Ok(entry) = self.operator_stack.pop() {
      self.ready.push_back(entry.to_string());
    }
    Ok(())
  }

  fn fail(&mut self, err: ShuntingYardError) -> Option<Result<String, ShuntingYardError>> {
    self.finished = true;
    self.ready.clear();
    Some(Err(err))
  }
}

impl<'t, I> Iterator for Postfix<'t, I>
where I : Iterator,
      I::Item : AsRef<str> {
  type Item = Result<String, ShuntingYardError>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      if let Some(token) = self.ready.pop_front() {
        trace!("postfix token {token:?}");
        return Some(Ok(token));
      }
      if self.finished {
        return None;
      }
      match self.input.next() {
        Some(token) => {
          if let Err(err) = self.accept(token.as_ref()) {
            return self.fail(err);
          }
        }
        None => {
          self.finished = true;
          if let Err(err) = self.drain() {
            return self.fail(err);
          }
        }
      }
    }
  }
}

impl<'t, I> FusedIterator for Postfix<'t, I>
where I : Iterator,
      I::Item : AsRef<str> {}

fn is_paren(token: &str, paren: char) -> bool {
  let mut chars = token.chars();
  chars.next() == Some(paren) && chars.next().is_none()
}

impl<'t> Display for StackEntry<'t> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      StackEntry::LeftParen => write!(f, "{LEFT_PAREN}"),
      StackEntry::Operator(op) => write!(f, "{}", op.symbol()),
    }
  }
}

impl Display for Unmatched {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Unmatched::Left => write!(f, "'{LEFT_PAREN}'"),
      Unmatched::Right => write!(f, "'{RIGHT_PAREN}'"),
    }
  }
}
