
//! Splits raw text into token strings.
//!
//! Operator characters and parentheses always stand alone as
//! tokens. Everything else accumulates into a "compound" run which
//! becomes a token (or several, split at commas) once an operator or
//! parenthesis appears, or when the input ends. Whitespace separates
//! nothing; it is simply dropped.

use super::{COMMA, LEFT_PAREN, RIGHT_PAREN};
use super::operator::OperatorTable;

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;
use std::str::Chars;

/// Lazy iterator over the tokens of an input string. Construct one
/// with [`tokenize`].
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, 't> {
  operator_table: &'t OperatorTable,
  input: Chars<'a>,
  pending: String,
  ready: VecDeque<String>,
}

/// Tokenizes `text`, recognizing the single-character operator
/// symbols in `operator_table`.
pub fn tokenize<'a, 't>(operator_table: &'t OperatorTable, text: &'a str) -> Tokenizer<'a, 't> {
  Tokenizer {
    operator_table,
    input: text.chars(),
    pending: String::new(),
    ready: VecDeque::new(),
  }
}

impl<'a, 't> Tokenizer<'a, 't> {
  fn is_standalone(&self, ch: char) -> bool {
    ch == LEFT_PAREN || ch == RIGHT_PAREN || self.operator_table.is_operator_char(ch)
  }

  /// Moves the pending compound run into the ready queue, one token
  /// per non-empty comma-separated fragment.
  fn flush_pending(&mut self) {
    let pending = mem::take(&mut self.pending);
    let fragments = pending.split(COMMA).filter(|s| !s.is_empty()).map(str::to_owned);
    self.ready.extend(fragments);
  }
}

impl<'a, 't> Iterator for Tokenizer<'a, 't> {
  type Item = String;

  fn next(&mut self) -> Option<String> {
    loop {
      if let Some(token) = self.ready.pop_front() {
        return Some(token);
      }
      match self.input.next() {
        None => {
          if self.pending.is_empty() {
            return None;
          }
          self.flush_pending();
        }
        Some(ch) if ch.is_whitespace() => {}
        Some(ch) if self.is_standalone(ch) => {
          self.flush_pending();
          self.ready.push_back(ch.to_string());
        }
        Some(ch) => {
          self.pending.push(ch);
        }
      }
    }
  }
}

impl<'a, 't> FusedIterator for Tokenizer<'a, 't> {}
