
//! Turning text into postfix token streams.

pub mod operator;
pub mod shunting_yard;
pub mod tokenizer;

pub const LEFT_PAREN: char = '(';
pub const RIGHT_PAREN: char = ')';

/// Separates fragments of a compound (non-operator) run of characters.
pub const COMMA: char = ',';
