
use crate::expr::{BuildError, EvalError};
use crate::parsing::shunting_yard::ShuntingYardError;

use thiserror::Error;

/// Any failure along the path from text to value.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ShuntingYardError(#[from] ShuntingYardError),
  #[error("{0}")]
  BuildError(#[from] BuildError),
  #[error("{0}")]
  EvalError(#[from] EvalError),
}
