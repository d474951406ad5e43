
//! The working stack shared by the shunting yard converter and the
//! AST builder.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
