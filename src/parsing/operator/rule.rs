
use crate::expr::EvalError;

/// The arithmetic an operator performs when evaluated. Every built-in
/// rule is binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalRule {
  Power,
  Multiply,
  Divide,
  Add,
  Subtract,
}

impl EvalRule {
  /// The number of operands this rule consumes.
  pub const fn arity(self) -> usize {
    2
  }

  /// Applies the rule to `args`. `symbol` names the operator in any
  /// resulting error.
  pub fn apply(self, symbol: &str, args: &[f64]) -> Result<f64, EvalError> {
    let &[a, b] = args else {
      return Err(EvalError::ArityMismatch {
        symbol: symbol.to_owned(),
        expected: self.arity(),
        actual: args.len(),
      });
    };
    let result = match self {
      EvalRule::Power => {
        // Zero to a negative power is a division by zero in disguise.
        if a == 0.0 && b < 0.0 {
          return Err(EvalError::DivisionByZero);
        }
        a.powf(b)
      }
      EvalRule::Multiply => a * b,
      EvalRule::Divide => {
        if b == 0.0 {
          return Err(EvalError::DivisionByZero);
        }
        a / b
      }
      EvalRule::Add => a + b,
      EvalRule::Subtract => a - b,
    };
    if result.is_nan() && !a.is_nan() && !b.is_nan() {
      return Err(EvalError::Domain { symbol: symbol.to_owned() });
    }
    Ok(result)
  }
}
