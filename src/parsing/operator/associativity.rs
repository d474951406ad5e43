
/// The associativity of an infix operator, which decides how repeated
/// applications of operators at the same precedence level group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
  /// `a # b # c` groups as `(a # b) # c`.
  Left,
  /// `a # b # c` groups as `a # (b # c)`.
  Right,
}
