
/// The precedence of an operator. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u32);

impl Precedence {
  pub const fn new(n: u32) -> Precedence {
    Precedence(n)
  }

  pub const fn value(self) -> u32 {
    self.0
  }
}
