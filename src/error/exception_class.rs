use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Exception severity classification.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExceptionClass {
  /// The operation was aborted and had no effect on registry state.
  Error,
}

impl Display for ExceptionClass {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::Error => f.write_str("error"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
