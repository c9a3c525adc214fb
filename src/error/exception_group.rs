use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Exception category indicating the nature of the error.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExceptionGroup {
  /// Invalid argument or caller-supplied value.
  ///
  /// Raised when a creation factory hands back an entry whose keys do not
  /// match the slot it was asked to fill.
  BadArg,
  /// Invalid system operation or state.
  ///
  /// Reported when the local node is initialised more than once.
  SysInv,
}

impl ExceptionGroup {
  #[inline]
  pub(crate) const fn label(&self) -> &'static str {
    match self {
      Self::BadArg => "badarg",
      Self::SysInv => "sysinv",
    }
  }
}

impl Display for ExceptionGroup {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::BadArg => f.write_str("(BadArg) errors were found with the given argument(s)"),
      Self::SysInv => f.write_str("(SysInv) a system invariant has been broken"),
    }
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use crate::error::ExceptionGroup;

  #[test]
  fn test_display() {
    assert!(format!("{}", ExceptionGroup::BadArg).starts_with("(BadArg)"));
    assert!(format!("{}", ExceptionGroup::SysInv).starts_with("(SysInv)"));
  }

  #[test]
  fn test_label() {
    assert_eq!(ExceptionGroup::BadArg.label(), "badarg");
    assert_eq!(ExceptionGroup::SysInv.label(), "sysinv");
  }
}
