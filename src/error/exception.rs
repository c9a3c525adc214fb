use std::backtrace::Backtrace;
use std::error::Error;
use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

use crate::error::ExceptionClass;
use crate::error::ExceptionGroup;

/// A structured exception with class, group, message, and backtrace.
///
/// # Display Format
///
/// Exceptions format as: `{class}:{group} - {message}`
///
/// Example: `error:badarg - factory produced an entry for another namespace id`
pub struct Exception {
  class: ExceptionClass,
  group: ExceptionGroup,
  error: String,
  trace: Backtrace,
}

impl Exception {
  /// Creates a new exception with the given class, group, and message.
  ///
  /// Captures a backtrace at the call site. Usually invoked through
  /// [`raise!`] rather than directly.
  ///
  /// [`raise!`]: crate::raise
  #[inline]
  pub fn new<T>(class: ExceptionClass, group: ExceptionGroup, error: T) -> Self
  where
    T: Display,
  {
    Self {
      class,
      group,
      error: error.to_string(),
      trace: Backtrace::capture(),
    }
  }

  /// Returns the exception's severity class.
  #[inline]
  pub const fn class(&self) -> ExceptionClass {
    self.class
  }

  /// Returns the exception's error category.
  #[inline]
  pub const fn group(&self) -> ExceptionGroup {
    self.group
  }

  /// Returns the human-readable error message.
  #[inline]
  pub const fn error(&self) -> &str {
    self.error.as_str()
  }

  /// Returns the captured backtrace.
  ///
  /// Availability depends on `RUST_BACKTRACE` and platform support.
  #[inline]
  pub const fn trace(&self) -> &Backtrace {
    &self.trace
  }
}

impl Debug for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(self, f)
  }
}

impl Display for Exception {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    write!(f, "{}:{} - {}", self.class, self.group.label(), self.error)
  }
}

impl Error for Exception {}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
