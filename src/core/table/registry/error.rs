use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Error returned from the fallible registry operations.
///
/// Every operation that returns this error leaves the registry unchanged.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistryError {
  /// An entry is already registered under the internal id or the
  /// namespace id of the candidate.
  Occupied,
  /// No entry is registered under the given key.
  NotFound,
  /// An entry was found under one key but its other key is missing from
  /// the opposite index.
  Inconsistent,
  /// The entry registered under the given keys is a different object.
  Mismatch,
}

impl Display for RegistryError {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    match self {
      Self::Occupied => f.write_str("entry already registered"),
      Self::NotFound => f.write_str("entry not found"),
      Self::Inconsistent => f.write_str("registry indices disagree"),
      Self::Mismatch => f.write_str("registered entry is a different object"),
    }
  }
}

impl Error for RegistryError {}
