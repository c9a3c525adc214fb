use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result;

/// Raw identifier type shared by every id space (`pid_t`).
pub type RawId = i32;

macro_rules! define_id {
  ($(#[$meta:meta])* $name:ident, $label:literal) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
    #[repr(transparent)]
    pub struct $name {
      raw: RawId,
    }

    impl $name {
      /// Creates an identifier from its raw `pid_t` value.
      #[inline]
      pub const fn from_raw(raw: RawId) -> Self {
        Self { raw }
      }

      /// Returns the raw `pid_t` value.
      #[inline]
      pub const fn into_raw(self) -> RawId {
        self.raw
      }
    }

    impl Debug for $name {
      fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        Display::fmt(self, f)
      }
    }

    impl Display for $name {
      fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, concat!("#", $label, "<{}>"), self.raw)
      }
    }

    impl From<RawId> for $name {
      #[inline]
      fn from(raw: RawId) -> Self {
        Self::from_raw(raw)
      }
    }
  };
}

define_id! {
  /// Process identifier as seen by the host (the registry's internal key).
  Pid, "Pid"
}

define_id! {
  /// Process identifier as seen from inside the tracked namespace.
  NsPid, "NsPid"
}

define_id! {
  /// Thread identifier as seen by the host (the registry's internal key).
  Tid, "Tid"
}

define_id! {
  /// Thread identifier as seen from inside the tracked namespace.
  NsTid, "NsTid"
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
