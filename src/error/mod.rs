//! Exception types raised for registry misuse.
//!
//! Registry operations report expected outcomes (already registered, not
//! found, identity mismatch) through return values. Exceptions are reserved
//! for caller errors that leave no sensible value to return, such as a
//! creation factory producing an entry under the wrong key.
//!
//! Exceptions carry three pieces of information:
//!
//! 1. **Class**: The severity level ([`Error`])
//! 2. **Group**: The error category ([`BadArg`], [`SysInv`])
//! 3. **Description**: A human-readable error message
//!
//! [`Error`]: ExceptionClass::Error
//! [`BadArg`]: ExceptionGroup::BadArg
//! [`SysInv`]: ExceptionGroup::SysInv

mod exception;
mod exception_class;
mod exception_group;

pub use self::exception::Exception;
pub use self::exception_class::ExceptionClass;
pub use self::exception_group::ExceptionGroup;

// -----------------------------------------------------------------------------
// raise!
// -----------------------------------------------------------------------------

/// Raises an exception with the specified class, group, and message.
///
/// The exception is carried as the panic payload, so a caller catching the
/// unwind can downcast it back into an [`Exception`].
///
/// The default panic hook only prints `Box<dyn Any>` for such payloads.
/// [`init::start`] installs a hook that prints the exception instead.
///
/// [`init::start`]: crate::init::start
///
/// # Examples
///
/// ```
/// # use procreg::raise;
/// fn reserve(nsid: i32) {
///   if nsid < 0 {
///     raise!(Error, BadArg, "namespace id must be non-negative");
///   }
/// }
/// ```
#[macro_export]
macro_rules! raise {
  ($class:ident, $group:ident, $error:expr $(,)?) => {
    ::std::panic::panic_any($crate::error::Exception::new(
      $crate::error::ExceptionClass::$class,
      $crate::error::ExceptionGroup::$group,
      $error,
    ))
  };
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
