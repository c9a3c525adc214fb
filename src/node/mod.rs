//! Process-wide registries.
//!
//! The local node owns one [`Registry`] per tracked entity kind. Both are
//! constructed lazily on first access (or by [`init::start`]) and live until
//! the process exits; there is no teardown.
//!
//! [`init::start`]: crate::init::start

mod local;

pub(crate) use self::local::LocalNode;

use crate::core::Registry;
use crate::proc::Process;
use crate::proc::Thread;

/// Returns the global process registry.
#[inline]
pub fn process_registry() -> &'static Registry<Process> {
  LocalNode::procs()
}

/// Returns the global thread registry.
#[inline]
pub fn thread_registry() -> &'static Registry<Thread> {
  LocalNode::threads()
}
