use triomphe::Arc;

use crate::core::Entry;
use crate::core::NsPid;
use crate::core::Pid;

/// Tracked process state.
///
/// A process is registered under its host pid and the pid visible inside
/// its namespace. Both are fixed at construction.
///
/// # Drop Behavior
///
/// Logs the release for debugging. Removing a process from a registry does
/// not drop it while other handles remain.
#[derive(Debug)]
pub struct Process {
  /// Host process identifier.
  id: Pid,
  /// Namespace process identifier.
  nsid: NsPid,
  /// Namespace identifier of the parent process, if it is tracked.
  parent: Option<NsPid>,
}

impl Process {
  /// Creates a new shared process handle.
  #[inline]
  pub fn new(id: Pid, nsid: NsPid, parent: Option<NsPid>) -> Arc<Self> {
    Arc::new(Self { id, nsid, parent })
  }

  /// Returns the host process identifier.
  #[inline]
  pub const fn id(&self) -> Pid {
    self.id
  }

  /// Returns the namespace process identifier.
  #[inline]
  pub const fn nsid(&self) -> NsPid {
    self.nsid
  }

  /// Returns the namespace identifier of the parent process.
  #[inline]
  pub const fn parent(&self) -> Option<NsPid> {
    self.parent
  }
}

impl Entry for Process {
  type Id = Pid;
  type NsId = NsPid;

  #[inline]
  fn id(&self) -> Pid {
    self.id
  }

  #[inline]
  fn nsid(&self) -> NsPid {
    self.nsid
  }
}

impl Drop for Process {
  fn drop(&mut self) {
    tracing::trace!(target: "procreg", id = %self.id, nsid = %self.nsid, "process released");
  }
}
