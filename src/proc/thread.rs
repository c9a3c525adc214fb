use triomphe::Arc;

use crate::core::Entry;
use crate::core::NsTid;
use crate::core::Pid;
use crate::core::Tid;

/// Tracked thread state.
///
/// A thread is registered under its host tid and the tid visible inside its
/// namespace, and remembers the host pid of the process that owns it.
#[derive(Debug)]
pub struct Thread {
  /// Host thread identifier.
  id: Tid,
  /// Namespace thread identifier.
  nsid: NsTid,
  /// Host identifier of the owning process.
  process: Pid,
}

impl Thread {
  /// Creates a new shared thread handle.
  #[inline]
  pub fn new(id: Tid, nsid: NsTid, process: Pid) -> Arc<Self> {
    Arc::new(Self { id, nsid, process })
  }

  /// Returns the host thread identifier.
  #[inline]
  pub const fn id(&self) -> Tid {
    self.id
  }

  /// Returns the namespace thread identifier.
  #[inline]
  pub const fn nsid(&self) -> NsTid {
    self.nsid
  }

  /// Returns the host identifier of the owning process.
  #[inline]
  pub const fn process(&self) -> Pid {
    self.process
  }
}

impl Entry for Thread {
  type Id = Tid;
  type NsId = NsTid;

  #[inline]
  fn id(&self) -> Tid {
    self.id
  }

  #[inline]
  fn nsid(&self) -> NsTid {
    self.nsid
  }
}

impl Drop for Thread {
  fn drop(&mut self) {
    tracing::trace!(target: "procreg", id = %self.id, nsid = %self.nsid, "thread released");
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use triomphe::Arc;

  use crate::core::Entry;
  use crate::core::NsPid;
  use crate::core::NsTid;
  use crate::core::Pid;
  use crate::core::Registry;
  use crate::core::Tid;
  use crate::proc::Process;
  use crate::proc::Thread;

  #[test]
  fn test_entry_keys() {
    let process: Arc<Process> = Process::new(Pid::from_raw(4100), NsPid::from_raw(1), None);
    let thread: Arc<Thread> = Thread::new(Tid::from_raw(4101), NsTid::from_raw(2), process.id());

    assert_eq!(Entry::id(&*process), Pid::from_raw(4100));
    assert_eq!(Entry::nsid(&*process), NsPid::from_raw(1));
    assert_eq!(Entry::id(&*thread), Tid::from_raw(4101));
    assert_eq!(Entry::nsid(&*thread), NsTid::from_raw(2));
    assert_eq!(thread.process(), process.id());
  }

  #[test]
  fn test_thread_factory_resolves_owner() {
    let processes: Registry<Process> = Registry::new();
    let threads: Registry<Thread> = Registry::new();

    processes.insert(Process::new(Pid::from_raw(10), NsPid::from_raw(1), None), false);

    let thread: Arc<Thread> = threads.register_if_absent(NsTid::from_raw(1), |_| {
      let owner: Arc<Process> = processes.lookup_by_nsid(&NsPid::from_raw(1)).unwrap();
      Thread::new(Tid::from_raw(10), NsTid::from_raw(1), owner.id())
    });

    assert_eq!(thread.process(), Pid::from_raw(10));
  }

  #[test]
  fn test_child_factory_resolves_parent() {
    let processes: Registry<Process> = Registry::new();

    processes.insert(Process::new(Pid::from_raw(10), NsPid::from_raw(1), None), false);

    let child: Arc<Process> = processes.register_if_absent(NsPid::from_raw(2), |view| {
      let parent: Arc<Process> = view.lookup_by_id(&Pid::from_raw(10)).unwrap();
      Process::new(Pid::from_raw(11), NsPid::from_raw(2), Some(parent.nsid()))
    });

    assert_eq!(child.parent(), Some(NsPid::from_raw(1)));
    assert_eq!(processes.len(), 2);
  }
}
