use procreg::core::NsPid;
use procreg::core::NsTid;
use procreg::core::Pid;
use procreg::core::Tid;
use procreg::node::process_registry;
use procreg::node::thread_registry;
use procreg::proc::Process;
use procreg::proc::Thread;
use std::ptr;
use std::sync::Barrier;
use std::thread;
use triomphe::Arc;

// The registries are process-wide; every test uses its own key range.

#[test]
fn singletons_are_stable() {
  assert!(ptr::eq(process_registry(), process_registry()));
  assert!(ptr::eq(thread_registry(), thread_registry()));
  assert_eq!(process_registry().name(), "process");
  assert_eq!(thread_registry().name(), "thread");
}

#[test]
fn scenario_remove_by_id_clears_namespace_key() {
  let process: Arc<Process> = Process::new(Pid::from_raw(1001), NsPid::from_raw(100), None);

  assert!(process_registry().insert(process, false));
  assert!(process_registry().remove_by_id(&Pid::from_raw(1001)));
  assert!(process_registry().lookup_by_nsid(&NsPid::from_raw(100)).is_none());
}

#[test]
fn scenario_internal_id_collision_rejected() {
  let a: Arc<Process> = Process::new(Pid::from_raw(2001), NsPid::from_raw(200), None);
  let b: Arc<Process> = Process::new(Pid::from_raw(2001), NsPid::from_raw(201), None);

  assert!(process_registry().insert(Arc::clone(&a), false));
  assert!(!process_registry().insert(b, false));

  let found: Arc<Process> = process_registry().lookup_by_id(&Pid::from_raw(2001)).unwrap();

  assert!(Arc::ptr_eq(&found, &a));
  assert!(process_registry().lookup_by_nsid(&NsPid::from_raw(201)).is_none());
  assert!(process_registry().remove(&a));
}

#[test]
fn scenario_factory_nested_lookup() {
  let parent: Arc<Process> = Process::new(Pid::from_raw(3001), NsPid::from_raw(300), None);

  process_registry().insert(Arc::clone(&parent), false);

  let child: Arc<Process> = process_registry().register_if_absent(NsPid::from_raw(301), |view| {
    let found: Arc<Process> = view.lookup_by_id(&Pid::from_raw(3001)).unwrap();
    assert!(Arc::ptr_eq(&found, &parent));
    Process::new(Pid::from_raw(3002), NsPid::from_raw(301), Some(found.nsid()))
  });

  assert_eq!(child.parent(), Some(NsPid::from_raw(300)));
  assert!(process_registry().remove(&child));
  assert!(process_registry().remove(&parent));
}

#[test]
fn registries_are_independent() {
  let guard = process_registry().scoped_lock();

  // Holding the process registry does not block the thread registry.
  let thread: Arc<Thread> = thread_registry().register_if_absent(NsTid::from_raw(400), |_| {
    Thread::new(Tid::from_raw(4001), NsTid::from_raw(400), Pid::from_raw(4000))
  });

  assert!(guard.view().lookup_by_id(&Pid::from_raw(4000)).is_none());

  guard.unlock();

  assert!(thread_registry().remove_by_nsid(&NsTid::from_raw(400)));
  assert_eq!(thread.process(), Pid::from_raw(4000));
}

#[test]
fn concurrent_thread_creation_is_unique() {
  const THREADS: usize = 16;

  let barrier: std::sync::Arc<Barrier> = std::sync::Arc::new(Barrier::new(THREADS));

  let handles: Vec<_> = (0..THREADS)
    .map(|index| {
      let barrier: std::sync::Arc<Barrier> = std::sync::Arc::clone(&barrier);

      thread::spawn(move || {
        barrier.wait();

        thread_registry().register_if_absent(NsTid::from_raw(500), |_| {
          Thread::new(Tid::from_raw(5000 + index as i32), NsTid::from_raw(500), Pid::from_raw(5000))
        })
      })
    })
    .collect();

  let threads: Vec<Arc<Thread>> = handles
    .into_iter()
    .map(|handle| handle.join().unwrap())
    .collect();

  assert!(threads.windows(2).all(|pair| Arc::ptr_eq(&pair[0], &pair[1])));
  assert!(thread_registry().remove(&threads[0]));
}
