#![cfg(loom)]

use loom::sync::atomic::AtomicUsize;
use loom::sync::atomic::Ordering;
use loom::thread;
use procreg::core::Entry;
use procreg::core::Registry;
use triomphe::Arc;

#[derive(Debug)]
struct Item {
  id: u32,
  nsid: u64,
}

impl Entry for Item {
  type Id = u32;
  type NsId = u64;

  fn id(&self) -> u32 {
    self.id
  }

  fn nsid(&self) -> u64 {
    self.nsid
  }
}

fn item(id: u32, nsid: u64) -> Arc<Item> {
  Arc::new(Item { id, nsid })
}

#[test]
fn register_if_absent_single_factory() {
  loom::model(|| {
    let registry: Arc<Registry<Item>> = Arc::new(Registry::new());
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));

    let spawn = |id: u32| {
      let registry: Arc<Registry<Item>> = Arc::clone(&registry);
      let calls: Arc<AtomicUsize> = Arc::clone(&calls);

      thread::spawn(move || {
        registry.register_if_absent(100, |_| {
          calls.fetch_add(1, Ordering::SeqCst);
          item(id, 100)
        })
      })
    };

    let t1 = spawn(1);
    let t2 = spawn(2);

    let e1: Arc<Item> = t1.join().unwrap();
    let e2: Arc<Item> = t2.join().unwrap();

    assert!(Arc::ptr_eq(&e1, &e2), "callers observed different entries");
    assert_eq!(calls.load(Ordering::SeqCst), 1, "factory ran more than once");
    assert_eq!(registry.len(), 1);
  });
}

#[test]
fn concurrent_remove_same_entry() {
  loom::model(|| {
    let registry: Arc<Registry<Item>> = Arc::new(Registry::new());
    let entry: Arc<Item> = item(1, 100);

    registry.insert(Arc::clone(&entry), false);

    let t1 = {
      let registry: Arc<Registry<Item>> = Arc::clone(&registry);
      thread::spawn(move || registry.remove_by_id(&1))
    };

    let t2 = {
      let registry: Arc<Registry<Item>> = Arc::clone(&registry);
      let entry: Arc<Item> = Arc::clone(&entry);
      thread::spawn(move || registry.remove(&entry))
    };

    let r1: bool = t1.join().unwrap();
    let r2: bool = t2.join().unwrap();

    assert!(r1 ^ r2, "exactly one removal should succeed");
    assert!(registry.lookup_by_id(&1).is_none());
    assert!(registry.lookup_by_nsid(&100).is_none());
  });
}

#[test]
fn lookup_during_insert_sees_both_or_neither() {
  loom::model(|| {
    let registry: Arc<Registry<Item>> = Arc::new(Registry::new());

    let t1 = {
      let registry: Arc<Registry<Item>> = Arc::clone(&registry);
      thread::spawn(move || registry.insert(item(1, 100), false))
    };

    let t2 = {
      let registry: Arc<Registry<Item>> = Arc::clone(&registry);

      thread::spawn(move || {
        if registry.lookup_by_nsid(&100).is_some() {
          assert!(registry.lookup_by_id(&1).is_some(), "index agreement broken");
        }
      })
    };

    assert!(t1.join().unwrap());
    t2.join().unwrap();
  });
}

#[test]
fn colliding_inserts_one_wins() {
  loom::model(|| {
    let registry: Arc<Registry<Item>> = Arc::new(Registry::new());

    let t1 = {
      let registry: Arc<Registry<Item>> = Arc::clone(&registry);
      thread::spawn(move || registry.insert(item(1, 100), false))
    };

    let t2 = {
      let registry: Arc<Registry<Item>> = Arc::clone(&registry);
      thread::spawn(move || registry.insert(item(1, 200), false))
    };

    let r1: bool = t1.join().unwrap();
    let r2: bool = t2.join().unwrap();

    assert!(r1 ^ r2, "exactly one insert should succeed");
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.contains_nsid(&100), r1);
    assert_eq!(registry.contains_nsid(&200), r2);
  });
}
