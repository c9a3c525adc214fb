use hashbrown::HashMap;
use std::hash::Hash;
use triomphe::Arc;

use crate::core::Entry;

/// The two indices of a registry, guarded together by the registry lock.
///
/// Both maps hold handles to the same set of entries. Every method leaves
/// them agreeing with each other: a handle found under one key is found,
/// identity-equal, under the entry's other key.
pub(crate) struct Tables<T>
where
  T: Entry,
{
  /// Entries keyed by internal id.
  by_id: HashMap<T::Id, Arc<T>>,
  /// Entries keyed by namespace id.
  by_nsid: HashMap<T::NsId, Arc<T>>,
}

impl<T> Tables<T>
where
  T: Entry,
{
  #[inline]
  pub(crate) fn with_capacity(capacity: usize) -> Self {
    Self {
      by_id: HashMap::with_capacity(capacity),
      by_nsid: HashMap::with_capacity(capacity),
    }
  }

  #[inline]
  pub(crate) fn len(&self) -> usize {
    self.by_id.len()
  }

  #[inline]
  pub(crate) fn get_by_id(&self, id: &T::Id) -> Option<&Arc<T>> {
    self.by_id.get(id)
  }

  #[inline]
  pub(crate) fn get_by_nsid(&self, nsid: &T::NsId) -> Option<&Arc<T>> {
    self.by_nsid.get(nsid)
  }

  /// Returns `true` if either key of `entry` is already taken.
  #[inline]
  pub(crate) fn is_occupied(&self, entry: &T) -> bool {
    self.by_id.contains_key(&entry.id()) || self.by_nsid.contains_key(&entry.nsid())
  }

  #[inline]
  pub(crate) fn values(&self) -> impl Iterator<Item = &Arc<T>> {
    self.by_id.values()
  }

  /// Indexes `entry` under both of its keys.
  ///
  /// Any entry displaced on one axis is also dropped from the other axis,
  /// provided that slot still refers to the displaced entry.
  pub(crate) fn link(&mut self, entry: Arc<T>) {
    let id: T::Id = entry.id();
    let nsid: T::NsId = entry.nsid();

    if let Some(prev) = self.by_id.insert(id.clone(), Arc::clone(&entry))
      && !Arc::ptr_eq(&prev, &entry)
    {
      let prev_nsid: T::NsId = prev.nsid();

      if prev_nsid != nsid && holds(&self.by_nsid, &prev_nsid, &prev) {
        self.by_nsid.remove(&prev_nsid);
      }
    }

    if let Some(prev) = self.by_nsid.insert(nsid, Arc::clone(&entry))
      && !Arc::ptr_eq(&prev, &entry)
    {
      let prev_id: T::Id = prev.id();

      if prev_id != id && holds(&self.by_id, &prev_id, &prev) {
        self.by_id.remove(&prev_id);
      }
    }
  }

  /// Drops the handles stored under `id` and `nsid`.
  ///
  /// Callers must have checked that both keys refer to the same entry.
  #[inline]
  pub(crate) fn unlink(&mut self, id: &T::Id, nsid: &T::NsId) {
    self.by_id.remove(id);
    self.by_nsid.remove(nsid);
  }

  /// Drops only the namespace index slot, breaking index agreement.
  #[cfg(test)]
  pub(crate) fn corrupt_nsid(&mut self, nsid: &T::NsId) {
    self.by_nsid.remove(nsid);
  }

  /// Drops only the internal index slot, breaking index agreement.
  #[cfg(test)]
  pub(crate) fn corrupt_id(&mut self, id: &T::Id) {
    self.by_id.remove(id);
  }
}

#[inline]
fn holds<K, T>(map: &HashMap<K, Arc<T>>, key: &K, entry: &Arc<T>) -> bool
where
  K: Eq + Hash,
{
  map.get(key).is_some_and(|found| Arc::ptr_eq(found, entry))
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
