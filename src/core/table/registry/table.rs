//! Dual-keyed concurrent registry for shared entries.
//!
//! This module provides [`Registry`], a table that indexes reference-counted
//! entries under two independent keys at once: an internal id and a
//! namespace id. Registration, lookup, and removal stay consistent across
//! both indices under concurrent access.
//!
//! # Concurrency Model
//!
//! Each registry owns a single readers-writer lock covering both indices.
//!
//! - **Lookup**: Shared lock; readers never block each other
//! - **Insertion**: Exclusive lock for the joint-key check and both inserts
//! - **Removal**: Exclusive lock for the cross-check and both removals
//! - **Creation**: Exclusive lock held across the entire factory call
//!
//! Every operation is all-or-nothing. A failed insertion or removal leaves
//! both indices untouched.
//!
//! # Ownership
//!
//! The registry stores [`Arc`] handles. Removing an entry drops only the
//! registry's handles; the entry itself is released when the last handle
//! held anywhere goes away.
//!
//! # Nested Lookups
//!
//! The creation factory runs while the exclusive lock is held, so it must
//! not call back into the registry. It receives a [`RegistryView`] instead,
//! which reads the already-locked indices directly.

use std::convert::Infallible;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use triomphe::Arc;

use crate::core::Entry;
use crate::core::table::registry::RegistryConfig;
use crate::core::table::registry::RegistryError;
use crate::core::table::registry::RegistryLock;
use crate::core::table::registry::RegistryView;
use crate::core::table::registry::Tables;
use crate::loom::sync::RwLock;
use crate::loom::sync::RwLockWriteGuard;
use crate::raise;

// -----------------------------------------------------------------------------
// Registry
// -----------------------------------------------------------------------------

/// Thread-safe registry indexing entries by internal id and namespace id.
///
/// See the [module-level documentation](self) for the locking discipline.
pub struct Registry<T>
where
  T: Entry,
{
  name: &'static str,
  inner: RwLock<Tables<T>>,
}

impl<T> Registry<T>
where
  T: Entry,
{
  /// Creates a new, empty registry with the default configuration.
  #[inline]
  pub fn new() -> Self {
    Self::with_config(RegistryConfig::new())
  }

  /// Creates a new, empty registry with the given configuration.
  #[inline]
  pub fn with_config(config: RegistryConfig) -> Self {
    Self {
      name: config.name,
      inner: RwLock::new(Tables::with_capacity(config.capacity)),
    }
  }

  /// Returns the diagnostic name of this registry.
  #[inline]
  pub const fn name(&self) -> &'static str {
    self.name
  }

  // ---------------------------------------------------------------------------
  // Registration
  // ---------------------------------------------------------------------------

  /// Returns the entry registered under `nsid`, creating it if absent.
  ///
  /// If no entry is registered under `nsid`, `factory` is called exactly
  /// once to build one, and the result is indexed under its own keys. The
  /// check and the creation form a single critical section: concurrent
  /// callers for the same `nsid` all observe the same entry and only one
  /// factory ever runs.
  ///
  /// The factory receives a [`RegistryView`] for any lookups it needs.
  ///
  /// # Panics
  ///
  /// Raises a `BadArg` exception, leaving the registry unchanged, if the
  /// factory returns an entry whose namespace id differs from `nsid` or
  /// whose internal id is already registered.
  ///
  /// # Deadlocks
  ///
  /// The factory runs under the exclusive lock. Any call on this registry
  /// from inside it, including [`lookup_by_id`] and [`lookup_by_nsid`],
  /// blocks forever. Read through the [`RegistryView`] argument instead.
  ///
  /// [`lookup_by_id`]: Self::lookup_by_id
  /// [`lookup_by_nsid`]: Self::lookup_by_nsid
  pub fn register_if_absent<F>(&self, nsid: T::NsId, factory: F) -> Arc<T>
  where
    F: FnOnce(RegistryView<'_, T>) -> Arc<T>,
  {
    let result: Result<Arc<T>, Infallible> =
      self.try_register_if_absent(nsid, |view| Ok(factory(view)));

    match result {
      Ok(entry) => entry,
      Err(never) => match never {},
    }
  }

  /// Fallible variant of [`register_if_absent`].
  ///
  /// An error returned by `factory` is passed through and nothing is
  /// registered.
  ///
  /// # Panics
  ///
  /// See [`register_if_absent`], which also lists the calls that deadlock
  /// inside `factory`.
  ///
  /// [`register_if_absent`]: Self::register_if_absent
  pub fn try_register_if_absent<F, E>(&self, nsid: T::NsId, factory: F) -> Result<Arc<T>, E>
  where
    F: FnOnce(RegistryView<'_, T>) -> Result<Arc<T>, E>,
  {
    let mut guard: RwLockWriteGuard<'_, Tables<T>> = self.inner.write();

    if let Some(entry) = guard.get_by_nsid(&nsid) {
      return Ok(Arc::clone(entry));
    }

    let entry: Arc<T> = factory(RegistryView::new(&guard))?;
    let id: T::Id = entry.id();

    if entry.nsid() != nsid {
      drop(guard);

      raise!(
        Error,
        BadArg,
        format!(
          "factory for namespace id {nsid:?} produced an entry for {:?}",
          entry.nsid(),
        ),
      );
    }

    if guard.get_by_id(&id).is_some() {
      drop(guard);

      raise!(
        Error,
        BadArg,
        format!("factory for namespace id {nsid:?} produced a duplicate internal id {id:?}"),
      );
    }

    guard.link(Arc::clone(&entry));

    drop(guard);

    tracing::trace!(
      target: "procreg",
      registry = self.name,
      id = ?id,
      nsid = ?nsid,
      "created",
    );

    Ok(entry)
  }

  /// Registers `entry` under both of its keys.
  ///
  /// Returns `false`, leaving the registry unchanged, if either key is
  /// already taken and `replace` is `false`.
  ///
  /// With `replace` set, entries occupying either key are dropped from both
  /// indices before `entry` is inserted.
  #[inline]
  pub fn insert(&self, entry: Arc<T>, replace: bool) -> bool {
    self.try_insert(entry, replace).is_ok()
  }

  /// Fallible variant of [`insert`].
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::Occupied`] if either key is already taken
  /// and `replace` is `false`.
  ///
  /// [`insert`]: Self::insert
  pub fn try_insert(&self, entry: Arc<T>, replace: bool) -> Result<(), RegistryError> {
    let id: T::Id = entry.id();
    let nsid: T::NsId = entry.nsid();

    let mut guard: RwLockWriteGuard<'_, Tables<T>> = self.inner.write();
    let occupied: bool = guard.is_occupied(&entry);

    if occupied && !replace {
      drop(guard);

      tracing::debug!(
        target: "procreg",
        registry = self.name,
        id = ?id,
        nsid = ?nsid,
        "insert rejected: key in use",
      );

      return Err(RegistryError::Occupied);
    }

    guard.link(entry);

    drop(guard);

    tracing::trace!(
      target: "procreg",
      registry = self.name,
      id = ?id,
      nsid = ?nsid,
      replaced = occupied,
      "registered",
    );

    Ok(())
  }

  // ---------------------------------------------------------------------------
  // Removal
  // ---------------------------------------------------------------------------

  /// Removes whatever entry is registered under the internal id `id`.
  ///
  /// This is a key-only removal: it does not check which object is
  /// registered. Use [`remove`] to remove a specific entry.
  ///
  /// Returns `false`, leaving the registry unchanged, if no entry is
  /// registered under `id` or if the entry's namespace id is missing from
  /// the namespace index.
  ///
  /// [`remove`]: Self::remove
  #[inline]
  pub fn remove_by_id(&self, id: &T::Id) -> bool {
    self.try_remove_by_id(id).is_ok()
  }

  /// Fallible variant of [`remove_by_id`] returning the removed entry.
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::NotFound`] if `id` is not registered and
  /// [`RegistryError::Inconsistent`] if the entry's namespace id is missing
  /// from the namespace index.
  ///
  /// [`remove_by_id`]: Self::remove_by_id
  pub fn try_remove_by_id(&self, id: &T::Id) -> Result<Arc<T>, RegistryError> {
    let mut guard: RwLockWriteGuard<'_, Tables<T>> = self.inner.write();

    let Some(entry) = guard.get_by_id(id).cloned() else {
      return Err(RegistryError::NotFound);
    };

    let nsid: T::NsId = entry.nsid();

    if guard.get_by_nsid(&nsid).is_none() {
      drop(guard);
      self.warn_inconsistent(id, &nsid);
      return Err(RegistryError::Inconsistent);
    }

    guard.unlink(id, &nsid);

    drop(guard);

    tracing::trace!(
      target: "procreg",
      registry = self.name,
      id = ?id,
      nsid = ?nsid,
      "removed by id",
    );

    Ok(entry)
  }

  /// Removes whatever entry is registered under the namespace id `nsid`.
  ///
  /// This is a key-only removal: it does not check which object is
  /// registered. Use [`remove`] to remove a specific entry.
  ///
  /// Returns `false`, leaving the registry unchanged, if no entry is
  /// registered under `nsid` or if the entry's internal id is missing from
  /// the internal index.
  ///
  /// [`remove`]: Self::remove
  #[inline]
  pub fn remove_by_nsid(&self, nsid: &T::NsId) -> bool {
    self.try_remove_by_nsid(nsid).is_ok()
  }

  /// Fallible variant of [`remove_by_nsid`] returning the removed entry.
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::NotFound`] if `nsid` is not registered and
  /// [`RegistryError::Inconsistent`] if the entry's internal id is missing
  /// from the internal index.
  ///
  /// [`remove_by_nsid`]: Self::remove_by_nsid
  pub fn try_remove_by_nsid(&self, nsid: &T::NsId) -> Result<Arc<T>, RegistryError> {
    let mut guard: RwLockWriteGuard<'_, Tables<T>> = self.inner.write();

    let Some(entry) = guard.get_by_nsid(nsid).cloned() else {
      return Err(RegistryError::NotFound);
    };

    let id: T::Id = entry.id();

    if guard.get_by_id(&id).is_none() {
      drop(guard);
      self.warn_inconsistent(&id, nsid);
      return Err(RegistryError::Inconsistent);
    }

    guard.unlink(&id, nsid);

    drop(guard);

    tracing::trace!(
      target: "procreg",
      registry = self.name,
      id = ?id,
      nsid = ?nsid,
      "removed by nsid",
    );

    Ok(entry)
  }

  /// Removes `entry` if it is the object currently registered.
  ///
  /// Both keys of `entry` must resolve to this exact object, compared by
  /// pointer. This guards against removing a different entry that was
  /// registered under a reused key after `entry` was obtained.
  ///
  /// Returns `false`, leaving the registry unchanged, otherwise.
  #[inline]
  pub fn remove(&self, entry: &Arc<T>) -> bool {
    self.try_remove(entry).is_ok()
  }

  /// Fallible variant of [`remove`].
  ///
  /// # Errors
  ///
  /// Returns [`RegistryError::NotFound`] if either key of `entry` is not
  /// registered and [`RegistryError::Mismatch`] if either key resolves to a
  /// different object.
  ///
  /// [`remove`]: Self::remove
  pub fn try_remove(&self, entry: &Arc<T>) -> Result<(), RegistryError> {
    let id: T::Id = entry.id();
    let nsid: T::NsId = entry.nsid();

    let mut guard: RwLockWriteGuard<'_, Tables<T>> = self.inner.write();

    let (Some(by_id), Some(by_nsid)) = (guard.get_by_id(&id), guard.get_by_nsid(&nsid)) else {
      return Err(RegistryError::NotFound);
    };

    if !Arc::ptr_eq(by_id, entry) || !Arc::ptr_eq(by_nsid, entry) {
      return Err(RegistryError::Mismatch);
    }

    guard.unlink(&id, &nsid);

    drop(guard);

    tracing::trace!(
      target: "procreg",
      registry = self.name,
      id = ?id,
      nsid = ?nsid,
      "removed",
    );

    Ok(())
  }

  // ---------------------------------------------------------------------------
  // Lookup
  // ---------------------------------------------------------------------------

  /// Returns the entry registered under the internal id `id`.
  ///
  /// Must not be called while the current thread holds this registry's
  /// exclusive lock, such as from a [`register_if_absent`] factory or under
  /// [`scoped_lock`]; doing so deadlocks. Use a [`RegistryView`] there
  /// instead.
  ///
  /// [`register_if_absent`]: Self::register_if_absent
  /// [`scoped_lock`]: Self::scoped_lock
  #[inline]
  pub fn lookup_by_id(&self, id: &T::Id) -> Option<Arc<T>> {
    self.inner.read().get_by_id(id).cloned()
  }

  /// Returns the entry registered under the namespace id `nsid`.
  ///
  /// Must not be called while the current thread holds this registry's
  /// exclusive lock, such as from a [`register_if_absent`] factory or under
  /// [`scoped_lock`]; doing so deadlocks. Use a [`RegistryView`] there
  /// instead.
  ///
  /// [`register_if_absent`]: Self::register_if_absent
  /// [`scoped_lock`]: Self::scoped_lock
  #[inline]
  pub fn lookup_by_nsid(&self, nsid: &T::NsId) -> Option<Arc<T>> {
    self.inner.read().get_by_nsid(nsid).cloned()
  }

  /// Returns `true` if an entry is registered under the internal id `id`.
  #[inline]
  pub fn contains_id(&self, id: &T::Id) -> bool {
    self.inner.read().get_by_id(id).is_some()
  }

  /// Returns `true` if an entry is registered under the namespace id `nsid`.
  #[inline]
  pub fn contains_nsid(&self, nsid: &T::NsId) -> bool {
    self.inner.read().get_by_nsid(nsid).is_some()
  }

  /// Returns the number of registered entries.
  #[inline]
  pub fn len(&self) -> usize {
    self.inner.read().len()
  }

  /// Returns `true` if no entries are registered.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns a snapshot of all registered entries in arbitrary order.
  pub fn entries(&self) -> Vec<Arc<T>> {
    self.inner.read().values().cloned().collect()
  }

  // ---------------------------------------------------------------------------
  // Manual Locking
  // ---------------------------------------------------------------------------

  /// Acquires the exclusive lock, preventing registration and removal.
  ///
  /// You almost certainly don't want this. It exists for callers that must
  /// keep an entry registered while using it without holding a handle.
  /// Prefer [`scoped_lock`].
  ///
  /// Every call must be balanced by a call to [`unlock`] on the same
  /// thread. Any other use of this registry from the locking thread before
  /// then deadlocks.
  ///
  /// [`scoped_lock`]: Self::scoped_lock
  /// [`unlock`]: Self::unlock
  #[cfg(not(loom))]
  #[inline]
  pub fn lock(&self) {
    std::mem::forget(self.inner.write());
  }

  /// Releases the exclusive lock acquired by [`lock`].
  ///
  /// # Safety
  ///
  /// The caller must currently hold the lock through a prior call to
  /// [`lock`] that has not yet been balanced.
  ///
  /// [`lock`]: Self::lock
  #[cfg(not(loom))]
  #[inline]
  pub unsafe fn unlock(&self) {
    // SAFETY: This is guaranteed to be safe by the caller.
    unsafe { self.inner.force_unlock_write() }
  }

  /// Acquires the exclusive lock until the returned guard is dropped.
  ///
  /// Like [`lock`], this is an escape hatch rather than a primary API. The
  /// guard releases the lock on every exit path and can release it early
  /// through [`RegistryLock::unlock`].
  ///
  /// [`lock`]: Self::lock
  #[inline]
  pub fn scoped_lock(&self) -> RegistryLock<'_, T> {
    RegistryLock::new(self.inner.write())
  }

  #[cold]
  fn warn_inconsistent(&self, id: &T::Id, nsid: &T::NsId) {
    tracing::warn!(
      target: "procreg",
      registry = self.name,
      id = ?id,
      nsid = ?nsid,
      "remove aborted: indices disagree",
    );
  }
}

impl<T> Default for Registry<T>
where
  T: Entry,
{
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl<T> Debug for Registry<T>
where
  T: Entry,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    let mut f = f.debug_struct("Registry");

    f.field("name", &self.name);

    // Never blocks; the current thread may be the one holding the lock.
    match self.inner.try_read() {
      Some(guard) => f.field("len", &guard.len()),
      None => f.field("len", &format_args!("<locked>")),
    };

    f.finish()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
