use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use triomphe::Arc;

use crate::core::Entry;
use crate::core::table::registry::Tables;
use crate::loom::sync::RwLockWriteGuard;

// -----------------------------------------------------------------------------
// Registry View
// -----------------------------------------------------------------------------

/// Read-only access to a registry whose exclusive lock is already held.
///
/// A view is handed to the factory of [`Registry::register_if_absent`] and
/// is available from a [`RegistryLock`]. Lookups through a view never touch
/// the lock, so they are the only way to query a registry from code that
/// runs while its exclusive section is held by the current call stack.
///
/// [`Registry::register_if_absent`]: crate::core::Registry::register_if_absent
pub struct RegistryView<'a, T>
where
  T: Entry,
{
  tables: &'a Tables<T>,
}

impl<'a, T> RegistryView<'a, T>
where
  T: Entry,
{
  #[inline]
  pub(crate) const fn new(tables: &'a Tables<T>) -> Self {
    Self { tables }
  }

  /// Returns the entry registered under the internal id `id`.
  #[inline]
  pub fn lookup_by_id(&self, id: &T::Id) -> Option<Arc<T>> {
    self.tables.get_by_id(id).cloned()
  }

  /// Returns the entry registered under the namespace id `nsid`.
  #[inline]
  pub fn lookup_by_nsid(&self, nsid: &T::NsId) -> Option<Arc<T>> {
    self.tables.get_by_nsid(nsid).cloned()
  }

  /// Returns `true` if an entry is registered under the internal id `id`.
  #[inline]
  pub fn contains_id(&self, id: &T::Id) -> bool {
    self.tables.get_by_id(id).is_some()
  }

  /// Returns `true` if an entry is registered under the namespace id `nsid`.
  #[inline]
  pub fn contains_nsid(&self, nsid: &T::NsId) -> bool {
    self.tables.get_by_nsid(nsid).is_some()
  }

  /// Returns the number of registered entries.
  #[inline]
  pub fn len(&self) -> usize {
    self.tables.len()
  }

  /// Returns `true` if no entries are registered.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.tables.len() == 0
  }
}

impl<T> Clone for RegistryView<'_, T>
where
  T: Entry,
{
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<T> Copy for RegistryView<'_, T> where T: Entry {}

impl<T> Debug for RegistryView<'_, T>
where
  T: Entry,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("RegistryView")
      .field("len", &self.tables.len())
      .finish()
  }
}

// -----------------------------------------------------------------------------
// Registry Lock
// -----------------------------------------------------------------------------

/// Scoped hold on a registry's exclusive section.
///
/// While this value is alive no entry can be registered or removed. The
/// lock is released when the value is dropped, including during unwinding,
/// or earlier through [`RegistryLock::unlock`].
///
/// Lookups through the registry itself block until the lock is released;
/// use [`RegistryLock::view`] instead.
#[must_use = "the registry is unlocked as soon as the guard is dropped"]
pub struct RegistryLock<'a, T>
where
  T: Entry,
{
  guard: RwLockWriteGuard<'a, Tables<T>>,
}

impl<'a, T> RegistryLock<'a, T>
where
  T: Entry,
{
  #[inline]
  pub(crate) fn new(guard: RwLockWriteGuard<'a, Tables<T>>) -> Self {
    Self { guard }
  }

  /// Returns a read-only view of the locked registry.
  #[inline]
  pub fn view(&self) -> RegistryView<'_, T> {
    RegistryView::new(&self.guard)
  }

  /// Releases the lock before the end of the scope.
  #[inline]
  pub fn unlock(self) {
    drop(self);
  }
}

impl<T> Debug for RegistryLock<'_, T>
where
  T: Entry,
{
  fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
    f.debug_struct("RegistryLock")
      .field("len", &self.guard.len())
      .finish()
  }
}
