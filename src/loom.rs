#[cfg(not(loom))]
pub(crate) mod export {
  pub(crate) mod sync {
    pub(crate) use parking_lot::RwLock;
    pub(crate) use parking_lot::RwLockWriteGuard;
  }
}

#[cfg(loom)]
pub(crate) mod export {
  pub(crate) mod sync {
    use std::sync::PoisonError;

    pub(crate) use loom::sync::RwLockReadGuard;
    pub(crate) use loom::sync::RwLockWriteGuard;

    /// Wrapper giving the loom lock the non-poisoning `parking_lot` surface.
    pub(crate) struct RwLock<T> {
      inner: loom::sync::RwLock<T>,
    }

    impl<T> RwLock<T> {
      #[inline]
      pub(crate) fn new(value: T) -> Self {
        Self {
          inner: loom::sync::RwLock::new(value),
        }
      }

      #[inline]
      pub(crate) fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
      }

      #[inline]
      pub(crate) fn try_read(&self) -> Option<RwLockReadGuard<'_, T>> {
        self.inner.try_read().ok()
      }

      #[inline]
      pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
      }
    }
  }
}

#[doc(inline)]
pub(crate) use self::export::*;
