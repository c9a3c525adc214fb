use std::fmt::Debug;
use std::hash::Hash;

/// Trait implemented by values that can be tracked in a [`Registry`].
///
/// Every entry is indexed under two independent keys: an internal id, unique
/// within one registry, and a namespace id visible to the tracked namespace.
/// Both must stay fixed for as long as the entry is registered; changing
/// either requires removing the entry and registering it again.
///
/// [`Registry`]: crate::core::Registry
pub trait Entry: Send + Sync + 'static {
  /// Internal identifier type.
  type Id: Clone + Eq + Hash + Debug + Send + Sync;

  /// Namespace identifier type.
  type NsId: Clone + Eq + Hash + Debug + Send + Sync;

  /// Returns the internal identifier of this entry.
  fn id(&self) -> Self::Id;

  /// Returns the namespace identifier of this entry.
  fn nsid(&self) -> Self::NsId;
}
