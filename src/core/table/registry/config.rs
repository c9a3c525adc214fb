use crate::consts;

/// Construction options for a [`Registry`].
///
/// [`Registry`]: crate::core::Registry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
  /// Name attached to every diagnostic emitted by the registry.
  pub name: &'static str,
  /// Number of entries to pre-allocate in each index.
  pub capacity: usize,
}

impl RegistryConfig {
  /// Creates the default configuration.
  #[inline]
  pub const fn new() -> Self {
    Self {
      name: consts::DEFAULT_REGISTRY_NAME,
      capacity: consts::CAP_REGISTRY_DEFAULT,
    }
  }

  /// Sets the diagnostic name.
  #[inline]
  pub const fn name(mut self, name: &'static str) -> Self {
    self.name = name;
    self
  }

  /// Sets the pre-allocated capacity.
  #[inline]
  pub const fn capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }
}

impl Default for RegistryConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}
