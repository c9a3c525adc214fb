//! Concurrent tables for tracked runtime state.

mod registry;

pub use self::registry::Registry;
pub use self::registry::RegistryConfig;
pub use self::registry::RegistryError;
pub use self::registry::RegistryLock;
pub use self::registry::RegistryView;
