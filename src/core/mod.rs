//! Core registry types.
//!
//! - [`Registry`]: dual-keyed concurrent registry
//! - [`RegistryView`] / [`RegistryLock`]: access under a held exclusive lock
//! - [`Entry`]: contract for values tracked by a registry
//! - [`Pid`], [`NsPid`], [`Tid`], [`NsTid`]: identifier spaces

mod table;
mod types;

pub use self::table::Registry;
pub use self::table::RegistryConfig;
pub use self::table::RegistryError;
pub use self::table::RegistryLock;
pub use self::table::RegistryView;

pub use self::types::Entry;
pub use self::types::NsPid;
pub use self::types::NsTid;
pub use self::types::Pid;
pub use self::types::RawId;
pub use self::types::Tid;
