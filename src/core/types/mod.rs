//! Identifier types and the registry entry contract.
//!
//! - [`Pid`] / [`NsPid`]: host and namespace process identifiers
//! - [`Tid`] / [`NsTid`]: host and namespace thread identifiers
//! - [`Entry`]: trait for values tracked under both identifier spaces

mod entry;
mod ids;

pub use self::entry::Entry;
pub use self::ids::NsPid;
pub use self::ids::NsTid;
pub use self::ids::Pid;
pub use self::ids::RawId;
pub use self::ids::Tid;
