mod config;
mod error;
mod state;
mod table;
mod view;

pub use self::config::RegistryConfig;
pub use self::error::RegistryError;
pub use self::table::Registry;
pub use self::view::RegistryLock;
pub use self::view::RegistryView;

pub(crate) use self::state::Tables;
