//! Tracked entity kinds.
//!
//! - [`Process`]: host/namespace process identity
//! - [`Thread`]: host/namespace thread identity and owning process

mod process;
mod thread;

pub use self::process::Process;
pub use self::thread::Thread;
