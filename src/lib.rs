//! Procreg - concurrent dual-keyed registries for tracked process state.
//!
//! A [`Registry`] indexes shared, reference-counted entries under two
//! independent identifier spaces at once: an internal id and a namespace id.
//! Registration, lookup, and removal stay consistent across both indices
//! while many threads use the registry concurrently.
//!
//! # Quick Start
//!
//! ```
//! use procreg::core::NsPid;
//! use procreg::core::Pid;
//! use procreg::node::process_registry;
//! use procreg::proc::Process;
//!
//! let registry = process_registry();
//!
//! let process = registry.register_if_absent(NsPid::from_raw(1), |_| {
//!   Process::new(Pid::from_raw(4242), NsPid::from_raw(1), None)
//! });
//!
//! assert_eq!(process.id(), Pid::from_raw(4242));
//! assert!(registry.lookup_by_id(&Pid::from_raw(4242)).is_some());
//! assert!(registry.remove(&process));
//! ```
//!
//! # Core Modules
//!
//! - [`core`]: The registry, its entry contract, and identifier types
//! - [`proc`]: Tracked entity kinds ([`Process`], [`Thread`])
//! - [`node`]: Process-wide registries
//! - [`init`]: Optional explicit start-up and tracing configuration
//! - [`error`]: Exception system
//! - [`consts`]: Registry configuration constants
//!
//! [`Registry`]: crate::core::Registry
//! [`Process`]: crate::proc::Process
//! [`Thread`]: crate::proc::Thread

mod loom;

pub mod consts;
pub mod core;
pub mod error;
pub mod init;
pub mod node;
pub mod proc;
