//! Explicit start-up for the process-wide registries.
//!
//! Calling [`start`] is optional. Without it the registries are created with
//! default capacities on first access and no subscriber is installed.

mod config;

pub use self::config::InitConfig;

use std::any::Any;
use std::fmt::Display;
use std::panic;
use std::thread;

use crate::error::Exception;
use crate::error::ExceptionClass;
use crate::error::ExceptionGroup;
use crate::node::LocalNode;

/// Initializes the process-wide registries with the default configuration.
///
/// This is the same as calling `start_opts(Default::default())`.
#[inline]
pub fn start() -> Result<(), Exception> {
  start_opts(InitConfig::default())
}

/// Initializes the process-wide registries.
///
/// Sizes both registries, then installs the tracing subscriber described by
/// `config` (when the `subscriber` feature is enabled) and a panic hook that
/// prints raised [`Exception`]s. Other panics go to the previous hook.
///
/// # Errors
///
/// Returns a `SysInv` exception if the registries already exist, either
/// from a previous call or from an earlier first access; no subscriber is
/// installed in that case. A subscriber that fails to install is reported
/// on stderr and does not fail start-up.
pub fn start_opts(config: InitConfig) -> Result<(), Exception> {
  let node: LocalNode =
    LocalNode::with_capacity(config.cap_registered_procs, config.cap_registered_threads);

  if !LocalNode::install(node) {
    return Err(error("registries already initialized"));
  }

  if let Err(error) = init_tracing_subscriber(&config) {
    eprintln!("failed to set tracing subscriber:");
    eprintln!("    {}", error.error());
  }

  init_panic_hook();

  tracing::debug!(
    target: "procreg",
    procs = config.cap_registered_procs,
    threads = config.cap_registered_threads,
    "registries initialized",
  );

  Ok(())
}

/// Builds the global tracing subscriber configuration.
#[cfg(feature = "subscriber")]
fn init_tracing_subscriber(config: &InitConfig) -> Result<(), Exception> {
  use tracing_subscriber::FmtSubscriber;
  use tracing_subscriber::fmt::format;
  use tracing_subscriber::util::SubscriberInitExt;

  FmtSubscriber::builder()
    .event_format(format().compact())
    .log_internal_errors(true)
    .with_ansi(true)
    .with_file(config.tracing_source_file)
    .with_level(true)
    .with_line_number(config.tracing_source_line)
    .with_max_level(config.tracing_filter())
    .with_target(config.tracing_source_name)
    .with_thread_ids(config.tracing_thread_info)
    .with_thread_names(config.tracing_thread_info)
    .finish()
    .try_init()
    .map_err(error)
}

#[cfg(not(feature = "subscriber"))]
fn init_tracing_subscriber(_config: &InitConfig) -> Result<(), Exception> {
  Ok(())
}

/// Wraps the current panic hook so exception payloads print their message.
fn init_panic_hook() {
  let previous = panic::take_hook();

  panic::set_hook(Box::new(move |info| match panic_message(info.payload()) {
    Some(message) => {
      let thread: thread::Thread = thread::current();
      let name: &str = thread.name().unwrap_or("<unnamed>");

      match info.location() {
        Some(location) => eprintln!("thread '{name}' panicked at {location}:\n{message}"),
        None => eprintln!("thread '{name}' panicked:\n{message}"),
      }
    }
    None => previous(info),
  }));
}

/// Renders a panic payload raised with [`raise!`](crate::raise).
fn panic_message(payload: &(dyn Any + Send)) -> Option<String> {
  payload.downcast_ref::<Exception>().map(Exception::to_string)
}

/// Returns a generic `SysInv` exception with the given error message.
#[cold]
fn error<E>(error: E) -> Exception
where
  E: Display,
{
  Exception::new(ExceptionClass::Error, ExceptionGroup::SysInv, error)
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
