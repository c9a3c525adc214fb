use crate::consts;

// -----------------------------------------------------------------------------
// Init Config
// -----------------------------------------------------------------------------

/// Options applied by [`init::start`].
///
/// [`init::start`]: crate::init::start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitConfig {
  // ---------------------------------------------------------------------------
  // Registry Configuration
  // ---------------------------------------------------------------------------
  pub cap_registered_procs: usize,
  pub cap_registered_threads: usize,
  // ---------------------------------------------------------------------------
  // Tracing Subscriber Configuration
  // ---------------------------------------------------------------------------
  pub tracing_source_file: bool,
  pub tracing_source_line: bool,
  pub tracing_source_name: bool,
  pub tracing_thread_info: bool,
  pub tracing_verbose: bool,
  pub tracing_very_verbose: bool,
}

impl InitConfig {
  #[inline]
  pub const fn new() -> Self {
    Self {
      cap_registered_procs: consts::CAP_REGISTERED_PROCS,
      cap_registered_threads: consts::CAP_REGISTERED_THREADS,
      tracing_source_file: false,
      tracing_source_line: false,
      tracing_source_name: false,
      tracing_thread_info: true,
      tracing_verbose: false,
      tracing_very_verbose: false,
    }
  }

  /// Returns the maximum level the subscriber should record.
  #[inline]
  pub const fn tracing_filter(&self) -> tracing::Level {
    if self.tracing_very_verbose {
      tracing::Level::TRACE
    } else if self.tracing_verbose {
      tracing::Level::DEBUG
    } else {
      tracing::Level::INFO
    }
  }
}

impl Default for InitConfig {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------
