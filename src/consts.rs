//! Registry configuration constants.

// -----------------------------------------------------------------------------
// Registry - Naming
// -----------------------------------------------------------------------------

/// Name reported in diagnostics for registries built without a name.
pub const DEFAULT_REGISTRY_NAME: &str = "registry";

/// Name of the global process registry.
pub const PROCESS_REGISTRY_NAME: &str = "process";

/// Name of the global thread registry.
pub const THREAD_REGISTRY_NAME: &str = "thread";

// -----------------------------------------------------------------------------
// Registry - Memory Allocation
// -----------------------------------------------------------------------------

/// Number of pre-allocated entries for registries built without a capacity.
pub const CAP_REGISTRY_DEFAULT: usize = 0;

/// Number of pre-allocated entries in the global process registry.
pub const CAP_REGISTERED_PROCS: usize = 64;

/// Number of pre-allocated entries in the global thread registry.
///
/// Most tracked processes run more than one thread.
pub const CAP_REGISTERED_THREADS: usize = 4 * CAP_REGISTERED_PROCS;

