use crossbeam_utils::CachePadded;
use std::sync::OnceLock;

use crate::consts;
use crate::core::Registry;
use crate::core::RegistryConfig;
use crate::proc::Process;
use crate::proc::Thread;

static NODE: OnceLock<LocalNode> = OnceLock::new();

/// Local node state.
///
/// Owns the process-wide registries. Each registry sits on its own cache
/// line and has its own lock; the two never coordinate.
pub(crate) struct LocalNode {
  /// Global registry of tracked processes.
  procs: CachePadded<Registry<Process>>,
  /// Global registry of tracked threads.
  threads: CachePadded<Registry<Thread>>,
}

impl LocalNode {
  /// Creates a new local node with default capacity.
  #[inline]
  pub(crate) fn new() -> Self {
    Self::with_capacity(consts::CAP_REGISTERED_PROCS, consts::CAP_REGISTERED_THREADS)
  }

  /// Creates a new local node with the given registry capacities.
  pub(crate) fn with_capacity(procs: usize, threads: usize) -> Self {
    let procs: RegistryConfig = RegistryConfig::new()
      .name(consts::PROCESS_REGISTRY_NAME)
      .capacity(procs);

    let threads: RegistryConfig = RegistryConfig::new()
      .name(consts::THREAD_REGISTRY_NAME)
      .capacity(threads);

    Self {
      procs: CachePadded::new(Registry::with_config(procs)),
      threads: CachePadded::new(Registry::with_config(threads)),
    }
  }

  /// Installs `node` as the local node.
  ///
  /// Returns `false` if the local node was already initialized, either by
  /// a previous call or by a first access through [`LocalNode::this`].
  #[inline]
  pub(crate) fn install(node: Self) -> bool {
    NODE.set(node).is_ok()
  }

  /// Returns a reference to the local node, creating it on first access.
  #[inline]
  pub(crate) fn this() -> &'static Self {
    NODE.get_or_init(Self::new)
  }

  /// Returns a reference to the process registry.
  #[inline]
  pub(crate) fn procs() -> &'static Registry<Process> {
    &Self::this().procs
  }

  /// Returns a reference to the thread registry.
  #[inline]
  pub(crate) fn threads() -> &'static Registry<Thread> {
    &Self::this().threads
  }
}
