mod sequential;
#[cfg(feature = "thread-executor")]
mod thread;

#[cfg(feature = "rayon-executor")]
mod rayon;

pub use sequential::Sequential as SequentialExecutor;
#[cfg(feature = "thread-executor")]
pub use thread::Thread as ThreadExecutor;

#[cfg(feature = "rayon-executor")]
pub use self::rayon::Rayon as RayonExecutor;

#[cfg(feature = "rayon-executor")]
pub type DefaultExecutor = RayonExecutor;

#[cfg(all(feature = "thread-executor", not(feature = "rayon-executor")))]
pub type DefaultExecutor = ThreadExecutor;

#[cfg(all(
    feature = "default-executor",
    not(feature = "thread-executor"),
    not(feature = "rayon-executor")
))]
pub type DefaultExecutor = SequentialExecutor;

/// The fixed number of workers every executor runs.
///
/// The chunked algorithms split into this many contiguous sub-ranges,
/// statically, not sized to the hardware.
pub const WORKERS: usize = 4;

/// Runs a fixed set of independent workers and hands back their results.
///
/// The seam between the chunked parallel algorithms and whatever actually
/// provides the concurrency. One worker per sub-range; `exec` is a
/// join-all barrier that returns only once every worker has finished, with
/// the results in worker order, and nothing cancels a worker whose result
/// will end up being discarded. A worker that never returns stalls the
/// whole call.
pub trait Executor {
    /// Runs all workers to completion and returns their results in order.
    fn exec<T, F>(self, workers: [F; WORKERS]) -> [T; WORKERS]
    where
        F: FnOnce() -> T + Send,
        T: Send;
}
