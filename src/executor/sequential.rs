use super::{Executor, WORKERS};

/// Runs every worker in order on the calling thread.
///
/// No concurrency at all, which makes it the deterministic baseline the
/// parallel entry points are tested against.
#[derive(Default)]
pub struct Sequential;

impl Executor for Sequential {
    fn exec<T, F>(self, workers: [F; WORKERS]) -> [T; WORKERS]
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        workers.map(|worker| worker())
    }
}
