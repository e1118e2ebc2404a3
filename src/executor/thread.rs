use std::panic;
use std::thread;

use super::{Executor, WORKERS};

/// Spawns one scoped OS thread per worker and joins them all.
///
/// Scoped spawning is what lets workers borrow the caller's storage
/// through their cursors. A worker panic is resumed on the calling thread
/// after the join.
#[derive(Default)]
pub struct Thread;

impl Executor for Thread {
    fn exec<T, F>(self, workers: [F; WORKERS]) -> [T; WORKERS]
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        thread::scope(|scope| {
            workers
                .map(|worker| scope.spawn(worker))
                .map(|handle| handle.join().unwrap_or_else(|e| panic::resume_unwind(e)))
        })
    }
}
