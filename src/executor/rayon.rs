use super::{Executor, WORKERS};

/// Runs the workers on the global rayon-core thread pool.
///
/// Nested joins pair the four workers into a balanced task tree, so the
/// pool can steal them independently while `exec` keeps the join-all
/// barrier.
#[derive(Default)]
pub struct Rayon;

impl Executor for Rayon {
    fn exec<T, F>(self, workers: [F; WORKERS]) -> [T; WORKERS]
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        let [w1, w2, w3, w4] = workers;

        let ((r1, r2), (r3, r4)) =
            rayon_core::join(|| rayon_core::join(w1, w2), || rayon_core::join(w3, w4));

        [r1, r2, r3, r4]
    }
}
