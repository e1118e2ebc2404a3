//! Wall-clock benchmarking of closures.
//!
//! The measured code is oblivious to the harness: it is handed in as a
//! zero-argument closure, run `repeats` times per trial, and the per-trial
//! timings are reported as mean and standard deviation. The statistics are
//! computed with this crate's own reduction algorithms over a cursor pair.

use std::io::{self, Write};
use std::time::Instant;

use crate::{reduce, sum, IntoCursors};

/// Returns the elapsed wall-clock seconds for `repeats` calls of `op`.
pub fn time<F>(mut op: F, repeats: u32) -> f64
where
    F: FnMut(),
{
    let start = Instant::now();

    for _ in 0..repeats {
        op();
    }

    start.elapsed().as_secs_f64()
}

/// Runs `trials` timed trials of `repeats` calls each and writes the mean
/// and standard deviation of the trial times to `out`, tagged with
/// `label`.
pub fn repeat_to<W, F>(out: &mut W, mut op: F, repeats: u32, trials: u32, label: &str) -> io::Result<()>
where
    W: Write,
    F: FnMut(),
{
    let mut times = Vec::with_capacity(trials as usize);

    for _ in 0..trials {
        times.push(time(&mut op, repeats));
    }

    let (first, last) = (&times).into_cursors();
    let mean = sum(first, last) / f64::from(trials.max(1));
    let variance = reduce(first, last, 0.0, |acc, t| acc + (t - mean) * (t - mean))
        / f64::from(trials.max(1));

    writeln!(
        out,
        "Mean is {:.6} sec, stddev is {:.6} sec, {}",
        mean,
        variance.sqrt(),
        label
    )
}

/// [`repeat_to`] on standard output.
pub fn repeat<F>(op: F, repeats: u32, trials: u32, label: &str)
where
    F: FnMut(),
{
    repeat_to(&mut io::stdout().lock(), op, repeats, trials, label)
        .expect("failed to write benchmark report to stdout");
}
