use crate::executor::{Executor, WORKERS};
use crate::{find_if, ForwardCursor, RandomAccessCursor, Sentinel};

#[cfg(feature = "default-executor")]
use crate::executor::DefaultExecutor;

/// [`find_if`] across a fixed number of concurrent workers.
///
/// The range is split into [`WORKERS`] contiguous, non-overlapping
/// sub-ranges of `len / 4` elements (the remainder rides in the last one),
/// and each worker runs the ordinary sequential [`find_if`] over its own
/// sub-range. After the join-all barrier the results are combined in
/// left-to-right priority order: the first sub-range whose worker stopped
/// strictly inside its own bound wins, and later results are discarded
/// (those workers already ran to completion; the wasted work is accepted).
/// When no earlier sub-range matched, the last sub-range's result is the
/// answer; its local end is the overall end, so "not found" comes out
/// right for free.
///
/// The result equals the sequential `find_if(first, last, pred)` (first
/// matching position, or `last`) provided the predicate touches no state
/// shared across sub-ranges. That is the caller's obligation, as is
/// supplying a non-empty range; an empty range is not rejected but its
/// behavior is unspecified.
///
/// The end is a cursor, not a generic sentinel: chunk sizing needs a
/// measurable range, so an unbounded marker cannot be supplied here.
pub fn par_find_if_with<C, P, E>(first: C, last: C, pred: P, executor: E) -> C
where
    C: RandomAccessCursor + Sentinel<C> + Send,
    P: Fn(&C::Item) -> bool + Sync,
    E: Executor,
{
    let chunk = first.distance_to(&last) / WORKERS;

    let mut limit1 = first.clone();
    limit1.advance_by(chunk);
    let mut limit2 = limit1.clone();
    limit2.advance_by(chunk);
    let mut limit3 = limit2.clone();
    limit3.advance_by(chunk);

    let pred = &pred;
    let worker = |begin: C, end: C| move || find_if(begin, end, pred);

    let [found1, found2, found3, found4] = executor.exec([
        worker(first, limit1.clone()),
        worker(limit1.clone(), limit2.clone()),
        worker(limit2.clone(), limit3.clone()),
        worker(limit3.clone(), last),
    ]);

    if found1 != limit1 {
        return found1;
    }

    if found2 != limit2 {
        return found2;
    }

    if found3 != limit3 {
        return found3;
    }

    found4
}

/// [`par_find_if_with`] on the [`DefaultExecutor`].
#[cfg(feature = "default-executor")]
pub fn par_find_if<C, P>(first: C, last: C, pred: P) -> C
where
    C: RandomAccessCursor + Sentinel<C> + Send,
    P: Fn(&C::Item) -> bool + Sync,
{
    par_find_if_with(first, last, pred, DefaultExecutor::default())
}

/// [`par_find_if`] for a value instead of a predicate.
#[cfg(feature = "default-executor")]
pub fn par_find<C>(first: C, last: C, value: &C::Item) -> C
where
    C: RandomAccessCursor + Sentinel<C> + Send,
    C::Item: PartialEq + Sync,
{
    par_find_if(first, last, |item| item == value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::SequentialExecutor;
    use crate::{InputCursor, IntoCursors};

    #[test]
    fn agrees_with_sequential_find_on_the_last_element() {
        let values: Vec<u32> = (0..1_000_000).collect();
        let (first, last) = (&values).into_cursors();

        let parallel = par_find_if(first, last, |x| *x == 999_999);
        let sequential = find_if(first, last, |x| *x == 999_999);

        assert_eq!(*parallel.read(), 999_999);
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn absent_value_yields_end() {
        let values: Vec<u32> = (0..4096).collect();
        let (first, last) = (&values).into_cursors();

        assert_eq!(par_find_if(first, last, |x| *x > 10_000), last);
    }

    #[test]
    fn earlier_subrange_wins_over_a_later_match() {
        // Matches in the second and the fourth quarter; the second must win.
        let mut values = vec![0u8; 4000];
        values[1500] = 1;
        values[3900] = 1;
        let (first, last) = (&values).into_cursors();

        let position = par_find_if(first, last, |x| *x == 1);

        assert_eq!(position.position(), 1500);
    }

    #[test]
    fn first_position_wins_inside_one_subrange() {
        let values = [0, 7, 7, 0, 0, 0, 0, 0];
        let (first, last) = values[..].into_cursors();

        assert_eq!(par_find(first, last, &7).position(), 1);
    }

    #[test]
    fn ranges_shorter_than_the_worker_count() {
        let values = [5, 6];
        let (first, last) = values[..].into_cursors();

        assert_eq!(par_find(first, last, &6).position(), 1);
        assert_eq!(par_find(first, last, &9), last);
    }

    #[test]
    fn sequential_executor_is_equivalent() {
        let values: Vec<i32> = (0..10_000).map(|x| x * 3 % 7).collect();
        let (first, last) = (&values).into_cursors();

        let threaded = par_find_if(first, last, |x| *x == 6);
        let inline = par_find_if_with(first, last, |x| *x == 6, SequentialExecutor);

        assert_eq!(threaded, inline);
        assert_eq!(threaded, find_if(first, last, |x| *x == 6));
    }
}
