use crate::{ForwardCursor, InputCursor};

/// Returns the cursor at the partition point of a counted range, along
/// with the number of elements remaining at and after it.
///
/// Precondition (unchecked): the `len` elements starting at `first` are
/// partitioned with respect to `pred`, meaning it holds for every element
/// before some split point and fails for every element at or after it. On
/// an unpartitioned range the result is unspecified; no error is raised.
///
/// Probes the midpoint of the remaining span: if the predicate holds there
/// the split lies strictly past it, otherwise at or before it. Predicate
/// evaluations are O(log len) for any forward cursor; the positional steps
/// are O(1) each only on the random-access tier, so weaker cursors pay
/// O(len) walking on top.
///
/// The counted form exists so a caller without an equality-comparable end
/// can still search, and the returned remainder lets it keep working on
/// the second partition without re-measuring it.
pub fn partition_point_n<C, P>(first: C, len: usize, mut pred: P) -> (C, usize)
where
    C: ForwardCursor,
    P: FnMut(&C::Item) -> bool,
{
    let mut cursor = first;
    let mut remaining = len;
    let mut consumed = 0;

    while remaining > 0 {
        let half = remaining / 2;
        let mut probe = cursor.clone();
        probe.advance_by(half);

        if pred(probe.read()) {
            probe.advance();
            cursor = probe;
            consumed += half + 1;
            remaining -= half + 1;
        } else {
            remaining = half;
        }
    }

    (cursor, len - consumed)
}

/// Returns the cursor at the partition point of `[first, last)`.
///
/// Same contract as [`partition_point_n`]; the length is measured with
/// [`distance_to`] first, so the overall bound is logarithmic only on the
/// random-access tier.
///
/// # Examples
///
/// ```
/// use cursorial::{partition_point, ForwardCursor, IntoCursors};
///
/// let values = [true, true, true, false, false];
/// let (first, last) = values[..].into_cursors();
///
/// let split = partition_point(first, last, |x| *x);
/// assert_eq!(first.distance_to(&split), 3);
/// ```
///
/// [`distance_to`]: crate::ForwardCursor::distance_to
pub fn partition_point<C, P>(first: C, last: C, pred: P) -> C
where
    C: ForwardCursor,
    P: FnMut(&C::Item) -> bool,
{
    let len = first.distance_to(&last);

    partition_point_n(first, len, pred).0
}

/// Returns whether `value` occurs in the sorted range `[first, last)`.
///
/// Precondition (unchecked): the range is partitioned by `element <
/// value`; any range sorted by `<` qualifies. On an unordered range the
/// result is unspecified, never an error. Empty ranges and absent values
/// return `false`.
pub fn binary_search<C>(first: C, last: C, value: &C::Item) -> bool
where
    C: ForwardCursor,
    C::Item: Ord,
{
    let position = partition_point(first, last.clone(), |element| element < value);

    position != last && position.read() == value
}
