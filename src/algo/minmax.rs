use std::cmp::Ordering;

use crate::{ForwardCursor, InputCursor, Sentinel};

/// Returns cursors at the smallest and largest elements of the range in a
/// single pass.
///
/// Tie-breaking matches the separate calls: first occurrence for the
/// minimum, last occurrence for the maximum. An empty range returns the
/// end position twice; a single element is both extrema.
///
/// Elements are consumed pairwise: one comparison orders the pair, then
/// only the locally-larger value challenges the running maximum and the
/// locally-smaller the running minimum. A range of `n` elements therefore
/// costs at most `3n/2` comparisons instead of the `2n` of two separate
/// scans.
pub fn minmax_element<C, S>(first: C, last: S) -> (C, C)
where
    C: ForwardCursor,
    S: Sentinel<C>,
    C::Item: Ord,
{
    minmax_element_by(first, last, Ord::cmp)
}

/// [`minmax_element`] under a caller-supplied strict weak ordering.
pub fn minmax_element_by<C, S, F>(mut first: C, last: S, mut compare: F) -> (C, C)
where
    C: ForwardCursor,
    S: Sentinel<C>,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    if last.is_end(&first) {
        return (first.clone(), first);
    }

    let mut min = first.clone();
    let mut max = first.clone();
    first.advance();

    if last.is_end(&first) {
        return (min, max);
    }

    // Place the second element with a single comparison; on a tie it goes
    // to the maximum slot, since it is the later position.
    if compare(first.read(), min.read()) == Ordering::Less {
        min = first.clone();
    } else {
        max = first.clone();
    }

    first.advance();

    while !last.is_end(&first) {
        let a = first.clone();
        first.advance();

        if last.is_end(&first) {
            // Unpaired trailing element: one comparison per extremum.
            if compare(a.read(), min.read()) == Ordering::Less {
                min = a;
            } else if compare(a.read(), max.read()) != Ordering::Less {
                max = a;
            }

            break;
        }

        let b = first.clone();
        first.advance();

        // Order the pair locally; on a tie `b` counts as the larger so the
        // later position reaches the maximum slot.
        let (smaller, larger) = if compare(b.read(), a.read()) == Ordering::Less {
            (b, a)
        } else {
            (a, b)
        };

        if compare(smaller.read(), min.read()) == Ordering::Less {
            min = smaller;
        }

        if compare(larger.read(), max.read()) != Ordering::Less {
            max = larger;
        }
    }

    (min, max)
}
