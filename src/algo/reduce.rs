use std::ops::AddAssign;

use crate::{ForwardCursor, InputCursor, RandomAccessCursor, Sentinel};

/// Folds the range into `init`, strictly left to right.
///
/// `op` only has to be total over the reachable values; nothing about it
/// needs to be associative, because the evaluation order is fixed. An
/// empty range returns `init` unchanged.
///
/// # Examples
///
/// ```
/// use cursorial::{reduce, IntoCursors};
///
/// let values = [1, 2, 3, 4];
/// let (first, last) = values[..].into_cursors();
///
/// assert_eq!(reduce(first, last, 0, |acc, x| acc + x), 10);
/// ```
pub fn reduce<C, S, T, Op>(mut first: C, last: S, mut init: T, mut op: Op) -> T
where
    C: InputCursor,
    S: Sentinel<C>,
    Op: FnMut(T, &C::Item) -> T,
{
    while !last.is_end(&first) {
        init = op(init, first.read());
        first.advance();
    }

    init
}

/// [`reduce`] with addition, seeded with the element type's zero value.
pub fn sum<C, S>(mut first: C, last: S) -> C::Item
where
    C: InputCursor,
    S: Sentinel<C>,
    C::Item: Default + for<'x> AddAssign<&'x C::Item>,
{
    let mut init = C::Item::default();

    while !last.is_end(&first) {
        init += first.read();
        first.advance();
    }

    init
}

/// Folds two ranges combined element-wise, strictly left to right.
///
/// Computes `fold(.. fold(init, combine(a1, b1)) .., combine(an, bn))`
/// where the first range supplies the length. The second range must be at
/// least as long as the first; there is no check, and a shorter second
/// range is read out of bounds (a slice cursor panics).
pub fn zip_reduce<C1, S, C2, T, B, R>(
    mut first1: C1,
    last1: S,
    mut first2: C2,
    mut init: T,
    mut combine: B,
    mut fold: R,
) -> T
where
    C1: InputCursor,
    S: Sentinel<C1>,
    C2: InputCursor,
    B: FnMut(&C1::Item, &C2::Item) -> T,
    R: FnMut(T, T) -> T,
{
    while !last1.is_end(&first1) {
        init = fold(init, combine(first1.read(), first2.read()));
        first1.advance();
        first2.advance();
    }

    init
}

/// The unsequenced form of [`zip_reduce`]: combines `BLOCK` positions at a
/// time and folds them as a balanced pairwise tree instead of strictly
/// left to right.
///
/// While more than `BLOCK` elements remain, the `BLOCK` per-lane `combine`
/// results are independent of each other, which is what buys the compiler
/// and the hardware instruction-level parallelism; the lane results are
/// then folded pairwise and the tree root is folded into the accumulator
/// before both cursors jump ahead by `BLOCK`. The remainder falls back to
/// the sequential [`zip_reduce`].
///
/// The regrouping is only equivalent to the sequential fold when `fold` is
/// associative (and the pairwise tree additionally assumes regrouping
/// across lanes is acceptable). Folding floating point values here gives
/// differently-rounded results than [`zip_reduce`]. That trade is the
/// point of this entry, and it is never made silently on the caller's
/// behalf.
///
/// Random access is required because lanes are fetched through indexed
/// reads; cursors of weaker tiers take the sequential entry point instead.
pub fn zip_reduce_unseq<const BLOCK: usize, C1, C2, T, B, R>(
    mut first1: C1,
    last1: C1,
    mut first2: C2,
    mut init: T,
    mut combine: B,
    mut fold: R,
) -> T
where
    C1: RandomAccessCursor + Sentinel<C1>,
    C2: RandomAccessCursor,
    T: Copy,
    B: FnMut(&C1::Item, &C2::Item) -> T,
    R: FnMut(T, T) -> T,
{
    const { assert!(BLOCK >= 2, "a fused block needs at least two lanes") };

    while first1.distance_to(&last1) > BLOCK {
        let mut lanes: [T; BLOCK] =
            std::array::from_fn(|i| combine(first1.read_at(i), first2.read_at(i)));

        // Pairwise tree over the lanes; an odd lane carries to the next round.
        let mut width = BLOCK;
        while width > 1 {
            let half = width / 2;

            for i in 0..half {
                lanes[i] = fold(lanes[2 * i], lanes[2 * i + 1]);
            }

            if width % 2 == 1 {
                lanes[half] = lanes[width - 1];
                width = half + 1;
            } else {
                width = half;
            }
        }

        init = fold(init, lanes[0]);
        first1.advance_by(BLOCK);
        first2.advance_by(BLOCK);
    }

    zip_reduce(first1, last1, first2, init, combine, fold)
}
