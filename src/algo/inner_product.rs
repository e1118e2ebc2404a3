use std::ops::{Add, Mul};

use crate::{zip_reduce, zip_reduce_unseq, InputCursor, RandomAccessCursor, Sentinel};

/// The sum of element-wise products of two ranges, seeded with zero.
///
/// [`zip_reduce`] with multiply as the combiner and add as the reducer;
/// strictly sequential, so the result is reproducible for floating point.
/// The second range must be at least as long as the first.
pub fn inner_product<C1, S, C2>(first1: C1, last1: S, first2: C2) -> C1::Item
where
    C1: InputCursor,
    S: Sentinel<C1>,
    C2: InputCursor<Item = C1::Item>,
    C1::Item: Default + Copy + Add<Output = C1::Item> + Mul<Output = C1::Item>,
{
    zip_reduce(
        first1,
        last1,
        first2,
        C1::Item::default(),
        |a, b| *a * *b,
        |acc, value| acc + value,
    )
}

/// [`inner_product`] through the unsequenced [`zip_reduce_unseq`] entry.
///
/// `BLOCK` of 4 or 8 are the shapes worth benchmarking. Floating point
/// sums come out rounded differently than [`inner_product`]; see
/// [`zip_reduce_unseq`] for the contract.
pub fn inner_product_unseq<const BLOCK: usize, C1, C2>(
    first1: C1,
    last1: C1,
    first2: C2,
) -> C1::Item
where
    C1: RandomAccessCursor + Sentinel<C1>,
    C2: RandomAccessCursor<Item = C1::Item>,
    C1::Item: Default + Copy + Add<Output = C1::Item> + Mul<Output = C1::Item>,
{
    zip_reduce_unseq::<BLOCK, _, _, _, _, _>(
        first1,
        last1,
        first2,
        C1::Item::default(),
        |a, b| *a * *b,
        |acc, value| acc + value,
    )
}
