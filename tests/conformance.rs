//! Property tests pinning the algorithms to reference implementations
//! from std and to hand-rolled linear scans.

use proptest::prelude::*;

use cursorial::{
    binary_search, copy, find, find_if, max_element, min_element, minmax_element,
    par_find_if_with, partition_point, reduce, sum, transform, IntoCursors, SequentialExecutor,
    SliceWriter, ThreadExecutor, VecSink,
};

proptest! {
    #[test]
    fn find_agrees_with_a_linear_scan(values in prop::collection::vec(0u8..16, 0..64), probe in 0u8..16) {
        let (first, last) = (&values).into_cursors();

        let position = find(first, last, &probe);
        let reference = values.iter().position(|x| *x == probe);

        match reference {
            Some(index) => prop_assert_eq!(position.position(), index),
            None => prop_assert_eq!(position, last),
        }
    }

    #[test]
    fn sum_is_reduce_with_plus_over_zero(values in prop::collection::vec(-1000i64..1000, 0..64)) {
        let (first, last) = (&values).into_cursors();

        prop_assert_eq!(sum(first, last), reduce(first, last, 0, |acc, x| acc + x));
    }

    #[test]
    fn copy_preserves_content_and_length(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let (first, last) = (&values).into_cursors();

        let mut dest = vec![0; values.len()];
        let out = copy(first, last, SliceWriter::begin(&mut dest));

        prop_assert_eq!(out.position(), values.len());
        prop_assert_eq!(dest, values);
    }

    #[test]
    fn identity_transform_changes_nothing(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let (first, last) = (&values).into_cursors();

        let mut dest = Vec::new();
        transform(first, last, VecSink::new(&mut dest), |x| *x);

        prop_assert_eq!(dest, values);
    }

    #[test]
    fn extrema_agree_with_reference_scans(values in prop::collection::vec(0u8..8, 1..64)) {
        let (first, last) = (&values).into_cursors();

        let smallest = *values.iter().min().unwrap();
        let largest = *values.iter().max().unwrap();
        let first_min = values.iter().position(|x| *x == smallest).unwrap();
        let last_max = values.iter().rposition(|x| *x == largest).unwrap();

        prop_assert_eq!(min_element(first, last).position(), first_min);
        prop_assert_eq!(max_element(first, last).position(), last_max);

        let (min, max) = minmax_element(first, last);
        prop_assert_eq!(min.position(), first_min);
        prop_assert_eq!(max.position(), last_max);
    }

    #[test]
    fn partition_point_agrees_with_std(mut values in prop::collection::vec(0u16..100, 0..64), pivot in 0u16..100) {
        values.sort_unstable();
        let (first, last) = (&values).into_cursors();

        let split = partition_point(first, last, |x| *x < pivot);

        prop_assert_eq!(split.position(), values.partition_point(|x| *x < pivot));
    }

    #[test]
    fn binary_search_agrees_with_std(mut values in prop::collection::vec(0u16..100, 0..64), probe in 0u16..100) {
        values.sort_unstable();
        let (first, last) = (&values).into_cursors();

        prop_assert_eq!(
            binary_search(first, last, &probe),
            values.binary_search(&probe).is_ok()
        );
    }

    #[test]
    fn parallel_find_agrees_with_sequential_under_every_executor(
        values in prop::collection::vec(0u8..16, 1..512),
        probe in 0u8..16,
    ) {
        let (first, last) = (&values).into_cursors();

        let sequential = find_if(first, last, |x| *x == probe);
        let inline = par_find_if_with(first, last, |x| *x == probe, SequentialExecutor);
        let threaded = par_find_if_with(first, last, |x| *x == probe, ThreadExecutor);

        prop_assert_eq!(inline, sequential);
        prop_assert_eq!(threaded, sequential);
    }
}
