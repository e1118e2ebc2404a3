use crate::{transform, InputCursor, OutputCursor, Sentinel};

/// Writes every element of the source range through `out` in order and
/// returns the advanced output cursor.
///
/// [`transform`] with the identity projection; the same capacity contract
/// applies, and the returned cursor (one past the last written element)
/// lets callers chain further writes.
pub fn copy<C, S, O>(first: C, last: S, out: O) -> O
where
    C: InputCursor,
    S: Sentinel<C>,
    O: OutputCursor<Item = C::Item>,
    C::Item: Clone,
{
    transform(first, last, out, Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{distance, IntoCursors, SliceWriter};

    #[test]
    fn copies_every_position_in_order() {
        let source = [3, 1, 4, 1, 5];
        let mut dest = [0; 5];

        let (first, last) = source[..].into_cursors();
        let out = copy(first, last, SliceWriter::begin(&mut dest));

        assert_eq!(out.position(), distance(first, &last));
        assert_eq!(dest, source);
    }

    #[test]
    fn returned_cursor_chains() {
        let a = [1, 2];
        let b = [3, 4];
        let mut dest = [0; 4];

        let (first_a, last_a) = a[..].into_cursors();
        let (first_b, last_b) = b[..].into_cursors();

        let out = copy(first_a, last_a, SliceWriter::begin(&mut dest));
        let out = copy(first_b, last_b, out);

        assert_eq!(out.position(), 4);
        assert_eq!(dest, [1, 2, 3, 4]);
    }
}
