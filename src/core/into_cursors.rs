use super::{InputCursor, Sentinel};

/// Conversion into a begin cursor / end sentinel pair.
///
/// The cursor-and-sentinel form is what the algorithms consume; this trait
/// is the convenience seam that turns a borrowed container into that form
/// in one call. Implementations for the standard containers live in the
/// `std` module of this crate.
///
/// # Examples
///
/// ```
/// use cursorial::{find, ForwardCursor, IntoCursors};
///
/// let values = vec![4, 8, 15, 16, 23, 42];
/// let (first, last) = (&values).into_cursors();
///
/// let position = find(first, last, &15);
/// assert_eq!(position.distance_to(&last), 4);
/// ```
pub trait IntoCursors {
    /// The element type of the resulting cursors.
    type Item;

    /// The begin cursor type.
    type Cursor: InputCursor<Item = Self::Item>;

    /// The end sentinel type.
    type End: Sentinel<Self::Cursor>;

    /// Splits `self` into a cursor at the first position and a sentinel
    /// for the one-past-the-last position.
    fn into_cursors(self) -> (Self::Cursor, Self::End);
}
