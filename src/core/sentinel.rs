/// An end-of-range marker for cursors of type `C`.
///
/// A range is a begin cursor plus a sentinel: the half-open interval of
/// positions starting at the cursor and ending where the sentinel first
/// reports [`is_end`]. The sentinel may be a cursor of the same type
/// compared by position ([`SliceCursor`] terminates its own ranges that
/// way, and forward cursor types are expected to provide the same
/// one-line impl), a marker a cursor can answer itself ([`Exhausted`]), or
/// a bound that never arrives ([`Unreachable`]). The range is empty iff
/// the begin cursor already satisfies the sentinel.
///
/// [`is_end`]: Sentinel::is_end
/// [`SliceCursor`]: crate::SliceCursor
pub trait Sentinel<C> {
    /// Returns `true` if `cursor` has reached the end of the range.
    fn is_end(&self, cursor: &C) -> bool;
}

/// A sentinel that no cursor ever reaches.
///
/// `is_end` is the constant `false`, so the comparison folds away and the
/// traversal loop loses its bounds check. Supplying it asserts that the
/// algorithm terminates for some other reason, typically because a match
/// is known to exist (see [`find_unbounded`]). If that promise is broken
/// the cursor runs off its storage: cursors over bounded storage panic,
/// nothing stops an adaptor over an infinite source.
///
/// [`find_unbounded`]: crate::find_unbounded
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Unreachable;

impl<C> Sentinel<C> for Unreachable {
    #[inline]
    fn is_end(&self, _cursor: &C) -> bool {
        false
    }
}

/// A sentinel for cursors that can detect their own exhaustion.
///
/// Single-pass cursors often know when they are done without help (an
/// iterator adaptor runs dry, a write-through cursor consumes its slice)
/// but cannot be compared against a second cursor of their own type.
/// `Exhausted` delegates the end test to the cursor itself; each such
/// cursor type provides the matching [`Sentinel`] impl.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Exhausted;
