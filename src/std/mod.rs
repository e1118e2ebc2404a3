mod iter;
mod slice;
mod vec;

pub use iter::IterCursor;
pub use slice::{SliceCursor, SliceCursorMut, SliceWriter};
pub use vec::VecSink;
