mod cursor;
mod into_cursors;
mod sentinel;

pub use cursor::{
    distance, BidirectionalCursor, ContiguousCursor, Cursor, ForwardCursor, InputCursor,
    OutputCursor, RandomAccessCursor,
};
pub use into_cursors::IntoCursors;
pub use sentinel::{Exhausted, Sentinel, Unreachable};
