mod algo;
mod core;
mod executor;
mod std;

pub mod timer;

#[cfg(feature = "bench")]
pub mod dataset;

pub use self::algo::{
    binary_search, copy, find, find_if, find_unbounded, inner_product, inner_product_unseq,
    max_element, max_element_by, min_element, min_element_by, minmax_element, minmax_element_by,
    par_find_if_with, partition_point, partition_point_n, reduce, sum, transform,
    transform_in_place, zip_reduce, zip_reduce_unseq,
};
pub use self::core::{
    distance, BidirectionalCursor, ContiguousCursor, Cursor, Exhausted, ForwardCursor,
    InputCursor, IntoCursors, OutputCursor, RandomAccessCursor, Sentinel, Unreachable,
};
pub use self::executor::{Executor, SequentialExecutor, WORKERS};
pub use self::std::{IterCursor, SliceCursor, SliceCursorMut, SliceWriter, VecSink};

#[cfg(feature = "default-executor")]
pub use self::algo::{par_find, par_find_if};
#[cfg(feature = "default-executor")]
pub use self::executor::DefaultExecutor;
#[cfg(feature = "rayon-executor")]
pub use self::executor::RayonExecutor;
#[cfg(feature = "thread-executor")]
pub use self::executor::ThreadExecutor;
