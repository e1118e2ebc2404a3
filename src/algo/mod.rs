mod copy;
mod find;
mod inner_product;
mod max;
mod min;
mod minmax;
mod par_find;
mod partition;
mod reduce;
mod transform;

pub use self::copy::copy;
pub use self::find::{find, find_if, find_unbounded};
pub use self::inner_product::{inner_product, inner_product_unseq};
pub use self::max::{max_element, max_element_by};
pub use self::min::{min_element, min_element_by};
pub use self::minmax::{minmax_element, minmax_element_by};
pub use self::par_find::par_find_if_with;
pub use self::partition::{binary_search, partition_point, partition_point_n};
pub use self::reduce::{reduce, sum, zip_reduce, zip_reduce_unseq};
pub use self::transform::{transform, transform_in_place};

#[cfg(feature = "default-executor")]
pub use self::par_find::{par_find, par_find_if};
