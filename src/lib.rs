//! A pure-Rust growable array with the ergonomics of a scripting-language
//! list.
//!
//! [`Array<T>`] owns its elements in a [`Vec<T>`] and adds:
//!
//! - Checked element access, [`Array::at()`] and `a[i]`, that fails with an
//!   [`IndexOutOfBounds`] naming the offending index and the call site.
//!   Negative indices are never counted from the end here.
//! - Slicing, [`Array::partial_array()`] and [`Array::partial_array_len()`],
//!   where negative starts and counts are counted from the end.
//! - Membership queries such as [`Array::contains()`] and
//!   [`Array::index_of()`].
//! - Sorting by textual rendering, [`Array::sort()`], or by any other
//!   [`ops::Comparator`] passed as a type parameter to [`Array::sort_with()`].
//!
//! ```
//! use sequence::{array, Array};
//! let mut a: Array<i32> = array![30, 4, 100];
//! a.sort();
//! assert_eq!(a.to_string(), "[100, 30, 4]");
//! assert_eq!(a.partial_array_len(-2, 1).unwrap(), array![30]);
//! ```
//!
//! Every [`IndexOutOfBounds`] is also reported as a `tracing` event at debug
//! level. The crate never installs a subscriber.
//!
//! With the `serde` feature, `Array<T>` serializes as a sequence.

mod error;
pub use error::{IndexOutOfBounds, Operation, Result};

mod index;
use index::{index_at, insert_at, normalized_start, normalized_range};

pub mod ops;

mod array;
pub use array::{Array};

mod new;

#[cfg(feature = "serde")]
mod serialize;

/// Constructs an [`Array`] from a list of elements, like `vec!`.
///
/// ```
/// use sequence::{array, Array};
/// let a = array!["x", "y"];
/// assert_eq!(a.len(), 2);
/// let empty: Array<u8> = array![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! array {
    () => { $crate::Array::new() };
    ($($t:expr),+ $(,)?) => { $crate::Array::from([$($t),+]) };
}
