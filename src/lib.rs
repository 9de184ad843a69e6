//! A pure-Rust library providing rectangular arrays of any rank, stored as a
//! tree of individually owned scalars.
//!
//! An [`Array<T>`] of rank 0 holds one `T`. An `Array<T>` of rank `n > 0`
//! holds a list of `Array<T>`s of rank `n - 1`, one for each index along its
//! outermost dimension. Every sub-array at the same depth has the same shape,
//! so the tree is never ragged. The shape is chosen once, by [`Array::new()`],
//! and never changes; only the scalars at the leaves can be modified.
//!
//! Methods that only make sense for one kind of `Array` come in two flavours.
//! [`Array::index()`], [`Array::as_scalar()`] and [`Array::assign_scalar()`]
//! treat a rank mismatch as a bug in the caller and terminate. [`Array::get()`],
//! [`Array::try_scalar()`] and [`Array::try_assign()`] instead return a
//! [`DimensionError`].
//!
//! [`deep_copy()`] (also available as [`Clone::clone()`]) duplicates an entire
//! tree, sharing nothing with the original.
//!
//! ### Features
//!
//! - `abort-on-misuse` - Call [`std::process::abort()`] instead of panicking
//! when an unchecked method is called on an `Array` of the wrong rank.

mod error;
pub use error::{DimensionError};

mod array;
pub use array::{Array};

mod copy;
pub use copy::{deep_copy};
