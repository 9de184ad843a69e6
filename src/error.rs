use thiserror::Error;

/// A request that does not match the rank of the [`Array`] it was made on.
///
/// The checked methods such as [`Array::get()`] and [`Array::try_scalar()`]
/// return this. The unchecked methods treat it as a bug in the caller; see
/// [`misuse()`].
///
/// [`Array`]: super::Array
/// [`Array::get()`]: super::Array::get
/// [`Array::try_scalar()`]: super::Array::try_scalar
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// Tried to index into an array of rank 0.
    #[error("cannot index into an array of rank 0")]
    NotInternal,

    /// Tried to read or write the scalar of an array of rank `rank > 0`.
    #[error("array of rank {rank} is not a scalar")]
    NotScalar { rank: usize },

    /// Tried to index past the end of the outermost dimension.
    #[error("Index {index:?} is out of bounds for size {extent:?}")]
    OutOfBounds { index: usize, extent: usize },
}

/// Reports `err` and terminates.
///
/// Without the `abort-on-misuse` feature this panics with the message of
/// `err`. With it, the process is aborted and cannot recover.
#[cold]
#[track_caller]
pub(crate) fn misuse(err: DimensionError) -> ! {
    let location = std::panic::Location::caller();
    tracing::error!(%err, %location, "dimension mismatch");
    if cfg!(feature = "abort-on-misuse") {
        std::process::abort();
    }
    panic!("{}", err);
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(DimensionError::NotInternal.to_string(), "cannot index into an array of rank 0");
        assert_eq!(DimensionError::NotScalar {rank: 2}.to_string(), "array of rank 2 is not a scalar");
        assert_eq!(
            DimensionError::OutOfBounds {index: 3, extent: 3}.to_string(),
            "Index 3 is out of bounds for size 3",
        );
    }

    #[cfg(not(feature = "abort-on-misuse"))]
    #[test]
    #[should_panic(expected = "array of rank 1 is not a scalar")]
    fn misuse_panics() {
        misuse(DimensionError::NotScalar {rank: 1});
    }
}
