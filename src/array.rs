use super::{DimensionError, error::misuse};

/// The contents of an [`Array`]: exactly one of a scalar or a list of
/// sub-arrays.
#[derive(Debug, PartialEq, Eq)]
enum Node<T> {
    Leaf(T),
    Internal {
        /// Always at least 1. Stored because `children` may be empty.
        rank: usize,
        children: Vec<Array<T>>,
    },
}

/// A rectangular array of `T` of any rank.
///
/// An `Array` of rank 0 holds exactly one `T`. An `Array` of rank `n > 0`
/// holds [`extent()`] `Array`s of rank `n - 1`, all of the same shape.
///
/// The shape is fixed at construction. The `T`s can be changed, but nothing
/// can be added, removed or reshaped.
///
/// ```
/// use mdtree::Array;
/// let mut a: Array<i32> = Array::new([2, 3]);
/// a[0][0].assign_scalar(5);
/// assert_eq!(*a[0][0].as_scalar(), 5);
/// assert_eq!(*a[0][1].as_scalar(), 0);
/// ```
///
/// [`extent()`]: Self::extent
#[derive(Debug, PartialEq, Eq)]
pub struct Array<T>(Node<T>);

impl<T> Array<T> {
    /// Constructs an `Array` of rank 0 holding `value`.
    pub fn leaf(value: T) -> Self { Self(Node::Leaf(value)) }

    /// Assembles an `Array` of rank `rank` from `children`.
    ///
    /// The caller must ensure that `rank > 0` and that the `children` have
    /// rank `rank - 1` and identical shapes.
    pub(crate) fn internal(rank: usize, children: Vec<Self>) -> Self {
        debug_assert!(rank > 0);
        debug_assert!(children.iter().all(|c| c.rank() + 1 == rank));
        Self(Node::Internal {rank, children})
    }

    /// The number of dimensions of `self`.
    pub fn rank(&self) -> usize {
        match &self.0 {
            Node::Leaf(_) => 0,
            Node::Internal {rank, ..} => *rank,
        }
    }

    /// The size of the outermost dimension of `self`, or `0` if `self` is a
    /// scalar.
    pub fn extent(&self) -> usize {
        match &self.0 {
            Node::Leaf(_) => 0,
            Node::Internal {children, ..} => children.len(),
        }
    }

    /// Returns `true` if `self` has rank 0.
    pub fn is_scalar(&self) -> bool { matches!(self.0, Node::Leaf(_)) }

    // ------------------------------------------------------------------------

    /// Borrow the sub-array at position `index` of the outermost dimension.
    pub fn get(&self, index: usize) -> Result<&Self, DimensionError> {
        match &self.0 {
            Node::Leaf(_) => Err(DimensionError::NotInternal),
            Node::Internal {children, ..} => children.get(index).ok_or(
                DimensionError::OutOfBounds {index, extent: children.len()}
            ),
        }
    }

    /// Mutably borrow the sub-array at position `index` of the outermost
    /// dimension.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Self, DimensionError> {
        match &mut self.0 {
            Node::Leaf(_) => Err(DimensionError::NotInternal),
            Node::Internal {children, ..} => {
                let extent = children.len();
                children.get_mut(index).ok_or(DimensionError::OutOfBounds {index, extent})
            },
        }
    }

    /// Borrow the scalar held by `self`.
    pub fn try_scalar(&self) -> Result<&T, DimensionError> {
        match &self.0 {
            Node::Leaf(value) => Ok(value),
            Node::Internal {rank, ..} => Err(DimensionError::NotScalar {rank: *rank}),
        }
    }

    /// Mutably borrow the scalar held by `self`.
    pub fn try_scalar_mut(&mut self) -> Result<&mut T, DimensionError> {
        match &mut self.0 {
            Node::Leaf(value) => Ok(value),
            Node::Internal {rank, ..} => Err(DimensionError::NotScalar {rank: *rank}),
        }
    }

    /// Replace the scalar held by `self` with `value`.
    pub fn try_assign(&mut self, value: T) -> Result<(), DimensionError> {
        *self.try_scalar_mut()? = value;
        Ok(())
    }

    // ------------------------------------------------------------------------

    /// Like [`get()`] but treats errors as bugs.
    ///
    /// # Panics
    ///
    /// Panics if `self` has rank 0 or if `index >= self.extent()`. With the
    /// `abort-on-misuse` feature, aborts instead.
    ///
    /// [`get()`]: Self::get
    #[track_caller]
    pub fn index(&self, index: usize) -> &Self {
        match self.get(index) {
            Ok(x) => x,
            Err(err) => misuse(err),
        }
    }

    /// Like [`get_mut()`] but treats errors as bugs.
    ///
    /// # Panics
    ///
    /// As for [`index()`].
    ///
    /// [`get_mut()`]: Self::get_mut
    /// [`index()`]: Self::index
    #[track_caller]
    pub fn index_mut(&mut self, index: usize) -> &mut Self {
        match self.get_mut(index) {
            Ok(x) => x,
            Err(err) => misuse(err),
        }
    }

    /// Borrow the scalar held by `self`.
    ///
    /// # Panics
    ///
    /// Panics if `self` has rank greater than 0. With the `abort-on-misuse`
    /// feature, aborts instead.
    #[track_caller]
    pub fn as_scalar(&self) -> &T {
        match self.try_scalar() {
            Ok(x) => x,
            Err(err) => misuse(err),
        }
    }

    /// Mutably borrow the scalar held by `self`.
    ///
    /// This can change the `T` but not the shape of `self`.
    ///
    /// # Panics
    ///
    /// As for [`as_scalar()`].
    ///
    /// [`as_scalar()`]: Self::as_scalar
    #[track_caller]
    pub fn as_scalar_mut(&mut self) -> &mut T {
        match self.try_scalar_mut() {
            Ok(x) => x,
            Err(err) => misuse(err),
        }
    }

    /// Replace the scalar held by `self` with `value`.
    ///
    /// # Panics
    ///
    /// As for [`as_scalar()`].
    ///
    /// [`as_scalar()`]: Self::as_scalar
    #[track_caller]
    pub fn assign_scalar(&mut self, value: T) {
        if let Err(err) = self.try_assign(value) { misuse(err) }
    }
}

impl<T: Default> Array<T> {
    /// Constructs an `Array` of rank 0 holding `T::default()`.
    pub fn scalar() -> Self { Self::leaf(T::default()) }

    /// Constructs an `Array` of shape `shape`, filled with `T::default()`.
    ///
    /// `shape[0]` is the size of the outermost dimension. An empty `shape`
    /// gives the same result as [`scalar()`].
    ///
    /// ```
    /// use mdtree::Array;
    /// let a: Array<f32> = Array::new(vec![4, 0, 2]);
    /// assert_eq!(a.rank(), 3);
    /// assert_eq!(a.extent(), 4);
    /// assert_eq!(a[3].rank(), 2);
    /// assert_eq!(a[3].extent(), 0);
    /// ```
    ///
    /// [`scalar()`]: Self::scalar
    pub fn new(shape: impl AsRef<[usize]>) -> Self {
        let shape = shape.as_ref();
        tracing::trace!(?shape, "new array");
        Self::from_shape(shape)
    }

    fn from_shape(shape: &[usize]) -> Self {
        match shape.split_first() {
            None => Self::scalar(),
            Some((&extent, tail)) => Self::internal(
                shape.len(),
                (0..extent).map(|_| Self::from_shape(tail)).collect(),
            ),
        }
    }
}

impl<T: Default> Default for Array<T> {
    fn default() -> Self { Self::scalar() }
}

impl<T> std::ops::Index<usize> for Array<T> {
    type Output = Self;
    #[track_caller]
    fn index(&self, index: usize) -> &Self { Array::index(self, index) }
}

impl<T> std::ops::IndexMut<usize> for Array<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self { Array::index_mut(self, index) }
}

// ----------------------------------------------------------------------------
