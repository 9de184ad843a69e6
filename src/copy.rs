use super::{Array};

/// Returns an `Array` with the same shape and the same `T`s as `source`,
/// sharing nothing with it.
///
/// Only the public methods of `source` are used, so this also serves as a
/// check that they are enough to observe everything an `Array` contains.
///
/// ```
/// use mdtree::{Array, deep_copy};
/// let mut a: Array<u32> = Array::new([2, 2]);
/// a[1][0].assign_scalar(4);
/// let mut b = deep_copy(&a);
/// b[1][0].assign_scalar(5);
/// assert_eq!(*a[1][0].as_scalar(), 4);
/// assert_eq!(*b[1][0].as_scalar(), 5);
/// ```
pub fn deep_copy<T: Clone>(source: &Array<T>) -> Array<T> {
    if source.is_scalar() { return Array::leaf(source.as_scalar().clone()); }
    Array::internal(
        source.rank(),
        (0..source.extent()).map(|i| deep_copy(source.index(i))).collect(),
    )
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self { deep_copy(self) }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Assigns a distinct value to every scalar in `a`, starting at `next`.
    fn number(a: &mut Array<u64>, next: &mut u64) {
        if a.is_scalar() {
            a.assign_scalar(*next);
            *next += 1;
        } else {
            for i in 0..a.extent() { number(a.index_mut(i), next); }
        }
    }

    /// Adds `delta` to every scalar in `a`.
    fn bump(a: &mut Array<u64>, delta: u64) {
        if a.is_scalar() {
            *a.as_scalar_mut() += delta;
        } else {
            for i in 0..a.extent() { bump(a.index_mut(i), delta); }
        }
    }

    #[test]
    fn scalar() {
        let a = Array::leaf(String::from("abc"));
        let mut b = deep_copy(&a);
        assert_eq!(a, b);
        b.as_scalar_mut().push('d');
        assert_eq!(a.as_scalar(), "abc");
        assert_eq!(b.as_scalar(), "abcd");
    }

    #[test]
    fn zero_extent() {
        let a: Array<u8> = Array::new([3, 0, 2]);
        let b = deep_copy(&a);
        assert_eq!(a, b);
        assert_eq!(b[2].rank(), 2);
        assert_eq!(b[2].extent(), 0);
    }

    #[test]
    fn clone() {
        let mut a: Array<u64> = Array::new([2, 3, 4]);
        number(&mut a, &mut 0);
        let mut b = a.clone();
        assert_eq!(a, b);
        b[1][2][3].assign_scalar(1000);
        assert_eq!(*a[1][2][3].as_scalar(), 23);
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn independent(shape in prop::collection::vec(0usize..=3, 0..=4)) {
            let mut a: Array<u64> = Array::new(&shape);
            number(&mut a, &mut 0);
            let mut b = deep_copy(&a);
            prop_assert_eq!(&a, &b);
            let original = deep_copy(&a);

            bump(&mut a, 100);
            prop_assert_eq!(&b, &original);

            bump(&mut b, 7);
            let mut expected = deep_copy(&original);
            bump(&mut expected, 100);
            prop_assert_eq!(&a, &expected);
        }
    }
}
