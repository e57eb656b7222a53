//! Generic programming over sort orders.
//!
//! Each type in this module cannot be instantiated and implements
//! [`Comparator`]. It can be passed as a type parameter to
//! [`Array::sort_with()`]. [`Array::sort()`] uses [`ByText`].
//!
//! [`Array::sort_with()`]: super::Array::sort_with()
//! [`Array::sort()`]: super::Array::sort()

use std::cmp::{Ordering};
use std::fmt::{Display};

/// A total order on `T`.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
///
/// ```
/// use std::cmp::Ordering;
/// use sequence::{array, ops::Comparator};
///
/// /// Orders strings by length.
/// enum ByLength {}
///
/// impl<'a> Comparator<&'a str> for ByLength {
///     fn compare(a: &&'a str, b: &&'a str) -> Ordering { a.len().cmp(&b.len()) }
/// }
///
/// let mut a = array!["ccc", "a", "bb"];
/// a.sort_with::<ByLength>();
/// assert_eq!(a.as_ref(), ["a", "bb", "ccc"]);
/// ```
pub trait Comparator<T> {
    fn compare(a: &T, b: &T) -> Ordering;

    /// Sorts `items` into ascending order. The sort is stable.
    ///
    /// Override this if there is a cheaper way than calling `compare()`
    /// O(n log n) times.
    fn sort(items: &mut [T]) { items.sort_by(Self::compare); }
}

// ----------------------------------------------------------------------------

/// Orders values lexicographically by their [`Display`] rendering.
///
/// Numbers therefore sort as text: `10` comes before `9`.
///
/// ```
/// use sequence::{array, ops::ByText};
/// let mut a = array![9, 10, 100, 2];
/// a.sort_with::<ByText>();
/// assert_eq!(a.as_ref(), [10, 100, 2, 9]);
/// ```
pub enum ByText {}

impl<T: Display> Comparator<T> for ByText {
    fn compare(a: &T, b: &T) -> Ordering { a.to_string().cmp(&b.to_string()) }

    /// Renders each item once.
    fn sort(items: &mut [T]) { items.sort_by_cached_key(T::to_string); }
}

// ----------------------------------------------------------------------------

/// Orders values by their [`Ord`] implementation.
pub enum Natural {}

impl<T: Ord> Comparator<T> for Natural {
    #[inline(always)]
    fn compare(a: &T, b: &T) -> Ordering { a.cmp(b) }

    fn sort(items: &mut [T]) { items.sort(); }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_text() {
        assert_eq!(<ByText as Comparator<i32>>::compare(&10, &9), Ordering::Less);
        assert_eq!(<ByText as Comparator<&str>>::compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(<ByText as Comparator<f64>>::compare(&1.5, &1.5), Ordering::Equal);
        let mut v = vec![3, 1, 20, 2];
        <ByText as Comparator<i32>>::sort(&mut v);
        assert_eq!(v, [1, 2, 20, 3]);
    }

    #[test]
    fn by_text_is_stable() {
        // Renders only the first field.
        #[derive(Debug, PartialEq)]
        struct Tagged(u8, char);
        impl Display for Tagged {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
        }
        let mut v = vec![Tagged(2, 'a'), Tagged(1, 'b'), Tagged(2, 'c'), Tagged(1, 'd')];
        <ByText as Comparator<Tagged>>::sort(&mut v);
        assert_eq!(v, [Tagged(1, 'b'), Tagged(1, 'd'), Tagged(2, 'a'), Tagged(2, 'c')]);
    }

    #[test]
    fn natural() {
        let mut v = vec![3, 1, 20, 2];
        <Natural as Comparator<i32>>::sort(&mut v);
        assert_eq!(v, [1, 2, 3, 20]);
        assert_eq!(<Natural as Comparator<i32>>::compare(&10, &9), Ordering::Greater);
    }
}
