//! Constructing [`Array`]s and converting them to and from other collections.

use std::ffi::{CStr};

use super::{Array};

impl<T> Array<T> {
    /// Constructs an empty `Array`.
    pub const fn new() -> Self { Self {items: Vec::new()} }

    /// Constructs an empty `Array` with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self { Self {items: Vec::with_capacity(capacity)} }

    /// Wraps `items` without copying them.
    ///
    /// ```
    /// use sequence::Array;
    /// let a = Array::from_vec(vec![1, 2, 3]);
    /// assert_eq!(a.into_vec(), [1, 2, 3]);
    /// ```
    pub fn from_vec(items: Vec<T>) -> Self { Self {items} }

    /// Returns the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> { self.items }
}

impl<T: Clone> Array<T> {
    /// Returns a copy of the elements as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> { self.items.clone() }
}

impl Array<String> {
    /// Constructs an `Array` with one `String` per entry of `items`, in
    /// order.
    ///
    /// ```
    /// use sequence::Array;
    /// let args = Array::from_text(["prog", "-v", "file"]);
    /// assert_eq!(args.at(2).unwrap(), "file");
    /// ```
    pub fn from_text<S: AsRef<str>>(items: impl IntoIterator<Item=S>) -> Self {
        items.into_iter().map(|s| s.as_ref().to_owned()).collect()
    }

    /// Constructs an `Array` with one `String` per C string, in order.
    ///
    /// Invalid UTF-8 is replaced with `U+FFFD`.
    ///
    /// ```
    /// use std::ffi::CStr;
    /// use sequence::Array;
    /// let ls = CStr::from_bytes_with_nul(b"ls\0").unwrap();
    /// let flag = CStr::from_bytes_with_nul(b"-l\0").unwrap();
    /// let raw = [ls, flag];
    /// assert_eq!(Array::from_c_strs(&raw).as_ref(), ["ls", "-l"]);
    /// ```
    pub fn from_c_strs(items: &[&CStr]) -> Self {
        items.iter().map(|s| s.to_string_lossy().into_owned()).collect()
    }
}

// ----------------------------------------------------------------------------

impl<T> Default for Array<T> {
    fn default() -> Self { Self::new() }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self { Self::from_vec(items) }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self { Self::from_vec(items.into()) }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(items: &[T]) -> Self { Self::from_vec(items.to_vec()) }
}

impl<T> From<Array<T>> for Vec<T> {
    fn from(array: Array<T>) -> Self { array.items }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) { self.items.extend(iter); }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter_mut() }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array;

    #[test]
    fn empty() {
        let a: Array<u32> = Array::new();
        assert!(a.is_empty());
        assert_eq!(a, Array::default());
        assert_eq!(array![], a);
        assert!(Array::<u32>::with_capacity(8).capacity() >= 8);
    }

    #[test]
    fn literal() {
        let a = array![4, 5, 6];
        assert_eq!(a.len(), 3);
        assert_eq!(a.as_ref(), [4, 5, 6]);
        assert_eq!(array![4, 5, 6,], a);
    }

    #[test]
    fn native() {
        let raw = [1.5, 2.5];
        assert_eq!(Array::from(raw).as_ref(), raw);
        assert_eq!(Array::from(&raw[..]).as_ref(), raw);
        assert_eq!(Array::from(vec!['a', 'b']).as_ref(), ['a', 'b']);
    }

    #[test]
    fn text() {
        let a = Array::from_text(vec![String::from("x"), String::from("y")]);
        assert_eq!(a.as_ref(), ["x", "y"]);
        let bytes = b"ok\xff\0";
        let c = CStr::from_bytes_with_nul(bytes).unwrap();
        assert_eq!(Array::from_c_strs(&[c]).as_ref(), ["ok\u{FFFD}"]);
    }

    #[test]
    fn vec_round_trip() {
        let a = array![Some(1), None, Some(3)];
        assert_eq!(Array::from_vec(a.to_vec()), a);
        let v: Vec<_> = a.clone().into();
        assert_eq!(v, a.to_vec());
        assert_eq!(Array::from_vec(Vec::<u8>::new()).to_vec(), Vec::<u8>::new());
    }

    #[test]
    fn iteration() {
        let mut a: Array<i32> = (1..=3).collect();
        for t in &mut a { *t *= 2; }
        assert_eq!(a.iter().sum::<i32>(), 12);
        a.extend([8]);
        let v: Vec<i32> = a.into_iter().collect();
        assert_eq!(v, [2, 4, 6, 8]);
    }
}
