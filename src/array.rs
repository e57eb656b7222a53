use std::fmt::{self, Display};
use std::panic::{Location};

use super::{IndexOutOfBounds, Operation, Result, index_at, insert_at, normalized_start, normalized_range};
use super::ops::{Comparator, ByText};

/// A growable, ordered sequence of `T`s.
///
/// The `T` values are stored contiguously in a [`Vec<T>`]. The purpose of the
/// `Array` wrapper is to give the `Vec` the ergonomics of a scripting-language
/// list: checked access that reports an [`IndexOutOfBounds`], slices that
/// count negative indices back from the end, membership queries, and sorting
/// by textual rendering.
///
/// Indices are `isize`. Element access ([`at()`], `a[i]`, [`add_at()`])
/// never wraps a negative index; slicing ([`partial_array()`],
/// [`partial_array_len()`]) always does.
///
/// ```
/// use sequence::array;
/// let mut a = array![3, 1, 2];
/// a.add(10).sort();
/// assert_eq!(a.as_ref(), [1, 10, 2, 3]);
/// assert_eq!(a.partial_array(-2).unwrap().as_ref(), [2, 3]);
/// assert!(a.at(-1).is_err());
/// ```
///
/// [`at()`]: Self::at()
/// [`add_at()`]: Self::add_at()
/// [`partial_array()`]: Self::partial_array()
/// [`partial_array_len()`]: Self::partial_array_len()
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Array<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Array<T> {
    /// The number of elements.
    #[inline(always)]
    pub fn len(&self) -> usize { self.items.len() }

    #[inline(always)]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// The number of elements that can be held without reallocating.
    pub fn capacity(&self) -> usize { self.items.capacity() }

    // ------------------------------------------------------------------------
    // Element access.

    /// Returns the element at `index`.
    ///
    /// Fails if `index < 0` or `index >= self.len()`. Negative indices are
    /// not counted from the end.
    ///
    /// ```
    /// use sequence::array;
    /// let a = array!["a", "b"];
    /// assert_eq!(a.at(1), Ok(&"b"));
    /// assert_eq!(a.at(2).unwrap_err().index(), 2);
    /// assert_eq!(a.at(-1).unwrap_err().index(), -1);
    /// ```
    #[track_caller]
    pub fn at(&self, index: isize) -> Result<&T> {
        let i = index_at(index, self.len(), Operation::At, Location::caller())?;
        Ok(&self.items[i])
    }

    /// Returns the element at `index` for modification in place.
    ///
    /// The same bounds apply as for [`at()`](Self::at()).
    #[track_caller]
    pub fn at_mut(&mut self, index: isize) -> Result<&mut T> {
        let i = index_at(index, self.len(), Operation::AtMut, Location::caller())?;
        Ok(&mut self.items[i])
    }

    /// Returns an iterator over the elements, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.items.iter() }

    /// Returns an iterator that allows modifying each element.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> { self.items.iter_mut() }

    // ------------------------------------------------------------------------
    // Structural mutation.

    /// Appends `value`.
    pub fn add(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    /// Inserts `value` so that it becomes the element at `index`, shifting
    /// later elements along.
    ///
    /// `index` must be in `0..=self.len()`; `self.len()` appends. Negative
    /// indices are not counted from the end. On failure `self` is unchanged.
    ///
    /// ```
    /// use sequence::array;
    /// let mut a = array![1, 3];
    /// a.add_at(2, 1).unwrap().add_at(4, 3).unwrap();
    /// assert_eq!(a.as_ref(), [1, 2, 3, 4]);
    /// assert!(a.add_at(5, 5).is_err());
    /// assert!(a.add_at(0, -1).is_err());
    /// assert_eq!(a.len(), 4);
    /// ```
    #[track_caller]
    pub fn add_at(&mut self, value: T, index: isize) -> Result<&mut Self> {
        let i = insert_at(index, self.len(), Operation::AddAt, Location::caller())?;
        self.items.insert(i, value);
        Ok(self)
    }

    /// Appends every element of `values`, in order.
    ///
    /// `values` can be another `Array`, a `Vec`, a native array, or any other
    /// `IntoIterator`.
    pub fn add_all(&mut self, values: impl IntoIterator<Item=T>) -> &mut Self {
        self.items.extend(values);
        self
    }

    /// Same as [`add()`](Self::add()).
    pub fn push(&mut self, value: T) -> &mut Self { self.add(value) }

    /// Removes and returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if `self` is empty. This is a precondition, not an
    /// [`IndexOutOfBounds`]; use [`try_pop()`](Self::try_pop()) if the
    /// `Array` might be empty.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(t) => t,
            None => panic!("Cannot pop from an empty Array"),
        }
    }

    /// Removes and returns the last element, or returns `None` if `self` is
    /// empty.
    pub fn try_pop(&mut self) -> Option<T> { self.items.pop() }

    /// Removes all elements. The capacity is unchanged.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Removes **every** element, whatever `value` is.
    ///
    /// Despite the name, this does not compare elements with `value`, and `T`
    /// need not implement `PartialEq`: it is equivalent to
    /// [`clear()`](Self::clear()). Use `retain(|t| t != value)` on
    /// [`as_mut_vec()`](Self::as_mut_vec()) to remove only the matching
    /// elements.
    ///
    /// ```
    /// use sequence::array;
    /// let mut a = array![1, 2, 3];
    /// a.remove_all(&7);
    /// assert!(a.is_empty());
    /// ```
    pub fn remove_all(&mut self, _value: &T) -> &mut Self {
        tracing::trace!(len = self.len(), "Array::remove_all cleared every element");
        self.clear()
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// back.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`. This is a precondition, not an
    /// [`IndexOutOfBounds`]; use [`try_remove_at()`](Self::try_remove_at())
    /// if `index` has not been checked.
    #[track_caller]
    pub fn remove_at(&mut self, index: usize) -> T {
        let len = self.len();
        assert!(index < len, "Cannot remove index {} from an Array of length {}", index, len);
        self.items.remove(index)
    }

    /// Removes and returns the element at `index`, or returns `None` if
    /// `index >= self.len()`.
    pub fn try_remove_at(&mut self, index: usize) -> Option<T> {
        if index < self.len() { Some(self.items.remove(index)) } else { None }
    }

    /// Ensures the capacity is at least `capacity`. Never changes the
    /// elements.
    pub fn reserve_space(&mut self, capacity: usize) -> &mut Self {
        self.items.reserve(capacity.saturating_sub(self.len()));
        self
    }

    /// Reverses the order of the elements.
    pub fn reverse(&mut self) -> &mut Self {
        self.items.reverse();
        self
    }

    /// Sorts the elements into ascending order according to `C`.
    ///
    /// See [`ops`](super::ops) for the available [`Comparator`]s.
    pub fn sort_with<C: Comparator<T>>(&mut self) -> &mut Self {
        C::sort(&mut self.items);
        self
    }
}

// ----------------------------------------------------------------------------

impl<T: PartialEq> Array<T> {
    /// Removes the first element equal to `value`, if any.
    pub fn remove(&mut self, value: &T) -> &mut Self {
        if let Some(i) = self.items.iter().position(|t| t == value) {
            self.items.remove(i);
        }
        self
    }

    /// Returns `true` if some element is equal to `value`.
    pub fn contains(&self, value: &T) -> bool { self.items.contains(value) }

    /// Returns the number of elements equal to `value`.
    pub fn contains_count(&self, value: &T) -> usize {
        self.items.iter().filter(|&t| t == value).count()
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// If there is none, returns `self.len()`, i.e. one past the end.
    ///
    /// ```
    /// use sequence::array;
    /// let a = array!['x', 'y', 'x'];
    /// assert_eq!(a.index_of(&'x'), 0);
    /// assert_eq!(a.index_of(&'z'), 3);
    /// ```
    pub fn index_of(&self, value: &T) -> isize {
        let i = self.items.iter().position(|t| t == value).unwrap_or(self.len());
        i as isize
    }

    /// Returns the index of the last element equal to `value`.
    ///
    /// If there is none, returns `-1`. Note that [`partial_array()`] reads
    /// `-1` as the last element.
    ///
    /// ```
    /// use sequence::array;
    /// let a = array!['x', 'y', 'x'];
    /// assert_eq!(a.last_index_of(&'x'), 2);
    /// assert_eq!(a.last_index_of(&'z'), -1);
    /// ```
    ///
    /// [`partial_array()`]: Self::partial_array()
    pub fn last_index_of(&self, value: &T) -> isize {
        let from_end = self.items.iter().rev().position(|t| t == value).unwrap_or(self.len());
        self.len() as isize - from_end as isize - 1
    }
}

// ----------------------------------------------------------------------------

impl<T: Clone> Array<T> {
    /// Returns a copy of the elements from `start` to the end.
    ///
    /// A negative `start` counts back from the end. Fails if the resulting
    /// `start` is negative or greater than `self.len()`; `start == self.len()`
    /// returns an empty `Array`.
    ///
    /// ```
    /// use sequence::array;
    /// let a = array![1, 2, 3];
    /// assert_eq!(a.partial_array(1).unwrap().as_ref(), [2, 3]);
    /// assert_eq!(a.partial_array(-1).unwrap().as_ref(), [3]);
    /// assert!(a.partial_array(3).unwrap().is_empty());
    /// assert!(a.partial_array(4).is_err());
    /// ```
    #[track_caller]
    pub fn partial_array(&self, start: isize) -> Result<Self> {
        let start = normalized_start(start, self.len(), Operation::PartialArray, Location::caller())?;
        Ok(Self::from(&self.items[start..]))
    }

    /// Returns a copy of `count` elements starting at `start`.
    ///
    /// A negative `start` counts back from the end. A negative `count` then
    /// means "stop that many elements before the end". Fails if `start` is
    /// out of range as for [`partial_array()`](Self::partial_array()), if
    /// `count` is still negative, or if the range extends beyond the end.
    ///
    /// ```
    /// use sequence::array;
    /// let a = array!["a", "b", "c"];
    /// assert_eq!(a.partial_array_len(1, -1).unwrap().as_ref(), ["b"]);
    /// assert_eq!(a.partial_array_len(0, 2).unwrap().as_ref(), ["a", "b"]);
    /// assert_eq!(a.partial_array_len(-2, 2).unwrap().as_ref(), ["b", "c"]);
    /// assert!(a.partial_array_len(2, 2).is_err());
    /// ```
    #[track_caller]
    pub fn partial_array_len(&self, start: isize, count: isize) -> Result<Self> {
        let range = normalized_range(start, count, self.len(), Operation::PartialArrayLen, Location::caller())?;
        Ok(Self::from(&self.items[range]))
    }
}

// ----------------------------------------------------------------------------

impl<T: Display> Array<T> {
    /// Sorts the elements into ascending order of their textual rendering.
    ///
    /// This is [`sort_with::<ByText>()`](Self::sort_with()). Numbers are
    /// therefore compared as text.
    ///
    /// ```
    /// use sequence::array;
    /// let mut a = array![10, 9, 2];
    /// a.sort();
    /// assert_eq!(a.as_ref(), [10, 2, 9]);
    /// ```
    pub fn sort(&mut self) -> &mut Self { self.sort_with::<ByText>() }

    /// Sorts the elements into descending order of their textual rendering.
    pub fn reverse_sort(&mut self) -> &mut Self { self.sort().reverse() }
}

impl<T: Display> Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, t) in self.items.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            t.fmt(f)?;
        }
        f.write_str("]")
    }
}

// ----------------------------------------------------------------------------

impl<T> std::convert::AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] { &self.items }
}

impl<T> std::convert::AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.items }
}

impl<T> Array<T> {
    /// Returns the underlying `Vec`, e.g. to use its methods directly.
    pub fn as_mut_vec(&mut self) -> &mut Vec<T> { &mut self.items }
}

impl<T> std::ops::Index<isize> for Array<T> {
    type Output = T;

    /// Same as [`Array::at()`].
    ///
    /// # Panics
    ///
    /// Panics with the [`IndexOutOfBounds`] message if `at()` fails.
    #[track_caller]
    fn index(&self, index: isize) -> &T {
        match self.at(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> std::ops::IndexMut<isize> for Array<T> {
    #[track_caller]
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.at_mut(index) {
            Ok(t) => t,
            Err(e) => panic!("{}", e),
        }
    }
}

// ----------------------------------------------------------------------------
