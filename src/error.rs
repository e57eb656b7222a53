use std::fmt;
use std::panic::{Location};

use thiserror::Error;

/// The [`Array`] method that raised an [`IndexOutOfBounds`].
///
/// [`Array`]: super::Array
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Operation {
    At,
    AtMut,
    AddAt,
    PartialArray,
    PartialArrayLen,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::At => "at",
            Operation::AtMut => "at_mut",
            Operation::AddAt => "add_at",
            Operation::PartialArray => "partial_array",
            Operation::PartialArrayLen => "partial_array_len",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

// ----------------------------------------------------------------------------

/// An index or range fell outside an [`Array`].
///
/// Carries the offending index, the size of the `Array` at the time, the
/// method that was called and the location of the call. Constructing one
/// through [`IndexOutOfBounds::raise()`] also reports it as a `tracing`
/// event.
///
/// ```
/// use sequence::{array, Operation};
/// let a = array![1, 2, 3];
/// let e = a.at(-1).unwrap_err();
/// assert_eq!(e.index(), -1);
/// assert_eq!(e.size(), 3);
/// assert_eq!(e.operation(), Operation::At);
/// assert!(e.to_string().starts_with("Index -1 does not exist"));
/// ```
///
/// [`Array`]: super::Array
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("Index {index} does not exist (Array::{operation}, size {size}, at {}:{})", .location.file(), .location.line())]
pub struct IndexOutOfBounds {
    index: isize,
    size: usize,
    operation: Operation,
    location: &'static Location<'static>,
}

impl IndexOutOfBounds {
    /// Constructs an `IndexOutOfBounds` and reports it.
    ///
    /// `location` is normally `Location::caller()` from a `#[track_caller]`
    /// method, so that it names the user's call site.
    pub(crate) fn raise(
        index: isize,
        size: usize,
        operation: Operation,
        location: &'static Location<'static>,
    ) -> Self {
        tracing::debug!(
            index,
            size,
            operation = operation.name(),
            file = location.file(),
            line = location.line(),
            "Array index out of bounds"
        );
        Self {index, size, operation, location}
    }

    /// The offending index, after any normalization.
    pub fn index(&self) -> isize { self.index }

    /// The length of the `Array` when the error was raised.
    pub fn size(&self) -> usize { self.size }

    pub fn operation(&self) -> Operation { self.operation }

    /// The source location of the failing call.
    pub fn location(&self) -> &'static Location<'static> { self.location }
}

/// Result type alias for fallible `Array` methods.
pub type Result<T> = std::result::Result<T, IndexOutOfBounds>;

// ----------------------------------------------------------------------------
