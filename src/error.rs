use std::fmt;

use thiserror::Error;

/// Returned by [`CircularBuffer::try_push_back`](crate::CircularBuffer::try_push_back) and
/// [`try_push_front`](crate::CircularBuffer::try_push_front) when the buffer is already full.
///
/// The rejected element is handed back untouched.
///
/// # Examples
/// ```
/// # use ringlink::CircularBuffer;
/// let mut buffer = CircularBuffer::new(1);
/// buffer.push_back("a");
/// let err = buffer.try_push_back("b").unwrap_err();
/// assert_eq!(err.element, "b");
/// assert_eq!(err.capacity, 1);
/// assert_eq!(err.to_string(), "insufficient capacity: buffer holds at most 1 elements");
/// ```
#[derive(Error, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[error("insufficient capacity: buffer holds at most {capacity} elements")]
pub struct CapacityError<T> {
    /// The element that could not be inserted.
    pub element: T,
    /// Capacity of the buffer that refused it.
    pub capacity: usize,
}

impl<T> CapacityError<T> {
    #[inline]
    pub(crate) fn new(element: T, capacity: usize) -> Self {
        CapacityError { element, capacity }
    }

    /// Takes the rejected element back out of the error.
    #[inline]
    pub fn into_element(self) -> T {
        self.element
    }
}

// Debug without requiring `T: Debug`, so the error can be unwrapped for any element type.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapacityError")
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
