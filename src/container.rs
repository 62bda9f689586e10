/// An ordered sequence addressed from index `0` (the front) to `len() - 1` (the back).
pub trait Container {
    /// The element type.
    type Item;

    /// Borrowing iterator in front-to-back order.
    type Iter<'a>: Iterator<Item = &'a Self::Item>
    where
        Self: 'a;

    /// Number of elements currently held.
    fn len(&self) -> usize;

    /// Returns `true` when [`len`](Container::len) is zero.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index` counted from the front, or `None` past the back.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Mutable element at `index` counted from the front, or `None` past the back.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Drops every element. The container is empty afterwards.
    fn remove_all(&mut self);

    /// Iterates over the elements as they are at the time of the call, front to back.
    fn iter(&self) -> Self::Iter<'_>;
}

/// A [`Container`] that inserts and removes at both ends.
///
/// Pushing onto a bounded engine that is already full is a precondition violation and panics.
/// Popping or peeking an empty container is not an error: it yields `None`.
///
/// # Examples
/// ```
/// use ringlink::{CircularBuffer, DoubleEndedContainer, LinkedList};
///
/// fn rotate<C: DoubleEndedContainer>(container: &mut C) {
///     if let Some(item) = container.pop_front() {
///         container.push_back(item);
///     }
/// }
///
/// let mut ring: CircularBuffer<i32> = CircularBuffer::from([1, 2, 3]);
/// let mut list: LinkedList<i32> = LinkedList::from([1, 2, 3]);
/// rotate(&mut ring);
/// rotate(&mut list);
/// assert_eq!(ring.front(), Some(&2));
/// assert_eq!(list.back(), Some(&1));
/// ```
pub trait DoubleEndedContainer: Container {
    /// The front element, or `None` if empty.
    fn front(&self) -> Option<&Self::Item>;

    /// The back element, or `None` if empty.
    fn back(&self) -> Option<&Self::Item>;

    /// Mutable front element, or `None` if empty.
    fn front_mut(&mut self) -> Option<&mut Self::Item>;

    /// Mutable back element, or `None` if empty.
    fn back_mut(&mut self) -> Option<&mut Self::Item>;

    /// Inserts `item` before the current front.
    fn push_front(&mut self, item: Self::Item);

    /// Inserts `item` after the current back.
    fn push_back(&mut self, item: Self::Item);

    /// Removes and returns the front element, or `None` if empty.
    fn pop_front(&mut self) -> Option<Self::Item>;

    /// Removes and returns the back element, or `None` if empty.
    fn pop_back(&mut self) -> Option<Self::Item>;

    /// Assigns the front slot.
    ///
    /// | container | `value`   | effect                         |
    /// |-----------|-----------|--------------------------------|
    /// | non-empty | `Some(x)` | front replaced, `len` unchanged |
    /// | non-empty | `None`    | same as [`pop_front`](DoubleEndedContainer::pop_front) |
    /// | empty     | `Some(x)` | same as [`push_front`](DoubleEndedContainer::push_front) |
    /// | empty     | `None`    | nothing                        |
    ///
    /// Returns the element that left the container, if any.
    ///
    /// # Examples
    /// ```
    /// use ringlink::{DoubleEndedContainer, LinkedList};
    ///
    /// let mut list = LinkedList::from([1, 2]);
    /// assert_eq!(list.set_front(Some(7)), Some(1));
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.set_front(None), Some(7));
    /// assert_eq!(list.len(), 1);
    /// ```
    fn set_front(&mut self, value: Option<Self::Item>) -> Option<Self::Item> {
        match value {
            Some(item) => match self.front_mut() {
                Some(slot) => Some(std::mem::replace(slot, item)),
                None => {
                    self.push_front(item);
                    None
                }
            },
            None => self.pop_front(),
        }
    }

    /// Assigns the back slot. Mirrors [`set_front`](DoubleEndedContainer::set_front).
    ///
    /// # Examples
    /// ```
    /// use ringlink::{CircularBuffer, DoubleEndedContainer};
    ///
    /// let mut buffer: CircularBuffer<i32> = CircularBuffer::new(2);
    /// assert_eq!(buffer.set_back(Some(4)), None);
    /// assert_eq!(buffer.front(), Some(&4));
    /// assert_eq!(buffer.back(), Some(&4));
    /// assert_eq!(buffer.set_back(None), Some(4));
    /// assert!(buffer.is_empty());
    /// ```
    fn set_back(&mut self, value: Option<Self::Item>) -> Option<Self::Item> {
        match value {
            Some(item) => match self.back_mut() {
                Some(slot) => Some(std::mem::replace(slot, item)),
                None => {
                    self.push_back(item);
                    None
                }
            },
            None => self.pop_back(),
        }
    }
}
