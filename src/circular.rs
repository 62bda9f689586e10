use crate::container::{Container, DoubleEndedContainer};
use crate::error::CapacityError;
use crate::settings::{drops_from_back, DropBehavior, FrontToBack};
use std::fmt::Debug;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A fixed-capacity double-ended ring buffer.
///
/// The occupied slots form the circular arc from the front slot to the back slot, walking forward
/// and wrapping past the end of the storage. Index `0` is always the front element and
/// `len() - 1` the back element, wherever they physically sit.
///
/// # Examples
/// ```
/// use ringlink::CircularBuffer;
/// let mut buffer = CircularBuffer::new(3);
/// buffer.push_back(1);
/// buffer.push_back(2);
/// buffer.push_back(3);
/// assert!(buffer.is_full());
/// assert_eq!(buffer.pop_front(), Some(1));
/// buffer.push_front(9);
/// assert_eq!(buffer, [9, 2, 3]);
/// ```
///
/// # Drop Order
/// Elements are released front-to-back by default, both by [`remove_all`](CircularBuffer::remove_all)
/// and when the buffer itself is dropped. Use [`BackToFront`](crate::BackToFront) to invert it.
#[derive(Clone)]
pub struct CircularBuffer<T, DropOrder = FrontToBack>
where
    DropOrder: DropBehavior,
{
    storage: Box<[Option<T>]>,
    front: usize,
    back: usize,
    len: usize,
    drop_order: PhantomData<DropOrder>,
}

impl<T> CircularBuffer<T, FrontToBack> {
    /// Creates an empty buffer that holds at most `capacity` elements.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let buffer: CircularBuffer<u8> = CircularBuffer::new(4);
    /// assert_eq!(buffer.capacity(), 4);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self::new_with_drop_order(capacity)
    }

    /// Alias for [`new`](CircularBuffer::new).
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

impl<T, DropOrder> CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    /// Creates an empty buffer with a specified capacity and drop order.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::{BackToFront, CircularBuffer};
    /// let mut buffer = CircularBuffer::<i32, BackToFront>::new_with_drop_order(2);
    /// buffer.push_back(1);
    /// assert_eq!(buffer.len(), 1);
    /// ```
    pub fn new_with_drop_order(capacity: usize) -> Self {
        CircularBuffer {
            storage: (0..capacity).map(|_| None).collect(),
            front: 0,
            back: 0,
            len: 0,
            drop_order: PhantomData,
        }
    }

    /// Changes the drop order, keeping the contents and their positions.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::{BackToFront, CircularBuffer};
    /// let buffer: CircularBuffer<i32> = CircularBuffer::from([1, 2]);
    /// let buffer: CircularBuffer<i32, BackToFront> = buffer.with_drop_order();
    /// assert_eq!(buffer, [1, 2]);
    /// ```
    pub fn with_drop_order<D>(mut self) -> CircularBuffer<T, D>
    where
        D: DropBehavior,
    {
        // `self` is dropped on return, so it must be left holding nothing.
        let storage = std::mem::take(&mut self.storage);
        let len = std::mem::replace(&mut self.len, 0);
        CircularBuffer {
            storage,
            front: self.front,
            back: self.back,
            len,
            drop_order: PhantomData,
        }
    }

    /// Returns the number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Maximum number of elements the buffer can hold. Fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns true once `len() == capacity()`; any further push panics.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(2);
    /// buffer.push_front('a');
    /// assert!(!buffer.is_full());
    /// buffer.push_back('b');
    /// assert!(buffer.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    #[inline]
    fn wrap_add(&self, index: usize, n: usize) -> usize {
        (index + n) % self.capacity()
    }

    #[inline]
    fn wrap_sub(&self, index: usize, n: usize) -> usize {
        let cap = self.capacity();
        (index + cap - n % cap) % cap
    }

    /// Physical slot of the element at logical position `index`. Only valid while `index < len`.
    #[inline]
    fn slot(&self, index: usize) -> usize {
        self.wrap_add(self.front, index)
    }

    /// Returns a reference to the front element, or `None` if the buffer is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.storage[self.front].as_ref()
    }

    /// Returns a reference to the back element, or `None` if the buffer is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.storage[self.back].as_ref()
    }

    /// Returns a mutable reference to the front element, or `None` if the buffer is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer: CircularBuffer<i32> = CircularBuffer::from([1, 2]);
    /// if let Some(front) = buffer.front_mut() {
    ///     *front = 10;
    /// }
    /// assert_eq!(buffer, [10, 2]);
    /// ```
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.storage[self.front].as_mut()
    }

    /// Returns a mutable reference to the back element, or `None` if the buffer is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        self.storage[self.back].as_mut()
    }

    /// Pushes an element to the back of the buffer.
    ///
    /// # Panics
    /// Panics if the buffer is full.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(2);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// assert_eq!(buffer.back(), Some(&2));
    /// ```
    /// ```should_panic
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(1);
    /// buffer.push_back(1);
    /// buffer.push_back(2);
    /// ```
    #[track_caller]
    pub fn push_back(&mut self, item: T) {
        assert!(
            !self.is_full(),
            "CircularBuffer capacity exceeded: capacity is {}",
            self.capacity()
        );
        self.write_back(item);
    }

    /// Pushes an element to the front of the buffer.
    ///
    /// # Panics
    /// Panics if the buffer is full.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(2);
    /// buffer.push_front(1);
    /// buffer.push_front(2);
    /// assert_eq!(buffer, [2, 1]);
    /// ```
    #[track_caller]
    pub fn push_front(&mut self, item: T) {
        assert!(
            !self.is_full(),
            "CircularBuffer capacity exceeded: capacity is {}",
            self.capacity()
        );
        self.write_front(item);
    }

    /// Pushes an element to the back, handing it back inside the error if the buffer is full.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(1);
    /// assert!(buffer.try_push_back(1).is_ok());
    /// assert_eq!(buffer.try_push_back(2).map_err(|e| e.into_element()), Err(2));
    /// assert_eq!(buffer, [1]);
    /// ```
    pub fn try_push_back(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "circular buffer full, push_back refused");
            return Err(CapacityError::new(item, self.capacity()));
        }
        self.write_back(item);
        Ok(())
    }

    /// Pushes an element to the front, handing it back inside the error if the buffer is full.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(1);
    /// buffer.push_back(1);
    /// let err = buffer.try_push_front(0).unwrap_err();
    /// assert_eq!(err.element, 0);
    /// ```
    pub fn try_push_front(&mut self, item: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            tracing::debug!(capacity = self.capacity(), "circular buffer full, push_front refused");
            return Err(CapacityError::new(item, self.capacity()));
        }
        self.write_front(item);
        Ok(())
    }

    // The caller has checked there is a free slot.
    fn write_back(&mut self, item: T) {
        // an empty buffer already has front == back on a free slot, so the first element goes there
        if !self.is_empty() {
            self.back = self.wrap_add(self.back, 1);
        }
        self.storage[self.back] = Some(item);
        self.len += 1;
    }

    fn write_front(&mut self, item: T) {
        if !self.is_empty() {
            self.front = self.wrap_sub(self.front, 1);
        }
        self.storage[self.front] = Some(item);
        self.len += 1;
    }

    /// Pops an element from the back of the buffer, returning `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer: CircularBuffer<i32> = CircularBuffer::from([42, 10]);
    /// assert_eq!(buffer.pop_back(), Some(10));
    /// assert_eq!(buffer.pop_back(), Some(42));
    /// assert_eq!(buffer.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.storage[self.back].take();
        self.len -= 1;
        // the last element leaves front and back on the slot it vacated
        if !self.is_empty() {
            self.back = self.wrap_sub(self.back, 1);
        }
        item
    }

    /// Pops an element from the front of the buffer, returning `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer: CircularBuffer<i32> = CircularBuffer::from([42, 10]);
    /// assert_eq!(buffer.pop_front(), Some(42));
    /// assert_eq!(buffer.pop_front(), Some(10));
    /// assert_eq!(buffer.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.storage[self.front].take();
        self.len -= 1;
        if !self.is_empty() {
            self.front = self.wrap_add(self.front, 1);
        }
        item
    }

    /// Returns the element at `index` from the front, or `None` if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(3);
    /// buffer.push_back(2);
    /// buffer.push_front(1);
    /// assert_eq!(buffer.get(0), Some(&1));
    /// assert_eq!(buffer.get(1), Some(&2));
    /// assert_eq!(buffer.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.storage[self.slot(index)].as_ref()
    }

    /// Returns the element at `index` from the front mutably, or `None` if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let slot = self.slot(index);
        self.storage[slot].as_mut()
    }

    /// Removes all elements, releasing them in the buffer's drop order.
    /// The capacity is untouched and nothing is reallocated.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer: CircularBuffer<i32> = CircularBuffer::from([1, 2, 3]);
    /// buffer.remove_all();
    /// assert!(buffer.is_empty());
    /// assert_eq!(buffer.capacity(), 3);
    /// ```
    pub fn remove_all(&mut self) {
        let released = self.release_all();
        tracing::trace!(released, capacity = self.capacity(), "circular buffer cleared");
    }

    /// Alias for [`remove_all`](CircularBuffer::remove_all).
    #[inline]
    pub fn clear(&mut self) {
        self.remove_all();
    }

    fn release_all(&mut self) -> usize {
        let released = self.len;
        while (if drops_from_back::<DropOrder>() {
            self.pop_back()
        } else {
            self.pop_front()
        })
        .is_some()
        {
            // drop the element
        }
        self.front = 0;
        self.back = 0;
        released
    }

    /// The occupied arc as at most two runs of slots, front run first.
    fn occupied(&self) -> (&[Option<T>], &[Option<T>]) {
        if self.is_empty() {
            return (&[], &[]);
        }
        let end = self.front + self.len;
        let cap = self.capacity();
        if end <= cap {
            (&self.storage[self.front..end], &[])
        } else {
            let (wrapped, head) = self.storage.split_at(self.front);
            (head, &wrapped[..end - cap])
        }
    }

    fn occupied_mut(&mut self) -> (&mut [Option<T>], &mut [Option<T>]) {
        if self.is_empty() {
            return (&mut [], &mut []);
        }
        let front = self.front;
        let end = front + self.len;
        let cap = self.capacity();
        if end <= cap {
            (&mut self.storage[front..end], &mut [])
        } else {
            let (wrapped, head) = self.storage.split_at_mut(front);
            (head, &mut wrapped[..end - cap])
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer = CircularBuffer::new(3);
    /// buffer.push_back(2);
    /// buffer.push_back(3);
    /// buffer.push_front(1);
    /// let items: Vec<_> = buffer.iter().copied().collect();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        let (head, tail) = self.occupied();
        Iter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }

    /// Returns a front-to-back iterator that allows modifying each element.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::CircularBuffer;
    /// let mut buffer: CircularBuffer<i32> = CircularBuffer::from([1, 2, 3]);
    /// for item in buffer.iter_mut() {
    ///     *item *= 10;
    /// }
    /// assert_eq!(buffer, [10, 20, 30]);
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (head, tail) = self.occupied_mut();
        IterMut {
            head: head.iter_mut(),
            tail: tail.iter_mut(),
        }
    }
}

#[cold]
#[track_caller]
fn index_out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T, DropOrder> Index<usize> for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => index_out_of_bounds(self.len, index),
        }
    }
}

impl<T, DropOrder> IndexMut<usize> for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(item) => item,
            None => index_out_of_bounds(len, index),
        }
    }
}

impl<T, DropOrder> Drop for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T, DropOrder> Container for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = T;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        CircularBuffer::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        CircularBuffer::get_mut(self, index)
    }

    fn remove_all(&mut self) {
        CircularBuffer::remove_all(self)
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        CircularBuffer::iter(self)
    }
}

impl<T, DropOrder> DoubleEndedContainer for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn front(&self) -> Option<&T> {
        CircularBuffer::front(self)
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        CircularBuffer::back(self)
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        CircularBuffer::front_mut(self)
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        CircularBuffer::back_mut(self)
    }

    #[track_caller]
    fn push_front(&mut self, item: T) {
        CircularBuffer::push_front(self, item)
    }

    #[track_caller]
    fn push_back(&mut self, item: T) {
        CircularBuffer::push_back(self, item)
    }

    fn pop_front(&mut self) -> Option<T> {
        CircularBuffer::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        CircularBuffer::pop_back(self)
    }
}

/// Borrowing iterator over a [`CircularBuffer`], created by [`CircularBuffer::iter`].
pub struct Iter<'a, T> {
    head: std::slice::Iter<'a, Option<T>>,
    tail: std::slice::Iter<'a, Option<T>>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.head.next().or_else(|| self.tail.next())?.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.next_back())?.as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`CircularBuffer`], created by [`CircularBuffer::iter_mut`].
pub struct IterMut<'a, T> {
    head: std::slice::IterMut<'a, Option<T>>,
    tail: std::slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        self.head.next().or_else(|| self.tail.next())?.as_mut()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.head.len() + self.tail.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail.next_back().or_else(|| self.head.next_back())?.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`CircularBuffer`], popping from the front.
pub struct IntoIter<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    buffer: CircularBuffer<T, DropOrder>,
}

impl<T, DropOrder> Iterator for IntoIter<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.buffer.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.buffer.len(), Some(self.buffer.len()))
    }
}

impl<T, DropOrder> DoubleEndedIterator for IntoIter<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.buffer.pop_back()
    }
}

impl<T, DropOrder> ExactSizeIterator for IntoIter<T, DropOrder> where DropOrder: DropBehavior {}
impl<T, DropOrder> FusedIterator for IntoIter<T, DropOrder> where DropOrder: DropBehavior {}

impl<T, DropOrder> IntoIterator for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = T;
    type IntoIter = IntoIter<T, DropOrder>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { buffer: self }
    }
}

impl<'a, T, DropOrder> IntoIterator for &'a CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, DropOrder> IntoIterator for &'a mut CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> From<Vec<T>> for CircularBuffer<T> {
    /// Builds a full buffer whose capacity is the length of `vec`, preserving order.
    fn from(vec: Vec<T>) -> Self {
        let len = vec.len();
        CircularBuffer {
            storage: vec.into_iter().map(Some).collect(),
            front: 0,
            back: len.saturating_sub(1),
            len,
            drop_order: PhantomData,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for CircularBuffer<T> {
    fn from(array: [T; N]) -> Self {
        From::from(Vec::from(array))
    }
}

impl<T, DropOrder> FromIterator<T> for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        CircularBuffer::from(iter.into_iter().collect::<Vec<T>>()).with_drop_order()
    }
}

impl<T, DropOrder> Extend<T> for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    /// Pushes every item to the back.
    ///
    /// # Panics
    /// Panics if the items do not all fit. The buffer is left untouched in that case.
    #[track_caller]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let items: Vec<T> = iter.into_iter().collect();
        assert!(
            items.len() <= self.capacity() - self.len,
            "CircularBuffer capacity exceeded: capacity is {}",
            self.capacity()
        );
        for item in items {
            self.write_back(item);
        }
    }
}

impl<T: Debug, DropOrder> Debug for CircularBuffer<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

// partialeq, eq, partialord, ord, and hash all go by front-to-back contents
impl<T, DropOrder> PartialEq for CircularBuffer<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, DropOrder> PartialEq<[T]> for CircularBuffer<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, DropOrder, const N: usize> PartialEq<[T; N]> for CircularBuffer<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T, DropOrder> Eq for CircularBuffer<T, DropOrder>
where
    T: Eq,
    DropOrder: DropBehavior,
{
}

impl<T, DropOrder> PartialOrd for CircularBuffer<T, DropOrder>
where
    T: PartialOrd,
    DropOrder: DropBehavior,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, DropOrder> Ord for CircularBuffer<T, DropOrder>
where
    T: Ord,
    DropOrder: DropBehavior,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, DropOrder> std::hash::Hash for CircularBuffer<T, DropOrder>
where
    T: std::hash::Hash,
    DropOrder: DropBehavior,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
#[doc(hidden)]
pub(crate) mod serde_impls {
    use super::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<T, DropOrder> Serialize for CircularBuffer<T, DropOrder>
    where
        T: Serialize,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    // A deserialized buffer is full: its capacity is the length of the sequence.
    impl<'src, T, DropOrder> Deserialize<'src> for CircularBuffer<T, DropOrder>
    where
        T: Deserialize<'src>,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = <Vec<T> as Deserialize<'src>>::deserialize(deserializer)?;
            Ok(CircularBuffer::from(vec).with_drop_order())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_serde() {
            let mut wrapped = CircularBuffer::new(4);
            wrapped.push_back(2);
            wrapped.push_back(3);
            wrapped.push_front(1);
            wrapped.push_front(0);
            let input_buffers = [
                CircularBuffer::from(vec![0, 1, 2, 3]),
                wrapped,
                CircularBuffer::from(vec![3, 2, 1]),
                CircularBuffer::new(0),
            ];
            for buffer in input_buffers.iter() {
                let serialized = serde_json::to_string(buffer).unwrap();
                let deserialized: CircularBuffer<i32> = serde_json::from_str(&serialized).unwrap();
                assert_eq!(buffer, &deserialized);
                assert_eq!(deserialized.capacity(), buffer.len());
            }
        }

        #[test]
        fn test_serialized_order() {
            let mut buffer = CircularBuffer::new(3);
            buffer.push_back(2);
            buffer.push_front(1);
            assert_eq!(serde_json::to_string(&buffer).unwrap(), "[1,2]");
        }
    }
}
