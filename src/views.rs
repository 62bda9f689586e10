use crate::circular::CircularBuffer;
use crate::container::{Container, DoubleEndedContainer};
use crate::linked_list::LinkedList;
use std::ops::{Index, IndexMut};

/// First-in first-out queue backed by a fixed-capacity [`CircularBuffer`].
pub type CircularQueue<T> = Queue<CircularBuffer<T>>;
/// First-in first-out queue backed by a [`LinkedList`].
pub type LinkedQueue<T> = Queue<LinkedList<T>>;
/// Last-in first-out stack backed by a fixed-capacity [`CircularBuffer`].
pub type CircularStack<T> = Stack<CircularBuffer<T>>;
/// Last-in first-out stack backed by a [`LinkedList`].
pub type LinkedStack<T> = Stack<LinkedList<T>>;
/// Double-ended queue backed by a fixed-capacity [`CircularBuffer`].
pub type CircularDeque<T> = Deque<CircularBuffer<T>>;
/// Double-ended queue backed by a [`LinkedList`].
pub type LinkedDeque<T> = Deque<LinkedList<T>>;

// Surface shared by every view.
macro_rules! view_common {
    ($view:ident) => {
        impl<C> $view<C>
        where
            C: DoubleEndedContainer,
        {
            /// Wraps an existing engine, keeping its contents.
            #[inline]
            pub fn new(inner: C) -> Self {
                $view { inner }
            }

            /// Unwraps the engine, keeping its contents.
            #[inline]
            pub fn into_inner(self) -> C {
                self.inner
            }

            /// Read-only access to the engine.
            #[inline]
            pub fn inner(&self) -> &C {
                &self.inner
            }

            /// Number of elements.
            #[inline]
            pub fn len(&self) -> usize {
                self.inner.len()
            }

            /// Returns true if there are no elements.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.inner.is_empty()
            }

            /// The front element, or `None` if empty.
            #[inline]
            pub fn front(&self) -> Option<&C::Item> {
                self.inner.front()
            }

            /// The back element, or `None` if empty.
            #[inline]
            pub fn back(&self) -> Option<&C::Item> {
                self.inner.back()
            }

            /// The element at `index` counted from the front.
            #[inline]
            pub fn get(&self, index: usize) -> Option<&C::Item> {
                self.inner.get(index)
            }

            /// Drops every element.
            #[inline]
            pub fn remove_all(&mut self) {
                self.inner.remove_all()
            }

            /// Iterates front to back.
            #[inline]
            pub fn iter(&self) -> C::Iter<'_> {
                self.inner.iter()
            }
        }

        impl<T> $view<CircularBuffer<T>> {
            /// Creates an empty view over a [`CircularBuffer`] holding at most `capacity` elements.
            pub fn with_capacity(capacity: usize) -> Self {
                $view::new(CircularBuffer::new(capacity))
            }

            /// Returns true once no more elements fit.
            #[inline]
            pub fn is_full(&self) -> bool {
                self.inner.is_full()
            }
        }

        impl<C> From<C> for $view<C>
        where
            C: DoubleEndedContainer,
        {
            fn from(inner: C) -> Self {
                $view::new(inner)
            }
        }

        impl<C> Default for $view<C>
        where
            C: DoubleEndedContainer + Default,
        {
            fn default() -> Self {
                $view::new(C::default())
            }
        }

        impl<C> Index<usize> for $view<C>
        where
            C: DoubleEndedContainer + Index<usize, Output = <C as Container>::Item>,
        {
            type Output = C::Item;

            #[track_caller]
            fn index(&self, index: usize) -> &C::Item {
                &self.inner[index]
            }
        }

        impl<C> IndexMut<usize> for $view<C>
        where
            C: DoubleEndedContainer + IndexMut<usize, Output = <C as Container>::Item>,
        {
            #[track_caller]
            fn index_mut(&mut self, index: usize) -> &mut C::Item {
                &mut self.inner[index]
            }
        }

        impl<'a, C> IntoIterator for &'a $view<C>
        where
            C: DoubleEndedContainer,
        {
            type Item = &'a C::Item;
            type IntoIter = C::Iter<'a>;

            fn into_iter(self) -> Self::IntoIter {
                self.inner.iter()
            }
        }

        impl<C> Container for $view<C>
        where
            C: DoubleEndedContainer,
        {
            type Item = C::Item;
            type Iter<'a>
                = C::Iter<'a>
            where
                Self: 'a;

            #[inline]
            fn len(&self) -> usize {
                self.inner.len()
            }

            #[inline]
            fn get(&self, index: usize) -> Option<&C::Item> {
                self.inner.get(index)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut C::Item> {
                self.inner.get_mut(index)
            }

            fn remove_all(&mut self) {
                self.inner.remove_all()
            }

            #[inline]
            fn iter(&self) -> C::Iter<'_> {
                self.inner.iter()
            }
        }
    };
}

/// A first-in first-out view: elements enter at the back and leave from the front.
///
/// # Examples
/// ```
/// use ringlink::CircularQueue;
/// let mut queue = CircularQueue::with_capacity(2);
/// queue.push_back("first");
/// queue.push_back("second");
/// assert!(queue.is_full());
/// assert_eq!(queue.pop_front(), Some("first"));
/// assert_eq!(queue.front(), Some(&"second"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Queue<C> {
    inner: C,
}

view_common!(Queue);

impl<C> Queue<C>
where
    C: DoubleEndedContainer,
{
    /// Adds an element at the back.
    ///
    /// # Panics
    /// Panics if the engine is bounded and already full.
    #[track_caller]
    #[inline]
    pub fn push_back(&mut self, item: C::Item) {
        self.inner.push_back(item)
    }

    /// Removes the front element, the oldest one, or returns `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<C::Item> {
        self.inner.pop_front()
    }
}

/// A last-in first-out view: elements enter and leave at the back.
///
/// The front is the oldest element still on the stack.
///
/// # Examples
/// ```
/// use ringlink::LinkedStack;
/// let mut stack = LinkedStack::default();
/// stack.push_back(1);
/// stack.push_back(2);
/// assert_eq!(stack.back(), Some(&2));
/// assert_eq!(stack.pop_back(), Some(2));
/// assert_eq!(stack.pop_back(), Some(1));
/// assert_eq!(stack.pop_back(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<C> {
    inner: C,
}

view_common!(Stack);

impl<C> Stack<C>
where
    C: DoubleEndedContainer,
{
    /// Pushes an element on top of the stack.
    ///
    /// # Panics
    /// Panics if the engine is bounded and already full.
    #[track_caller]
    #[inline]
    pub fn push_back(&mut self, item: C::Item) {
        self.inner.push_back(item)
    }

    /// Removes the top of the stack, or returns `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<C::Item> {
        self.inner.pop_back()
    }
}

/// A double-ended view exposing the full operation set of the engine.
///
/// # Examples
/// ```
/// use ringlink::LinkedDeque;
/// let mut deque = LinkedDeque::default();
/// deque.push_back(2);
/// deque.push_front(1);
/// deque.set_back(Some(3));
/// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 3]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Deque<C> {
    inner: C,
}

view_common!(Deque);

impl<C> Deque<C>
where
    C: DoubleEndedContainer,
{
    /// Mutable access to the engine.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Inserts an element at the front.
    #[track_caller]
    #[inline]
    pub fn push_front(&mut self, item: C::Item) {
        self.inner.push_front(item)
    }

    /// Inserts an element at the back.
    #[track_caller]
    #[inline]
    pub fn push_back(&mut self, item: C::Item) {
        self.inner.push_back(item)
    }

    /// Removes the front element, or returns `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<C::Item> {
        self.inner.pop_front()
    }

    /// Removes the back element, or returns `None` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<C::Item> {
        self.inner.pop_back()
    }

    /// See [`DoubleEndedContainer::set_front`].
    #[inline]
    pub fn set_front(&mut self, value: Option<C::Item>) -> Option<C::Item> {
        self.inner.set_front(value)
    }

    /// See [`DoubleEndedContainer::set_back`].
    #[inline]
    pub fn set_back(&mut self, value: Option<C::Item>) -> Option<C::Item> {
        self.inner.set_back(value)
    }
}

impl<C> DoubleEndedContainer for Deque<C>
where
    C: DoubleEndedContainer,
{
    #[inline]
    fn front(&self) -> Option<&C::Item> {
        self.inner.front()
    }

    #[inline]
    fn back(&self) -> Option<&C::Item> {
        self.inner.back()
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut C::Item> {
        self.inner.front_mut()
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut C::Item> {
        self.inner.back_mut()
    }

    #[track_caller]
    fn push_front(&mut self, item: C::Item) {
        self.inner.push_front(item)
    }

    #[track_caller]
    fn push_back(&mut self, item: C::Item) {
        self.inner.push_back(item)
    }

    fn pop_front(&mut self) -> Option<C::Item> {
        self.inner.pop_front()
    }

    fn pop_back(&mut self) -> Option<C::Item> {
        self.inner.pop_back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_refs<C: Container>(container: &C) -> Vec<&C::Item> {
        container.iter().collect()
    }

    #[test]
    fn queue_is_first_in_first_out() {
        let mut circular = CircularQueue::with_capacity(3);
        let mut linked = LinkedQueue::default();
        for i in 1..=3 {
            circular.push_back(i);
            linked.push_back(i);
        }
        assert!(circular.is_full());
        for i in 1..=3 {
            assert_eq!(circular.pop_front(), Some(i));
            assert_eq!(linked.pop_front(), Some(i));
        }
        assert_eq!(circular.pop_front(), None);
        assert_eq!(linked.pop_front(), None);
    }

    #[test]
    fn stack_is_last_in_first_out() {
        let mut circular = CircularStack::with_capacity(3);
        let mut linked = LinkedStack::default();
        for i in 1..=3 {
            circular.push_back(i);
            linked.push_back(i);
        }
        assert_eq!(circular.front(), Some(&1));
        assert_eq!(linked.back(), Some(&3));
        for i in (1..=3).rev() {
            assert_eq!(circular.pop_back(), Some(i));
            assert_eq!(linked.pop_back(), Some(i));
        }
        assert!(circular.is_empty());
        assert!(linked.is_empty());
    }

    #[test]
    fn views_index_front_to_back() {
        let mut queue = LinkedQueue::default();
        queue.push_back('a');
        queue.push_back('b');
        queue.pop_front();
        queue.push_back('c');
        assert_eq!(queue[0], 'b');
        assert_eq!(queue[1], 'c');
        assert_eq!(queue.get(2), None);
        assert_eq!(collect_refs(&queue), [&'b', &'c']);
    }

    #[test]
    fn views_assign_through_index() {
        let mut queue = CircularQueue::with_capacity(3);
        let mut stack = LinkedStack::default();
        for i in 1..=3 {
            queue.push_back(i);
            stack.push_back(i);
        }
        queue[0] = 10;
        stack[2] = 30;
        assert_eq!(queue.pop_front(), Some(10));
        assert_eq!(stack.pop_back(), Some(30));
        assert_eq!(queue.get(0), Some(&2));
        assert_eq!(stack.back(), Some(&2));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn view_index_mut_past_len_panics() {
        let mut queue = LinkedQueue::default();
        queue.push_back(1);
        queue[1] = 2;
    }

    #[test]
    #[should_panic(expected = "capacity exceeded")]
    fn bounded_queue_overflow_panics() {
        let mut queue = CircularQueue::with_capacity(1);
        queue.push_back(1);
        queue.push_back(2);
    }

    #[test]
    fn deque_is_a_full_container() {
        let mut deque = CircularDeque::with_capacity(3);
        deque.push_back(2);
        deque.push_front(1);
        deque.push_back(3);
        deque[1] = 20;
        assert_eq!(deque.set_front(Some(10)), Some(1));
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [10, 20, 3]);
        assert_eq!(deque.pop_back(), Some(3));
        assert_eq!(deque.inner().capacity(), 3);
    }

    #[test]
    fn wrapping_and_unwrapping_keeps_contents() {
        let list = LinkedList::from([1, 2, 3]);
        let stack = Stack::from(list);
        assert_eq!(stack.len(), 3);
        let queue = Queue::new(stack.into_inner());
        assert_eq!(queue.front(), Some(&1));
        let mut list = queue.into_inner();
        list.push_front(0);
        assert_eq!(list, [0, 1, 2, 3]);
    }

    #[test]
    fn remove_all_through_a_view() {
        let mut queue = Queue::new(CircularBuffer::from([1, 2, 3]));
        queue.remove_all();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        queue.push_back(4);
        assert_eq!(queue.back(), Some(&4));
    }
}
