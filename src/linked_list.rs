use crate::container::{Container, DoubleEndedContainer};
use crate::settings::{drops_from_back, DropBehavior, FrontToBack};
use slab::Slab;
use std::fmt::Debug;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

#[derive(Clone)]
struct Node<T> {
    value: T,
    /// Successor, towards the back.
    next: Option<usize>,
    /// Predecessor, towards the front. A lookup key only: the slab owns every node.
    prev: Option<usize>,
}

/// An unbounded double-ended list with O(1) pushes and pops at both ends.
///
/// Indexed access walks the chain from whichever end is closer, so it is O(n).
///
/// # Examples
/// ```
/// use ringlink::LinkedList;
/// let mut list = LinkedList::new();
/// list.push_front(1);
/// list.push_front(2);
/// assert_eq!(list.front(), Some(&2));
/// assert_eq!(list.back(), Some(&1));
/// assert_eq!(list.pop_back(), Some(1));
/// assert_eq!(list.front(), list.back());
/// ```
///
/// # Drop Order
/// Elements are released front-to-back by default. Use [`BackToFront`](crate::BackToFront) to
/// invert it.
#[derive(Clone)]
pub struct LinkedList<T, DropOrder = FrontToBack>
where
    DropOrder: DropBehavior,
{
    nodes: Slab<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    drop_order: PhantomData<DropOrder>,
}

impl<T> LinkedList<T, FrontToBack> {
    /// Creates an empty list.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::new_with_drop_order()
    }
}

impl<T, DropOrder> LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    /// Creates an empty list with a specified drop order.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::{BackToFront, LinkedList};
    /// let mut list = LinkedList::<i32, BackToFront>::new_with_drop_order();
    /// list.push_back(1);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn new_with_drop_order() -> Self {
        LinkedList {
            nodes: Slab::new(),
            front: None,
            back: None,
            drop_order: PhantomData,
        }
    }

    /// Changes the drop order, keeping the contents.
    pub fn with_drop_order<D>(mut self) -> LinkedList<T, D>
    where
        D: DropBehavior,
    {
        // `self` is dropped on return, so it must be left holding nothing.
        LinkedList {
            nodes: std::mem::take(&mut self.nodes),
            front: self.front.take(),
            back: self.back.take(),
            drop_order: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns a reference to the front element, or `None` if the list is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.front.map(|key| &self.nodes[key].value)
    }

    /// Returns a reference to the back element, or `None` if the list is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.back.map(|key| &self.nodes[key].value)
    }

    /// Returns a mutable reference to the front element, or `None` if the list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let key = self.front?;
        Some(&mut self.nodes[key].value)
    }

    /// Returns a mutable reference to the back element, or `None` if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// if let Some(back) = list.back_mut() {
    ///     *back += 40;
    /// }
    /// assert_eq!(list, [1, 42]);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let key = self.back?;
        Some(&mut self.nodes[key].value)
    }

    /// Appends an element after the current back.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(1);
    /// list.push_back(2);
    /// assert_eq!(list, [1, 2]);
    /// ```
    pub fn push_back(&mut self, item: T) {
        let key = self.nodes.insert(Node {
            value: item,
            next: None,
            prev: self.back,
        });
        match self.back {
            Some(old_back) => self.nodes[old_back].next = Some(key),
            None => self.front = Some(key),
        }
        self.back = Some(key);
    }

    /// Prepends an element before the current front.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_front(1);
    /// list.push_front(2);
    /// assert_eq!(list, [2, 1]);
    /// ```
    pub fn push_front(&mut self, item: T) {
        let key = self.nodes.insert(Node {
            value: item,
            next: self.front,
            prev: None,
        });
        match self.front {
            Some(old_front) => self.nodes[old_front].prev = Some(key),
            None => self.back = Some(key),
        }
        self.front = Some(key);
    }

    /// Removes the back element and returns it, or `None` if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// assert_eq!(list.pop_back(), Some(2));
    /// assert_eq!(list.pop_back(), Some(1));
    /// assert_eq!(list.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        let key = self.back?;
        let node = self.nodes.remove(key);
        match node.prev {
            Some(new_back) => self.nodes[new_back].next = None,
            None => self.front = None,
        }
        self.back = node.prev;
        Some(node.value)
    }

    /// Removes the front element and returns it, or `None` if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let mut list = LinkedList::from([1, 2]);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), Some(2));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        let key = self.front?;
        let node = self.nodes.remove(key);
        match node.next {
            Some(new_front) => self.nodes[new_front].prev = None,
            None => self.back = None,
        }
        self.front = node.next;
        Some(node.value)
    }

    /// Slab key of the node at `index`, walking from the nearer end.
    fn key_at(&self, index: usize) -> Option<usize> {
        let len = self.len();
        if index >= len {
            return None;
        }
        if index <= len / 2 {
            let mut key = self.front?;
            for _ in 0..index {
                key = self.nodes[key].next?;
            }
            Some(key)
        } else {
            let mut key = self.back?;
            for _ in index + 1..len {
                key = self.nodes[key].prev?;
            }
            Some(key)
        }
    }

    /// Returns the element at `index` from the front, or `None` if `index >= len()`.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let list = LinkedList::from(['a', 'b', 'c']);
    /// assert_eq!(list.get(1), Some(&'b'));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        let key = self.key_at(index)?;
        Some(&self.nodes[key].value)
    }

    /// Returns the element at `index` from the front mutably, or `None` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let key = self.key_at(index)?;
        Some(&mut self.nodes[key].value)
    }

    /// Removes all elements, releasing them in the list's drop order.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let mut list = LinkedList::from([1, 2, 3]);
    /// list.remove_all();
    /// assert!(list.is_empty());
    /// assert_eq!(list.front(), None);
    /// ```
    pub fn remove_all(&mut self) {
        let released = self.release_all();
        tracing::trace!(released, "linked list cleared");
    }

    /// Alias for [`remove_all`](LinkedList::remove_all).
    #[inline]
    pub fn clear(&mut self) {
        self.remove_all();
    }

    fn release_all(&mut self) -> usize {
        let released = self.len();
        while (if drops_from_back::<DropOrder>() {
            self.pop_back()
        } else {
            self.pop_front()
        })
        .is_some()
        {
            // drop the element
        }
        // forget the vacant entries so keys start from zero again
        self.nodes.clear();
        released
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// # use ringlink::LinkedList;
    /// let mut list = LinkedList::new();
    /// list.push_back(2);
    /// list.push_front(1);
    /// list.push_back(3);
    /// let items: Vec<_> = list.iter().copied().collect();
    /// assert_eq!(items, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.len(),
        }
    }
}

#[cold]
#[track_caller]
fn index_out_of_bounds(len: usize, index: usize) -> ! {
    panic!("index out of bounds: the len is {len} but the index is {index}")
}

impl<T, DropOrder> Index<usize> for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(item) => item,
            None => index_out_of_bounds(self.len(), index),
        }
    }
}

impl<T, DropOrder> IndexMut<usize> for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(item) => item,
            None => index_out_of_bounds(len, index),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        LinkedList::new()
    }
}

impl<T, DropOrder> Drop for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<T, DropOrder> Container for LinkedList<T, DropOrder>
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
        LinkedList::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        LinkedList::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        LinkedList::get_mut(self, index)
    }

    fn remove_all(&mut self) {
        LinkedList::remove_all(self)
    }

    #[inline]
    fn iter(&self) -> Iter<'_, T> {
        LinkedList::iter(self)
    }
}

impl<T, DropOrder> DoubleEndedContainer for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn front(&self) -> Option<&T> {
        LinkedList::front(self)
    }

    #[inline]
    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }

    #[inline]
    fn front_mut(&mut self) -> Option<&mut T> {
        LinkedList::front_mut(self)
    }

    #[inline]
    fn back_mut(&mut self) -> Option<&mut T> {
        LinkedList::back_mut(self)
    }

    fn push_front(&mut self, item: T) {
        LinkedList::push_front(self, item)
    }

    fn push_back(&mut self, item: T) {
        LinkedList::push_back(self, item)
    }

    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }
}

/// Borrowing iterator over a [`LinkedList`], created by [`LinkedList::iter`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { ..*self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`LinkedList`], popping from the front.
pub struct IntoIter<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    list: LinkedList<T, DropOrder>,
}

impl<T, DropOrder> Iterator for IntoIter<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, DropOrder> DoubleEndedIterator for IntoIter<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T, DropOrder> ExactSizeIterator for IntoIter<T, DropOrder> where DropOrder: DropBehavior {}
impl<T, DropOrder> FusedIterator for IntoIter<T, DropOrder> where DropOrder: DropBehavior {}

impl<T, DropOrder> IntoIterator for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = T;
    type IntoIter = IntoIter<T, DropOrder>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T, DropOrder> IntoIterator for &'a LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<Vec<T>> for LinkedList<T> {
    fn from(vec: Vec<T>) -> Self {
        let mut list = LinkedList::new();
        list.extend(vec);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(array: [T; N]) -> Self {
        let mut list = LinkedList::new();
        list.extend(array);
        list
    }
}

impl<T, DropOrder> FromIterator<T> for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new_with_drop_order();
        list.extend(iter);
        list
    }
}

impl<T, DropOrder> Extend<T> for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Debug, DropOrder> Debug for LinkedList<T, DropOrder>
where
    DropOrder: DropBehavior,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, DropOrder> PartialEq for LinkedList<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, DropOrder> PartialEq<[T]> for LinkedList<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T, DropOrder, const N: usize> PartialEq<[T; N]> for LinkedList<T, DropOrder>
where
    T: PartialEq,
    DropOrder: DropBehavior,
{
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T, DropOrder> Eq for LinkedList<T, DropOrder>
where
    T: Eq,
    DropOrder: DropBehavior,
{
}

impl<T, DropOrder> PartialOrd for LinkedList<T, DropOrder>
where
    T: PartialOrd,
    DropOrder: DropBehavior,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T, DropOrder> Ord for LinkedList<T, DropOrder>
where
    T: Ord,
    DropOrder: DropBehavior,
{
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T, DropOrder> std::hash::Hash for LinkedList<T, DropOrder>
where
    T: std::hash::Hash,
    DropOrder: DropBehavior,
{
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
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

    impl<T, DropOrder> Serialize for LinkedList<T, DropOrder>
    where
        T: Serialize,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(self.iter())
        }
    }

    impl<'src, T, DropOrder> Deserialize<'src> for LinkedList<T, DropOrder>
    where
        T: Deserialize<'src>,
        DropOrder: DropBehavior,
    {
        #[inline]
        fn deserialize<D: Deserializer<'src>>(deserializer: D) -> Result<Self, D::Error> {
            let vec = <Vec<T> as Deserialize<'src>>::deserialize(deserializer)?;
            Ok(vec.into_iter().collect())
        }
    }

}

#[cfg(test)]
mod linked_list_tests {
    use super::*;
    use crate::test_support::DropLog;
    use crate::BackToFront;

    #[test]
    pub fn push_front_then_pop_back_scenario() {
        let mut list = LinkedList::new();
        list.push_front(1);
        list.push_front(2);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&1));

        assert_eq!(list.pop_back(), Some(1));
        assert_eq!(list.len(), 1);
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.back(), Some(&2));

        assert_eq!(list.pop_back(), Some(2));
        assert!(list.is_empty());
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
    }

    #[test]
    pub fn push_back_order() {
        let mut list: LinkedList<i32> = LinkedList::new();
        list.push_back(1);
        list.push_back(2);
        list.push_back(3);
        assert_eq!(list, [1, 2, 3]);
    }

    #[test]
    pub fn pop_front_order() {
        let mut list = LinkedList::new();
        list.push_front(1i32);
        list.push_front(2);
        list.push_front(3);
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), None);
    }

    #[test]
    pub fn test_interleave_push_order() {
        let mut list = LinkedList::new();
        list.push_front(1i32);
        list.push_back(2);
        list.push_front(3);
        list.push_back(4);
        list.push_front(5);
        list.push_back(6);
        assert_eq!(list, [5, 3, 1, 2, 4, 6]);
    }

    #[test]
    pub fn test_interleave_pop_order() {
        let mut list = LinkedList::new();
        list.push_front(1i32);
        list.push_back(2);
        list.push_front(3);
        list.push_back(4);
        list.push_front(5);
        list.push_back(6);
        assert_eq!(list.pop_front(), Some(5));
        assert_eq!(list.pop_back(), Some(6));
        assert_eq!(list.pop_front(), Some(3));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), Some(4));
        assert_eq!(list.pop_back(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);
    }

    #[test]
    pub fn refill_after_emptying_from_the_back() {
        let mut list = LinkedList::new();
        list.push_back(1);
        assert_eq!(list.pop_back(), Some(1));
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list, [2, 3]);
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), Some(3));
        list.push_back(4);
        assert_eq!(list.front(), Some(&4));
        assert_eq!(list.back(), Some(&4));
    }

    #[test]
    pub fn indexed_access_walks_from_both_ends() {
        let n = 9;
        let list: LinkedList<usize> = (1..=n).collect();
        for i in 0..n {
            assert_eq!(list[i], i + 1);
        }
        assert_eq!(list.get(n), None);
    }

    #[test]
    pub fn index_mut_replaces_in_place() {
        let mut list = LinkedList::from([1, 2, 3, 4]);
        list[1] = 20;
        list[3] = 40;
        assert_eq!(list, [1, 20, 3, 40]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    pub fn index_past_len_panics() {
        let list = LinkedList::from([1, 2]);
        let _ = list[2];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    pub fn index_on_empty_panics() {
        let mut list: LinkedList<i32> = LinkedList::new();
        list[0] = 1;
    }

    #[test]
    pub fn set_front_and_back() {
        let mut list = LinkedList::new();
        assert_eq!(list.set_front(None), None);
        assert_eq!(list.set_front(Some(1)), None);
        assert_eq!(list.front(), list.back());
        list.push_back(2);

        assert_eq!(list.set_back(Some(3)), Some(2));
        assert_eq!(list, [1, 3]);
        assert_eq!(list.set_back(None), Some(3));
        assert_eq!(list, [1]);
        assert_eq!(list.set_front(None), Some(1));
        assert!(list.is_empty());
    }

    #[test]
    pub fn remove_all_releases_every_node() {
        let log = DropLog::default();
        let mut list = LinkedList::new();
        for id in 0..5 {
            list.push_back(log.track(id));
        }
        assert!(log.dropped().is_empty());
        list.remove_all();
        assert_eq!(log.dropped(), [0, 1, 2, 3, 4]);
        assert!(list.is_empty());
        assert_eq!(list.front().map(|t| t.id), None);

        list.push_front(log.track(5));
        assert_eq!(list.back().map(|t| t.id), Some(5));
    }

    #[test]
    pub fn back_to_front_drop_order() {
        let log = DropLog::default();
        let mut list = LinkedList::<_, BackToFront>::new_with_drop_order();
        list.push_back(log.track(1));
        list.push_back(log.track(2));
        list.push_front(log.track(0));
        drop(list);
        assert_eq!(log.dropped(), [2, 1, 0]);
    }

    #[test]
    pub fn with_drop_order_keeps_contents() {
        let log = DropLog::default();
        let mut list = LinkedList::new();
        list.push_back(log.track(1));
        list.push_back(log.track(2));
        let list = list.with_drop_order::<BackToFront>();
        assert!(log.dropped().is_empty());
        assert_eq!(list.len(), 2);
        drop(list);
        assert_eq!(log.dropped(), [2, 1]);
    }

    #[test]
    pub fn clone_is_independent() {
        let mut original = LinkedList::from([1, 2, 3]);
        let mut copy = original.clone();
        copy.pop_front();
        copy[0] = 20;
        original.push_back(4);
        assert_eq!(original, [1, 2, 3, 4]);
        assert_eq!(copy, [20, 3]);
    }

    #[test]
    pub fn reuses_vacated_nodes() {
        let mut list = LinkedList::new();
        for round in 0..4 {
            list.push_back(round);
            list.push_front(round);
            list.pop_back();
        }
        assert_eq!(list, [3, 2, 1, 0]);
        assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), [0, 1, 2, 3]);
    }

    #[test]
    pub fn hash_ignores_node_placement() {
        use std::collections::hash_map::RandomState;
        use std::hash::BuildHasher;

        let straight = LinkedList::from([1, 2, 3]);
        // same contents, slab keys in reverse order
        let mut scattered = LinkedList::new();
        scattered.push_back(3);
        scattered.push_front(0);
        scattered.set_front(Some(2));
        scattered.push_front(1);
        assert_eq!(straight, scattered);

        let state = RandomState::new();
        assert_eq!(state.hash_one(&straight), state.hash_one(&scattered));
        assert_ne!(state.hash_one(&straight), state.hash_one(LinkedList::from([1, 2])));
    }

    #[test]
    pub fn iterators_are_exact_and_double_ended() {
        let list = LinkedList::from([1, 2, 3, 4]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(&4));
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);

        assert_eq!((&list).into_iter().count(), 4);
        let owned: Vec<_> = list.into_iter().collect();
        assert_eq!(owned, [1, 2, 3, 4]);
    }

    #[test]
    pub fn debug_is_front_to_back() {
        let mut list = LinkedList::new();
        list.push_back("b");
        list.push_front("a");
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }
}
