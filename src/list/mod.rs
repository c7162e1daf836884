use std::fmt::{self, Debug, Display, Formatter};
use std::iter;
use std::mem;

use crate::error::{Error, Result};
use crate::list::cursor::Cursor;
use crate::list::sublist::Sublist;
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;
pub mod sublist;

mod algorithms;

/// The `OrderedList` is a singly-linked list of ordered elements with owned nodes.
/// Inserting or removing at a known position takes constant time, while reaching
/// a position by its index takes *O*(*n*) time.
///
/// The `OrderedList` contains a single `ghost` link. It plays the part of a
/// sentinel head node without a payload: its target is the first element, so
/// operations at index 0 need no special case. The list keeps no length counter;
/// [`OrderedList::length`] walks the nodes.
///
/// # Naming Conventions
///
/// - *link*: an owning `Option<Box<Node<T>>>` slot, either the ghost link or the
///   `next` field of a node;
/// - *the link before index `i`*: the link whose target is the node at logical
///   index `i` (the ghost link for `i == 0`, the empty tail link for `i == len`).
pub struct OrderedList<T> {
    ghost: Link<T>,
}

pub(crate) type Link<T> = Option<Box<Node<T>>>;

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) element: T,
}

// private methods
impl<T> OrderedList<T> {
    pub(crate) fn ghost_link(&self) -> &Link<T> {
        &self.ghost
    }

    pub(crate) fn ghost_link_mut(&mut self) -> &mut Link<T> {
        &mut self.ghost
    }

    /// Returns the link before logical index `index`, or `None` if the list holds
    /// fewer than `index` elements.
    pub(crate) fn link(&self, index: usize) -> Option<&Link<T>> {
        seek(&self.ghost, index)
    }

    /// Mutable version of [`OrderedList::link`].
    pub(crate) fn link_mut(&mut self, index: usize) -> Option<&mut Link<T>> {
        seek_mut(&mut self.ghost, index)
    }

    fn node(&self, index: usize) -> Option<&Node<T>> {
        self.link(index)?.as_deref()
    }

    fn node_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        self.link_mut(index)?.as_deref_mut()
    }

    /// Moves the `count` elements starting at `index` into a new list. The list
    /// is left untouched unless `index + count <= length`.
    pub(crate) fn cut(&mut self, index: usize, count: usize) -> Result<Self> {
        let link = self
            .link_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index))?;
        let mut run = OrderedList { ghost: link.take() };
        match seek_mut(&mut run.ghost, count).map(Option::take) {
            Some(rest) => {
                *link = rest;
                Ok(run)
            }
            None => {
                *link = run.ghost.take();
                Err(Error::out_of_bounds(index + count))
            }
        }
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        detach_node(&mut self.ghost).map(Node::into_element)
    }
}

impl<T> OrderedList<T> {
    /// Create an empty `OrderedList`.
    ///
    /// # Examples
    /// ```
    /// use ordered_list::OrderedList;
    /// let list: OrderedList<u32> = OrderedList::new();
    /// assert_eq!(list.to_string(), "[]");
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self { ghost: None }
    }

    /// Returns `true` if the `OrderedList` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ghost.is_none()
    }

    /// Returns the number of elements by walking the whole list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// assert_eq!(list.length(), 0);
    ///
    /// list.add_all([1, 2, 3].iter().copied());
    /// assert_eq!(list.length(), 3);
    /// ```
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Alias of [`OrderedList::length`].
    #[inline]
    pub fn len(&self) -> usize {
        self.length()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index < length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::{Error, OrderedList};
    /// use std::iter::FromIterator;
    ///
    /// let list = OrderedList::from_iter([4, 5, 6].iter().copied());
    /// assert_eq!(list.get(1), Ok(&5));
    /// assert_eq!(list.get(3), Err(Error::IndexOutOfBounds { index: 3 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.node(index)
            .map(|node| &node.element)
            .ok_or_else(|| Error::out_of_bounds(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index < length`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.node_mut(index)
            .map(|node| &mut node.element)
            .ok_or_else(|| Error::out_of_bounds(index))
    }

    /// Replaces the element at `index` and returns the previous one.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index < length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..3);
    /// assert_eq!(list.set(1, 10), Ok(1));
    /// assert_eq!(list.to_string(), "[0, 10, 2]");
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.get_mut(index)
            .map(|element| mem::replace(element, value))
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time, since the list keeps
    /// no tail pointer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.add(1);
    /// list.add(2);
    /// assert_eq!(list.to_string(), "[1, 2]");
    /// ```
    pub fn add(&mut self, value: T) {
        self.add_all(iter::once(value));
    }

    /// Appends all `values` to the back of the list, in order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *k*) time.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut link = tail_link(&mut self.ghost);
        for element in values {
            link = attach_node(link, Node::new(element));
        }
    }

    /// Inserts an element at `index`, shifting the following elements right.
    /// Inserting at `length` appends.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index <= length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([1, 2].iter().copied());
    /// list.insert(0, 0).unwrap();
    /// list.insert(3, 3).unwrap();
    /// assert_eq!(list.to_string(), "[0, 1, 2, 3]");
    /// assert!(list.insert(5, 5).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.insert_all(index, iter::once(value))
    }

    /// Inserts all `values` starting at `index`, keeping their order.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index <= length`. No value
    /// is consumed on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([1, 5].iter().copied());
    /// list.insert_all(1, 2..5).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4, 5]");
    /// ```
    pub fn insert_all<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Result<()> {
        let mut link = self
            .link_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index))?;
        for element in values {
            link = attach_node(link, Node::new(element));
        }
        Ok(())
    }

    /// Splices all nodes of `other` into the list at `index`.
    ///
    /// The nodes are moved, not copied: `other` is empty afterwards.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index <= length`; `other`
    /// is left untouched then.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([1, 2, 6].iter().copied());
    /// let mut other = OrderedList::from_iter(3..6);
    ///
    /// list.insert_list(2, &mut other).unwrap();
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4, 5, 6]");
    /// assert!(other.is_empty());
    /// ```
    pub fn insert_list(&mut self, index: usize, other: &mut Self) -> Result<()> {
        let link = self
            .link_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index))?;
        if let Some(front) = other.ghost.take() {
            let rest = mem::replace(link, Some(front));
            *tail_link(link) = rest;
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index < length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..3);
    /// assert_eq!(list.remove(1), Ok(1));
    /// assert_eq!(list.to_string(), "[0, 2]");
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.link_mut(index)
            .and_then(detach_node)
            .map(Node::into_element)
            .ok_or_else(|| Error::out_of_bounds(index))
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([3, 1, 3].iter().copied());
    /// assert!(list.delete(&3));
    /// assert_eq!(list.to_string(), "[1, 3]");
    /// assert!(!list.delete(&7));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_mut();
        while let Ok(element) = cursor.next() {
            if *element == *value {
                return cursor.remove().is_ok();
            }
        }
        false
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = OrderedList::from_iter(['a', 'b', 'c'].iter().copied());
    /// assert_eq!(list.index_of(&'c'), Some(2));
    /// assert_eq!(list.index_of(&'z'), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == value)
    }

    /// Returns `true` if the list contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == value)
    }

    /// Provides a read-only view of the list starting at `index`, without
    /// copying. The view stands on the node before `index`, so its first
    /// element is the one at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index <= length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = OrderedList::from_iter(0..5);
    /// assert_eq!(list.sublist(0).unwrap().to_string(), list.to_string());
    /// assert_eq!(list.sublist(3).unwrap().to_string(), "[3, 4]");
    /// assert_eq!(list.sublist(5).unwrap().to_string(), "[]");
    /// assert!(list.sublist(6).is_err());
    /// ```
    pub fn sublist(&self, index: usize) -> Result<Sublist<'_, T>> {
        self.link(index)
            .map(Sublist::new)
            .ok_or_else(|| Error::out_of_bounds(index))
    }

    /// Provides a cursor standing on the node before `index`, so that its first
    /// `next()` yields the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] unless `index <= length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..5);
    /// let mut cursor = list.sublist_mut(2).unwrap();
    /// assert_eq!(cursor.next(), Ok(&mut 2));
    /// assert_eq!(cursor.remove(), Ok(2));
    /// assert_eq!(list.to_string(), "[0, 1, 3, 4]");
    /// ```
    pub fn sublist_mut(&mut self, index: usize) -> Result<Cursor<'_, T>> {
        self.link_mut(index)
            .map(Cursor::new)
            .ok_or_else(|| Error::out_of_bounds(index))
    }

    /// Provides a cursor before the first element.
    pub fn cursor_mut(&mut self) -> Cursor<'_, T> {
        Cursor::new(&mut self.ghost)
    }

    /// Swaps the elements at indices `a` and `b`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::IndexOutOfBounds`] carrying the larger index unless
    /// both are below `length`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..4);
    /// list.swap(3, 1).unwrap();
    /// assert_eq!(list.to_string(), "[0, 3, 2, 1]");
    /// ```
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let Node { next, element } = self
            .node_mut(lo)
            .ok_or_else(|| Error::out_of_bounds(hi))?;
        if lo == hi {
            return Ok(());
        }
        let other = seek_mut(next, hi - lo - 1)
            .and_then(|link| link.as_deref_mut())
            .ok_or_else(|| Error::out_of_bounds(hi))?;
        mem::swap(element, &mut other.element);
        Ok(())
    }

    /// Returns a deep copy of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = OrderedList::from_iter(0..3);
    /// let mut copy = list.copy();
    /// assert_eq!(copy.to_string(), list.to_string());
    ///
    /// copy.add(3);
    /// assert_eq!(list.to_string(), "[0, 1, 2]");
    /// ```
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Removes all elements from the `OrderedList`.
    ///
    /// The ghost link is reset first, then the detached nodes are dropped one by
    /// one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..3);
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(list.to_string(), "[]");
    /// ```
    pub fn clear(&mut self) {
        let mut link = self.ghost.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.add(0);
    /// list.add(1);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.ghost)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..3);
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list.to_string(), "[10, 11, 12]");
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.ghost)
    }
}

impl<T: Display> Display for OrderedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        display_elements(f, self.iter())
    }
}

impl<T: Debug> Debug for OrderedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for OrderedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element.
    pub(crate) fn new(element: T) -> Box<Self> {
        Box::new(Node {
            next: None,
            element,
        })
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

/// Walks `steps` links forward from `link`.
pub(crate) fn seek<T>(mut link: &Link<T>, steps: usize) -> Option<&Link<T>> {
    for _ in 0..steps {
        link = &link.as_ref()?.next;
    }
    Some(link)
}

/// Mutable version of [`seek`].
pub(crate) fn seek_mut<T>(mut link: &mut Link<T>, steps: usize) -> Option<&mut Link<T>> {
    for _ in 0..steps {
        link = &mut link.as_mut()?.next;
    }
    Some(link)
}

/// Returns the empty link at the end of the chain starting at `link`.
pub(crate) fn tail_link<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Detach the node owned by `link`, moving its successor into `link`.
pub(crate) fn detach_node<T>(link: &mut Link<T>) -> Option<Box<Node<T>>> {
    let mut node = link.take()?;
    *link = node.next.take();
    Some(node)
}

/// Attach a detached node at `link`, in front of whatever `link` owned. Returns
/// the `next` link of the attached node.
pub(crate) fn attach_node<T>(link: &mut Link<T>, mut node: Box<Node<T>>) -> &mut Link<T> {
    node.next = link.take();
    &mut link.insert(node).next
}

pub(crate) fn display_elements<'a, T, I>(f: &mut Formatter<'_>, elements: I) -> fmt::Result
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    f.write_str("[")?;
    for (i, element) in elements.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        Display::fmt(element, f)?;
    }
    f.write_str("]")
}

// Ensure that `OrderedList` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: OrderedList<&'static str>) -> OrderedList<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::list::OrderedList;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    fn list_eq<T, I>(list: &OrderedList<T>, expected: I)
    where
        T: Debug + Clone + Eq,
        I: IntoIterator<Item = T>,
    {
        assert_eq!(
            Vec::from_iter(list.iter().cloned()),
            Vec::from_iter(expected)
        );
    }

    #[test]
    fn list_create() {
        let mut list = OrderedList::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.length(), 0);
        list.add(1);
        assert!(!list.is_empty());
        assert_eq!(list.remove(0), Ok(1));
        assert!(list.is_empty());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = OrderedList::new();
        list.add(DropChecker::new(1, &dropped));
        list.add(DropChecker::new(2, &dropped));
        list.add(DropChecker::new(3, &dropped));
        drop(list.remove(1));
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 1, 3]);
    }

    #[test]
    fn list_drop_long() {
        let list = OrderedList::from_iter(0..200_000);
        drop(list);
    }

    #[test]
    fn list_walkthrough() {
        let mut list = OrderedList::new();
        list.add(1);
        list.add(2);
        assert_eq!(list.to_string(), "[1, 2]");
        list.insert(0, 0).unwrap();
        assert_eq!(list.to_string(), "[0, 1, 2]");
        assert_eq!(list.remove(1), Ok(1));
        assert_eq!(list.to_string(), "[0, 2]");
        assert_eq!(list.length(), 2);
    }

    #[test]
    fn list_empty_bounds() {
        let mut list = OrderedList::<i32>::new();
        assert_eq!(list.get(0), Err(Error::IndexOutOfBounds { index: 0 }));
        assert_eq!(list.set(0, 0), Err(Error::IndexOutOfBounds { index: 0 }));
        assert_eq!(list.remove(0), Err(Error::IndexOutOfBounds { index: 0 }));
        assert_eq!(list.swap(0, 0), Err(Error::IndexOutOfBounds { index: 0 }));
        assert!(!list.delete(&0));
        assert_eq!(list.index_of(&0), None);
        assert!(list.insert(0, 0).is_ok());
        list.clear();
        assert!(list.insert_list(0, &mut OrderedList::new()).is_ok());
        assert!(list.is_empty());
        assert!(list.sublist(0).is_ok());
        assert_eq!(list.sublist(1).err(), Some(Error::IndexOutOfBounds { index: 1 }));
    }

    #[test]
    fn list_get_and_set() {
        let mut list = OrderedList::from_iter(0..5);
        for i in 0..5 {
            assert_eq!(list.get(i), Ok(&(i as i32)));
            assert_eq!(list.set(i, i as i32 * 10), Ok(i as i32));
            assert_eq!(list.get(i), Ok(&(i as i32 * 10)));
        }
        assert_eq!(list.get(5), Err(Error::IndexOutOfBounds { index: 5 }));
        assert_eq!(list.set(5, 0), Err(Error::IndexOutOfBounds { index: 5 }));
        *list.get_mut(2).unwrap() += 1;
        list_eq(&list, vec![0, 10, 21, 30, 40]);
    }

    #[test]
    fn list_insert_and_remove() {
        let mut list = OrderedList::from_iter(0..10);
        list.insert(5, 10).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..10));

        assert_eq!(list.remove(10), Ok(9));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(0, 11).unwrap();
        assert_eq!(list.get(0), Ok(&11));
        list_eq(&list, (11..=11).chain((0..5).chain(Some(10)).chain(5..9)));

        assert_eq!(list.remove(0), Ok(11));
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9));

        list.insert(10, 12).unwrap();
        list_eq(&list, (0..5).chain(Some(10)).chain(5..9).chain(Some(12)));

        assert_eq!(list.insert(12, 13), Err(Error::IndexOutOfBounds { index: 12 }));
        assert_eq!(list.remove(11), Err(Error::IndexOutOfBounds { index: 11 }));
        assert_eq!(list.length(), 11);
    }

    #[test]
    fn list_add_and_insert_all() {
        let mut list = OrderedList::new();
        list.add_all(0..3);
        list.add_all(None);
        list.add_all(3..5);
        list_eq(&list, 0..5);

        list.insert_all(2, vec![20, 21]).unwrap();
        list_eq(&list, vec![0, 1, 20, 21, 2, 3, 4]);
        list.insert_all(7, vec![7, 8]).unwrap();
        list_eq(&list, vec![0, 1, 20, 21, 2, 3, 4, 7, 8]);
        list.insert_all(0, vec![-1]).unwrap();
        list_eq(&list, vec![-1, 0, 1, 20, 21, 2, 3, 4, 7, 8]);
        assert!(list.insert_all(11, vec![9]).is_err());
        assert_eq!(list.length(), 10);
    }

    #[test]
    fn list_insert_list() {
        fn test_insert_list<T, I1, I2, I3>(list: I1, other: I2, at: usize, spliced: I3)
        where
            T: Clone + Eq + Debug,
            I1: IntoIterator<Item = T>,
            I2: IntoIterator<Item = T>,
            I3: IntoIterator<Item = T>,
        {
            let mut list = OrderedList::from_iter(list);
            let mut other = OrderedList::from_iter(other);
            let spliced = OrderedList::from_iter(spliced);
            let length = list.length() + other.length();

            list.insert_list(at, &mut other).unwrap();
            assert!(other.is_empty());
            assert_eq!(list, spliced);
            assert_eq!(list.length(), length);
        }
        test_insert_list(0..5, 5..7, 5, 0..7);
        test_insert_list(0..5, 5..7, 2, (0..2).chain(5..7).chain(2..5));
        test_insert_list(0..5, 5..7, 0, (5..7).chain(0..5));
        test_insert_list(0..5, Some(5), 5, 0..6);
        test_insert_list(0..5, Some(5), 2, (0..2).chain(Some(5)).chain(2..5));
        test_insert_list(0..5, Some(5), 0, Some(5).into_iter().chain(0..5));
        test_insert_list(0..5, None, 3, 0..5);
        test_insert_list(Some(0), 1..3, 1, 0..3);
        test_insert_list(Some(0), 1..3, 0, (1..3).chain(Some(0)));
        test_insert_list(None, 0..2, 0, 0..2);
        test_insert_list(None, Some(0), 0, Some(0));
        test_insert_list::<i32, _, _, _>(None, None, 0, None);

        let mut list = OrderedList::from_iter(0..2);
        let mut other = OrderedList::from_iter(2..4);
        assert_eq!(
            list.insert_list(3, &mut other),
            Err(Error::IndexOutOfBounds { index: 3 })
        );
        list_eq(&other, 2..4);
    }

    #[test]
    fn list_delete_and_index_of() {
        let mut list = OrderedList::from_iter(vec![4, 2, 4, 1]);
        assert_eq!(list.index_of(&4), Some(0));
        assert_eq!(list.index_of(&1), Some(3));
        assert!(list.contains(&2));

        assert!(list.delete(&4));
        list_eq(&list, vec![2, 4, 1]);
        assert_eq!(list.index_of(&4), Some(1));
        assert!(list.delete(&1));
        assert!(list.delete(&4));
        assert!(!list.delete(&4));
        list_eq(&list, vec![2]);
        assert!(!list.contains(&4));
    }

    #[test]
    fn list_swap() {
        let mut list = OrderedList::from_iter(0..5);
        list.swap(0, 4).unwrap();
        list_eq(&list, vec![4, 1, 2, 3, 0]);
        list.swap(2, 2).unwrap();
        list_eq(&list, vec![4, 1, 2, 3, 0]);
        list.swap(2, 1).unwrap();
        list_eq(&list, vec![4, 2, 1, 3, 0]);
        assert_eq!(list.swap(1, 5), Err(Error::IndexOutOfBounds { index: 5 }));
        assert_eq!(list.swap(7, 6), Err(Error::IndexOutOfBounds { index: 7 }));
    }

    #[test]
    fn list_sublist() {
        let list = OrderedList::from_iter(0..4);
        for at in 0..=4 {
            let sublist = list.sublist(at).unwrap();
            assert_eq!(
                Vec::from_iter(sublist.iter().copied()),
                Vec::from_iter(at as i32..4)
            );
            assert_eq!(sublist.first(), list.get(at).ok());
            assert_eq!(sublist.length(), 4 - at);
        }
        assert_eq!(list.sublist(0).unwrap().to_string(), list.to_string());
        assert_eq!(list.sublist(5).err(), Some(Error::IndexOutOfBounds { index: 5 }));
    }

    #[test]
    fn list_copy_is_deep() {
        let list = OrderedList::from_iter(vec![String::from("a"), String::from("b")]);
        let mut copy = list.copy();
        assert_eq!(copy.to_string(), list.to_string());

        copy.set(0, String::from("z")).unwrap();
        copy.add(String::from("c"));
        assert_eq!(list.to_string(), "[a, b]");
        assert_eq!(copy.to_string(), "[z, b, c]");

        let empty = OrderedList::<u8>::new();
        assert_eq!(empty.copy().to_string(), "[]");
    }

    #[test]
    fn list_display_and_debug() {
        let list = OrderedList::from_iter(vec![1.5, 2.0]);
        assert_eq!(list.to_string(), "[1.5, 2]");
        assert_eq!(format!("{:?}", list), "[1.5, 2.0]");
        assert_eq!(OrderedList::<i32>::new().to_string(), "[]");
        assert_eq!(OrderedList::from_iter(Some(7)).to_string(), "[7]");
    }

    #[test]
    fn list_cut() {
        let mut list = OrderedList::from_iter(0..6);
        let run = list.cut(1, 3).unwrap();
        list_eq(&run, 1..4);
        list_eq(&list, vec![0, 4, 5]);

        let run = list.cut(3, 0).unwrap();
        assert!(run.is_empty());
        let run = list.cut(0, 3).unwrap();
        list_eq(&run, vec![0, 4, 5]);
        assert!(list.is_empty());

        let mut list = OrderedList::from_iter(0..3);
        assert_eq!(list.cut(1, 3).err(), Some(Error::IndexOutOfBounds { index: 4 }));
        assert_eq!(list.cut(4, 0).err(), Some(Error::IndexOutOfBounds { index: 4 }));
        list_eq(&list, 0..3);
    }

    #[test]
    fn list_clear_then_reuse() {
        let mut list = OrderedList::from_iter(0..10);
        list.clear();
        assert_eq!(list.length(), 0);
        list.add(3);
        list_eq(&list, Some(3));
    }
}
