use crate::list::{display_elements, Link};
use crate::Iter;
use std::fmt;

/// A read-only view of an `OrderedList` from some index to its end.
///
/// The view shares the nodes of the list: it stands on the node before its
/// first element, so no element is copied. It is created by
/// [`OrderedList::sublist`].
///
/// [`OrderedList::sublist`]: crate::OrderedList::sublist
///
/// # Examples
///
/// ```
/// use ordered_list::OrderedList;
/// use std::iter::FromIterator;
///
/// let list = OrderedList::from_iter(0..5);
/// let tail = list.sublist(2).unwrap();
/// assert_eq!(tail.first(), Some(&2));
/// assert_eq!(tail.length(), 3);
/// assert_eq!(tail.to_string(), "[2, 3, 4]");
/// ```
pub struct Sublist<'a, T: 'a> {
    anchor: &'a Link<T>,
}

impl<'a, T: 'a> Sublist<'a, T> {
    pub(crate) fn new(anchor: &'a Link<T>) -> Self {
        Self { anchor }
    }

    /// Returns the first element of the view, or `None` if it is empty.
    pub fn first(&self) -> Option<&'a T> {
        self.anchor.as_ref().map(|node| &node.element)
    }

    pub fn is_empty(&self) -> bool {
        self.anchor.is_none()
    }

    /// Returns the number of elements in the view, by walking it.
    pub fn length(&self) -> usize {
        self.iter().count()
    }

    /// Provides a forward iterator over the view.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter::new(self.anchor)
    }
}

impl<T> Clone for Sublist<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Sublist<'_, T> {}

impl<'a, T: 'a> IntoIterator for Sublist<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sublist<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_elements(f, self.iter())
    }
}

impl<T: fmt::Debug> fmt::Debug for Sublist<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
