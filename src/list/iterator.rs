use crate::list::{Link, Node, OrderedList};
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// An iterator over the elements of an `OrderedList`.
///
/// It holds a shared borrow of the node it yields next, so the list cannot be
/// written while it is alive.
///
/// # Examples
///
/// ```compile_fail
/// use ordered_list::OrderedList;
/// use std::iter::FromIterator;
///
/// let mut list = OrderedList::from_iter([1, 2, 3].iter().copied());
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.add(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    next: Option<&'a Node<T>>,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(link: &'a Link<T>) -> Self {
        Self {
            next: link.as_deref(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self { next: self.next }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("Iter");
        for element in self.clone() {
            f.field(element);
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    /// Return the element of the next node and step to its successor, or return
    /// `None` at the end of the list.
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.element
        })
    }
}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the elements of an `OrderedList`.
///
/// It changes the elements but not the linked structure of the list; use a
/// [`Cursor`](crate::list::cursor::Cursor) for that.
///
/// # Examples
///
/// `OrderedList` is not readable after an `IterMut` is created.
/// ```compile_fail
/// use ordered_list::OrderedList;
/// use std::iter::FromIterator;
///
/// let mut list = OrderedList::from_iter([1, 2, 3].iter().copied());
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.get(0));
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(link: &'a mut Link<T>) -> Self {
        Self {
            next: link.as_deref_mut(),
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_tuple("IterMut");
        let mut next = self.next.as_deref();
        while let Some(node) = next {
            f.field(&node.element);
            next = node.next.as_deref();
        }
        f.finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    /// Return the element of the next node and step to its successor, or return
    /// `None` at the end of the list.
    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.element
        })
    }
}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the elements of an `OrderedList`.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedList`]
/// (provided by the `IntoIterator` trait). See its documentation for more.
///
/// [`into_iter`]: OrderedList::into_iter
pub struct IntoIter<T> {
    list: OrderedList<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("list", &self.list)
            .finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for OrderedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OrderedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = OrderedList::new();
        list.add_all(iter);
        list
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedList;
    use std::fmt::Debug;
    use std::iter::FromIterator;

    #[test]
    fn test_iter() {
        macro_rules! test_iter {
            ($FN:ident, $ITER:ident) => {
                fn $FN<T, I>(input: I, mid: usize)
                where
                    T: Eq + Debug + Clone,
                    I: IntoIterator<Item = T>,
                {
                    #[allow(unused_mut)]
                    let mut vec = Vec::from_iter(input);
                    #[allow(unused_mut)]
                    let mut list = OrderedList::from_iter(vec.clone());
                    let mut iter = list.$ITER();
                    for item in vec.$ITER() {
                        assert_eq!(iter.next(), Some(item));
                    }
                    assert_eq!(iter.next(), None);
                    assert_eq!(iter.next(), None);

                    let mut iter = list.$ITER().skip(mid);
                    for item in vec.$ITER().skip(mid) {
                        assert_eq!(iter.next(), Some(item));
                    }
                    assert_eq!(iter.next(), None);
                }
            };
        }
        test_iter!(test_iter, iter);
        test_iter!(test_iter_mut, iter_mut);

        fn test_case<T, I>(input: I, mid: usize)
        where
            T: Eq + Debug + Clone,
            I: IntoIterator<Item = T> + Clone,
        {
            test_iter(input.clone(), mid);
            test_iter_mut(input, mid);
        }
        test_case(0..10, 10);
        test_case(0..10, 5);
        test_case(0..10, 0);
        test_case(0..2, 1);
        test_case(0..1, 1);
        test_case(0..0, 0);
    }

    #[test]
    fn test_into_iter_and_extend() {
        let mut list = OrderedList::from_iter(0..3);
        list.extend(3..5);
        list.extend(&[5, 6]);
        assert_eq!(Vec::from_iter(list), Vec::from_iter(0..7));

        let list = OrderedList::from_iter(vec!["x", "y"]);
        let mut into_iter = list.into_iter();
        assert_eq!(into_iter.next(), Some("x"));
        assert_eq!(format!("{:?}", into_iter), "IntoIter { list: [\"y\"] }");
        assert_eq!(into_iter.next(), Some("y"));
        assert_eq!(into_iter.next(), None);
    }

    #[test]
    fn test_iter_debug() {
        let mut list = OrderedList::from_iter(1..4);
        let mut iter = list.iter();
        iter.next();
        assert_eq!(format!("{:?}", iter), "Iter(2, 3)");
        assert_eq!(format!("{:?}", list.iter_mut()), "IterMut(1, 2, 3)");
    }
}
