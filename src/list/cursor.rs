use crate::error::{Error, Result};
use crate::list::{attach_node, detach_node, Link, Node, OrderedList};
use std::fmt;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// A cursor over an `OrderedList` with editing operations.
///
/// A `Cursor` walks the list forward and can insert or remove elements at its
/// position while walking. It stands on an *anchor*, the node right before its
/// logical position (initially the ghost link of the list), and remembers
/// whether [`next`] has yielded an element since the last structural change.
/// That element, if any, is always the one right after the anchor.
///
/// - [`next`]: yields the following element. After a [`remove`] the anchor
///   stays put, so the element that slid into place is yielded next and a
///   delete-while-iterating loop skips nothing;
/// - [`remove`]: unlinks the element last yielded by [`next`];
/// - [`add`]: inserts an element right after the cursor position and steps
///   over it, so repeated adds keep their order.
///
/// The cursor borrows the list mutably for its whole lifetime, so it is the
/// only handle able to change the list while a traversal is in progress.
///
/// # Examples
///
/// ```
/// use ordered_list::OrderedList;
/// use std::iter::FromIterator;
///
/// let mut list = OrderedList::from_iter([1, 2, 3, 4].iter().copied());
/// let mut cursor = list.cursor_mut();
///
/// assert_eq!(cursor.next(), Ok(&mut 1));
/// cursor.add(10); // becomes [1, 10, 2, 3, 4]
/// assert_eq!(cursor.next(), Ok(&mut 2));
/// assert_eq!(cursor.remove(), Ok(2)); // becomes [1, 10, 3, 4]
/// assert!(cursor.remove().is_err());
/// assert_eq!(cursor.next(), Ok(&mut 3));
///
/// assert_eq!(list.to_string(), "[1, 10, 3, 4]");
/// ```
///
/// The list cannot be touched while a cursor is alive:
///
/// ```compile_fail
/// use ordered_list::OrderedList;
/// use std::iter::FromIterator;
///
/// let mut list = OrderedList::from_iter([1, 2, 3].iter().copied());
/// let mut cursor = list.cursor_mut();
/// list.add(4);
/// cursor.next().unwrap();
/// ```
///
/// [`next`]: Cursor::next
/// [`remove`]: Cursor::remove
/// [`add`]: Cursor::add
pub struct Cursor<'a, T: 'a> {
    anchor: NonNull<Link<T>>,
    returned: bool,
    _marker: PhantomData<&'a mut OrderedList<T>>,
}

// Private methods
impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(anchor: &'a mut Link<T>) -> Self {
        Self {
            anchor: NonNull::from(anchor),
            returned: false,
            _marker: PhantomData,
        }
    }

    fn anchor(&self) -> &Link<T> {
        // SAFETY: the anchor is the ghost link or the `next` link of a node in the
        // borrowed list, and that node is only unlinked through the cursor itself.
        unsafe { self.anchor.as_ref() }
    }

    fn anchor_mut(&mut self) -> &mut Link<T> {
        // SAFETY: see `anchor`.
        unsafe { self.anchor.as_mut() }
    }

    /// The link owning the node the next call of `next` would yield.
    fn target(&self) -> Option<&Link<T>> {
        let anchor = self.anchor();
        if self.returned {
            anchor.as_ref().map(|node| &node.next)
        } else {
            Some(anchor)
        }
    }

    /// The `next` link of the node right after the anchor.
    fn successor(&mut self) -> Option<NonNull<Link<T>>> {
        self.anchor_mut()
            .as_mut()
            .map(|node| NonNull::from(&mut node.next))
    }

    /// Unlinks the element last yielded by `next`, keeping its node.
    pub(crate) fn detach(&mut self) -> Result<Box<Node<T>>> {
        if !mem::replace(&mut self.returned, false) {
            return Err(Error::invalid("remove", "no element to remove"));
        }
        detach_node(self.anchor_mut()).ok_or_else(|| Error::invalid("remove", "no element to remove"))
    }

    /// Links a detached node right after the cursor position and steps over it.
    pub(crate) fn attach(&mut self, node: Box<Node<T>>) {
        let mut link = self.anchor;
        if mem::replace(&mut self.returned, false) {
            if let Some(successor) = self.successor() {
                link = successor;
            }
        }
        // SAFETY: `link` is the anchor or the `next` link of the node after it,
        // both owned by the borrowed list.
        let link = unsafe { &mut *link.as_ptr() };
        self.anchor = NonNull::from(attach_node(link, node));
    }
}

impl<'a, T: 'a> Cursor<'a, T> {
    /// Returns `true` if a call of [`Cursor::next`] would succeed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// list.add(1);
    /// let mut cursor = list.cursor_mut();
    /// assert!(cursor.has_next());
    /// cursor.next().unwrap();
    /// assert!(!cursor.has_next());
    /// ```
    pub fn has_next(&self) -> bool {
        self.target().map_or(false, Option::is_some)
    }

    /// Moves forward and yields the next element.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidOperation`] if there is no next element.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&mut T> {
        if !self.has_next() {
            return Err(Error::invalid("next", "no next element"));
        }
        if self.returned {
            if let Some(successor) = self.successor() {
                self.anchor = successor;
            }
        }
        self.returned = true;
        let node = self
            .anchor_mut()
            .as_mut()
            .expect("the yielded node follows the anchor");
        Ok(&mut node.element)
    }

    /// Removes the element last yielded by [`Cursor::next`] and returns it.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidOperation`] if nothing was yielded since the
    /// cursor was created or since the last [`Cursor::remove`] or
    /// [`Cursor::add`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..6);
    /// let mut cursor = list.cursor_mut();
    /// while let Ok(element) = cursor.next() {
    ///     if *element % 2 == 0 {
    ///         cursor.remove().unwrap();
    ///     }
    /// }
    /// assert_eq!(list.to_string(), "[1, 3, 5]");
    /// ```
    pub fn remove(&mut self) -> Result<T> {
        self.detach().map(Node::into_element)
    }

    /// Inserts an element right after the cursor position: after the anchor if
    /// nothing was yielded, otherwise after the element last yielded. The cursor
    /// then stands on the new element, which [`Cursor::remove`] cannot target.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    ///
    /// let mut list = OrderedList::new();
    /// let mut cursor = list.cursor_mut();
    /// cursor.add(1);
    /// cursor.add(2);
    /// assert!(cursor.remove().is_err());
    /// assert_eq!(list.to_string(), "[1, 2]");
    /// ```
    pub fn add(&mut self, element: T) {
        self.attach(Node::new(element));
    }

    /// Returns the element last yielded by [`Cursor::next`], unless it was
    /// removed or an element was added since.
    pub fn current(&self) -> Option<&T> {
        if !self.returned {
            return None;
        }
        self.anchor().as_ref().map(|node| &node.element)
    }

    /// Returns the element the next call of [`Cursor::next`] would yield,
    /// without moving.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..2);
    /// let mut cursor = list.cursor_mut();
    /// assert_eq!(cursor.peek(), Some(&0));
    /// cursor.next().unwrap();
    /// assert_eq!(cursor.current(), Some(&0));
    /// assert_eq!(cursor.peek(), Some(&1));
    /// ```
    pub fn peek(&self) -> Option<&T> {
        self.target()?.as_ref().map(|node| &node.element)
    }
}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.current())
            .field("peek", &self.peek())
            .finish()
    }
}

unsafe impl<T: Send> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
