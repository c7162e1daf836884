use crate::list::{seek, OrderedList};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

#[cfg(feature = "shuffle")]
mod shuffle;
mod sort;

impl<T: PartialEq> PartialEq for OrderedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other)
    }
}

impl<T: Eq> Eq for OrderedList<T> {}

impl<T: Clone> Clone for OrderedList<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: Hash> Hash for OrderedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut len = 0_usize;
        for elt in self {
            elt.hash(state);
            len += 1;
        }
        len.hash(state);
    }
}

impl<T> OrderedList<T> {
    /// Returns `true` if every element is less than or equal to its successor.
    /// Empty and single-element lists are sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// assert!(OrderedList::from_iter([1, 1, 2].iter().copied()).sorted());
    /// assert!(!OrderedList::from_iter([2, 1].iter().copied()).sorted());
    /// assert!(OrderedList::<i32>::new().sorted());
    /// ```
    pub fn sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        self.iter()
            .zip(self.iter().skip(1))
            .all(|(element, successor)| element <= successor)
    }

    /// Sort the list in non-decreasing order.
    ///
    /// Equal elements keep their relative order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) node moves, plus
    /// *O*(*n*) walks from the ghost link for each merged window.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort over index ranges. Each
    /// merge moves the nodes of both runs into a temporary list through cursors
    /// and splices it back, so no node is reallocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([5, 3, 4, 1, 2].iter().copied());
    /// list.sort();
    /// assert_eq!(list.to_string(), "[1, 2, 3, 4, 5]");
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        sort::merge_sort(self);
    }

    /// Binary searches a sorted list for `value`.
    ///
    /// If the value is found then [`Result::Ok`] is returned, containing the
    /// index of a matching element. If there are multiple matches, then any one
    /// of the matches could be returned. If the value is not found then
    /// [`Result::Err`] is returned, containing the index where a matching
    /// element could be inserted while keeping the list sorted.
    ///
    /// The list must be sorted in non-decreasing order; this is not checked.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(log(*n*)) comparisons and *O*(*n*)
    /// node steps.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let list = OrderedList::from_iter([0, 2].iter().copied());
    /// assert_eq!(list.search(&2), Ok(1));
    /// assert_eq!(list.search(&1), Err(1));
    /// assert_eq!(OrderedList::new().search(&0), Err(0));
    /// ```
    pub fn search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        let (mut lo, mut hi) = (0, self.length());
        // The link before `lo`, so each probe only walks forward from `lo`.
        let mut base = self.ghost_link();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let node = match seek(base, mid - lo).and_then(|link| link.as_deref()) {
                Some(node) => node,
                None => break,
            };
            match node.element.cmp(value) {
                Ordering::Less => {
                    lo = mid + 1;
                    base = &node.next;
                }
                Ordering::Greater => hi = mid,
                Ordering::Equal => return Ok(mid),
            }
        }
        Err(lo)
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::OrderedList;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use std::iter::FromIterator;

    proptest! {
        #[test]
        fn set_then_get(values in vec(any::<i32>(), 1..64), index in any::<prop::sample::Index>(), value in any::<i32>()) {
            let mut list = OrderedList::from_iter(values.clone());
            let index = index.index(values.len());
            prop_assert_eq!(list.set(index, value), Ok(values[index]));
            prop_assert_eq!(list.get(index), Ok(&value));
        }

        #[test]
        fn copy_is_independent(values in vec(any::<i16>(), 0..64), extra in any::<i16>()) {
            let list = OrderedList::from_iter(values.clone());
            let mut copy = list.copy();
            prop_assert_eq!(copy.to_string(), list.to_string());
            copy.add(extra);
            if let Ok(first) = copy.get_mut(0) {
                *first = first.wrapping_add(1);
            }
            prop_assert_eq!(Vec::from_iter(list.iter().copied()), values);
        }

        #[test]
        fn sort_sorts(values in vec(any::<i32>(), 0..200)) {
            let mut expected = values.clone();
            expected.sort();
            let mut list = OrderedList::from_iter(values);
            list.sort();
            prop_assert!(list.sorted());
            prop_assert_eq!(Vec::from_iter(list), expected);
        }

        #[test]
        fn search_finds_or_points(mut values in vec(0..100_i32, 0..64), probe in 0..100_i32) {
            values.sort();
            let list = OrderedList::from_iter(values.clone());
            match list.search(&probe) {
                Ok(index) => prop_assert_eq!(list.get(index), Ok(&probe)),
                Err(point) => {
                    prop_assert!(!values.contains(&probe));
                    values.insert(point, probe);
                    prop_assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
                }
            }
        }

        #[test]
        fn insert_list_moves_everything(
            values in vec(any::<u8>(), 0..32),
            others in vec(any::<u8>(), 0..32),
            at in any::<prop::sample::Index>(),
        ) {
            let mut list = OrderedList::from_iter(values.clone());
            let mut other = OrderedList::from_iter(others.clone());
            let at = at.index(values.len() + 1);
            prop_assert!(list.insert_list(at, &mut other).is_ok());
            prop_assert!(other.is_empty());
            prop_assert_eq!(list.length(), values.len() + others.len());

            let mut expected = values;
            let tail = expected.split_off(at);
            expected.extend(others);
            expected.extend(tail);
            prop_assert_eq!(Vec::from_iter(list), expected);
        }
    }
}
