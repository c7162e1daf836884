use crate::list::{seek_mut, OrderedList};
use rand::Rng;
use std::mem;

impl<T> OrderedList<T> {
    /// Shuffle the list in place with the thread-local random generator.
    ///
    /// Every permutation is equally likely. See [`OrderedList::shuffle_with`]
    /// for a reproducible shuffle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter(0..10);
    /// list.shuffle();
    /// assert_eq!(list.length(), 10);
    /// assert!((0..10).all(|i| list.contains(&i)));
    /// ```
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Shuffle the list in place with a Fisher-Yates shuffle drawing from `rng`.
    ///
    /// For each index `i` but the last one, an index `j` is drawn uniformly from
    /// `i..length` and the two elements are swapped. Only elements move; the
    /// nodes stay where they are.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*<sup>2</sup>) node steps in the
    /// worst case, since every draw walks forward from index `i`.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut remaining = self.length();
        let mut link = self.ghost_link_mut();
        while remaining > 1 {
            let node = match link.as_deref_mut() {
                Some(node) => node,
                None => break,
            };
            let offset = rng.gen_range(0..remaining);
            if offset > 0 {
                if let Some(other) = seek_mut(&mut node.next, offset - 1)
                    .and_then(|link| link.as_deref_mut())
                {
                    mem::swap(&mut node.element, &mut other.element);
                }
            }
            link = &mut node.next;
            remaining -= 1;
        }
    }

    /// Shuffle the list until it is sorted.
    ///
    /// This is a toy. Its termination is only probabilistic and it takes
    /// *O*(*n* * *n*!) steps in expectation, so keep the list tiny.
    pub fn bogo(&mut self)
    where
        T: PartialOrd,
    {
        self.bogo_with(&mut rand::thread_rng());
    }

    /// Version of [`OrderedList::bogo`] drawing from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_list::OrderedList;
    /// use rand::rngs::SmallRng;
    /// use rand::SeedableRng;
    /// use std::iter::FromIterator;
    ///
    /// let mut list = OrderedList::from_iter([3, 1, 2].iter().copied());
    /// list.bogo_with(&mut SmallRng::seed_from_u64(7));
    /// assert_eq!(list.to_string(), "[1, 2, 3]");
    /// ```
    pub fn bogo_with<R: Rng + ?Sized>(&mut self, rng: &mut R)
    where
        T: PartialOrd,
    {
        let mut rounds = 0_u64;
        while !self.sorted() {
            self.shuffle_with(rng);
            rounds += 1;
        }
        log::debug!("bogo sorted {} elements after {} shuffles", self.length(), rounds);
    }
}


// proptest doesn't run under miri with default config
#[cfg(all(not(miri), test))]
mod proptests {
    use crate::OrderedList;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::iter::FromIterator;

    proptest! {
        #[test]
        fn shuffle_preserves_multiset(values in vec(0..16_u8, 0..64), seed in any::<u64>()) {
            let mut list = OrderedList::from_iter(values.clone());
            list.shuffle_with(&mut SmallRng::seed_from_u64(seed));
            prop_assert_eq!(list.length(), values.len());
            for value in &values {
                let index = list.index_of(value);
                prop_assert!(index.is_some());
                prop_assert_eq!(list.get(index.unwrap_or_default()), Ok(value));
            }
            let mut shuffled = Vec::from_iter(list);
            let mut expected = values;
            shuffled.sort();
            expected.sort();
            prop_assert_eq!(shuffled, expected);
        }
    }
}
