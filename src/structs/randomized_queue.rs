use std::{cell::RefCell, fmt, iter::FusedIterator};

use rand::{rngs::ThreadRng, seq::SliceRandom, Rng};

use crate::utils::*;

/// The store never shrinks below this many slots.
pub const MIN_CAPACITY: usize = 8;

/// A queue whose removals pick an item uniformly at random.
///
/// Backed by a resizable array: `dequeue` swaps the chosen slot with the
/// last one and pops it, so every non-iterator operation is amortized O(1).
/// The random source sits in a `RefCell` so `sample` and `iter` only need a
/// shared borrow.
pub struct RandomizedQueue<T, R = ThreadRng> {
    items: Vec<T>,
    rng: RefCell<R>,
}

impl<T> RandomizedQueue<T, ThreadRng> {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            rng: RefCell::new(rand::thread_rng()),
        }
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    /// Create a queue drawing from the given random source.
    ///
    /// A seeded `StdRng` makes every draw reproducible.
    pub fn with_rng(rng: R) -> Self {
        Self {
            items: Vec::new(),
            rng: RefCell::new(rng),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Add an item. Fails with [`QueueError::NullArgument`] when it is absent.
    pub fn enqueue(&mut self, item: impl Into<Option<T>>) -> Result<()> {
        let item: Option<T> = item.into();
        self.items.push(item.ok_or(QueueError::NullArgument)?);

        trace!("RandomizedQueue enqueue : len = {}", self.items.len());
        Ok(())
    }

    /// Remove and return an item chosen uniformly at random.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(QueueError::EmptyContainer);
        }

        let index = self.rng.get_mut().gen_range(0..self.items.len());
        let item = self.items.swap_remove(index);
        self.shrink_if_sparse();

        trace!(
            "RandomizedQueue dequeue : index = {}, len = {}",
            index,
            self.items.len()
        );
        Ok(item)
    }

    /// Return, without removing, an item chosen uniformly at random.
    pub fn sample(&self) -> Result<&T> {
        if self.items.is_empty() {
            return Err(QueueError::EmptyContainer);
        }

        let index = self.rng.borrow_mut().gen_range(0..self.items.len());

        trace!("RandomizedQueue sample  : index = {}", index);
        Ok(&self.items[index])
    }

    /// Iterate over a snapshot of the current items in a fresh random order.
    ///
    /// Construction copies and shuffles the item references in O(n); every
    /// step after that is O(1). Each call draws its own permutation, so two
    /// iterators over the same queue are independent.
    pub fn iter(&self) -> Shuffled<'_, T> {
        let mut snapshot = self.items.iter().collect::<Vec<_>>();
        snapshot.shuffle(&mut *self.rng.borrow_mut());

        trace!("RandomizedQueue iter    : snapshot of {}", snapshot.len());
        Shuffled {
            items: snapshot.into_iter(),
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.items.capacity();
        if should_shrink(self.items.len(), capacity, MIN_CAPACITY) {
            self.items
                .shrink_to((self.items.len() * 2).max(MIN_CAPACITY));

            trace!(
                "RandomizedQueue resize  : {} -> {}",
                capacity,
                self.items.capacity()
            );
        }
    }
}

impl<T> Default for RandomizedQueue<T, ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R> fmt::Debug for RandomizedQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("len", &self.items.len())
            .field("capacity", &self.items.capacity())
            .finish()
    }
}

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            // a present item never fails
            let _ = self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T, ThreadRng> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RandomizedQueue::new();
        queue.extend(iter);
        queue
    }
}

/// Borrowing iterator over a shuffled snapshot of a [`RandomizedQueue`].
#[derive(Debug, Clone)]
pub struct Shuffled<'a, T> {
    items: std::vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Shuffled<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for Shuffled<'_, T> {}

impl<T> FusedIterator for Shuffled<'_, T> {}

impl<T> CheckedIterator for Shuffled<'_, T> {
    fn has_next(&self) -> bool {
        self.items.len() > 0
    }
}

/// Owning iterator yielding every item of a [`RandomizedQueue`] in random order.
#[derive(Debug)]
pub struct IntoIter<T> {
    items: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> CheckedIterator for IntoIter<T> {
    fn has_next(&self) -> bool {
        self.items.len() > 0
    }
}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let mut items = self.items;
        items.shuffle(&mut self.rng.into_inner());

        IntoIter {
            items: items.into_iter(),
        }
    }
}

impl<'a, T, R: Rng> IntoIterator for &'a RandomizedQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Shuffled<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
