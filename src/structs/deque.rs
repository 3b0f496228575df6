use std::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use crate::utils::*;

type Link<T> = Option<NonNull<Node<T>>>;

struct Node<T> {
    item: T,
    /// Owning link towards the tail.
    next: Link<T>,
    /// Back-reference towards the head, never owning.
    prev: Link<T>,
}

impl<T> Node<T> {
    fn alloc(item: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            item,
            next: None,
            prev: None,
        })))
    }
}

/// A double-ended queue backed by a doubly-linked list.
///
/// Every non-iterator operation is O(1) in the worst case and the memory
/// used is linear in the number of items.
pub struct Deque<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> Deque<T> {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert an item at the front.
    ///
    /// Fails with [`QueueError::NullArgument`] when the item is absent.
    pub fn add_first(&mut self, item: impl Into<Option<T>>) -> Result<()> {
        let item: Option<T> = item.into();
        let node = Node::alloc(item.ok_or(QueueError::NullArgument)?);

        // SAFETY: `node` was just allocated and `head` is a live node owned by `self`.
        unsafe {
            (*node.as_ptr()).next = self.head;
            match self.head {
                Some(head) => (*head.as_ptr()).prev = Some(node),
                None => self.tail = Some(node),
            }
        }

        self.head = Some(node);
        self.len += 1;

        trace!("Deque add first      : len = {}", self.len);
        Ok(())
    }

    /// Insert an item at the back.
    ///
    /// Fails with [`QueueError::NullArgument`] when the item is absent.
    pub fn add_last(&mut self, item: impl Into<Option<T>>) -> Result<()> {
        let item: Option<T> = item.into();
        let node = Node::alloc(item.ok_or(QueueError::NullArgument)?);

        // SAFETY: `node` was just allocated and `tail` is a live node owned by `self`.
        unsafe {
            (*node.as_ptr()).prev = self.tail;
            match self.tail {
                Some(tail) => (*tail.as_ptr()).next = Some(node),
                None => self.head = Some(node),
            }
        }

        self.tail = Some(node);
        self.len += 1;

        trace!("Deque add last       : len = {}", self.len);
        Ok(())
    }

    pub fn remove_first(&mut self) -> Result<T> {
        let head = self.head.ok_or(QueueError::EmptyContainer)?;

        // SAFETY: `head` came from `Node::alloc` and is unlinked below before
        // anything else can observe it.
        let node = unsafe { Box::from_raw(head.as_ptr()) };

        self.head = node.next;
        match self.head {
            // SAFETY: the successor is still owned by `self`.
            Some(next) => unsafe { (*next.as_ptr()).prev = None },
            None => self.tail = None,
        }
        self.len -= 1;

        trace!("Deque remove first   : len = {}", self.len);
        Ok(node.item)
    }

    pub fn remove_last(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(QueueError::EmptyContainer)?;

        // SAFETY: see `remove_first`.
        let node = unsafe { Box::from_raw(tail.as_ptr()) };

        self.tail = node.prev;
        match self.tail {
            // SAFETY: the predecessor is still owned by `self`.
            Some(prev) => unsafe { (*prev.as_ptr()).next = None },
            None => self.head = None,
        }
        self.len -= 1;

        trace!("Deque remove last    : len = {}", self.len);
        Ok(node.item)
    }

    pub fn front(&self) -> Option<&T> {
        // SAFETY: nodes live as long as the shared borrow of `self`.
        self.head.map(|node| unsafe { &(*node.as_ptr()).item })
    }

    pub fn back(&self) -> Option<&T> {
        // SAFETY: nodes live as long as the shared borrow of `self`.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).item })
    }

    pub fn clear(&mut self) {
        while self.remove_first().is_ok() {}
    }

    /// Iterate from front to back. Construction and each step are O(1).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            // a present item never fails
            let _ = self.add_last(item);
        }
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Deque::new();
        deque.extend(iter);
        deque
    }
}

/// Borrowing iterator over a [`Deque`], front to back.
#[derive(Debug)]
pub struct Iter<'a, T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head,
            tail: self.tail,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.head.map(|node| {
            // SAFETY: the deque is borrowed for `'a`, so the node is alive.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.head = node.next;
            &node.item
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.len == 0 {
            return None;
        }

        self.tail.map(|node| {
            // SAFETY: the deque is borrowed for `'a`, so the node is alive.
            let node = unsafe { &*node.as_ptr() };
            self.len -= 1;
            self.tail = node.prev;
            &node.item
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> CheckedIterator for Iter<'_, T> {
    fn has_next(&self) -> bool {
        self.len > 0
    }
}

/// Owning iterator over a [`Deque`], front to back.
#[derive(Debug)]
pub struct IntoIter<T> {
    deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> CheckedIterator for IntoIter<T> {
    fn has_next(&self) -> bool {
        !self.deque.is_empty()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};

    use super::*;

    /// Walk the chain both ways and check every link agrees with `len`.
    fn check_links<T>(deque: &Deque<T>) {
        let mut count = 0;
        let mut prev: Link<T> = None;
        let mut cur = deque.head;

        while let Some(node) = cur {
            let node_ref = unsafe { &*node.as_ptr() };
            assert_eq!(node_ref.prev, prev, "prev link mismatch at {}", count);
            prev = cur;
            cur = node_ref.next;
            count += 1;
        }

        assert_eq!(prev, deque.tail);
        assert_eq!(count, deque.len());
    }

    #[test]
    fn it_works() -> Result<()> {
        crate::utils::logger::init();

        let mut deque = Deque::new();
        deque.add_first(3)?;
        check_links(&deque);
        assert_eq!(deque.remove_first()?, 3);
        assert!(deque.is_empty());

        deque.add_last(3)?;
        assert_eq!(deque.remove_last()?, 3);
        assert!(deque.is_empty());
        check_links(&deque);

        Ok(())
    }

    #[test]
    fn test_iter_order() -> Result<()> {
        let mut deque = Deque::new();
        deque.add_first(23)?;
        deque.add_last(45)?;
        deque.add_first(-3)?;
        check_links(&deque);

        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![-3, 23, 45]);
        assert_eq!(
            deque.iter().collect::<Vec<_>>(),
            deque.iter().collect::<Vec<_>>()
        );
        assert_eq!(deque.iter().rev().copied().collect::<Vec<_>>(), vec![45, 23, -3]);
        assert_eq!(deque.front(), Some(&-3));
        assert_eq!(deque.back(), Some(&45));

        let mut iter = deque.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&-3));
        assert_eq!(iter.next_back(), Some(&45));
        assert_eq!(iter.next(), Some(&23));
        assert!(!iter.has_next());
        assert_eq!(iter.next_back(), None);
        assert!(matches!(iter.try_next(), Err(QueueError::Exhausted)));

        Ok(())
    }

    #[test]
    fn test_empty_and_absent() {
        let mut deque: Deque<i32> = Deque::new();
        assert!(matches!(deque.remove_first(), Err(QueueError::EmptyContainer)));
        assert!(matches!(deque.remove_last(), Err(QueueError::EmptyContainer)));
        assert!(matches!(deque.add_first(None::<i32>), Err(QueueError::NullArgument)));
        assert!(matches!(deque.add_last(None::<i32>), Err(QueueError::NullArgument)));
        assert!(deque.is_empty());
        assert_eq!(deque.iter().next(), None);
        check_links(&deque);
    }

    #[test]
    fn test_random_add_remove() -> Result<()> {
        const TEST_SIZE: i32 = 1000;

        let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
        let mut deque = Deque::new();
        let mut inserted = Vec::new();

        for _ in 0..TEST_SIZE {
            let value = rng.gen_range(-10_000..10_000);
            if rng.gen_bool(0.5) {
                deque.add_first(value)?;
            } else {
                deque.add_last(value)?;
            }
            inserted.push(value);
        }
        check_links(&deque);
        assert_eq!(deque.len(), TEST_SIZE as usize);

        let mut removed = Vec::new();
        while !deque.is_empty() {
            removed.push(if rng.gen_bool(0.5) {
                deque.remove_first()?
            } else {
                deque.remove_last()?
            });
            if removed.len() % 97 == 0 {
                check_links(&deque);
            }
        }
        check_links(&deque);

        inserted.sort_unstable();
        removed.sort_unstable();
        assert_eq!(inserted, removed);

        Ok(())
    }

    #[test]
    fn test_into_iter_and_drop() {
        let deque: Deque<String> = (0..5).map(|i| i.to_string()).collect();
        assert_eq!(format!("{:?}", deque), r#"["0", "1", "2", "3", "4"]"#);

        let mut iter = deque.into_iter();
        assert_eq!(iter.next().as_deref(), Some("0"));
        assert_eq!(iter.next_back().as_deref(), Some("4"));
        assert_eq!(iter.len(), 3);
        drop(iter);

        // long chains are freed without recursing
        let deque: Deque<u64> = (0..200_000).collect();
        assert_eq!(deque.len(), 200_000);
        drop(deque);
    }
}
