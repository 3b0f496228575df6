use super::error::{QueueError, Result};

/// Fail-fast stepping for the container iterators.
///
/// `Iterator::next` reports the end with `None`; `try_next` turns it into
/// [`QueueError::Exhausted`] for callers that treat running past the end
/// as a bug.
pub trait CheckedIterator: Iterator {
    fn has_next(&self) -> bool;

    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or(QueueError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl Iterator for Countdown {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            if self.0 == 0 {
                return None;
            }
            self.0 -= 1;
            Some(self.0)
        }
    }

    impl CheckedIterator for Countdown {
        fn has_next(&self) -> bool {
            self.0 > 0
        }
    }

    #[test]
    fn it_works() {
        let mut iter = Countdown(2);
        assert!(iter.has_next());
        assert_eq!(iter.try_next().unwrap(), 1);
        assert_eq!(iter.try_next().unwrap(), 0);
        assert!(!iter.has_next());
        assert!(matches!(iter.try_next(), Err(QueueError::Exhausted)));
    }
}
