#[macro_use]
mod macros;

pub mod checked_iter;
pub mod error;
pub mod logger;

pub use checked_iter::*;
pub use error::*;

/// Whether a store of `capacity` slots holding `len` items is at most a
/// quarter full and above `floor`.
#[inline]
pub fn should_shrink(len: usize, capacity: usize, floor: usize) -> bool {
    capacity > floor && len <= capacity / 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        assert!(!should_shrink(0, 8, 8));
        assert!(should_shrink(4, 16, 8));
        assert!(!should_shrink(5, 16, 8));
        assert!(should_shrink(0, 32, 8));
    }
}
