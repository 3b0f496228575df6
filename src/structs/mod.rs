pub mod deque;
pub mod randomized_queue;

pub use deque::Deque;
pub use randomized_queue::RandomizedQueue;
