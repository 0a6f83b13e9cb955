//! Pool implementations.

mod circular_queue;

pub use circular_queue::CircularQueuePool;
