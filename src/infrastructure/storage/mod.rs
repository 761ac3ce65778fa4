//! In-memory storage

mod memory;

pub use memory::{order_asc, order_desc, Comparator, MemorySource};
