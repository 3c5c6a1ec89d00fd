pub mod aggregator;

pub use aggregator::{search, Aggregator};
