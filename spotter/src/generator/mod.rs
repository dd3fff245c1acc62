pub mod traffic;

pub use traffic::{TrafficConfig, TrafficGenerator};
