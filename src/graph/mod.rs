// src/graph/mod.rs
pub mod builder;
pub mod compare;
pub mod network;
pub mod queries;
pub mod rank;
pub mod stats;

pub use compare::{Comparison, InfluentialNetwork};
pub use network::CoauthorGraph;
