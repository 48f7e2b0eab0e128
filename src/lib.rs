// src/lib.rs
//! Co-authorship network analysis over sampled arXiv article snapshots.
//!
//! The pipeline: an [`source::ArticleSource`] supplies a fixed-size sample of
//! [`article::Article`] records for one [`category::Category`]; the sample is
//! folded into an immutable [`graph::CoauthorGraph`]; ranking, comparison and
//! collaboration statistics read that graph without mutating it.

pub mod article;
pub mod category;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod reporting;
pub mod source;

pub use crate::article::Article;
pub use crate::category::Category;
pub use crate::error::{CoauthorError, Result};
pub use crate::graph::CoauthorGraph;
