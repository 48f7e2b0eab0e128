// src/cli/mod.rs
pub mod args;
pub mod handlers;

pub use args::{Cli, Commands, SampleArgs};
pub use handlers::{handle_compare, handle_network, handle_pairs, handle_top};
