pub mod commands;
pub mod export;
pub mod generate;
pub mod paths;
pub mod sources;
pub mod validate;

pub use commands::{Cli, Commands};
