pub mod cli;

pub use cli::CheckerConfig;
