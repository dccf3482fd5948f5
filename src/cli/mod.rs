pub mod app;
pub mod commands;
pub mod render;

pub use app::{Cli, Commands};
pub use render::OutputFormat;
