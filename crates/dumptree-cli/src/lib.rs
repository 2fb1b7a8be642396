mod args;
mod commands;
mod handlers;
mod input;

pub use args::{Cli, ColorMode, Commands, InputFormat};
pub use commands::run;
