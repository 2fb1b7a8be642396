use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dumptree")]
#[command(about = "Dump structured values as readable console trees", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Dump a JSON or TOML document as a value tree
    Dump {
        /// Input file; reads stdin when omitted
        file: Option<PathBuf>,

        #[arg(long, default_value = "auto")]
        format: InputFormat,

        /// Maximum render depth; 0 means unlimited
        #[arg(long, default_value = "0")]
        depth: usize,

        /// Show short type names in block headers
        #[arg(long)]
        short_names: bool,

        /// Display label for the root value
        #[arg(long)]
        label: Option<String>,
    },

    /// Dump a built-in sample object (showcases the renderer)
    Demo {
        /// Maximum render depth; 0 means unlimited
        #[arg(long, default_value = "0")]
        depth: usize,

        #[arg(long)]
        short_names: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// Infer from the file extension, or try JSON then TOML for stdin
    Auto,
    Json,
    Toml,
}
