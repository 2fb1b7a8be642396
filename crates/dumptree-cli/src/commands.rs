use super::args::{Cli, ColorMode, Commands};
use super::handlers;
use anyhow::Result;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let color = resolve_color(cli.color);

    match cli.command {
        Commands::Dump {
            file,
            format,
            depth,
            short_names,
            label,
        } => handlers::dump(file.as_deref(), format, depth, short_names, label.as_deref(), color),

        Commands::Demo { depth, short_names } => handlers::demo(depth, short_names, color),
    }
}

fn resolve_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}
