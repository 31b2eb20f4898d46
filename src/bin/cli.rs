// src/bin/cli.rs
use emico_datasheet::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
