// src/bin/cli.rs
use dm_screen::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init_stderr();
    cli::run()
}
