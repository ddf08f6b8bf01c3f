use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = lsbframe_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.frame_options();
    log::debug!("using {:?}", options);

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::UnveilRaw(unveil_raw) => unveil_raw.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
    }
}
