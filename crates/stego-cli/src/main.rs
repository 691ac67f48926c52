use clap::Parser;
use stego_core::{CodecOptions, GroupWidth};

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stego_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = CodecOptions::default().with_group_width(GroupWidth::new(args.group_width)?);

    match args.command {
        Commands::Hide(args) => args.run(options),
        Commands::Unveil(args) => args.run(options),
        Commands::Capacity(args) => args.run(options),
    }
}
