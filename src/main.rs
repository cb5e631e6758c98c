use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;

use blockedit::cli::{self, CliArgs};
use blockedit::config::Config;
use blockedit::storage;

fn main() -> Result<()> {
    let args = CliArgs::parse();

    let (config, fallback) = match &args.config {
        Some(path) => (Config::load_from(path)?, None),
        None => Config::load(),
    };
    blockedit::logging::init(&config);
    if let Some(e) = fallback {
        blockedit::logging::warn_config_fallback(&e);
    }

    let mut buffer = if args.file == Path::new("-") {
        storage::load_buffer_from_reader(io::stdin().lock(), &args.file)?
    } else {
        storage::load_buffer(&args.file)?
    };

    let line_numbers = args.line_numbers || config.show_line_numbers;
    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    cli::run(&mut buffer, args.command, line_numbers, &mut out, &mut err)
}
