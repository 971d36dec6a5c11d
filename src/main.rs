use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::Path;

use bump_version::{arguments::Arguments, resolver};

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .format_timestamp(None)
        .init();

    let dir: &Path = args.path.as_ref();
    let bumped = resolver::run(&args.tokens, dir)?;
    println!("{}", bumped);
    Ok(())
}
