//! The fibcalc CLI tool

use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use std::io::{self, Write};

/// Highest index the driver prints; `fib(10) = 55` is the last line.
const LAST_INDEX: i32 = 10;

#[derive(Parser)]
#[command(name = "fibcalc", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> Result<(), io::Error> {
    let args = Cli::parse();

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stdout)
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    write_sequence(&mut io::stdout().lock(), LAST_INDEX)
}

/// Writes one `fib(<i>) = <value>` line per index in `0..=last`.
fn write_sequence(out: &mut impl Write, last: i32) -> Result<(), io::Error> {
    for (i, value) in fibcalc::sequence(last) {
        writeln!(out, "fib({i}) = {value}")?;
    }
    Ok(())
}
