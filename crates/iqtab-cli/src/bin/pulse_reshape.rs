//! Pivot long-format (Pulse, RangeBin, I, Q) measurement CSVs into one wide
//! row per range bin with interleaved `P{n}_I`/`P{n}_Q` columns.

use clap::Parser;

use iqtab_cli::cli::{ConvertArgs, parse_or_exit};
use iqtab_cli::logging::init_logging;
use iqtab_cli::pipeline::reshape_file;

#[derive(Parser)]
#[command(
    name = "pulse-reshape",
    version,
    about = "Reshape a long (Pulse, RangeBin, I, Q) CSV into one row per range bin"
)]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

fn main() {
    let cli: Cli = parse_or_exit();
    init_logging(&cli.args.log_config());
    if let Err(error) = reshape_file(&cli.args.input, &cli.args.output) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
    println!("Saved reshaped CSV to: {}", cli.args.output.display());
}
