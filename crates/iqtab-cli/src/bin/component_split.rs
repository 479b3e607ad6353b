//! Merge paired I/Q component rows of a frequency-sweep CSV into one wide
//! row per frequency with `{pulse}_I`/`{pulse}_Q` columns.

use clap::Parser;

use iqtab_cli::cli::{ConvertArgs, parse_or_exit};
use iqtab_cli::logging::init_logging;
use iqtab_cli::pipeline::split_file;

#[derive(Parser)]
#[command(
    name = "component-split",
    version,
    about = "Split a long I/Q component CSV into one row per frequency"
)]
struct Cli {
    #[command(flatten)]
    args: ConvertArgs,
}

fn main() {
    let cli: Cli = parse_or_exit();
    init_logging(&cli.args.log_config());
    if let Err(error) = split_file(&cli.args.input, &cli.args.output) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
    println!("Saved: {}", cli.args.output.display());
}
