use clap::Parser;

use sloc_scan::cli::Cli;
use sloc_scan::commands;

fn main() {
    let cli = Cli::parse();
    std::process::exit(commands::run(&cli));
}
