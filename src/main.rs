// drawerctl - Cash Drawer Trigger Utility
mod cli;
mod core;
mod domain;
mod infrastructure;

use clap::Parser;
use cli::args::Args;
use cli::commands::execute_command;

fn main() {
    let args = Args::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
