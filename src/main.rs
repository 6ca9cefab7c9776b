use clap::Parser;
use std::env;
use std::path::PathBuf;
use wip_scan::commands::execute_scan;
use wip_scan::core::print_error;

#[derive(Parser)]
#[command(name = "wip-scan")]
#[command(about = "Find unfinished work across your git repositories")]
#[command(version = "0.1.0")]
struct Cli {
    /// Directories to search for repositories. With none given, the
    /// WIP_SCAN_ROOTS environment variable, then the repository enclosing
    /// the current directory, then the home directory are tried in turn.
    roots: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = execute_scan(cli.roots) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
