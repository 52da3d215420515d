//! Sidebar CLI - Shortcode-addressable widget sidebars

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = sidebar_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
