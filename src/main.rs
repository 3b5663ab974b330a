mod commands;
mod config;
mod diagnostics;
mod error;
mod rules;
mod scanner;
mod store;
mod types;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Layout;
use crate::store::FsStore;

/// Takes no options: the pages directory and rewrite rules are fixed.
#[derive(Parser)]
#[command(
    name = "deepwiki-relink",
    version,
    about = "Re-root source links in exported DeepWiki pages under docs/deepwiki"
)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    init_logging();

    return match commands::relink(&Layout::at("."), &FsStore) {
        Ok(summary) => {
            commands::print_summary(&summary);
            ExitCode::SUCCESS
        },
        Err(e) => {
            diagnostics::print_error(&e);
            ExitCode::FAILURE
        },
    };
}

/// Log to stderr, `warn` and above unless `RUST_LOG` says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| return EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
