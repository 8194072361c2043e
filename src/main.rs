//! CLI entry point for themeshift.

mod app;
mod cli;

use clap::Parser;

#[tokio::main]
async fn main() {
    themeshift::logging::init_logging();
    let args = cli::Args::parse();
    let code = app::entry::run(args).await;
    std::process::exit(code);
}
