//! AgroHub CLI - command-line companion for the AgroHub community backend

use clap::Parser;

mod cli;
mod output;

use cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = cli::run(cli).await {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// `--debug` forces debug output; otherwise `RUST_LOG` applies with a warn default.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_module("agrohub", log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}
