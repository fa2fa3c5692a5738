//
//  docusign-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/04.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use docusign_client::cli::{Cli, Commands};
use docusign_client::{exit_codes, ApiError, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                exit_codes::USAGE
            } else {
                exit_codes::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize logging
    // A broken config file only disables debug here; `global.config()` reports it.
    let debug = cli.global.debug || Config::load().map(|c| c.debug).unwrap_or(false);
    init_logging(debug);

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e
                .chain()
                .find_map(|cause| cause.downcast_ref::<ApiError>())
                .map(exit_codes::for_api_error)
                .unwrap_or(exit_codes::ERROR);
            std::process::exit(code);
        }
    }
}

/// Initialize logging based on environment
///
/// `DS_LOG` takes an `EnvFilter` directive (e.g. `debug`,
/// `docusign_client=trace`). Without it, debug mode lowers the library's
/// level to `info`, where request and response dumps are logged.
fn init_logging(debug: bool) {
    let default = if debug { "warn,docusign_client=info" } else { "warn" };
    let filter = EnvFilter::try_from_env("DS_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Account(cmd) => cmd.run(&cli.global).await,
        Commands::Users(cmd) => cmd.run(&cli.global).await,
        Commands::Templates(cmd) => cmd.run(&cli.global).await,
        Commands::Plan(cmd) => cmd.run(&cli.global).await,
        Commands::Envelope(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(),
        Commands::Version => {
            println!("ds version {}", docusign_client::VERSION);
            Ok(())
        }
    }
}
