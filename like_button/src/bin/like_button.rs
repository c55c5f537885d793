// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use like_button::{CLIArg, init_tracing, run_session};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    // Keep the guard alive for the whole session (it is `None` for global scope).
    let _maybe_guard = match cli_arg.tracing_config() {
        Some(tracing_config) => init_tracing(tracing_config)?,
        None => None,
    };

    let report = run_session(&cli_arg).await?;
    println!("{}", report.state_json()?);

    Ok(())
}
