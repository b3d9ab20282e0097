// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Blurwerk: box blur for raster images.
//
// Entry point. Initialises logging, parses arguments, runs the pipeline and
// maps any error to a human-readable report and exit code.

mod cli;
mod pipeline;

use std::ffi::OsString;
use std::process::ExitCode;

use blurwerk_core::error::Result;
use blurwerk_core::human_errors::humanize_error;

use cli::Command;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "blurwerk failed");
            let human = humanize_error(&err);
            eprintln!("{human}");
            ExitCode::from(human.exit_code())
        }
    }
}

fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut cli_args = match cli::parse_args(args)? {
        Command::Info(text) => {
            print!("{text}");
            return Ok(());
        }
        Command::Run(cli_args) => cli_args,
    };

    let write_config = cli_args.write_config.take();
    let config = cli_args.into_config()?;
    if let Some(path) = write_config {
        config.save(&path)?;
        tracing::info!(path = %path.display(), "Configuration written");
        return Ok(());
    }

    let summary = pipeline::process_image(&config)?;
    tracing::info!(
        width = summary.width,
        height = summary.height,
        mask = %summary.mask_size,
        output = %summary.output.display(),
        "Blurred image written"
    );
    Ok(())
}
