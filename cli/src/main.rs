mod args;
mod prompt;

use anyhow::{Context, Result};
use args::Cli;
use ascii_sampler::{RenderConfig, Sink, SourceImage, process_to_sinks};
use clap::Parser;
use log::{debug, info};
use prompt::Prompter;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Configure logging
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(parse_status(&err));
        }
    };

    let stdin = io::stdin();
    let result = run(&cli, stdin.lock(), io::stdout());
    if let Err(err) = &result {
        eprintln!("Error: {err:#}");
    }
    ExitCode::from(run_status(&result))
}

/// Process status for an argument error: --help and --version are not failures
fn parse_status(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

/// Process status for a finished run: every error is fatal with status 1
fn run_status(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

/// Decode, ask for whatever the command line left open, then render
///
/// The image is decoded before any prompt so a bad path fails immediately.
fn run<R: BufRead, W: Write>(cli: &Cli, input: R, mut console: W) -> Result<()> {
    debug!("{cli:?}");

    let mut config = RenderConfig {
        color: cli.color,
        ..Default::default()
    };
    if config.apply_file_policy(cli.output.is_some()) {
        writeln!(console, "Note: Colour output disabled when saving to a file.")?;
    }

    let source = SourceImage::open(&cli.image)?;
    info!(
        "loaded {} ({}x{})",
        cli.image.display(),
        source.width(),
        source.height()
    );

    let mut prompter = Prompter::new(input, &mut console);
    config.output_width = match cli.width {
        Some(width) => width,
        None => prompter
            .positive_int("Enter output width: ")
            .context("reading output width")?,
    };
    config.output_height = match cli.height {
        Some(height) => height,
        None => prompter
            .positive_int("Enter output height: ")
            .context("reading output height")?,
    };
    config.fix_aspect = match cli.aspect_choice() {
        Some(fix) => fix,
        None => prompter
            .yes_no("Fix aspect ratio for better proportions")
            .context("reading aspect ratio choice")?,
    };
    drop(prompter);

    let mut sinks = Vec::with_capacity(2);
    if !cli.quiet {
        sinks.push(Sink::console(&mut console, config.color));
    }
    if let Some(path) = &cli.output {
        sinks.push(Sink::file(path)?);
    }

    let grid = process_to_sinks(&source, &config, &mut sinks)?;
    drop(sinks);
    info!("rendered {}x{} glyphs", grid.width(), grid.height());

    if let Some(path) = &cli.output {
        writeln!(console, "ASCII art saved to: {}", path.display())?;
    }

    Ok(())
}
