//! opl-rom-tools CLI
//!
//! Renames PS2 disc images after their Redump titles and copies matching
//! artwork for Open PS2 Loader.

mod cli_types;
mod error;
mod logging;
mod setup;

use std::path::Path;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use opl_rom_tools_core::naming::MAX_TITLE_LEN;
use opl_rom_tools_lib::{BatchProgress, BatchSummary, find_disc_images, load_settings, run_batch};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    if !cli.has_stage() {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("[!] {}", e);
            std::process::exit(1);
        }
        return;
    }

    if let Err(e) = logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("[!] {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let settings = load_settings()?;
    let config = setup::build_run_config(cli, &settings, &mut std::io::stdin().lock())?;
    let lookup = setup::lookup_client(&settings)?;

    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    log::info!(
        "Scanning disc images in: {}",
        dir.display().if_supports_color(Stderr, |t| t.cyan()),
    );
    let images = find_disc_images(&dir)?;

    if config.dry_run {
        log::info!(
            "{}",
            "Dry run: no files will be renamed or copied"
                .if_supports_color(Stderr, |t| t.dimmed()),
        );
    }
    if let Some(artwork) = &config.artwork {
        log::debug!(
            "Artwork: {} => {}",
            artwork.source().display(),
            artwork.destination().display()
        );
    }

    if images.is_empty() {
        log::warn!("No ISO files found in {}", dir.display());
        return Ok(());
    }

    // Spinner hidden when it would fight with the log output
    let pb = if cli.quiet || cli.verbose {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("  {spinner:.cyan} {msg}")
                .expect("static pattern")
                .tick_chars("/-\\|"),
        );
        pb
    };

    let progress_callback = |progress: BatchProgress| match progress {
        BatchProgress::Scanning { total } => {
            pb.set_message(format!("Found {total} disc images"));
            pb.tick();
        }
        BatchProgress::Processing {
            ref file_name,
            index,
            total,
        } => {
            pb.set_message(format!("[{}/{}] {}", index + 1, total, file_name));
            pb.tick();
        }
        BatchProgress::Done => {
            pb.finish_and_clear();
        }
    };

    let summary = run_batch(&images, &config, &lookup, &progress_callback);
    print_summary(&summary);

    Ok(())
}

fn print_summary(summary: &BatchSummary) {
    log::info!("");
    log::info!(
        "{} {} disc images processed",
        "Summary:".if_supports_color(Stderr, |t| t.bold()),
        summary.processed,
    );
    if summary.renamed > 0 {
        log::info!(
            "  {} {} files renamed",
            "\u{2714}".if_supports_color(Stderr, |t| t.green()),
            summary.renamed,
        );
    }
    if summary.planned > 0 {
        log::info!("  {} renames planned (dry run)", summary.planned);
    }
    if summary.already_correct > 0 {
        log::info!("  {} already named correctly", summary.already_correct);
    }
    if summary.artwork_copied > 0 {
        log::info!("  {} artwork files copied", summary.artwork_copied);
    }
    if summary.over_length > 0 {
        log::warn!(
            "  {} {} names longer than {} characters",
            "\u{26A0}".if_supports_color(Stderr, |t| t.yellow()),
            summary.over_length,
            MAX_TITLE_LEN,
        );
    }

    if summary.has_failures() {
        log::warn!(
            "  {} {} failures:",
            "\u{2718}".if_supports_color(Stderr, |t| t.bright_red()),
            summary.failures.len(),
        );
        for (path, err) in &summary.failures {
            log::warn!(
                "    {} [{}] {}",
                file_label(path).if_supports_color(Stderr, |t| t.bold()),
                err.kind(),
                err,
            );
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
