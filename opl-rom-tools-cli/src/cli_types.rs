//! Command-line flags.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "opl-rom-tools", version, args_override_self = true)]
#[command(
    about = "Rename PS2 disc images and collect their artwork for Open PS2 Loader",
    long_about = None
)]
pub(crate) struct Cli {
    /// Look up each disc's title and rename the image to it
    #[arg(short, long)]
    pub rename: bool,

    /// Use the old naming scheme: SERIAL.Title.iso
    #[arg(short, long)]
    pub old_naming: bool,

    /// Keep only letters, digits, spaces and _-[]() in titles
    #[arg(short, long)]
    pub strict: bool,

    /// Cut titles to 32 characters instead of warning about them
    #[arg(short, long)]
    pub truncate: bool,

    /// Copy artwork files whose names start with each disc's serial
    #[arg(short, long)]
    pub copy_artwork: bool,

    /// Directory to copy artwork from (prompted for if not set)
    #[arg(long, value_name = "DIR")]
    pub artwork_src: Option<PathBuf>,

    /// Directory to copy artwork to (prompted for if not set)
    #[arg(long, value_name = "DIR")]
    pub artwork_dst: Option<PathBuf>,

    /// Directory containing the disc images (defaults to current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Show planned renames and copies without touching any file
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only show warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, value_name = "FILE")]
    pub logfile: Option<PathBuf>,
}

impl Cli {
    /// Whether at least one stage was requested.
    pub fn has_stage(&self) -> bool {
        self.rename || self.copy_artwork
    }
}
