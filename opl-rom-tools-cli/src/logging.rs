//! Logger setup: severity markers on stderr, optionally mirrored to a file.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use crate::error::CliError;

/// Dependencies that are too chatty at debug level.
const NOISY_MODULES: &[&str] = &[
    "reqwest",
    "hyper",
    "hyper_util",
    "rustls",
    "html5ever",
    "selectors",
];

/// Marker printed in front of every message.
pub(crate) fn marker(level: Level) -> &'static str {
    match level {
        Level::Error => "[!]",
        Level::Warn => "[*]",
        Level::Info => "[+]",
        Level::Debug | Level::Trace => "[-]",
    }
}

/// Level used when `RUST_LOG` is not set.
pub(crate) fn default_level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger.
pub(crate) fn init(verbose: bool, quiet: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level(verbose, quiet));
    if verbose {
        for module in NOISY_MODULES {
            builder.filter_module(module, LevelFilter::Info);
        }
    }
    builder.parse_default_env();

    builder.format(move |buf, record| {
        let level = record.level();
        let tag = marker(level);
        let tag = match level {
            Level::Error => format!("{}", tag.if_supports_color(Stderr, |t| t.bright_red())),
            Level::Warn => format!("{}", tag.if_supports_color(Stderr, |t| t.yellow())),
            Level::Info => format!("{}", tag.if_supports_color(Stderr, |t| t.green())),
            Level::Debug | Level::Trace => {
                format!("{}", tag.if_supports_color(Stderr, |t| t.dimmed()))
            }
        };

        if verbose {
            let ts = buf.timestamp_millis();
            writeln!(buf, "{} {} {}", ts, tag, record.args())
        } else {
            writeln!(buf, "{} {}", tag, record.args())
        }
    });

    if let Some(path) = logfile {
        let file = File::create(path).map_err(|source| CliError::Logfile {
            path: path.to_path_buf(),
            source,
        })?;
        builder.target(env_logger::Target::Pipe(Box::new(TeeWriter { file })));
    }

    builder.try_init()?;
    Ok(())
}

/// Writes to stderr unchanged and to a file with ANSI escapes removed.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

#[cfg(test)]
#[path = "tests/logging_tests.rs"]
mod tests;
