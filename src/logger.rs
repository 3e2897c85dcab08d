use chrono::Local;
use colored::*;
use env_logger::{Builder, Env};
use log::{debug, SetLoggerError};
use std::{env as stdenv, io::Write, path::Path};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn program_name() -> String {
    Path::new(&stdenv::args().next().unwrap_or_default())
        .file_name()
        .unwrap_or_default()
        .to_str()
        .unwrap_or_default()
        .to_owned()
}

/// Colored `env_logger` output filtered by `RUST_LOG` (default `info`).
///
/// With `RUST_LOG=trace` the program/version/timestamp prefix is dropped and
/// only `file:line LEVEL: message` is printed.
pub fn setup_logger() -> Result<(), SetLoggerError> {
    let terse = matches!(stdenv::var("RUST_LOG"), Ok(val) if val.to_lowercase() == "trace");
    let prefix = format!("{}_{}", program_name(), VERSION);

    Builder::from_env(Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = match record.level() {
                log::Level::Error => format!("{}", record.level()).red(),
                log::Level::Warn => format!(" {}", record.level()).yellow(),
                log::Level::Info => format!(" {}", record.level()).green(),
                log::Level::Debug => format!("{}", record.level()).blue(),
                log::Level::Trace => format!("{}", record.level()).purple(),
            };
            let file = record.file().unwrap_or("unknown");
            let line = record.line().unwrap_or(0);

            if terse {
                writeln!(buf, "{}:{} {}: {}", file, line, level, record.args())
            } else {
                writeln!(
                    buf,
                    "{}:{} [{} {}]{}: {}",
                    file,
                    line,
                    prefix.dimmed(),
                    Local::now().format("%Y%m%d %H:%M:%S").to_string().purple(),
                    level,
                    record.args()
                )
            }
        })
        .try_init()?;
    debug!("Logger initialized");
    Ok(())
}
