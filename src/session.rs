use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::io::{BufRead, Write};

use crate::common::constants::{ERROR_QUERY_PREFIX, ERROR_URL_PREFIX};
use crate::common::ProcessingStats;
use crate::error::QueryStringParsingError;
use crate::program_mode::ProgramMode;
use crate::url_utils::decrypt_url;

/// Reads one link per line from `input` until end of input, writing each
/// cleaned URL to `out` and each failure to `err`.
///
/// Blank lines are skipped. A link that fails to parse is reported and the
/// loop moves on to the next line.
pub fn run_loop<R, W, E>(
    mode: &ProgramMode,
    mut input: R,
    out: &mut W,
    err: &mut E,
) -> Result<ProcessingStats>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut stats = ProcessingStats::default();
    let mut line = String::new();

    loop {
        write!(out, "{}", mode.prompt)?;
        out.flush()?;

        line.clear();
        let read = input
            .read_line(&mut line)
            .context("Failed to read link from input")?;
        if read == 0 {
            debug!("End of input reached");
            break;
        }

        let raw_url = line.trim();
        if raw_url.is_empty() {
            continue;
        }

        let ok = process_url(mode, raw_url, out, err)?;
        stats.record(ok);
    }

    Ok(stats)
}

/// Runs every link in `urls` through the unwrapper without prompting.
pub fn run_batch<W, E>(
    mode: &ProgramMode,
    urls: &[String],
    out: &mut W,
    err: &mut E,
) -> Result<ProcessingStats>
where
    W: Write,
    E: Write,
{
    let mut stats = ProcessingStats::default();
    info!("Starting to unwrap {} link(s)...", urls.len());

    for (i, raw_url) in urls.iter().enumerate() {
        debug!("Processing link {}/{}: {}", i + 1, urls.len(), raw_url);
        let ok = process_url(mode, raw_url, out, err)?;
        stats.record(ok);
    }

    if stats.failed > 0 {
        warn!(
            "Unwrapping completed with {} failed link(s) out of {}",
            stats.failed, stats.total
        );
    } else {
        info!("All {} link(s) unwrapped successfully!", stats.total);
    }

    Ok(stats)
}

/// Returns whether `raw_url` was unwrapped. Only write failures are errors.
pub fn process_url<W, E>(mode: &ProgramMode, raw_url: &str, out: &mut W, err: &mut E) -> Result<bool>
where
    W: Write,
    E: Write,
{
    match decrypt_url(raw_url) {
        Ok(cleaned) => {
            writeln!(out, "{}", mode.format(&cleaned)).context("Failed to write result")?;
            Ok(true)
        }
        Err(e) => {
            debug!("{}", e);
            writeln!(err, "{}", mode.format(&error_report(&e))).context("Failed to write error")?;
            Ok(false)
        }
    }
}

pub fn error_report(e: &QueryStringParsingError) -> String {
    format!(
        "{} '{}'\n{} '{}'",
        ERROR_URL_PREFIX,
        e.url(),
        ERROR_QUERY_PREFIX,
        e.url_query()
    )
}
