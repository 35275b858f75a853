use anyhow::{Context, Result};
use csv::ReaderBuilder;
use log::{debug, error};
use std::path::Path;

use crate::cli_args::CommandLineArgs;

/// Wrapped links gathered from `--urls` and `--src-files`.
pub struct UrlFetcher {
    pub urls: Vec<String>,
}

impl UrlFetcher {
    pub fn new(cli_args: &CommandLineArgs) -> Result<Self> {
        let mut fetcher = UrlFetcher { urls: Vec::new() };
        fetcher.collect_urls(cli_args)?;
        Ok(fetcher)
    }

    fn collect_urls(&mut self, cli_args: &CommandLineArgs) -> Result<()> {
        self.urls.extend(
            cli_args
                .urls
                .iter()
                .map(|u| u.trim())
                .filter(|u| !u.is_empty())
                .map(str::to_string),
        );

        for file_path in &cli_args.src_files {
            self.urls.extend(urls_from_file(file_path)?);
        }

        debug!("Collected {} link(s) from arguments", self.urls.len());
        Ok(())
    }
}

/// Reads links from a file of comma-separated fields, any number per line.
/// A missing file is logged and yields no links.
pub fn urls_from_file(file_path: &str) -> Result<Vec<String>> {
    let path = Path::new(file_path);
    if !path.exists() {
        error!("File '{}' not found. Skipping...", file_path);
        return Ok(Vec::new());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open link file: {}", file_path))?;
    let mut result = Vec::new();

    for record in reader.records() {
        let record = record.with_context(|| format!("Failed to read link file: {}", file_path))?;
        for field in record.iter() {
            let candidate = field.trim();
            if !candidate.is_empty() {
                result.push(candidate.to_string());
            }
        }
    }

    Ok(result)
}
