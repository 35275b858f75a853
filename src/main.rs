use anyhow::Result;
use log::{debug, info};
use std::io;

use fb_unwrap::cli_args::CommandLineArgs;
use fb_unwrap::common::ProcessingStats;
use fb_unwrap::program_mode::ProgramMode;
use fb_unwrap::session::{run_batch, run_loop};
use fb_unwrap::url_fetcher::UrlFetcher;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("fb-unwrap v{} starting up...", env!("CARGO_PKG_VERSION"));

    debug!("Parsing command line arguments...");
    let cli_args = CommandLineArgs::parse_args();
    let mode = ProgramMode::from_quiet_flag(cli_args.quiet);

    let fetcher = UrlFetcher::new(&cli_args)?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    if fetcher.urls.is_empty() {
        debug!("No links given on the command line, reading from stdin");
        let stats = run_loop(&mode, io::stdin().lock(), &mut out, &mut err)?;
        log_summary(&stats);
        return Ok(());
    }

    let stats = run_batch(&mode, &fetcher.urls, &mut out, &mut err)?;
    log_summary(&stats);

    if stats.failed > 0 {
        anyhow::bail!(
            "{} of {} link(s) could not be unwrapped",
            stats.failed,
            stats.total
        );
    }

    Ok(())
}

fn log_summary(stats: &ProcessingStats) {
    info!(
        "Processed {} link(s): {} successful, {} failed ({:.1}% success)",
        stats.total,
        stats.successful,
        stats.failed,
        stats.success_rate()
    );
}
