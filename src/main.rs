mod config;
mod error;
mod listing;
mod loader;
mod normalize;
mod parser;
mod report;
mod vocab;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{error, info};

use crate::config::Settings;
use crate::report::ArticleRecord;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

#[derive(Parser)]
#[command(
    name = "nca_report",
    version,
    about = "Structured intelligence reports from archived NCA press releases"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a report from every .html article in INPUT and write OUTPUT/report.json
    Run {
        /// Folder of saved article pages
        input: PathBuf,
        /// Folder the report is written to (created if missing)
        output: PathBuf,
    },
    /// Print the article index of one saved listing page as JSON
    Listing {
        /// Saved listing page
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    let t0 = Instant::now();
    let settings = Settings::load()?;

    match cli.command {
        Commands::Run { input, output } => run(&input, &output, &settings)?,
        Commands::Listing { file } => run_listing(&file, &settings)?,
    }

    info!(elapsed_secs = t0.elapsed().as_secs_f64(), "Done");
    Ok(())
}

struct RunSummary {
    processed: usize,
    failed: usize,
}

impl RunSummary {
    fn log(&self, report_path: &Path) {
        info!(
            failed = self.failed,
            "Processed {} files. Output saved to {}",
            self.processed,
            report_path.display()
        );
    }
}

fn run(input: &Path, output: &Path, settings: &Settings) -> anyhow::Result<()> {
    let files = loader::list_html_files(input)?;
    info!("Processing {} HTML files from {}", files.len(), input.display());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")?
            .progress_chars("#>-"),
    );

    let results = process_files(&files, settings, &pb);
    pb.finish_and_clear();

    let summary = RunSummary {
        processed: results.iter().filter(|r| r.is_some()).count(),
        failed: results.iter().filter(|r| r.is_none()).count(),
    };
    let records: Vec<ArticleRecord> = results.into_iter().flatten().collect();

    let json = report::to_pretty_json(&records)?;
    let report_path = report::save_report(output, &settings.report_file_name, &json)?;
    summary.log(&report_path);

    println!("{}", json);
    Ok(())
}

/// Output order follows `files`; unreadable documents come back as `None`.
#[cfg(feature = "rayon")]
fn process_files(files: &[PathBuf], settings: &Settings, pb: &ProgressBar) -> Vec<Option<ArticleRecord>> {
    files
        .par_iter()
        .map(|path| process_file(path, settings, pb))
        .collect()
}

#[cfg(not(feature = "rayon"))]
fn process_files(files: &[PathBuf], settings: &Settings, pb: &ProgressBar) -> Vec<Option<ArticleRecord>> {
    files
        .iter()
        .map(|path| process_file(path, settings, pb))
        .collect()
}

fn process_file(path: &Path, settings: &Settings, pb: &ProgressBar) -> Option<ArticleRecord> {
    let result = loader::read_document(path).map(|doc| parser::process_document(&doc, settings));
    pb.inc(1);
    match result {
        Ok(record) => Some(record),
        Err(e) => {
            error!(file = %path.display(), error = %e, "Skipping document");
            None
        }
    }
}

fn run_listing(file: &Path, settings: &Settings) -> anyhow::Result<()> {
    let doc = loader::read_document(file)?;
    let page = listing::parse_listing(&doc.html, &settings.site_origin);
    info!(articles = page.articles.len(), "Parsed listing {}", doc.source);
    println!("{}", report::to_pretty_json(&page)?);
    Ok(())
}
