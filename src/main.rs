use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use featured_holes::config::{DEFAULT_CSV_PATH, DEFAULT_PHOTO_BASE};
use featured_holes::loader::{FileSource, HttpSource, Source};
use featured_holes::sample::FEATURED_COUNT;
use featured_holes::{HeadlessPage, LoadWarning, SiteOptions};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Html,
    Text,
    Json,
}

/// Render the featured signature holes and a golf quote from a course CSV.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// CSV file path or http(s) URL.
    #[arg(default_value = DEFAULT_CSV_PATH)]
    source: String,

    /// Write output to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,

    /// Directory prepended to every photo path.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PHOTO_BASE)]
    photo_base: String,

    /// Maximum number of featured holes.
    #[arg(short = 'n', long, default_value_t = FEATURED_COUNT)]
    count: usize,

    /// Leave out the quote block.
    #[arg(long)]
    no_quote: bool,

    /// Seed the random picks for a reproducible run.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,
}

fn init_logging() {
    // Diagnostics are opt-in; warnings below are always printed.
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}

fn print_warnings(warnings: &[LoadWarning]) {
    for w in warnings {
        let loc = w
            .location
            .as_deref()
            .map(|l| format!(" ({l})"))
            .unwrap_or_default();
        eprintln!("warning: [{:?}] {}{}", w.code, w.message, loc);
    }
}

fn is_url(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn run(cli: Cli) -> Result<ExitCode, ExitCode> {
    let options = SiteOptions {
        csv_path: cli.source.clone(),
        photo_base: cli.photo_base.clone(),
        featured_count: cli.count,
    };

    let source: Box<dyn Source> = if is_url(&cli.source) {
        Box::new(HttpSource::default())
    } else {
        Box::new(FileSource::default())
    };

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let page = if cli.no_quote {
        HeadlessPage::new().without_quote_elements()
    } else {
        HeadlessPage::new()
    };

    let (home, warnings) = featured_holes::build_home_page(source.as_ref(), page, rng, options);
    print_warnings(&warnings);
    info!(cards = home.cards().len(), source = %cli.source, "rendered home page");

    let page = home.into_page();
    let output = match cli.format {
        Format::Html => page.to_html(),
        Format::Text => page.to_text(),
        Format::Json => {
            let mut json = page.to_json().to_string();
            json.push('\n');
            json
        }
    };

    if let Some(ref out_path) = cli.output {
        std::fs::write(out_path, &output).map_err(|e| {
            eprintln!("error: {}: {e}", out_path.display());
            ExitCode::from(1)
        })?;
    } else {
        io::stdout().write_all(output.as_bytes()).map_err(|e| {
            eprintln!("error: stdout: {e}");
            ExitCode::from(1)
        })?;
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(code) => code,
    }
}
