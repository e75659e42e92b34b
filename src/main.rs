use clap::Parser;
use dirindex::config::{AssetMode, GeneratorConfig};
use dirindex::mirror::Mirror;
use dirindex::{generate, output};
use log::{LevelFilter, error};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for a run that could not start (bad root directory).
const EXIT_FATAL: u8 = 1;

#[derive(Parser)]
#[command(name = "dirindex")]
#[command(version)]
#[command(about = "Generate static HTML index pages for a mirrored file tree")]
#[command(long_about = "\
Generate static HTML index pages for a mirrored file tree

Every directory under --root gets an index.html plus one <ext>.html per file
extension found in it. Pages link to the same directory on the other mirror.

  srv/
  ├── index.html            # all listable files and folders
  ├── iso.html              # only .iso files
  ├── style.css             # shared assets (omit with --inline-assets)
  ├── search.js
  └── private/
      └── EXCLUDE_FOLDER    # no pages here, hidden from srv/index.html

Logging goes to stderr; set RUST_LOG to override -v/-q.")]
struct Cli {
    /// Mirror to generate for (eu or na, case-insensitive)
    #[arg(value_name = "eu|na")]
    mirror: Mirror,

    /// Root of the tree to index
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Embed the stylesheet and search script in every page
    #[arg(long)]
    inline_assets: bool,

    /// Favicon URL linked from every page
    #[arg(long)]
    favicon: Option<String>,

    /// Log every page written
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Log warnings and errors only
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    let assets = if cli.inline_assets {
        AssetMode::Inline
    } else {
        AssetMode::External
    };
    let config = GeneratorConfig::new(cli.mirror)
        .with_assets(assets)
        .with_favicon(cli.favicon);

    match generate::run(&cli.root, &config) {
        Ok(report) => {
            output::print_report(&report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Fatal error: {err}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

/// Log to stderr at the level picked by `-v`/`-q`; `RUST_LOG` wins if set.
fn init_logging(cli: &Cli) {
    let level = if cli.verbose {
        LevelFilter::Debug
    } else if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
