use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use docgen::app::generate::Generator;
use docgen::infra::config::Config;

/// Render the bilingual Markdown documents into offline HTML pages.
#[derive(Debug, Parser)]
#[command(author, version, about = "Offline documentation generator", long_about = None)]
struct Cli {
    /// Project root containing the docs and resources directories.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Configuration file (defaults to <root>/docgen.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    docgen::init(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::load(&cli.root, cli.config.as_deref())?;
    Generator::new(cli.root.clone(), config).run()
}
