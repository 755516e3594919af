pub mod blog;
pub mod zapasy;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::batch::{self, BatchSummary, Candidate};
use crate::config::PatchConfig;
use crate::output::{self, human};
use crate::patch::{AnchorPattern, Fragment};

#[derive(Parser)]
#[command(
    name = "fotogalerie",
    about = "Add the Fotogalerie entry to the navigation menu of pre-rendered pages",
    version,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Working directory the page directories are resolved against
    #[arg(short = 'C', long, global = true)]
    pub workdir: Option<String>,

    /// Exit with an error if any file could not be processed
    #[arg(long, global = true)]
    pub strict: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Patch the numbered blog pages (0014.html to 0030.html by default)
    Blog(blog::BlogArgs),

    /// Patch every page in the match reports directory
    Zapasy(zapasy::ZapasyArgs),
}

/// Load the config given on the command line or found in `root`.
pub(crate) fn load_config(explicit: Option<&str>, root: &Path) -> anyhow::Result<PatchConfig> {
    Ok(PatchConfig::discover(explicit.map(Path::new), root)?)
}

/// Run the inserter over `candidates`, printing one line per file and a summary.
pub(crate) fn run_batch<I>(candidates: I, strict: bool) -> anyhow::Result<BatchSummary>
where
    I: IntoIterator<Item = Candidate>,
{
    let pattern = AnchorPattern::kontakt()?;
    let fragment = Fragment::fotogalerie();

    let summary = batch::process(candidates, &pattern, &fragment, output::print_report);
    output::print_summary(&summary);

    if strict && summary.has_failures() {
        human::error("Some files could not be processed");
        anyhow::bail!(
            "{} file{} failed",
            summary.failed,
            if summary.failed == 1 { "" } else { "s" },
        );
    }

    Ok(summary)
}
