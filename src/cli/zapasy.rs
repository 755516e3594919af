use clap::Args;

use crate::batch::discovery;
use crate::config;

#[derive(Args)]
pub struct ZapasyArgs {
    /// Directory holding the match report pages
    #[arg(long)]
    pub dir: Option<String>,

    /// File extension of the pages to patch
    #[arg(long)]
    pub ext: Option<String>,
}

pub fn run(args: &ZapasyArgs, config_path: Option<&str>, strict: bool) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = super::load_config(config_path, &cwd)?;

    let dir = config::resolve_dir(&cwd, args.dir.as_deref().unwrap_or(&config.zapasy.dir));
    let extension = args.ext.as_deref().unwrap_or(&config.zapasy.extension);

    tracing::info!("Patching *.{extension} in {}", dir.display());
    let candidates = discovery::extension_candidates(&dir, extension)?;
    tracing::debug!("Found {} candidate file(s)", candidates.len());
    super::run_batch(candidates, strict)?;
    Ok(())
}
