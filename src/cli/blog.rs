use clap::Args;

use crate::batch::discovery;
use crate::config;

#[derive(Args)]
pub struct BlogArgs {
    /// Directory holding the numbered pages
    #[arg(long)]
    pub dir: Option<String>,

    /// First page number (inclusive)
    #[arg(long)]
    pub first: Option<u32>,

    /// Last page number (inclusive)
    #[arg(long)]
    pub last: Option<u32>,
}

pub fn run(args: &BlogArgs, config_path: Option<&str>, strict: bool) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let config = super::load_config(config_path, &cwd)?;

    let dir = args.dir.as_deref().unwrap_or(&config.blog.dir);
    let first = args.first.unwrap_or(config.blog.first);
    let last = args.last.unwrap_or(config.blog.last);
    let dir = config::resolve_dir(&cwd, dir);

    tracing::info!("Patching {}/{first:04}.html to {last:04}.html", dir.display());
    let candidates = discovery::sequence_candidates(&dir, first, last);
    super::run_batch(candidates, strict)?;
    Ok(())
}
