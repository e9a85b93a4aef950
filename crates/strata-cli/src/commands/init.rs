//! Repository bootstrap command

use clap::Args;
use strata_store::Repository;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Working directory to initialize
    #[arg(long, default_value = ".")]
    pub dir: String,
}

pub fn execute(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = Repository::init(&args.dir)?;

    println!("Initialized empty repository:");
    println!("  store: {}", repo.layout().root().display());

    Ok(())
}
