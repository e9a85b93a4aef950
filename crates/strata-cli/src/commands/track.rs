//! Staging command

use clap::Args;
use strata_store::Repository;

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Paths to register, relative to the working directory
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Working directory of the repository
    #[arg(long, default_value = ".")]
    pub dir: String,
}

pub fn execute(args: TrackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = Repository::open(&args.dir);
    repo.track(&args.paths)?;

    println!("Tracked {} path(s)", args.paths.len());

    Ok(())
}
