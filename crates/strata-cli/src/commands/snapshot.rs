//! Snapshot commit command

use clap::Args;
use strata_store::Repository;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Working directory of the repository
    #[arg(long, default_value = ".")]
    pub dir: String,

    /// Emit the outcome as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let repo = Repository::open(&args.dir);
    let outcome = repo.snapshot()?;

    if args.json {
        println!("{}", outcome.to_json()?);
        return Ok(());
    }

    match outcome.commit_index {
        Some(index) => {
            println!("Snapshot committed:");
            println!("  commit_index: {}", index);
            println!("  changed: {}", outcome.changed_paths().len());
            for path in outcome.changed_paths() {
                println!("    {}", path);
            }
        }
        None => {
            println!("Nothing to commit");
        }
    }

    for path in outcome.missing_paths() {
        println!("  missing: {}", path);
    }

    Ok(())
}
