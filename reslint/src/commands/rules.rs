use crate::args::Args;
use crate::config;
use crate::error::Result;
use crate::linter::{self, RunMode};

/// Print the name of every check active in the current run mode, one per
/// line.
pub async fn rules(args: &Args, mode: RunMode) -> Result<()> {
    let config = config::from_path(args.config_path()).await?;

    for rule in linter::path_rules(&config, mode) {
        println!("{}", rule.name());
    }

    for rule in linter::line_rules() {
        println!("{}", rule.name());
    }

    Ok(())
}
