//! The `query` command: profile or point query at a location.

use clap::Args;
use lithoquery::interpolate::ProfileFilter;
use lithoquery::query::{Query, QueryMode, QueryOutcome};

use super::common::{LocationArgs, ModelArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `lithoquery query`.
#[derive(Debug, Clone, Args)]
pub struct QueryArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Depth in kilometres. Switches to point mode.
    #[arg(long)]
    pub depth: Option<f64>,

    /// Emit only the lithosphere and above (profile mode)
    #[arg(long, conflicts_with = "depth")]
    pub shallow: bool,

    #[command(flatten)]
    pub model: ModelArgs,
}

impl QueryArgs {
    /// Build the query, filling unset flags from the config.
    pub fn to_query(&self, runner: &CliRunner) -> Result<Query, CliError> {
        let point = self.location.point()?;
        let level = runner.level(&self.model)?;

        let mode = match self.depth {
            Some(depth_km) if !depth_km.is_finite() => {
                return Err(CliError::InvalidInput(format!(
                    "Invalid depth: {} (must be a finite number of kilometres)",
                    depth_km
                )));
            }
            Some(depth_km) => QueryMode::Point { depth_km },
            None => QueryMode::Profile(ProfileFilter::from_shallow_flag(
                self.shallow || runner.config().query.shallow,
            )),
        };

        Ok(Query { point, level, mode })
    }
}

/// Run the query command.
pub fn run(args: QueryArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("query");

    let query = args.to_query(&runner)?;
    let engine = runner.engine(&args.model);

    match engine.run(&query)? {
        QueryOutcome::Profile(layers) => {
            for layer in &layers {
                println!("{}", layer);
            }
        }
        QueryOutcome::Point(samples) => {
            for sample in &samples {
                println!("{}", sample);
            }
        }
    }

    Ok(())
}
