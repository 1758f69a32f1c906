//! The `nodes` command: nearest tessellation nodes and their weights.

use clap::Args;
use lithoquery::report::NodeReport;

use super::common::{LocationArgs, ModelArgs};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for `lithoquery nodes`.
#[derive(Debug, Clone, Args)]
pub struct NodesArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// Print the three nearest nodes with distances and barycentric weights.
pub fn run(args: NodesArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("nodes");

    let point = args.location.point()?;
    let level = runner.level(&args.model)?;
    let engine = runner.engine(&args.model);

    let hood = engine.locate(&point, level)?;
    print!(
        "{}",
        NodeReport {
            nearest: &hood.nearest,
            weights: &hood.weights,
        }
    );

    if !hood.weights.is_inside() {
        println!();
        println!("Note: {} lies outside the triangle; weights extrapolate.", point);
    }

    Ok(())
}
