use clap::Args;
use serde_json::Value;

use grind_core::projection::{self, ProjectionInput};

use crate::input;

/// Arguments for an earnings projection
#[derive(Args)]
pub struct ProjectArgs {
    /// Amount earned per day, in currency units (e.g. 2.0)
    #[arg(long)]
    pub daily: Option<f64>,

    /// Number of days projected
    #[arg(long)]
    pub days: Option<u32>,

    /// Daily yield as a percentage (e.g. 1.0 for 1% per day; 0 = linear)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let input: ProjectionInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ProjectionInput {
            daily_amount: args.daily.ok_or("--daily is required (or provide --input)")?,
            days: args.days.unwrap_or(365),
            rate_percent: args.rate.unwrap_or(0.0),
        }
    };

    let output = projection::project_earnings(&input)?;
    Ok(serde_json::to_value(&output)?)
}
