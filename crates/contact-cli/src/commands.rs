use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use contact_cli::config::RunConfig;
use contact_cli::pipeline::{RunOptions, RunOutput, run_pipeline};
use contact_model::AccuracyLabel;

use crate::cli::RunArgs;
use crate::summary::apply_table_style;

pub fn run_levels() {
    let mut table = Table::new();
    table.set_header(vec!["Level", "Accuracy"]);
    apply_table_style(&mut table);
    for label in AccuracyLabel::ALL {
        table.add_row(vec![label.level().to_string(), label.to_string()]);
    }
    println!("{table}");
}

pub fn run_contacts(args: &RunArgs) -> Result<(RunConfig, RunOutput)> {
    let config = RunConfig {
        input: args.input.clone(),
        output_dir: args.output_dir.clone(),
        matches_file: args.matches_file.clone(),
        duplicates_file: args.duplicates_file.clone(),
        dry_run: args.dry_run,
    };
    let run_span = info_span!("run", input = %config.input.display());
    let _run_guard = run_span.enter();

    let start = Instant::now();
    info!("start processing");
    let output = run_pipeline(
        &config.source(),
        &config.sink(),
        RunOptions {
            dry_run: config.dry_run,
        },
    )
    .with_context(|| format!("process {}", config.input.display()))?;
    info!(duration_ms = start.elapsed().as_millis(), "finish processing");

    Ok((config, output))
}
