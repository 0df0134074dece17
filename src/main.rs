use anyhow::Result;

use sih_extract::config;
use sih_extract::extract::{TaskOutcome, run_task};
use sih_extract::fetch::SihFetcher;
use sih_extract::models::period::Period;
use sih_extract::models::procedures::ProcedureCodeSet;
use sih_extract::run::RunContext;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let ctx = RunContext::create()?;
    let codes = ProcedureCodeSet::parse(config::PROCEDURE_CODES_RAW);

    ctx.log("Starting SIH download with procedure filter.")?;
    ctx.log(&format!("Loaded {} procedure codes.", codes.len()))?;

    let periods = Period::chronological(config::PERIODS);
    let mut fetcher = SihFetcher::new_datasus();

    for period in periods {
        ctx.log(&format!("Processing period {period}."))?;

        for state in config::TASK_STATES {
            ctx.log(&format!(
                "Starting download of {period} for UF={}...",
                state.uf
            ))?;

            let outcome =
                run_task(&mut fetcher, state, period, &codes, &ctx.output_dir).await;

            match &outcome {
                TaskOutcome::Saved {
                    filename,
                    rows,
                    column,
                } => {
                    ctx.log(&format!("Using procedure column: {column}"))?;
                    ctx.log(&format!("Saved file: {filename} (records: {rows})"))?;
                }
                TaskOutcome::Empty { filename, column } => {
                    ctx.log(&format!("Using procedure column: {column}"))?;
                    ctx.log(&format!(
                        "No records matching the configured procedures in {period} UF={}.",
                        state.uf
                    ))?;
                    ctx.log(&format!("Saved empty file: {filename}"))?;
                }
                TaskOutcome::NoProcedureColumn { columns } => {
                    ctx.log(&format!(
                        "No procedure column found for {period} UF={}. Column names: {columns:?}...",
                        state.uf
                    ))?;
                }
                TaskOutcome::Failed { error } => {
                    ctx.log(&format!(
                        "Error downloading/processing {period} UF={}: {error}",
                        state.uf
                    ))?;
                }
            }
        }
    }

    fetcher.close().await;
    ctx.log("Run finished.")?;
    Ok(())
}
