//! CSV output writing.
//!
//! Plain CSV with a header row and no index column. An empty filter result
//! still produces a file, so a processed-but-empty period can be told apart
//! from one that was never processed.

use std::path::Path;

use crate::errors::ExtractResult;
use crate::models::batch::RecordBatch;
use crate::models::period::Period;
use crate::models::states::StateInfo;

pub fn filtered_filename(state: &StateInfo, period: Period) -> String {
    format!(
        "SIH_{}_{}_procedimentos_filtrados.csv",
        state.uf,
        period.yyyymm()
    )
}

pub fn empty_filename(state: &StateInfo, period: Period) -> String {
    format!("SIH_{}_{}_filtered_empty.csv", state.uf, period.yyyymm())
}

/// Writes the filtered batch; returns the filename written.
pub fn write_filtered(
    filtered: &RecordBatch,
    state: &StateInfo,
    period: Period,
    dir: &Path,
) -> ExtractResult<String> {
    let filename = filtered_filename(state, period);
    write_csv(&dir.join(&filename), filtered.columns(), filtered.rows())?;
    Ok(filename)
}

/// Writes a header-only marker using the original batch's columns; returns
/// the filename written.
pub fn write_empty_marker(
    original: &RecordBatch,
    state: &StateInfo,
    period: Period,
    dir: &Path,
) -> ExtractResult<String> {
    let filename = empty_filename(state, period);
    write_csv(&dir.join(&filename), original.columns(), &[])?;
    Ok(filename)
}

fn write_csv(path: &Path, columns: &[String], rows: &[Vec<String>]) -> ExtractResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
