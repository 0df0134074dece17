//! Column resolution, procedure filtering and the per-task runner.

pub mod output;

use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::errors::{ExtractError, ExtractResult};
use crate::fetch::PeriodSource;
use crate::models::batch::RecordBatch;
use crate::models::period::Period;
use crate::models::procedures::ProcedureCodeSet;
use crate::models::states::StateInfo;

/// Exact aliases tried first, in priority order: the performed procedure,
/// then the requested one. A case-insensitive `PROC` substring search is
/// the last resort.
pub const PROCEDURE_COLUMN_ALIASES: &[&str] = &["PROC_REA", "PROC_SOLIC"];

/// How many column names to report when no procedure column is found.
const REPORTED_COLUMN_LIMIT: usize = 10;

/// Finds the procedure column among provider-defined names, returning its
/// original casing. Deterministic for the exact aliases regardless of
/// column order; the substring fallback keeps the first match in provider
/// order.
pub fn resolve_procedure_column(columns: &[String]) -> Option<String> {
    let by_upper: HashMap<String, &String> =
        columns.iter().map(|c| (c.to_uppercase(), c)).collect();

    for alias in PROCEDURE_COLUMN_ALIASES {
        if let Some(original) = by_upper.get(*alias) {
            return Some((*original).clone());
        }
    }

    columns
        .iter()
        .find(|c| c.to_uppercase().contains("PROC"))
        .cloned()
}

/// Retains rows whose trimmed value in `column` is in the code set. The
/// trimmed value replaces the original in the retained row, so downstream
/// CSV output holds the normalized form. Row order follows the source
/// batch; filtering an already-filtered batch is a no-op.
pub fn filter_by_procedure(
    batch: &RecordBatch,
    column: &str,
    codes: &ProcedureCodeSet,
) -> ExtractResult<RecordBatch> {
    let index = batch
        .column_index(column)
        .ok_or_else(|| ExtractError::ColumnNotFound(column.to_string()))?;

    let rows = batch
        .rows()
        .iter()
        .filter_map(|row| {
            let trimmed = row.get(index)?.trim();
            if codes.contains(trimmed) {
                let mut row = row.clone();
                row[index] = trimmed.to_string();
                Some(row)
            } else {
                None
            }
        })
        .collect();

    Ok(RecordBatch::new(batch.columns().to_vec(), rows))
}

/// Result of one (state, period) task. The runner never aborts the run:
/// every task ends in exactly one of these, and the caller decides what to
/// log before moving on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TaskOutcome {
    /// Filtered records written.
    Saved {
        filename: String,
        rows: usize,
        column: String,
    },
    /// No row matched; header-only marker file written.
    Empty { filename: String, column: String },
    /// No recognizable procedure column; nothing written. Carries the
    /// first observed column names for the diagnostic.
    NoProcedureColumn { columns: Vec<String> },
    /// Fetch or processing failed.
    Failed { error: String },
}

/// Runs one task to completion: fetch, resolve column, filter, write.
pub async fn run_task(
    source: &mut dyn PeriodSource,
    state: &StateInfo,
    period: Period,
    codes: &ProcedureCodeSet,
    output_dir: &Path,
) -> TaskOutcome {
    let batch = match source.fetch(state, period).await {
        Ok(batch) => batch,
        Err(e) => {
            return TaskOutcome::Failed {
                error: e.to_string(),
            };
        }
    };

    let column = match resolve_procedure_column(batch.columns()) {
        Some(column) => column,
        None => {
            return TaskOutcome::NoProcedureColumn {
                columns: batch
                    .columns()
                    .iter()
                    .take(REPORTED_COLUMN_LIMIT)
                    .cloned()
                    .collect(),
            };
        }
    };

    let filtered = match filter_by_procedure(&batch, &column, codes) {
        Ok(filtered) => filtered,
        Err(e) => {
            return TaskOutcome::Failed {
                error: e.to_string(),
            };
        }
    };

    let written = if filtered.is_empty() {
        output::write_empty_marker(&batch, state, period, output_dir)
    } else {
        output::write_filtered(&filtered, state, period, output_dir)
    };

    match written {
        Ok(filename) if filtered.is_empty() => TaskOutcome::Empty { filename, column },
        Ok(filename) => TaskOutcome::Saved {
            filename,
            rows: filtered.len(),
            column,
        },
        Err(e) => TaskOutcome::Failed {
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::models::states::STATES;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn state(uf: &str) -> &'static StateInfo {
        STATES.iter().find(|s| s.uf == uf).unwrap()
    }

    fn period() -> Period {
        Period {
            year: 2025,
            month: 4,
        }
    }

    fn sample_batch() -> RecordBatch {
        RecordBatch::new(
            cols(&["PROC_REA", "MUNIC_RES"]),
            vec![
                vec!["0211060011".to_string(), "355030".to_string()],
                vec![" 0211060020 ".to_string(), "330455".to_string()],
                vec!["9999999999".to_string(), "410690".to_string()],
            ],
        )
    }

    #[test]
    fn test_resolve_prefers_proc_rea() {
        assert_eq!(
            resolve_procedure_column(&cols(&["proc_rea", "outro"])),
            Some("proc_rea".to_string())
        );
        // PROC_REA wins even when PROC_SOLIC comes first
        assert_eq!(
            resolve_procedure_column(&cols(&["PROC_SOLIC", "PROC_REA"])),
            Some("PROC_REA".to_string())
        );
    }

    #[test]
    fn test_resolve_falls_back_to_proc_solic() {
        assert_eq!(
            resolve_procedure_column(&cols(&["PROC_SOLIC", "x"])),
            Some("PROC_SOLIC".to_string())
        );
    }

    #[test]
    fn test_resolve_substring_fallback_keeps_first_match() {
        assert_eq!(
            resolve_procedure_column(&cols(&["PROCEDIMENTO_X"])),
            Some("PROCEDIMENTO_X".to_string())
        );
        assert_eq!(
            resolve_procedure_column(&cols(&["A", "procedimento_a", "PROCEDIMENTO_B"])),
            Some("procedimento_a".to_string())
        );
    }

    #[test]
    fn test_resolve_absent() {
        assert_eq!(resolve_procedure_column(&cols(&["A", "B"])), None);
        assert_eq!(resolve_procedure_column(&[]), None);
    }

    #[test]
    fn test_filter_trims_and_matches_exactly() {
        let codes = ProcedureCodeSet::parse("0211060011|0211060020");
        let filtered = filter_by_procedure(&sample_batch(), "PROC_REA", &codes).unwrap();

        assert_eq!(filtered.len(), 2);
        // source order preserved
        assert_eq!(filtered.rows()[0][1], "355030");
        assert_eq!(filtered.rows()[1][1], "330455");
        // the trimmed value is what the retained row carries
        assert_eq!(filtered.rows()[1][0], "0211060020");
    }

    #[test]
    fn test_filter_persists_trimmed_values_to_csv() {
        let dir = tempfile::tempdir().unwrap();
        let codes = ProcedureCodeSet::parse("0211060020");
        let filtered = filter_by_procedure(&sample_batch(), "PROC_REA", &codes).unwrap();

        let filename =
            output::write_filtered(&filtered, state("sp"), period(), dir.path()).unwrap();
        let contents = std::fs::read_to_string(dir.path().join(filename)).unwrap();
        assert!(contents.contains("0211060020,330455"));
        assert!(!contents.contains(" 0211060020 "));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let codes = ProcedureCodeSet::parse("0211060011|0211060020");
        let once = filter_by_procedure(&sample_batch(), "PROC_REA", &codes).unwrap();
        let twice = filter_by_procedure(&once, "PROC_REA", &codes).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_unknown_column() {
        let codes = ProcedureCodeSet::parse("0211060011");
        let err = filter_by_procedure(&sample_batch(), "NOPE", &codes).unwrap_err();
        assert!(matches!(err, ExtractError::ColumnNotFound(_)));
    }

    /// Scripted source: fails for one state, returns a fixed batch for the
    /// rest.
    struct ScriptedSource {
        fail_for: &'static str,
        batch: RecordBatch,
    }

    #[async_trait]
    impl PeriodSource for ScriptedSource {
        async fn fetch(
            &mut self,
            state: &StateInfo,
            _period: Period,
        ) -> ExtractResult<RecordBatch> {
            if state.uf == self.fail_for {
                Err(ExtractError::Dbc("connection reset".to_string()))
            } else {
                Ok(self.batch.clone())
            }
        }
    }

    #[tokio::test]
    async fn test_run_task_saved() {
        let dir = tempfile::tempdir().unwrap();
        let codes = ProcedureCodeSet::parse("0211060011|0211060020");
        let mut source = ScriptedSource {
            fail_for: "xx",
            batch: sample_batch(),
        };

        let outcome = run_task(&mut source, state("rj"), period(), &codes, dir.path()).await;
        assert_eq!(
            outcome,
            TaskOutcome::Saved {
                filename: "SIH_rj_202504_procedimentos_filtrados.csv".to_string(),
                rows: 2,
                column: "PROC_REA".to_string(),
            }
        );
        assert!(
            dir.path()
                .join("SIH_rj_202504_procedimentos_filtrados.csv")
                .exists()
        );
    }

    #[tokio::test]
    async fn test_run_task_empty_marker() {
        let dir = tempfile::tempdir().unwrap();
        let codes = ProcedureCodeSet::parse("0405050402");
        let mut source = ScriptedSource {
            fail_for: "xx",
            batch: sample_batch(),
        };

        let outcome = run_task(&mut source, state("sp"), period(), &codes, dir.path()).await;
        assert_eq!(
            outcome,
            TaskOutcome::Empty {
                filename: "SIH_sp_202504_filtered_empty.csv".to_string(),
                column: "PROC_REA".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_run_task_no_procedure_column_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let codes = ProcedureCodeSet::parse("0211060011");
        let mut source = ScriptedSource {
            fail_for: "xx",
            batch: RecordBatch::new(
                cols(&["A", "B"]),
                vec![vec!["1".to_string(), "2".to_string()]],
            ),
        };

        let outcome = run_task(&mut source, state("ba"), period(), &codes, dir.path()).await;
        assert_eq!(
            outcome,
            TaskOutcome::NoProcedureColumn {
                columns: cols(&["A", "B"]),
            }
        );
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_failure_isolation() {
        let dir = tempfile::tempdir().unwrap();
        let codes = ProcedureCodeSet::parse("0211060011|0211060020");
        let mut source = ScriptedSource {
            fail_for: "sp",
            batch: sample_batch(),
        };

        let mut outcomes = Vec::new();
        for uf in ["rj", "sp", "mg"] {
            outcomes.push(run_task(&mut source, state(uf), period(), &codes, dir.path()).await);
        }

        assert!(matches!(outcomes[0], TaskOutcome::Saved { .. }));
        assert_eq!(
            outcomes[1],
            TaskOutcome::Failed {
                error: "Malformed DBC file: connection reset".to_string(),
            }
        );
        // the failure for "sp" does not stop the remaining states
        assert!(matches!(outcomes[2], TaskOutcome::Saved { .. }));
    }
}
