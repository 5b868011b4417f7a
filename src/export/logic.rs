// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SessionExport;
use crate::models::Snapshot;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use chrono::NaiveDate;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export sessions of every ledger.
    ///
    /// - `file`: absolute output path
    /// - `range`: `None`, `"all"` or `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and
    ///   their `start:end` forms
    ///
    /// Returns the number of exported rows.
    pub fn export(
        snapshot: &Snapshot,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let rows = collect_rows(snapshot, bounds);

        if rows.is_empty() {
            warning("No sessions found for selected range. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}

/// Rows ordered by date then start time.
pub fn collect_rows(
    snapshot: &Snapshot,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<SessionExport> {
    let ledgers = std::iter::once(("default", &snapshot.sessions)).chain(
        snapshot
            .bankrolls
            .iter()
            .map(|b| (b.name.as_str(), &b.sessions)),
    );

    let mut rows: Vec<(NaiveDate, SessionExport)> = Vec::new();
    for (name, sessions) in ledgers {
        for s in sessions {
            if let Some((start, end)) = bounds
                && (s.date < start || s.date > end)
            {
                continue;
            }
            rows.push((s.date, SessionExport::from_session(s, name)));
        }
    }

    rows.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.start.cmp(&b.1.start)));
    rows.into_iter().map(|(_, r)| r).collect()
}
