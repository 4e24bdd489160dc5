//! Raw combined table → analysis schema.
//!
//! Steps run in a fixed order; later steps read the renamed columns.

use std::io::Write;

use log::{info, warn};

use super::filter::{self, Predicate};
use super::labels::{self, Algorithm};
use super::model::{cell, CellValue, Table};
use crate::error::{PipelineError, Result};

pub const RENAMES: &[(&str, &str)] = &[
    ("Name", "Algorithm"),
    ("Name_model", "ModelName"),
    ("ConfigurationVerificationCount", "Configurations"),
];

pub const FOUND_IN_FAULTY: &str = "FoundMergedUpdatedIsSubsetFaultyUpdated";
pub const FAULTY_IN_FOUND: &str = "FaultyUpdatedIsSubsetFoundMergedUpdated";
pub const TYPE: &str = "Type";
pub const TIME: &str = "Time";
pub const MS_PER_SECOND: f64 = 1000.0;

/// Run every normalization step. Writes the post-rename row count to `out`.
pub fn normalize(raw: Table, out: &mut dyn Write) -> Result<Table> {
    let table = raw.rename_columns(RENAMES)?;
    writeln!(out, "data count: {}", table.len())?;

    let table = keep_valid_runs(&table)?;
    let table = relabel_algorithms(table)?;
    let table = derive_type(table)?;
    let table = time_to_seconds(table)?;

    info!("normalized {} run(s)", table.len());
    Ok(table)
}

/// Drop runs without a positive interaction size and strength.
pub fn keep_valid_runs(table: &Table) -> Result<Table> {
    filter::apply(
        table,
        &[
            Predicate::greater_than("InteractionSize", 0.0),
            Predicate::greater_than("T", 0.0),
        ],
    )
}

/// Replace benchmark algorithm names by their canonical labels. Anything
/// else passes through untouched.
pub fn relabel_algorithms(table: Table) -> Result<Table> {
    table.map_column("Algorithm", |value| {
        Ok(match value.as_str().and_then(Algorithm::from_source_name) {
            Some(algo) => CellValue::from(algo.label()),
            None => value.clone(),
        })
    })
}

/// Concatenate the two indicators into `Type` and map known codes to
/// their category. Unknown codes stay as they are.
pub fn derive_type(table: Table) -> Result<Table> {
    table.require_column("derive", FOUND_IN_FAULTY)?;
    table.require_column("derive", FAULTY_IN_FOUND)?;

    let mut unmapped = 0usize;
    let table = table.insert_column(TYPE, |row| {
        let code = format!(
            "{}{}",
            cell(row, FOUND_IN_FAULTY).to_text(),
            cell(row, FAULTY_IN_FOUND).to_text()
        );
        match labels::result_type(&code) {
            Some(label) => CellValue::from(label),
            None => {
                unmapped += 1;
                CellValue::String(code)
            }
        }
    });

    if unmapped > 0 {
        warn!("{unmapped} run(s) with an unmapped indicator pair");
    }
    Ok(table)
}

/// Milliseconds to seconds.
pub fn time_to_seconds(table: Table) -> Result<Table> {
    table.map_column(TIME, |value| match value {
        CellValue::Null => Ok(CellValue::Null),
        other => other
            .as_f64()
            .map(|ms| CellValue::Float(ms / MS_PER_SECOND))
            .ok_or_else(|| PipelineError::SchemaMismatch {
                stage: "time",
                detail: format!("non-numeric {TIME} value '{other}'"),
            }),
    })
}
