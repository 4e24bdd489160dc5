use log::info;

use super::filter::{self, Predicate};
use super::labels::{Algorithm, EQUAL};
use super::normalize::TYPE;
use super::model::Table;
use crate::error::Result;

/// Columns kept in the disagreement report, in display order.
pub const REPORT_COLUMNS: &[&str] = &[
    "Algorithm",
    "ModelName",
    "ModelIteration",
    "InteractionSize",
    "T",
    "MissedLiteralsCount",
    "IncorrectlyFoundLiteralsCount",
    "InteractionsUpdated",
    "FoundInteractionsMerged",
];

/// Algorithms whose disagreements are reported.
pub const INVESTIGATED: &[Algorithm] = &[Algorithm::Incremental];

/// Predicates selecting full-strength runs of the investigated algorithms
/// whose result is not equal to the faulty baseline.
pub fn disagreement_filter() -> Vec<Predicate> {
    vec![
        Predicate::not_equal(TYPE, EQUAL),
        Predicate::columns_equal("T", "InteractionSize"),
        Predicate::one_of("Algorithm", INVESTIGATED.iter().map(|a| a.label())),
    ]
}

/// Filter the normalized table down to disagreement rows and project the
/// report columns.
pub fn investigate(normalized: &Table) -> Result<Table> {
    let rows = filter::apply(normalized, &disagreement_filter())?;
    let report = rows.project(REPORT_COLUMNS)?;
    info!(
        "{} of {} run(s) disagree with the faulty baseline",
        report.len(),
        normalized.len()
    );
    Ok(report)
}
