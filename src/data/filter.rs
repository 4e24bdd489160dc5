use std::collections::BTreeSet;

use super::model::{cell, Row, Table};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Row predicates
// ---------------------------------------------------------------------------

/// A condition on a single row. Filters are lists of predicates that must
/// all hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Numeric value strictly greater than the bound.
    GreaterThan(String, f64),
    /// Value differs from the given string (Null and non-strings differ).
    NotEqualStr(String, String),
    /// Two columns hold the same number.
    ColumnsEqual(String, String),
    /// String value is one of the listed labels.
    OneOf(String, BTreeSet<String>),
}

impl Predicate {
    pub fn greater_than(column: &str, bound: f64) -> Self {
        Predicate::GreaterThan(column.to_string(), bound)
    }

    pub fn not_equal(column: &str, value: &str) -> Self {
        Predicate::NotEqualStr(column.to_string(), value.to_string())
    }

    pub fn columns_equal(a: &str, b: &str) -> Self {
        Predicate::ColumnsEqual(a.to_string(), b.to_string())
    }

    pub fn one_of<'a>(column: &str, values: impl IntoIterator<Item = &'a str>) -> Self {
        Predicate::OneOf(
            column.to_string(),
            values.into_iter().map(str::to_string).collect(),
        )
    }

    /// Columns the predicate reads.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            Predicate::GreaterThan(c, _)
            | Predicate::NotEqualStr(c, _)
            | Predicate::OneOf(c, _) => vec![c.as_str()],
            Predicate::ColumnsEqual(a, b) => vec![a.as_str(), b.as_str()],
        }
    }

    /// Whether `row` satisfies the predicate.
    ///
    /// Numeric comparisons fail on Null or non-numeric cells, the way a
    /// NaN comparison would.
    pub fn matches(&self, row: &Row) -> bool {
        let get = |c: &str| cell(row, c);
        match self {
            Predicate::GreaterThan(c, bound) => get(c).as_f64().is_some_and(|v| v > *bound),
            Predicate::NotEqualStr(c, value) => get(c).as_str() != Some(value.as_str()),
            Predicate::ColumnsEqual(a, b) => match (get(a).as_f64(), get(b).as_f64()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
            Predicate::OneOf(c, values) => get(c).as_str().is_some_and(|v| values.contains(v)),
        }
    }
}

/// Return indices of rows that pass every predicate.
///
/// Every column a predicate reads must exist in the table.
pub fn filtered_indices(table: &Table, predicates: &[Predicate]) -> Result<Vec<usize>> {
    for pred in predicates {
        for col in pred.columns() {
            table.require_column("filter", col)?;
        }
    }
    Ok(table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| predicates.iter().all(|p| p.matches(row)))
        .map(|(i, _)| i)
        .collect())
}

/// Keep only the rows that pass every predicate.
pub fn apply(table: &Table, predicates: &[Predicate]) -> Result<Table> {
    let indices = filtered_indices(table, predicates)?;
    Ok(table.select_rows(&indices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use crate::error::PipelineError;

    fn table() -> Table {
        Table::from_rows(
            &["InteractionSize", "T", "Type"],
            vec![
                vec![CellValue::from(2), CellValue::from(2), CellValue::from("Equal")],
                vec![CellValue::from(0), CellValue::from(1), CellValue::from("Subset")],
                vec![CellValue::from(3), CellValue::from(2), CellValue::Null],
                vec![CellValue::Null, CellValue::from(1), CellValue::from("Superset")],
            ],
        )
    }

    #[test]
    fn greater_than_skips_nulls() {
        let idx = filtered_indices(&table(), &[Predicate::greater_than("InteractionSize", 0.0)]).unwrap();
        assert_eq!(idx, vec![0, 2]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let preds = [
            Predicate::greater_than("InteractionSize", 0.0),
            Predicate::columns_equal("T", "InteractionSize"),
        ];
        assert_eq!(filtered_indices(&table(), &preds).unwrap(), vec![0]);
    }

    #[test]
    fn not_equal_keeps_nulls() {
        let idx = filtered_indices(&table(), &[Predicate::not_equal("Type", "Equal")]).unwrap();
        assert_eq!(idx, vec![1, 2, 3]);
    }

    #[test]
    fn one_of_matches_labels() {
        let pred = Predicate::one_of("Type", ["Subset", "Superset"]);
        assert_eq!(filtered_indices(&table(), &[pred]).unwrap(), vec![1, 3]);
    }

    #[test]
    fn unknown_column_is_rejected() {
        let err = apply(&table(), &[Predicate::greater_than("Nope", 0.0)]).unwrap_err();
        assert!(matches!(err, PipelineError::SchemaMismatch { .. }));
    }
}
