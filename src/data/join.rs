use std::collections::HashMap;

use log::debug;

use super::model::{cell, CellValue, Row, Table};
use crate::error::Result;

/// Hashable form of a join key. Numbers compare by value, so `1` and
/// `1.0` are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum JoinKey {
    Number(u64),
    Text(String),
}

impl JoinKey {
    fn of(value: &CellValue) -> Option<JoinKey> {
        match value {
            CellValue::Null => None,
            CellValue::String(s) => Some(JoinKey::Text(s.clone())),
            // +0.0 folds -0.0 into the same bits
            other => other.as_f64().map(|v| JoinKey::Number((v + 0.0).to_bits())),
        }
    }
}

/// Left-join `right` onto `left` on the column `key`.
///
/// * Every left row survives. Rows without a partner get Null for every
///   right-hand column.
/// * A key present several times on the right fans the left row out once
///   per match.
/// * Right-hand columns whose name is already used on the left are
///   renamed `<name><suffix>`; the key itself is not repeated.
/// * Null keys never match.
pub fn left_join(left: &Table, right: &Table, key: &str, suffix: &str) -> Result<Table> {
    left.require_column("join", key)?;
    right.require_column("join", key)?;

    // (right column, output column)
    let right_cols: Vec<(&str, String)> = right
        .columns()
        .iter()
        .filter(|c| c.as_str() != key)
        .map(|c| {
            let out = if left.has_column(c) {
                format!("{c}{suffix}")
            } else {
                c.clone()
            };
            (c.as_str(), out)
        })
        .collect();

    let mut columns = left.columns().to_vec();
    columns.extend(right_cols.iter().map(|(_, out)| out.clone()));
    let mut joined = Table::new(columns);

    // key → right rows, in right-table order
    let mut index: HashMap<JoinKey, Vec<&Row>> = HashMap::new();
    for right_row in right.rows() {
        if let Some(k) = JoinKey::of(cell(right_row, key)) {
            index.entry(k).or_default().push(right_row);
        }
    }

    let mut unmatched = 0usize;
    for left_row in left.rows() {
        let matches: &[&Row] = JoinKey::of(cell(left_row, key))
            .and_then(|k| index.get(&k))
            .map_or(&[], Vec::as_slice);

        if matches.is_empty() {
            unmatched += 1;
            let mut row = left_row.clone();
            for (_, out) in &right_cols {
                row.insert(out.clone(), CellValue::Null);
            }
            joined.push_row(row);
            continue;
        }

        for right_row in matches {
            let mut row = left_row.clone();
            for (src, out) in &right_cols {
                let value = right_row.get(*src).cloned().unwrap_or(CellValue::Null);
                row.insert(out.clone(), value);
            }
            joined.push_row(row);
        }
    }

    if unmatched > 0 {
        debug!("join on {key}: {unmatched} row(s) without a match");
    }
    Ok(joined)
}
