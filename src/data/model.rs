use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PipelineError, Result};

// ---------------------------------------------------------------------------
// CellValue – a single cell of a result table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, typed on ingest by looking at its text.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    /// Absent value: empty field, NA token, or an unmatched join.
    Null,
}

/// Tokens the benchmark writes (or leaves behind) for "no value".
const NULL_TOKENS: &[&str] = &["", "null", "NULL", "NA", "N/A", "NaN", "nan"];

fn is_null_token(s: &str) -> bool {
    NULL_TOKENS.contains(&s)
}

/// Type shared by every cell of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    String,
}

impl ColumnKind {
    /// Narrowest kind holding every non-null value. One value that is not
    /// a number makes the whole column text.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a str>) -> ColumnKind {
        let mut kind = ColumnKind::Integer;
        for s in values.into_iter().filter(|s| !is_null_token(s)) {
            if s.parse::<i64>().is_ok() {
                continue;
            }
            if s.parse::<f64>().is_ok() {
                kind = ColumnKind::Float;
            } else {
                return ColumnKind::String;
            }
        }
        kind
    }
}

impl CellValue {
    /// Type a lone raw field. Indicator codes such as `T` / `F` / `N`
    /// stay strings.
    pub fn parse(s: &str) -> CellValue {
        CellValue::parse_as(s, ColumnKind::infer([s]))
    }

    /// Type a raw field of a column already known to be of `kind`.
    pub fn parse_as(s: &str, kind: ColumnKind) -> CellValue {
        if is_null_token(s) {
            return CellValue::Null;
        }
        match kind {
            ColumnKind::Integer => s
                .parse::<i64>()
                .map_or_else(|_| CellValue::String(s.to_string()), CellValue::Integer),
            ColumnKind::Float => s
                .parse::<f64>()
                .map_or_else(|_| CellValue::String(s.to_string()), CellValue::Float),
            ColumnKind::String => CellValue::String(s.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }

    /// Text used when cells are glued together; Null contributes nothing.
    pub fn to_text(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:?}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::String(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Float(v)
    }
}

// ---------------------------------------------------------------------------
// Row / Table
// ---------------------------------------------------------------------------

/// One row: column name → value. A column missing from the map is Null.
pub type Row = BTreeMap<String, CellValue>;

static NULL: CellValue = CellValue::Null;

/// Value of `column` in `row`; absent cells read as Null.
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a CellValue {
    row.get(column).unwrap_or(&NULL)
}

/// An in-memory table with a stable column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a header and row-major values. Handy for fixtures.
    pub fn from_rows<I, R>(columns: &[&str], rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = CellValue>,
    {
        let mut table = Table::new(columns.iter().map(|c| c.to_string()).collect());
        for values in rows {
            let row: Row = table.columns.iter().cloned().zip(values).collect();
            table.rows.push(row);
        }
        table
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Fail with a schema mismatch unless `name` is a column.
    pub fn require_column(&self, stage: &'static str, name: &str) -> Result<()> {
        if self.has_column(name) {
            Ok(())
        } else {
            Err(PipelineError::missing_column(stage, name))
        }
    }

    pub fn push_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Value of `column` in row `idx`; absent cells read as Null.
    pub fn cell(&self, idx: usize, column: &str) -> &CellValue {
        self.rows.get(idx).map_or(&NULL, |row| cell(row, column))
    }

    /// All values of one column in row order.
    pub fn column_values<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a CellValue> + 'a {
        self.rows
            .iter()
            .map(move |row| cell(row, column))
    }

    /// Rename columns. Every source column must exist.
    pub fn rename_columns(mut self, renames: &[(&str, &str)]) -> Result<Table> {
        for (from, _) in renames {
            self.require_column("rename", from)?;
        }
        for (from, to) in renames {
            for col in self.columns.iter_mut().filter(|c| c.as_str() == *from) {
                *col = to.to_string();
            }
            for row in &mut self.rows {
                if let Some(v) = row.remove(*from) {
                    row.insert(to.to_string(), v);
                }
            }
        }
        Ok(self)
    }

    /// Keep rows by index (indices must come from this table).
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        Table {
            columns: self.columns.clone(),
            rows: indices
                .iter()
                .filter_map(|&i| self.rows.get(i).cloned())
                .collect(),
        }
    }

    /// Rewrite every value of an existing column.
    pub fn map_column<F>(mut self, column: &str, mut f: F) -> Result<Table>
    where
        F: FnMut(&CellValue) -> Result<CellValue>,
    {
        self.require_column("map", column)?;
        for row in &mut self.rows {
            let new = f(cell(row, column))?;
            row.insert(column.to_string(), new);
        }
        Ok(self)
    }

    /// Set (or overwrite) a column computed from each row.
    pub fn insert_column<F>(mut self, column: &str, mut f: F) -> Table
    where
        F: FnMut(&Row) -> CellValue,
    {
        if !self.has_column(column) {
            self.columns.push(column.to_string());
        }
        for row in &mut self.rows {
            let value = f(row);
            row.insert(column.to_string(), value);
        }
        self
    }

    /// Reduce to exactly `columns`, in that order.
    pub fn project(&self, columns: &[&str]) -> Result<Table> {
        for col in columns {
            self.require_column("project", col)?;
        }
        let rows = self
            .rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .filter_map(|c| row.get(*c).map(|v| (c.to_string(), v.clone())))
                    .collect()
            })
            .collect();
        Ok(Table {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        })
    }

    /// Union all rows. Columns are ordered by first appearance; cells a
    /// part does not have read as Null.
    pub fn concat(parts: Vec<Table>) -> Table {
        let mut out = Table::default();
        for part in parts {
            for col in part.columns {
                if !out.columns.contains(&col) {
                    out.columns.push(col);
                }
            }
            out.rows.extend(part.rows);
        }
        out
    }
}
