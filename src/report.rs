use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use arrow::util::pretty::pretty_format_batches;

use crate::data::model::{CellValue, Table};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Table → Arrow
// ---------------------------------------------------------------------------

/// Narrowest Arrow type that holds every non-null value of a column.
fn column_type<'a>(values: impl Iterator<Item = &'a CellValue>) -> DataType {
    let mut ty = DataType::Int64;
    for value in values {
        match value {
            CellValue::Null | CellValue::Integer(_) => {}
            CellValue::Float(_) => ty = DataType::Float64,
            CellValue::String(_) => return DataType::Utf8,
        }
    }
    ty
}

fn column_array(table: &Table, column: &str, ty: &DataType) -> ArrayRef {
    let values = table.column_values(column);
    match ty {
        DataType::Int64 => Arc::new(Int64Array::from_iter(values.map(|v| match v {
            CellValue::Integer(i) => Some(*i),
            _ => None,
        }))),
        DataType::Float64 => Arc::new(Float64Array::from_iter(values.map(CellValue::as_f64))),
        _ => Arc::new(StringArray::from_iter(values.map(|v| match v {
            CellValue::Null => None,
            other => Some(other.to_string()),
        }))),
    }
}

/// Convert a table into a single Arrow record batch, one nullable column
/// per table column.
pub fn to_record_batch(table: &Table) -> Result<RecordBatch> {
    let mut fields = Vec::with_capacity(table.columns().len());
    let mut arrays = Vec::with_capacity(table.columns().len());
    for column in table.columns() {
        let ty = column_type(table.column_values(column));
        arrays.push(column_array(table, column, &ty));
        fields.push(Field::new(column.as_str(), ty, true));
    }

    let options = RecordBatchOptions::new().with_row_count(Some(table.len()));
    let batch = RecordBatch::try_new_with_options(Arc::new(Schema::new(fields)), arrays, &options)?;
    Ok(batch)
}

/// Render the whole table. Every row and column is shown at full width.
pub fn render(table: &Table) -> Result<String> {
    let batch = to_record_batch(table)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}
