use crate::models::{
    normalize_column_key, normalize_comment, normalize_default, normalize_nullable, ColumnInfo,
    TableSchema, NULLABLE_MARKER,
};
use crate::schema_reader::RawColumnRow;
use crate::{Result, TriTabulaError};
use std::collections::HashMap;
use tracing::instrument;

/// Groups a feed of column rows into tables.
///
/// Tables come out in the order their first row was seen, and columns in the order they arrived.
/// Rows are matched to their table by name, so the feed does not have to keep the rows of a
/// table together. If the feed yields an error, nothing is returned but the error.
#[instrument(skip_all)]
pub fn group_columns<I>(rows: I) -> Result<Vec<TableSchema>>
where
    I: IntoIterator<Item = Result<RawColumnRow>>,
{
    let mut tables: Vec<TableSchema> = Vec::new();
    let mut table_indices: HashMap<String, usize> = HashMap::new();

    for (row_number, row) in rows.into_iter().enumerate() {
        let row = row.map_err(|e| TriTabulaError::Extraction {
            reason: format!("row {}: {}", row_number + 1, e),
        })?;

        tracing::trace!("Read column {}.{}", row.table_name, row.column_name);

        let idx = match table_indices.get(&row.table_name) {
            Some(idx) => *idx,
            None => {
                tables.push(TableSchema::new(&row.schema_name, &row.table_name));
                let idx = tables.len() - 1;
                table_indices.insert(row.table_name.clone(), idx);
                idx
            }
        };

        let column = to_column_info(row);
        tables[idx].columns.push(column);
    }

    tracing::debug!("Grouped column metadata into {} tables", tables.len());

    Ok(tables)
}

fn to_column_info(row: RawColumnRow) -> ColumnInfo {
    if row.is_nullable.is_none() {
        tracing::warn!(
            "Column {}.{} has no nullability information, treating it as not nullable",
            row.table_name,
            row.column_name
        );
    }

    ColumnInfo {
        is_nullable: normalize_nullable(row.is_nullable.as_deref()) == NULLABLE_MARKER,
        column_key: normalize_column_key(&row.column_key).to_string(),
        default_value: normalize_default(row.column_default.as_deref()).to_string(),
        comment: normalize_comment(row.comment.as_deref()).to_string(),
        name: row.column_name,
        column_type: row.column_type,
    }
}
