use std::collections::BTreeMap;

use sqlx::{
    Column, Row as _, TypeInfo,
    mysql::{MySqlColumn, MySqlRow},
};

use crate::{DatabaseError, DatabaseResult};

/// One result row keyed by column name.
pub type Row = BTreeMap<String, SqlValue>;

#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl SqlValue {
    fn kind(&self) -> &'static str {
        match self {
            SqlValue::Null => "null",
            SqlValue::Int(_) => "an integer",
            SqlValue::Float(_) => "a float",
            SqlValue::Text(_) => "text",
        }
    }
}

pub(crate) fn decode_row(row: &MySqlRow) -> DatabaseResult<Row> {
    row.columns()
        .iter()
        .map(|column| Ok((column.name().to_string(), decode_column(row, column)?)))
        .collect()
}

fn decode_column(row: &MySqlRow, column: &MySqlColumn) -> DatabaseResult<SqlValue> {
    let index = column.ordinal();
    let type_name = column.type_info().name();
    let unsigned = type_name.ends_with(" UNSIGNED");
    let base_type = type_name.trim_end_matches(" UNSIGNED");

    let value = match base_type {
        "BOOLEAN" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" if unsigned => row
            .try_get::<Option<u64>, _>(index)
            .map_err(DatabaseError::Query)?
            .map(|v| SqlValue::Int(v as i64)),
        "BOOLEAN" | "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => row
            .try_get::<Option<i64>, _>(index)
            .map_err(DatabaseError::Query)?
            .map(SqlValue::Int),
        "FLOAT" | "DOUBLE" => row
            .try_get::<Option<f64>, _>(index)
            .map_err(DatabaseError::Query)?
            .map(SqlValue::Float),
        _ => match row.try_get::<Option<String>, _>(index) {
            Ok(text) => text.map(SqlValue::Text),
            Err(_) => row
                .try_get_unchecked::<Option<Vec<u8>>, _>(index)
                .map_err(DatabaseError::Query)?
                .map(|bytes| SqlValue::Text(String::from_utf8_lossy(&bytes).into_owned())),
        },
    };

    Ok(value.unwrap_or(SqlValue::Null))
}

/// Typed accessors used when mapping rows onto domain entities.
pub trait RowExt {
    fn value(&self, column: &str) -> DatabaseResult<&SqlValue>;

    fn opt_int(&self, column: &str) -> DatabaseResult<Option<i64>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Int(v) => Ok(Some(*v)),
            other => Err(DatabaseError::UnexpectedType {
                column: column.to_string(),
                expected: "an integer",
                found: other.kind(),
            }),
        }
    }

    fn int(&self, column: &str) -> DatabaseResult<i64> {
        self.opt_int(column)?
            .ok_or_else(|| DatabaseError::UnexpectedType {
                column: column.to_string(),
                expected: "an integer",
                found: "null",
            })
    }

    /// Numeric columns are rendered as text, so a phone number stored as
    /// an integer still reads back.
    fn opt_text(&self, column: &str) -> DatabaseResult<Option<String>> {
        match self.value(column)? {
            SqlValue::Null => Ok(None),
            SqlValue::Text(v) => Ok(Some(v.clone())),
            SqlValue::Int(v) => Ok(Some(v.to_string())),
            SqlValue::Float(v) => Ok(Some(v.to_string())),
        }
    }
}

impl RowExt for Row {
    fn value(&self, column: &str) -> DatabaseResult<&SqlValue> {
        self.get(column)
            .ok_or_else(|| DatabaseError::MissingColumn(column.to_string()))
    }
}
