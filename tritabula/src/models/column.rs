/// Placeholder used for a column key or default value the database did not report.
pub const NONE_PLACEHOLDER: &str = "NONE";

/// The marker postgres and the metadata query use for a nullable column.
pub const NULLABLE_MARKER: &str = "YES";

/// The marker used for a column that does not accept nulls.
pub const NOT_NULLABLE_MARKER: &str = "NO";

/// One column of a table, with every optional value already normalized.
#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct ColumnInfo {
    pub name: String,
    pub column_type: String,
    pub is_nullable: bool,
    /// `PRI`, `UNI`, `MUL` or [`NONE_PLACEHOLDER`].
    pub column_key: String,
    /// The default expression or [`NONE_PLACEHOLDER`].
    pub default_value: String,
    /// Empty when the column has no comment.
    pub comment: String,
}

impl ColumnInfo {
    pub fn has_default(&self) -> bool {
        self.default_value != NONE_PLACEHOLDER
    }
}

/// Missing nullability means the column is not nullable.
pub fn normalize_nullable(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_NULLABLE_MARKER)
}

pub fn normalize_column_key(value: &str) -> &str {
    if value.is_empty() {
        NONE_PLACEHOLDER
    } else {
        value
    }
}

pub fn normalize_default(value: Option<&str>) -> &str {
    value.unwrap_or(NONE_PLACEHOLDER)
}

pub fn normalize_comment(value: Option<&str>) -> &str {
    value.unwrap_or_default()
}
