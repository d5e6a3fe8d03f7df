use crate::models::column::ColumnInfo;

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct TableSchema {
    pub schema_name: String,
    pub table_name: String,
    /// In ordinal position order.
    pub columns: Vec<ColumnInfo>,
}

impl TableSchema {
    pub fn new(schema_name: &str, table_name: &str) -> Self {
        TableSchema {
            schema_name: schema_name.to_string(),
            table_name: table_name.to_string(),
            columns: vec![],
        }
    }

    pub fn get_column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }
}
