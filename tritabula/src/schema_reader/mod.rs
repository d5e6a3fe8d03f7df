use crate::extractor::group_columns;
use crate::models::TableSchema;
use crate::postgres_client_wrapper::{FromRow, PostgresClientWrapper};
use crate::Result;
use itertools::Itertools;
use tracing::instrument;

mod table_column;

pub use table_column::RawColumnRow;

/// Reads the column metadata of one schema and groups it into tables.
pub struct SchemaReader<'a> {
    connection: &'a PostgresClientWrapper,
}

impl SchemaReader<'_> {
    pub fn new(connection: &PostgresClientWrapper) -> SchemaReader<'_> {
        SchemaReader { connection }
    }

    #[instrument(skip_all, fields(schema = schema_name))]
    pub async fn read_tables(&self, schema_name: &str) -> Result<Vec<TableSchema>> {
        let (database_name,): (String,) = self
            .connection
            .get_result("select current_database()::text;", &[])
            .await?;

        tracing::info!(
            "Reading column metadata of schema '{}' in database '{}' (postgres {})",
            schema_name,
            database_name,
            self.connection.version()
        );

        let rows = self.get_column_rows(schema_name).await?;

        let tables = group_columns(rows.into_iter().map(RawColumnRow::from_row))?;

        tracing::debug!(
            "Found tables: {}",
            tables.iter().map(|t| &t.table_name).join(", ")
        );

        Ok(tables)
    }
}

macro_rules! define_working_query {
    ($fn_name:ident, $query:expr) => {
        impl $crate::schema_reader::SchemaReader<'_> {
            #[tracing::instrument(skip_all)]
            pub(in crate::schema_reader) async fn $fn_name(
                &self,
                schema_name: &str,
            ) -> $crate::Result<Vec<tokio_postgres::Row>> {
                self.connection.get_rows($query, &[&schema_name]).await
            }
        }
    };
}

pub(crate) use define_working_query;
