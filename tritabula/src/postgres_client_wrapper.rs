use crate::{Result, TriTabulaError};
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Row, SimpleQueryMessage};
use tracing::instrument;

/// A single connection to postgres, with the connection task driven in the background.
pub struct PostgresClientWrapper {
    client: Client,
    join_handle: JoinHandle<Result<()>>,
    version: i32,
}

impl PostgresClientWrapper {
    #[instrument(skip_all)]
    pub async fn new(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

        // The connection object performs the actual communication with the database,
        // so spawn it off to run on its own.
        let join_handle = tokio::spawn(async move {
            match connection.await {
                Err(e) => Err(TriTabulaError::PostgresError(e)),
                Ok(_) => Ok(()),
            }
        });

        let messages = client.simple_query("SHOW server_version_num;").await?;
        let version_row = messages.iter().find_map(|message| match message {
            SimpleQueryMessage::Row(row) => Some(row),
            _ => None,
        });

        let version = match version_row {
            Some(row) => {
                let version: i32 = row
                    .get(0)
                    .and_then(|v| v.parse().ok())
                    .ok_or(TriTabulaError::InvalidPostgresVersionResponse)?;
                if version < 120000 {
                    return Err(TriTabulaError::UnsupportedPostgresVersion(version));
                }
                version / 10000
            }
            None => return Err(TriTabulaError::InvalidPostgresVersionResponse),
        };

        Ok(PostgresClientWrapper {
            client,
            join_handle,
            version,
        })
    }

    pub async fn get_rows(&self, sql: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        self.client
            .query(sql, params)
            .await
            .map_err(|e| TriTabulaError::PostgresErrorWithQuery {
                source: e,
                query: sql.to_string(),
            })
    }

    pub async fn get_results<T: FromRow>(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<T>> {
        let query_results = self.get_rows(sql, params).await?;

        let mut output = Vec::with_capacity(query_results.len());

        for row in query_results.into_iter() {
            output.push(T::from_row(row)?);
        }

        Ok(output)
    }

    pub async fn get_result<T: FromRow>(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<T> {
        let results = self.get_results(sql, params).await?;
        if results.len() != 1 {
            return Err(TriTabulaError::InvalidNumberOfResults {
                actual: results.len(),
                expected: 1,
            });
        }

        results
            .into_iter()
            .next()
            .ok_or(TriTabulaError::InvalidNumberOfResults {
                actual: 0,
                expected: 1,
            })
    }

    /// The major version of the connected server, e.g. `16`.
    pub fn version(&self) -> i32 {
        self.version
    }
}

impl Drop for PostgresClientWrapper {
    fn drop(&mut self) {
        self.join_handle.abort();
    }
}

pub trait FromRow: Sized {
    fn from_row(row: Row) -> Result<Self>;
}

impl<T1: tokio_postgres::types::FromSqlOwned> FromRow for (T1,) {
    fn from_row(row: Row) -> Result<Self> {
        Ok((row.try_get(0)?,))
    }
}
