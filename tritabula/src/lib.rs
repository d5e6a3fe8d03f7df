mod postgres_client_wrapper;
mod schema_reader;
mod models;
mod error;
mod extractor;
mod document;
mod renderer;

pub use error::*;
pub use models::*;
pub use postgres_client_wrapper::{FromRow, PostgresClientWrapper};
pub use schema_reader::{RawColumnRow, SchemaReader};
pub use extractor::group_columns;
pub use document::*;
pub use renderer::*;


pub(crate) fn default<T: Default>() -> T {
    T::default()
}
