use crate::cli::{resolve_path, Cli};
use crate::config::DbConfig;
use clap::Parser;
use std::process::ExitCode;
use tracing::instrument;
use tracing_subscriber::EnvFilter;
use tritabula::{PostgresClientWrapper, ReportRenderer, Result, SchemaReader};

mod cli;
mod config;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[instrument(skip_all)]
async fn run(cli: Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config_path = resolve_path(&working_dir, &cli.config);
    let output_path = resolve_path(&working_dir, &cli.output);

    let config = DbConfig::load(&config_path).await?;
    let schema = cli.schema.as_deref().unwrap_or(&config.schema);

    let connection = PostgresClientWrapper::new(&config.get_connection_string()).await?;
    let tables = SchemaReader::new(&connection).read_tables(schema).await?;

    let document = ReportRenderer::default().render(&tables)?;
    document.save(&output_path)?;

    tracing::info!(
        "Wrote {} tables of schema '{}' to {}",
        tables.len(),
        schema,
        output_path.display()
    );

    Ok(())
}
