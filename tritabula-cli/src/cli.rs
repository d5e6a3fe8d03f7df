use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about)]
/// Generates a report of the tables in a postgres schema as a docx document.
///
/// Every table gets a title and a three-line table listing its columns with their type,
/// nullability, key, default value and comment.
pub struct Cli {
    /// The json file with the database connection settings. Relative paths are resolved
    /// against the working directory.
    #[arg(long, default_value = "config/dbconfig.json")]
    pub config: PathBuf,

    /// Where to write the report. Relative paths are resolved against the working directory.
    #[arg(long, default_value = "output.docx")]
    pub output: PathBuf,

    /// The schema to report on. Overrides the schema in the config file.
    #[arg(long)]
    pub schema: Option<String>,
}

pub(crate) fn resolve_path(working_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }

    #[test]
    fn uses_default_paths() {
        let cli = Cli::parse_from(["tritabula"]);

        assert_eq!(cli.config, PathBuf::from("config/dbconfig.json"));
        assert_eq!(cli.output, PathBuf::from("output.docx"));
        assert_eq!(cli.schema, None);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::parse_from([
            "tritabula",
            "--config",
            "/etc/tritabula.json",
            "--output",
            "reports/shop.docx",
            "--schema",
            "shop",
        ]);

        assert_eq!(cli.config, PathBuf::from("/etc/tritabula.json"));
        assert_eq!(cli.output, PathBuf::from("reports/shop.docx"));
        assert_eq!(cli.schema.as_deref(), Some("shop"));
    }

    #[test]
    fn resolves_relative_paths_against_working_dir() {
        let working_dir = Path::new("/work");

        assert_eq!(
            resolve_path(working_dir, Path::new("output.docx")),
            PathBuf::from("/work/output.docx")
        );
        assert_eq!(
            resolve_path(working_dir, Path::new("/tmp/report.docx")),
            PathBuf::from("/tmp/report.docx")
        );
    }
}
