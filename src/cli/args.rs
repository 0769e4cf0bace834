use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hive-api-map")]
#[command(version, about = "Map the public Swift API of a Hive source checkout")]
pub struct Args {
    /// Repo root (or a directory containing libs/hive/Sources). Defaults to CWD.
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Log scan progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Markdown,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["hive-api-map"]);
        assert!(args.root.is_none());
        assert_eq!(args.format, OutputFormat::Markdown);
        assert!(!args.verbose);
    }

    #[test]
    fn test_root_and_format() {
        let args = Args::parse_from(["hive-api-map", "--root", "/tmp/hive", "--format", "json", "-v"]);
        assert_eq!(args.root, Some(PathBuf::from("/tmp/hive")));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.verbose);
    }
}
