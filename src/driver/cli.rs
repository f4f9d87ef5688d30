//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// 引数が足りないときの案内
pub const USAGE: &str =
    "Missing parameter, usage as follows: \n ./blobcopy <filename_or_directory> [container_name]";

/// ファイルまたはディレクトリをAzure Blob Storageにアップロードする CLI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "blobcopy")]
#[command(about = "Upload a file or directory tree to an Azure Blob Storage container", long_about = None)]
pub struct Args {
    /// File or directory to upload
    pub source: Option<String>,

    /// Existing container to upload into (a new one is created when omitted)
    pub container: Option<String>,

    /// Optional JSON config file for transfer tuning
    #[arg(short, long)]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_no_arguments() {
        let args = Args::parse_from(["blobcopy"]);
        assert!(args.source.is_none());
        assert!(args.container.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_args_source_only() {
        let args = Args::parse_from(["blobcopy", "./data"]);
        assert_eq!(args.source.as_deref(), Some("./data"));
        assert!(args.container.is_none());
    }

    #[test]
    fn test_args_source_and_container() {
        let args = Args::parse_from(["blobcopy", "report.csv", "backups"]);
        assert_eq!(args.source.as_deref(), Some("report.csv"));
        assert_eq!(args.container.as_deref(), Some("backups"));
    }

    #[test]
    fn test_args_custom_config() {
        let args = Args::parse_from(["blobcopy", "-c", "/etc/blobcopy.json", "data"]);
        assert_eq!(args.config.as_deref(), Some("/etc/blobcopy.json"));
        assert_eq!(args.source.as_deref(), Some("data"));
    }

    #[test]
    fn test_args_too_many_positionals_rejected() {
        let result = Args::try_parse_from(["blobcopy", "a", "b", "c"]);
        assert!(result.is_err());
    }
}
