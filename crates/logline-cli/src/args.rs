use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "logline",
    version,
    about = "Client for the LogLineOS REST API — append, scan, and query atomic events"
)]
pub struct Cli {
    /// Base URL of the LogLineOS server
    #[arg(long, global = true, env = "LOGLINE_API_URL")]
    pub url: Option<String>,

    /// API key, sent as x-api-key on every request
    #[arg(long, global = true, env = "LOGLINE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Append one atomic event to the log
    Append(AppendArgs),
    /// Scan the log
    Scan,
    /// Query events by trace id
    Query(QueryArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AppendArgs {
    /// Read a complete event JSON document from a file ("-" for stdin);
    /// overrides the field flags below
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Category tag of the event (e.g., "function")
    #[arg(long, required_unless_present = "file")]
    pub entity_type: Option<String>,

    /// Intended operation (e.g., "run_code")
    #[arg(long, required_unless_present = "file")]
    pub intent: Option<String>,

    /// Subject/target of the operation
    #[arg(long, required_unless_present = "file")]
    pub this: Option<String>,

    /// Identity of the caller
    #[arg(long, required_unless_present = "file")]
    pub actor: Option<String>,

    /// Performed action (defaults to the intent)
    #[arg(long)]
    pub action: Option<String>,

    /// Operation arguments as a JSON object
    #[arg(long, default_value = "{}")]
    pub input: String,

    /// Correlation id (defaults to a generated v4 UUID)
    #[arg(long)]
    pub trace_id: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Correlation id to look up
    #[arg(long)]
    pub trace_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_append_from_flags() {
        let cli = Cli::try_parse_from([
            "logline",
            "append",
            "--entity-type",
            "function",
            "--intent",
            "run_code",
            "--this",
            "add",
            "--actor",
            "rust-client",
        ])
        .expect("should parse");

        match cli.cmd {
            Command::Append(args) => {
                assert_eq!(args.entity_type.as_deref(), Some("function"));
                assert_eq!(args.input, "{}");
                assert!(args.trace_id.is_none());
            }
            _ => panic!("expected append"),
        }
    }

    #[test]
    fn test_append_fields_optional_with_file() {
        let cli = Cli::try_parse_from(["logline", "append", "--file", "event.json"])
            .expect("should parse");
        match cli.cmd {
            Command::Append(args) => assert!(args.entity_type.is_none()),
            _ => panic!("expected append"),
        }
    }

    #[test]
    fn test_append_fields_required_without_file() {
        let result = Cli::try_parse_from(["logline", "append", "--intent", "run_code"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_query_requires_trace_id() {
        assert!(Cli::try_parse_from(["logline", "query"]).is_err());
        let cli = Cli::try_parse_from(["logline", "query", "--trace-id", "t-1"]).unwrap();
        match cli.cmd {
            Command::Query(args) => assert_eq!(args.trace_id, "t-1"),
            _ => panic!("expected query"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["logline", "scan", "--url", "http://localhost:9000"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://localhost:9000"));
    }
}
