use anyhow::{Context, Result};
use logline_client::{ApiClient, AtomicEvent, ClientConfig, ClientError};
use serde_json::Value;
use tracing::debug;

use crate::args::{AppendArgs, Cli, Command};

/// Run the selected command and map the outcome to a process exit code.
pub async fn dispatch(cli: Cli) -> i32 {
    let config = build_config(&cli);

    match run(cli.cmd, config).await {
        Ok(value) => {
            match serde_json::to_string_pretty(&value) {
                Ok(pretty) => println!("{pretty}"),
                Err(_) => println!("{value}"),
            }
            0
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            e.downcast_ref::<ClientError>()
                .map(ClientError::exit_code)
                .unwrap_or(1)
        }
    }
}

async fn run(cmd: Command, config: ClientConfig) -> Result<Value> {
    let client = ApiClient::new(config)?;
    debug!(base_url = %client.base_url(), "client ready");

    match cmd {
        Command::Append(args) => {
            let event = build_event(&args)?;
            Ok(client.append(&event).await?)
        }
        Command::Scan => Ok(client.scan().await?),
        Command::Query(args) => Ok(client.query(&args.trace_id).await?),
    }
}

/// Environment config first, command-line flags win.
fn build_config(cli: &Cli) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = &cli.url {
        config = config.with_url(url);
    }
    if let Some(key) = &cli.api_key {
        config = config.with_api_key(key);
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    config
}

fn build_event(args: &AppendArgs) -> Result<AtomicEvent> {
    if let Some(path) = &args.file {
        let raw = if path.as_os_str() == "-" {
            std::io::read_to_string(std::io::stdin()).context("reading event from stdin")?
        } else {
            std::fs::read_to_string(path)
                .with_context(|| format!("reading event from {}", path.display()))?
        };
        return serde_json::from_str(&raw).context("event document is not a valid atomic event");
    }

    // clap enforces presence of these when --file is absent
    let entity_type = args.entity_type.clone().context("--entity-type is required")?;
    let intent = args.intent.clone().context("--intent is required")?;
    let this = args.this.clone().context("--this is required")?;
    let actor = args.actor.clone().context("--actor is required")?;

    let input: Value = serde_json::from_str(&args.input).context("--input is not valid JSON")?;
    let input = input
        .as_object()
        .cloned()
        .context("--input must be a JSON object")?;

    let trace_id = args
        .trace_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let mut event = AtomicEvent::new(entity_type, intent, this, actor)
        .with_input(input)
        .with_trace_id(trace_id);
    if let Some(action) = &args.action {
        event.did.action = action.clone();
    }

    Ok(event)
}
