// hearth-cli/src/main.rs
use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use clap::{Parser, Subcommand};
use hearth_rest::{Config, JsonMap, Outcome, ReqwestTransport, RestClient};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "hearth")]
#[command(about = "Talk to a hearth device REST API", long_about = None)]
struct Cli {
    /// Root endpoint, overriding the configured one
    #[arg(long, global = true)]
    endpoint: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a resource
    Get {
        /// Resource path, e.g. /devices/123
        path: String,
        /// Resolve redirects instead of printing the target
        #[arg(long)]
        follow: bool,
    },
    /// Write fields to a resource
    Set {
        /// Resource path, e.g. /devices/123
        path: String,
        /// field=value pairs; values parse as JSON where possible
        #[arg(required = true)]
        values: Vec<String>,
        /// Resolve redirects instead of printing the target
        #[arg(long)]
        follow: bool,
    },
    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the active configuration
    Show,
    /// Set the root endpoint and save it
    SetEndpoint {
        /// e.g. https://api.example.com
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Config(command) => run_config(command),
        Commands::Get { path, follow } => {
            let client = build_client(cli.endpoint)?;
            if follow {
                let map = client.get_following_redirects(&path).await?;
                print_map(&map)
            } else {
                print_outcome(client.get(&path).await?)
            }
        }
        Commands::Set {
            path,
            values,
            follow,
        } => {
            let client = build_client(cli.endpoint)?;
            let values = parse_fields(&values)?;
            if follow {
                let map = client.set_following_redirects(&path, &values).await?;
                print_map(&map)
            } else {
                print_outcome(client.set(&path, &values).await?)
            }
        }
    }
}

fn run_config(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load()?;
            println!("root_endpoint     = {}", config.root_endpoint);
            println!("max_redirect_hops = {}", config.max_redirect_hops);
            println!("timeout_secs      = {}", config.timeout_secs);
            Ok(())
        }
        ConfigCommands::SetEndpoint { url } => {
            let mut config = Config::load()?;
            config.root_endpoint = url;
            config.save()?;
            println!("saved");
            Ok(())
        }
    }
}

fn build_client(endpoint_override: Option<String>) -> Result<RestClient<ReqwestTransport>> {
    let config = Config::load()?;
    let root = endpoint_override.unwrap_or_else(|| config.root_endpoint.clone());
    if root.is_empty() {
        bail!("no root endpoint configured; run `hearth config set-endpoint <url>`");
    }
    let transport = ReqwestTransport::with_timeout(Duration::from_secs(config.timeout_secs))?;
    Ok(RestClient::new(transport, &root).max_redirect_hops(config.max_redirect_hops))
}

/// Parse `field=value` arguments into a JSON object. Values that parse as
/// JSON keep their type (`70`, `true`, `"x"`); anything else is a string.
fn parse_fields(pairs: &[String]) -> Result<JsonMap> {
    let mut map = JsonMap::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("expected field=value, got {pair:?}"))?;
        let value =
            serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        map.insert(key.to_string(), value);
    }
    Ok(map)
}

fn print_map(map: &JsonMap) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&Value::Object(map.clone()))?);
    Ok(())
}

fn print_outcome(outcome: Outcome) -> Result<()> {
    match outcome {
        Outcome::Body(map) => print_map(&map),
        Outcome::Redirect(redirect) => {
            println!("redirected ({}): {}", redirect.status, redirect.location);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::parse_fields;

    #[test]
    fn parse_fields_keeps_json_types() {
        let map = parse_fields(&[
            "target=70".to_string(),
            "fan_timer_active=true".to_string(),
            "name=Hallway".to_string(),
        ])
        .unwrap();
        assert_eq!(map.get("target"), Some(&json!(70)));
        assert_eq!(map.get("fan_timer_active"), Some(&json!(true)));
        assert_eq!(map.get("name"), Some(&json!("Hallway")));
    }

    #[test]
    fn parse_fields_rejects_bare_words() {
        assert!(parse_fields(&["nonsense".to_string()]).is_err());
    }
}
