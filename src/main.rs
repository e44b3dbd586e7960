//! # Sheet Dispatch Demo
//!
//! Starts the dispatch system with the spreadsheet provider and replays a few
//! host events, printing each JSON reply.
//!
//! Reads `sheet-dispatch.toml` from the working directory when present.

use sheet_dispatch::config::Config;
use sheet_dispatch::lifecycle::{setup_tracing, DispatchSystem};
use sheet_dispatch::model::Params;
use sheet_dispatch::provider::SpreadsheetProvider;
use sheet_dispatch::transport::{do_get, do_post, GetEvent, PostData, PostEvent};
use std::path::Path;
use tracing::info;

const CONFIG_FILE: &str = "sheet-dispatch.toml";

fn query(pairs: &[(&str, &str)]) -> GetEvent {
    GetEvent {
        parameter: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Params>(),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let loaded = if Path::new(CONFIG_FILE).exists() {
        Config::load(CONFIG_FILE)
    } else {
        Config::from_env()
    };
    let config = loaded.map_err(|e| e.to_string())?;

    setup_tracing(&config);
    info!(?config, "Starting dispatcher demo");

    let provider = SpreadsheetProvider::new(config.spreadsheet_name.clone());
    let system = DispatchSystem::new(&config, provider);

    let gets = [
        query(&[]),
        query(&[("path", "any")]),
        query(&[("path", "accounts"), ("id", "1")]),
    ];
    for event in gets {
        let reply = do_get(&system.client, event.clone()).await;
        info!(parameter = ?event.parameter, "GET");
        println!("{}", reply.content);
    }

    let post = PostEvent {
        post_data: Some(PostData {
            content_type: "application/json".to_string(),
            contents: Some(r#"{"title":"Write docs"}"#.to_string()),
        }),
    };
    let reply = do_post(&system.client, post).await;
    println!("{}", reply.content);

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
