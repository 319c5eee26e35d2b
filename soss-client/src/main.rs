use std::process::ExitCode;

use soss_client::soss::{SossClient, SossConfig, SossError};
use tracing::error;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: soss-client [detail <station-id>]";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let client = match SossClient::new(SossConfig::new()) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create SOSS client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = match args.as_slice() {
        [] => client.get_status().await.and_then(to_json),
        [cmd, id] if cmd == "detail" => client
            .get_station_static_details(id)
            .await
            .and_then(to_json),
        _ => {
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(kind = ?e.kind(), "{e}");
            ExitCode::FAILURE
        }
    }
}

fn to_json<T: serde::Serialize>(value: T) -> Result<String, SossError> {
    serde_json::to_string_pretty(&value).map_err(|e| SossError::Json {
        message: e.to_string(),
        body: None,
    })
}
