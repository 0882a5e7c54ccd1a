use clap::Parser;
use dirs::cache_dir;
use stackgen_cli::cli::Cli;
use stackgen_cli::config;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> stackgen_cli::Result<()> {
    check_for_update();
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;

    stackgen_cli::run_command(cli.command, &config).await
}

fn check_for_update() {
    // Opt-out for CI and scripted runs
    if std::env::var_os("STACKGEN_NO_UPDATE_CHECK").is_some() {
        return;
    }

    let cache_file = cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("stackgen/last_update_check");
    let now = SystemTime::now();

    // Only check once per day
    if let Ok(metadata) = fs::metadata(&cache_file) {
        if let Ok(modified) = metadata.modified() {
            if now.duration_since(modified).unwrap_or(Duration::ZERO)
                < Duration::from_secs(60 * 60 * 24)
            {
                return;
            }
        }
    }

    // Query crates.io with proper User-Agent header
    let client = reqwest::blocking::Client::builder()
        .user_agent(format!(
            "stackgen-cli/{} ({})",
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_REPOSITORY")
        ))
        .build();

    if let Ok(client) = client {
        let resp = client
            .get("https://crates.io/api/v1/crates/stackgen-cli")
            .send()
            .and_then(|r| r.json::<serde_json::Value>());

        if let Ok(json) = resp {
            let latest = json["crate"]["max_version"].as_str().unwrap_or("");
            let current = env!("CARGO_PKG_VERSION");
            if !latest.is_empty() && latest != current {
                println!(
                    "\x1b[33mA new version of stackgen is available: {latest} (current: {current})\nRun `cargo install stackgen-cli --force` to update.\x1b[0m"
                );
            }
        }
    }

    // Update cache file
    if let Some(parent) = cache_file.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(&cache_file, "");
}
