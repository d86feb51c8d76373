//! GeoDish - a terminal client for the GeoDish recipe-discovery service
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;

use geodish_api::GeoDishClient;
use geodish_app::config;

/// GeoDish - discover dishes from around the world
#[derive(Parser, Debug)]
#[command(name = "geodish")]
#[command(about = "A terminal client for the GeoDish recipe-discovery service", long_about = None)]
struct Args {
    /// Base URL of the GeoDish server (overrides the config file)
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Ping the server health endpoint and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    geodish_core::logging::init()?;

    let mut settings = config::load_settings();
    if let Some(server) = args.server {
        settings.server.base_url = server;
    }

    if args.check {
        return check_server(&settings.server.base_url).await;
    }

    geodish_tui::run(settings).await?;
    Ok(())
}

/// Hit the health endpoint and report the result on stdout.
async fn check_server(base_url: &str) -> color_eyre::Result<()> {
    let client = GeoDishClient::new(base_url)?;
    match client.health().await {
        Ok(health) => {
            println!("server at {} is {}", base_url, health.status);
            if let Some(database) = health.database {
                println!("database: {database}");
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("server at {base_url} is unreachable: {e}");
            std::process::exit(1);
        }
    }
}
