#![allow(non_snake_case)]

mod cli;

use scheduleViewer::config::{AppConfig, Settings};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load();
    let settings = Settings::from_config(&config);
    cli::cli(settings).await;
}
