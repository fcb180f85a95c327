mod chat;
mod config;
mod constants;
mod models;
mod print_help;
mod utils;

use crate::config::ProbeConfig;
use crate::print_help::print_help;
use crate::utils::{is_help_request, process_command};
use std::{env, error::Error};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if is_help_request(&args) {
        print_help();
        return Ok(());
    }

    let config = ProbeConfig::from_env();
    let client = reqwest::Client::builder().build()?;

    process_command(&client, &config, &args).await
}
