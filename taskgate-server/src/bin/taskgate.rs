//! REST gateway entry point

use clap::Parser;
use std::error::Error;
use taskgate_server::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    taskgate_server::run(Cli::parse()).await
}
