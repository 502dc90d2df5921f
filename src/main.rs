use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use soloforge::core::config;
use soloforge::core::error::ShellError;
use soloforge::tui;
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "soloforge",
    version,
    about = "Keyboard-driven menu shell for solo tabletop roleplaying"
)]
struct Args {}

fn main() -> ExitCode {
    let _args = Args::parse();
    dotenv::dotenv().ok();

    init_logging();
    log::info!("SoloForge starting up");

    match run() {
        Ok(()) => {
            log::info!("SoloForge exiting");
            println!("Goodbye!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("SoloForge failed: {}", e);
            eprintln!("soloforge: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ShellError> {
    let file_config = config::load_config()?;
    let resolved = config::resolve(&file_config);
    log::info!("Session defaults: {:?}", resolved);
    tui::run(&resolved)
}

/// File logger - writes to soloforge.log in current directory.
/// Level from SOLOFORGE_LOG, default debug.
fn init_logging() {
    let level = std::env::var("SOLOFORGE_LOG")
        .ok()
        .and_then(|raw| raw.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Debug);

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("soloforge.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}
