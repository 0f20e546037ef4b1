//! Dapper Dasher entry point

use std::process::ExitCode;

use dapper_dasher::Settings;
use dapper_dasher::platform::native;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dapper Dasher starting...");

    let settings = Settings::load();
    match native::run(settings) {
        Ok(()) => {
            log::info!("Goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Fatal: {}", e);
            ExitCode::FAILURE
        }
    }
}
