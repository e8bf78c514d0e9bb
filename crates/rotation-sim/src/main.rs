use std::path::PathBuf;
use std::process::ExitCode;

use rotation_core::config::RotationConfig;
use rotation_core::errors::RotationErrorCode;
use rotation_core::tracing::setup::init_tracing_with_default;

fn main() -> ExitCode {
    // Optional first argument: directory holding `rotation.toml`.
    let root = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match RotationConfig::load(&root, None) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            return ExitCode::FAILURE;
        }
    };
    init_tracing_with_default(config.logging.effective_filter());

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match rotation_sim::run(&config, &mut out) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "rotation simulation failed");
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
