use std::path::PathBuf;
use std::process::ExitCode;

/// Usage: `closet [config.toml]`
#[tokio::main]
async fn main() -> ExitCode {
    let config_path = std::env::args_os().nth(1).map(PathBuf::from);

    let report = match closet_lib::run(config_path.as_deref()).await {
        Ok(report) => report,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "closet failed to start");
            eprintln!("closet: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("closet: failed to render report: {err}");
            ExitCode::FAILURE
        }
    }
}
