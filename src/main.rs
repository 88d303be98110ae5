use std::process::ExitCode;

use project_card_action::config::Config;
use project_card_action::github::OctocrabClient;
use project_card_action::logging::{self, LogSettings};
use project_card_action::runner;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init(LogSettings::from_env());

    let status = match Config::from_env() {
        Ok(config) => runner::execute(&config, OctocrabClient::from_token).await,
        Err(e) => runner::config_failed(&e),
    };

    status.exit_code()
}
