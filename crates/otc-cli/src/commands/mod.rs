pub mod config;
pub mod report;

use otc_config::OtcConfig;

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: &Commands,
    config: &OtcConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => report::handle(args, config, flags).await,
        Commands::Config => config::handle(config, flags),
    }
}
