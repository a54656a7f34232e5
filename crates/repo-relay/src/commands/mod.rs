//! Commands.

use anyhow::Result;
use async_trait::async_trait;
use clap::Subcommand;
use repo_relay_config::Config;
use repo_relay_ghapi_interface::ApiService;

use self::server::ServerCommand;

mod server;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
        }
    }
}
