use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use repo_relay_server::server::{run_relay_server, AppContext};

use super::{Command, CommandContext};

/// Start server
#[derive(Parser)]
pub(crate) struct ServerCommand;

#[async_trait]
impl Command for ServerCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        tokio::task::spawn_local(async move {
            let context = AppContext::new_with_adapters(ctx.config, ctx.api_service);
            run_relay_server(context).await
        })
        .await??;

        Ok(())
    }
}
