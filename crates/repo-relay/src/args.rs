use anyhow::Result;
use clap::Parser;
use repo_relay_config::Config;
use repo_relay_ghapi_github::GithubApiService;
use repo_relay_ghapi_interface::ApiService;

use crate::commands::{Command, CommandContext, SubCommand};

/// Command-line arguments.
#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let api_service: Box<dyn ApiService + Send + Sync + 'static> =
                Box::new(GithubApiService::new(config.clone())?);

            let ctx = CommandContext {
                config,
                api_service,
            };

            Self::parse_args_async(args, ctx).await
        };

        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
        })
        .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
