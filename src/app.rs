use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        store,
        json,
        verbose: _,
        command,
    } = cli;

    let ctx = AppContext::bootstrap(store, json)?;

    match command {
        Command::Session(args) => commands::session::run(&ctx, args.command),
        Command::Profile(args) => commands::profile::run(&ctx, args.command).await,
        Command::Users(args) => commands::users::run(&ctx, args.command),
        Command::Playlist(args) => commands::playlist::run(&ctx, args.command),
    }
}
