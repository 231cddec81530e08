use serde::Serialize;

use crate::cli::SessionCommand;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::model::User;
use crate::session::{self, SessionStore};

#[derive(Debug, Serialize)]
struct SessionStatus {
    logged_in: bool,
    user: Option<User>,
}

pub fn run(ctx: &AppContext, command: SessionCommand) -> AppResult<()> {
    match command {
        SessionCommand::Login(args) => {
            let user = session::login(&ctx.sessions, &ctx.store, args.user_id)?;
            let text = format!("logged in as {} ({})", user.user_name, user.id);
            ctx.output.emit(&text, &status(Some(user)))
        }
        SessionCommand::Status => {
            let user = match ctx.current_user() {
                Ok(user) => Some(user),
                Err(AppError::NotLoggedIn) => None,
                Err(err) => return Err(err),
            };

            let text = match user.as_ref() {
                Some(user) => format!("logged in as {} ({})", user.user_name, user.id),
                None => "logged out".to_string(),
            };
            ctx.output.emit(&text, &status(user))
        }
        SessionCommand::Logout => {
            ctx.sessions.clear()?;
            tracing::info!("session cleared");
            ctx.output.emit("logged out", &status(None))
        }
    }
}

fn status(user: Option<User>) -> SessionStatus {
    SessionStatus {
        logged_in: user.is_some(),
        user,
    }
}
