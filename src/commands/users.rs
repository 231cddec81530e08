use crate::cli::UsersCommand;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::search::{self, UserSearch};

pub fn run(ctx: &AppContext, command: UsersCommand) -> AppResult<()> {
    match command {
        UsersCommand::Find(args) => {
            ctx.current_user()?;
            let result = search::find_users(&ctx.store, args.first_name.as_deref())?;
            ctx.output.emit(&format_search(&result), &result)
        }
    }
}

fn format_search(result: &UserSearch) -> String {
    let mut lines = vec![result.message.clone()];
    if result.previous_first_name.is_some() && result.users.is_empty() {
        lines.push("0 users".to_string());
    }

    for (index, user) in result.users.iter().enumerate() {
        lines.push(format!(
            "{}. {} ({}) <{}>",
            index + 1,
            user.full_name(),
            user.user_name,
            user.email
        ));
    }

    lines.join("\n")
}
