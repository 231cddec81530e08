use std::collections::BTreeMap;

use crate::cli::{EditProfileArgs, ProfileCommand};
use crate::context::AppContext;
use crate::error::AppResult;
use crate::profile::{EditOutcome, ProfileField, ProfileInput, edit_profile};

pub async fn run(ctx: &AppContext, command: ProfileCommand) -> AppResult<()> {
    match command {
        ProfileCommand::Show => {
            let user = ctx.current_user()?;
            let inputs = ProfileInput::prefilled(&user);
            ctx.output.emit(&format_form(&inputs, &BTreeMap::new()), &inputs)
        }
        ProfileCommand::Edit(args) => {
            let user = ctx.current_user()?;
            let input = overlay(ProfileInput::prefilled(&user), args);
            let validator = ctx.profile_validator();
            let outcome = edit_profile(&validator, &ctx.store, user, input).await?;
            ctx.output.emit(&format_outcome(&outcome), &outcome)
        }
    }
}

/// Flags that were not passed keep the value already shown in the form.
fn overlay(mut input: ProfileInput, args: EditProfileArgs) -> ProfileInput {
    let EditProfileArgs {
        first_name,
        last_name,
        email,
        avatar,
        bio,
        born_date,
    } = args;

    for (slot, value) in [
        (&mut input.first_name, first_name),
        (&mut input.last_name, last_name),
        (&mut input.email, email),
        (&mut input.avatar, avatar),
        (&mut input.bio, bio),
        (&mut input.born_date, born_date),
    ] {
        if let Some(value) = value {
            *slot = value;
        }
    }

    input
}

fn format_form(inputs: &ProfileInput, alerts: &BTreeMap<ProfileField, String>) -> String {
    let values = [
        (ProfileField::FirstName, &inputs.first_name),
        (ProfileField::LastName, &inputs.last_name),
        (ProfileField::Email, &inputs.email),
        (ProfileField::Avatar, &inputs.avatar),
        (ProfileField::Bio, &inputs.bio),
        (ProfileField::BornDate, &inputs.born_date),
    ];

    let mut lines = Vec::new();
    for (field, value) in values {
        lines.push(format!("{field}: {value}"));
        if let Some(alert) = alerts.get(&field) {
            lines.push(format!("  ! {alert}"));
        }
    }
    lines.join("\n")
}

fn format_outcome(outcome: &EditOutcome) -> String {
    match outcome {
        EditOutcome::Rejected(rejection) => {
            let form = format_form(&rejection.inputs, &rejection.alerts);
            format!("profile not saved\n{form}")
        }
        EditOutcome::Updated(update) if update.updated_fields.is_empty() => {
            format!("profile of {} unchanged", update.user.user_name)
        }
        EditOutcome::Updated(update) => {
            let fields = update
                .updated_fields
                .iter()
                .map(|field| field.key())
                .collect::<Vec<_>>()
                .join(", ");
            format!("profile of {} updated: {fields}", update.user.user_name)
        }
    }
}
