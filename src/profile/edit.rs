use serde::Serialize;

use crate::model::User;
use crate::store::{StoreResult, UserStore};

use super::avatar::ImageVerifier;
use super::updater::{ProfileUpdate, ProfileUpdater};
use super::validator::{ProfileValidator, Rejection, Validation};
use super::ProfileInput;

/// Result of one profile form submission. Store failures are returned as
/// errors instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EditOutcome {
    Rejected(Rejection),
    Updated(ProfileUpdate),
}

pub async fn edit_profile<V, S>(
    validator: &ProfileValidator<V>,
    store: &S,
    current: User,
    input: ProfileInput,
) -> StoreResult<EditOutcome>
where
    V: ImageVerifier,
    S: UserStore + ?Sized,
{
    match validator.validate(input).await {
        Validation::Rejected(rejection) => Ok(EditOutcome::Rejected(rejection)),
        Validation::Accepted(profile) => {
            let update = ProfileUpdater::new(store).apply(current, profile)?;
            Ok(EditOutcome::Updated(update))
        }
    }
}
