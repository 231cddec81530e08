use chrono::NaiveDate;
use serde::Serialize;

use crate::model::User;
use crate::store::{StoreResult, UserStore};

use super::{ProfileField, ValidProfile};

/// One validated field value headed for the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileChange {
    FirstName(String),
    LastName(String),
    Email(String),
    Avatar(String),
    Bio(String),
    BornDate(NaiveDate),
}

impl ProfileChange {
    pub fn field(&self) -> ProfileField {
        match self {
            ProfileChange::FirstName(_) => ProfileField::FirstName,
            ProfileChange::LastName(_) => ProfileField::LastName,
            ProfileChange::Email(_) => ProfileField::Email,
            ProfileChange::Avatar(_) => ProfileField::Avatar,
            ProfileChange::Bio(_) => ProfileField::Bio,
            ProfileChange::BornDate(_) => ProfileField::BornDate,
        }
    }

    pub fn differs_from(&self, user: &User) -> bool {
        match self {
            ProfileChange::FirstName(value) => user.first_name != *value,
            ProfileChange::LastName(value) => user.last_name != *value,
            ProfileChange::Email(value) => user.email != *value,
            ProfileChange::Avatar(value) => user.avatar != *value,
            ProfileChange::Bio(value) => user.bio != *value,
            ProfileChange::BornDate(value) => user.born_date != *value,
        }
    }

    fn persist<S: UserStore + ?Sized>(&self, store: &S, user: &User) -> StoreResult<User> {
        match self {
            ProfileChange::FirstName(value) => store.update_first_name(user, value),
            ProfileChange::LastName(value) => store.update_last_name(user, value),
            ProfileChange::Email(value) => store.update_email(user, value),
            ProfileChange::Avatar(value) => store.update_avatar(user, value),
            ProfileChange::Bio(value) => store.update_bio(user, value),
            ProfileChange::BornDate(value) => store.update_born_date(user, *value),
        }
    }
}

impl ValidProfile {
    pub fn into_changes(self) -> [ProfileChange; 6] {
        [
            ProfileChange::FirstName(self.first_name),
            ProfileChange::LastName(self.last_name),
            ProfileChange::Email(self.email),
            ProfileChange::Avatar(self.avatar),
            ProfileChange::Bio(self.bio),
            ProfileChange::BornDate(self.born_date),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub user: User,
    pub updated_fields: Vec<ProfileField>,
}

/// Writes only the fields that changed, one store call per field. Each
/// returned record is the base for the next comparison. A failed write stops
/// the run; earlier writes stay in place.
pub struct ProfileUpdater<'a, S: ?Sized> {
    store: &'a S,
}

impl<'a, S: UserStore + ?Sized> ProfileUpdater<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn apply(&self, current: User, profile: ValidProfile) -> StoreResult<ProfileUpdate> {
        let initial = ProfileUpdate {
            user: current,
            updated_fields: Vec::new(),
        };

        profile
            .into_changes()
            .into_iter()
            .try_fold(initial, |mut update, change| {
                if !change.differs_from(&update.user) {
                    return Ok(update);
                }

                let field = change.field();
                let user_id = update.user.id;
                update.user = change
                    .persist(self.store, &update.user)
                    .inspect_err(|err| {
                        tracing::error!(user_id, %field, error = %err, "profile update failed");
                    })?;
                tracing::info!(user_id, %field, "profile field updated");
                update.updated_fields.push(field);
                Ok(update)
            })
    }
}
