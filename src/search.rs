use serde::Serialize;

use crate::model::User;
use crate::store::{StoreResult, UserStore};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a valid name.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSearch {
    pub message: String,
    pub previous_first_name: Option<String>,
    pub users: Vec<User>,
}

/// Looks users up by first name. A missing or blank name is answered with a
/// prompt and no results rather than an error.
pub fn find_users<S: UserStore + ?Sized>(
    store: &S,
    first_name: Option<&str>,
) -> StoreResult<UserSearch> {
    let Some(first_name) = first_name.map(str::trim).filter(|name| !name.is_empty()) else {
        return Ok(UserSearch {
            message: EMPTY_QUERY_MESSAGE.to_string(),
            previous_first_name: None,
            users: Vec::new(),
        });
    };

    let users = store.find_by_first_name(first_name)?;
    tracing::debug!(first_name, matches = users.len(), "user search");

    Ok(UserSearch {
        message: format!("Displaying results for {first_name}"),
        previous_first_name: Some(first_name.to_string()),
        users,
    })
}
