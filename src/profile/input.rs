use std::collections::HashMap;

use serde::Serialize;

use crate::model::User;

use super::ProfileField;

/// Raw profile form values as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
    pub bio: String,
    pub born_date: String,
}

/// Absent values become empty; present ones lose surrounding whitespace.
pub fn trim(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

impl ProfileInput {
    /// Builds the input from form parameters keyed by field name.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let value = |field: ProfileField| trim(params.get(field.key()).map(String::as_str));

        Self {
            first_name: value(ProfileField::FirstName),
            last_name: value(ProfileField::LastName),
            email: value(ProfileField::Email),
            avatar: value(ProfileField::Avatar),
            bio: value(ProfileField::Bio),
            born_date: value(ProfileField::BornDate),
        }
    }

    /// The form as first shown to a user: their current values.
    pub fn prefilled(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            bio: user.bio.clone(),
            born_date: user.born_date_str(),
        }
    }

    pub fn trimmed(self) -> Self {
        Self {
            first_name: trim(Some(&self.first_name)),
            last_name: trim(Some(&self.last_name)),
            email: trim(Some(&self.email)),
            avatar: trim(Some(&self.avatar)),
            bio: trim(Some(&self.bio)),
            born_date: trim(Some(&self.born_date)),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn trims_absent_and_padded_values() {
        assert_eq!(trim(None), "");
        assert_eq!(trim(Some(" a ")), "a");
        assert_eq!(trim(Some("\t\n")), "");
    }

    #[test]
    fn missing_params_become_empty_strings() {
        let params = HashMap::from([
            ("firstName".to_string(), "  Jo ".to_string()),
            ("bornDate".to_string(), "2000-01-01".to_string()),
        ]);

        let input = ProfileInput::from_params(&params);
        assert_eq!(input.first_name, "Jo");
        assert_eq!(input.last_name, "");
        assert_eq!(input.bio, "");
        assert_eq!(input.born_date, "2000-01-01");
    }

    #[test]
    fn prefills_from_current_user() {
        let user = User {
            id: 1,
            user_name: "jolee".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            email: "jo@x.com".to_string(),
            avatar: "http://img/a.png".to_string(),
            bio: "hi".to_string(),
            born_date: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
        };

        let input = ProfileInput::prefilled(&user);
        assert_eq!(input.last_name, "Lee");
        assert_eq!(input.born_date, "2000-01-01");
    }
}
