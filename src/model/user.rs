use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const BORN_DATE_FORMAT: &str = "%Y-%m-%d";

/// A registered user as held by the store. An empty `bio` means "unset".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub user_name: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: String,
    #[serde(default)]
    pub bio: String,
    pub born_date: NaiveDate,
}

impl User {
    pub fn born_date_str(&self) -> String {
        self.born_date.format(BORN_DATE_FORMAT).to_string()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_born_date_as_iso() {
        let user = User {
            id: 1,
            user_name: "jo".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Lee".to_string(),
            email: "jo@x.com".to_string(),
            avatar: "http://img/a.png".to_string(),
            bio: String::new(),
            born_date: NaiveDate::from_ymd_opt(2000, 1, 9).expect("valid date"),
        };

        assert_eq!(user.born_date_str(), "2000-01-09");
        assert_eq!(user.full_name(), "Jo Lee");
    }
}
