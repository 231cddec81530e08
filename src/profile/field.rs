use std::fmt;

use serde::Serialize;

/// Profile form fields, in the order updates are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
    Avatar,
    Bio,
    BornDate,
}

impl ProfileField {
    pub const ALL: [ProfileField; 6] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::Email,
        ProfileField::Avatar,
        ProfileField::Bio,
        ProfileField::BornDate,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProfileField::FirstName => "firstName",
            ProfileField::LastName => "lastName",
            ProfileField::Email => "email",
            ProfileField::Avatar => "avatar",
            ProfileField::Bio => "bio",
            ProfileField::BornDate => "bornDate",
        }
    }

    /// Message shown next to the field when its value is rejected. `Bio` is
    /// never rejected.
    pub fn alert(self) -> &'static str {
        match self {
            ProfileField::FirstName => "First name must contain only letters or spaces.",
            ProfileField::LastName => "Last name must contain only letters or spaces.",
            ProfileField::Email => "Email must be formatted correctly.",
            ProfileField::Avatar => "Avatar URL must be valid.",
            ProfileField::Bio => "",
            ProfileField::BornDate => {
                "Born date must be in format: yyyy-MM-dd. You must be 18+ to use MusiCraze."
            }
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
