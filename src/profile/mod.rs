pub mod avatar;
pub mod edit;
pub mod field;
pub mod input;
pub mod updater;
pub mod validator;

pub use avatar::{HttpImageVerifier, ImageVerifier};
pub use edit::{EditOutcome, edit_profile};
pub use field::ProfileField;
pub use input::{ProfileInput, trim};
pub use updater::{ProfileChange, ProfileUpdate, ProfileUpdater};
pub use validator::{ProfileValidator, Rejection, ValidProfile, Validation};
