pub mod playlist;
pub mod profile;
pub mod session;
pub mod users;
