pub mod playlist;
pub mod user;

pub use playlist::Playlist;
pub use user::User;
