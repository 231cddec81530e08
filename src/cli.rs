use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "musicraze", version, about = "MusiCraze profile and playlist tools")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to the store file")]
    pub store: Option<PathBuf>,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Session(SessionArgs),
    Profile(ProfileArgs),
    Users(UsersArgs),
    Playlist(PlaylistArgs),
}

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    Login(LoginArgs),
    Status,
    Logout,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(help = "User id to sign in as")]
    pub user_id: u64,
}

#[derive(Debug, Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Show,
    Edit(EditProfileArgs),
}

#[derive(Debug, Args)]
pub struct EditProfileArgs {
    #[arg(long, allow_hyphen_values = true, help = "First name")]
    pub first_name: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Last name")]
    pub last_name: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Email address")]
    pub email: Option<String>,
    #[arg(long, help = "Avatar image URL")]
    pub avatar: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Free-form bio, empty to clear")]
    pub bio: Option<String>,
    #[arg(long, help = "Born date as yyyy-MM-dd")]
    pub born_date: Option<String>,
}

#[derive(Debug, Args)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub command: UsersCommand,
}

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    Find(FindUsersArgs),
}

#[derive(Debug, Args)]
pub struct FindUsersArgs {
    #[arg(help = "First name to search for")]
    pub first_name: Option<String>,
}

#[derive(Debug, Args)]
pub struct PlaylistArgs {
    #[command(subcommand)]
    pub command: PlaylistCommand,
}

#[derive(Debug, Subcommand)]
pub enum PlaylistCommand {
    Show(ShowPlaylistArgs),
    Update(UpdatePlaylistArgs),
}

#[derive(Debug, Args)]
pub struct ShowPlaylistArgs {
    #[arg(help = "Playlist id")]
    pub playlist_id: u64,
}

#[derive(Debug, Args)]
pub struct UpdatePlaylistArgs {
    #[arg(help = "Playlist id")]
    pub playlist_id: u64,
    #[arg(long, allow_hyphen_values = true, help = "New playlist name")]
    pub name: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "New playlist description")]
    pub description: Option<String>,
}
