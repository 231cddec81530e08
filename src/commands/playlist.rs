use crate::cli::PlaylistCommand;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::model::Playlist;
use crate::playlist::{self, PlaylistInfoUpdate};

pub fn run(ctx: &AppContext, command: PlaylistCommand) -> AppResult<()> {
    let playlist = match command {
        PlaylistCommand::Show(args) => playlist::playlist_info(&ctx.store, args.playlist_id)?,
        PlaylistCommand::Update(args) => {
            let update = PlaylistInfoUpdate {
                name: args.name,
                description: args.description,
            };
            playlist::update_playlist_info(&ctx.store, args.playlist_id, update)?
        }
    };

    ctx.output.emit(&format_playlist(&playlist), &playlist)
}

fn format_playlist(playlist: &Playlist) -> String {
    let description = if playlist.description.is_empty() {
        "(no description)"
    } else {
        playlist.description.as_str()
    };

    format!("{}. {}\n   {}", playlist.id, playlist.name, description)
}
