use crate::error::{AppError, AppResult};
use crate::model::Playlist;
use crate::store::PlaylistStore;

/// New values for a playlist; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistInfoUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub fn playlist_info<S: PlaylistStore + ?Sized>(store: &S, id: u64) -> AppResult<Playlist> {
    store.get_playlist(id)?.ok_or(AppError::NotFound {
        kind: "playlist",
        id,
    })
}

/// Writes the name and then the description, each as its own store call,
/// and returns the playlist as re-read afterwards.
pub fn update_playlist_info<S: PlaylistStore + ?Sized>(
    store: &S,
    id: u64,
    update: PlaylistInfoUpdate,
) -> AppResult<Playlist> {
    let mut playlist = playlist_info(store, id)?;

    if let Some(name) = update.name.as_deref() {
        playlist = store.update_playlist_name(&playlist, name)?;
        tracing::info!(playlist_id = id, "playlist name updated");
    }

    if let Some(description) = update.description.as_deref() {
        playlist = store.update_description(&playlist, description)?;
        tracing::info!(playlist_id = id, "playlist description updated");
    }

    playlist_info(store, playlist.id)
}
