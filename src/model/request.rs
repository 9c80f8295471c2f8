//! Payloads for the library write endpoints.
//!
//! Both request types only hold resources; turning them into the wire format is done by the
//! [LibraryClient](crate::client::LibraryClient) when the request is built.

use super::resource::LibraryResource;

/// A collection of resources to add to the user's library with
/// [add_resources_to_library](crate::client::LibraryClient::add_resources_to_library).
///
/// The resources are kept in separate lists only for convenience. The request sent to the API groups them by each
/// resource's own kind regardless of the list it was added to.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LibraryResourceAddRequest {
    songs: Vec<LibraryResource>,
    albums: Vec<LibraryResource>,
    music_videos: Vec<LibraryResource>,
    playlists: Vec<LibraryResource>,
}

/// A new playlist in the user's library, created with
/// [create_library_playlist](crate::client::LibraryClient::create_library_playlist).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryPlaylistCreationRequest {
    name: String,
    description: String,
    tracks: Vec<LibraryResource>,
}

impl LibraryResourceAddRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_song(&mut self, song: LibraryResource) -> &mut Self {
        self.songs.push(song);
        self
    }

    pub fn add_album(&mut self, album: LibraryResource) -> &mut Self {
        self.albums.push(album);
        self
    }

    pub fn add_music_video(&mut self, music_video: LibraryResource) -> &mut Self {
        self.music_videos.push(music_video);
        self
    }

    pub fn add_playlist(&mut self, playlist: LibraryResource) -> &mut Self {
        self.playlists.push(playlist);
        self
    }

    pub fn songs(&self) -> &[LibraryResource] {
        &self.songs
    }

    pub fn albums(&self) -> &[LibraryResource] {
        &self.albums
    }

    pub fn music_videos(&self) -> &[LibraryResource] {
        &self.music_videos
    }

    pub fn playlists(&self) -> &[LibraryResource] {
        &self.playlists
    }

    /// Returns all resources in the request; songs, albums, music videos and playlists, in that order.
    pub fn resources(&self) -> impl Iterator<Item = &LibraryResource> {
        self.songs
            .iter()
            .chain(&self.albums)
            .chain(&self.music_videos)
            .chain(&self.playlists)
    }

    pub fn is_empty(&self) -> bool {
        self.resources().next().is_none()
    }
}

impl LibraryPlaylistCreationRequest {
    pub fn new<N, D>(name: N, description: D) -> Self
    where
        N: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            tracks: Vec::new(),
        }
    }

    /// Append a track to the playlist. The tracks will be in the playlist in the order they're added.
    pub fn add_track(&mut self, track: LibraryResource) -> &mut Self {
        self.tracks.push(track);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tracks(&self) -> &[LibraryResource] {
        &self.tracks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resource::ResourceKind;

    fn resource(kind: ResourceKind, id: &str) -> LibraryResource {
        LibraryResource::new(kind, id).unwrap()
    }

    #[test]
    fn add_request_keeps_lists_separate() {
        let mut request = LibraryResourceAddRequest::new();
        assert!(request.is_empty());

        request
            .add_playlist(resource(ResourceKind::Playlists, "pl.1"))
            .add_song(resource(ResourceKind::Songs, "1"))
            .add_song(resource(ResourceKind::Songs, "2"))
            .add_music_video(resource(ResourceKind::MusicVideos, "3"));

        assert!(!request.is_empty());
        assert_eq!(request.songs().len(), 2);
        assert!(request.albums().is_empty());
        assert_eq!(request.music_videos()[0].id(), "3");
        assert_eq!(request.playlists()[0].id(), "pl.1");

        let ids: Vec<_> = request.resources().map(LibraryResource::id).collect();
        assert_eq!(ids, ["1", "2", "3", "pl.1"]);
    }

    #[test]
    fn playlist_request_preserves_track_order() {
        let mut request = LibraryPlaylistCreationRequest::new("Road trip", "Songs for the car");
        request
            .add_track(resource(ResourceKind::Songs, "b"))
            .add_track(resource(ResourceKind::LibrarySongs, "a"));

        assert_eq!(request.name(), "Road trip");
        assert_eq!(request.description(), "Songs for the car");

        let ids: Vec<_> = request.tracks().iter().map(LibraryResource::id).collect();
        assert_eq!(ids, ["b", "a"]);
    }
}
