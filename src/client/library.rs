use log::{debug, warn};
use reqwest::Method;

use super::{
    private, API_LIBRARY_ALBUMS_ENDPOINT, API_LIBRARY_ARTISTS_ENDPOINT, API_LIBRARY_ENDPOINT,
    API_LIBRARY_MUSIC_VIDEOS_ENDPOINT, API_LIBRARY_PLAYLISTS_ENDPOINT, API_RECENTLY_PLAYED_ENDPOINT,
    API_USER_STOREFRONT_ENDPOINT,
};
use crate::{
    client::{
        object::{self, CreatePlaylistBody, ResourceIdentifiers},
        request_builder::{CatalogItemRequestBuilder, PagedRequestBuilder, RequestBuilder},
    },
    error::{Error, Result},
    model::{
        request::{LibraryPlaylistCreationRequest, LibraryResourceAddRequest},
        resource::LibraryResource,
    },
};

const RECENTLY_PLAYED_DEFAULT_LIMIT: u32 = 5;
const RECENTLY_PLAYED_MAX_LIMIT: u32 = 10;

const LIBRARY_DEFAULT_LIMIT: u32 = 25;
const LIBRARY_MAX_LIMIT: u32 = 100;

/// All personalised endpoints. The functions in this trait require a music user token in addition to the developer
/// token, since they're specific to a certain user. All clients implement this trait; sending a request without a music
/// user token will fail with an error from the API.
pub trait LibraryClient
where
    Self: Clone + Sized + private::Sealed,
{
    /// Fetch the user's storefront.
    fn user_storefront(&self) -> CatalogItemRequestBuilder<Self> {
        CatalogItemRequestBuilder::new(RequestBuilder::new(
            Method::GET,
            API_USER_STOREFRONT_ENDPOINT,
            self.clone(),
        ))
    }

    /// Fetch the resources the user has recently played.
    ///
    /// Default limit: 5. Maximum: 10.
    fn recently_played(&self) -> PagedRequestBuilder<Self> {
        PagedRequestBuilder::new(
            RequestBuilder::new(Method::GET, API_RECENTLY_PLAYED_ENDPOINT, self.clone()),
            RECENTLY_PLAYED_DEFAULT_LIMIT,
            RECENTLY_PLAYED_MAX_LIMIT,
        )
    }

    /// Fetch all the playlists in the user's library in alphabetical order.
    ///
    /// Default limit: 25. Maximum: 100.
    fn library_playlists(&self) -> PagedRequestBuilder<Self> {
        library_collection(self, API_LIBRARY_PLAYLISTS_ENDPOINT)
    }

    /// Fetch all the albums in the user's library in alphabetical order.
    ///
    /// Default limit: 25. Maximum: 100.
    fn library_albums(&self) -> PagedRequestBuilder<Self> {
        library_collection(self, API_LIBRARY_ALBUMS_ENDPOINT)
    }

    /// Fetch all the artists in the user's library in alphabetical order.
    ///
    /// Default limit: 25. Maximum: 100.
    fn library_artists(&self) -> PagedRequestBuilder<Self> {
        library_collection(self, API_LIBRARY_ARTISTS_ENDPOINT)
    }

    /// Fetch all the music videos in the user's library in alphabetical order.
    ///
    /// Default limit: 25. Maximum: 100.
    fn library_music_videos(&self) -> PagedRequestBuilder<Self> {
        library_collection(self, API_LIBRARY_MUSIC_VIDEOS_ENDPOINT)
    }

    /// Add catalog resources to the user's library.
    ///
    /// The resources are sent grouped by their kind in one request, e.g. `ids[songs]=1,2&ids[albums]=3`. An empty
    /// request is sent to `me/library` with no query string at all, not even a trailing `?`.
    fn add_resources_to_library(&self, request: &LibraryResourceAddRequest) -> RequestBuilder<Self> {
        let mut builder = RequestBuilder::new_with_raw_body(
            Method::POST,
            API_LIBRARY_ENDPOINT,
            object::ADD_TO_LIBRARY_BODY,
            self.clone(),
        );

        for (kind, ids) in object::group_library_resources(request) {
            builder.query_mut().append(object::library_ids_query_key(kind), ids);
        }

        builder
    }

    /// Create a new playlist in the user's library.
    ///
    /// The playlist's tracks are sent only if the request has any.
    fn create_library_playlist(&self, playlist: &LibraryPlaylistCreationRequest) -> Result<RequestBuilder<Self>> {
        debug!(
            "Creating library playlist {:?} with {} tracks",
            playlist.name(),
            playlist.tracks().len()
        );

        RequestBuilder::new_with_json_body(
            Method::POST,
            API_LIBRARY_PLAYLISTS_ENDPOINT,
            &CreatePlaylistBody::from(playlist),
            self.clone(),
        )
    }

    /// Add tracks to a playlist in the user's library.
    ///
    /// The tracks may be given as [LibraryResources](LibraryResource) or as anything that can be converted into one,
    /// such as `{"id": "...", "type": "..."}` JSON objects or `(kind, id)` string pairs. If any of the tracks fail to
    /// convert, an error is returned and none of the tracks are sent. With no tracks, the body is `{"data":[]}`
    /// rather than a bare empty array.
    fn add_tracks_to_library_playlist<I, T>(&self, playlist_id: &str, tracks: I) -> Result<RequestBuilder<Self>>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<LibraryResource>,
        Error: From<<T as TryInto<LibraryResource>>::Error>,
    {
        let tracks = tracks
            .into_iter()
            .map(|track| track.try_into().map_err(Error::from))
            .collect::<Result<Vec<LibraryResource>>>()
            .map_err(|err| {
                warn!("Refusing to add tracks to library playlist {playlist_id}: {err}");
                err
            })?;

        RequestBuilder::new_with_json_body(
            Method::POST,
            format!("{API_LIBRARY_PLAYLISTS_ENDPOINT}/{playlist_id}/tracks"),
            &ResourceIdentifiers::from(tracks.as_slice()),
            self.clone(),
        )
    }
}

fn library_collection<C>(client: &C, path: &'static str) -> PagedRequestBuilder<C>
where
    C: Clone,
{
    PagedRequestBuilder::new(
        RequestBuilder::new(Method::GET, path, client.clone()),
        LIBRARY_DEFAULT_LIMIT,
        LIBRARY_MAX_LIMIT,
    )
}
