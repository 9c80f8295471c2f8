use std::time::Duration;

use log::{trace, warn};
use serde_json::Value;

#[cfg(any(feature = "async", feature = "sync"))]
use crate::client::request_builder;
use crate::{
    client::request_builder::{BaseRequestBuilder, CatalogItemRequestBuilder},
    error::{Error, Result},
};

/// JSON pointer to an album's tracks in a catalog album response.
const ALBUM_TRACKS_POINTER: &str = "/data/0/relationships/tracks/data";

/// A builder for retrieving the IDs of the songs on a catalog album. New instances are returned by the
/// [song_ids_for_album-function](crate::client::CatalogClient::song_ids_for_album) in
/// [CatalogClient](crate::client::CatalogClient).
///
/// This sends the same request as [catalog_album](crate::client::CatalogClient::catalog_album) and extracts the song
/// IDs from the album's `tracks` relationship in the response.
#[derive(Debug, Clone)]
pub struct SongIdsRequestBuilder<TClient> {
    album: CatalogItemRequestBuilder<TClient>,
    album_id: String,
}

impl<TClient> SongIdsRequestBuilder<TClient> {
    pub(crate) fn new(album: CatalogItemRequestBuilder<TClient>, album_id: String) -> Self {
        Self { album, album_id }
    }

    /// Set a deadline for the request. The value is passed on to the HTTP collaborator as-is.
    pub fn timeout(self, timeout: Duration) -> Self {
        Self {
            album: self.album.timeout(timeout),
            ..self
        }
    }

    /// Returns the path and query string this request would be sent to, relative to the API base URL.
    pub fn path_and_query(&self) -> String {
        self.album.path_and_query()
    }
}

#[cfg(feature = "async")]
impl<TClient> SongIdsRequestBuilder<TClient>
where
    TClient: crate::client::private::SendApiRequestAsync,
{
    /// Send the request and return the song IDs on the album, in album order.
    pub async fn send_async(self) -> Result<Vec<String>> {
        let (client, request) = request_builder::prepare(self.album);
        let album = client.send_api_request_async(request).await?;

        song_ids_from_album_response(&album, &self.album_id)
    }
}

#[cfg(feature = "sync")]
impl<TClient> SongIdsRequestBuilder<TClient>
where
    TClient: crate::client::private::SendApiRequestSync,
{
    /// Send the request and return the song IDs on the album, in album order.
    pub fn send_sync(self) -> Result<Vec<String>> {
        let (client, request) = request_builder::prepare(self.album);
        let album = client.send_api_request_sync(request)?;

        song_ids_from_album_response(&album, &self.album_id)
    }
}

/// Extracts the song IDs from a catalog album response. Tracks without an ID are skipped.
pub fn song_ids_from_album_response(album: &Value, album_id: &str) -> Result<Vec<String>> {
    let Some(tracks) = album.pointer(ALBUM_TRACKS_POINTER).and_then(Value::as_array) else {
        warn!("Album response for {album_id} is missing the album's tracks");
        return Err(Error::MalformedResponse(album_id.to_owned()));
    };

    let song_ids: Vec<String> = tracks
        .iter()
        .filter_map(|track| match track.get("id") {
            Some(Value::String(id)) => Some(id.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        })
        .collect();

    trace!("Song IDs for album {album_id}: {song_ids:?}");
    Ok(song_ids)
}
