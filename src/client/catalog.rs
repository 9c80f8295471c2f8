use log::warn;
use reqwest::Method;

use super::{private, API_CATALOG_ENDPOINT, API_STOREFRONTS_ENDPOINT};
use crate::{
    client::{
        object,
        request_builder::{
            CatalogItemRequestBuilder, ChartsRequestBuilder, PagedRequestBuilder, RequestBuilder, SearchBuilder,
            SongIdsRequestBuilder,
        },
    },
    error::Result,
    model::CuratorRelationship,
};

/// Default and maximum limits for a curator's relationship.
const CURATOR_RELATIONSHIP_DEFAULT_LIMIT: u32 = 10;
const CURATOR_RELATIONSHIP_MAX_LIMIT: u32 = 100;

/// All catalog and storefront endpoints. These only require a developer token. All clients implement this trait.
///
/// Storefronts are identified by ISO 3166 alpha-2 country codes, such as `us`. The storefront and resource IDs given
/// to these functions are inserted into the request path as-is.
pub trait CatalogClient
where
    Self: Clone + Sized + private::Sealed,
{
    /// Fetch a single storefront by using its identifier.
    fn storefront(&self, id: &str) -> CatalogItemRequestBuilder<Self> {
        catalog_item(self, format!("{API_STOREFRONTS_ENDPOINT}/{id}"))
    }

    /// Fetch all the storefronts in alphabetical order.
    fn storefronts(&self) -> CatalogItemRequestBuilder<Self> {
        catalog_item(self, API_STOREFRONTS_ENDPOINT)
    }

    /// Fetch one or more charts from a storefront's catalog.
    ///
    /// The kinds of charts are chosen with the [`types`-function](ChartsRequestBuilder::types) in the returned
    /// builder.
    fn catalog_charts(&self, storefront: &str) -> ChartsRequestBuilder<Self> {
        ChartsRequestBuilder::new(RequestBuilder::new(
            Method::GET,
            format!("{API_CATALOG_ENDPOINT}/{storefront}/charts"),
            self.clone(),
        ))
    }

    /// Fetch a catalog playlist by using its identifier.
    fn catalog_playlist(&self, storefront: &str, playlist_id: &str) -> CatalogItemRequestBuilder<Self> {
        catalog_item(self, format!("{API_CATALOG_ENDPOINT}/{storefront}/playlists/{playlist_id}"))
    }

    /// Fetch a catalog album by using its identifier.
    fn catalog_album(&self, storefront: &str, album_id: &str) -> CatalogItemRequestBuilder<Self> {
        catalog_item(self, format!("{API_CATALOG_ENDPOINT}/{storefront}/albums/{album_id}"))
    }

    /// Fetch catalog albums by their Universal Product Code.
    fn catalog_albums_by_upc(&self, storefront: &str, upc: &str) -> CatalogItemRequestBuilder<Self> {
        CatalogItemRequestBuilder::new(
            RequestBuilder::new(
                Method::GET,
                format!("{API_CATALOG_ENDPOINT}/{storefront}/albums"),
                self.clone(),
            )
            .append_query(object::FILTER_UPC_QUERY, upc),
        )
    }

    /// Fetch a catalog song by using its identifier.
    fn catalog_song(&self, storefront: &str, song_id: &str) -> CatalogItemRequestBuilder<Self> {
        catalog_item(self, format!("{API_CATALOG_ENDPOINT}/{storefront}/songs/{song_id}"))
    }

    /// Fetch catalog songs by their International Standard Recording Code.
    fn catalog_songs_by_isrc(&self, storefront: &str, isrc: &str) -> CatalogItemRequestBuilder<Self> {
        CatalogItemRequestBuilder::new(
            RequestBuilder::new(
                Method::GET,
                format!("{API_CATALOG_ENDPOINT}/{storefront}/songs"),
                self.clone(),
            )
            .append_query(object::FILTER_ISRC_QUERY, isrc),
        )
    }

    /// Fetch a catalog artist by using the artist's identifier.
    fn catalog_artist(&self, storefront: &str, artist_id: &str) -> CatalogItemRequestBuilder<Self> {
        catalog_item(self, format!("{API_CATALOG_ENDPOINT}/{storefront}/artists/{artist_id}"))
    }

    /// Fetch a catalog curator by using the curator's identifier.
    fn catalog_curator(&self, storefront: &str, curator_id: &str) -> CatalogItemRequestBuilder<Self> {
        catalog_item(self, format!("{API_CATALOG_ENDPOINT}/{storefront}/curators/{curator_id}"))
    }

    /// Fetch a catalog curator's relationship directly by its name.
    ///
    /// Only the `playlists` relationship is supported; any other value returns an
    /// [Error::InvalidRelationship](crate::error::Error::InvalidRelationship) without sending anything.
    ///
    /// Default limit: 10. Maximum: 100.
    fn catalog_curator_relationship(
        &self,
        storefront: &str,
        curator_id: &str,
        relationship: &str,
    ) -> Result<PagedRequestBuilder<Self>> {
        let relationship: CuratorRelationship = relationship.parse().map_err(|err| {
            warn!("Refusing to request curator relationship: {err}");
            err
        })?;

        Ok(PagedRequestBuilder::new(
            RequestBuilder::new(
                Method::GET,
                format!(
                    "{API_CATALOG_ENDPOINT}/{storefront}/curators/{curator_id}/{}",
                    relationship.as_str()
                ),
                self.clone(),
            ),
            CURATOR_RELATIONSHIP_DEFAULT_LIMIT,
            CURATOR_RELATIONSHIP_MAX_LIMIT,
        ))
    }

    /// Search a storefront's catalog.
    ///
    /// `term` should have its words joined with `+` characters, and `types` is a comma-separated list of the kinds of
    /// resources to include in the results, such as `artists,albums,songs`. Both are sent as given, except that
    /// characters which would break the query string (spaces, `&`, `#`, non-ASCII and the like) are percent-encoded.
    /// Already percent-encoded terms aren't decoded first, so `%20` is sent as-is but a literal space becomes `%20`.
    fn search<T, Y>(&self, storefront: &str, term: T, types: Y) -> SearchBuilder<Self>
    where
        T: Into<String>,
        Y: Into<String>,
    {
        SearchBuilder::new(
            RequestBuilder::new(
                Method::GET,
                format!("{API_CATALOG_ENDPOINT}/{storefront}/search"),
                self.clone(),
            ),
            term.into(),
            types.into(),
        )
    }

    /// Get the IDs of the songs on a catalog album, in album order.
    ///
    /// This fetches the album like [catalog_album](Self::catalog_album) does and returns an
    /// [Error::MalformedResponse](crate::error::Error::MalformedResponse) if the response doesn't contain the album's
    /// tracks.
    fn song_ids_for_album(&self, storefront: &str, album_id: &str) -> SongIdsRequestBuilder<Self> {
        SongIdsRequestBuilder::new(self.catalog_album(storefront, album_id), album_id.to_owned())
    }
}

fn catalog_item<C, S>(client: &C, path: S) -> CatalogItemRequestBuilder<C>
where
    C: Clone,
    S: Into<std::borrow::Cow<'static, str>>,
{
    CatalogItemRequestBuilder::new(RequestBuilder::new(Method::GET, path, client.clone()))
}
