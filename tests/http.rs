//! Tests for the reqwest-backed HTTP collaborators against a mock API server.

#![cfg(any(feature = "async", feature = "sync"))]

use ferrimusic::client::AppleMusicClientBuilder;
use reqwest::Url;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn api_base_url(server: &MockServer) -> Url {
    // without a trailing slash, which the builder adds
    Url::parse(&format!("{}/v1", server.uri())).unwrap()
}

#[cfg(feature = "async")]
mod async_client {
    use ferrimusic::{
        error::Error,
        model::{LibraryResource, LibraryResourceAddRequest, ResourceKind},
        prelude::*,
    };
    use serde_json::Value;
    use wiremock::matchers::{body_json, body_string, header_exists};

    use super::*;

    #[tokio::test]
    async fn developer_and_user_tokens_are_sent() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/me/library/playlists"))
            .and(query_param("offset", "0"))
            .and(query_param("limit", "25"))
            .and(query_param("include", ""))
            .and(header("Authorization", "Bearer developer"))
            .and(header("Music-User-Token", "user"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "id": "p.abc" }] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AppleMusicClientBuilder::new("developer")
            .music_user_token("user")
            .api_base_url(api_base_url(&server))
            .build_async();

        let playlists = client.library_playlists().send_async().await.unwrap();
        assert_eq!(playlists["data"][0]["id"], "p.abc");
    }

    #[tokio::test]
    async fn user_token_is_left_out_when_missing() {
        let server = MockServer::start().await;

        // the first mounted matching mock wins
        Mock::given(header_exists("Music-User-Token"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v1/storefronts/us"))
            .and(query_param("include", ""))
            .and(header("Authorization", "Bearer developer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [{ "id": "us" }] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = AppleMusicClientBuilder::new("developer")
            .api_base_url(api_base_url(&server))
            .build_async();

        let storefront = client.storefront("us").send_async().await.unwrap();
        assert_eq!(storefront["data"][0]["id"], "us");
    }

    #[tokio::test]
    async fn add_to_library_sends_raw_body() {
        let server = MockServer::start().await;

        Mock::given(header_exists("Content-Type"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/v1/me/library"))
            .and(query_param("ids[songs]", "203709340,201281527"))
            .and(body_string(" "))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let client = AppleMusicClientBuilder::new("developer")
            .music_user_token("user")
            .api_base_url(api_base_url(&server))
            .build_async();

        let mut request = LibraryResourceAddRequest::new();
        request
            .add_song(LibraryResource::new(ResourceKind::Songs, "203709340").unwrap())
            .add_song(LibraryResource::new(ResourceKind::Songs, "201281527").unwrap());

        let response = client.add_resources_to_library(&request).send_async().await.unwrap();
        assert_eq!(response, Value::Null);
    }

    #[tokio::test]
    async fn playlist_tracks_are_sent_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/me/library/playlists/p.abc/tracks"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({ "data": [{ "id": "900032829", "type": "songs" }] })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = AppleMusicClientBuilder::new("developer")
            .music_user_token("user")
            .api_base_url(api_base_url(&server))
            .build_async();

        client
            .add_tracks_to_library_playlist("p.abc", [("songs", "900032829")])
            .unwrap()
            .send_async()
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn unsuccessful_responses_are_mapped_to_errors() {
        let server = MockServer::start().await;

        Mock::given(path("/v1/me/storefront"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        Mock::given(path("/v1/me/recent/played"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        Mock::given(path("/v1/storefronts"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "7"))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(path("/v1/catalog/us/albums/0"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "errors": [{
                    "id": "ABC",
                    "title": "Resource Not Found",
                    "detail": "Resource with requested id was not found",
                    "status": "404",
                    "code": "40400"
                }]
            })))
            .mount(&server)
            .await;

        Mock::given(path("/v1/catalog/us/songs/0"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let client = AppleMusicClientBuilder::new("developer")
            .music_user_token("user")
            .api_base_url(api_base_url(&server))
            .build_async();

        assert!(matches!(
            client.user_storefront().send_async().await,
            Err(Error::Unauthorized)
        ));

        assert!(matches!(
            client.recently_played().send_async().await,
            Err(Error::Forbidden)
        ));

        // rate limits aren't retried
        assert!(matches!(
            client.storefronts().send_async().await,
            Err(Error::RateLimit(7))
        ));

        match client.catalog_album("us", "0").send_async().await {
            Err(Error::ApiError { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "Resource Not Found: Resource with requested id was not found");
            }

            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            client.catalog_song("us", "0").send_async().await,
            Err(Error::UnhandledApiResponseStatusCode(502))
        ));
    }

    #[tokio::test]
    async fn song_ids_from_live_album() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/catalog/us/albums/310730204"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": "310730204",
                    "relationships": {
                        "tracks": {
                            "data": [
                                { "id": "310730206", "type": "songs" },
                                { "id": "310730211", "type": "songs" }
                            ]
                        }
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = AppleMusicClientBuilder::new("developer")
            .api_base_url(api_base_url(&server))
            .build_async();

        let song_ids = client.song_ids_for_album("us", "310730204").send_async().await.unwrap();
        assert_eq!(song_ids, ["310730206", "310730211"]);
    }
}

#[cfg(feature = "sync")]
mod sync_client {
    use ferrimusic::prelude::*;

    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn sync_client_sends_requests() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/catalog/us/charts"))
            .and(query_param("types", "songs"))
            .and(query_param("offset", "0"))
            .and(query_param("limit", "20"))
            .and(header("Authorization", "Bearer developer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": {} })))
            .expect(1)
            .mount(&server)
            .await;

        let base_url = api_base_url(&server);

        // the blocking client can't be used directly within the async runtime
        let charts = tokio::task::spawn_blocking(move || {
            let client = AppleMusicClientBuilder::new("developer")
                .api_base_url(base_url)
                .build_sync();

            client.catalog_charts("us").types(["songs"]).send_sync()
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(charts, json!({ "results": {} }));
    }
}
