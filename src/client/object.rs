use serde::Serialize;

use crate::model::{
    request::{LibraryPlaylistCreationRequest, LibraryResourceAddRequest},
    resource::{LibraryResource, ResourceKind},
};

pub const INCLUDE_QUERY: &str = "include";
pub const LIMIT_QUERY: &str = "limit";
pub const OFFSET_QUERY: &str = "offset";
pub const TYPES_QUERY: &str = "types";
pub const GENRE_QUERY: &str = "genre";
pub const TERM_QUERY: &str = "term";
pub const FILTER_UPC_QUERY: &str = "filter[upc]";
pub const FILTER_ISRC_QUERY: &str = "filter[isrc]";

/// The body sent with an add-to-library request. The API takes the resources in the query string, but the request
/// still needs a non-empty body.
pub const ADD_TO_LIBRARY_BODY: &str = " ";

#[derive(Debug, Serialize)]
pub struct ResourceIdentifier<'a> {
    pub id: &'a str,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
}

#[derive(Debug, Serialize)]
pub struct CreatePlaylistBody<'a> {
    pub attributes: PlaylistAttributes<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<PlaylistRelationships<'a>>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistAttributes<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PlaylistRelationships<'a> {
    pub tracks: ResourceIdentifiers<'a>,
}

#[derive(Debug, Serialize)]
pub struct ResourceIdentifiers<'a> {
    pub data: Vec<ResourceIdentifier<'a>>,
}

impl<'a> From<&'a LibraryResource> for ResourceIdentifier<'a> {
    fn from(resource: &'a LibraryResource) -> Self {
        Self {
            id: resource.id(),
            kind: resource.kind(),
        }
    }
}

impl<'a> From<&'a [LibraryResource]> for ResourceIdentifiers<'a> {
    fn from(resources: &'a [LibraryResource]) -> Self {
        Self {
            data: resources.iter().map(ResourceIdentifier::from).collect(),
        }
    }
}

impl<'a> From<&'a LibraryPlaylistCreationRequest> for CreatePlaylistBody<'a> {
    fn from(request: &'a LibraryPlaylistCreationRequest) -> Self {
        let relationships = if request.tracks().is_empty() {
            None
        } else {
            Some(PlaylistRelationships {
                tracks: request.tracks().into(),
            })
        };

        Self {
            attributes: PlaylistAttributes {
                name: request.name(),
                description: request.description(),
            },
            relationships,
        }
    }
}

/// Groups the resources in an add-to-library request by their kind. The kinds are in the order they're first seen
/// when going through songs, albums, music videos and playlists, and each kind's IDs are comma-separated in the same
/// order.
pub fn group_library_resources(request: &LibraryResourceAddRequest) -> Vec<(ResourceKind, String)> {
    let mut groups: Vec<(ResourceKind, String)> = Vec::new();

    for resource in request.resources() {
        match groups.iter_mut().find(|(kind, _)| *kind == resource.kind()) {
            Some((_, ids)) => {
                ids.push(',');
                ids.push_str(resource.id());
            }

            None => groups.push((resource.kind(), resource.id().to_owned())),
        }
    }

    groups
}

/// The query key resources of the given kind are added to the library with.
pub fn library_ids_query_key(kind: ResourceKind) -> String {
    format!("ids[{}]", kind.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(kind: ResourceKind, id: &str) -> LibraryResource {
        LibraryResource::new(kind, id).unwrap()
    }

    #[test]
    fn resources_are_grouped_by_kind_in_first_seen_order() {
        let mut request = LibraryResourceAddRequest::new();
        request
            .add_song(resource(ResourceKind::Songs, "1"))
            .add_album(resource(ResourceKind::Albums, "2"))
            .add_album(resource(ResourceKind::Albums, "3"));

        assert_eq!(
            group_library_resources(&request),
            [
                (ResourceKind::Songs, String::from("1")),
                (ResourceKind::Albums, String::from("2,3"))
            ]
        );
    }

    #[test]
    fn grouping_ignores_which_list_a_resource_is_in() {
        let mut request = LibraryResourceAddRequest::new();
        request
            .add_playlist(resource(ResourceKind::Playlists, "p.1"))
            .add_music_video(resource(ResourceKind::Songs, "5"))
            .add_song(resource(ResourceKind::Songs, "4"));

        // songs are iterated first, then music videos, then playlists
        assert_eq!(
            group_library_resources(&request),
            [
                (ResourceKind::Songs, String::from("4,5")),
                (ResourceKind::Playlists, String::from("p.1"))
            ]
        );
    }

    #[test]
    fn library_ids_key() {
        assert_eq!(library_ids_query_key(ResourceKind::MusicVideos), "ids[music-videos]");
    }

    #[test]
    fn playlist_body_without_tracks_has_no_relationships() {
        let request = LibraryPlaylistCreationRequest::new("Empty", "Nothing here");
        let body = serde_json::to_string(&CreatePlaylistBody::from(&request)).unwrap();

        assert_eq!(body, r#"{"attributes":{"name":"Empty","description":"Nothing here"}}"#);
    }

    #[test]
    fn playlist_body_lists_tracks_in_order() {
        let mut request = LibraryPlaylistCreationRequest::new("Mix", "");
        request
            .add_track(resource(ResourceKind::Songs, "900032829"))
            .add_track(resource(ResourceKind::LibrarySongs, "i.abc"));

        let body = serde_json::to_string(&CreatePlaylistBody::from(&request)).unwrap();

        assert_eq!(
            body,
            r#"{"attributes":{"name":"Mix","description":""},"relationships":{"tracks":{"data":[{"id":"900032829","type":"songs"},{"id":"i.abc","type":"library-songs"}]}}}"#
        );
    }
}
