//! Addressable resources and their kinds.
//!
//! A [LibraryResource] is the `(kind, id)` pair the library endpoints use to refer to catalog or library items, for
//! example when adding them to the user's library or to a playlist. The kind is the closed [ResourceKind]-enum, whose
//! wire string is used verbatim both as the JSON `type` field and as the grouping key when resources are batched.
//!
//! ```
//! # use ferrimusic::model::resource::{LibraryResource, ResourceKind};
//! let song = LibraryResource::new(ResourceKind::Songs, "1440857781").unwrap();
//! assert_eq!(song.kind().as_str(), "songs");
//! assert_eq!(song.id(), "1440857781");
//!
//! // kinds may also be parsed from their wire strings
//! let video = LibraryResource::try_from(("music-videos", "1445033420")).unwrap();
//! assert_eq!(video.kind(), ResourceKind::MusicVideos);
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// The kind of an addressable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Songs,
    Albums,
    MusicVideos,
    Playlists,
    LibrarySongs,
    LibraryAlbums,
    LibraryMusicVideos,
    LibraryPlaylists,
}

/// An immutable reference to a catalog or library resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryResource {
    kind: ResourceKind,
    id: String,
}

impl ResourceKind {
    /// Returns the kind's wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Songs => "songs",
            ResourceKind::Albums => "albums",
            ResourceKind::MusicVideos => "music-videos",
            ResourceKind::Playlists => "playlists",
            ResourceKind::LibrarySongs => "library-songs",
            ResourceKind::LibraryAlbums => "library-albums",
            ResourceKind::LibraryMusicVideos => "library-music-videos",
            ResourceKind::LibraryPlaylists => "library-playlists",
        }
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "songs" => Ok(ResourceKind::Songs),
            "albums" => Ok(ResourceKind::Albums),
            "music-videos" => Ok(ResourceKind::MusicVideos),
            "playlists" => Ok(ResourceKind::Playlists),
            "library-songs" => Ok(ResourceKind::LibrarySongs),
            "library-albums" => Ok(ResourceKind::LibraryAlbums),
            "library-music-videos" => Ok(ResourceKind::LibraryMusicVideos),
            "library-playlists" => Ok(ResourceKind::LibraryPlaylists),

            other => Err(Error::InvalidResourceKind(other.to_owned())),
        }
    }
}

impl AsRef<str> for ResourceKind {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LibraryResource {
    /// Create a new resource reference. Fails if the given ID is empty. The ID isn't otherwise validated and there
    /// are no guarantees the resource actually exists.
    pub fn new<S>(kind: ResourceKind, id: S) -> Result<Self>
    where
        S: Into<String>,
    {
        let id = id.into();

        if id.is_empty() {
            return Err(Error::InvalidResource(format!("empty ID for resource of kind {kind}")));
        }

        Ok(Self { kind, id })
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl TryFrom<(&str, &str)> for LibraryResource {
    type Error = Error;

    /// Build a resource from a `(kind, id)` pair of strings.
    fn try_from((kind, id): (&str, &str)) -> Result<Self> {
        Self::new(kind.parse()?, id)
    }
}

impl TryFrom<&Value> for LibraryResource {
    type Error = Error;

    /// Build a resource from a JSON object of the form `{"id": "...", "type": "..."}`, the shape the API uses for
    /// resource identifiers.
    fn try_from(value: &Value) -> Result<Self> {
        let id = value.get("id").and_then(Value::as_str);
        let kind = value.get("type").and_then(Value::as_str);

        match (kind, id) {
            (Some(kind), Some(id)) => Self::try_from((kind, id)),
            _ => Err(Error::InvalidResource(format!("not a resource identifier object: {value}"))),
        }
    }
}

impl TryFrom<Value> for LibraryResource {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::try_from(&value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn kind_round_trips_through_wire_string() {
        for kind in [
            ResourceKind::Songs,
            ResourceKind::Albums,
            ResourceKind::MusicVideos,
            ResourceKind::Playlists,
            ResourceKind::LibrarySongs,
            ResourceKind::LibraryAlbums,
            ResourceKind::LibraryMusicVideos,
            ResourceKind::LibraryPlaylists,
        ] {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn kind_serializes_as_wire_string() {
        assert_eq!(serde_json::to_string(&ResourceKind::MusicVideos).unwrap(), "\"music-videos\"");
        assert_eq!(
            serde_json::to_string(&ResourceKind::LibraryPlaylists).unwrap(),
            "\"library-playlists\""
        );
    }

    #[test]
    fn unknown_kind_is_rejected() {
        assert!(matches!(
            "stations".parse::<ResourceKind>(),
            Err(Error::InvalidResourceKind(kind)) if kind == "stations"
        ));

        assert!("".parse::<ResourceKind>().is_err());
        assert!("Songs".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn empty_id_is_rejected() {
        assert!(matches!(
            LibraryResource::new(ResourceKind::Songs, ""),
            Err(Error::InvalidResource(_))
        ));
    }

    #[test]
    fn resource_from_str_pair() {
        let resource = LibraryResource::try_from(("albums", "1440857781")).unwrap();

        assert_eq!(resource.kind(), ResourceKind::Albums);
        assert_eq!(resource.id(), "1440857781");
    }

    #[test]
    fn resource_from_json_object() {
        let resource = LibraryResource::try_from(json!({ "id": "i.abc", "type": "library-songs" })).unwrap();

        assert_eq!(resource.kind(), ResourceKind::LibrarySongs);
        assert_eq!(resource.id(), "i.abc");
    }

    #[test]
    fn resource_from_json_without_type_is_rejected() {
        assert!(LibraryResource::try_from(json!({ "id": "1" })).is_err());
        assert!(LibraryResource::try_from(json!("songs")).is_err());
        assert!(LibraryResource::try_from(json!({ "id": 1, "type": "songs" })).is_err());
    }
}
