use std::str::FromStr;

use crate::error::{Error, Result};

/// Relationships of a catalog curator that may be fetched directly by name.
///
/// Only `playlists` is accepted by the API at the moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CuratorRelationship {
    Playlists,
}

impl CuratorRelationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            CuratorRelationship::Playlists => "playlists",
        }
    }
}

impl FromStr for CuratorRelationship {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "playlists" => Ok(CuratorRelationship::Playlists),
            other => Err(Error::InvalidRelationship(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_playlists_is_accepted() {
        assert_eq!(
            "playlists".parse::<CuratorRelationship>().unwrap(),
            CuratorRelationship::Playlists
        );

        for other in ["", "Playlists", "playlists ", "albums", "curators"] {
            assert!(matches!(
                other.parse::<CuratorRelationship>(),
                Err(Error::InvalidRelationship(rel)) if rel == other
            ));
        }
    }
}
