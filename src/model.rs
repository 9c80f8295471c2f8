//! Value types used to address resources and to build library requests.

pub(crate) mod error;
pub mod relationship;
pub mod request;
pub mod resource;

pub use self::{
    relationship::CuratorRelationship,
    request::{LibraryPlaylistCreationRequest, LibraryResourceAddRequest},
    resource::{LibraryResource, ResourceKind},
};
