//! An in-memory catalog of a music group's albums and songs, with queries over them.
//!
//! Albums map a unique name to a release year. Songs carry a name, an optional
//! album and a duration in seconds, and are deduplicated by value.
#![deny(missing_docs)]

mod album;
pub use album::{Album, AlbumName};

mod song;
pub use song::Song;

mod summary;
pub use summary::AlbumSummary;

mod catalog;
pub use catalog::Catalog;

mod error;
pub use error::{CatalogError, CatalogResult};

pub mod util;
