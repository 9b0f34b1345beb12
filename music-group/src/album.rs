use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// An album name; unique within a [`crate::Catalog`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlbumName(pub SmolStr);
impl AlbumName {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
impl std::fmt::Display for AlbumName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::borrow::Borrow<str> for AlbumName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}
impl From<&str> for AlbumName {
    fn from(name: &str) -> Self {
        AlbumName(SmolStr::new(name))
    }
}
impl From<String> for AlbumName {
    fn from(name: String) -> Self {
        AlbumName(SmolStr::from(name))
    }
}
impl PartialEq<str> for AlbumName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}
impl PartialEq<&str> for AlbumName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// An album, as the catalog stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// The album name
    pub name: AlbumName,
    /// The release year of the album
    pub year: i32,
}
impl PartialOrd for Album {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Album {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (&self.name, self.year).cmp(&(&other.name, other.year))
    }
}
