use crate::AlbumName;

#[derive(Debug, Clone, PartialEq)]
/// An error that can occur when modifying a [`crate::Catalog`].
pub enum CatalogError {
    /// A song named an album that the catalog does not contain.
    InvalidReference {
        /// The name of the rejected song.
        song: String,
        /// The unknown album.
        album: AlbumName,
    },
}
impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::InvalidReference { song, album } => write!(
                f,
                "invalid album reference: song {song:?} names unknown album {:?}",
                album.as_str()
            ),
        }
    }
}
impl std::error::Error for CatalogError {}
/// A result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
