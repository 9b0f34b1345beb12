use serde::{Deserialize, Serialize};

use crate::{AlbumName, util::seconds_to_hms_string};

/// A song, as the catalog stores it.
///
/// Songs have no identity of their own: two songs are equal when their name,
/// album and duration are equal. Negative zero is stored as zero, and the
/// remaining durations compare bit-for-bit so that equality and hashing agree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// The song name; not unique
    pub name: String,
    /// The album the song belongs to, if any
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub album: Option<AlbumName>,
    /// The duration in seconds
    #[serde(deserialize_with = "deserialize_duration")]
    pub duration: f64,
}
impl Song {
    /// Create a new song.
    pub fn new(name: impl Into<String>, album: Option<AlbumName>, duration: f64) -> Self {
        Self {
            name: name.into(),
            album,
            duration: normalize_duration(duration),
        }
    }

    fn duration_bits(&self) -> u64 {
        normalize_duration(self.duration).to_bits()
    }

    /// Whether this song belongs to the album called `album_name`.
    pub fn is_on_album(&self, album_name: &str) -> bool {
        self.album.as_ref().is_some_and(|a| a == album_name)
    }
}
impl PartialEq for Song {
    fn eq(&self, other: &Self) -> bool {
        (&self.name, &self.album, self.duration_bits())
            == (&other.name, &other.album, other.duration_bits())
    }
}
impl Eq for Song {}
impl std::hash::Hash for Song {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.album.hash(state);
        self.duration_bits().hash(state);
    }
}
impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(album) = &self.album {
            write!(f, " [{album}]")?;
        }
        write!(f, " ({})", seconds_to_hms_string(self.duration))
    }
}

/// `-0.0 == 0.0`, but their bits differ.
fn normalize_duration(duration: f64) -> f64 {
    if duration == 0.0 { 0.0 } else { duration }
}

fn deserialize_duration<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(normalize_duration)
}
