use serde::{Deserialize, Serialize};

use crate::{AlbumName, util::seconds_to_hms_string};

/// An album together with the songs the catalog files under it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumSummary {
    /// The album name.
    pub name: AlbumName,
    /// The release year of the album.
    pub year: i32,
    /// The number of songs on the album.
    pub song_count: usize,
    /// The total duration of the album's songs in seconds.
    pub duration: f64,
}
impl std::fmt::Display for AlbumSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} songs, {}",
            self.name,
            self.year,
            self.song_count,
            seconds_to_hms_string(self.duration)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn homework() -> AlbumSummary {
        AlbumSummary {
            name: "Homework".into(),
            year: 1997,
            song_count: 3,
            duration: 1083.0,
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(homework().to_string(), "Homework (1997): 3 songs, 18:03");

        let empty = AlbumSummary {
            name: "Alive 1997".into(),
            year: 2001,
            song_count: 0,
            duration: 0.0,
        };
        assert_eq!(empty.to_string(), "Alive 1997 (2001): 0 songs, 0:00");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&homework()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Homework","year":1997,"song_count":3,"duration":1083.0}"#
        );
        let back: AlbumSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, homework());
    }
}
