use std::collections::{BTreeMap, HashSet};

use crate::{Album, AlbumName, AlbumSummary, CatalogError, CatalogResult, Song};

/// The albums and songs of a music group, and the queries over them.
///
/// Albums are keyed by name and iterate in name order. Songs have set
/// semantics (see [`Song`]) and iterate in the order they were first added.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    albums: BTreeMap<AlbumName, i32>,
    songs: Vec<Song>,
    song_set: HashSet<Song>,
}
impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an album, replacing the year of any album with the same name.
    pub fn add_album(&mut self, name: impl Into<AlbumName>, year: i32) {
        let name = name.into();
        match self.albums.insert(name.clone(), year) {
            Some(old_year) if old_year != year => {
                tracing::debug!("album {name} moved from {old_year} to {year}");
            }
            Some(_) => {}
            None => tracing::debug!("added album {name} ({year})"),
        }
    }

    /// Adds a song. Adding a song equal to one already stored does nothing.
    ///
    /// Fails with [`CatalogError::InvalidReference`] if `album` names an album
    /// that has not been added; the catalog is left untouched in that case.
    pub fn add_song(
        &mut self,
        name: impl Into<String>,
        album: Option<&str>,
        duration: f64,
    ) -> CatalogResult<()> {
        let name = name.into();
        let album = match album {
            Some(album) => match self.albums.get_key_value(album) {
                Some((album, _)) => Some(album.clone()),
                None => {
                    tracing::warn!("rejected song {name:?}: unknown album {album:?}");
                    return Err(CatalogError::InvalidReference {
                        song: name,
                        album: album.into(),
                    });
                }
            },
            None => None,
        };

        let song = Song::new(name, album, duration);
        if self.song_set.insert(song.clone()) {
            tracing::debug!("added song {song}");
            self.songs.push(song);
        } else {
            tracing::debug!("ignored duplicate song {song}");
        }
        Ok(())
    }

    /// Returns the names of all songs, sorted in ascending order.
    ///
    /// Distinct songs sharing a name each contribute one entry.
    pub fn ordered_song_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.songs.iter().map(|s| s.name.clone()).collect();
        names.sort();
        names
    }

    /// Returns the names of all albums.
    pub fn album_names(&self) -> Vec<AlbumName> {
        self.albums.keys().cloned().collect()
    }

    /// Returns the names of the albums released in `year`.
    pub fn albums_in_year(&self, year: i32) -> Vec<AlbumName> {
        self.albums
            .iter()
            .filter(|(_, album_year)| **album_year == year)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Counts the songs on the album called `album_name`.
    ///
    /// Unknown albums simply have no songs.
    pub fn count_songs(&self, album_name: &str) -> usize {
        self.songs_on(album_name).count()
    }

    /// Counts the songs that are not on any album.
    pub fn count_songs_in_no_album(&self) -> usize {
        self.songs.iter().filter(|s| s.album.is_none()).count()
    }

    /// Returns the mean duration of the songs on `album_name`, or `None` if it
    /// has no songs.
    pub fn average_duration_of_songs(&self, album_name: &str) -> Option<f64> {
        let (total, count) = self
            .songs_on(album_name)
            .fold((0.0, 0usize), |(total, count), song| {
                (total + song.duration, count + 1)
            });
        (count > 0).then(|| total / count as f64)
    }

    /// Returns the name of the longest song.
    ///
    /// Of several songs sharing the longest duration, the one added first wins.
    pub fn longest_song(&self) -> Option<String> {
        self.songs
            .iter()
            .fold(None, |longest: Option<&Song>, song| match longest {
                Some(longest) if !song.duration.total_cmp(&longest.duration).is_gt() => {
                    Some(longest)
                }
                _ => Some(song),
            })
            .map(|song| song.name.clone())
    }

    /// Returns the name of the album whose songs add up to the longest total
    /// duration. Albums without songs count as 0 seconds long.
    ///
    /// Of several albums sharing the longest total, the one whose name sorts
    /// first wins.
    pub fn longest_album(&self) -> Option<AlbumName> {
        self.album_durations()
            .into_iter()
            .fold(None, |longest: Option<(AlbumName, f64)>, (name, total)| {
                match longest {
                    Some((longest, longest_total))
                        if !total.total_cmp(&longest_total).is_gt() =>
                    {
                        Some((longest, longest_total))
                    }
                    _ => Some((name, total)),
                }
            })
            .map(|(name, _)| name)
    }

    /// Returns the release year of the album called `name`.
    pub fn album_year(&self, name: &str) -> Option<i32> {
        self.albums.get(name).copied()
    }

    /// Returns all albums, ordered by name.
    pub fn albums(&self) -> impl Iterator<Item = Album> + '_ {
        self.albums.iter().map(|(name, year)| Album {
            name: name.clone(),
            year: *year,
        })
    }

    /// Returns all songs in the order they were added.
    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    /// The number of albums.
    pub fn album_count(&self) -> usize {
        self.albums.len()
    }

    /// The number of songs.
    pub fn song_count(&self) -> usize {
        self.songs.len()
    }

    /// Returns the total duration of the songs on `album_name`.
    pub fn album_duration(&self, album_name: &str) -> f64 {
        self.songs_on(album_name).fold(0.0, |total, s| total + s.duration)
    }

    /// Returns the total song duration of every album, including albums
    /// without songs.
    pub fn album_durations(&self) -> BTreeMap<AlbumName, f64> {
        let mut totals: BTreeMap<AlbumName, f64> =
            self.albums.keys().map(|name| (name.clone(), 0.0)).collect();
        for song in &self.songs {
            if let Some(album) = &song.album
                && let Some(total) = totals.get_mut(album)
            {
                *total += song.duration;
            }
        }
        totals
    }

    /// Returns a summary of every album, ordered by name.
    pub fn album_summaries(&self) -> Vec<AlbumSummary> {
        let mut summaries: BTreeMap<&AlbumName, AlbumSummary> = self
            .albums
            .iter()
            .map(|(name, year)| {
                (
                    name,
                    AlbumSummary {
                        name: name.clone(),
                        year: *year,
                        song_count: 0,
                        duration: 0.0,
                    },
                )
            })
            .collect();
        for song in &self.songs {
            if let Some(album) = &song.album
                && let Some(summary) = summaries.get_mut(album)
            {
                summary.song_count += 1;
                summary.duration += song.duration;
            }
        }
        summaries.into_values().collect()
    }

    fn songs_on<'a>(&'a self, album_name: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |s| s.is_on_album(album_name))
    }
}
