use serde::{Deserialize, Deserializer};

// JSON `null` decodes to the field's default, same as a missing key
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Same for whole categories, where a `null` element becomes an empty record
fn nullable_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items.into_iter().map(Option::unwrap_or_default).collect())
}

/// Top-level `YourLibrary.json` document.
///
/// Every category keeps the order it had in the export; that order is
/// also the display order.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Library {
    #[serde(deserialize_with = "nullable_items")]
    pub tracks: Vec<Track>,
    #[serde(deserialize_with = "nullable_items")]
    pub banned_tracks: Vec<BannedTrack>,
    #[serde(deserialize_with = "nullable_items")]
    pub albums: Vec<Album>,
    #[serde(deserialize_with = "nullable_items")]
    pub artists: Vec<Artist>,
    #[serde(deserialize_with = "nullable_items")]
    pub banned_artists: Vec<BannedArtist>,
    #[serde(deserialize_with = "nullable_items")]
    pub shows: Vec<Show>,
    #[serde(deserialize_with = "nullable_items")]
    pub episodes: Vec<Episode>,
    #[serde(deserialize_with = "nullable_items")]
    pub other: Vec<Other>,
}

impl Library {
    /// True when no category holds a single record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
            && self.banned_tracks.is_empty()
            && self.albums.is_empty()
            && self.artists.is_empty()
            && self.banned_artists.is_empty()
            && self.shows.is_empty()
            && self.episodes.is_empty()
            && self.other.is_empty()
    }

    /// Number of records outside the `tracks` category.
    #[must_use]
    pub fn non_track_count(&self) -> usize {
        self.banned_tracks.len()
            + self.albums.len()
            + self.artists.len()
            + self.banned_artists.len()
            + self.shows.len()
            + self.episodes.len()
            + self.other.len()
    }
}

/// A saved song.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Track {
    #[serde(deserialize_with = "nullable")]
    pub artist: String,
    #[serde(deserialize_with = "nullable")]
    pub album: String,
    #[serde(deserialize_with = "nullable")]
    pub track: String,
    #[serde(deserialize_with = "nullable")]
    pub uri: String,
}

/// A song the user excluded from their library. Same shape as [`Track`].
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BannedTrack {
    #[serde(deserialize_with = "nullable")]
    pub artist: String,
    #[serde(deserialize_with = "nullable")]
    pub album: String,
    #[serde(deserialize_with = "nullable")]
    pub track: String,
    #[serde(deserialize_with = "nullable")]
    pub uri: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Album {
    #[serde(deserialize_with = "nullable")]
    pub artist: String,
    #[serde(deserialize_with = "nullable")]
    pub album: String,
    #[serde(deserialize_with = "nullable")]
    pub uri: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Artist {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub uri: String,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BannedArtist {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub uri: String,
}

// The export reserves these categories but none of their fields are used
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Show {}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Episode {}

#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Other {}
