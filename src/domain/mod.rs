//! Domain types for the booking directory with strong typing.
//!
//! Identifiers are newtypes so a venue id can never be passed where an artist
//! id is expected. The pure parts of the booking logic (time partitioning,
//! geographic grouping, name matching) live in the submodules and never touch
//! the database.

pub mod error;
pub mod geo;
pub mod partition;
pub mod search;

pub use error::{BookingError, EntityKind};

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        pub struct $name(i32);

        impl $name {
            #[must_use]
            pub const fn new(id: i32) -> Self {
                Self(id)
            }

            #[must_use]
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for i32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl From<i32> for $name {
            fn from(id: i32) -> Self {
                Self::new(id)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i32(self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                i32::deserialize(deserializer).map(Self::new)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a Venue.
    ///
    /// ```rust
    /// use fyyur::domain::VenueId;
    ///
    /// let id = VenueId::new(7);
    /// assert_eq!(id.value(), 7);
    /// assert_eq!(id.to_string(), "7");
    /// ```
    VenueId
);

entity_id!(
    /// Unique identifier for an Artist.
    ArtistId
);

entity_id!(
    /// Unique identifier for a Show.
    ShowId
);

/// Ordered set of genre tags.
///
/// Tags are trimmed, blanks are dropped and repeated tags keep their first
/// position, so a list round-trips through storage without reordering.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Genres(Vec<String>);

impl Genres {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for tag in tags {
            let tag = tag.as_ref().trim();
            if tag.is_empty() || out.iter().any(|t| t == tag) {
                continue;
            }
            out.push(tag.to_string());
        }
        Self(out)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Encodes the tags as a JSON array for the `genres` column.
    #[must_use]
    pub fn to_storage(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }

    /// Decodes a `genres` column value.
    ///
    /// Accepts the JSON array written by [`Genres::to_storage`] as well as the
    /// older brace-delimited literal (`{Jazz,"Hip-Hop"}`) and a bare comma list.
    #[must_use]
    pub fn from_storage(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with('[') {
            if let Ok(tags) = serde_json::from_str::<Vec<String>>(raw) {
                return Self::new(tags);
            }
        }

        let inner = raw
            .strip_prefix('{')
            .and_then(|s| s.strip_suffix('}'))
            .unwrap_or(raw);

        Self::new(inner.split(',').map(|t| t.trim().trim_matches('"')))
    }
}

impl From<Vec<String>> for Genres {
    fn from(tags: Vec<String>) -> Self {
        Self::new(tags)
    }
}

impl From<Genres> for Vec<String> {
    fn from(genres: Genres) -> Self {
        genres.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_convert() {
        let id = VenueId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(i32::from(id), 42);
        assert_eq!(VenueId::from(42), id);
        assert_eq!(ArtistId::new(3).to_string(), "3");
    }

    #[test]
    fn id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&ShowId::new(5)).unwrap();
        assert_eq!(json, "5");
        let back: ShowId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ShowId::new(5));
    }

    #[test]
    fn genres_keep_first_occurrence_order() {
        let genres = Genres::new(["Jazz", " Rock ", "", "Jazz", "Blues"]);
        assert_eq!(genres.as_slice(), ["Jazz", "Rock", "Blues"]);
        assert!(genres.contains("Rock"));
        assert_eq!(genres.len(), 3);
    }

    #[test]
    fn genres_storage_round_trip() {
        let genres = Genres::new(["Hip-Hop", "R&B", "Rock n Roll", "Folk, Acoustic"]);
        let stored = genres.to_storage();
        assert_eq!(Genres::from_storage(&stored), genres);
    }

    #[test]
    fn genres_read_legacy_brace_literal() {
        let genres = Genres::from_storage(r#"{Jazz,Reggae,"Rock n Roll"}"#);
        assert_eq!(genres.as_slice(), ["Jazz", "Reggae", "Rock n Roll"]);
    }

    #[test]
    fn genres_read_plain_comma_list() {
        let genres = Genres::from_storage("Classical, Folk");
        assert_eq!(genres.as_slice(), ["Classical", "Folk"]);
    }

    #[test]
    fn empty_storage_is_empty_set() {
        assert!(Genres::from_storage("").is_empty());
        assert!(Genres::from_storage("[]").is_empty());
        assert!(Genres::from_storage("{}").is_empty());
    }
}
