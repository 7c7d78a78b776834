use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

use crate::domain::partition::START_TIME_FORMAT;
use crate::domain::{ArtistId, BookingError, VenueId};

/// A show submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: ArtistId,
    pub venue_id: VenueId,
    pub start_time: DateTime<Utc>,
}

/// Parses a submitted start time.
///
/// Accepts RFC 3339 (`2035-04-01T20:00:00Z`) or `YYYY-MM-DD HH:MM:SS`,
/// the latter read as UTC.
pub fn parse_start_time(raw: &str) -> Result<DateTime<Utc>, BookingError> {
    let raw = raw.trim();
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(t.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, START_TIME_FORMAT)
        .map(|t| t.and_utc())
        .map_err(|_| BookingError::validation(format!("Invalid start time: '{raw}'")))
}

/// One row of the show listing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShowListing {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A show as seen from a venue page: who is playing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistAppearance {
    pub artist_id: ArtistId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

/// A show as seen from an artist page: where they are playing.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueAppearance {
    pub venue_id: VenueId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}
