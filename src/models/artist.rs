use serde::{Deserialize, Serialize};

use super::fields::{self, FACEBOOK_LINK_MAX, IMAGE_LINK_MAX, LOCATION_MAX, PHONE_MAX, WEBSITE_MAX};
use super::show::VenueAppearance;
use crate::domain::{ArtistId, BookingError, Genres};
use crate::entities::artists;

pub const SEEKING_DESCRIPTION_MAX: usize = 150;

/// Every mutable field of an artist, as submitted on create or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistFields {
    pub name: String,
    pub city: String,
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Genres,
    #[serde(default)]
    pub seeking_venue: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
}

impl ArtistFields {
    pub fn normalized(self) -> Result<Self, BookingError> {
        Ok(Self {
            name: fields::required("name", &self.name, None)?,
            city: fields::required("city", &self.city, Some(LOCATION_MAX))?,
            state: fields::required("state", &self.state, Some(LOCATION_MAX))?,
            phone: fields::optional("phone", self.phone, PHONE_MAX)?,
            genres: fields::genres(self.genres)?,
            seeking_venue: self.seeking_venue,
            seeking_description: fields::optional(
                "seeking_description",
                self.seeking_description,
                SEEKING_DESCRIPTION_MAX,
            )?,
            image_link: fields::optional("image_link", self.image_link, IMAGE_LINK_MAX)?,
            website: fields::optional("website", self.website, WEBSITE_MAX)?,
            facebook_link: fields::optional("facebook_link", self.facebook_link, FACEBOOK_LINK_MAX)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Genres,
    pub seeking_venue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
}

impl From<artists::Model> for Artist {
    fn from(model: artists::Model) -> Self {
        Self {
            id: ArtistId::new(model.id),
            name: model.name,
            city: model.city,
            state: model.state,
            phone: model.phone,
            genres: Genres::from_storage(&model.genres),
            seeking_venue: model.seeking_venue,
            seeking_description: model.seeking_description.filter(|_| model.seeking_venue),
            image_link: model.image_link,
            website: model.website,
            facebook_link: model.facebook_link,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<VenueAppearance>,
    pub upcoming_shows: Vec<VenueAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Artist directory row.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistListing {
    pub id: ArtistId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ArtistSummary {
    pub id: ArtistId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeking_description_over_limit_rejected() {
        let fields = ArtistFields {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: None,
            genres: Genres::new(["Rock n Roll"]),
            seeking_venue: true,
            seeking_description: Some("x".repeat(151)),
            image_link: None,
            website: None,
            facebook_link: None,
        };
        assert!(matches!(
            fields.normalized(),
            Err(BookingError::Validation(_))
        ));
    }

    #[test]
    fn fields_deserialize_with_defaults() {
        let fields: ArtistFields = serde_json::from_str(
            r#"{"name":"Matt Quevedo","city":"New York","state":"NY","genres":["Jazz"]}"#,
        )
        .unwrap();
        assert!(!fields.seeking_venue);
        assert_eq!(fields.phone, None);
        assert_eq!(fields.genres.as_slice(), ["Jazz"]);
    }
}
