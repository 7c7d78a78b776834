use serde::{Deserialize, Serialize};

use super::fields::{self, FACEBOOK_LINK_MAX, IMAGE_LINK_MAX, LOCATION_MAX, PHONE_MAX, WEBSITE_MAX};
use super::show::ArtistAppearance;
use crate::domain::{BookingError, Genres, VenueId};
use crate::entities::venues;

pub const SEEKING_DESCRIPTION_MAX: usize = 300;

/// Every mutable field of a venue, as submitted on create or edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFields {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Genres,
    #[serde(default)]
    pub seeking_talent: bool,
    #[serde(default)]
    pub seeking_description: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
}

impl VenueFields {
    /// Trims every field and checks required fields and lengths.
    pub fn normalized(self) -> Result<Self, BookingError> {
        Ok(Self {
            name: fields::required("name", &self.name, None)?,
            city: fields::required("city", &self.city, Some(LOCATION_MAX))?,
            state: fields::required("state", &self.state, Some(LOCATION_MAX))?,
            address: fields::required("address", &self.address, Some(LOCATION_MAX))?,
            phone: fields::optional("phone", self.phone, PHONE_MAX)?,
            genres: fields::genres(self.genres)?,
            seeking_talent: self.seeking_talent,
            seeking_description: fields::optional(
                "seeking_description",
                self.seeking_description,
                SEEKING_DESCRIPTION_MAX,
            )?,
            website: fields::optional("website", self.website, WEBSITE_MAX)?,
            image_link: fields::optional("image_link", self.image_link, IMAGE_LINK_MAX)?,
            facebook_link: fields::optional("facebook_link", self.facebook_link, FACEBOOK_LINK_MAX)?,
        })
    }
}

/// A stored venue. `seeking_description` is only present while
/// `seeking_talent` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Genres,
    pub seeking_talent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeking_description: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
}

impl From<venues::Model> for Venue {
    fn from(model: venues::Model) -> Self {
        Self {
            id: VenueId::new(model.id),
            name: model.name,
            city: model.city,
            state: model.state,
            address: model.address,
            phone: model.phone,
            genres: Genres::from_storage(&model.genres),
            seeking_talent: model.seeking_talent,
            seeking_description: model.seeking_description.filter(|_| model.seeking_talent),
            website: model.website,
            image_link: model.image_link,
            facebook_link: model.facebook_link,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<ArtistAppearance>,
    pub upcoming_shows: Vec<ArtistAppearance>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueSummary {
    pub id: VenueId,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Venues sharing one (city, state).
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VenueArea {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}
