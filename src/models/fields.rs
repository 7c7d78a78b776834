//! Normalisation and length checks shared by venue and artist submissions.
//!
//! Limits mirror the column widths of the schema.

use crate::domain::{BookingError, Genres};

pub const LOCATION_MAX: usize = 120;
pub const PHONE_MAX: usize = 120;
pub const WEBSITE_MAX: usize = 200;
pub const IMAGE_LINK_MAX: usize = 500;
pub const FACEBOOK_LINK_MAX: usize = 120;

/// Trims `value` and rejects it when blank or longer than `max` characters.
pub fn required(field: &str, value: &str, max: Option<usize>) -> Result<String, BookingError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(BookingError::validation(format!("{field} is required")));
    }
    check_len(field, value, max)?;
    Ok(value.to_string())
}

/// Trims `value`; blank becomes `None`.
pub fn optional(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, BookingError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    check_len(field, value, Some(max))?;
    Ok(Some(value.to_string()))
}

pub fn genres(genres: Genres) -> Result<Genres, BookingError> {
    if genres.is_empty() {
        return Err(BookingError::validation("At least one genre is required"));
    }
    Ok(genres)
}

fn check_len(field: &str, value: &str, max: Option<usize>) -> Result<(), BookingError> {
    if let Some(max) = max {
        if value.chars().count() > max {
            return Err(BookingError::validation(format!(
                "{field} must be {max} characters or less"
            )));
        }
    }
    Ok(())
}
