use chrono::Utc;

use crate::config::Config;
use crate::domain::{BookingError, VenueId};
use crate::services::VenueService;
use crate::state::SharedState;

pub async fn cmd_list_venues(config: &Config, search: Option<&str>) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;
    let now = Utc::now();

    if let Some(term) = search {
        let results = state.venue_service.search(term.trim(), now).await?;
        println!("Venues matching \"{}\" ({} found)", term.trim(), results.count);
        println!("{:-<60}", "");
        for venue in results.data {
            println!(
                "  [{}] {} ({} upcoming)",
                venue.id, venue.name, venue.num_upcoming_shows
            );
        }
        return Ok(());
    }

    let areas = state.venue_service.list_grouped(now).await?;
    if areas.is_empty() {
        println!("No venues listed yet.");
        return Ok(());
    }

    for area in areas {
        println!("{}, {}", area.city, area.state);
        for venue in area.venues {
            println!(
                "  [{}] {} ({} upcoming)",
                venue.id, venue.name, venue.num_upcoming_shows
            );
        }
    }

    Ok(())
}

pub async fn cmd_venue_info(config: &Config, id: i32) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;

    let detail = match state
        .venue_service
        .get_detail(VenueId::new(id), Utc::now())
        .await
    {
        Ok(detail) => detail,
        Err(BookingError::NotFound { .. }) => {
            println!("Venue with ID {id} not found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let venue = &detail.venue;
    println!("Venue Info");
    println!("{:-<60}", "");
    println!("Name:     {}", venue.name);
    println!("Location: {}, {}, {}", venue.address, venue.city, venue.state);
    if let Some(phone) = &venue.phone {
        println!("Phone:    {phone}");
    }
    println!("Genres:   {}", venue.genres.as_slice().join(", "));
    if venue.seeking_talent {
        println!(
            "Seeking talent: {}",
            venue.seeking_description.as_deref().unwrap_or("yes")
        );
    }

    println!();
    println!("Upcoming shows ({})", detail.upcoming_shows_count);
    for show in &detail.upcoming_shows {
        println!("  {}  {}", show.start_time, show.artist_name);
    }
    println!("Past shows ({})", detail.past_shows_count);
    for show in &detail.past_shows {
        println!("  {}  {}", show.start_time, show.artist_name);
    }

    Ok(())
}
