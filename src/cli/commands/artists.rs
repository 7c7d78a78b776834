use chrono::Utc;

use crate::config::Config;
use crate::domain::{ArtistId, BookingError};
use crate::services::ArtistService;
use crate::state::SharedState;

pub async fn cmd_list_artists(config: &Config, search: Option<&str>) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;

    if let Some(term) = search {
        let results = state.artist_service.search(term.trim(), Utc::now()).await?;
        println!("Artists matching \"{}\" ({} found)", term.trim(), results.count);
        println!("{:-<60}", "");
        for artist in results.data {
            println!(
                "  [{}] {} ({} upcoming)",
                artist.id, artist.name, artist.num_upcoming_shows
            );
        }
        return Ok(());
    }

    let artists = state.artist_service.list().await?;
    if artists.is_empty() {
        println!("No artists listed yet.");
        return Ok(());
    }

    println!("Artists ({} total)", artists.len());
    println!("{:-<60}", "");
    for artist in artists {
        println!("  [{}] {}", artist.id, artist.name);
    }

    Ok(())
}

pub async fn cmd_artist_info(config: &Config, id: i32) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;

    let detail = match state
        .artist_service
        .get_detail(ArtistId::new(id), Utc::now())
        .await
    {
        Ok(detail) => detail,
        Err(BookingError::NotFound { .. }) => {
            println!("Artist with ID {id} not found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let artist = &detail.artist;
    println!("Artist Info");
    println!("{:-<60}", "");
    println!("Name:     {}", artist.name);
    println!("Location: {}, {}", artist.city, artist.state);
    if let Some(phone) = &artist.phone {
        println!("Phone:    {phone}");
    }
    println!("Genres:   {}", artist.genres.as_slice().join(", "));
    if artist.seeking_venue {
        println!(
            "Seeking venues: {}",
            artist.seeking_description.as_deref().unwrap_or("yes")
        );
    }

    println!();
    println!("Upcoming shows ({})", detail.upcoming_shows_count);
    for show in &detail.upcoming_shows {
        println!("  {}  {}", show.start_time, show.venue_name);
    }
    println!("Past shows ({})", detail.past_shows_count);
    for show in &detail.past_shows {
        println!("  {}  {}", show.start_time, show.venue_name);
    }

    Ok(())
}
