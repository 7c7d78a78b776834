use crate::config::Config;
use crate::services::ShowService;
use crate::state::SharedState;

pub async fn cmd_list_shows(config: &Config) -> anyhow::Result<()> {
    let state = SharedState::new(config.clone()).await?;
    let shows = state.show_service.list().await?;

    if shows.is_empty() {
        println!("No shows booked.");
        return Ok(());
    }

    println!("Shows ({} total)", shows.len());
    println!("{:-<70}", "");
    for show in shows {
        println!(
            "{}  {} @ {}",
            show.start_time, show.artist_name, show.venue_name
        );
    }

    Ok(())
}
