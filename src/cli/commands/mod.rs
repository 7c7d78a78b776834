mod artists;
mod shows;
mod venues;

pub use artists::{cmd_artist_info, cmd_list_artists};
pub use shows::cmd_list_shows;
pub use venues::{cmd_list_venues, cmd_venue_info};
