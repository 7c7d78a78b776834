use chrono::{DateTime, Duration, TimeZone, Utc};
use fyyur::db::Store;
use fyyur::domain::{ArtistId, BookingError, Genres, VenueId};
use fyyur::models::artist::ArtistFields;
use fyyur::models::show::NewShow;
use fyyur::models::venue::VenueFields;
use fyyur::services::{
    ArtistService, SeaOrmArtistService, SeaOrmShowService, SeaOrmVenueService, ShowService,
    VenueService,
};

struct Services {
    store: Store,
    venues: SeaOrmVenueService,
    artists: SeaOrmArtistService,
    shows: SeaOrmShowService,
}

async fn setup() -> Services {
    let store = Store::in_memory().await.expect("in-memory store");
    Services {
        venues: SeaOrmVenueService::new(store.clone()),
        artists: SeaOrmArtistService::new(store.clone()),
        shows: SeaOrmShowService::new(store.clone()),
        store,
    }
}

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 6, 1, 20, 0, 0).unwrap()
}

fn venue(name: &str, city: &str, state: &str, address: &str) -> VenueFields {
    VenueFields {
        name: name.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        address: address.to_string(),
        phone: Some("123-123-1234".to_string()),
        genres: Genres::new(["Jazz", "Reggae"]),
        seeking_talent: false,
        seeking_description: None,
        website: None,
        image_link: None,
        facebook_link: None,
    }
}

fn artist(name: &str, phone: Option<&str>) -> ArtistFields {
    ArtistFields {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: phone.map(str::to_string),
        genres: Genres::new(["Rock n Roll"]),
        seeking_venue: false,
        seeking_description: None,
        image_link: Some(format!("https://img.example/{name}.jpg")),
        website: None,
        facebook_link: None,
    }
}

async fn book(s: &Services, artist_id: ArtistId, venue_id: VenueId, start: DateTime<Utc>) {
    s.shows
        .create(NewShow {
            artist_id,
            venue_id,
            start_time: start,
        })
        .await
        .expect("show should be created");
}

#[tokio::test]
async fn directory_groups_by_city_and_counts_upcoming() {
    let s = setup().await;
    let now = reference();

    let hop = s
        .venues
        .create(venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap();
    let pianos = s
        .venues
        .create(venue("The Dueling Pianos Bar", "New York", "NY", "335 Delancey Street"))
        .await
        .unwrap();
    let park = s
        .venues
        .create(venue("Park Square Live Music & Coffee", "San Francisco", "CA", "34 Whiskey Moore Ave"))
        .await
        .unwrap();

    let guns = s.artists.create(artist("Guns N Petals", Some("326-123-5000"))).await.unwrap();
    book(&s, guns, hop, now + Duration::days(3)).await;
    book(&s, guns, hop, now - Duration::days(3)).await;
    book(&s, guns, park, now + Duration::hours(1)).await;

    let areas = s.venues.list_grouped(now).await.unwrap();

    assert_eq!(areas.len(), 2);
    assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("San Francisco", "CA"));
    assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("New York", "NY"));

    let sf: Vec<(VenueId, usize)> = areas[0]
        .venues
        .iter()
        .map(|v| (v.id, v.num_upcoming_shows))
        .collect();
    assert_eq!(sf, vec![(hop, 1), (park, 1)]);
    assert_eq!(areas[1].venues[0].id, pianos);
    assert_eq!(areas[1].venues[0].num_upcoming_shows, 0);
}

#[tokio::test]
async fn empty_store_yields_empty_views() {
    let s = setup().await;
    let now = reference();

    assert!(s.venues.list_grouped(now).await.unwrap().is_empty());
    assert!(s.artists.list().await.unwrap().is_empty());
    assert!(s.shows.list().await.unwrap().is_empty());

    let results = s.venues.search("anything", now).await.unwrap();
    assert_eq!(results.count, 0);
    assert!(results.data.is_empty());
}

#[tokio::test]
async fn show_at_reference_is_upcoming_in_every_view() {
    let s = setup().await;
    let now = reference();

    let hop = s
        .venues
        .create(venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap();
    let guns = s.artists.create(artist("Guns N Petals", None)).await.unwrap();
    book(&s, guns, hop, now).await;
    book(&s, guns, hop, now - Duration::seconds(1)).await;

    let venue_detail = s.venues.get_detail(hop, now).await.unwrap();
    assert_eq!(venue_detail.upcoming_shows_count, 1);
    assert_eq!(venue_detail.past_shows_count, 1);
    assert_eq!(venue_detail.upcoming_shows[0].start_time, "2030-06-01 20:00:00");
    assert_eq!(venue_detail.past_shows[0].start_time, "2030-06-01 19:59:59");
    assert_eq!(venue_detail.upcoming_shows[0].artist_name, "Guns N Petals");

    let artist_detail = s.artists.get_detail(guns, now).await.unwrap();
    assert_eq!(artist_detail.upcoming_shows_count, 1);
    assert_eq!(artist_detail.past_shows_count, 1);
    assert_eq!(artist_detail.upcoming_shows[0].venue_name, "The Musical Hop");

    let areas = s.venues.list_grouped(now).await.unwrap();
    assert_eq!(areas[0].venues[0].num_upcoming_shows, 1);

    let venue_hits = s.venues.search("hop", now).await.unwrap();
    assert_eq!(venue_hits.data[0].num_upcoming_shows, 1);

    let artist_hits = s.artists.search("guns", now).await.unwrap();
    assert_eq!(artist_hits.data[0].num_upcoming_shows, 1);
}

#[tokio::test]
async fn search_is_case_insensitive_substring() {
    let s = setup().await;
    let now = reference();

    s.venues
        .create(venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap();
    s.venues
        .create(venue("The Dueling Pianos Bar", "New York", "NY", "335 Delancey Street"))
        .await
        .unwrap();
    s.venues
        .create(venue("Park Square Live Music & Coffee", "San Francisco", "CA", "34 Whiskey Moore Ave"))
        .await
        .unwrap();

    let hop = s.venues.search("Hop", now).await.unwrap();
    assert_eq!(hop.count, 1);
    assert_eq!(hop.data[0].name, "The Musical Hop");

    let music = s.venues.search("Music", now).await.unwrap();
    assert_eq!(music.count, 2);

    let everything = s.venues.search("", now).await.unwrap();
    assert_eq!(everything.count, 3);

    let wildcard = s.venues.search("%", now).await.unwrap();
    assert_eq!(wildcard.count, 0);
}

#[tokio::test]
async fn artist_search_returns_only_artists() {
    let s = setup().await;
    let now = reference();

    s.venues
        .create(venue("The Wild Bar", "San Francisco", "CA", "1 Wild Way"))
        .await
        .unwrap();
    let sax = s.artists.create(artist("The Wild Sax Band", None)).await.unwrap();
    s.artists.create(artist("Matt Quevedo", None)).await.unwrap();

    let results = s.artists.search("wild", now).await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.data[0].id, sax);
    assert_eq!(results.data[0].name, "The Wild Sax Band");

    let band = s.artists.search("A", now).await.unwrap();
    assert_eq!(band.count, 2);
}

#[tokio::test]
async fn duplicate_venue_is_rejected() {
    let s = setup().await;

    let fields = venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street");
    s.venues.create(fields.clone()).await.unwrap();

    let err = s.venues.create(fields.clone()).await.unwrap_err();
    assert!(matches!(err, BookingError::Duplicate { .. }));
    assert_eq!(s.store.venue_count().await.unwrap(), 1);

    // Same name at another address is a different venue
    let elsewhere = VenueFields {
        address: "2 Other Street".to_string(),
        ..fields
    };
    s.venues.create(elsewhere).await.unwrap();
    assert_eq!(s.store.venue_count().await.unwrap(), 2);
}

#[tokio::test]
async fn duplicate_artist_is_rejected_even_without_phone() {
    let s = setup().await;

    s.artists.create(artist("Matt Quevedo", None)).await.unwrap();
    let err = s.artists.create(artist("Matt Quevedo", None)).await.unwrap_err();
    assert!(matches!(err, BookingError::Duplicate { .. }));

    s.artists
        .create(artist("Matt Quevedo", Some("300-400-5000")))
        .await
        .unwrap();
    assert_eq!(s.store.artist_count().await.unwrap(), 2);
}

#[tokio::test]
async fn deleting_a_venue_removes_its_shows() {
    let s = setup().await;
    let now = reference();

    let hop = s
        .venues
        .create(venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap();
    let park = s
        .venues
        .create(venue("Park Square Live Music & Coffee", "San Francisco", "CA", "34 Whiskey Moore Ave"))
        .await
        .unwrap();
    let guns = s.artists.create(artist("Guns N Petals", None)).await.unwrap();
    book(&s, guns, hop, now + Duration::days(1)).await;
    book(&s, guns, park, now + Duration::days(2)).await;

    s.venues.delete(hop).await.unwrap();

    let shows = s.shows.list().await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].venue_id, park);
    assert_eq!(s.store.show_count().await.unwrap(), 1);

    let detail = s.artists.get_detail(guns, now).await.unwrap();
    assert_eq!(detail.upcoming_shows_count, 1);
    assert_eq!(detail.upcoming_shows[0].venue_id, park);

    assert!(matches!(
        s.venues.get_venue(hop).await,
        Err(BookingError::NotFound { .. })
    ));
}

#[tokio::test]
async fn deleting_an_artist_removes_their_shows() {
    let s = setup().await;
    let now = reference();

    let hop = s
        .venues
        .create(venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap();
    let guns = s.artists.create(artist("Guns N Petals", None)).await.unwrap();
    book(&s, guns, hop, now + Duration::days(1)).await;

    s.artists.delete(guns).await.unwrap();

    assert!(s.shows.list().await.unwrap().is_empty());
    let detail = s.venues.get_detail(hop, now).await.unwrap();
    assert_eq!(detail.upcoming_shows_count, 0);
    assert_eq!(detail.past_shows_count, 0);
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let s = setup().await;
    let now = reference();

    assert!(matches!(
        s.venues.delete(VenueId::new(42)).await,
        Err(BookingError::NotFound { id: 42, .. })
    ));
    assert!(matches!(
        s.artists.delete(ArtistId::new(42)).await,
        Err(BookingError::NotFound { .. })
    ));
    assert!(matches!(
        s.venues.get_detail(VenueId::new(7), now).await,
        Err(BookingError::NotFound { .. })
    ));
    assert!(matches!(
        s.venues
            .update(VenueId::new(7), venue("X", "Y", "ZZ", "1 Road"))
            .await,
        Err(BookingError::NotFound { .. })
    ));
}

#[tokio::test]
async fn show_requires_existing_artist_and_venue() {
    let s = setup().await;
    let now = reference();

    let hop = s
        .venues
        .create(venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap();

    let err = s
        .shows
        .create(NewShow {
            artist_id: ArtistId::new(99),
            venue_id: hop,
            start_time: now,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
    assert_eq!(s.store.show_count().await.unwrap(), 0);
}

#[tokio::test]
async fn show_list_is_in_creation_order_with_names() {
    let s = setup().await;
    let now = reference();

    let hop = s
        .venues
        .create(venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap();
    let guns = s.artists.create(artist("Guns N Petals", None)).await.unwrap();
    let sax = s.artists.create(artist("The Wild Sax Band", None)).await.unwrap();

    book(&s, sax, hop, now + Duration::days(10)).await;
    book(&s, guns, hop, now - Duration::days(10)).await;

    let shows = s.shows.list().await.unwrap();
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].artist_name, "The Wild Sax Band");
    assert_eq!(shows[1].artist_name, "Guns N Petals");
    assert_eq!(shows[1].venue_name, "The Musical Hop");
    assert_eq!(shows[1].start_time, "2030-05-22 20:00:00");
    assert_eq!(
        shows[1].artist_image_link.as_deref(),
        Some("https://img.example/Guns N Petals.jpg")
    );
}

#[tokio::test]
async fn edit_replaces_fields_and_hides_inactive_description() {
    let s = setup().await;

    let hop = s
        .venues
        .create(VenueFields {
            seeking_talent: true,
            seeking_description: Some("Looking for local jazz acts".to_string()),
            ..venue("The Musical Hop", "San Francisco", "CA", "1015 Folsom Street")
        })
        .await
        .unwrap();

    let before = s.venues.get_venue(hop).await.unwrap();
    assert_eq!(
        before.seeking_description.as_deref(),
        Some("Looking for local jazz acts")
    );

    s.venues
        .update(
            hop,
            VenueFields {
                seeking_talent: false,
                seeking_description: Some("Looking for local jazz acts".to_string()),
                genres: Genres::new(["Folk"]),
                ..venue("The Musical Hop", "Oakland", "CA", "1015 Folsom Street")
            },
        )
        .await
        .unwrap();

    let after = s.venues.get_venue(hop).await.unwrap();
    assert_eq!(after.city, "Oakland");
    assert_eq!(after.genres.as_slice(), ["Folk"]);
    assert!(!after.seeking_talent);
    assert_eq!(after.seeking_description, None);
}

#[tokio::test]
async fn invalid_submissions_store_nothing() {
    let s = setup().await;

    let err = s
        .venues
        .create(venue("   ", "San Francisco", "CA", "1015 Folsom Street"))
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    let err = s
        .artists
        .create(ArtistFields {
            genres: Genres::default(),
            ..artist("Guns N Petals", None)
        })
        .await
        .unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));

    assert_eq!(s.store.venue_count().await.unwrap(), 0);
    assert_eq!(s.store.artist_count().await.unwrap(), 0);
}
