//! Groups venues by (state, city) for the directory page.

use crate::models::venue::{VenueArea, VenueSummary};

/// A venue summary tagged with its location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedVenue {
    pub city: String,
    pub state: String,
    pub summary: VenueSummary,
}

/// Sorts venues by state then city and folds runs with the same
/// (city, state) into one area.
///
/// The sort is stable, so venues within an area keep their input order.
/// An empty input yields no areas.
#[must_use]
pub fn group_by_location(mut venues: Vec<LocatedVenue>) -> Vec<VenueArea> {
    venues.sort_by(|a, b| a.state.cmp(&b.state).then_with(|| a.city.cmp(&b.city)));

    let mut areas = Vec::new();
    let mut current: Option<VenueArea> = None;

    for venue in venues {
        match current.as_mut() {
            Some(area) if area.city == venue.city && area.state == venue.state => {
                area.venues.push(venue.summary);
            }
            _ => {
                if let Some(done) = current.take() {
                    areas.push(done);
                }
                current = Some(VenueArea {
                    city: venue.city,
                    state: venue.state,
                    venues: vec![venue.summary],
                });
            }
        }
    }

    // last run
    if let Some(done) = current {
        areas.push(done);
    }

    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VenueId;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> LocatedVenue {
        LocatedVenue {
            city: city.to_string(),
            state: state.to_string(),
            summary: VenueSummary {
                id: VenueId::new(id),
                name: name.to_string(),
                num_upcoming_shows: 0,
            },
        }
    }

    fn ids(area: &VenueArea) -> Vec<i32> {
        area.venues.iter().map(|v| v.id.value()).collect()
    }

    #[test]
    fn groups_same_city_and_state() {
        let areas = group_by_location(vec![
            venue(1, "A", "Austin", "TX"),
            venue(2, "B", "Austin", "TX"),
            venue(3, "C", "Boston", "MA"),
        ]);

        // MA sorts before TX
        assert_eq!(areas.len(), 2);
        assert_eq!((areas[0].city.as_str(), areas[0].state.as_str()), ("Boston", "MA"));
        assert_eq!(ids(&areas[0]), vec![3]);
        assert_eq!((areas[1].city.as_str(), areas[1].state.as_str()), ("Austin", "TX"));
        assert_eq!(ids(&areas[1]), vec![1, 2]);
    }

    #[test]
    fn same_city_name_in_different_states_stays_apart() {
        let areas = group_by_location(vec![
            venue(1, "A", "Portland", "OR"),
            venue(2, "B", "Portland", "ME"),
            venue(3, "C", "Portland", "OR"),
        ]);
        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].state, "ME");
        assert_eq!(areas[1].state, "OR");
        assert_eq!(ids(&areas[1]), vec![1, 3]);
    }

    #[test]
    fn single_venue_is_single_group() {
        let areas = group_by_location(vec![venue(9, "Solo", "Reno", "NV")]);
        assert_eq!(areas.len(), 1);
        assert_eq!(ids(&areas[0]), vec![9]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_location(Vec::new()).is_empty());
    }

    #[test]
    fn flattened_groups_are_sorted_permutation() {
        let input = vec![
            venue(1, "a", "San Francisco", "CA"),
            venue(2, "b", "New York", "NY"),
            venue(3, "c", "Los Angeles", "CA"),
            venue(4, "d", "San Francisco", "CA"),
            venue(5, "e", "Brooklyn", "NY"),
        ];
        let areas = group_by_location(input);

        let flat: Vec<i32> = areas.iter().flat_map(ids).collect();
        assert_eq!(flat, vec![3, 1, 4, 5, 2]);

        let mut keys: Vec<(String, String)> = areas
            .iter()
            .map(|a| (a.state.clone(), a.city.clone()))
            .collect();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before);
    }
}
