//! Deterministic filter predicates for the match pipeline.
//!
//! Three stages narrow the candidate set before ranking: genre tag match,
//! availability-window overlap, budget-range overlap. All of them are pure
//! functions over immutable snapshots; the store query applies the genre
//! filter server-side where it can, and [`genre_matches`] is the reference
//! predicate fakes and tests share.

use crate::artist::entities::{ArtistRecord, AvailabilityInterval};
use crate::artist::price::budget_compatible;
use crate::event::entities::{EventSlot, SlotKind};

/// Genre predicate: does this record match the requested genre?
///
/// `None` (or an empty string upstream) means no constraint. Matching is
/// exact and case-sensitive against the record's stored tags, and
/// non-performer roles never match.
pub fn genre_matches(record: &ArtistRecord, genre: Option<&str>) -> bool {
    if !record.role.is_performer() {
        return false;
    }
    match genre {
        None => true,
        Some(g) if g.is_empty() => true,
        Some(g) => record.genres.iter().any(|tag| tag == g),
    }
}

/// Interval-vs-slot overlap.
///
/// Full-day slots compare inclusively on both ends; timed slots use strict
/// half-open overlap, so touching endpoints do not count.
pub fn overlaps(interval: &AvailabilityInterval, slot: &EventSlot) -> bool {
    match slot.kind {
        SlotKind::FullDay => interval.start <= slot.end && interval.end >= slot.start,
        SlotKind::Timed => interval.start < slot.end && interval.end > slot.start,
    }
}

/// Keep candidates with at least one availability interval overlapping the
/// requested slot. `None` means the request is unconstrained and everyone
/// passes. A candidate with no intervals never passes a dated request.
pub fn filter_by_availability(
    candidates: Vec<ArtistRecord>,
    slot: Option<&EventSlot>,
) -> Vec<ArtistRecord> {
    let Some(slot) = slot else {
        return candidates;
    };

    candidates
        .into_iter()
        .filter(|c| c.availability.iter().any(|i| overlaps(i, slot)))
        .collect()
}

/// Keep candidates whose price descriptor is compatible with the event
/// budget. A candidate without any price descriptor fails unconditionally
/// once a budget filter is requested.
pub fn filter_by_budget(candidates: Vec<ArtistRecord>, event_budget: &str) -> Vec<ArtistRecord> {
    candidates
        .into_iter()
        .filter(|c| match &c.price {
            Some(price) => budget_compatible(event_budget, price),
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artist::entities::Role;
    use crate::event::entities::EventCriteria;
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        day(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn interval(start: NaiveDateTime, end: NaiveDateTime) -> AvailabilityInterval {
        AvailabilityInterval::new(start, end).unwrap()
    }

    fn jazz_artist(name: &str) -> ArtistRecord {
        ArtistRecord::new(name.to_lowercase(), name, Role::Artist).with_genres(["Jazz"])
    }

    // ---- genre ----

    #[test]
    fn genre_match_is_exact_and_case_sensitive() {
        let artist = jazz_artist("Blue Notes");
        assert!(genre_matches(&artist, Some("Jazz")));
        assert!(!genre_matches(&artist, Some("jazz")));
        assert!(!genre_matches(&artist, Some("Rock")));
    }

    #[test]
    fn missing_or_empty_genre_matches_everyone() {
        let artist = jazz_artist("Blue Notes");
        assert!(genre_matches(&artist, None));
        assert!(genre_matches(&artist, Some("")));
    }

    #[test]
    fn organizers_never_match() {
        let organizer =
            ArtistRecord::new("org-1", "Venue Co", Role::Organizer).with_genres(["Jazz"]);
        assert!(!genre_matches(&organizer, Some("Jazz")));
        assert!(!genre_matches(&organizer, None));
    }

    // ---- availability ----

    #[test]
    fn no_slot_passes_all_candidates() {
        let candidates = vec![
            jazz_artist("A"),
            jazz_artist("B").with_availability(vec![interval(at(1, 10, 0), at(1, 12, 0))]),
        ];
        let kept = filter_by_availability(candidates.clone(), None);
        assert_eq!(kept, candidates);
    }

    #[test]
    fn slot_contained_in_interval_passes() {
        let artist = jazz_artist("A")
            .with_availability(vec![interval(at(12, 16, 0), at(13, 2, 0))]);
        let slot = EventCriteria::new("wedding")
            .with_date(day(12))
            .with_times(
                NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            )
            .requested_slot()
            .unwrap();

        let kept = filter_by_availability(vec![artist], Some(&slot));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn disjoint_intervals_fail() {
        let artist = jazz_artist("A").with_availability(vec![
            interval(at(10, 18, 0), at(10, 23, 0)),
            interval(at(14, 18, 0), at(14, 23, 0)),
        ]);
        let slot = EventCriteria::new("wedding")
            .with_date(day(12))
            .requested_slot()
            .unwrap();

        assert!(filter_by_availability(vec![artist], Some(&slot)).is_empty());
    }

    #[test]
    fn zero_intervals_fail_dated_requests() {
        let artist = jazz_artist("A");
        let slot = EventCriteria::new("wedding")
            .with_date(day(12))
            .requested_slot()
            .unwrap();

        assert!(filter_by_availability(vec![artist], Some(&slot)).is_empty());
    }

    #[test]
    fn timed_slot_touching_endpoint_does_not_count() {
        // Half-open semantics: interval ends exactly when the slot starts
        let artist = jazz_artist("A")
            .with_availability(vec![interval(at(12, 14, 0), at(12, 18, 0))]);
        let slot = EventCriteria::new("wedding")
            .with_date(day(12))
            .with_times(
                NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            )
            .requested_slot()
            .unwrap();

        assert!(filter_by_availability(vec![artist], Some(&slot)).is_empty());
    }

    #[test]
    fn full_day_slot_touching_endpoint_counts() {
        // Inclusive semantics on full-day windows: an interval beginning at
        // the last millisecond of the day still overlaps
        let last_ms = day(12).and_hms_milli_opt(23, 59, 59, 999).unwrap();
        let artist = jazz_artist("A")
            .with_availability(vec![interval(last_ms, at(13, 4, 0))]);
        let slot = EventCriteria::new("wedding")
            .with_date(day(12))
            .requested_slot()
            .unwrap();

        assert_eq!(filter_by_availability(vec![artist], Some(&slot)).len(), 1);
    }

    #[test]
    fn midnight_crossing_window_admits_next_day_interval() {
        // Event 22:00-02:00 on the 12th; artist only free 00:30-01:00 on the 13th
        let artist = jazz_artist("A")
            .with_availability(vec![interval(at(13, 0, 30), at(13, 1, 0))]);
        let slot = EventCriteria::new("club night")
            .with_date(day(12))
            .with_times(
                NaiveTime::from_hms_opt(22, 0, 0).unwrap(),
                NaiveTime::from_hms_opt(2, 0, 0).unwrap(),
            )
            .requested_slot()
            .unwrap();

        assert_eq!(filter_by_availability(vec![artist], Some(&slot)).len(), 1);
    }

    // ---- budget ----

    #[test]
    fn budget_filter_keeps_exact_and_negotiable() {
        let candidates = vec![
            jazz_artist("In Range").with_price("$700"),
            jazz_artist("Flexible").with_price("negotiable"),
            jazz_artist("Too Pricey").with_price("$1500 - $2000"),
        ];

        let kept = filter_by_budget(candidates, "$500 - $1000");
        let names: Vec<_> = kept.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["In Range", "Flexible"]);
    }

    #[test]
    fn missing_price_descriptor_fails_budget_filter() {
        let kept = filter_by_budget(vec![jazz_artist("No Price")], "negotiable");
        assert!(kept.is_empty());
    }

    // ---- pipeline scenario ----

    #[test]
    fn jazz_scenario_filters_in_order() {
        // Genre filter keeps the two Jazz acts; budget keeps both of those
        // (exact range and negotiable); the Rock act is gone before the
        // budget check ever runs.
        let candidates = vec![
            jazz_artist("Exact").with_price("$700"),
            jazz_artist("Open").with_price("negotiable"),
            ArtistRecord::new("rock", "Loud Ones", Role::Artist)
                .with_genres(["Rock"])
                .with_price("$700"),
        ];

        let by_genre: Vec<_> = candidates
            .into_iter()
            .filter(|c| genre_matches(c, Some("Jazz")))
            .collect();
        assert_eq!(by_genre.len(), 2);

        let by_budget = filter_by_budget(by_genre, "$500-$1000");
        let names: Vec<_> = by_budget.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Exact", "Open"]);
    }
}
