//! Event criteria value object and slot derivation.
//!
//! [`EventCriteria`] is built fresh per match request by the caller; every
//! field beyond the event type is optional. [`EventCriteria::requested_slot`]
//! turns the date/time fields into the concrete window the availability
//! filter checks against.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// How a slot's endpoints are compared against availability intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// Whole calendar day, inclusive on both ends.
    FullDay,
    /// Explicit start/end times, half-open: touching endpoints do not
    /// count as overlap.
    Timed,
}

/// The concrete time window requested for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: SlotKind,
}

/// Search criteria for a match request (Value Object)
///
/// Transient: constructed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCriteria {
    /// Event type label, e.g. "wedding", "corporate"
    pub event_type: String,
    /// Requested genre tag; `None` or empty means no genre constraint
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub start_time: Option<NaiveTime>,
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    /// Budget descriptor, e.g. "$500 - $1000" or "negotiable"
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub details: Option<String>,
}

impl EventCriteria {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            genre: None,
            date: None,
            start_time: None,
            end_time: None,
            budget: None,
            guest_count: None,
            details: None,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_times(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    pub fn with_budget(mut self, budget: impl Into<String>) -> Self {
        self.budget = Some(budget.into());
        self
    }

    pub fn with_guest_count(mut self, count: u32) -> Self {
        self.guest_count = Some(count);
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// The genre constraint, if one was actually supplied.
    ///
    /// An empty string means "no constraint", same as `None`.
    pub fn genre_constraint(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    /// Derive the time window to match availability against.
    ///
    /// - No date → `None`: the request is unconstrained and every candidate
    ///   passes the availability filter.
    /// - Date plus both times → a [`SlotKind::Timed`] window
    ///   `[date+start, date+end)`. If `end <= start` the window crosses
    ///   midnight and the end instant advances one calendar day.
    /// - Date with zero or one time supplied → the full calendar day
    ///   `[00:00:00.000, 23:59:59.999]`, inclusive on both ends. A partial
    ///   start/end pair is ignored rather than rejected.
    pub fn requested_slot(&self) -> Option<EventSlot> {
        let date = self.date?;

        if let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) {
            let start = date.and_time(start_time);
            let end = if end_time <= start_time {
                // Crosses midnight
                (date + Days::new(1)).and_time(end_time)
            } else {
                date.and_time(end_time)
            };
            return Some(EventSlot {
                start,
                end,
                kind: SlotKind::Timed,
            });
        }

        let day_start = date.and_time(NaiveTime::MIN);
        let day_end = date.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap());
        Some(EventSlot {
            start: day_start,
            end: day_end,
            kind: SlotKind::FullDay,
        })
    }
}
