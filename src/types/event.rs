//! Fund-load event and decision types
//!
//! This module defines the inbound load event, the outbound accept/reject
//! decision, and the aggregate bucket types the engine tracks per customer.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::VelocityError;

/// Calendar-day bucket key
///
/// The event's calendar date in the event's own UTC offset. Day granularity
/// only; no time-of-day component.
pub type DayKey = NaiveDate;

/// ISO-8601 week bucket key
///
/// Identifies a week by its ISO week-numbering year and week number.
/// Weeks start on Monday; week 1 is the week containing the first Thursday
/// of the year, so a date near a year boundary may carry the adjacent year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekKey {
    /// ISO week-numbering year (may differ from the calendar year)
    pub year: i32,

    /// ISO week number (1-53)
    pub week: u32,
}

/// Inbound fund-load event
///
/// One attempted load of funds onto a customer account, deserialized from a
/// single JSON line. Immutable once received.
///
/// The load amount is kept as the raw wire string at this layer (optionally
/// prefixed with `$`); the engine parses it during evaluation so that a
/// malformed amount is an evaluation fault rather than a decode fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadEvent {
    /// Transaction identifier; must be non-empty
    pub id: String,

    /// Customer the load applies to
    pub customer_id: String,

    /// Load amount as received, e.g. `"$2500.00"` or `"2500.00"`
    pub load_amount: String,

    /// Event timestamp, RFC 3339 with UTC offset
    pub time: DateTime<FixedOffset>,
}

impl LoadEvent {
    /// Parse the load amount into a [`Decimal`]
    ///
    /// Strips one optional leading `$` and parses the remainder as a
    /// decimal number.
    ///
    /// # Errors
    ///
    /// Returns [`VelocityError::InvalidAmount`] if the remainder is not a
    /// valid decimal.
    pub fn parsed_amount(&self) -> Result<Decimal, VelocityError> {
        let raw = self
            .load_amount
            .strip_prefix('$')
            .unwrap_or(&self.load_amount);
        Decimal::from_str(raw)
            .map_err(|_| VelocityError::invalid_amount(&self.load_amount, &self.id))
    }

    /// Derive the calendar-day bucket key from the event timestamp
    pub fn day_key(&self) -> DayKey {
        self.time.date_naive()
    }

    /// Derive the ISO week bucket key from the event timestamp
    pub fn week_key(&self) -> WeekKey {
        let iso = self.time.iso_week();
        WeekKey {
            year: iso.year(),
            week: iso.week(),
        }
    }
}

/// Per-customer-per-day aggregate of accepted loads
///
/// Tracks the running total and count of accepted loads for one customer on
/// one calendar day, plus the most recent event committed into the bucket.
/// The engine computes new values and overwrites the stored aggregate
/// wholesale; the store never merges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyAggregate {
    /// Cumulative accepted load total for the day
    pub total: Decimal,

    /// Count of accepted transactions for the day
    pub count: u32,

    /// The last event committed into this bucket, if any
    pub last_event: Option<LoadEvent>,
}

/// Per-customer-per-ISO-week accepted load total
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeeklyTotal {
    /// Cumulative accepted load total for the week
    pub total: Decimal,
}

/// Accept/reject outcome for one load event
///
/// Produced exactly once per successfully evaluated event and never
/// mutated. Serialized as one JSON line on the decision stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Transaction identifier of the evaluated event
    pub id: String,

    /// Customer the decision applies to
    pub customer_id: String,

    /// Whether the load was accepted
    pub accepted: bool,
}

impl Decision {
    /// Build an accepted decision for an event
    pub fn accepted(event: &LoadEvent) -> Self {
        Decision {
            id: event.id.clone(),
            customer_id: event.customer_id.clone(),
            accepted: true,
        }
    }

    /// Build a rejected decision for an event
    pub fn rejected(event: &LoadEvent) -> Self {
        Decision {
            id: event.id.clone(),
            customer_id: event.customer_id.clone(),
            accepted: false,
        }
    }
}
