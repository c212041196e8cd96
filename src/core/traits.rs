//! State store abstraction for the rule engine
//!
//! This module defines the trait seam between the rule engine and whatever
//! holds per-customer state. The engine depends on exactly these five
//! operations; the in-memory implementation lives in
//! [`memory_store`](super::memory_store), and tests substitute doubles to
//! exercise fault paths.

use crate::types::{DailyAggregate, DayKey, LoadEvent, VelocityError, WeekKey, WeeklyTotal};

/// State store contract
///
/// Holds per-customer transaction records and daily/weekly aggregates. The
/// store carries no business logic: limit checks live in the engine, and the
/// record operations overwrite with caller-computed values rather than
/// merging deltas.
///
/// All operations are synchronous. No locking is implied at this layer; the
/// surrounding pipeline guarantees single-writer, one-event-at-a-time
/// access.
pub trait Store {
    /// Record a load event under its (id, customer) key
    ///
    /// # Errors
    ///
    /// - [`VelocityError::EmptyTransactionId`] if the event's id is empty
    /// - [`VelocityError::DuplicateTransaction`] if an entry already exists
    ///   for this (id, customer) pair
    fn record_transaction(&mut self, event: &LoadEvent) -> Result<(), VelocityError>;

    /// Overwrite the daily aggregate for (customer, day)
    ///
    /// The caller supplies the full new aggregate, never a delta. Other
    /// days of the same customer are left untouched.
    fn record_daily(
        &mut self,
        customer_id: &str,
        day: DayKey,
        aggregate: DailyAggregate,
    ) -> Result<(), VelocityError>;

    /// Overwrite the weekly total for (customer, ISO week)
    ///
    /// Same overwrite contract as [`record_daily`](Store::record_daily).
    fn record_weekly(
        &mut self,
        customer_id: &str,
        week: WeekKey,
        total: WeeklyTotal,
    ) -> Result<(), VelocityError>;

    /// Fetch the stored daily aggregate for (customer, day)
    ///
    /// # Errors
    ///
    /// [`VelocityError::NotFound`] if the customer or the day has no entry.
    fn fetch_daily(&self, customer_id: &str, day: DayKey) -> Result<DailyAggregate, VelocityError>;

    /// Fetch the stored weekly total for (customer, ISO week)
    ///
    /// # Errors
    ///
    /// [`VelocityError::NotFound`] if the customer or the week has no entry.
    fn fetch_weekly(&self, customer_id: &str, week: WeekKey) -> Result<WeeklyTotal, VelocityError>;
}
