//! In-memory state store
//!
//! HashMap-backed implementation of the [`Store`] trait. Transaction
//! records are keyed by (id, customer) so distinct customers may reuse an
//! identifier without colliding; aggregates are nested per customer, then
//! per bucket key.
//!
//! Aggregates for a bucket are never deleted; each commit replaces the
//! previous value wholesale.

use std::collections::HashMap;

use crate::core::traits::Store;
use crate::types::{DailyAggregate, DayKey, LoadEvent, VelocityError, WeekKey, WeeklyTotal};

/// In-memory store for transaction records and aggregates
///
/// Owned by the pipeline's single consumer; no interior locking. Memory
/// usage is O(events + populated buckets).
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// (transaction id, customer id) -> recorded event
    transactions: HashMap<(String, String), LoadEvent>,

    /// customer id -> day -> daily aggregate
    daily: HashMap<String, HashMap<DayKey, DailyAggregate>>,

    /// customer id -> ISO week -> weekly total
    weekly: HashMap<String, HashMap<WeekKey, WeeklyTotal>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn record_transaction(&mut self, event: &LoadEvent) -> Result<(), VelocityError> {
        if event.id.is_empty() {
            return Err(VelocityError::EmptyTransactionId);
        }
        let key = (event.id.clone(), event.customer_id.clone());
        if self.transactions.contains_key(&key) {
            return Err(VelocityError::duplicate_transaction(
                &event.id,
                &event.customer_id,
            ));
        }
        self.transactions.insert(key, event.clone());
        Ok(())
    }

    fn record_daily(
        &mut self,
        customer_id: &str,
        day: DayKey,
        aggregate: DailyAggregate,
    ) -> Result<(), VelocityError> {
        self.daily
            .entry(customer_id.to_string())
            .or_default()
            .insert(day, aggregate);
        Ok(())
    }

    fn record_weekly(
        &mut self,
        customer_id: &str,
        week: WeekKey,
        total: WeeklyTotal,
    ) -> Result<(), VelocityError> {
        self.weekly
            .entry(customer_id.to_string())
            .or_default()
            .insert(week, total);
        Ok(())
    }

    fn fetch_daily(&self, customer_id: &str, day: DayKey) -> Result<DailyAggregate, VelocityError> {
        self.daily
            .get(customer_id)
            .and_then(|days| days.get(&day))
            .cloned()
            .ok_or(VelocityError::NotFound)
    }

    fn fetch_weekly(&self, customer_id: &str, week: WeekKey) -> Result<WeeklyTotal, VelocityError> {
        self.weekly
            .get(customer_id)
            .and_then(|weeks| weeks.get(&week))
            .copied()
            .ok_or(VelocityError::NotFound)
    }
}
