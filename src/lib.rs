//! Fund Loads Engine Library
//! # Overview
//!
//! This library ingests a stream of fund-load events for customer accounts
//! and decides, per event, whether the load is accepted under per-day and
//! per-week velocity limits, emitting one accept/reject decision per event.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (LoadEvent, Decision, aggregates, errors)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - The velocity rule engine and limit constants
//!   - [`core::traits`] - The Store abstraction the engine depends on
//!   - [`core::memory_store`] - HashMap-backed store implementation
//! - [`io`] - JSON line decoding/encoding and streaming input
//! - [`pipeline`] - The sequential dispatch loop
//!
//! # Velocity rules
//!
//! Per customer, in strict order per event:
//!
//! - **Daily total**: accepted loads may not exceed 5,000 per calendar day
//! - **Daily count**: at most 3 accepted loads per calendar day
//! - **Weekly total**: accepted loads may not exceed 20,000 per ISO week
//!
//! A rejected event produces a decision with `accepted: false` and leaves
//! all stored aggregates untouched. Conflicts (empty or duplicate
//! transaction ids) and malformed input drop the event with a diagnostic
//! instead of a decision.
//!
//! # Ordering
//!
//! Events are processed strictly one at a time; the next event is not
//! evaluated until the previous outcome has been delivered. Aggregate
//! correctness depends on this, so the pipeline is deliberately sequential.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{Limits, MemoryStore, RuleEngine, Store};
pub use crate::io::JsonLineReader;
pub use crate::pipeline::Pipeline;
pub use crate::types::{
    DailyAggregate, DayKey, Decision, LoadEvent, VelocityError, WeekKey, WeeklyTotal,
};
