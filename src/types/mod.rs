//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `event`: Load events, decisions, and aggregate bucket types
//! - `error`: Error types for the fund-loads engine

pub mod error;
pub mod event;

pub use error::VelocityError;
pub use event::{DailyAggregate, DayKey, Decision, LoadEvent, WeekKey, WeeklyTotal};
