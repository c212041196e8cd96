//! Core business logic module
//!
//! This module contains the velocity-limit decision components:
//! - `traits` - The Store abstraction the engine depends on
//! - `memory_store` - HashMap-backed Store implementation
//! - `engine` - The velocity rule engine and limit constants

pub mod engine;
pub mod memory_store;
pub mod traits;

pub use engine::{Limits, RuleEngine, MAX_DAILY_LOAD, MAX_DAILY_TRANSACTIONS, MAX_WEEKLY_LOAD};
pub use memory_store::MemoryStore;
pub use traits::Store;
