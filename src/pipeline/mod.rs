//! Sequential dispatch loop
//!
//! Pulls decoded events from the input iterator, runs each through the
//! rule engine, and routes the outcome to the decision sink or the
//! diagnostic sink before pulling the next event.
//!
//! # Ordering contract
//!
//! Exactly one event is in flight at a time. The engine's correctness
//! depends on aggregates reflecting all prior accepted events before the
//! next one is evaluated, so the loop is a direct synchronous call chain:
//! read, evaluate, write, repeat.

use std::io::Write;

use crate::core::{Limits, MemoryStore, RuleEngine};
use crate::io::json_format::{diagnostic, encode_decision};
use crate::types::{LoadEvent, VelocityError};

/// Sequential event pipeline
///
/// Owns the rule engine (and through it the state store) for one run.
/// Decisions go to one sink as JSON lines, diagnostics to another as
/// `msg: <context> error: <cause>` lines.
///
/// # Examples
///
/// ```
/// use fund_loads_engine::io::JsonLineReader;
/// use fund_loads_engine::pipeline::Pipeline;
///
/// let input = r#"{"id":"1","customer_id":"100","load_amount":"$1.00","time":"2000-01-01T00:00:00Z"}"#;
/// let mut decisions = Vec::new();
/// let mut diagnostics = Vec::new();
///
/// Pipeline::new()
///     .run(JsonLineReader::new(input.as_bytes()), &mut decisions, &mut diagnostics)
///     .unwrap();
///
/// assert_eq!(
///     String::from_utf8(decisions).unwrap(),
///     "{\"id\":\"1\",\"customer_id\":\"100\",\"accepted\":true}\n"
/// );
/// ```
pub struct Pipeline {
    engine: RuleEngine<MemoryStore>,
}

impl Pipeline {
    /// Create a pipeline with a fresh in-memory store and default limits
    pub fn new() -> Self {
        Pipeline {
            engine: RuleEngine::new(MemoryStore::new()),
        }
    }

    /// Create a pipeline with explicit velocity limits
    pub fn with_limits(limits: Limits) -> Self {
        Pipeline {
            engine: RuleEngine::with_limits(MemoryStore::new(), limits),
        }
    }

    /// Process an event stream to completion
    ///
    /// For each item: a decode error produces one diagnostic line and
    /// processing continues; a decoded event is evaluated, yielding either
    /// one decision line or one diagnostic line. The next item is not
    /// pulled until the current outcome has been written.
    ///
    /// # Errors
    ///
    /// Returns [`VelocityError::IoError`] and stops if the input source
    /// itself fails mid-stream or a sink write fails. Per-event failures
    /// are never fatal.
    pub fn run<I>(
        &mut self,
        events: I,
        decisions: &mut dyn Write,
        diagnostics: &mut dyn Write,
    ) -> Result<(), VelocityError>
    where
        I: IntoIterator<Item = Result<LoadEvent, VelocityError>>,
    {
        for item in events {
            match item {
                Ok(event) => self.dispatch(&event, decisions, diagnostics)?,
                // An unreadable input source halts the whole run.
                Err(fault @ VelocityError::IoError { .. }) => return Err(fault),
                Err(decode_error) => {
                    writeln!(
                        diagnostics,
                        "{}",
                        diagnostic("error decoding fund event", &decode_error)
                    )?;
                }
            }
        }
        decisions.flush()?;
        diagnostics.flush()?;
        Ok(())
    }

    /// Evaluate one event and deliver its outcome
    fn dispatch(
        &mut self,
        event: &LoadEvent,
        decisions: &mut dyn Write,
        diagnostics: &mut dyn Write,
    ) -> Result<(), VelocityError> {
        match self.engine.evaluate(event) {
            Ok(decision) => {
                writeln!(decisions, "{}", encode_decision(&decision)?)?;
            }
            Err(cause) => {
                let context = format!("error processing transaction {}", event.id);
                writeln!(diagnostics, "{}", diagnostic(&context, &cause))?;
            }
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
