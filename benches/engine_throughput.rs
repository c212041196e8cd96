//! Benchmark suite for the velocity rule engine
//!
//! Measures end-to-end evaluation throughput over synthetic event streams
//! using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Each stream spreads events across customers and calendar days so the
//! runs exercise a realistic mix of accepted loads, daily-limit
//! rejections, and weekly-limit rejections.

use chrono::{DateTime, Duration, FixedOffset};
use fund_loads_engine::{LoadEvent, MemoryStore, RuleEngine};

fn main() {
    divan::main();
}

/// Build a synthetic event stream of `n` unique transactions
///
/// Events rotate over 100 customers and 28 calendar days; amounts cycle so
/// daily totals and counts are exercised without every event landing on
/// the same branch.
fn synthetic_events(n: usize) -> Vec<LoadEvent> {
    let base: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339("2000-01-03T00:00:00Z").unwrap();

    (0..n)
        .map(|i| {
            let customer = i % 100;
            let day = (i / 100) % 28;
            let amount = 100 + (i % 40) * 100;
            LoadEvent {
                id: i.to_string(),
                customer_id: customer.to_string(),
                load_amount: format!("${}.00", amount),
                time: base + Duration::days(day as i64) + Duration::seconds(i as i64 % 86_400),
            }
        })
        .collect()
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn evaluate_stream(bencher: divan::Bencher, n: usize) {
    bencher
        .with_inputs(|| synthetic_events(n))
        .bench_local_values(|events| {
            let mut engine = RuleEngine::new(MemoryStore::new());
            for event in &events {
                // Conflicts cannot occur (unique ids); rejections are
                // normal decisions, so every evaluation succeeds.
                divan::black_box(engine.evaluate(event).unwrap());
            }
        });
}
