//! Port traits — the boundary between the display loop and the outside world.
//!
//! ```text
//!   ArrivalSource ──▶ DisplayService ──▶ Client<Transport>
//!                          ▲
//!                        Clock
//! ```
//!
//! Adapters (arrival feeds, wall clock) implement these traits. The
//! [`DisplayService`](super::service::DisplayService) consumes them via
//! generics so the loop runs under test without real time or real data.

use std::time::{Duration, Instant};

// ───────────────────────────────────────────────────────────────
// Arrival source (driven adapter: feed → display)
// ───────────────────────────────────────────────────────────────

/// Supplier of "minutes until next arrival" values.
pub trait ArrivalSource {
    /// Next batch of values, in any order. `Ok(None)` once the source is
    /// exhausted. An empty batch means "nothing due right now".
    fn next_batch(&mut self) -> anyhow::Result<Option<Vec<u32>>>;
}

// ───────────────────────────────────────────────────────────────
// Clock (driven adapter: display loop ↔ time)
// ───────────────────────────────────────────────────────────────

/// Monotonic time and blocking delay.
pub trait Clock {
    fn now(&self) -> Instant;

    fn sleep(&mut self, duration: Duration);
}
