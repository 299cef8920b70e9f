//! System time adapter.
//!
//! Implements [`Clock`] with `std::time::Instant` and a blocking
//! `thread::sleep`.

use std::thread;
use std::time::{Duration, Instant};

use crate::app::ports::Clock;

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
