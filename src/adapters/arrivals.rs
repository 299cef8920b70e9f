//! Arrival feed adapters.
//!
//! Implement [`ArrivalSource`] for the two feeds the binary supports:
//! a fixed list given on the command line, and a line-oriented stream
//! (stdin, a pipe from a polling script) carrying one batch per line.

use std::io::BufRead;

use anyhow::Context;
use log::warn;

use crate::app::ports::ArrivalSource;

/// A single batch handed over up front.
pub struct FixedArrivals {
    batch: Option<Vec<u32>>,
}

impl FixedArrivals {
    pub fn new(minutes: Vec<u32>) -> Self {
        Self {
            batch: Some(minutes),
        }
    }
}

impl ArrivalSource for FixedArrivals {
    fn next_batch(&mut self) -> anyhow::Result<Option<Vec<u32>>> {
        Ok(self.batch.take())
    }
}

/// One batch per line of whitespace-separated integers.
///
/// Tokens that are not non-negative integers are logged and skipped, so
/// one bad value does not blank the whole batch.
pub struct LineArrivals<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> LineArrivals<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }
}

/// Parse one line into a batch, dropping malformed tokens.
pub fn parse_batch(line: &str) -> Vec<u32> {
    line.split_whitespace()
        .filter_map(|tok| match tok.parse::<u32>() {
            Ok(m) => Some(m),
            Err(e) => {
                warn!("Skipped malformed arrival value ({}): {}", tok, e);
                None
            }
        })
        .collect()
}

impl<R: BufRead> ArrivalSource for LineArrivals<R> {
    fn next_batch(&mut self) -> anyhow::Result<Option<Vec<u32>>> {
        self.line.clear();
        let n = self
            .reader
            .read_line(&mut self.line)
            .context("reading arrival feed")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(parse_batch(&self.line)))
    }
}
