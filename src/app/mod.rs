//! Application core — display policy, no I/O of its own.
//!
//! Decides *what* to show for each arrival value and *when*. Sockets,
//! input feeds and time are reached only through the **port traits** in
//! [`ports`], keeping this layer testable without a daemon.

pub mod ports;
pub mod service;
