//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against a fake daemon. All tests run on the host with no LED hardware
//! or `unicornd` required.

mod client_tests;
mod fake_daemon;
mod service_tests;
