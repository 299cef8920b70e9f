//! Integration tests: DisplayService → Client → fake daemon.
//!
//! A manual clock stands in for wall time so a full refresh interval
//! runs instantly.

use std::io::{Cursor, Write};
use std::time::{Duration, Instant};

use unicorn_eta::Client;
use unicorn_eta::adapters::arrivals::{FixedArrivals, LineArrivals};
use unicorn_eta::app::ports::Clock;
use unicorn_eta::app::service::{COLOUR_OK, COLOUR_SOON, DisplayService};
use unicorn_eta::config::DisplayConfig;
use unicorn_eta::pixel::{BLACK, PIXEL_COUNT, Pixel};
use unicorn_eta::protocol::codec::Command;

use super::fake_daemon::FakeDaemon;

struct ManualClock {
    now: Instant,
    total: Duration,
}

impl ManualClock {
    fn new() -> Self {
        Self {
            now: Instant::now(),
            total: Duration::ZERO,
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now
    }

    fn sleep(&mut self, duration: Duration) {
        self.now += duration;
        self.total += duration;
    }
}

fn shows(cmds: &[Command]) -> usize {
    cmds.iter().filter(|c| **c == Command::Show).count()
}

fn lit_colours(cmds: &[Command]) -> Vec<Pixel> {
    cmds.iter()
        .filter_map(|c| match c {
            Command::SetPixel(_, p) if !p.is_black() => Some(*p),
            _ => None,
        })
        .collect()
}

#[test]
fn full_batch_over_socket() {
    let daemon = FakeDaemon::spawn();
    let config = DisplayConfig {
        socket_path: daemon.path().clone(),
        ..DisplayConfig::default()
    };
    let service = DisplayService::new(&config);
    let mut clock = ManualClock::new();

    let mut client = Client::connect(&config.socket_path, Some(config.write_timeout()), false)
        .unwrap()
        .with_channel_order(config.channel_order);
    service.start(&mut client, &mut clock).unwrap();
    service
        .run(&mut client, &mut clock, &mut FixedArrivals::new(vec![7, 2]))
        .unwrap();
    drop(client);

    let cmds = daemon.commands();
    assert_eq!(cmds[0], Command::SetBrightness(10));

    // 59 s budget at 2 s per frame is 30 frames. Each render shows twice
    // (clear + glyph); start shows twice and the final blank once.
    assert_eq!(shows(&cmds), 2 + 30 * 2 + 1);

    // Soonest arrival first.
    let colours = lit_colours(&cmds);
    assert_eq!(colours.first(), Some(&COLOUR_SOON));
    assert!(colours.contains(&COLOUR_OK));

    // Ends blank.
    let n = cmds.len();
    assert_eq!(cmds[n - 2], Command::SetAllPixels([BLACK; PIXEL_COUNT]));
    assert_eq!(cmds[n - 1], Command::Show);

    assert_eq!(clock.total, Duration::from_secs(2) + Duration::from_secs(60));
}

#[test]
fn streamed_batches_with_file_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"brightness": 40, "frame_interval_ms": 1000, "refresh_interval_secs": 5, "startup_hold_ms": 0}}"#
    )
    .unwrap();
    let config = DisplayConfig::load(file.path()).unwrap();
    assert_eq!(config.brightness, 40);

    let daemon = FakeDaemon::spawn();
    let service = DisplayService::new(&config);
    let mut clock = ManualClock::new();
    let mut client = Client::connect(daemon.path(), Some(config.write_timeout()), true).unwrap();

    service.start(&mut client, &mut clock).unwrap();
    let mut feed = LineArrivals::new(Cursor::new("3\n\n150\n"));
    service.run(&mut client, &mut clock, &mut feed).unwrap();
    drop(client);

    let cmds = daemon.commands();
    assert_eq!(cmds[0], Command::SetBrightness(40));

    // "3": 4 s budget at 1 s per frame is 4 frames.
    // "": blank once, no frames.
    // "150": 4 frames of the exclamation mark.
    let renders = 4 + 4;
    assert_eq!(shows(&cmds), 2 + renders * 2 + 1 + 1);
    assert!(lit_colours(&cmds).iter().all(|c| *c == COLOUR_SOON));
}
