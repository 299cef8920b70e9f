//! Integration tests: Client → Unix socket → fake daemon.

use std::path::PathBuf;
use std::time::Duration;

use unicorn_eta::display::glyphs::{Panel, draw_digit};
use unicorn_eta::display::matrix::{Matrix, circle, de_matrix};
use unicorn_eta::pixel::{BLACK, Pixel, Position};
use unicorn_eta::protocol::codec::Command;
use unicorn_eta::{Client, Error};

use super::fake_daemon::FakeDaemon;

const TIMEOUT: Option<Duration> = Some(Duration::from_secs(5));

#[test]
fn bytes_on_the_wire_match_layout() {
    let daemon = FakeDaemon::spawn();
    let mut client = Client::connect(daemon.path(), TIMEOUT, false).unwrap();

    client.set_brightness(200).unwrap();
    client.set_pixel(1, 2, 10, 20, 30).unwrap();
    client.show().unwrap();
    drop(client);

    assert_eq!(daemon.bytes(), vec![0, 200, 1, 1, 2, 20, 10, 30, 3]);
}

#[test]
fn rejected_calls_leave_no_trace() {
    let daemon = FakeDaemon::spawn();
    let mut client = Client::connect(daemon.path(), TIMEOUT, false).unwrap();

    assert!(client.set_brightness(256).unwrap_err().is_validation());
    assert!(client.set_pixel(8, 0, 1, 1, 1).unwrap_err().is_validation());
    assert!(client.set_pixel(0, 8, 1, 1, 1).unwrap_err().is_validation());
    assert!(client.set_all_pixels(&[BLACK; 10]).unwrap_err().is_validation());
    client.show().unwrap();
    drop(client);

    assert_eq!(daemon.bytes(), vec![3]);
}

#[test]
fn set_all_pixels_is_one_frame() {
    let daemon = FakeDaemon::spawn();
    let mut client = Client::connect(daemon.path(), TIMEOUT, false).unwrap();
    client.set_all_pixels(&[Pixel::rgb(10, 20, 30); 64]).unwrap();
    drop(client);

    let bytes = daemon.bytes();
    assert_eq!(bytes.len(), 193);
    assert_eq!(bytes[0], 2);
    assert!(bytes[1..].chunks(3).all(|c| c == [20, 10, 30]));
}

#[test]
fn clear_then_digit() {
    let daemon = FakeDaemon::spawn();
    let mut client = Client::connect(daemon.path(), TIMEOUT, true).unwrap();
    client.clear().unwrap();
    draw_digit(&mut client, 1, Panel::Left, Pixel::rgb(255, 0, 0)).unwrap();
    client.show().unwrap();
    drop(client);

    let cmds = daemon.commands();
    assert_eq!(cmds.len(), 2 + 5 + 1);
    assert_eq!(cmds[0], Command::SetAllPixels([BLACK; 64]));
    assert_eq!(cmds[1], Command::Show);
    assert_eq!(
        cmds[2],
        Command::SetPixel(Position::at(3, 6), Pixel::rgb(255, 0, 0))
    );
    assert_eq!(cmds[7], Command::Show);
}

#[test]
fn rendered_circle_reaches_daemon() {
    let daemon = FakeDaemon::spawn();
    let mut client = Client::connect(daemon.path(), TIMEOUT, false).unwrap();

    let mut m = Matrix::new();
    m.map_supersample(&circle(3, (0, 0), Pixel::rgb(255, 255, 255)));
    let flat = de_matrix(&m);
    client.set_all_pixels(&flat).unwrap();
    client.show().unwrap();
    drop(client);

    let cmds = daemon.commands();
    assert_eq!(cmds, vec![Command::SetAllPixels(flat), Command::Show]);
    assert!(!flat[8 * 3 + 3].is_black());
    assert!(flat[0].is_black());
}

#[test]
fn missing_daemon_is_a_connect_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let path: PathBuf = dir.path().join("nobody-home.socket");
    let err = Client::connect(&path, TIMEOUT, false).err().unwrap();
    assert!(matches!(err, Error::Connect { .. }));
}
