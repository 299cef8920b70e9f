//! Fake `unicornd` for integration tests.
//!
//! Listens on a Unix socket inside a temporary directory, accepts one
//! client and records every byte until the client disconnects. Tests then
//! decode the capture and assert on the full command history.

use std::io::Read;
use std::os::unix::net::UnixListener;
use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use tempfile::TempDir;
use unicorn_eta::pixel::ChannelOrder;
use unicorn_eta::protocol::codec::{Command, decode_all};

pub struct FakeDaemon {
    // Held so the socket directory outlives the listener thread.
    _dir: TempDir,
    path: PathBuf,
    handle: JoinHandle<Vec<u8>>,
}

impl FakeDaemon {
    pub fn spawn() -> Self {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("unicornd.socket");
        let listener = UnixListener::bind(&path).expect("bind fake daemon");

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept client");
            let mut captured = Vec::new();
            stream.read_to_end(&mut captured).expect("read frames");
            captured
        });

        Self {
            _dir: dir,
            path,
            handle,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Wait for the client to hang up and return the raw capture.
    pub fn bytes(self) -> Vec<u8> {
        self.handle.join().expect("fake daemon thread")
    }

    /// Wait for the client to hang up and decode the capture.
    pub fn commands(self) -> Vec<Command> {
        decode_all(&self.bytes(), ChannelOrder::Grb).expect("well-formed frames")
    }
}
