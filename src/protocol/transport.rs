//! Transport abstraction — the byte channel frames are written to.
//!
//! Concrete implementations:
//! - Unix domain socket to `unicornd` (production)
//! - Null sink (dry runs without hardware)
//! - Shared handle, so a second thread (the interrupt handler) can write
//!   whole frames between the display loop's frames
//!
//! The display client is generic over `Transport`, so tests substitute a
//! recording transport without touching client logic.

use std::io::{self, Write};
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use log::debug;

use crate::error::Error;

/// Default `unicornd` socket.
pub const SOCKET_PATH: &str = "/var/run/unicornd.socket";

/// Byte-oriented, write-only channel to the daemon.
pub trait Transport {
    /// Write one whole frame. Partial frames must never be left behind
    /// on success.
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

/// A transport that discards every frame.
pub struct NullTransport;

impl Transport for NullTransport {
    fn write_frame(&mut self, _frame: &[u8]) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        (**self).write_frame(frame)
    }
}

/// Blocking connection to the daemon's Unix socket.
pub struct UnixSocketTransport {
    path: PathBuf,
    stream: UnixStream,
}

impl UnixSocketTransport {
    /// Open the socket. `write_timeout` bounds every later write; `None`
    /// blocks for as long as the daemon applies backpressure.
    pub fn connect(path: impl AsRef<Path>, write_timeout: Option<Duration>) -> Result<Self, Error> {
        let path = path.as_ref().to_path_buf();
        debug!("Connecting to ({})...", path.display());

        let stream = UnixStream::connect(&path).map_err(|source| Error::Connect {
            path: path.clone(),
            source,
        })?;
        stream
            .set_write_timeout(write_timeout)
            .map_err(|source| Error::Connect {
                path: path.clone(),
                source,
            })?;

        Ok(Self { path, stream })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for UnixSocketTransport {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.stream.write_all(frame)
    }
}

/// A transport behind a mutex. Clones write to the same inner transport,
/// one whole frame per lock.
pub struct SharedTransport<T>(Arc<Mutex<T>>);

impl<T> SharedTransport<T> {
    pub fn new(inner: T) -> Self {
        Self(Arc::new(Mutex::new(inner)))
    }

    /// Exclusive access until the guard drops. A poisoned lock still
    /// yields the transport; frames are written whole or not at all.
    pub fn lock(&self) -> MutexGuard<'_, T> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for SharedTransport<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: Transport> Transport for SharedTransport<T> {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.lock().write_frame(frame)
    }
}
