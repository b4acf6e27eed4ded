//! UDP Server
//!
//! Receives request datagrams and answers them sequentially, one datagram
//! at a time with no worker pool. Receive errors are logged and skipped;
//! the loop never dies because of one bad exchange.

use std::net::{SocketAddr, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::error::Result;
use crate::service::WeatherService;

/// How often the serve loop wakes to observe the shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(100);

/// UDP server for meteoq
pub struct Server {
    config: Config,
    service: WeatherService,
    socket: UdpSocket,
    shutdown: Arc<AtomicBool>,
}

/// Flag for stopping a running [`Server`] from another thread.
#[derive(Clone)]
pub struct ShutdownHandle(Arc<AtomicBool>);

impl ShutdownHandle {
    /// Ask the server to stop after the current poll interval.
    pub fn signal(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl Server {
    /// Bind the UDP socket per config.
    ///
    /// Binding happens here rather than in [`run`](Server::run) so callers
    /// (tests in particular) can bind port 0 and read the assigned address
    /// before the loop starts.
    pub fn new(config: Config, service: WeatherService) -> Result<Self> {
        let socket = UdpSocket::bind(&config.listen_addr)?;
        // Short receive timeout so the loop observes the shutdown flag.
        socket.set_read_timeout(Some(SHUTDOWN_POLL))?;

        Ok(Self {
            config,
            service,
            socket,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The address the socket actually bound to.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket.local_addr()?)
    }

    /// A handle that stops the serve loop.
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle(Arc::clone(&self.shutdown))
    }

    /// Serve datagrams until shutdown is signalled (blocking).
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(
            "listening on {} ({} responses)",
            self.local_addr()?,
            self.service.wire_format()
        );

        let mut buf = vec![0u8; self.config.max_datagram];

        while !self.shutdown.load(Ordering::Relaxed) {
            let (len, peer) = match self.socket.recv_from(&mut buf) {
                Ok(received) => received,
                // Poll tick: no datagram within the timeout.
                // (Windows reports TimedOut instead of WouldBlock.)
                Err(ref e)
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut =>
                {
                    continue;
                }
                Err(e) => {
                    tracing::warn!("recv error: {}", e);
                    continue;
                }
            };

            tracing::debug!("{} byte request from {}", len, peer);

            let reply = self.service.handle_datagram(&buf[..len]);

            if let Err(e) = self.socket.send_to(&reply, peer) {
                tracing::warn!("failed to send response to {}: {}", peer, e);
            }
        }

        tracing::info!("server stopped");
        Ok(())
    }
}
