//! TCP Server
//!
//! Accepts connections and runs each one as a [`Session`] on its own thread.

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crate::config::Config;
use crate::error::{Result, SchedulerError};
use crate::store::Store;

use super::session::Session;

/// TCP listener for the scheduler service
///
/// Unbounded: every accepted connection gets a thread, and sessions share
/// nothing but the store.
pub struct Server {
    config: Config,
    store: Arc<dyn Store>,
    listener: TcpListener,
    local_addr: SocketAddr,
    shutdown: Arc<AtomicBool>,
}

impl Server {
    /// Bind the listening socket
    pub fn bind(config: Config, store: Arc<dyn Store>) -> Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr).map_err(|e| {
            SchedulerError::Config(format!("cannot listen on {}: {}", config.listen_addr, e))
        })?;
        let local_addr = listener.local_addr()?;

        Ok(Self {
            config,
            store,
            listener,
            local_addr,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// The bound address (resolves port 0)
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// A handle that stops the accept loop from another thread
    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            flag: Arc::clone(&self.shutdown),
            addr: self.local_addr,
        }
    }

    /// Accept connections until shut down (blocking)
    ///
    /// Sessions already running are left to finish on their own.
    pub fn run(&self) -> Result<()> {
        tracing::info!("Listening on {}", self.local_addr);
        let mut next_id: u64 = 0;

        for stream in self.listener.incoming() {
            if self.shutdown.load(Ordering::Acquire) {
                break;
            }

            let stream = match stream {
                Ok(stream) => stream,
                Err(e) => {
                    tracing::warn!("Failed to accept connection: {}", e);
                    continue;
                }
            };

            next_id += 1;
            self.spawn_session(next_id, stream);
        }

        tracing::info!("Listener on {} stopped", self.local_addr);
        Ok(())
    }

    fn spawn_session(&self, id: u64, stream: TcpStream) {
        let store = Arc::clone(&self.store);
        let nodelay = self.config.nodelay;

        let spawned = thread::Builder::new()
            .name(format!("session-{}", id))
            .spawn(move || {
                let mut session = match Session::from_tcp(stream, store, nodelay) {
                    Ok(session) => session,
                    Err(e) => {
                        tracing::warn!("Could not set up session {}: {}", id, e);
                        return;
                    }
                };
                tracing::debug!("Client {} connected from {}", id, session.peer_addr());

                if let Err(e) = session.run() {
                    tracing::warn!("Session {} failed: {}", id, e);
                }
            });

        if let Err(e) = spawned {
            tracing::warn!("Could not spawn thread for client {}: {}", id, e);
        }
    }
}

/// Stops a running [`Server`]
#[derive(Debug, Clone)]
pub struct ShutdownHandle {
    flag: Arc<AtomicBool>,
    addr: SocketAddr,
}

impl ShutdownHandle {
    /// Signal the server to stop accepting
    ///
    /// `accept` blocks, so this also makes one throwaway connection to wake
    /// the loop up.
    pub fn shutdown(&self) {
        self.flag.store(true, Ordering::Release);

        let mut wake = self.addr;
        if wake.ip().is_unspecified() {
            wake.set_ip(match wake.ip() {
                IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
                IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
            });
        }
        if let Err(e) = TcpStream::connect(wake) {
            tracing::debug!("Wake-up connection to {} failed: {}", wake, e);
        }
    }
}
