//! # Reachability
//!
//! A synchronous "can we reach the network right now" check, asked before
//! every refresh. It is independent of the HTTP client. Callers on the
//! runtime run it on the blocking pool.

use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::{Duration, Instant};

use log::{debug, warn};

pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_millis(1500);

pub trait Reachability: Send + Sync {
    fn is_reachable(&self) -> bool;
}

/// Used when the check is switched off.
pub struct AlwaysReachable;

impl Reachability for AlwaysReachable {
    fn is_reachable(&self) -> bool {
        true
    }
}

/// Reachable if a TCP connection to the API host opens within `timeout`.
///
/// `timeout` bounds the connect attempts across all resolved addresses,
/// not each one.
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            host: host.into(),
            port,
            timeout,
        }
    }

    /// Probe the host and port of an `http(s)://` URL.
    /// Returns `None` if the URL has no host.
    pub fn for_url(url: &str, timeout: Duration) -> Option<Self> {
        let parsed = reqwest::Url::parse(url).ok()?;
        let host = parsed.host_str()?.trim_matches(['[', ']']).to_string();
        let port = parsed.port_or_known_default()?;
        Some(Self::new(host, port, timeout))
    }

    fn addrs(&self) -> Vec<SocketAddr> {
        match (self.host.as_str(), self.port).to_socket_addrs() {
            Ok(addrs) => addrs.collect(),
            Err(e) => {
                debug!("Could not resolve {}: {}", self.host, e);
                Vec::new()
            }
        }
    }
}

impl Reachability for TcpProbe {
    fn is_reachable(&self) -> bool {
        let deadline = Instant::now() + self.timeout;
        let reachable = self.addrs().iter().any(|addr| {
            let remaining = deadline.saturating_duration_since(Instant::now());
            // connect_timeout rejects a zero duration
            !remaining.is_zero() && TcpStream::connect_timeout(addr, remaining).is_ok()
        });
        if !reachable {
            warn!("{}:{} is not reachable", self.host, self.port);
        }
        reachable
    }
}
