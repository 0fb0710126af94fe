use std::net::SocketAddr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener on.
    pub bind_addr: SocketAddr,
    /// `host:port` this node advertises to peers.
    pub advertise_addr: String,
    /// Proof-of-work difficulty in leading zero hex digits.
    pub difficulty: u32,
    /// Per-request timeout for peer I/O.
    pub peer_timeout: Duration,
    /// Wall-clock bound on `/mine`; `None` leaves the search unbounded.
    pub seal_timeout: Option<Duration>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9000".parse().expect("static addr"),
            advertise_addr: "127.0.0.1:9000".to_string(),
            difficulty: 2,
            peer_timeout: Duration::from_secs(5),
            seal_timeout: None,
        }
    }
}
