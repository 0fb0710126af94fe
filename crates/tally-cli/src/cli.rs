use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use tally_server::ServerConfig;

#[derive(Parser)]
#[command(name = "tally", about = "Tally — a minimal proof-of-work ledger node", version)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, default_value_t = 9000)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// host:port advertised to peers (defaults to host:port)
    #[arg(long)]
    pub advertise: Option<String>,

    /// Proof-of-work difficulty in leading zero hex digits
    #[arg(short, long, default_value_t = 2)]
    pub difficulty: u32,

    /// Known peer address (host:port); repeatable
    #[arg(long = "peer")]
    pub peers: Vec<String>,

    /// Bound on the /mine nonce search, in seconds; unbounded when absent
    #[arg(long)]
    pub seal_timeout: Option<u64>,

    /// Per-request peer timeout, in seconds
    #[arg(long, default_value_t = 5)]
    pub peer_timeout: u64,
}

impl Cli {
    pub fn server_config(&self) -> anyhow::Result<ServerConfig> {
        let bind = format!("{}:{}", self.host, self.port);
        Ok(ServerConfig {
            bind_addr: bind
                .parse()
                .with_context(|| format!("invalid bind address {bind}"))?,
            advertise_addr: self.advertise.clone().unwrap_or(bind),
            difficulty: self.difficulty,
            peer_timeout: Duration::from_secs(self.peer_timeout),
            seal_timeout: self.seal_timeout.map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["tally"]).unwrap();
        assert_eq!(cli.port, 9000);
        assert_eq!(cli.difficulty, 2);
        assert!(cli.peers.is_empty());
        let config = cli.server_config().unwrap();
        assert_eq!(config.advertise_addr, "127.0.0.1:9000");
        assert!(config.seal_timeout.is_none());
    }

    #[test]
    fn peers_are_repeatable() {
        let cli =
            Cli::try_parse_from(["tally", "--peer", "a:1", "--peer", "b:2", "-p", "9001"]).unwrap();
        assert_eq!(cli.peers, vec!["a:1", "b:2"]);
        assert_eq!(cli.server_config().unwrap().advertise_addr, "127.0.0.1:9001");
    }

    #[test]
    fn bad_host_is_rejected() {
        let cli = Cli::try_parse_from(["tally", "--host", "not an ip"]).unwrap();
        assert!(cli.server_config().is_err());
    }
}
