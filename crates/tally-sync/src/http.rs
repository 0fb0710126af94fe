use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{SyncError, SyncResult};
use crate::transport::PeerTransport;
use crate::types::{FullChainResponse, RegisterRequest, StatusResponse};

/// HTTP peer transport with a bounded per-request timeout.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> SyncResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SyncError::Transport(e.to_string()))?;
        Ok(Self { client })
    }

    fn classify(peer: &str, err: reqwest::Error) -> SyncError {
        if err.is_timeout() {
            SyncError::PeerTimeout {
                peer: peer.to_string(),
            }
        } else if err.is_connect() {
            SyncError::PeerUnreachable {
                peer: peer.to_string(),
            }
        } else if err.is_decode() || err.is_status() {
            SyncError::MalformedResponse {
                peer: peer.to_string(),
                detail: err.to_string(),
            }
        } else {
            SyncError::Transport(err.to_string())
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        peer: &str,
        path: &str,
    ) -> SyncResult<T> {
        let response = self
            .client
            .get(format!("http://{peer}{path}"))
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::classify(peer, e))?;
        response.json().await.map_err(|e| Self::classify(peer, e))
    }
}

#[async_trait]
impl PeerTransport for HttpTransport {
    async fn fetch_status(&self, peer: &str) -> SyncResult<StatusResponse> {
        self.get_json(peer, "/status").await
    }

    async fn fetch_full_chain(&self, peer: &str) -> SyncResult<FullChainResponse> {
        self.get_json(peer, "/fullnode").await
    }

    async fn request_sync(&self, peer: &str) -> SyncResult<()> {
        self.client
            .get(format!("http://{peer}/sync"))
            .query(&[("propagate", "false")])
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::classify(peer, e))?;
        Ok(())
    }

    async fn register_node(&self, peer: &str, node: &str, propagate: bool) -> SyncResult<()> {
        self.client
            .post(format!("http://{peer}/register_node"))
            .json(&RegisterRequest {
                node: node.to_string(),
                propagate,
            })
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| Self::classify(peer, e))?;
        Ok(())
    }
}
