//! Process-scoped HTTP connection pool shared by the provider clients
//!
//! The pool is built on first use and dropped on shutdown. Clones of
//! [`reqwest::Client`] share one pool, so callers hold a clone only for the
//! duration of a request.

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::RwLock;
use reqwest::{Client, Response};
use tracing::{debug, info};

/// Lazily acquired HTTP session
pub struct HttpSession {
    client: RwLock<Option<Client>>,
    name: String,
}

impl HttpSession {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            client: RwLock::new(None),
            name: name.to_string(),
        })
    }

    /// Return the shared client, building it on first use
    pub fn acquire(&self) -> Result<Client> {
        if let Some(client) = self.client.read().as_ref() {
            return Ok(client.clone());
        }

        let mut slot = self.client.write();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }

        let client = Client::builder()
            .user_agent(concat!("cinegram/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        info!(session = %self.name, "HTTP session opened");
        *slot = Some(client.clone());
        Ok(client)
    }

    /// Drop the shared client. A later [`acquire`](Self::acquire) opens a new one.
    pub fn release(&self) {
        if self.client.write().take().is_some() {
            info!(session = %self.name, "HTTP session closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.client.read().is_some()
    }

    /// GET request with query parameters on the shared client
    pub async fn get_with_query<T: serde::Serialize + ?Sized>(
        &self,
        url: &str,
        query: &T,
    ) -> Result<Response> {
        let client = self.acquire()?;
        debug!(session = %self.name, url = %url, "Making GET request with query");

        client
            .get(url)
            .query(query)
            .send()
            .await
            .context("HTTP request failed")
    }
}
