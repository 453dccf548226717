//! HTTP probing.
//!
//! # Responsibilities
//! - Issue a single `GET` against a target URL
//! - Treat any HTTP response as "responded", whatever its status
//! - Surface transport failures as `ProbeError`

use std::time::Duration;

use futures_util::future::BoxFuture;

use crate::config::ProbeConfig;
use crate::probe::{Probe, ProbeError};
use crate::race::Target;

/// Probe that pings targets over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpProbe {
    client: reqwest::Client,
}

impl HttpProbe {
    /// Build a probe from configuration.
    pub fn new(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()?;

        Ok(Self { client })
    }

    /// Wrap an existing client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Probe for HttpProbe {
    fn ping(&self, target: &Target) -> BoxFuture<'static, Result<(), ProbeError>> {
        let client = self.client.clone();
        let url = target.as_str().to_owned();

        Box::pin(async move {
            let response = client.get(&url).send().await?;
            tracing::trace!(url = %url, status = %response.status(), "Probe response received");
            Ok(())
        })
    }
}
