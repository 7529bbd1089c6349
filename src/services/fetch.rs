use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::SiteConfig;
use crate::error::{FetchError, FetchResult};
use crate::services::encoding::decode_text;

/// The one place the core touches the network.
///
/// Paths are resolved against the site base URL. Each call makes exactly one
/// GET. The `try_*` methods report why a fetch failed; the plain ones log
/// it and hand back `None`, which is what the render pipeline wants.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    base: Url,
}

impl Fetcher {
    pub fn new(cfg: &SiteConfig) -> FetchResult<Self> {
        let mut base_str = cfg.base_url.trim().to_string();
        if !base_str.ends_with('/') {
            base_str.push('/');
        }

        let base = Url::parse(&base_str).map_err(|e| FetchError::InvalidUrl {
            url: base_str.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|source| FetchError::Transport {
            url: base_str,
            source,
        })?;

        Ok(Fetcher { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn resolve(&self, path: &str) -> FetchResult<Url> {
        self.base.join(path).map_err(|e| FetchError::InvalidUrl {
            url: path.to_string(),
            reason: e.to_string(),
        })
    }

    pub async fn try_bytes(&self, path: &str) -> FetchResult<Vec<u8>> {
        let url = self.resolve(path)?;
        log::debug!("GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

        Ok(bytes.to_vec())
    }

    pub async fn try_text(&self, path: &str) -> FetchResult<String> {
        let bytes = self.try_bytes(path).await?;
        Ok(decode_text(&bytes))
    }

    pub async fn try_json(&self, path: &str) -> FetchResult<Value> {
        let text = self.try_text(path).await?;
        serde_json::from_str(&text).map_err(|source| FetchError::Json {
            url: path.to_string(),
            source,
        })
    }

    pub async fn text(&self, path: &str) -> Option<String> {
        match self.try_text(path).await {
            Ok(t) => Some(t),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }

    pub async fn json(&self, path: &str) -> Option<Value> {
        match self.try_json(path).await {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("{e}");
                None
            }
        }
    }
}
