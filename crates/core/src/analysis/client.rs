//! HTTP client for the remote analysis service

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::types::*;
use crate::error::{Error, Result};

pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full analysis of a position
    pub async fn analyse(&self, request: &AnalyseRequest) -> Result<AnalyseResponse> {
        self.post("/analyse", request).await
    }

    /// Just the engine's preferred move
    pub async fn best_move(&self, request: &AnalyseRequest) -> Result<BestMoveResponse> {
        self.post("/bestmove", request).await
    }

    pub async fn health(&self) -> Result<HealthResponse> {
        let response = self.client.get(self.url("/health")).send().await?;

        if !response.status().is_success() {
            return Err(Error::Analysis(format!(
                "health check failed: {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.client.post(self.url(path)).json(body).send().await?;

        if !response.status().is_success() {
            return Err(Error::Analysis(format!(
                "{} returned {} - {}",
                path,
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
