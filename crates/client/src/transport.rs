//! Narrow HTTP shim: one request in, one typed document out.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Transport {
    config: Config,
    http: reqwest::Client,
}

impl Transport {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str, token: &str) -> Result<R> {
        let body = self.send::<()>(Method::GET, path, token, None).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        token: &str,
        body: &B,
    ) -> Result<R> {
        let body = self.send(Method::POST, path, token, Some(body)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// PUT with no request body, response body discarded (associations).
    pub async fn put_discard(&self, path: &str, token: &str) -> Result<()> {
        self.send::<()>(Method::PUT, path, token, None).await?;
        Ok(())
    }

    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        token: &str,
        body: Option<&B>,
    ) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.config.host(), path);
        tracing::debug!(%method, %url, "api request");

        let mut request = self
            .http
            .request(method, &url)
            .header(AUTHORIZATION, format!("bearer {token}"));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }

        tracing::debug!(%status, %url, "api request failed");
        if status == StatusCode::NOT_FOUND {
            Err(Error::NotFound {
                path: path.to_string(),
            })
        } else {
            Err(Error::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
        }
    }
}
