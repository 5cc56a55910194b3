//! HTTP client for the mini-app backend API.

use std::time::Duration;

use url::Url;

use crate::executor;
use crate::types::{ManifestEntity, MiniAppInfo};
use crate::Error;

/// Request timeout for backend calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!("miniapp-rust-sdk/", env!("CARGO_PKG_VERSION"));

/// Construction parameters for [`ApiClient`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub host_app_id: String,
    pub subscription_key: String,
    pub host_app_version_id: String,
    pub is_test_mode: bool,
}

impl ClientConfig {
    /// Creates a config with test mode off.
    pub fn new(
        base_url: &str,
        host_app_id: &str,
        subscription_key: &str,
        host_app_version_id: &str,
    ) -> Self {
        Self {
            base_url: base_url.to_string(),
            host_app_id: host_app_id.to_string(),
            subscription_key: subscription_key.to_string(),
            host_app_version_id: host_app_version_id.to_string(),
            is_test_mode: false,
        }
    }

    /// Routes every request through the test path segment of the backend.
    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.is_test_mode = enabled;
        self
    }
}

/// HTTP client for the mini-app backend API.
///
/// All fields are fixed at construction; concurrent calls share nothing
/// mutable. Auth headers are attached per request, not as transport
/// defaults, so [`ApiClient::download_file`] sends none of them.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: Url,
    host_app_id: String,
    subscription_key: String,
    host_app_version_id: String,
    test_path: Option<&'static str>,
}

impl ApiClient {
    /// Creates a client with its own transport: 30-second timeout and an
    /// SDK user agent.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::sdk_with_source("Failed to build HTTP client", e)
            })?;
        Self::with_http_client(client, config)
    }

    /// Creates a client around a prebuilt transport. Used for testing with
    /// custom timeouts.
    pub fn with_http_client(client: reqwest::Client, config: ClientConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url, e);
            Error::sdk_with_source("Invalid base URL", e)
        })?;
        Ok(Self {
            client,
            base_url,
            host_app_id: config.host_app_id,
            subscription_key: config.subscription_key,
            host_app_version_id: config.host_app_version_id,
            test_path: config.is_test_mode.then_some("test"),
        })
    }

    /// Fetches all mini apps visible to the host app.
    pub async fn list(&self) -> Result<Vec<MiniAppInfo>, Error> {
        let url = self.endpoint(&["host", &self.host_app_id, "miniapps", "list"])?;
        executor::execute(self.get(url)).await
    }

    /// Fetches metadata for one mini app.
    ///
    /// The backend answers with a list; an empty list for a valid-looking
    /// request is an application-level "not found", not an HTTP error.
    pub async fn fetch_info(&self, app_id: &str) -> Result<MiniAppInfo, Error> {
        let url = self.endpoint(&["host", &self.host_app_id, "miniapps", app_id])?;
        let info: Vec<MiniAppInfo> = executor::execute(self.get(url)).await?;
        match info.into_iter().next() {
            Some(info) => Ok(info),
            None => Err(Error::sdk(format!(
                "Server returned no info for the Mini App Id: {}",
                app_id
            ))),
        }
    }

    /// Fetches the file manifest for one mini app version.
    pub async fn fetch_file_list(
        &self,
        mini_app_id: &str,
        version_id: &str,
    ) -> Result<ManifestEntity, Error> {
        let url = self.endpoint(&[
            "host",
            &self.host_app_id,
            "miniapp",
            mini_app_id,
            "version",
            version_id,
            "manifest",
        ])?;
        executor::execute(self.get(url)).await
    }

    /// Downloads a file from an absolute URL, returning the raw body bytes
    /// for the caller to persist.
    ///
    /// Bypasses the host-app-scoped base URL and sends no auth headers.
    pub async fn download_file(&self, url: &str) -> Result<Vec<u8>, Error> {
        let url = Url::parse(url).map_err(|e| {
            tracing::error!("Invalid download URL {}: {}", url, e);
            Error::sdk_with_source("Invalid download URL", e)
        })?;
        executor::execute_raw(self.client.get(url)).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| Error::sdk("Base URL cannot carry path segments"))?;
            path.pop_if_empty();
            if let Some(test_path) = self.test_path {
                path.push(test_path);
            }
            path.extend(segments);
        }
        url.query_pairs_mut()
            .append_pair("hostVersion", &self.host_app_version_id);
        Ok(url)
    }

    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("app-id", &self.host_app_id)
            .header("apikey", &self.subscription_key)
    }
}
