//! Minimal Adafruit IO v2 REST client.
//!
//! Only the pieces the request viewer needs to exercise are implemented: a
//! swappable base URL, a selected feed, and the data and feed services.

pub mod data;
pub mod feeds;

use crate::domain::model::Feed;
use crate::utils::error::{Result, ViewerError};
use crate::utils::validation::validate_url;
use reqwest::{header, Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

pub use data::DataService;
pub use feeds::FeedService;

pub const DEFAULT_BASE_URL: &str = "https://io.adafruit.com";
pub const AIO_KEY_HEADER: &str = "X-AIO-Key";
pub const USER_AGENT: &str = concat!("Adafruit IO Rust Client v", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct AioClient {
    http: Client,
    base_url: String,
    username: String,
    key: String,
    feed: Option<Feed>,
}

impl AioClient {
    pub fn new(username: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            username: username.into(),
            key: key.into(),
            feed: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Points every subsequent request at `base_url` instead of io.adafruit.com.
    pub fn set_base_url(&mut self, base_url: &str) -> Result<()> {
        validate_url("base_url", base_url)?;
        self.base_url = base_url.to_string();
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_feed(&mut self, feed: Feed) {
        self.feed = Some(feed);
    }

    pub fn feed(&self) -> Option<&Feed> {
        self.feed.as_ref()
    }

    pub fn data(&self) -> DataService<'_> {
        DataService::new(self)
    }

    pub fn feeds(&self) -> FeedService<'_> {
        FeedService::new(self)
    }

    /// Builds `{base}/api/v2/{username}/{segments..}`; an empty username is skipped.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        {
            let mut path =
                url.path_segments_mut()
                    .map_err(|_| ViewerError::InvalidConfigValueError {
                        field: "base_url".to_string(),
                        value: self.base_url.clone(),
                        reason: "URL cannot be used as a base".to_string(),
                    })?;
            path.pop_if_empty().push("api").push("v2");
            if !self.username.is_empty() {
                path.push(&self.username);
            }
            path.extend(segments);
        }
        Ok(url)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(self.request(Method::GET, url)).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(Method::POST, url).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, url: Url) -> Result<()> {
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("Sending {} {}", method, url);
        self.http
            .request(method, url)
            .header(header::ACCEPT, "application/json")
            .header(header::USER_AGENT, USER_AGENT)
            .header(AIO_KEY_HEADER, self.key.as_str())
    }

    /// Sends the request; any non-2xx status becomes `ApiStatusError`.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("Adafruit IO response status: {}", status);

        if !status.is_success() {
            return Err(ViewerError::ApiStatusError {
                status: status.as_u16(),
                body: response.text().await?,
            });
        }

        Ok(response)
    }
}

/// Redirects `client` to a local stand-in. Returns `false` when `address` is empty.
pub fn redirect(client: &mut AioClient, address: &str) -> Result<bool> {
    if address.is_empty() {
        return Ok(false);
    }
    client.set_base_url(address)?;
    Ok(true)
}
