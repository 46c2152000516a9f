//! Public client surface + builder.
//! Defaults for endpoints and the UA live in `constants`.

mod constants;

use crate::core::SwError;
use constants::{DEFAULT_BASE_PAGE, DEFAULT_BASE_YQL, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Thin wrapper that holds a configured HTTP client and base URLs.
///
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct SwClient {
    http: Client,
    base_yql: Url,
    base_page: Url,
}

impl Default for SwClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SwClient {
    /// Create a new builder.
    pub fn builder() -> SwClientBuilder {
        SwClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_yql(&self) -> &Url {
        &self.base_yql
    }
    pub(crate) fn base_page(&self) -> &Url {
        &self.base_page
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`SwClient`].
#[derive(Debug, Default)]
pub struct SwClientBuilder {
    user_agent: Option<String>,
    base_yql: Option<Url>,
    base_page: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SwClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the YQL endpoint (e.g., `https://query.yahooapis.com/v1/public/yql`).
    #[must_use]
    pub fn base_yql(mut self, url: Url) -> Self {
        self.base_yql = Some(url);
        self
    }

    /// Override the security page that scraping queries point at (e.g., `http://finance.yahoo.com/q`).
    ///
    /// This URL is embedded in the query text, it is never requested directly.
    #[must_use]
    pub fn base_page(mut self, url: Url) -> Self {
        self.base_page = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<SwClient, SwError> {
        let base_yql = match self.base_yql {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_YQL)?,
        };
        let base_page = match self.base_page {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_PAGE)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SwClient {
            http,
            base_yql,
            base_page,
        })
    }
}
