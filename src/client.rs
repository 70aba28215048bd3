use std::ops::Deref;

use reqwest::{Client, Url, header, header::HeaderValue};
use tracing::debug;

use crate::config::Config;
use crate::errors::{Error, Result};

/// HTTP client bound to one site
#[derive(Clone, Debug)]
pub struct Fetcher(Client);

impl<'a> Fetcher {
    #[rustfmt::skip]
    const ACCEPT: &'a str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";
    const ACCEPT_LANGUAGE: &'a str = "ar,en;q=0.8";

    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .default_headers(Self::set_headers());

        if let Some(proxy) = &config.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self(builder.build()?))
    }

    fn set_headers() -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();

        headers.insert(header::ACCEPT, HeaderValue::from_static(Self::ACCEPT));
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(Self::ACCEPT_LANGUAGE),
        );

        headers
    }

    /// Downloads the page at `url` and returns its markup. Non-success
    /// statuses are errors.
    pub async fn get_text(&self, url: &Url) -> Result<String> {
        debug!(%url, "fetching page");

        let response = self.0.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response.text().await?)
    }
}

impl Deref for Fetcher {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
