// src/api/client.rs
// =============================================================================
// Authenticated access to the content API.
//
// One reqwest Client is built per run with the shared headers installed as
// defaults, so the section fetches and the image downloads all carry the
// same User-Agent, Accept, Referer and Cookie.
//
// Requests are awaited one after another; nothing here spawns tasks.
// =============================================================================

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, REFERER, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{Envelope, Module, RawSection, SectionDetail};
use crate::config::{self, Config};
use crate::error::{Error, Result};

pub struct ApiClient<'a> {
    client: Client,
    config: &'a Config,
}

impl<'a> ApiClient<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_headers(config)?)
            .build()
            .map_err(Error::Client)?;

        Ok(ApiClient { client, config })
    }

    pub fn config(&self) -> &Config {
        self.config
    }

    /// Module name plus its section listing. Any failure here is fatal.
    pub async fn fetch_module(&self) -> Result<Module> {
        let url = self.config.module_url();
        let envelope: Envelope<Module> = self.get_json(&url).await?;
        Ok(envelope.data)
    }

    /// One section's markdown and placement.
    ///
    /// A non-success status comes back as `Error::Status` so the caller can
    /// decide to skip the section rather than abort.
    pub async fn fetch_section(&self, section_id: u64) -> Result<RawSection> {
        let url = self.config.section_url(section_id);
        let envelope: Envelope<SectionDetail> = self.get_json(&url).await?;
        Ok(envelope.data.into_raw(section_id))
    }

    /// Raw bytes of any URL, with the same headers as API calls
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.send(url).await?;
        let bytes = response.bytes().await.map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;
        Ok(bytes.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.send(url).await?;
        let body = response.text().await.map_err(|source| Error::Request {
            url: url.to_string(),
            source,
        })?;

        // Decoding from text (rather than response.json()) keeps serde's
        // error intact for the Decode variant.
        serde_json::from_str(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    async fn send(&self, url: &str) -> Result<reqwest::Response> {
        debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

fn default_headers(config: &Config) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(config::USER_AGENT));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        REFERER,
        HeaderValue::from_str(&config.referer())
            .map_err(|_| Error::InvalidHeader { name: "Referer" })?,
    );

    let mut cookie = HeaderValue::from_str(&config.cookie)
        .map_err(|_| Error::InvalidHeader { name: "Cookie" })?;
    cookie.set_sensitive(true);
    headers.insert(COOKIE, cookie);

    Ok(headers)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does ApiClient have a lifetime ('a)?
//    - It keeps a reference to the Config instead of a copy
//    - The lifetime says "this client cannot outlive the config it borrows"
//    - main owns the Config for the whole run, so this is always true
//
// 2. What are default headers?
//    - Headers reqwest adds to every request made with this Client
//    - Setting them once means no call site can forget the cookie
//
// 3. Why map_err everywhere?
//    - reqwest and serde_json have their own error types
//    - map_err converts them into our Error enum, adding the URL
//    - After that, ? can propagate them
//
// 4. What is DeserializeOwned?
//    - A serde trait for types that can be built from JSON without
//      borrowing from the input text
//    - It lets get_json return any of our record types
// -----------------------------------------------------------------------------
