use log::debug;
use reqwest::{Client, RequestBuilder, Url};
use std::{future::Future, marker::PhantomData};

use crate::{body::DecodeBody, endpoints::Endpoint, error::TransportError};

/// Builder for a request to one Beacon endpoint
///
/// # Type Parameters
///
/// * `Response` - The type a successful response decodes into
pub struct BeaconRequestBuilder<Response>(pub RequestBuilder, pub PhantomData<Response>);

/// A client for interacting with a Beacon
///
/// Wraps a reqwest::Client together with the base url of the Beacon. Endpoint paths are
/// resolved relative to that base url, so `http://host/beacon` serves its descriptor at
/// `http://host/beacon/` and its allele query at `http://host/beacon/query`.
#[derive(Clone, Debug)]
pub struct BeaconClient {
    pub client: Client,
    base_url: Url,
}

impl BeaconClient {
    /// Creates a client with a default reqwest::Client
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InvalidBaseUrl` if `base_url` is not an absolute url
    pub fn new(base_url: &str) -> Result<Self, TransportError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client on top of an existing reqwest::Client
    ///
    /// Timeouts, proxies and TLS settings are whatever that client was built with.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, TransportError> {
        Ok(Self {
            client,
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// The base url, always ending with `/`.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an endpoint path against the base url.
    pub fn endpoint_url(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Creates a request builder for any endpoint
    ///
    /// Query pairs are appended in the order the endpoint gives them and the body, if any,
    /// is sent as JSON. Nothing else is added.
    ///
    /// # Returns
    ///
    /// A `BeaconRequestBuilder` that can be sent as is with [send](BeaconRequestBuilder::send)
    /// or decoded with [send_and_parse](BeaconRequestBuilder::send_and_parse)
    pub fn request<E: Endpoint>(
        &self,
        endpoint: &E,
    ) -> Result<BeaconRequestBuilder<E::Response>, TransportError> {
        let url = self.endpoint_url(endpoint.path())?;
        debug!("{} {}", endpoint.method(), url);

        let mut builder = self.client.request(endpoint.method(), url);
        let query = endpoint.query_pairs();
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        if let Some(body) = endpoint.request_body() {
            builder = builder.json(body);
        }
        Ok(builder.into())
    }

    /// Sends a request to the endpoint and decodes the response.
    pub async fn execute<E: Endpoint>(&self, endpoint: &E) -> Result<E::Response, TransportError> {
        self.request(endpoint)?.send_and_parse().await
    }
}

impl<R: DecodeBody> BeaconRequestBuilder<R> {
    /// Sends the configured request and returns the raw response
    ///
    /// The status code is not checked, so this is the way to look at how a Beacon
    /// answers a verb it is expected to reject.
    pub fn send(self) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> {
        self.0.send()
    }

    /// Sends the configured request and decodes a successful response
    ///
    /// # Errors
    ///
    /// - `TransportError::Request` if the request could not be sent or the body not read
    /// - `TransportError::Status` if the status is not 2xx, with the status and body as sent
    /// - `TransportError::Serde` if the body does not decode
    pub async fn send_and_parse(self) -> Result<R, TransportError> {
        let response = self.0.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            debug!("request failed with status {status}");
            return Err(TransportError::Status {
                status,
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        R::decode(body)
    }
}

impl<R> From<RequestBuilder> for BeaconRequestBuilder<R> {
    fn from(value: RequestBuilder) -> Self {
        BeaconRequestBuilder(value, PhantomData)
    }
}

fn normalize_base_url(raw: &str) -> Result<Url, TransportError> {
    let invalid = |reason: String| TransportError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("url cannot be used as a base".to_string()));
    }
    // relative paths replace the last segment unless the base ends with '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
