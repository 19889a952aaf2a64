use reqwest::Method;
use serde::Serialize;

use crate::body::DecodeBody;

/// A trait representing a Beacon API endpoint.
///
/// This trait defines the necessary components for an API endpoint, including the request
/// and response types, the HTTP method, the path relative to the Beacon base url and how
/// parameters are encoded. By implementing this trait, a type can be used with the generic
/// [`request`](crate::BeaconClient::request) and [`execute`](crate::BeaconClient::execute)
/// methods of the `BeaconClient`.
pub trait Endpoint {
    /// The type of the request body. Must be serializable.
    type Request: Serialize;
    /// The type of the response body.
    type Response: DecodeBody;

    /// Returns the HTTP method for this endpoint.
    fn method(&self) -> Method;

    /// Returns the URL path for this endpoint, relative to the base url.
    fn path(&self) -> &str;

    /// Returns the URL query pairs, in order. A key may repeat.
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// Returns the request body, if the endpoint sends one.
    fn request_body(&self) -> Option<&Self::Request> {
        None
    }
}
