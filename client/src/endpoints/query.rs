pub mod endpoint;
pub mod request_types;
pub mod response_types;

pub use endpoint::*;
pub use request_types::*;
pub use response_types::*;

use reqwest::Method;

use crate::{client::BeaconClient, error::TransportError};

impl BeaconClient {
    /// Queries an allele with `GET query`, parameters in the query string.
    pub async fn query_allele_get(
        &self,
        request: &BeaconAlleleRequest,
    ) -> Result<BeaconAlleleResponse, TransportError> {
        self.execute(&AlleleQueryGet::new(request.clone())).await
    }

    /// Queries an allele with `POST query`, the request as a JSON body.
    pub async fn query_allele_post(
        &self,
        request: &BeaconAlleleRequest,
    ) -> Result<BeaconAlleleResponse, TransportError> {
        self.execute(&AlleleQueryPost::new(request.clone())).await
    }

    /// Sends `DELETE query` without a body.
    pub async fn query_allele_delete(&self) -> Result<BeaconAlleleResponse, TransportError> {
        self.execute(&AlleleQueryProbe::new(Method::DELETE)).await
    }

    /// Sends `PUT query` without a body.
    pub async fn query_allele_put(&self) -> Result<BeaconAlleleResponse, TransportError> {
        self.execute(&AlleleQueryProbe::new(Method::PUT)).await
    }
}
