pub mod endpoint;
pub mod response_types;

pub use endpoint::*;
pub use response_types::*;

use reqwest::Method;

use crate::{body::RawBody, client::BeaconClient, error::TransportError};

impl BeaconClient {
    /// Fetches the Beacon descriptor with `GET .`.
    pub async fn get_beacon(&self) -> Result<Beacon, TransportError> {
        self.execute(&GetBeacon).await
    }

    /// Sends the given verb to the descriptor path and returns the raw body.
    pub async fn probe_beacon(&self, method: Method) -> Result<RawBody, TransportError> {
        self.execute(&BeaconProbe::new(method)).await
    }

    pub async fn post_beacon(&self) -> Result<RawBody, TransportError> {
        self.probe_beacon(Method::POST).await
    }

    pub async fn put_beacon(&self) -> Result<RawBody, TransportError> {
        self.probe_beacon(Method::PUT).await
    }

    pub async fn delete_beacon(&self) -> Result<RawBody, TransportError> {
        self.probe_beacon(Method::DELETE).await
    }
}
