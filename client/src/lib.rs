pub mod body;
pub mod client;
mod de;
pub mod endpoints;
pub mod error;

// Re-export commonly used types
pub use body::{DecodeBody, RawBody};
pub use client::{BeaconClient, BeaconRequestBuilder};
pub use endpoints::info::{Beacon, BeaconDataset, BeaconOrganization};
pub use endpoints::query::{
    BeaconAlleleRequest, BeaconAlleleRequestBuilder, BeaconAlleleResponse,
    BeaconDatasetAlleleResponse, BeaconError,
};
pub use endpoints::{Encoding, Endpoint, ResponseKind, Route, ROUTES};
pub use error::TransportError;
