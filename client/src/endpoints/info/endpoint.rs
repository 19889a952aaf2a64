use reqwest::Method;

use crate::{
    body::RawBody,
    endpoints::{info::Beacon, Endpoint, BEACON_INFO_PATH},
};

/// An endpoint for retrieving the Beacon descriptor.
pub struct GetBeacon;

impl Endpoint for GetBeacon {
    type Request = ();
    type Response = Beacon;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &str {
        BEACON_INFO_PATH
    }
}

/// Any verb on the descriptor path. The answer is kept as a raw body.
pub struct BeaconProbe {
    method: Method,
}

impl BeaconProbe {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl Endpoint for BeaconProbe {
    type Request = ();
    type Response = RawBody;

    fn method(&self) -> Method {
        self.method.clone()
    }

    fn path(&self) -> &str {
        BEACON_INFO_PATH
    }
}
