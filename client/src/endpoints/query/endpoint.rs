use reqwest::Method;

use crate::endpoints::{
    query::{BeaconAlleleRequest, BeaconAlleleResponse},
    Endpoint, BEACON_QUERY_PATH,
};

/// `GET query`, parameters in the query string.
pub struct AlleleQueryGet {
    request: BeaconAlleleRequest,
}

impl AlleleQueryGet {
    pub fn new(request: BeaconAlleleRequest) -> Self {
        Self { request }
    }
}

impl Endpoint for AlleleQueryGet {
    type Request = ();
    type Response = BeaconAlleleResponse;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> &str {
        BEACON_QUERY_PATH
    }

    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.request.query_pairs()
    }
}

/// `POST query`, the request as a JSON body.
pub struct AlleleQueryPost {
    request: BeaconAlleleRequest,
}

impl AlleleQueryPost {
    pub fn new(request: BeaconAlleleRequest) -> Self {
        Self { request }
    }
}

impl Endpoint for AlleleQueryPost {
    type Request = BeaconAlleleRequest;
    type Response = BeaconAlleleResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &str {
        BEACON_QUERY_PATH
    }

    fn request_body(&self) -> Option<&Self::Request> {
        Some(&self.request)
    }
}

/// Any other verb on `query`, sent without parameters or body.
///
/// Used to check how a Beacon treats DELETE and PUT.
pub struct AlleleQueryProbe {
    method: Method,
}

impl AlleleQueryProbe {
    pub fn new(method: Method) -> Self {
        Self { method }
    }
}

impl Endpoint for AlleleQueryProbe {
    type Request = ();
    type Response = BeaconAlleleResponse;

    fn method(&self) -> Method {
        self.method.clone()
    }

    fn path(&self) -> &str {
        BEACON_QUERY_PATH
    }
}
