pub mod endpoint;
pub mod info;
pub mod query;

pub use endpoint::Endpoint;

use reqwest::Method;

/// Path of the Beacon descriptor, relative to the base url.
pub const BEACON_INFO_PATH: &str = ".";
/// Path of the allele query, relative to the base url.
pub const BEACON_QUERY_PATH: &str = "query";

/// How an endpoint carries its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Nothing is sent besides the method and path.
    Empty,
    /// Parameters as URL query pairs.
    QueryString,
    /// The request serialized as a JSON body.
    JsonBody,
}

/// What a successful response on an endpoint decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Beacon,
    AlleleResponse,
    Raw,
}

/// One row of the Beacon HTTP surface.
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub encoding: Encoding,
    pub response: ResponseKind,
}

impl Route {
    const fn new(
        method: Method,
        path: &'static str,
        encoding: Encoding,
        response: ResponseKind,
    ) -> Self {
        Self {
            method,
            path,
            encoding,
            response,
        }
    }

    /// A short label such as `GET query`.
    pub fn label(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

/// Every (verb, path) combination the client knows how to issue.
pub const ROUTES: [Route; 8] = [
    Route::new(Method::GET, BEACON_INFO_PATH, Encoding::Empty, ResponseKind::Beacon),
    Route::new(Method::POST, BEACON_INFO_PATH, Encoding::Empty, ResponseKind::Raw),
    Route::new(Method::PUT, BEACON_INFO_PATH, Encoding::Empty, ResponseKind::Raw),
    Route::new(Method::DELETE, BEACON_INFO_PATH, Encoding::Empty, ResponseKind::Raw),
    Route::new(
        Method::GET,
        BEACON_QUERY_PATH,
        Encoding::QueryString,
        ResponseKind::AlleleResponse,
    ),
    Route::new(
        Method::POST,
        BEACON_QUERY_PATH,
        Encoding::JsonBody,
        ResponseKind::AlleleResponse,
    ),
    Route::new(
        Method::DELETE,
        BEACON_QUERY_PATH,
        Encoding::Empty,
        ResponseKind::AlleleResponse,
    ),
    Route::new(
        Method::PUT,
        BEACON_QUERY_PATH,
        Encoding::Empty,
        ResponseKind::AlleleResponse,
    ),
];
