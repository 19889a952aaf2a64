use beacon_client::{endpoints::BEACON_INFO_PATH, BeaconAlleleRequest, Route};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// What a Beacon should answer on a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expectation {
    /// A 2xx status with a body of the route's response type.
    Success,
    /// A 4xx status.
    Rejected,
    /// Anything, the status is only recorded.
    Any,
}

impl Expectation {
    /// Whether the status alone satisfies the expectation. For `Success` the
    /// body still has to decode.
    pub fn accepts_status(self, status: StatusCode) -> bool {
        match self {
            Expectation::Success => status.is_success(),
            Expectation::Rejected => status.is_client_error(),
            Expectation::Any => true,
        }
    }
}

/// Expected outcome for each (verb, path) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectations {
    pub info_get: Expectation,
    pub info_post: Expectation,
    pub info_put: Expectation,
    pub info_delete: Expectation,
    pub query_get: Expectation,
    pub query_post: Expectation,
    pub query_put: Expectation,
    pub query_delete: Expectation,
}

impl Default for Expectations {
    fn default() -> Self {
        Self {
            info_get: Expectation::Success,
            info_post: Expectation::Rejected,
            info_put: Expectation::Rejected,
            info_delete: Expectation::Rejected,
            query_get: Expectation::Success,
            query_post: Expectation::Success,
            query_put: Expectation::Rejected,
            query_delete: Expectation::Rejected,
        }
    }
}

impl Expectations {
    pub fn for_route(&self, route: &Route) -> Expectation {
        let info = route.path == BEACON_INFO_PATH;
        match route.method.as_str() {
            "GET" if info => self.info_get,
            "POST" if info => self.info_post,
            "PUT" if info => self.info_put,
            "DELETE" if info => self.info_delete,
            "GET" => self.query_get,
            "POST" => self.query_post,
            "PUT" => self.query_put,
            "DELETE" => self.query_delete,
            _ => Expectation::Any,
        }
    }
}

/// Settings of a compliance run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComplianceConfig {
    /// Send the POST query twice and require equal answers
    pub check_idempotency: bool,
    pub expectations: Expectations,
    /// Query used on `GET query` and `POST query`. Falls back to the first
    /// sample the Beacon advertises, then to [`default_sample_query`].
    pub sample_query: Option<BeaconAlleleRequest>,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            check_idempotency: true,
            expectations: Expectations::default(),
            sample_query: None,
        }
    }
}

/// chr1:100 A>T on GRCh37.
pub fn default_sample_query() -> BeaconAlleleRequest {
    BeaconAlleleRequest::builder()
        .reference_name("1")
        .start(100)
        .reference_bases("A")
        .alternate_bases("T")
        .assembly_id("GRCh37")
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use beacon_client::ROUTES;
    use reqwest::Method;

    #[test]
    fn test_default_expectations_per_route() {
        let expectations = Expectations::default();
        for route in ROUTES.iter() {
            let expected = expectations.for_route(route);
            let should_succeed = route.method == Method::GET
                || (route.method == Method::POST && route.path == "query");
            if should_succeed {
                assert_eq!(expected, Expectation::Success, "{}", route.label());
            } else {
                assert_eq!(expected, Expectation::Rejected, "{}", route.label());
            }
        }
    }

    #[test]
    fn test_expectation_accepts_status() {
        assert!(Expectation::Success.accepts_status(StatusCode::OK));
        assert!(!Expectation::Success.accepts_status(StatusCode::METHOD_NOT_ALLOWED));
        assert!(Expectation::Rejected.accepts_status(StatusCode::METHOD_NOT_ALLOWED));
        assert!(Expectation::Rejected.accepts_status(StatusCode::BAD_REQUEST));
        assert!(!Expectation::Rejected.accepts_status(StatusCode::OK));
        assert!(!Expectation::Rejected.accepts_status(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(Expectation::Any.accepts_status(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: ComplianceConfig =
            serde_json::from_str(r#"{"expectations": {"query_put": "any"}}"#).unwrap();
        assert!(config.check_idempotency);
        assert_eq!(config.expectations.query_put, Expectation::Any);
        assert_eq!(config.expectations.query_delete, Expectation::Rejected);
        assert!(config.sample_query.is_none());
    }
}
