use beacon_client::{
    endpoints::{
        info::{BeaconProbe, GetBeacon},
        query::{AlleleQueryGet, AlleleQueryPost, AlleleQueryProbe},
        BEACON_INFO_PATH,
    },
    Beacon, BeaconAlleleRequest, BeaconAlleleResponse, BeaconClient, DecodeBody, Encoding,
    ResponseKind, Route, ROUTES,
};
use bytes::Bytes;
use futures::future::join_all;
use log::{debug, info, warn};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::{
    config::{default_sample_query, ComplianceConfig, Expectation},
    error::ComplianceError,
    report::ComplianceReport,
};

const IDEMPOTENCY_CHECK: &str = "POST query twice";

/// Result of one check against the Beacon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Route label such as `DELETE query`, or the name of the check.
    pub check: String,
    pub expected: Option<Expectation>,
    pub status: Option<u16>,
    pub passed: bool,
    pub detail: String,
}

/// Status and body of one exchange with the Beacon.
struct Exchange {
    status: StatusCode,
    body: Bytes,
}

/// Drives a [`BeaconClient`] over every route and compares the answers with
/// the configured expectations.
pub struct ComplianceRunner {
    client: BeaconClient,
    config: ComplianceConfig,
}

impl ComplianceRunner {
    pub fn new(client: BeaconClient, config: ComplianceConfig) -> Self {
        Self { client, config }
    }

    /// Runs every check. Failures are recorded in the report, never returned.
    pub async fn run(&self) -> ComplianceReport {
        let routes = ROUTES;
        let (descriptor_routes, probe_routes): (Vec<&Route>, Vec<&Route>) = routes
            .iter()
            .partition(|route| route.response == ResponseKind::Beacon);

        let mut outcomes = Vec::new();
        let mut beacon = None;

        // the descriptor route carries no parameters, any query will do
        let unused = BeaconAlleleRequest::default();
        for route in descriptor_routes {
            let exchange = self.exchange(route, &unused).await;
            if let Ok(Exchange { status, body }) = &exchange {
                if status.is_success() {
                    beacon = Beacon::decode(body.clone()).ok();
                }
            }
            outcomes.push(self.evaluate(route, exchange));
        }

        let sample = self.sample_query(beacon.as_ref());
        info!("Sample query: {}", serde_json::to_string(&sample).unwrap_or_default());

        let sample = &sample;
        let probes = probe_routes.into_iter().map(|route| async move {
            let exchange = self.exchange(route, sample).await;
            self.evaluate(route, exchange)
        });
        outcomes.extend(join_all(probes).await);

        // comparing two answers only makes sense if POST query is meant to answer
        if !self.config.check_idempotency {
            debug!("Idempotency check disabled");
        } else if self.config.expectations.query_post != Expectation::Success {
            debug!(
                "Idempotency check skipped, POST query is expected to be {:?}",
                self.config.expectations.query_post
            );
        } else {
            outcomes.push(self.check_idempotency(sample).await);
        }

        ComplianceReport {
            base_url: self.client.base_url().to_string(),
            beacon_id: beacon.and_then(|beacon| beacon.id),
            outcomes,
        }
    }

    /// The query sent on `GET query` and `POST query`.
    pub fn sample_query(&self, beacon: Option<&Beacon>) -> BeaconAlleleRequest {
        self.config
            .sample_query
            .clone()
            .or_else(|| beacon.and_then(|beacon| beacon.sample_allele_requests.first().cloned()))
            .unwrap_or_else(default_sample_query)
    }

    async fn exchange(
        &self,
        route: &Route,
        sample: &BeaconAlleleRequest,
    ) -> Result<Exchange, ComplianceError> {
        let request = match (route.path, route.encoding) {
            (BEACON_INFO_PATH, _) if route.method == Method::GET => {
                self.client.request(&GetBeacon)?.0
            }
            (BEACON_INFO_PATH, _) => {
                self.client
                    .request(&BeaconProbe::new(route.method.clone()))?
                    .0
            }
            (_, Encoding::QueryString) => {
                self.client.request(&AlleleQueryGet::new(sample.clone()))?.0
            }
            (_, Encoding::JsonBody) => {
                self.client.request(&AlleleQueryPost::new(sample.clone()))?.0
            }
            (_, Encoding::Empty) => {
                self.client
                    .request(&AlleleQueryProbe::new(route.method.clone()))?
                    .0
            }
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!("{} answered {status}", route.label());
        Ok(Exchange { status, body })
    }

    fn evaluate(&self, route: &Route, exchange: Result<Exchange, ComplianceError>) -> CheckOutcome {
        let expected = self.config.expectations.for_route(route);

        let (status, passed, detail) = match exchange {
            Err(e) => (None, expected == Expectation::Any, e.to_string()),
            Ok(Exchange { status, body }) => {
                if !expected.accepts_status(status) {
                    let text = String::from_utf8_lossy(&body);
                    (Some(status), false, format!("unexpected status {status}: {text}"))
                } else if expected == Expectation::Success {
                    match decode(route.response, body) {
                        Ok(()) => (Some(status), true, String::new()),
                        Err(e) => (Some(status), false, e.to_string()),
                    }
                } else {
                    (Some(status), true, String::new())
                }
            }
        };

        if passed {
            info!("PASS {} ({})", route.label(), describe_status(status));
        } else {
            warn!("FAIL {} ({}): {}", route.label(), describe_status(status), detail);
        }

        CheckOutcome {
            check: route.label(),
            expected: Some(expected),
            status: status.map(|status| status.as_u16()),
            passed,
            detail,
        }
    }

    async fn check_idempotency(&self, sample: &BeaconAlleleRequest) -> CheckOutcome {
        let first = self.client.query_allele_post(sample).await;
        let second = self.client.query_allele_post(sample).await;

        let (status, passed, detail) = match (first, second) {
            (Ok(first), Ok(second)) if first == second => (None, true, String::new()),
            (Ok(_), Ok(_)) => (None, false, "the two answers differ".to_string()),
            (Err(e), _) | (_, Err(e)) => (
                e.status().map(|status| status.as_u16()),
                false,
                e.to_string(),
            ),
        };

        if passed {
            info!("PASS {IDEMPOTENCY_CHECK}");
        } else {
            warn!("FAIL {IDEMPOTENCY_CHECK}: {detail}");
        }

        CheckOutcome {
            check: IDEMPOTENCY_CHECK.to_string(),
            expected: None,
            status,
            passed,
            detail,
        }
    }
}

fn decode(kind: ResponseKind, body: Bytes) -> Result<(), ComplianceError> {
    match kind {
        ResponseKind::Beacon => Beacon::decode(body).map(|_| ())?,
        ResponseKind::AlleleResponse => BeaconAlleleResponse::decode(body).map(|_| ())?,
        ResponseKind::Raw => (),
    }
    Ok(())
}

fn describe_status(status: Option<StatusCode>) -> String {
    status
        .map(|status| status.to_string())
        .unwrap_or_else(|| "no response".to_string())
}
